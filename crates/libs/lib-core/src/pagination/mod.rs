//! Paginated fetching: cancellation tokens, page state and the controller
//! tying them together.

pub mod cancel;
pub mod controller;
pub mod state;

pub use cancel::{CancelHandle, CancelToken};
pub use controller::{PageFetcher, PaginationController};
pub use state::{PageState, Phase, LOAD_ERROR};
