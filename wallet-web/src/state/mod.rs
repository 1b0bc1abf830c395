//! Application state shared through context

pub mod notifications;
pub mod wallet;
