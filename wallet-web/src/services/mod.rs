//! Browser services

pub mod download;
pub mod storage;

pub use download::download_bytes;
pub use storage::BrowserStorage;
