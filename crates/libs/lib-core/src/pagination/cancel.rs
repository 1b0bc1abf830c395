//! Cooperative cancellation for in-flight requests.
//!
//! A [`CancelToken`] travels with the request; the matching [`CancelHandle`]
//! stays with whoever owns the request and may abort it at any time. Aborting
//! makes the guarded future resolve to [`ApiError::Cancelled`] at its next
//! poll and drops the inner future (which, for an HTTP request, aborts the
//! underlying fetch).

use std::future::Future;

use futures::future::{AbortHandle, AbortRegistration, Abortable};

use crate::error::ApiError;

/// Request-side half of a cancellation pair.
#[derive(Debug)]
pub struct CancelToken {
    handle: AbortHandle,
    registration: AbortRegistration,
}

/// Owner-side half of a cancellation pair.
#[derive(Debug, Clone)]
pub struct CancelHandle {
    handle: AbortHandle,
}

impl CancelToken {
    /// Create a linked handle/token pair.
    pub fn new() -> (CancelHandle, CancelToken) {
        let (handle, registration) = AbortHandle::new_pair();
        (
            CancelHandle { handle: handle.clone() },
            CancelToken { handle, registration },
        )
    }

    pub fn is_cancelled(&self) -> bool {
        self.handle.is_aborted()
    }

    pub fn handle(&self) -> CancelHandle {
        CancelHandle { handle: self.handle.clone() }
    }

    /// Drive `fut` unless the token is cancelled first.
    pub async fn run<F: Future>(self, fut: F) -> Result<F::Output, ApiError> {
        Abortable::new(fut, self.registration)
            .await
            .map_err(|_aborted| ApiError::Cancelled)
    }
}

impl CancelHandle {
    pub fn cancel(&self) {
        self.handle.abort();
    }

    pub fn is_cancelled(&self) -> bool {
        self.handle.is_aborted()
    }
}
