//! Trailing-edge debounce for form submissions.
//!
//! Every call takes a ticket; after the wait only the newest ticket runs its
//! action. [`Debouncer::cancel`] invalidates all outstanding tickets, which is
//! what a view does on teardown. The platform supplies the sleep future
//! (a browser timeout, or a tokio timer).

use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Debouncer {
    wait: Duration,
    generation: Arc<AtomicU64>,
}

/// Proof of one debounced call.
#[derive(Debug)]
pub struct DebounceTicket {
    generation: u64,
    current: Arc<AtomicU64>,
}

impl DebounceTicket {
    pub fn is_current(&self) -> bool {
        self.current.load(Ordering::SeqCst) == self.generation
    }
}

impl Debouncer {
    pub fn new(wait: Duration) -> Self {
        Self { wait, generation: Arc::new(AtomicU64::new(0)) }
    }

    pub fn wait(&self) -> Duration {
        self.wait
    }

    /// Supersede every earlier ticket.
    pub fn ticket(&self) -> DebounceTicket {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        DebounceTicket { generation, current: self.generation.clone() }
    }

    pub fn cancel(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
    }

    /// Wait out `sleep`, then run `action` if no newer call arrived meanwhile.
    pub async fn run<Sl, F, Fut>(&self, sleep: Sl, action: F) -> Option<Fut::Output>
    where
        Sl: Future<Output = ()>,
        F: FnOnce() -> Fut,
        Fut: Future,
    {
        let ticket = self.ticket();
        sleep.await;
        if ticket.is_current() {
            Some(action().await)
        } else {
            None
        }
    }
}
