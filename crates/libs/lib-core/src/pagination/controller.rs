//! Page-based loader with cancellation and append semantics.
//!
//! The controller owns one [`PageState`] and at most one in-flight fetch.
//! Starting a fetch cancels the previous one and bumps a generation counter;
//! a settlement from an older generation, a cancelled token, or after
//! [`PaginationController::unmount`] is dropped without touching state.

use std::cell::{Cell, RefCell};
use std::future::Future;

use async_trait::async_trait;
use tracing::{debug, warn};

use super::cancel::{CancelHandle, CancelToken};
use super::state::PageState;
use crate::error::ApiError;

/// Source of pages for a [`PaginationController`].
///
/// `query` is the controller's current dependency value (sort, filter,
/// owning wallet...). Implementations should observe `cancel`; results of a
/// superseded fetch are discarded either way.
#[async_trait(?Send)]
pub trait PageFetcher<T, Q> {
    async fn fetch_page(
        &self,
        query: &Q,
        page: u32,
        limit: u32,
        cancel: CancelToken,
    ) -> Result<Vec<T>, ApiError>;
}

#[async_trait(?Send)]
impl<T, Q, F, Fut> PageFetcher<T, Q> for F
where
    T: 'static,
    Q: Clone + 'static,
    F: Fn(Q, u32, u32, CancelToken) -> Fut,
    Fut: Future<Output = Result<Vec<T>, ApiError>> + 'static,
{
    async fn fetch_page(
        &self,
        query: &Q,
        page: u32,
        limit: u32,
        cancel: CancelToken,
    ) -> Result<Vec<T>, ApiError> {
        (self)(query.clone(), page, limit, cancel).await
    }
}

type Observer<T> = Box<dyn Fn(&PageState<T>)>;

/// Single-threaded pagination controller; share it behind an `Rc`.
pub struct PaginationController<T, Q, F> {
    fetcher: F,
    limit: u32,
    query: RefCell<Q>,
    /// `None` until the first `sync`
    enabled: Cell<Option<bool>>,
    state: RefCell<PageState<T>>,
    inflight: RefCell<Option<CancelHandle>>,
    generation: Cell<u64>,
    unmounted: Cell<bool>,
    observer: RefCell<Option<Observer<T>>>,
}

impl<T, Q, F> PaginationController<T, Q, F>
where
    T: Clone,
    Q: Clone + PartialEq,
    F: PageFetcher<T, Q>,
{
    pub fn new(fetcher: F, limit: u32, query: Q) -> Self {
        Self {
            fetcher,
            limit: limit.max(1),
            query: RefCell::new(query),
            enabled: Cell::new(None),
            state: RefCell::new(PageState::default()),
            inflight: RefCell::new(None),
            generation: Cell::new(0),
            unmounted: Cell::new(false),
            observer: RefCell::new(None),
        }
    }

    /// Register the observer called after every state change.
    pub fn subscribe(&self, observer: impl Fn(&PageState<T>) + 'static) {
        *self.observer.borrow_mut() = Some(Box::new(observer));
    }

    pub fn snapshot(&self) -> PageState<T> {
        self.state.borrow().clone()
    }

    pub fn limit(&self) -> u32 {
        self.limit
    }

    pub fn query(&self) -> Q {
        self.query.borrow().clone()
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled.get().unwrap_or(false)
    }

    pub fn is_unmounted(&self) -> bool {
        self.unmounted.get()
    }

    /// Feed the current `enabled` flag and dependency value.
    ///
    /// The first call, and any later call where either input changed,
    /// triggers one [`refresh`](Self::refresh) when `enabled` is true.
    /// Returns whether a refresh ran.
    pub async fn sync(&self, enabled: bool, query: Q) -> bool {
        if self.unmounted.get() {
            return false;
        }

        let changed = match self.enabled.get() {
            None => true,
            Some(previous) => previous != enabled || *self.query.borrow() != query,
        };
        self.enabled.set(Some(enabled));
        *self.query.borrow_mut() = query;

        if changed && enabled {
            self.refresh().await;
            true
        } else {
            false
        }
    }

    /// Drop accumulated items and load the first page again.
    pub async fn refresh(&self) {
        if self.unmounted.get() {
            return;
        }
        self.state.borrow_mut().begin_refresh();
        self.run(1).await;
    }

    /// Append the next page. No-op while loading, after a short page, before
    /// the first load or while disabled. After a failed first page this
    /// retries page 1 instead.
    pub async fn load_more(&self) {
        if self.unmounted.get() || !self.is_enabled() {
            return;
        }
        let retry_first = {
            let state = self.state.borrow();
            state.first_page_failed() && !state.is_loading
        };
        if retry_first {
            self.refresh().await;
            return;
        }
        if !self.state.borrow().can_load_more() {
            return;
        }
        let page = self.state.borrow_mut().begin_load_more();
        self.run(page).await;
    }

    /// Cancel the in-flight fetch and freeze the controller.
    pub fn unmount(&self) {
        if self.unmounted.replace(true) {
            return;
        }
        if let Some(handle) = self.inflight.borrow_mut().take() {
            handle.cancel();
        }
        self.observer.borrow_mut().take();
    }

    async fn run(&self, page: u32) {
        let (generation, token) = self.start();
        self.notify();

        let query = self.query.borrow().clone();
        let result = self.fetcher.fetch_page(&query, page, self.limit, token).await;
        self.settle(generation, page, result);
    }

    fn start(&self) -> (u64, CancelToken) {
        let generation = self.generation.get() + 1;
        self.generation.set(generation);

        let (handle, token) = CancelToken::new();
        if let Some(previous) = self.inflight.borrow_mut().replace(handle) {
            previous.cancel();
        }
        (generation, token)
    }

    fn settle(&self, generation: u64, page: u32, result: Result<Vec<T>, ApiError>) {
        if self.unmounted.get() || generation != self.generation.get() {
            debug!("Discarding superseded result for page {}", page);
            return;
        }

        match result {
            Err(ApiError::Cancelled) => {
                debug!("Fetch of page {} cancelled", page);
                return;
            }
            Ok(items) => {
                debug!("Loaded page {} with {} items", page, items.len());
                self.state.borrow_mut().apply_page(page, items, self.limit);
            }
            Err(e) => {
                warn!("Failed to load page {}: {}", page, e);
                self.state.borrow_mut().apply_failure(page);
            }
        }

        self.inflight.borrow_mut().take();
        self.notify();
    }

    fn notify(&self) {
        if self.unmounted.get() {
            return;
        }
        let snapshot = self.state.borrow().clone();
        if let Some(observer) = self.observer.borrow().as_ref() {
            observer(&snapshot);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;
    use std::rc::Rc;

    use futures::channel::oneshot;

    use super::*;
    use crate::pagination::state::{Phase, LOAD_ERROR};

    type Reply = Result<Vec<u32>, ApiError>;

    #[derive(Debug, Clone, Copy, PartialEq)]
    enum Sort {
        Newest,
        Largest,
    }

    /// Fetcher whose pages settle only when the test releases them.
    #[derive(Default)]
    struct Gate {
        pending: RefCell<VecDeque<(u32, oneshot::Sender<Reply>)>>,
        calls: RefCell<Vec<(Sort, u32)>>,
    }

    impl Gate {
        async fn release(&self, page: u32, reply: Reply) {
            loop {
                let sender = {
                    let mut pending = self.pending.borrow_mut();
                    let index = pending.iter().position(|(p, _)| *p == page);
                    index.and_then(|i| pending.remove(i))
                };
                if let Some((_, tx)) = sender {
                    let _ = tx.send(reply);
                    return;
                }
                tokio::task::yield_now().await;
            }
        }

        fn call_count(&self) -> usize {
            self.calls.borrow().len()
        }
    }

    fn gated(
        gate: &Rc<Gate>,
    ) -> impl Fn(Sort, u32, u32, CancelToken) -> std::pin::Pin<Box<dyn Future<Output = Reply>>> {
        let gate = gate.clone();
        move |sort, page, _limit, cancel| {
            let gate = gate.clone();
            Box::pin(async move {
                let (tx, rx) = oneshot::channel();
                gate.calls.borrow_mut().push((sort, page));
                gate.pending.borrow_mut().push_back((page, tx));
                match cancel.run(rx).await? {
                    Ok(reply) => reply,
                    Err(_dropped) => Err(ApiError::Network("gate dropped".to_string())),
                }
            })
        }
    }

    /// Fetcher answering immediately from a fixed list of page sizes.
    fn scripted(
        sizes: Vec<usize>,
        calls: Rc<Cell<usize>>,
    ) -> impl Fn(Sort, u32, u32, CancelToken) -> futures::future::Ready<Reply> {
        move |_sort, page, _limit, _cancel| {
            calls.set(calls.get() + 1);
            let size = sizes.get(page as usize - 1).copied().unwrap_or(0);
            let start = (page - 1) * 100;
            futures::future::ready(Ok((start..start + size as u32).collect()))
        }
    }

    #[tokio::test]
    async fn test_three_pages_then_short_page() {
        let calls = Rc::new(Cell::new(0));
        let controller = PaginationController::new(scripted(vec![10, 10, 3], calls.clone()), 10, Sort::Newest);

        assert!(controller.sync(true, Sort::Newest).await);
        controller.load_more().await;
        controller.load_more().await;

        let state = controller.snapshot();
        assert_eq!(state.items.len(), 23);
        assert!(!state.has_more);
        assert_eq!(state.page, 3);
        assert_eq!(state.phase, Phase::Loaded);

        controller.load_more().await;
        assert_eq!(calls.get(), 3);
    }

    #[tokio::test]
    async fn test_has_more_follows_page_size() {
        let calls = Rc::new(Cell::new(0));
        let controller = PaginationController::new(scripted(vec![10], calls.clone()), 10, Sort::Newest);
        controller.sync(true, Sort::Newest).await;
        assert!(controller.snapshot().has_more);

        let controller = PaginationController::new(scripted(vec![7], calls), 10, Sort::Newest);
        controller.sync(true, Sort::Newest).await;
        assert!(!controller.snapshot().has_more);
    }

    #[tokio::test]
    async fn test_refresh_resets_to_first_page() {
        let calls = Rc::new(Cell::new(0));
        let controller = PaginationController::new(scripted(vec![10, 10, 10], calls), 10, Sort::Newest);
        controller.sync(true, Sort::Newest).await;
        controller.load_more().await;
        controller.load_more().await;
        assert_eq!(controller.snapshot().items.len(), 30);

        controller.refresh().await;
        let state = controller.snapshot();
        assert_eq!(state.items, (0..10).collect::<Vec<_>>());
        assert_eq!(state.page, 1);
    }

    #[tokio::test]
    async fn test_sort_change_refreshes_once() {
        let calls = Rc::new(Cell::new(0));
        let controller = PaginationController::new(scripted(vec![10, 10], calls.clone()), 10, Sort::Newest);
        controller.sync(true, Sort::Newest).await;
        controller.load_more().await;
        assert_eq!(controller.snapshot().items.len(), 20);
        assert_eq!(calls.get(), 2);

        assert!(!controller.sync(true, Sort::Newest).await);
        assert_eq!(calls.get(), 2);

        assert!(controller.sync(true, Sort::Largest).await);
        assert_eq!(calls.get(), 3);
        assert_eq!(controller.snapshot().items.len(), 10);
        assert_eq!(controller.query(), Sort::Largest);
    }

    #[tokio::test]
    async fn test_disabled_does_not_fetch() {
        let calls = Rc::new(Cell::new(0));
        let controller = PaginationController::new(scripted(vec![10], calls.clone()), 10, Sort::Newest);

        assert!(!controller.sync(false, Sort::Newest).await);
        controller.load_more().await;
        assert_eq!(calls.get(), 0);
        assert_eq!(controller.snapshot().phase, Phase::Idle);
        assert!(!controller.snapshot().is_loading);

        // dependency change while disabled is picked up on enable
        assert!(!controller.sync(false, Sort::Largest).await);
        assert!(controller.sync(true, Sort::Largest).await);
        assert_eq!(calls.get(), 1);

        assert!(!controller.sync(false, Sort::Largest).await);
        assert_eq!(calls.get(), 1);
    }

    #[tokio::test]
    async fn test_refresh_supersedes_pending_load_more() {
        let gate = Rc::new(Gate::default());
        let controller = PaginationController::new(gated(&gate), 2, Sort::Newest);

        futures::join!(controller.sync(true, Sort::Newest), gate.release(1, Ok(vec![1, 2])));
        assert_eq!(controller.snapshot().items, vec![1, 2]);

        futures::join!(controller.load_more(), controller.refresh(), async {
            gate.release(1, Ok(vec![7, 8])).await;
            // the superseded page-2 fetch was cancelled, its sender dropped
            gate.release(2, Ok(vec![3, 4])).await;
        });

        let state = controller.snapshot();
        assert_eq!(state.items, vec![7, 8]);
        assert_eq!(state.page, 1);
        assert!(!state.is_loading);
        assert_eq!(gate.call_count(), 3);
    }

    #[tokio::test]
    async fn test_load_more_while_pending_is_noop() {
        let gate = Rc::new(Gate::default());
        let controller = PaginationController::new(gated(&gate), 2, Sort::Newest);

        futures::join!(controller.sync(true, Sort::Newest), gate.release(1, Ok(vec![1, 2])));

        futures::join!(
            controller.load_more(),
            controller.load_more(),
            controller.load_more(),
            gate.release(2, Ok(vec![3, 4])),
        );

        assert_eq!(gate.call_count(), 2);
        assert_eq!(controller.snapshot().items, vec![1, 2, 3, 4]);
    }

    #[tokio::test]
    async fn test_failure_keeps_previous_items() {
        let gate = Rc::new(Gate::default());
        let controller = PaginationController::new(gated(&gate), 2, Sort::Newest);

        futures::join!(controller.sync(true, Sort::Newest), gate.release(1, Ok(vec![1, 2])));
        futures::join!(
            controller.load_more(),
            gate.release(2, Err(ApiError::Network("connection refused".to_string())))
        );

        let state = controller.snapshot();
        assert_eq!(state.items, vec![1, 2]);
        assert!(state.has_more);
        assert!(!state.is_loading);
        assert_eq!(state.error.as_deref(), Some(LOAD_ERROR));
        assert_eq!(state.phase, Phase::Failed);

        // retry asks for the same page
        futures::join!(controller.load_more(), gate.release(2, Ok(vec![3])));
        let state = controller.snapshot();
        assert_eq!(state.items, vec![1, 2, 3]);
        assert_eq!(state.error, None);
        assert!(!state.has_more);
    }

    #[tokio::test]
    async fn test_load_more_after_failed_first_page_retries_page_one() {
        let gate = Rc::new(Gate::default());
        let controller = PaginationController::new(gated(&gate), 2, Sort::Newest);

        futures::join!(
            controller.sync(true, Sort::Newest),
            gate.release(1, Err(ApiError::Network("connection refused".to_string())))
        );

        let state = controller.snapshot();
        assert_eq!(state.phase, Phase::Failed);
        assert_eq!(state.page, 1);
        assert!(state.items.is_empty());
        assert!(!state.can_load_more());

        futures::join!(controller.load_more(), gate.release(1, Ok(vec![1, 2])));

        assert_eq!(*gate.calls.borrow(), vec![(Sort::Newest, 1), (Sort::Newest, 1)]);
        let state = controller.snapshot();
        assert_eq!(state.items, vec![1, 2]);
        assert_eq!(state.page, 1);
        assert_eq!(state.error, None);
        assert!(state.can_load_more());
    }

    #[tokio::test]
    async fn test_unmount_cancels_without_mutation() {
        let gate = Rc::new(Gate::default());
        let controller = PaginationController::new(gated(&gate), 2, Sort::Newest);
        let notified = Rc::new(Cell::new(0));
        let counter = notified.clone();
        controller.subscribe(move |_| counter.set(counter.get() + 1));

        futures::join!(controller.sync(true, Sort::Newest), async {
            while gate.call_count() == 0 {
                tokio::task::yield_now().await;
            }
            let before = controller.snapshot();
            controller.unmount();
            assert_eq!(controller.snapshot(), before);
        });

        let state = controller.snapshot();
        assert!(state.items.is_empty());
        assert!(state.is_loading);
        assert_eq!(state.error, None);
        // only the loading transition was observed
        assert_eq!(notified.get(), 1);

        controller.refresh().await;
        assert_eq!(gate.call_count(), 1);
    }

    #[tokio::test]
    async fn test_stale_result_ignored_without_cooperative_cancel() {
        let senders: Rc<RefCell<Vec<oneshot::Sender<Reply>>>> = Rc::default();
        let queue = senders.clone();
        let controller = PaginationController::new(
            move |_sort: Sort, _page: u32, _limit: u32, _cancel: CancelToken| {
                let (tx, rx) = oneshot::channel();
                queue.borrow_mut().push(tx);
                async move { rx.await.unwrap_or_else(|_| Err(ApiError::Cancelled)) }
            },
            10,
            Sort::Newest,
        );

        futures::join!(controller.sync(true, Sort::Newest), controller.sync(true, Sort::Largest), async {
            while senders.borrow().len() < 2 {
                tokio::task::yield_now().await;
            }
            let mut senders = senders.borrow_mut();
            let newer = senders.pop();
            let older = senders.pop();
            if let Some(tx) = newer {
                let _ = tx.send(Ok(vec![2]));
            }
            if let Some(tx) = older {
                let _ = tx.send(Ok(vec![1]));
            }
        });

        assert_eq!(controller.snapshot().items, vec![2]);
    }
}
