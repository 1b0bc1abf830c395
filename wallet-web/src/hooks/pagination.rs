//! Reactive binding of a [`PaginationController`].
//!
//! The controller lives in a local stored value. An effect feeds it the
//! tracked `(enabled, query)` inputs, its observer mirrors every state change
//! into a signal, and the owner's cleanup unmounts it.

use std::rc::Rc;

use leptos::prelude::*;
use lib_core::pagination::{PageFetcher, PageState, PaginationController};

pub struct ApiPagination<T, Q, F>
where
    T: Send + Sync + 'static,
    Q: 'static,
    F: 'static,
{
    pub state: RwSignal<PageState<T>>,
    controller: StoredValue<Rc<PaginationController<T, Q, F>>, LocalStorage>,
}

impl<T, Q, F> Clone for ApiPagination<T, Q, F>
where
    T: Send + Sync + 'static,
    Q: 'static,
    F: 'static,
{
    fn clone(&self) -> Self {
        *self
    }
}

impl<T, Q, F> Copy for ApiPagination<T, Q, F>
where
    T: Send + Sync + 'static,
    Q: 'static,
    F: 'static,
{
}

impl<T, Q, F> ApiPagination<T, Q, F>
where
    T: Clone + Send + Sync + 'static,
    Q: Clone + PartialEq + 'static,
    F: PageFetcher<T, Q> + 'static,
{
    pub fn load_more(&self) {
        if let Some(controller) = self.controller.try_get_value() {
            leptos::task::spawn_local(async move { controller.load_more().await });
        }
    }

    pub fn refresh(&self) {
        if let Some(controller) = self.controller.try_get_value() {
            leptos::task::spawn_local(async move { controller.refresh().await });
        }
    }
}

/// Paginate `fetcher` with pages of `limit`; `inputs` is re-run reactively
/// and any change of its `(enabled, query)` restarts from page 1.
pub fn use_api_pagination<T, Q, F>(
    fetcher: F,
    limit: u32,
    inputs: impl Fn() -> (bool, Q) + 'static,
) -> ApiPagination<T, Q, F>
where
    T: Clone + Send + Sync + 'static,
    Q: Clone + PartialEq + 'static,
    F: PageFetcher<T, Q> + 'static,
{
    let (_, initial_query) = untrack(&inputs);
    let controller = Rc::new(PaginationController::new(fetcher, limit, initial_query));

    let state = RwSignal::new(controller.snapshot());
    controller.subscribe(move |snapshot| {
        state.try_set(snapshot.clone());
    });

    let controller = StoredValue::new_local(controller);

    Effect::new(move |_| {
        let (enabled, query) = inputs();
        if let Some(controller) = controller.try_get_value() {
            leptos::task::spawn_local(async move {
                controller.sync(enabled, query).await;
            });
        }
    });

    on_cleanup(move || {
        controller.try_with_value(|controller| controller.unmount());
    });

    ApiPagination { state, controller }
}
