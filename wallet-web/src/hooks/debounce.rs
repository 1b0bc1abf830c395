use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use lib_core::debounce::Debouncer;

use crate::state::wallet::use_wallet_context;

/// A debouncer using the configured window, cancelled when the owner is
/// disposed so no submission fires after the form is gone.
pub fn use_debouncer() -> StoredValue<Debouncer> {
    let wait = use_wallet_context().config().debounce();
    let debouncer = StoredValue::new(Debouncer::new(wait));
    on_cleanup(move || {
        debouncer.try_with_value(|debouncer| debouncer.cancel());
    });
    debouncer
}

pub fn sleep_for(debouncer: &Debouncer) -> TimeoutFuture {
    TimeoutFuture::new(u32::try_from(debouncer.wait().as_millis()).unwrap_or(u32::MAX))
}
