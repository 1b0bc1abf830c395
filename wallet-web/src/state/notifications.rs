//! Toast notifications

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use lib_core::notify::{Notification, Notifier, Severity};

use crate::utils::constants::{ERROR_TOAST_MS, SUCCESS_TOAST_MS};

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub severity: Severity,
    pub message: String,
}

/// Toast queue shared through context.
#[derive(Clone, Copy)]
pub struct ToastContext {
    pub toasts: RwSignal<Vec<Toast>>,
    next_id: StoredValue<u64>,
}

impl ToastContext {
    pub fn new() -> Self {
        Self {
            toasts: RwSignal::new(Vec::new()),
            next_id: StoredValue::new(0),
        }
    }

    /// Show a toast and schedule its dismissal.
    pub fn push(&self, notification: Notification) {
        let id = self.next_id.get_value();
        self.next_id.set_value(id + 1);

        let lifetime = match notification.severity {
            Severity::Error => ERROR_TOAST_MS,
            Severity::Success => SUCCESS_TOAST_MS,
        };
        self.toasts.update(|toasts| {
            toasts.push(Toast { id, severity: notification.severity, message: notification.message })
        });

        let context = *self;
        leptos::task::spawn_local(async move {
            TimeoutFuture::new(lifetime).await;
            context.dismiss(id);
        });
    }

    pub fn success(&self, message: impl Into<String>) {
        self.push(Notification::success(message));
    }

    pub fn error(&self, message: impl Into<String>) {
        self.push(Notification::error(message));
    }

    pub fn dismiss(&self, id: u64) {
        self.toasts.try_update(|toasts| toasts.retain(|toast| toast.id != id));
    }
}

/// Routes API client notifications into the toast queue.
pub struct ToastNotifier {
    context: ToastContext,
}

impl ToastNotifier {
    pub fn new(context: ToastContext) -> Self {
        Self { context }
    }
}

impl Notifier for ToastNotifier {
    fn notify(&self, notification: Notification) {
        self.context.push(notification);
    }
}

pub fn provide_toast_context() -> ToastContext {
    let context = ToastContext::new();
    provide_context(context);
    context
}

pub fn use_toasts() -> ToastContext {
    expect_context::<ToastContext>()
}
