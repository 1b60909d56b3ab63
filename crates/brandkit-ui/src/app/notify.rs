//! Toast-backed notifier.

use crate::core::error::PersonalizationError;
use crate::core::ports::{Notice, Notifier};
use crate::core::store::{AppStore, ToastKind};
use gloo::console;
use yewdux::prelude::Dispatch;

const ERROR_TOAST_MS: u32 = 5000;

/// [`Notifier`] that queues success toasts in the app store.
#[derive(Clone)]
pub(crate) struct StoreNotifier {
    dispatch: Dispatch<AppStore>,
}

impl StoreNotifier {
    pub(crate) const fn new(dispatch: Dispatch<AppStore>) -> Self {
        Self { dispatch }
    }
}

impl Notifier for StoreNotifier {
    fn notify(&self, notice: Notice) {
        self.dispatch.reduce_mut(|store| {
            store.toasts.push(ToastKind::Success, notice);
        });
    }
}

/// Log `err` and surface it as an error toast.
pub(crate) fn report_error(dispatch: &Dispatch<AppStore>, context: &str, err: &PersonalizationError) {
    let message = format!("{context}: {err}");
    console::error!(message.clone());
    dispatch.reduce_mut(|store| {
        store.toasts.push(
            ToastKind::Error,
            Notice {
                message,
                action: crate::core::config::NOTICE_ACTION.to_string(),
                duration_ms: ERROR_TOAST_MS,
                position: None,
            },
        );
    });
}
