//! Toast notifications.

use crafto_core::{Notice, NoticeLevel, Notifier};
use dioxus::prelude::*;
use dioxus_primitives::toast::{use_toast, ToastOptions};

/// Forwards flow notices to the toast stack of the enclosing `ToastProvider`.
#[derive(Clone, Copy)]
pub struct ToastNotifier {
    show: Callback<Notice>,
}

impl Notifier for ToastNotifier {
    fn notify(&self, notice: Notice) {
        self.show.call(notice);
    }
}

pub fn use_toast_notifier() -> ToastNotifier {
    let toasts = use_toast();
    let show = use_callback(move |Notice { level, message }: Notice| match level {
        NoticeLevel::Info => toasts.info(message, ToastOptions::new()),
        NoticeLevel::Success => toasts.success(message, ToastOptions::new()),
        NoticeLevel::Warning => toasts.warning(message, ToastOptions::new()),
        NoticeLevel::Error => toasts.error(message, ToastOptions::new()),
    });
    ToastNotifier { show }
}
