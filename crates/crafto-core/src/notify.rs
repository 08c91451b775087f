//! User-facing notifications.
//!
//! Flows never talk to a toast widget directly; they report through a
//! [`Notifier`] so the desktop app can render toasts, the CLI can print, and
//! tests can record.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Success,
    Warning,
    Error,
}

/// A transient message for the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

pub trait Notifier {
    fn notify(&self, notice: Notice);

    fn info(&self, message: impl Into<String>) {
        self.notify(Notice {
            level: NoticeLevel::Info,
            message: message.into(),
        });
    }

    fn success(&self, message: impl Into<String>) {
        self.notify(Notice {
            level: NoticeLevel::Success,
            message: message.into(),
        });
    }

    fn warning(&self, message: impl Into<String>) {
        self.notify(Notice {
            level: NoticeLevel::Warning,
            message: message.into(),
        });
    }

    fn error(&self, message: impl Into<String>) {
        self.notify(Notice {
            level: NoticeLevel::Error,
            message: message.into(),
        });
    }
}
