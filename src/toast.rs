use std::time::{Duration, Instant};

pub const DEFAULT_TOAST_DURATION: Duration = Duration::from_secs(4);
pub const DEFAULT_MAX_TOASTS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Info,
    Success,
    Warning,
    Error,
}

impl ToastLevel {
    pub fn title(&self) -> &'static str {
        match self {
            ToastLevel::Info => "Info",
            ToastLevel::Success => "Success",
            ToastLevel::Warning => "Warning",
            ToastLevel::Error => "Error",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    pub level: ToastLevel,
    pub created_at: Instant,
    /// `None` when the duration runs past what `Instant` can represent.
    pub expires_at: Option<Instant>,
}

impl Toast {
    pub fn new(message: impl Into<String>, level: ToastLevel, duration: Duration) -> Self {
        let now = Instant::now();
        Self {
            message: message.into(),
            level,
            created_at: now,
            expires_at: now.checked_add(duration),
        }
    }

    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Instant::now())
    }

    pub fn is_expired_at(&self, now: Instant) -> bool {
        self.expires_at.is_some_and(|at| now >= at)
    }
}

/// Newest-first stack of visible toasts.
#[derive(Debug)]
pub struct ToastQueue {
    toasts: Vec<Toast>,
    duration: Duration,
    max_visible: usize,
}

impl Default for ToastQueue {
    fn default() -> Self {
        Self::new(DEFAULT_TOAST_DURATION, DEFAULT_MAX_TOASTS)
    }
}

impl ToastQueue {
    pub fn new(duration: Duration, max_visible: usize) -> Self {
        Self {
            toasts: Vec::new(),
            duration,
            max_visible: max_visible.max(1),
        }
    }

    pub fn push(&mut self, toast: Toast) {
        log::debug!("Toast [{}]: {}", toast.level.title(), toast.message);
        self.toasts.insert(0, toast);
        self.toasts.truncate(self.max_visible);
    }

    pub fn notify(&mut self, message: impl Into<String>, level: ToastLevel) {
        self.push(Toast::new(message, level, self.duration));
    }

    pub fn info(&mut self, message: impl Into<String>) {
        self.notify(message, ToastLevel::Info);
    }

    pub fn success(&mut self, message: impl Into<String>) {
        self.notify(message, ToastLevel::Success);
    }

    pub fn warn(&mut self, message: impl Into<String>) {
        self.notify(message, ToastLevel::Warning);
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.notify(message, ToastLevel::Error);
    }

    /// Drop expired toasts, returns true if any were removed
    pub fn prune(&mut self) -> bool {
        self.prune_at(Instant::now())
    }

    pub fn prune_at(&mut self, now: Instant) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|t| !t.is_expired_at(now));
        self.toasts.len() != before
    }

    pub fn dismiss_latest(&mut self) -> bool {
        if self.toasts.is_empty() {
            false
        } else {
            self.toasts.remove(0);
            true
        }
    }

    pub fn latest(&self) -> Option<&Toast> {
        self.toasts.first()
    }

    pub fn all(&self) -> &[Toast] {
        &self.toasts
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }
}
