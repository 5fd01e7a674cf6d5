use std::any::Any;
use std::time::Duration;

use chrono::{DateTime, Utc};
use roster_states::{State, Updater};

/// How long a toast stays on screen.
pub const TOAST_TTL: Duration = Duration::from_secs(4);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
    /// Frame time at which the toast was first seen. Commands cannot read the
    /// frame clock, so this is stamped by the first [`Toasts::expire`].
    pub created_at: Option<DateTime<Utc>>,
}

/// Transient notifications shown in a corner overlay.
#[derive(Debug, Clone, Default)]
pub struct Toasts {
    items: Vec<Toast>,
    next_id: u64,
}

impl Toasts {
    pub fn push(&mut self, kind: ToastKind, message: impl Into<String>) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.items.push(Toast {
            id,
            kind,
            message: message.into(),
            created_at: None,
        });
        id
    }

    pub fn items(&self) -> &[Toast] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|toast| toast.id != id);
    }

    /// Whether [`Toasts::expire`] would change anything at `now`.
    pub fn needs_expire(&self, now: DateTime<Utc>) -> bool {
        self.items.iter().any(|toast| match toast.created_at {
            None => true,
            Some(created) => is_expired(created, now),
        })
    }

    /// Stamp new toasts with `now` and drop those older than [`TOAST_TTL`].
    pub fn expire(&mut self, now: DateTime<Utc>) {
        for toast in &mut self.items {
            toast.created_at.get_or_insert(now);
        }
        self.items.retain(|toast| {
            toast
                .created_at
                .is_none_or(|created| !is_expired(created, now))
        });
    }

    pub fn last_message(&self) -> Option<&str> {
        self.items.last().map(|toast| toast.message.as_str())
    }
}

fn is_expired(created: DateTime<Utc>, now: DateTime<Utc>) -> bool {
    (now - created)
        .to_std()
        .map(|age| age >= TOAST_TTL)
        .unwrap_or(false)
}

impl State for Toasts {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

pub fn notify_success(updater: &Updater, message: impl Into<String>) {
    notify(updater, ToastKind::Success, message.into());
}

pub fn notify_error(updater: &Updater, message: impl Into<String>) {
    notify(updater, ToastKind::Error, message.into());
}

fn notify(updater: &Updater, kind: ToastKind, message: String) {
    updater.update::<Toasts>(move |toasts| {
        toasts.push(kind, message);
    });
}
