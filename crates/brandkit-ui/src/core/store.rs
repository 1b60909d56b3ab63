//! App-wide yewdux store.
//!
//! # Design
//! - Keep shared UI state in one store to avoid ad-hoc contexts.
//! - The header reads `branding`; the toast host reads `toasts`.
//! - A toast's timer starts once, when its id first appears, and is not restarted by later pushes.

use std::collections::BTreeSet;

use crate::core::ports::{Notice, NoticePosition};
use crate::core::setting::Setting;
use yewdux::store::Store;

/// Maximum number of toasts kept on screen.
pub const MAX_TOASTS: usize = 4;

/// Global application store for shared state.
#[derive(Clone, Debug, PartialEq, Eq, Store, Default)]
pub struct AppStore {
    /// Branding currently applied to the document.
    pub branding: Setting,
    /// Visible notifications.
    pub toasts: ToastQueue,
}

/// Toast variants used across the UI.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    /// Informational toast.
    Info,
    /// Success toast.
    Success,
    /// Error toast.
    Error,
}

impl ToastKind {
    /// CSS modifier for the alert variant.
    #[must_use]
    pub const fn as_class(self) -> &'static str {
        match self {
            Self::Info => "alert-info",
            Self::Success => "alert-success",
            Self::Error => "alert-error",
        }
    }
}

/// Toast payload rendered by the host.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    /// Monotonic toast identifier.
    pub id: u64,
    /// Display message.
    pub message: String,
    /// Dismiss action label.
    pub action: String,
    /// Visible duration in milliseconds.
    pub duration_ms: u32,
    /// Placement override.
    pub position: Option<NoticePosition>,
    /// Severity classification.
    pub kind: ToastKind,
}

/// Bounded, ordered toast list with id allocation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ToastQueue {
    /// Toasts oldest first.
    pub items: Vec<Toast>,
    next_id: u64,
}

impl ToastQueue {
    /// Append a toast for `notice`, dropping the oldest beyond [`MAX_TOASTS`].
    pub fn push(&mut self, kind: ToastKind, notice: Notice) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.items.push(Toast {
            id,
            message: notice.message,
            action: notice.action,
            duration_ms: notice.duration_ms,
            position: notice.position,
            kind,
        });
        if self.items.len() > MAX_TOASTS {
            let drain = self.items.len() - MAX_TOASTS;
            self.items.drain(0..drain);
        }
        id
    }

    /// Remove the toast `id` if it is still visible.
    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|toast| toast.id != id);
    }
}

/// Changes the toast host makes to its running timers.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TimerPlan {
    /// New toast ids with their durations in milliseconds.
    pub arm: Vec<(u64, u32)>,
    /// Ids whose timers belong to toasts no longer visible.
    pub cancel: Vec<u64>,
}

/// Diff the ids with running timers against the visible `toasts`.
#[must_use]
pub fn plan_timers<I>(armed: I, toasts: &[Toast]) -> TimerPlan
where
    I: IntoIterator<Item = u64>,
{
    let armed: BTreeSet<u64> = armed.into_iter().collect();
    let arm = toasts
        .iter()
        .filter(|toast| !armed.contains(&toast.id))
        .map(|toast| (toast.id, toast.duration_ms))
        .collect();
    let cancel = armed
        .into_iter()
        .filter(|id| toasts.iter().all(|toast| toast.id != *id))
        .collect();
    TimerPlan { arm, cancel }
}
