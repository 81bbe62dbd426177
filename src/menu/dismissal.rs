//! Dismissal delay policy and the single pending-dismissal slot

use serde::Serialize;
use std::fmt;
use std::time::{Duration, Instant};

use super::section::{ItemId, SectionId};

/// Which delay a dismissal was scheduled with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DismissalDelay {
    /// Pointer appears to be moving into the submenu (long delay)
    TowardSubmenu,

    /// Pointer appears to be moving elsewhere (short delay)
    Away,
}

impl DismissalDelay {
    /// Pick the delay from the heading-toward estimate
    pub fn for_heading(heading_toward_submenu: bool) -> Self {
        if heading_toward_submenu {
            Self::TowardSubmenu
        } else {
            Self::Away
        }
    }
}

impl fmt::Display for DismissalDelay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TowardSubmenu => write!(f, "toward-submenu"),
            Self::Away => write!(f, "away"),
        }
    }
}

/// A scheduled, not yet fired dismissal
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingDismissal {
    /// Section to collapse
    pub section: SectionId,
    /// Delay policy that was applied
    pub delay: DismissalDelay,
    /// When it was scheduled
    pub scheduled_at: Instant,
    /// When it fires
    pub deadline: Instant,
}

impl PendingDismissal {
    /// Whether the deadline has been reached at `now`
    pub fn is_due(&self, now: Instant) -> bool {
        self.deadline <= now
    }
}

/// A dismissal that fired
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Dismissal {
    /// Section that was collapsed
    pub section: SectionId,
    /// Item that was expanded before firing (None if the section was idle)
    pub cleared_item: Option<ItemId>,
    /// Delay policy the dismissal was scheduled with
    pub delay: DismissalDelay,
}

/// Owned slot holding at most one pending dismissal
///
/// Scheduling replaces (cancels) whatever was pending, so two dismissals
/// can never be live at once and a superseded one can never fire.
#[derive(Debug, Default)]
pub struct DismissalTimer {
    pending: Option<PendingDismissal>,
}

impl DismissalTimer {
    /// Create an empty slot
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule a dismissal of `section` after `after`
    ///
    /// Returns the dismissal it superseded, if any.
    pub fn schedule(
        &mut self,
        section: SectionId,
        delay: DismissalDelay,
        after: Duration,
        now: Instant,
    ) -> Option<PendingDismissal> {
        let superseded = self.cancel();
        self.pending = Some(PendingDismissal {
            section,
            delay,
            scheduled_at: now,
            deadline: now + after,
        });
        superseded
    }

    /// Cancel the pending dismissal, returning it
    pub fn cancel(&mut self) -> Option<PendingDismissal> {
        self.pending.take()
    }

    /// Remove and return the pending dismissal if it is due at `now`
    pub fn take_due(&mut self, now: Instant) -> Option<PendingDismissal> {
        if self.pending.as_ref().is_some_and(|p| p.is_due(now)) {
            self.pending.take()
        } else {
            None
        }
    }

    /// Pending dismissal, if any
    pub fn pending(&self) -> Option<&PendingDismissal> {
        self.pending.as_ref()
    }

    /// Deadline of the pending dismissal
    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|p| p.deadline)
    }

    /// Whether a dismissal is pending
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}
