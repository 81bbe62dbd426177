//! Hover-Intent Controller
//!
//! Per-section state machine deciding which item's submenu is expanded.
//!
//! # States
//!
//! ```text
//!            hover(S, item)                 hover(S, other)
//!   Idle ─────────────────────> Active(item) ───────────────> Active(other)
//!    ^                            │    │
//!    │   dismissal fires          │    │ leave_item(S)
//!    ├────────────────────────────┘    └──> schedule 400ms / 200ms
//!    │   leave_section(S)                   (cancelled by hover,
//!    └───────────────────── (immediate)      re_enter_submenu, leave_section)
//! ```
//!
//! Opening is always immediate. Only closing is delayed, and only one
//! dismissal may be pending menu-wide.

use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};
use tracing::{debug, warn};

use super::dismissal::{Dismissal, DismissalDelay, DismissalTimer, PendingDismissal};
use super::section::{HoveredItem, ItemId, MenuSnapshot, SectionId, SectionSnapshot, SectionState};
use crate::pointer::{PointerTracker, TrackerConfig};

/// Configuration for the hover-intent controller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HoverIntentConfig {
    /// Dismissal delay when the pointer is heading toward the submenu (ms)
    #[serde(default = "default_toward_submenu_delay_ms")]
    pub toward_submenu_delay_ms: u64,

    /// Dismissal delay otherwise (ms)
    #[serde(default = "default_away_delay_ms")]
    pub away_delay_ms: u64,

    /// Pointer tracker configuration
    #[serde(default)]
    pub tracker: TrackerConfig,
}

fn default_toward_submenu_delay_ms() -> u64 {
    400
}
fn default_away_delay_ms() -> u64 {
    200
}

impl Default for HoverIntentConfig {
    fn default() -> Self {
        Self {
            toward_submenu_delay_ms: default_toward_submenu_delay_ms(),
            away_delay_ms: default_away_delay_ms(),
            tracker: TrackerConfig::default(),
        }
    }
}

impl HoverIntentConfig {
    /// Duration for a delay policy
    pub fn delay_for(&self, delay: DismissalDelay) -> Duration {
        match delay {
            DismissalDelay::TowardSubmenu => Duration::from_millis(self.toward_submenu_delay_ms),
            DismissalDelay::Away => Duration::from_millis(self.away_delay_ms),
        }
    }
}

/// Controller counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct HoverIntentStats {
    /// Item hovers handled
    pub hovers: u64,
    /// Clicks handled
    pub clicks: u64,
    /// Dismissals scheduled with the long delay
    pub long_delays: u64,
    /// Dismissals scheduled with the short delay
    pub short_delays: u64,
    /// Scheduled dismissals that fired
    pub dismissals_fired: u64,
    /// Scheduled dismissals cancelled before firing
    pub dismissals_cancelled: u64,
    /// Undelayed section-leave dismissals
    pub immediate_dismissals: u64,
}

/// Hover-intent state machine for a fixed set of sections
#[derive(Debug)]
pub struct HoverIntentController {
    /// Configuration
    config: HoverIntentConfig,

    /// Pointer history
    tracker: PointerTracker,

    /// Per-section state, in registration order
    sections: Vec<(SectionId, SectionState)>,

    /// Most recent hover target
    hovered: HoveredItem,

    /// The one pending dismissal slot
    timer: DismissalTimer,

    /// Counters
    stats: HoverIntentStats,
}

impl HoverIntentController {
    /// Create a controller for `sections`
    ///
    /// Duplicate section ids are registered once.
    pub fn new<I>(config: HoverIntentConfig, sections: I) -> Self
    where
        I: IntoIterator<Item = SectionId>,
    {
        let mut registered: Vec<(SectionId, SectionState)> = Vec::new();
        for id in sections {
            if !registered.iter().any(|(s, _)| s == &id) {
                registered.push((id, SectionState::Idle));
            }
        }

        debug!(
            "Hover-intent controller: {} sections, delays {}ms/{}ms",
            registered.len(),
            config.toward_submenu_delay_ms,
            config.away_delay_ms
        );

        Self {
            tracker: PointerTracker::new(config.tracker.clone()),
            config,
            sections: registered,
            hovered: HoveredItem::default(),
            timer: DismissalTimer::new(),
            stats: HoverIntentStats::default(),
        }
    }

    /// Feed a pointer move to the tracker
    pub fn on_pointer_move(&mut self, x: f64, y: f64, now: Instant) {
        self.tracker.on_pointer_move(x, y, now);
    }

    /// Pointer entered `item` in `section`: expand it immediately
    pub fn hover(&mut self, section: &SectionId, item: ItemId) {
        if !self.has_section(section) {
            warn!("Ignoring hover on unknown section '{}'", section);
            return;
        }

        self.cancel_pending();
        self.stats.hovers += 1;
        self.hovered = HoveredItem::new(section.clone(), item.clone());

        if let Some(state) = self.state_mut(section) {
            if state.active_item() != Some(&item) {
                debug!("Section '{}': {:?} -> Active({})", section, state, item);
            }
            *state = SectionState::Active(item);
        }
    }

    /// Pointer left an item or its expanded submenu: schedule a dismissal
    ///
    /// The delay depends on whether the pointer is heading toward the
    /// submenu at this moment.
    pub fn leave_item(&mut self, section: &SectionId, now: Instant) {
        if !self.has_section(section) {
            warn!("Ignoring leave on unknown section '{}'", section);
            return;
        }

        self.cancel_pending();

        let delay = DismissalDelay::for_heading(self.tracker.estimate_heading_toward_submenu());
        let after = self.config.delay_for(delay);
        match delay {
            DismissalDelay::TowardSubmenu => self.stats.long_delays += 1,
            DismissalDelay::Away => self.stats.short_delays += 1,
        }

        debug!(
            "Section '{}': dismissal scheduled in {}ms ({})",
            section,
            after.as_millis(),
            delay
        );
        self.timer.schedule(section.clone(), delay, after, now);
    }

    /// Pointer entered the already expanded submenu: keep it open
    pub fn re_enter_submenu(&mut self, section: &SectionId) {
        if !self.has_section(section) {
            warn!("Ignoring submenu enter on unknown section '{}'", section);
            return;
        }

        if self.cancel_pending() {
            debug!("Section '{}': pointer back in submenu, dismissal cancelled", section);
        }
    }

    /// Pointer left the section entirely: collapse without delay
    pub fn leave_section(&mut self, section: &SectionId) {
        if !self.has_section(section) {
            warn!("Ignoring leave on unknown section '{}'", section);
            return;
        }

        self.cancel_pending();
        self.stats.immediate_dismissals += 1;
        self.hovered = HoveredItem::default();

        if let Some(state) = self.state_mut(section) {
            if state.is_active() {
                debug!("Section '{}': left section, {:?} -> Idle", section, state);
            }
            *state = SectionState::Idle;
        }
    }

    /// Toggle `item` in `section` (touch and other no-hover contexts)
    pub fn click(&mut self, section: &SectionId, item: ItemId) {
        let Some(state) = self.state_mut(section) else {
            warn!("Ignoring click on unknown section '{}'", section);
            return;
        };

        let next = if state.active_item() == Some(&item) {
            SectionState::Idle
        } else {
            SectionState::Active(item)
        };
        debug!("Section '{}': click {:?} -> {:?}", section, state, next);
        *state = next;
        self.stats.clicks += 1;
    }

    /// Fire the pending dismissal if it is due at `now`
    pub fn poll(&mut self, now: Instant) -> Option<Dismissal> {
        let PendingDismissal { section, delay, .. } = self.timer.take_due(now)?;

        self.stats.dismissals_fired += 1;
        self.hovered = HoveredItem::default();

        let cleared_item = self
            .state_mut(&section)
            .and_then(|state| match std::mem::take(state) {
                SectionState::Active(item) => Some(item),
                SectionState::Idle => None,
            });

        debug!(
            "Section '{}': dismissal fired ({}), cleared {:?}",
            section, delay, cleared_item
        );

        Some(Dismissal {
            section,
            cleared_item,
            delay,
        })
    }

    /// When the pending dismissal is due
    pub fn next_deadline(&self) -> Option<Instant> {
        self.timer.deadline()
    }

    /// Pending dismissal, if any
    pub fn pending_dismissal(&self) -> Option<&PendingDismissal> {
        self.timer.pending()
    }

    /// Expanded item of `section`
    pub fn active_item(&self, section: &SectionId) -> Option<&ItemId> {
        self.section_state(section).and_then(SectionState::active_item)
    }

    /// State of `section`, if registered
    pub fn section_state(&self, section: &SectionId) -> Option<&SectionState> {
        self.sections
            .iter()
            .find(|(id, _)| id == section)
            .map(|(_, state)| state)
    }

    /// Most recent hover target
    pub fn hovered_item(&self) -> &HoveredItem {
        &self.hovered
    }

    /// Registered sections in order
    pub fn sections(&self) -> impl Iterator<Item = &SectionId> + '_ {
        self.sections.iter().map(|(id, _)| id)
    }

    /// Whether `section` is registered
    pub fn has_section(&self, section: &SectionId) -> bool {
        self.sections.iter().any(|(id, _)| id == section)
    }

    /// Read model for the presentation layer
    pub fn snapshot(&self) -> MenuSnapshot {
        MenuSnapshot {
            sections: self
                .sections
                .iter()
                .map(|(section, state)| SectionSnapshot {
                    section: section.clone(),
                    active_item: state.active_item().cloned(),
                })
                .collect(),
            hovered: self.hovered.clone(),
        }
    }

    /// Pointer tracker
    pub fn tracker(&self) -> &PointerTracker {
        &self.tracker
    }

    /// Counters
    pub fn stats(&self) -> HoverIntentStats {
        self.stats
    }

    /// Configuration
    pub fn config(&self) -> &HoverIntentConfig {
        &self.config
    }

    fn state_mut(&mut self, section: &SectionId) -> Option<&mut SectionState> {
        self.sections
            .iter_mut()
            .find(|(id, _)| id == section)
            .map(|(_, state)| state)
    }

    fn cancel_pending(&mut self) -> bool {
        let cancelled = self.timer.cancel().is_some();
        if cancelled {
            self.stats.dismissals_cancelled += 1;
        }
        cancelled
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const A: &str = "human_interface";
    const B: &str = "web_design";

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn controller() -> HoverIntentController {
        HoverIntentController::new(
            HoverIntentConfig::default(),
            [SectionId::from(A), SectionId::from(B)],
        )
    }

    fn move_down(ctl: &mut HoverIntentController, t0: Instant) {
        ctl.on_pointer_move(100.0, 100.0, t0);
        ctl.on_pointer_move(110.0, 120.0, t0 + ms(16));
    }

    fn move_sideways(ctl: &mut HoverIntentController, t0: Instant) {
        ctl.on_pointer_move(100.0, 100.0, t0);
        ctl.on_pointer_move(200.0, 102.0, t0 + ms(16));
    }

    #[test]
    fn test_default_config() {
        let config = HoverIntentConfig::default();
        assert_eq!(config.delay_for(DismissalDelay::TowardSubmenu), ms(400));
        assert_eq!(config.delay_for(DismissalDelay::Away), ms(200));
        assert_eq!(config.tracker.history_size, 3);
    }

    #[test]
    fn test_duplicate_sections_registered_once() {
        let ctl = HoverIntentController::new(
            HoverIntentConfig::default(),
            [SectionId::from(A), SectionId::from(A), SectionId::from(B)],
        );
        assert_eq!(ctl.sections().count(), 2);
    }

    #[test]
    fn test_hover_expands_immediately() {
        let mut ctl = controller();
        ctl.hover(&A.into(), "Cognitive Design".into());

        assert_eq!(ctl.active_item(&A.into()).map(ItemId::as_str), Some("Cognitive Design"));
        assert!(ctl.hovered_item().is(&A.into(), &"Cognitive Design".into()));
    }

    #[test]
    fn test_hover_replaces_active_item_and_cancels_timer() {
        let t0 = Instant::now();
        let mut ctl = controller();
        ctl.hover(&A.into(), "Cognitive Design".into());
        ctl.leave_item(&A.into(), t0);
        assert!(ctl.pending_dismissal().is_some());

        ctl.hover(&A.into(), "Spatial Interfaces".into());
        assert_eq!(
            ctl.active_item(&A.into()).map(ItemId::as_str),
            Some("Spatial Interfaces")
        );
        assert!(ctl.pending_dismissal().is_none());
        assert_eq!(ctl.stats().dismissals_cancelled, 1);
    }

    #[test]
    fn test_leave_heading_toward_submenu_waits_400ms() {
        let t0 = Instant::now();
        let mut ctl = controller();
        move_down(&mut ctl, t0);
        ctl.hover(&A.into(), "Cognitive Design".into());
        ctl.leave_item(&A.into(), t0 + ms(20));

        let pending = ctl.pending_dismissal().unwrap();
        assert_eq!(pending.delay, DismissalDelay::TowardSubmenu);
        assert_eq!(ctl.next_deadline(), Some(t0 + ms(420)));

        assert!(ctl.poll(t0 + ms(419)).is_none());
        assert!(ctl.active_item(&A.into()).is_some());

        let fired = ctl.poll(t0 + ms(420)).unwrap();
        assert_eq!(fired.cleared_item.map(|i| i.to_string()), Some("Cognitive Design".to_string()));
        assert_eq!(ctl.active_item(&A.into()), None);
        assert!(ctl.hovered_item().is_none());
    }

    #[test]
    fn test_leave_moving_away_waits_200ms() {
        let t0 = Instant::now();
        let mut ctl = controller();
        move_sideways(&mut ctl, t0);
        ctl.hover(&B.into(), "Utility UI".into());
        ctl.leave_item(&B.into(), t0 + ms(20));

        assert_eq!(ctl.pending_dismissal().unwrap().delay, DismissalDelay::Away);
        assert!(ctl.poll(t0 + ms(219)).is_none());
        assert!(ctl.poll(t0 + ms(220)).is_some());
        assert_eq!(ctl.active_item(&B.into()), None);
        assert_eq!(ctl.stats().short_delays, 1);
        assert_eq!(ctl.stats().dismissals_fired, 1);
    }

    #[test]
    fn test_leave_without_history_uses_short_delay() {
        let t0 = Instant::now();
        let mut ctl = controller();
        ctl.hover(&A.into(), "Cognitive Design".into());
        ctl.leave_item(&A.into(), t0);
        assert_eq!(ctl.next_deadline(), Some(t0 + ms(200)));
    }

    #[test]
    fn test_re_enter_submenu_cancels_dismissal() {
        let t0 = Instant::now();
        let mut ctl = controller();
        move_down(&mut ctl, t0);
        ctl.hover(&A.into(), "Cognitive Design".into());
        ctl.leave_item(&A.into(), t0);

        ctl.re_enter_submenu(&A.into());
        assert!(ctl.pending_dismissal().is_none());
        assert!(ctl.poll(t0 + ms(400)).is_none());
        assert!(ctl.poll(t0 + ms(10_000)).is_none());
        assert_eq!(
            ctl.active_item(&A.into()).map(ItemId::as_str),
            Some("Cognitive Design")
        );
    }

    #[test]
    fn test_leave_section_is_immediate() {
        let t0 = Instant::now();
        let mut ctl = controller();
        ctl.hover(&A.into(), "Cognitive Design".into());
        ctl.leave_item(&A.into(), t0);

        ctl.leave_section(&A.into());
        assert_eq!(ctl.active_item(&A.into()), None);
        assert!(ctl.hovered_item().is_none());
        assert!(ctl.pending_dismissal().is_none());
        assert!(ctl.poll(t0 + ms(1000)).is_none());
        assert_eq!(ctl.stats().immediate_dismissals, 1);
    }

    #[test]
    fn test_sections_are_independent() {
        let mut ctl = controller();
        ctl.hover(&B.into(), "Utility UI".into());
        ctl.hover(&A.into(), "Cognitive Design".into());

        assert_eq!(ctl.active_item(&B.into()).map(ItemId::as_str), Some("Utility UI"));

        ctl.leave_section(&A.into());
        assert_eq!(ctl.active_item(&B.into()).map(ItemId::as_str), Some("Utility UI"));
    }

    #[test]
    fn test_click_toggles() {
        let mut ctl = controller();
        let item = ItemId::from("Expressive UI");

        ctl.click(&B.into(), item.clone());
        assert_eq!(ctl.active_item(&B.into()), Some(&item));
        ctl.click(&B.into(), item.clone());
        assert_eq!(ctl.active_item(&B.into()), None);
        ctl.click(&B.into(), item.clone());
        assert_eq!(ctl.active_item(&B.into()), Some(&item));

        ctl.click(&B.into(), "Utility UI".into());
        assert_eq!(ctl.active_item(&B.into()).map(ItemId::as_str), Some("Utility UI"));
        assert!(ctl.pending_dismissal().is_none());
    }

    #[test]
    fn test_unknown_section_ignored() {
        let t0 = Instant::now();
        let mut ctl = controller();
        ctl.hover(&"contact".into(), "GitHub".into());
        ctl.leave_item(&"contact".into(), t0);
        ctl.click(&"contact".into(), "GitHub".into());

        assert!(ctl.hovered_item().is_none());
        assert!(ctl.pending_dismissal().is_none());
        assert_eq!(ctl.stats(), HoverIntentStats::default());
    }

    #[test]
    fn test_snapshot_in_registration_order() {
        let mut ctl = controller();
        ctl.hover(&B.into(), "Utility UI".into());

        let snapshot = ctl.snapshot();
        let ids: Vec<&str> = snapshot.sections.iter().map(|s| s.section.as_str()).collect();
        assert_eq!(ids, vec![A, B]);
        assert!(snapshot.is_expanded(&B.into(), &"Utility UI".into()));
        assert_eq!(snapshot.active_item(&A.into()), None);
    }
}
