//! Hover-intent menu state
//!
//! Decides, per independent menu section, which top-level item has its
//! submenu expanded. Opening is immediate; closing goes through a single
//! pending dismissal whose delay depends on where the pointer is heading.
//!
//! # Delay Policy
//!
//! | Pointer motion at leave time | Delay |
//! |------------------------------|-------|
//! | Down, less than 50px sideways | 400ms |
//! | Anything else (or no data) | 200ms |
//! | Left the section entirely | none |
//!
//! The submenu is rendered below and to the side of its trigger, so a user
//! crossing diagonally into it leaves the trigger first. The long delay
//! covers that transit; the short one keeps the menu responsive when the
//! pointer is clearly going elsewhere.
//!
//! # Time
//!
//! The controller never sleeps. Every time-dependent call takes `now`, and
//! the driver calls [`HoverIntentController::poll`] when
//! [`HoverIntentController::next_deadline`] is reached.
//!
//! ```
//! use std::time::{Duration, Instant};
//! use portfolio_nav::menu::{HoverIntentConfig, HoverIntentController, SectionId};
//!
//! let section = SectionId::from("web_design");
//! let mut menu = HoverIntentController::new(HoverIntentConfig::default(), [section.clone()]);
//!
//! let t0 = Instant::now();
//! menu.hover(&section, "Utility UI".into());
//! menu.leave_item(&section, t0);
//!
//! assert!(menu.poll(t0 + Duration::from_millis(100)).is_none());
//! assert!(menu.poll(t0 + Duration::from_millis(200)).is_some());
//! assert_eq!(menu.active_item(&section), None);
//! ```

mod controller;
mod dismissal;
mod section;

pub use controller::{HoverIntentConfig, HoverIntentController, HoverIntentStats};
pub use dismissal::{Dismissal, DismissalDelay, DismissalTimer, PendingDismissal};
pub use section::{HoveredItem, ItemId, MenuSnapshot, SectionId, SectionSnapshot, SectionState};
