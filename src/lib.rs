//! # portfolio-nav
//!
//! Navigation sidebar for a design portfolio, with hover-intent submenus.
//!
//! Hovering a top-level item expands its submenu. When the pointer leaves
//! the item, the submenu is not closed immediately: the recent pointer
//! trajectory decides whether the user is heading into the submenu (long
//! grace period) or moving away (short grace period). Re-entering the
//! submenu before the grace period ends keeps it open.
//!
//! # Architecture
//!
//! ```text
//! portfolio-nav
//!   ├─> Sidebar (static layout + event routing)
//!   │     └─> HoverIntentController (per-section state, single dismissal timer)
//!   │           └─> PointerTracker (bounded sample history, heading estimate)
//!   ├─> SidebarRuntime (tokio event loop driving deadlines in real time)
//!   ├─> Scenario replay (same controller on a synthetic clock)
//!   └─> KanbanBoard (demo board model with a pluggable reorder engine)
//! ```
//!
//! # Data Flow
//!
//! **Hover Path:** Pointer events → Sidebar → Controller → Snapshot → Presentation
//!
//! **Timer Path:** Controller deadline → Runtime (or replay) → `poll` → Snapshot
//!
//! The controller never reads the clock itself. Every time-dependent
//! operation takes `now`, and the driver calls `poll` once the deadline
//! returned by `next_deadline` is reached.

#![warn(missing_docs)]
#![warn(clippy::all)]

/// Application configuration
pub mod config;

/// Demo kanban board model
pub mod kanban;

/// Hover-intent menu state machine
pub mod menu;

/// Sidebar layout and event routing
pub mod nav;

/// Pointer sample history and heading estimate
pub mod pointer;

/// Async event loop for the sidebar
pub mod runtime;

/// Deterministic replay of recorded pointer scenarios
pub mod scenario;

/// Utility functions
pub mod utils;
