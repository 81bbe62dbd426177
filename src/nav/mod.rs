//! Navigation sidebar
//!
//! Static layout ([`NavConfig`]) plus the hover-intent state, behind a
//! [`Sidebar`] that accepts presentation events and produces a render model.
//!
//! # Event Routing
//!
//! ```text
//! MenuEvent
//!   ├─> PointerMove ─────────────> tracker
//!   ├─> ItemEnter  (has submenu) ─> hover
//!   ├─> ItemLeave  (has submenu) ─> leave_item
//!   ├─> SubmenuEnter ────────────> re_enter_submenu
//!   ├─> SubmenuLeave ────────────> leave_item
//!   ├─> SectionLeave ────────────> leave_section
//!   └─> Click      (has submenu) ─> click
//! ```
//!
//! Sections without `hover_intent` (plain link lists) never reach the
//! controller.

mod error;
mod items;
mod sidebar;
mod view;

pub use error::{NavError, Result};
pub use items::{NavConfig, NavItem, NavSection, SubItem};
pub use sidebar::{MenuEvent, Sidebar};
pub use view::{ItemView, SectionView, SidebarView};
