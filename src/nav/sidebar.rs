//! Sidebar facade: routes presentation events to the hover-intent controller

use serde::{Deserialize, Serialize};
use std::time::Instant;
use tracing::{trace, warn};

use super::items::{NavConfig, NavItem};
use super::view::{ItemView, SectionView, SidebarView};
use crate::menu::{
    Dismissal, HoverIntentConfig, HoverIntentController, ItemId, MenuSnapshot, SectionId,
};

/// Notification from the presentation layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MenuEvent {
    /// Pointer moved (absolute coordinates)
    PointerMove {
        /// X coordinate
        x: f64,
        /// Y coordinate
        y: f64,
    },

    /// Pointer entered a top-level item
    ItemEnter {
        /// Owning section
        section: SectionId,
        /// Item entered
        item: ItemId,
    },

    /// Pointer left a top-level item
    ItemLeave {
        /// Owning section
        section: SectionId,
        /// Item left
        item: ItemId,
    },

    /// Pointer entered an expanded submenu
    SubmenuEnter {
        /// Owning section
        section: SectionId,
    },

    /// Pointer left an expanded submenu
    SubmenuLeave {
        /// Owning section
        section: SectionId,
    },

    /// Pointer left the section's bounding region
    SectionLeave {
        /// Section left
        section: SectionId,
    },

    /// Item clicked or tapped
    Click {
        /// Owning section
        section: SectionId,
        /// Item clicked
        item: ItemId,
    },
}

impl MenuEvent {
    /// Section the event is tagged with
    pub fn section(&self) -> Option<&SectionId> {
        match self {
            Self::PointerMove { .. } => None,
            Self::ItemEnter { section, .. }
            | Self::ItemLeave { section, .. }
            | Self::SubmenuEnter { section }
            | Self::SubmenuLeave { section }
            | Self::SectionLeave { section }
            | Self::Click { section, .. } => Some(section),
        }
    }

    /// Short event name for logs and timelines
    pub fn name(&self) -> &'static str {
        match self {
            Self::PointerMove { .. } => "pointer_move",
            Self::ItemEnter { .. } => "item_enter",
            Self::ItemLeave { .. } => "item_leave",
            Self::SubmenuEnter { .. } => "submenu_enter",
            Self::SubmenuLeave { .. } => "submenu_leave",
            Self::SectionLeave { .. } => "section_leave",
            Self::Click { .. } => "click",
        }
    }
}

/// Navigation sidebar: static layout plus hover-intent state
#[derive(Debug)]
pub struct Sidebar {
    nav: NavConfig,
    controller: HoverIntentController,
}

impl Sidebar {
    /// Create a sidebar; every `hover_intent` section is registered with the controller
    pub fn new(nav: NavConfig, config: HoverIntentConfig) -> Self {
        let controller = HoverIntentController::new(config, nav.hover_sections().cloned());
        Self { nav, controller }
    }

    /// Handle one presentation event
    ///
    /// Item events only reach the controller for items that have a
    /// submenu. Events for unknown sections or items are dropped.
    pub fn dispatch(&mut self, event: &MenuEvent, now: Instant) {
        match event {
            MenuEvent::PointerMove { x, y } => self.controller.on_pointer_move(*x, *y, now),
            MenuEvent::ItemEnter { section, item } => {
                if self.submenu_item(section, item).is_some() {
                    self.controller.hover(section, item.clone());
                }
            }
            MenuEvent::ItemLeave { section, item } => {
                if self.submenu_item(section, item).is_some() {
                    self.controller.leave_item(section, now);
                }
            }
            MenuEvent::Click { section, item } => {
                if self.submenu_item(section, item).is_some() {
                    self.controller.click(section, item.clone());
                }
            }
            MenuEvent::SubmenuEnter { section } => {
                if self.is_managed(section) {
                    self.controller.re_enter_submenu(section);
                }
            }
            MenuEvent::SubmenuLeave { section } => {
                if self.is_managed(section) {
                    self.controller.leave_item(section, now);
                }
            }
            MenuEvent::SectionLeave { section } => {
                if self.is_managed(section) {
                    self.controller.leave_section(section);
                }
            }
        }
    }

    /// Fire the pending dismissal if due
    pub fn poll(&mut self, now: Instant) -> Option<Dismissal> {
        self.controller.poll(now)
    }

    /// When the pending dismissal is due
    pub fn next_deadline(&self) -> Option<Instant> {
        self.controller.next_deadline()
    }

    /// Read model
    pub fn snapshot(&self) -> MenuSnapshot {
        self.controller.snapshot()
    }

    /// Hover-intent controller
    pub fn controller(&self) -> &HoverIntentController {
        &self.controller
    }

    /// Static layout
    pub fn nav(&self) -> &NavConfig {
        &self.nav
    }

    /// Render model combining the layout with the current state
    pub fn view(&self) -> SidebarView {
        let hovered = self.controller.hovered_item();

        let sections = self
            .nav
            .sections
            .iter()
            .map(|section| SectionView {
                id: section.id.clone(),
                title: section.title.clone(),
                items: section
                    .items
                    .iter()
                    .map(|item| {
                        let id = item.id();
                        let expanded = self.controller.active_item(&section.id) == Some(&id);
                        ItemView {
                            name: item.name.clone(),
                            href: item.href.clone(),
                            external: item.external,
                            has_submenu: item.has_submenu(),
                            hovered: hovered.is(&section.id, &id),
                            expanded,
                            visible_sub_items: if expanded {
                                item.sub_items.clone()
                            } else {
                                Vec::new()
                            },
                        }
                    })
                    .collect(),
            })
            .collect();

        SidebarView {
            brand: self.nav.brand.clone(),
            sections,
        }
    }

    fn is_managed(&self, section: &SectionId) -> bool {
        if self.controller.has_section(section) {
            return true;
        }
        if self.nav.section(section).is_some() {
            trace!("Section '{}' has no hover intent, event ignored", section);
        } else {
            warn!("Event for unknown section '{}' ignored", section);
        }
        false
    }

    fn submenu_item(&self, section: &SectionId, item: &ItemId) -> Option<&NavItem> {
        if !self.is_managed(section) {
            return None;
        }
        let found = self.nav.section(section).and_then(|s| s.item(item));
        match found {
            Some(nav_item) if nav_item.has_submenu() => Some(nav_item),
            Some(_) => {
                trace!("Item '{}' has no submenu, event ignored", item);
                None
            }
            None => {
                warn!("Event for unknown item '{}' in section '{}' ignored", item, section);
                None
            }
        }
    }
}
