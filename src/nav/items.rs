//! Static navigation layout
//!
//! Immutable for the lifetime of a sidebar. The default layout is the
//! portfolio sidebar: personal links, two hover-intent sections with
//! submenus, and contact links.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::error::{NavError, Result};
use crate::menu::{ItemId, SectionId};

/// Entry of an item's submenu
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubItem {
    /// Label
    pub name: String,
    /// Link target
    pub href: String,
}

impl SubItem {
    fn new(name: &str, href: &str) -> Self {
        Self {
            name: name.to_string(),
            href: href.to_string(),
        }
    }
}

/// Top-level navigation item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavItem {
    /// Label, also the item's id within its section
    pub name: String,

    /// Link target
    pub href: String,

    /// Open in a new tab
    #[serde(default)]
    pub external: bool,

    /// Submenu entries (empty = no submenu)
    #[serde(default)]
    pub sub_items: Vec<SubItem>,
}

impl NavItem {
    /// Plain link without submenu
    pub fn link(name: &str, href: &str) -> Self {
        Self {
            name: name.to_string(),
            href: href.to_string(),
            external: false,
            sub_items: Vec::new(),
        }
    }

    /// Link opening in a new tab
    pub fn external(name: &str, href: &str) -> Self {
        Self {
            external: true,
            ..Self::link(name, href)
        }
    }

    /// Item with a "Components" and "Guidelines" submenu under `href`
    fn with_guides(name: &str, href: &str) -> Self {
        Self {
            sub_items: vec![
                SubItem::new("Components", &format!("{href}/components")),
                SubItem::new("Guidelines", &format!("{href}/guidelines")),
            ],
            ..Self::link(name, href)
        }
    }

    /// Item id
    pub fn id(&self) -> ItemId {
        ItemId::new(self.name.as_str())
    }

    /// Whether hovering the item can expand anything
    pub fn has_submenu(&self) -> bool {
        !self.sub_items.is_empty()
    }
}

/// A group of navigation items
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavSection {
    /// Section id
    pub id: SectionId,

    /// Heading (None = no heading)
    #[serde(default)]
    pub title: Option<String>,

    /// Managed by the hover-intent controller
    #[serde(default)]
    pub hover_intent: bool,

    /// Items in display order
    pub items: Vec<NavItem>,
}

impl NavSection {
    /// Find an item by id
    pub fn item(&self, item: &ItemId) -> Option<&NavItem> {
        self.items.iter().find(|i| i.name == item.as_str())
    }
}

/// Whole sidebar layout
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavConfig {
    /// Brand label shown above the first section, linking home
    pub brand: Option<String>,

    /// Sections in display order
    pub sections: Vec<NavSection>,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self::portfolio()
    }
}

impl NavConfig {
    /// The portfolio sidebar layout
    pub fn portfolio() -> Self {
        Self {
            brand: Some("丂乇刀尺ﾉ".to_string()),
            sections: vec![
                NavSection {
                    id: SectionId::from("links"),
                    title: None,
                    hover_intent: false,
                    items: vec![
                        NavItem::external("Work", "https://josencv.vercel.app"),
                        NavItem::external("Blog", "https://senrilab.vercel.app"),
                        NavItem::link("CV", "/cv"),
                    ],
                },
                NavSection {
                    id: SectionId::from("human_interface"),
                    title: Some("HUMAN INTERFACE".to_string()),
                    hover_intent: true,
                    items: vec![
                        NavItem::with_guides("Cognitive Design", "/cognitive-design"),
                        NavItem::with_guides("Spatial Interfaces", "/spatial-interfaces"),
                    ],
                },
                NavSection {
                    id: SectionId::from("web_design"),
                    title: Some("WEB DESIGN".to_string()),
                    hover_intent: true,
                    items: vec![
                        NavItem::with_guides("Utility UI", "/web-design/utility-ui"),
                        NavItem::with_guides("Expressive UI", "/web-design/expressive-ui"),
                    ],
                },
                NavSection {
                    id: SectionId::from("contact"),
                    title: Some("CONTACT ME".to_string()),
                    hover_intent: false,
                    items: vec![
                        NavItem::external("GitHub", "https://github.com/yourusername"),
                        NavItem::external("LinkedIn", "https://linkedin.com/in/yourusername"),
                        NavItem::link("Email", "mailto:your@email.com"),
                    ],
                },
            ],
        }
    }

    /// Find a section by id
    pub fn section(&self, id: &SectionId) -> Option<&NavSection> {
        self.sections.iter().find(|s| &s.id == id)
    }

    /// Ids of the sections managed by the hover-intent controller
    pub fn hover_sections(&self) -> impl Iterator<Item = &SectionId> + '_ {
        self.sections
            .iter()
            .filter(|s| s.hover_intent)
            .map(|s| &s.id)
    }

    /// Check the layout for duplicate ids and missing link targets
    pub fn validate(&self) -> Result<()> {
        let mut section_ids = HashSet::new();

        for section in &self.sections {
            if !section_ids.insert(&section.id) {
                return Err(NavError::DuplicateSection(section.id.clone()));
            }

            let mut names = HashSet::new();
            for item in &section.items {
                if !names.insert(item.name.as_str()) {
                    return Err(NavError::DuplicateItem(section.id.clone(), item.id()));
                }
                if item.href.trim().is_empty() {
                    return Err(NavError::EmptyHref(section.id.clone(), item.name.clone()));
                }
                if let Some(sub) = item.sub_items.iter().find(|s| s.href.trim().is_empty()) {
                    return Err(NavError::EmptyHref(
                        section.id.clone(),
                        format!("{} / {}", item.name, sub.name),
                    ));
                }
            }
        }

        if self.hover_sections().next().is_none() {
            return Err(NavError::NoHoverSections);
        }

        Ok(())
    }
}
