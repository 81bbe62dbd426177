//! Section and item identifiers, per-section state and the read model

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of an independent menu section
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SectionId(String);

impl SectionId {
    /// Create a section id
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow as string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for SectionId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for SectionId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifier of a top-level menu item (its display name)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    /// Create an item id
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow as string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ItemId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for ItemId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// State of one section
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(tag = "state", content = "item", rename_all = "lowercase")]
pub enum SectionState {
    /// No submenu expanded
    #[default]
    Idle,

    /// This item's submenu is expanded
    Active(ItemId),
}

impl SectionState {
    /// Currently expanded item, if any
    pub fn active_item(&self) -> Option<&ItemId> {
        match self {
            Self::Idle => None,
            Self::Active(item) => Some(item),
        }
    }

    /// Whether a submenu is expanded
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Active(_))
    }
}

/// Most recent hover target across all sections
///
/// Cosmetic only. Submenu rendering derives from [`SectionState`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct HoveredItem {
    /// Section of the hovered item
    pub section: Option<SectionId>,
    /// Hovered item
    pub item: Option<ItemId>,
}

impl HoveredItem {
    /// Hovered `{section, item}`
    pub fn new(section: SectionId, item: ItemId) -> Self {
        Self {
            section: Some(section),
            item: Some(item),
        }
    }

    /// Whether nothing is hovered
    pub fn is_none(&self) -> bool {
        self.section.is_none() && self.item.is_none()
    }

    /// Whether `item` in `section` is the hovered one
    pub fn is(&self, section: &SectionId, item: &ItemId) -> bool {
        self.section.as_ref() == Some(section) && self.item.as_ref() == Some(item)
    }
}

/// Read model entry for one section
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectionSnapshot {
    /// Section id
    pub section: SectionId,
    /// Expanded item, if any
    pub active_item: Option<ItemId>,
}

/// Read model exposed to the presentation layer after every transition
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct MenuSnapshot {
    /// Per-section expanded item, in registration order
    pub sections: Vec<SectionSnapshot>,
    /// Most recent hover target
    pub hovered: HoveredItem,
}

impl MenuSnapshot {
    /// Expanded item of `section`
    pub fn active_item(&self, section: &SectionId) -> Option<&ItemId> {
        self.sections
            .iter()
            .find(|s| &s.section == section)
            .and_then(|s| s.active_item.as_ref())
    }

    /// Whether `item`'s submenu in `section` is expanded
    pub fn is_expanded(&self, section: &SectionId, item: &ItemId) -> bool {
        self.active_item(section) == Some(item)
    }
}

impl fmt::Display for MenuSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, entry) in self.sections.iter().enumerate() {
            if i > 0 {
                f.write_str("  ")?;
            }
            match &entry.active_item {
                Some(item) => write!(f, "{}={}", entry.section, item)?,
                None => write!(f, "{}=-", entry.section)?,
            }
        }
        Ok(())
    }
}
