//! Render model for the sidebar

use serde::Serialize;
use std::fmt;

use super::items::SubItem;
use crate::menu::SectionId;

/// One item as the presentation layer should draw it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemView {
    /// Label
    pub name: String,
    /// Link target
    pub href: String,
    /// Opens in a new tab
    pub external: bool,
    /// Has a submenu at all
    pub has_submenu: bool,
    /// Most recent hover target
    pub hovered: bool,
    /// Submenu expanded
    pub expanded: bool,
    /// Sub-items to draw (empty unless expanded)
    pub visible_sub_items: Vec<SubItem>,
}

/// One section as the presentation layer should draw it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectionView {
    /// Section id
    pub id: SectionId,
    /// Heading
    pub title: Option<String>,
    /// Items in display order
    pub items: Vec<ItemView>,
}

/// Whole sidebar as the presentation layer should draw it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SidebarView {
    /// Brand label
    pub brand: Option<String>,
    /// Sections in display order
    pub sections: Vec<SectionView>,
}

impl fmt::Display for SidebarView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(brand) = &self.brand {
            writeln!(f, "[ {} ]", brand)?;
        }

        for section in &self.sections {
            writeln!(f)?;
            if let Some(title) = &section.title {
                writeln!(f, "{}", title)?;
            }
            for item in &section.items {
                let marker = match (item.has_submenu, item.expanded) {
                    (true, true) => "▾",
                    (true, false) => "▸",
                    (false, _) => " ",
                };
                let hover = if item.hovered { "*" } else { "" };
                let external = if item.external { " ↗" } else { "" };
                writeln!(f, "  {} {}{}{}  ({})", marker, item.name, hover, external, item.href)?;

                for sub in &item.visible_sub_items {
                    writeln!(f, "    │ {}  ({})", sub.name, sub.href)?;
                }
            }
        }

        Ok(())
    }
}
