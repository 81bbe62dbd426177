//! Navigation layout errors

use thiserror::Error;

use crate::menu::{ItemId, SectionId};

/// Result type for navigation layout operations
pub type Result<T> = std::result::Result<T, NavError>;

/// Navigation layout validation errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NavError {
    /// Two sections share an id
    #[error("Duplicate section id: {0}")]
    DuplicateSection(SectionId),

    /// Two items in one section share a name
    #[error("Duplicate item '{1}' in section '{0}'")]
    DuplicateItem(SectionId, ItemId),

    /// Nothing for the hover-intent controller to manage
    #[error("Navigation layout has no hover-intent section")]
    NoHoverSections,

    /// An item or sub-item has no link target
    #[error("Empty href for '{1}' in section '{0}'")]
    EmptyHref(SectionId, String),
}
