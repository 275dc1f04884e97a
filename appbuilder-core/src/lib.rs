//! appbuilder-core: the component model behind the app builder canvas.
//!
//! Design rules:
//! - Element kinds are a closed set; each kind owns its own property record.
//! - Snapshots are immutable values. Every edit produces a new snapshot.
//! - Component ids are unique within a snapshot for the lifetime of the document.
//! - Everything here is serializable so the current snapshot can be exported.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The element kinds offered by the component palette.
///
/// The serialized form is the HTML tag the element renders as, which is also
/// the `type` field of an exported component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ElementKind {
    #[serde(rename = "div")]
    Container,
    #[serde(rename = "h1")]
    Heading1,
    #[serde(rename = "h2")]
    Heading2,
    #[serde(rename = "p")]
    Paragraph,
    #[serde(rename = "button")]
    Button,
    #[serde(rename = "input")]
    Input,
    #[serde(rename = "img")]
    Image,
}

impl ElementKind {
    /// Palette order.
    pub const ALL: [ElementKind; 7] = [
        ElementKind::Container,
        ElementKind::Heading1,
        ElementKind::Heading2,
        ElementKind::Paragraph,
        ElementKind::Button,
        ElementKind::Input,
        ElementKind::Image,
    ];

    /// The type tag used in exported documents and by the render surface.
    pub fn tag(&self) -> &'static str {
        match self {
            ElementKind::Container => "div",
            ElementKind::Heading1 => "h1",
            ElementKind::Heading2 => "h2",
            ElementKind::Paragraph => "p",
            ElementKind::Button => "button",
            ElementKind::Input => "input",
            ElementKind::Image => "img",
        }
    }

    /// Label shown in the component palette.
    pub fn display_name(&self) -> &'static str {
        match self {
            ElementKind::Container => "Container",
            ElementKind::Heading1 => "Heading 1",
            ElementKind::Heading2 => "Heading 2",
            ElementKind::Paragraph => "Paragraph",
            ElementKind::Button => "Button",
            ElementKind::Input => "Input",
            ElementKind::Image => "Image",
        }
    }

    /// Parse a type tag (`"div"`, `"h1"`, ...).
    pub fn from_tag(tag: &str) -> Result<Self, ModelError> {
        ElementKind::ALL
            .into_iter()
            .find(|kind| kind.tag() == tag)
            .ok_or_else(|| ModelError::UnknownElementType {
                tag: tag.to_string(),
            })
    }

    /// Whether the kind carries text content (`children`).
    pub fn has_text(&self) -> bool {
        !matches!(self, ElementKind::Input | ElementKind::Image)
    }

    /// CSS classes a freshly added component starts with.
    pub fn default_class(&self) -> &'static str {
        match self {
            ElementKind::Container => "bg-secondary-light p-4 rounded-lg",
            ElementKind::Heading1 => "text-3xl font-bold mb-4",
            ElementKind::Heading2 => "text-2xl font-bold mb-3",
            ElementKind::Paragraph => "text-base mb-2",
            ElementKind::Button => "bg-primary hover:bg-primary-dark text-white px-4 py-2 rounded",
            ElementKind::Input => {
                "bg-secondary-dark text-white border border-gray-700 rounded px-3 py-2 w-full"
            }
            ElementKind::Image => "rounded-lg max-w-full",
        }
    }

    /// Text content a freshly added component starts with. Empty for kinds without text.
    pub fn default_text(&self) -> &'static str {
        match self {
            ElementKind::Heading1 => "Heading 1",
            ElementKind::Heading2 => "Heading 2",
            ElementKind::Paragraph => {
                "Lorem ipsum dolor sit amet, consectetur adipiscing elit. Nullam auctor enim vitae ipsum vestibulum, vel pharetra nisi tristique."
            }
            ElementKind::Button => "Click Me",
            ElementKind::Container | ElementKind::Input | ElementKind::Image => "",
        }
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for ElementKind {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ElementKind::from_tag(s)
    }
}

/// Errors raised while building model values from untrusted input (imports, palette drops).
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("unknown element type: {tag}")]
    UnknownElementType { tag: String },

    #[error("invalid props for '{tag}' component: {reason}")]
    InvalidProps { tag: String, reason: String },

    #[error("duplicate component id: {id}")]
    DuplicateId { id: String },
}

pub mod component;
pub mod snapshot;

pub use component::{
    Component, ComponentId, ComponentProps, ImageProps, InputProps, PropsPatch, TextProps,
};
pub use snapshot::Snapshot;
