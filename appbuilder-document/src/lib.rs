//! appbuilder-document: exporting and importing app documents.
//!
//! Design rules:
//! - Only the current snapshot is ever written. History is never serialized.
//! - An export document is `{ "components": [ { "id", "type", "props" } ] }`.
//! - Imports go through the same model validation as any other snapshot.

use thiserror::Error;

pub mod document;
pub mod export;

pub use document::{import_document, load_document, save_document, write_export};
pub use export::{export_document, ExportConfig, ExportedDocument};

/// Errors related to document naming, export settings and parsing.
#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("invalid export configuration: {reason}")]
    InvalidExportConfig { reason: String },

    #[error("failed to serialize document: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("malformed document: {0}")]
    Malformed(#[source] serde_json::Error),
}
