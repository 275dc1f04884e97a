//! Export configuration and file naming for app documents.
//!
//! An export is the current snapshot written as JSON and offered under a file
//! name derived from the app title ("My App" -> "my-app.json").

use serde::{Deserialize, Serialize};

use appbuilder_core::Snapshot;

use crate::DocumentError;

const INVALID_FILENAME_CHARS: [char; 9] = ['/', '\\', ':', '*', '?', '"', '<', '>', '|'];

/// How exports are written and named.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Pretty-print with two-space indentation.
    pub pretty: bool,
    /// File extension without the dot.
    pub extension: String,
    /// Replacement for each run of whitespace in the title.
    pub separator: String,
    pub lowercase: bool,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            pretty: true,
            extension: "json".into(),
            separator: "-".into(),
            lowercase: true,
        }
    }
}

impl ExportConfig {
    /// Compact single-line output, same naming rules.
    pub fn compact() -> Self {
        Self {
            pretty: false,
            ..Default::default()
        }
    }

    pub fn validate(&self) -> Result<(), DocumentError> {
        if self.extension.is_empty() {
            tracing::error!("export extension cannot be empty");
            return Err(DocumentError::InvalidExportConfig {
                reason: "extension must not be empty".into(),
            });
        }

        for ch in INVALID_FILENAME_CHARS {
            if self.extension.contains(ch) {
                tracing::error!(
                    extension = %self.extension,
                    invalid_char = %ch,
                    "extension contains invalid filename character"
                );
                return Err(DocumentError::InvalidExportConfig {
                    reason: format!("extension contains invalid character '{}'", ch),
                });
            }
            if self.separator.contains(ch) {
                tracing::error!(
                    separator = %self.separator,
                    invalid_char = %ch,
                    "separator contains invalid filename character"
                );
                return Err(DocumentError::InvalidExportConfig {
                    reason: format!("separator contains invalid character '{}'", ch),
                });
            }
        }

        Ok(())
    }

    /// Derive the download file name from a user-supplied title.
    ///
    /// Every run of whitespace becomes one separator, including leading and
    /// trailing runs. Never fails: a blank title still names a file.
    pub fn file_name(&self, title: &str) -> String {
        let mut name = String::with_capacity(title.len());
        let mut in_whitespace = false;
        for ch in title.chars() {
            if ch.is_whitespace() {
                if !in_whitespace {
                    name.push_str(&self.separator);
                }
                in_whitespace = true;
            } else {
                name.push(ch);
                in_whitespace = false;
            }
        }

        if self.lowercase {
            name = name.to_lowercase();
        }

        format!("{}.{}", name, self.extension)
    }

    /// Serialize a snapshot as an export document.
    pub fn render(&self, snapshot: &Snapshot) -> Result<String, DocumentError> {
        let text = if self.pretty {
            serde_json::to_string_pretty(snapshot)
        } else {
            serde_json::to_string(snapshot)
        }
        .map_err(DocumentError::Serialize)?;

        tracing::debug!(
            components = snapshot.len(),
            bytes = text.len(),
            "rendered export document"
        );
        Ok(text)
    }
}

/// A rendered export: where it should go and what it contains.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedDocument {
    pub file_name: String,
    pub contents: String,
}

/// Produce the export for `snapshot` under `title`.
pub fn export_document(
    snapshot: &Snapshot,
    title: &str,
    config: &ExportConfig,
) -> Result<ExportedDocument, DocumentError> {
    config.validate()?;
    let file_name = config.file_name(title);
    let contents = config.render(snapshot)?;

    tracing::info!(
        file_name = %file_name,
        components = snapshot.len(),
        "exported document"
    );

    Ok(ExportedDocument {
        file_name,
        contents,
    })
}
