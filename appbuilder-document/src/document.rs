//! Reading and writing app documents on disk.

use anyhow::Context;
use std::fs;
use std::path::{Path, PathBuf};

use appbuilder_core::Snapshot;

use crate::{export_document, DocumentError, ExportConfig};

/// Parse an exported document back into a snapshot.
///
/// Type tags, per-kind props and id uniqueness are all checked.
pub fn import_document(text: &str) -> Result<Snapshot, DocumentError> {
    let snapshot: Snapshot = serde_json::from_str(text).map_err(|e| {
        tracing::error!(error = %e, "failed to parse app document");
        DocumentError::Malformed(e)
    })?;

    tracing::info!(components = snapshot.len(), "imported document");
    Ok(snapshot)
}

/// Save a snapshot to disk as pretty JSON.
pub fn save_document(path: impl AsRef<Path>, snapshot: &Snapshot) -> anyhow::Result<()> {
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        // fs::write won't create missing directories
        fs::create_dir_all(parent)
            .with_context(|| format!("create parent dir: {}", parent.display()))?;
    }

    let json = serde_json::to_string_pretty(snapshot).context("serialize document to json")?;
    fs::write(path, json).with_context(|| format!("write document file: {}", path.display()))?;
    Ok(())
}

/// Load a snapshot from disk.
pub fn load_document(path: impl AsRef<Path>) -> anyhow::Result<Snapshot> {
    let path = path.as_ref();
    let data = fs::read_to_string(path)
        .with_context(|| format!("read document file: {}", path.display()))?;
    let snapshot = import_document(&data)
        .with_context(|| format!("parse document file: {}", path.display()))?;
    Ok(snapshot)
}

/// Export `snapshot` under `title` into `dir`. Returns the written path.
pub fn write_export(
    dir: impl AsRef<Path>,
    title: &str,
    snapshot: &Snapshot,
    config: &ExportConfig,
) -> anyhow::Result<PathBuf> {
    let dir = dir.as_ref();
    let exported = export_document(snapshot, title, config).context("prepare export")?;

    fs::create_dir_all(dir).with_context(|| format!("create export dir: {}", dir.display()))?;
    let path = dir.join(&exported.file_name);
    fs::write(&path, exported.contents)
        .with_context(|| format!("write export file: {}", path.display()))?;

    tracing::info!(path = %path.display(), "wrote export");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_import_empty_document() {
        let snapshot = import_document(r#"{"components":[]}"#).unwrap();
        assert!(snapshot.is_empty());
    }

    #[test]
    fn test_import_rejects_garbage() {
        assert!(matches!(
            import_document("{not json"),
            Err(DocumentError::Malformed(_))
        ));
        assert!(matches!(
            import_document(r#"{"widgets":[]}"#),
            Err(DocumentError::Malformed(_))
        ));
    }

    #[test]
    fn test_import_rejects_unknown_type() {
        let err = import_document(r#"{"components":[{"id":"a","type":"table","props":{}}]}"#)
            .unwrap_err();
        assert!(err.to_string().contains("unknown element type: table"));
    }
}
