//! Editor configuration.
//!
//! Every field has a default, so a config file only needs the keys it changes.

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use appbuilder_document::ExportConfig;

use crate::editor::HistoryConfig;

fn default_app_name() -> String {
    "My App".into()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditorConfig {
    #[serde(default)]
    pub history: HistoryConfig,

    #[serde(default)]
    pub export: ExportConfig,

    /// Initial app name, also the export title.
    #[serde(default = "default_app_name")]
    pub app_name: String,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            history: HistoryConfig::default(),
            export: ExportConfig::default(),
            app_name: default_app_name(),
        }
    }
}

impl EditorConfig {
    /// Load a config file and validate the export settings.
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let data = fs::read_to_string(path)
            .with_context(|| format!("read config file: {}", path.display()))?;
        let config: EditorConfig = serde_json::from_str(&data)
            .with_context(|| format!("parse config file: {}", path.display()))?;
        config.export.validate().context("validate export settings")?;

        tracing::debug!(path = %path.display(), "loaded editor config");
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EditorConfig::default();
        assert_eq!(config.app_name, "My App");
        assert_eq!(config.history.max_states, None);
        assert!(config.export.pretty);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config: EditorConfig =
            serde_json::from_str(r#"{"history":{"max_states":25}}"#).unwrap();
        assert_eq!(config.history.max_states, Some(25));
        assert_eq!(config.app_name, "My App");
        assert_eq!(config.export, ExportConfig::default());
    }

    #[test]
    fn test_load_rejects_bad_export_settings() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{"export":{"separator":"|"}}"#).unwrap();
        assert!(EditorConfig::load(&path).is_err());
    }

    #[test]
    fn test_load_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{"app_name":"Portfolio","export":{"pretty":false}}"#).unwrap();
        let config = EditorConfig::load(&path).unwrap();
        assert_eq!(config.app_name, "Portfolio");
        assert!(!config.export.pretty);
        assert_eq!(config.export.extension, "json");
    }
}
