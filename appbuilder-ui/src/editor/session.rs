//! Editing session for the app builder.
//!
//! The session owns the history and the state that lives beside it but is not
//! part of it: the selected component, preview mode and the app name.
//! Undo/redo never touch these.

use tracing::{debug, info, warn};

use appbuilder_core::{Component, ComponentId, ElementKind, PropsPatch, Snapshot};
use appbuilder_document::{export_document, DocumentError, ExportConfig, ExportedDocument};

use crate::config::EditorConfig;
use crate::editor::canvas::{render_canvas, CanvasView};
use crate::editor::history::History;
use crate::editor::tools::{AddComponent, RemoveComponent, Tool, UpdateComponent};

/// Session-level errors.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("unknown element type: {tag}")]
    UnknownElementType { tag: String },

    #[error("export failed: {0}")]
    Export(#[from] DocumentError),
}

#[derive(Debug, Clone)]
pub struct EditorSession {
    history: History<Snapshot>,
    selected: Option<ComponentId>,
    preview_mode: bool,
    app_name: String,
    export: ExportConfig,
}

impl EditorSession {
    /// Start a session on an empty canvas.
    pub fn new(config: &EditorConfig) -> Self {
        Self::from_snapshot(Snapshot::empty(), config)
    }

    /// Start a session whose oldest undo step is `snapshot` (e.g. an imported document).
    pub fn from_snapshot(snapshot: Snapshot, config: &EditorConfig) -> Self {
        info!(
            app_name = %config.app_name,
            components = snapshot.len(),
            "starting editor session"
        );

        Self {
            history: History::with_config(snapshot, &config.history),
            selected: None,
            preview_mode: false,
            app_name: config.app_name.clone(),
            export: config.export.clone(),
        }
    }

    /// Run a tool against the active snapshot and commit the result.
    pub fn apply(&mut self, tool: &dyn Tool) {
        let next = tool.apply(self.history.current());
        self.history.commit(next);
        info!(
            tool = tool.name(),
            index = self.history.index(),
            "applied edit"
        );
    }

    /// Add a component of `kind` and select it.
    pub fn add_component(&mut self, kind: ElementKind) -> ComponentId {
        let tool = AddComponent::new(kind);
        self.apply(&tool);
        let id = tool.id().clone();
        self.selected = Some(id.clone());
        id
    }

    /// Palette drop entry point: the element kind arrives as a type tag.
    pub fn add_component_by_tag(&mut self, tag: &str) -> Result<ComponentId, SessionError> {
        let kind = ElementKind::from_tag(tag).map_err(|_| {
            warn!(tag = %tag, "dropped unknown element type");
            SessionError::UnknownElementType {
                tag: tag.to_string(),
            }
        })?;
        Ok(self.add_component(kind))
    }

    /// Select a component. Ignored in preview mode; returns whether the selection changed.
    pub fn select(&mut self, id: ComponentId) -> bool {
        if self.preview_mode {
            debug!(id = %id, "selection ignored in preview mode");
            return false;
        }
        self.selected = Some(id);
        true
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    pub fn update_component(&mut self, id: &ComponentId, patch: PropsPatch) {
        self.apply(&UpdateComponent::new(id.clone(), patch));
    }

    /// Remove a component. Clears the selection if it pointed at `id`.
    pub fn remove_component(&mut self, id: &ComponentId) {
        self.apply(&RemoveComponent::new(id.clone()));
        if self.selected.as_ref() == Some(id) {
            self.selected = None;
        }
    }

    /// Flip preview mode. Entering preview drops the selection. Returns the new mode.
    pub fn toggle_preview(&mut self) -> bool {
        self.preview_mode = !self.preview_mode;
        if self.preview_mode {
            self.selected = None;
        }
        info!(preview = self.preview_mode, "toggled preview mode");
        self.preview_mode
    }

    pub fn undo(&mut self) -> &Snapshot {
        self.history.undo()
    }

    pub fn redo(&mut self) -> &Snapshot {
        self.history.redo()
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    pub fn current(&self) -> &Snapshot {
        self.history.current()
    }

    pub fn history(&self) -> &History<Snapshot> {
        &self.history
    }

    pub fn selected(&self) -> Option<&ComponentId> {
        self.selected.as_ref()
    }

    /// The selected record in the active snapshot, if it is still there.
    pub fn selected_component(&self) -> Option<&Component> {
        self.selected
            .as_ref()
            .and_then(|id| self.history.current().get(id))
    }

    pub fn preview_mode(&self) -> bool {
        self.preview_mode
    }

    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    pub fn set_app_name(&mut self, name: impl Into<String>) {
        self.app_name = name.into();
    }

    /// Export the active snapshot under the app name.
    pub fn export(&self) -> Result<ExportedDocument, SessionError> {
        Ok(export_document(
            self.history.current(),
            &self.app_name,
            &self.export,
        )?)
    }

    pub fn render(&self) -> CanvasView {
        render_canvas(
            self.history.current(),
            self.selected.as_ref(),
            self.preview_mode,
        )
    }
}
