//! Edit scripts: a JSON list of builder actions replayed through an editor session.
//!
//! ```json
//! [
//!   { "action": "add", "type": "h1" },
//!   { "action": "update", "id": "$last", "props": { "children": "Hello" } },
//!   { "action": "undo" }
//! ]
//! ```

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

use appbuilder_core::{ComponentId, PropsPatch};
use appbuilder_ui::EditorSession;

/// Stands in for the id of the most recently added component.
pub const LAST_ADDED: &str = "$last";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum ScriptAction {
    Add {
        #[serde(rename = "type")]
        tag: String,
    },
    Update {
        id: String,
        #[serde(default)]
        props: PropsPatch,
    },
    Remove {
        id: String,
    },
    Select {
        id: String,
    },
    Undo,
    Redo,
    TogglePreview,
    Rename {
        name: String,
    },
}

pub fn load_script(path: impl AsRef<Path>) -> Result<Vec<ScriptAction>> {
    let path = path.as_ref();
    let data = fs::read_to_string(path)
        .with_context(|| format!("read script file: {}", path.display()))?;
    let actions = serde_json::from_str(&data)
        .with_context(|| format!("parse script file: {}", path.display()))?;
    Ok(actions)
}

/// Replay `actions` in order. Stops at the first action that fails.
pub fn run_script(session: &mut EditorSession, actions: &[ScriptAction]) -> Result<()> {
    let mut last_added: Option<ComponentId> = None;

    for (step, action) in actions.iter().enumerate() {
        tracing::debug!(step, action = ?action, "replaying action");
        match action {
            ScriptAction::Add { tag } => {
                let id = session
                    .add_component_by_tag(tag)
                    .with_context(|| format!("step {step}: add '{tag}'"))?;
                last_added = Some(id);
            }
            ScriptAction::Update { id, props } => {
                let id = resolve(id, &last_added, step)?;
                session.update_component(&id, props.clone());
            }
            ScriptAction::Remove { id } => {
                let id = resolve(id, &last_added, step)?;
                session.remove_component(&id);
            }
            ScriptAction::Select { id } => {
                let id = resolve(id, &last_added, step)?;
                session.select(id);
            }
            ScriptAction::Undo => {
                session.undo();
            }
            ScriptAction::Redo => {
                session.redo();
            }
            ScriptAction::TogglePreview => {
                session.toggle_preview();
            }
            ScriptAction::Rename { name } => {
                session.set_app_name(name.clone());
            }
        }
    }

    tracing::info!(
        steps = actions.len(),
        history_len = session.history().len(),
        components = session.current().len(),
        "script finished"
    );
    Ok(())
}

fn resolve(id: &str, last_added: &Option<ComponentId>, step: usize) -> Result<ComponentId> {
    if id == LAST_ADDED {
        last_added
            .clone()
            .with_context(|| format!("step {step}: '{LAST_ADDED}' used before any add"))
    } else {
        Ok(ComponentId::from(id))
    }
}
