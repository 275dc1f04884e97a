// Editing tools for the canvas.
//
// Each tool turns the active snapshot into the next one. The session commits
// whatever the tool returns.

use appbuilder_core::{Component, ComponentId, ElementKind, PropsPatch, Snapshot};
use tracing::{debug, trace};

pub trait Tool {
    fn apply(&self, current: &Snapshot) -> Snapshot;

    fn name(&self) -> &str;
}

/// Append one component with default props.
#[derive(Debug, Clone)]
pub struct AddComponent {
    pub component: Component,
}

impl AddComponent {
    /// Prepare an add with a freshly generated id.
    pub fn new(kind: ElementKind) -> Self {
        let component = Component::new(kind);
        debug!("Creating AddComponent tool for {} ({})", kind, component.id);
        Self { component }
    }

    pub fn id(&self) -> &ComponentId {
        &self.component.id
    }
}

impl Tool for AddComponent {
    fn apply(&self, current: &Snapshot) -> Snapshot {
        trace!("Applying AddComponent {}", self.component.id);
        current.with_component(self.component.clone())
    }

    fn name(&self) -> &str {
        "Add Component"
    }
}

#[derive(Debug, Clone)]
pub struct UpdateComponent {
    pub id: ComponentId,
    pub patch: PropsPatch,
}

impl UpdateComponent {
    pub fn new(id: ComponentId, patch: PropsPatch) -> Self {
        Self { id, patch }
    }
}

impl Tool for UpdateComponent {
    fn apply(&self, current: &Snapshot) -> Snapshot {
        trace!("Applying UpdateComponent {} with {:?}", self.id, self.patch);
        current.with_updated(&self.id, &self.patch)
    }

    fn name(&self) -> &str {
        "Update Component"
    }
}

#[derive(Debug, Clone)]
pub struct RemoveComponent {
    pub id: ComponentId,
}

impl RemoveComponent {
    pub fn new(id: ComponentId) -> Self {
        Self { id }
    }
}

impl Tool for RemoveComponent {
    fn apply(&self, current: &Snapshot) -> Snapshot {
        trace!("Applying RemoveComponent {}", self.id);
        current.without(&self.id)
    }

    fn name(&self) -> &str {
        "Remove Component"
    }
}
