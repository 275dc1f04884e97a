//! Immutable snapshots of the canvas.
//!
//! A snapshot is never changed in place. The edit methods here take `&self`
//! and hand back a new snapshot, which is what the history stores.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::{debug, trace, warn};

use crate::{Component, ComponentId, ElementKind, ModelError, PropsPatch};

/// The full editable state at one point in time: an ordered list of components.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "SnapshotRepr")]
pub struct Snapshot {
    components: Vec<Component>,
}

#[derive(Deserialize)]
struct SnapshotRepr {
    components: Vec<Component>,
}

impl TryFrom<SnapshotRepr> for Snapshot {
    type Error = ModelError;

    fn try_from(repr: SnapshotRepr) -> Result<Self, Self::Error> {
        Snapshot::from_components(repr.components)
    }
}

impl Snapshot {
    /// The empty canvas every editing session starts from.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a snapshot from existing records, rejecting duplicate ids.
    pub fn from_components(components: Vec<Component>) -> Result<Self, ModelError> {
        let mut seen = HashSet::with_capacity(components.len());
        for component in &components {
            if !seen.insert(component.id.as_str()) {
                return Err(ModelError::DuplicateId {
                    id: component.id.to_string(),
                });
            }
        }
        Ok(Self { components })
    }

    pub fn components(&self) -> &[Component] {
        &self.components
    }

    pub fn iter(&self) -> impl Iterator<Item = &Component> {
        self.components.iter()
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    pub fn get(&self, id: &ComponentId) -> Option<&Component> {
        self.components.iter().find(|c| &c.id == id)
    }

    pub fn contains(&self, id: &ComponentId) -> bool {
        self.get(id).is_some()
    }

    /// Append a new component of `kind` with a fresh id and default props.
    /// Returns the new snapshot and the id of the added component.
    pub fn with_added(&self, kind: ElementKind) -> (Snapshot, ComponentId) {
        let component = Component::new(kind);
        let id = component.id.clone();
        (self.with_component(component), id)
    }

    /// Append `component` at the end.
    ///
    /// Ids must stay unique: a record whose id is already present is not
    /// appended and the result is a copy of `self`.
    pub fn with_component(&self, component: Component) -> Snapshot {
        let mut components = self.components.clone();
        if self.contains(&component.id) {
            warn!(id = %component.id, "component id already present, not appending");
        } else {
            trace!(id = %component.id, kind = %component.kind(), "appending component");
            components.push(component);
        }
        Snapshot { components }
    }

    /// Merge `patch` into the props of the component matching `id`.
    /// An unknown id yields a copy with identical contents.
    pub fn with_updated(&self, id: &ComponentId, patch: &PropsPatch) -> Snapshot {
        let mut matched = false;
        let components = self
            .components
            .iter()
            .map(|c| {
                if &c.id == id {
                    matched = true;
                    Component {
                        id: c.id.clone(),
                        props: c.props.patched(patch),
                    }
                } else {
                    c.clone()
                }
            })
            .collect();

        if !matched {
            debug!(id = %id, "update matched no component");
        }
        Snapshot { components }
    }

    /// Drop the component matching `id`. An unknown id yields a copy with identical contents.
    pub fn without(&self, id: &ComponentId) -> Snapshot {
        let components: Vec<Component> = self
            .components
            .iter()
            .filter(|c| &c.id != id)
            .cloned()
            .collect();

        if components.len() == self.components.len() {
            debug!(id = %id, "remove matched no component");
        }
        Snapshot { components }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_added_leaves_original_alone() {
        let empty = Snapshot::empty();
        let (next, id) = empty.with_added(ElementKind::Heading1);
        assert!(empty.is_empty());
        assert_eq!(next.len(), 1);
        assert_eq!(next.components()[0].id, id);
        assert_eq!(next.components()[0].kind(), ElementKind::Heading1);
    }

    #[test]
    fn test_add_appends_at_end() {
        let (s1, a) = Snapshot::empty().with_added(ElementKind::Paragraph);
        let (s2, b) = s1.with_added(ElementKind::Button);
        let ids: Vec<_> = s2.iter().map(|c| c.id.clone()).collect();
        assert_eq!(ids, vec![a, b]);
    }

    #[test]
    fn test_with_updated_only_touches_match() {
        let (s1, a) = Snapshot::empty().with_added(ElementKind::Paragraph);
        let (s2, b) = s1.with_added(ElementKind::Paragraph);
        let s3 = s2.with_updated(&b, &PropsPatch::default().children("second"));
        assert_eq!(s3.get(&a), s2.get(&a));
        assert_eq!(s3.get(&b).unwrap().props.text(), Some("second"));
    }

    #[test]
    fn test_unknown_id_is_identity_by_value() {
        let (s1, _) = Snapshot::empty().with_added(ElementKind::Image);
        let ghost = ComponentId::from("component-missing");
        assert_eq!(s1.with_updated(&ghost, &PropsPatch::default().alt("x")), s1);
        assert_eq!(s1.without(&ghost), s1);
    }

    #[test]
    fn test_without_removes() {
        let (s1, a) = Snapshot::empty().with_added(ElementKind::Input);
        let (s2, b) = s1.with_added(ElementKind::Image);
        let s3 = s2.without(&a);
        assert!(!s3.contains(&a));
        assert!(s3.contains(&b));
        assert_eq!(s2.len(), 2);
    }

    #[test]
    fn test_with_component_keeps_ids_unique() {
        let (s1, a) = Snapshot::empty().with_added(ElementKind::Button);
        let mut clash = Component::new(ElementKind::Paragraph);
        clash.id = a.clone();
        let s2 = s1.with_component(clash);
        assert_eq!(s2, s1);
        assert_eq!(s2.get(&a).unwrap().kind(), ElementKind::Button);
    }

    #[test]
    fn test_from_components_rejects_duplicates() {
        let mut c = Component::new(ElementKind::Container);
        c.id = ComponentId::from("dup");
        let err = Snapshot::from_components(vec![c.clone(), c]).unwrap_err();
        assert!(matches!(err, ModelError::DuplicateId { .. }));
    }

    #[test]
    fn test_deserialize_checks_duplicates() {
        let json = r#"{"components":[
            {"id":"x","type":"p","props":{"className":"","children":"a"}},
            {"id":"x","type":"p","props":{"className":"","children":"b"}}
        ]}"#;
        let err = serde_json::from_str::<Snapshot>(json).unwrap_err();
        assert!(err.to_string().contains("duplicate component id: x"));
    }
}
