use appbuilder_core::{Component, ElementKind, Snapshot};

#[test]
fn every_kind_survives_json() {
    let mut snapshot = Snapshot::empty();
    for kind in ElementKind::ALL {
        snapshot = snapshot.with_component(Component::new(kind));
    }

    let json = serde_json::to_value(&snapshot).unwrap();
    let components = json["components"].as_array().unwrap();
    assert_eq!(components.len(), ElementKind::ALL.len());

    for (value, kind) in components.iter().zip(ElementKind::ALL) {
        assert_eq!(value["type"], kind.tag());
        let props = value["props"].as_object().unwrap();
        assert!(props.contains_key("className"));
        assert_eq!(props.contains_key("children"), kind.has_text());
        assert_eq!(props.contains_key("placeholder"), kind == ElementKind::Input);
        assert_eq!(props.contains_key("src"), kind == ElementKind::Image);
    }

    let back: Snapshot = serde_json::from_value(json).unwrap();
    assert_eq!(back, snapshot);
}
