// Render surface for the app builder canvas.
// Maps each component to an element description. Pure: nothing here feeds back into history.

use appbuilder_core::{Component, ComponentId, ComponentProps, Snapshot};
use tracing::trace;

/// Classes appended to the selected component while editing.
pub const SELECTED_RING: &str = "ring-2 ring-primary ring-opacity-70";

pub const EMPTY_CANVAS_HINT: &str = "Drag and drop components here";
pub const EMPTY_CANVAS_DETAIL: &str = "or select from the components panel";

/// One element ready to be drawn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedElement {
    pub component_id: ComponentId,
    pub tag: &'static str,
    /// Attributes in output order. `class` always comes first.
    pub attributes: Vec<(&'static str, String)>,
    pub text: Option<String>,
    pub disabled: bool,
}

impl RenderedElement {
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.as_str())
    }

    /// HTML-like markup for this element.
    pub fn to_markup(&self) -> String {
        let mut out = format!("<{}", self.tag);
        for (name, value) in &self.attributes {
            out.push_str(&format!(" {}=\"{}\"", name, escape(value)));
        }
        if self.disabled {
            out.push_str(" disabled");
        }
        out.push('>');

        // input and img are void elements
        if let Some(text) = &self.text {
            out.push_str(&escape(text));
            out.push_str(&format!("</{}>", self.tag));
        }
        out
    }
}

/// What the canvas shows for a snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CanvasView {
    Empty,
    Elements(Vec<RenderedElement>),
}

impl CanvasView {
    pub fn to_markup(&self) -> String {
        match self {
            CanvasView::Empty => format!(
                "<div class=\"empty-canvas\"><p>{}</p><p>{}</p></div>",
                EMPTY_CANVAS_HINT, EMPTY_CANVAS_DETAIL
            ),
            CanvasView::Elements(elements) => elements
                .iter()
                .map(RenderedElement::to_markup)
                .collect::<Vec<_>>()
                .join("\n"),
        }
    }
}

/// Map one component to its element. The highlight only shows outside preview mode.
pub fn render_component(
    component: &Component,
    selected: Option<&ComponentId>,
    preview: bool,
) -> RenderedElement {
    let is_selected = !preview && selected == Some(&component.id);
    let class = if is_selected {
        format!("{} {}", component.props.class_name(), SELECTED_RING)
    } else {
        component.props.class_name().to_string()
    };

    let mut attributes = vec![("class", class)];
    let mut text = None;
    let mut disabled = false;

    match &component.props {
        ComponentProps::Container(p)
        | ComponentProps::Heading1(p)
        | ComponentProps::Heading2(p)
        | ComponentProps::Paragraph(p) => {
            text = Some(p.children.clone());
        }
        ComponentProps::Button(p) => {
            attributes.push(("type", "button".to_string()));
            text = Some(p.children.clone());
            disabled = preview;
        }
        ComponentProps::Input(p) => {
            let input_type = if p.input_type.is_empty() {
                "text".to_string()
            } else {
                p.input_type.clone()
            };
            attributes.push(("type", input_type));
            attributes.push(("placeholder", p.placeholder.clone()));
            disabled = preview;
        }
        ComponentProps::Image(p) => {
            attributes.push(("src", p.src.clone()));
            attributes.push(("alt", p.alt.clone()));
        }
    }

    trace!("Rendered {} as <{}>", component.id, component.kind().tag());

    RenderedElement {
        component_id: component.id.clone(),
        tag: component.kind().tag(),
        attributes,
        text,
        disabled,
    }
}

pub fn render_canvas(snapshot: &Snapshot, selected: Option<&ComponentId>, preview: bool) -> CanvasView {
    if snapshot.is_empty() {
        return CanvasView::Empty;
    }

    CanvasView::Elements(
        snapshot
            .iter()
            .map(|component| render_component(component, selected, preview))
            .collect(),
    )
}

fn escape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use appbuilder_core::{ElementKind, PropsPatch};

    fn single(kind: ElementKind) -> (Snapshot, ComponentId) {
        Snapshot::empty().with_added(kind)
    }

    #[test]
    fn test_empty_canvas() {
        let view = render_canvas(&Snapshot::empty(), None, false);
        assert_eq!(view, CanvasView::Empty);
        assert!(view.to_markup().contains(EMPTY_CANVAS_HINT));
    }

    #[test]
    fn test_selected_ring_only_when_editing() {
        let (snapshot, id) = single(ElementKind::Heading1);
        let component = &snapshot.components()[0];

        let editing = render_component(component, Some(&id), false);
        assert_eq!(
            editing.attribute("class"),
            Some("text-3xl font-bold mb-4 ring-2 ring-primary ring-opacity-70")
        );

        let previewing = render_component(component, Some(&id), true);
        assert_eq!(previewing.attribute("class"), Some("text-3xl font-bold mb-4"));

        let unselected = render_component(component, None, false);
        assert_eq!(unselected.attribute("class"), Some("text-3xl font-bold mb-4"));
    }

    #[test]
    fn test_button_disabled_in_preview() {
        let (snapshot, _) = single(ElementKind::Button);
        let el = render_component(&snapshot.components()[0], None, true);
        assert!(el.disabled);
        assert_eq!(el.attribute("type"), Some("button"));
        assert_eq!(el.text.as_deref(), Some("Click Me"));
    }

    #[test]
    fn test_input_type_defaults_to_text() {
        let (snapshot, id) = single(ElementKind::Input);
        let snapshot = snapshot.with_updated(&id, &PropsPatch::default().input_type(""));
        let el = render_component(&snapshot.components()[0], None, false);
        assert_eq!(el.attribute("type"), Some("text"));
        assert_eq!(el.attribute("placeholder"), Some("Enter text..."));
        assert_eq!(el.text, None);
        assert!(!el.disabled);
    }

    #[test]
    fn test_image_markup_is_void_and_escaped() {
        let (snapshot, id) = single(ElementKind::Image);
        let snapshot = snapshot.with_updated(&id, &PropsPatch::default().alt("Tom & \"Jerry\""));
        let el = render_component(&snapshot.components()[0], None, false);
        assert_eq!(
            el.to_markup(),
            "<img class=\"rounded-lg max-w-full\" src=\"https://via.placeholder.com/150\" alt=\"Tom &amp; &quot;Jerry&quot;\">"
        );
    }

    #[test]
    fn test_canvas_keeps_component_order() {
        let (s, a) = single(ElementKind::Paragraph);
        let (s, b) = s.with_added(ElementKind::Container);
        match render_canvas(&s, None, false) {
            CanvasView::Elements(elements) => {
                let ids: Vec<_> = elements.iter().map(|e| e.component_id.clone()).collect();
                assert_eq!(ids, vec![a, b]);
                assert_eq!(elements[1].to_markup(), "<div class=\"bg-secondary-light p-4 rounded-lg\"></div>");
            }
            CanvasView::Empty => panic!("expected elements"),
        }
    }
}
