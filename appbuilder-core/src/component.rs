//! Component records placed on the canvas.
//!
//! Each element kind has its own property record, so an input can never carry
//! an image `src` and a heading can never carry a `placeholder`. The exported
//! shape stays `{ "id", "type", "props" }` with camelCase prop keys.

use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use tracing::debug;
use uuid::Uuid;

use crate::{ElementKind, ModelError};

/// Identifier of a component, unique for the lifetime of a document.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ComponentId(String);

impl ComponentId {
    /// Generate a fresh, collision-resistant id.
    pub fn generate() -> Self {
        ComponentId(format!("component-{}", Uuid::new_v4().simple()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ComponentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ComponentId {
    fn from(value: &str) -> Self {
        ComponentId(value.to_string())
    }
}

impl From<String> for ComponentId {
    fn from(value: String) -> Self {
        ComponentId(value)
    }
}

/// Props for kinds that render text content: div, h1, h2, p, button.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TextProps {
    pub class_name: String,
    pub children: String,
}

/// Props for a text input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InputProps {
    pub class_name: String,
    pub placeholder: String,
    /// HTML input type (`text`, `email`, ...).
    #[serde(rename = "type")]
    pub input_type: String,
}

/// Props for an image.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ImageProps {
    pub class_name: String,
    pub src: String,
    pub alt: String,
}

/// Property record, one variant per element kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComponentProps {
    Container(TextProps),
    Heading1(TextProps),
    Heading2(TextProps),
    Paragraph(TextProps),
    Button(TextProps),
    Input(InputProps),
    Image(ImageProps),
}

impl ComponentProps {
    /// The props a freshly added component of `kind` starts with.
    pub fn defaults_for(kind: ElementKind) -> Self {
        let text = || TextProps {
            class_name: kind.default_class().to_string(),
            children: kind.default_text().to_string(),
        };

        match kind {
            ElementKind::Container => ComponentProps::Container(text()),
            ElementKind::Heading1 => ComponentProps::Heading1(text()),
            ElementKind::Heading2 => ComponentProps::Heading2(text()),
            ElementKind::Paragraph => ComponentProps::Paragraph(text()),
            ElementKind::Button => ComponentProps::Button(text()),
            ElementKind::Input => ComponentProps::Input(InputProps {
                class_name: kind.default_class().to_string(),
                placeholder: "Enter text...".into(),
                input_type: "text".into(),
            }),
            ElementKind::Image => ComponentProps::Image(ImageProps {
                class_name: kind.default_class().to_string(),
                src: "https://via.placeholder.com/150".into(),
                alt: "Image".into(),
            }),
        }
    }

    pub fn kind(&self) -> ElementKind {
        match self {
            ComponentProps::Container(_) => ElementKind::Container,
            ComponentProps::Heading1(_) => ElementKind::Heading1,
            ComponentProps::Heading2(_) => ElementKind::Heading2,
            ComponentProps::Paragraph(_) => ElementKind::Paragraph,
            ComponentProps::Button(_) => ElementKind::Button,
            ComponentProps::Input(_) => ElementKind::Input,
            ComponentProps::Image(_) => ElementKind::Image,
        }
    }

    pub fn class_name(&self) -> &str {
        match self {
            ComponentProps::Input(p) => &p.class_name,
            ComponentProps::Image(p) => &p.class_name,
            ComponentProps::Container(p)
            | ComponentProps::Heading1(p)
            | ComponentProps::Heading2(p)
            | ComponentProps::Paragraph(p)
            | ComponentProps::Button(p) => &p.class_name,
        }
    }

    /// Text content, for kinds that have any.
    pub fn text(&self) -> Option<&str> {
        self.as_text().map(|p| p.children.as_str())
    }

    fn as_text(&self) -> Option<&TextProps> {
        match self {
            ComponentProps::Container(p)
            | ComponentProps::Heading1(p)
            | ComponentProps::Heading2(p)
            | ComponentProps::Paragraph(p)
            | ComponentProps::Button(p) => Some(p),
            ComponentProps::Input(_) | ComponentProps::Image(_) => None,
        }
    }

    /// Shallow merge: supplied fields overwrite, everything else is kept.
    /// Fields the kind does not carry are dropped.
    pub fn patched(&self, patch: &PropsPatch) -> Self {
        let mut next = self.clone();
        let kind = self.kind();

        match &mut next {
            ComponentProps::Container(p)
            | ComponentProps::Heading1(p)
            | ComponentProps::Heading2(p)
            | ComponentProps::Paragraph(p)
            | ComponentProps::Button(p) => {
                merge(&mut p.class_name, &patch.class_name);
                merge(&mut p.children, &patch.children);
                if patch.placeholder.is_some()
                    || patch.input_type.is_some()
                    || patch.src.is_some()
                    || patch.alt.is_some()
                {
                    debug!(kind = %kind, "ignoring patch fields not carried by text components");
                }
            }
            ComponentProps::Input(p) => {
                merge(&mut p.class_name, &patch.class_name);
                merge(&mut p.placeholder, &patch.placeholder);
                merge(&mut p.input_type, &patch.input_type);
                if patch.children.is_some() || patch.src.is_some() || patch.alt.is_some() {
                    debug!(kind = %kind, "ignoring patch fields not carried by inputs");
                }
            }
            ComponentProps::Image(p) => {
                merge(&mut p.class_name, &patch.class_name);
                merge(&mut p.src, &patch.src);
                merge(&mut p.alt, &patch.alt);
                if patch.children.is_some()
                    || patch.placeholder.is_some()
                    || patch.input_type.is_some()
                {
                    debug!(kind = %kind, "ignoring patch fields not carried by images");
                }
            }
        }

        next
    }

    fn from_value(kind: ElementKind, value: serde_json::Value) -> Result<Self, ModelError> {
        let invalid = |e: serde_json::Error| ModelError::InvalidProps {
            tag: kind.tag().to_string(),
            reason: e.to_string(),
        };

        let props = match kind {
            ElementKind::Container => {
                ComponentProps::Container(serde_json::from_value(value).map_err(invalid)?)
            }
            ElementKind::Heading1 => {
                ComponentProps::Heading1(serde_json::from_value(value).map_err(invalid)?)
            }
            ElementKind::Heading2 => {
                ComponentProps::Heading2(serde_json::from_value(value).map_err(invalid)?)
            }
            ElementKind::Paragraph => {
                ComponentProps::Paragraph(serde_json::from_value(value).map_err(invalid)?)
            }
            ElementKind::Button => {
                ComponentProps::Button(serde_json::from_value(value).map_err(invalid)?)
            }
            ElementKind::Input => ComponentProps::Input(serde_json::from_value(value).map_err(invalid)?),
            ElementKind::Image => ComponentProps::Image(serde_json::from_value(value).map_err(invalid)?),
        };
        Ok(props)
    }
}

fn merge(field: &mut String, update: &Option<String>) {
    if let Some(value) = update {
        field.clone_from(value);
    }
}

/// Sparse property update. `None` means "leave as is".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PropsPatch {
    pub class_name: Option<String>,
    pub children: Option<String>,
    pub placeholder: Option<String>,
    #[serde(rename = "type")]
    pub input_type: Option<String>,
    pub src: Option<String>,
    pub alt: Option<String>,
}

impl PropsPatch {
    pub fn class_name(mut self, value: impl Into<String>) -> Self {
        self.class_name = Some(value.into());
        self
    }

    pub fn children(mut self, value: impl Into<String>) -> Self {
        self.children = Some(value.into());
        self
    }

    pub fn placeholder(mut self, value: impl Into<String>) -> Self {
        self.placeholder = Some(value.into());
        self
    }

    pub fn input_type(mut self, value: impl Into<String>) -> Self {
        self.input_type = Some(value.into());
        self
    }

    pub fn src(mut self, value: impl Into<String>) -> Self {
        self.src = Some(value.into());
        self
    }

    pub fn alt(mut self, value: impl Into<String>) -> Self {
        self.alt = Some(value.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        *self == PropsPatch::default()
    }
}

/// One placed element.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "RawComponent")]
pub struct Component {
    pub id: ComponentId,
    pub props: ComponentProps,
}

impl Component {
    /// A new component of `kind` with a fresh id and default props.
    pub fn new(kind: ElementKind) -> Self {
        Self {
            id: ComponentId::generate(),
            props: ComponentProps::defaults_for(kind),
        }
    }

    pub fn kind(&self) -> ElementKind {
        self.props.kind()
    }
}

impl Serialize for Component {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Component", 3)?;
        state.serialize_field("id", &self.id)?;
        state.serialize_field("type", self.kind().tag())?;
        match &self.props {
            ComponentProps::Container(p)
            | ComponentProps::Heading1(p)
            | ComponentProps::Heading2(p)
            | ComponentProps::Paragraph(p)
            | ComponentProps::Button(p) => state.serialize_field("props", p)?,
            ComponentProps::Input(p) => state.serialize_field("props", p)?,
            ComponentProps::Image(p) => state.serialize_field("props", p)?,
        }
        state.end()
    }
}

/// Wire shape used when reading a component back in.
#[derive(Deserialize)]
struct RawComponent {
    id: String,
    #[serde(rename = "type")]
    kind: String,
    #[serde(default = "empty_props")]
    props: serde_json::Value,
}

fn empty_props() -> serde_json::Value {
    serde_json::Value::Object(serde_json::Map::new())
}

impl TryFrom<RawComponent> for Component {
    type Error = ModelError;

    fn try_from(raw: RawComponent) -> Result<Self, Self::Error> {
        let kind = ElementKind::from_tag(&raw.kind)?;
        let props = ComponentProps::from_value(kind, raw.props)?;
        Ok(Component {
            id: ComponentId(raw.id),
            props,
        })
    }
}
