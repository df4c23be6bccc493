//! Toast XML document construction
//!
//! The document follows the adaptive toast schema: a `<toast>` root carrying
//! activation and duration, a `ToastGeneric` binding with images and text, an
//! `<audio>` element and an optional `<actions>` block.

use std::collections::HashMap;

use serde::Serialize;
use tera::{Context, Tera, Value};

use crate::error::{Result, ToastError};
use crate::notification::Notification;

const TEMPLATE_NAME: &str = "toast.xml";

const TOAST_TEMPLATE: &str = r#"<toast activationType="{{ activation_type }}" launch="{{ launch }}" duration="{{ duration }}">
    <visual>
        <binding template="ToastGeneric">
{%- if hero_image %}
            <image placement="hero" src="{{ hero_image }}" />
{%- endif %}
{%- if icon %}
            <image placement="appLogoOverride" src="{{ icon }}" />
{%- endif %}
{%- if image %}
            <image src="{{ image }}" />
{%- endif %}
{%- if title %}
            <text><![CDATA[{{ title | cdata | safe }}]]></text>
{%- endif %}
{%- if message %}
            <text><![CDATA[{{ message | cdata | safe }}]]></text>
{%- endif %}
{%- if attribution %}
            <text placement="attribution">{{ attribution }}</text>
{%- endif %}
        </binding>
    </visual>
{%- if audio.silent %}
    <audio silent="true" />
{%- else %}
    <audio src="{{ audio.src }}" loop="{{ audio.looping }}" />
{%- endif %}
{%- if actions %}
    <actions>
{%- for action in actions %}
        <action activationType="{{ action.activation_type }}" content="{{ action.label }}" arguments="{{ action.arguments }}" />
{%- endfor %}
    </actions>
{%- endif %}
</toast>
"#;

/// Renders notifications into toast XML.
///
/// The template is parsed once when the builder is created and never changes
/// afterwards, so one builder can render any number of documents.
pub struct DocumentBuilder {
    tera: Tera,
}

#[derive(Serialize)]
struct DocumentView<'a> {
    activation_type: &'static str,
    launch: &'a str,
    duration: &'static str,
    hero_image: Option<&'a str>,
    icon: Option<&'a str>,
    image: Option<&'a str>,
    title: Option<&'a str>,
    message: Option<&'a str>,
    attribution: Option<&'a str>,
    audio: AudioView,
    actions: Vec<ActionView<'a>>,
}

#[derive(Serialize)]
struct AudioView {
    silent: bool,
    src: &'static str,
    looping: bool,
}

#[derive(Serialize)]
struct ActionView<'a> {
    activation_type: &'static str,
    label: &'a str,
    arguments: &'a str,
}

impl DocumentBuilder {
    /// Create a builder with the standard toast template
    pub fn new() -> Result<Self> {
        Self::with_template(TOAST_TEMPLATE)
    }

    /// Create a builder from a custom tera template.
    ///
    /// The template sees the same variables as the standard one and is
    /// autoescaped for XML. Title and message are expected to go through the
    /// `cdata` filter followed by `safe`.
    pub fn with_template(source: &str) -> Result<Self> {
        let mut tera = Tera::default();
        tera.autoescape_on(vec![".xml"]);
        tera.set_escape_fn(escape_xml);
        tera.register_filter("cdata", cdata);
        tera.add_raw_template(TEMPLATE_NAME, source)
            .map_err(ToastError::Template)?;

        Ok(DocumentBuilder { tera })
    }

    /// Render a notification as-is.
    ///
    /// Defaults are not applied here; unset enum fields render as empty
    /// attributes. Call [`Notification::with_defaults`] first.
    pub fn build(&self, notification: &Notification) -> Result<String> {
        let view = DocumentView::from(notification);
        let context = Context::from_serialize(&view).map_err(ToastError::Render)?;

        self.tera
            .render(TEMPLATE_NAME, &context)
            .map_err(ToastError::Render)
    }
}

impl<'a> From<&'a Notification> for DocumentView<'a> {
    fn from(n: &'a Notification) -> Self {
        let audio = match n.audio {
            Some(audio) => AudioView {
                silent: audio.source().is_none(),
                src: audio.source().unwrap_or_default(),
                looping: n.looping,
            },
            None => AudioView {
                silent: false,
                src: "",
                looping: n.looping,
            },
        };

        DocumentView {
            activation_type: n.activation_type.map(|t| t.name()).unwrap_or_default(),
            launch: n.activation_arguments.as_deref().unwrap_or_default(),
            duration: n.duration.map(|d| d.name()).unwrap_or_default(),
            hero_image: non_empty(&n.hero_image),
            icon: non_empty(&n.icon),
            image: non_empty(&n.image),
            title: non_empty(&n.title),
            message: non_empty(&n.message),
            attribution: non_empty(&n.attribution),
            audio,
            actions: n
                .actions
                .iter()
                .map(|action| ActionView {
                    activation_type: action.kind.name(),
                    label: &action.label,
                    arguments: &action.arguments,
                })
                .collect(),
        }
    }
}

fn non_empty(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.is_empty())
}

/// Escape text for use in XML attribute values and element content.
pub fn escape_xml(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

/// Splits `]]>` so the text can't close its CDATA section early.
fn cdata(value: &Value, _args: &HashMap<String, Value>) -> tera::Result<Value> {
    let text = value
        .as_str()
        .ok_or_else(|| tera::Error::msg("cdata filter expects a string"))?;
    Ok(Value::String(text.replace("]]>", "]]]]><![CDATA[>")))
}
