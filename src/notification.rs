//! The toast notification description
//!
//! A [`Notification`] is plain data. It is turned into an XML document by
//! [`DocumentBuilder`](crate::DocumentBuilder) and shown by a
//! [`Notifier`](crate::Notifier).

use serde::{Deserialize, Serialize};

use crate::activation::ActivationType;
use crate::audio::Audio;
use crate::duration::Duration;
use crate::error::Result;
use crate::notifier::Notifier;

/// Label Windows shows when no app id is given.
pub const DEFAULT_APP_ID: &str = "Windows App";

/// The toast notification data.
///
/// `app_id` and `title` are strongly recommended. The app id shows up in the
/// Action Center and groups notifications together, so make it something
/// readable rather than `com.example.MyApp`.
///
/// If only a message is set, Windows renders it in the heavier title style.
/// Image paths must be absolute: the script runs from a temporary directory.
///
/// ```no_run
/// use toast::{Audio, Notification};
///
/// Notification::new()
///     .app_id("Google Mail")
///     .title("New message")
///     .message("Lunch on Friday?")
///     .icon("C:/Program Files/Google Mail/icons/logo.png")
///     .activation_arguments("https://gmail.com")
///     .audio(Audio::Mail)
///     .push()?;
/// # Ok::<(), toast::ToastError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    #[serde(rename = "appID", default, skip_serializing_if = "Option::is_none")]
    pub app_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attribution: Option<String>,

    /// Shown to the left of the title and message
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,

    /// Large banner image
    #[serde(rename = "hero", default, skip_serializing_if = "Option::is_none")]
    pub hero_image: Option<String>,

    /// Inline image, local path or URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub activation_type: Option<ActivationType>,

    /// Launched when the toast body is clicked, e.g. `https://example.com`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub activation_arguments: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub actions: Vec<Action>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio: Option<Audio>,

    /// Ignored when `audio` is [`Audio::Silent`]
    #[serde(rename = "loop", default)]
    pub looping: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<Duration>,
}

/// A button below the toast body.
///
/// ```
/// use toast::Action;
///
/// let maps = Action::protocol("Open Maps", "bingmaps:?q=sushi");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Action {
    #[serde(rename = "type", default)]
    pub kind: ActivationType,

    #[serde(default)]
    pub label: String,

    #[serde(default)]
    pub arguments: String,
}

impl Action {
    pub fn new(kind: ActivationType, label: impl Into<String>, arguments: impl Into<String>) -> Self {
        Action {
            kind,
            label: label.into(),
            arguments: arguments.into(),
        }
    }

    pub fn protocol(label: impl Into<String>, arguments: impl Into<String>) -> Self {
        Self::new(ActivationType::Protocol, label, arguments)
    }
}

impl Notification {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn app_id(mut self, app_id: impl Into<String>) -> Self {
        self.app_id = Some(app_id.into());
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn attribution(mut self, attribution: impl Into<String>) -> Self {
        self.attribution = Some(attribution.into());
        self
    }

    pub fn icon(mut self, path: impl Into<String>) -> Self {
        self.icon = Some(path.into());
        self
    }

    pub fn hero_image(mut self, path: impl Into<String>) -> Self {
        self.hero_image = Some(path.into());
        self
    }

    pub fn image(mut self, src: impl Into<String>) -> Self {
        self.image = Some(src.into());
        self
    }

    pub fn activation_type(mut self, kind: ActivationType) -> Self {
        self.activation_type = Some(kind);
        self
    }

    pub fn activation_arguments(mut self, arguments: impl Into<String>) -> Self {
        self.activation_arguments = Some(arguments.into());
        self
    }

    pub fn action(mut self, action: Action) -> Self {
        self.actions.push(action);
        self
    }

    pub fn audio(mut self, audio: Audio) -> Self {
        self.audio = Some(audio);
        self
    }

    pub fn looping(mut self, looping: bool) -> Self {
        self.looping = looping;
        self
    }

    pub fn duration(mut self, duration: Duration) -> Self {
        self.duration = Some(duration);
        self
    }

    /// Returns a copy with every unset enum field filled in.
    ///
    /// Audio defaults to [`Audio::Default`], never to silence. Fields that are
    /// already set are left alone, so applying this twice is a no-op.
    pub fn with_defaults(self) -> Self {
        Notification {
            activation_type: Some(self.activation_type.unwrap_or_default()),
            duration: Some(self.duration.unwrap_or_default()),
            audio: Some(self.audio.unwrap_or_default()),
            ..self
        }
    }

    /// The identity the toast is shown under.
    pub fn resolved_app_id(&self) -> &str {
        match self.app_id.as_deref() {
            Some(id) if !id.is_empty() => id,
            _ => DEFAULT_APP_ID,
        }
    }

    /// Shows the notification through PowerShell, blocking until it exits.
    ///
    /// Running PowerShell is by far the slowest step and can take a few
    /// seconds.
    pub fn push(self) -> Result<()> {
        Notifier::new()?.push(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_fill_unset_fields() {
        let n = Notification::new()
            .app_id("Acme")
            .title("Hello")
            .message("World")
            .with_defaults();

        assert_eq!(n.activation_type, Some(ActivationType::Protocol));
        assert_eq!(n.duration, Some(Duration::Short));
        assert_eq!(n.audio, Some(Audio::Default));
        assert_eq!(n.title.as_deref(), Some("Hello"));
        assert_eq!(n.message.as_deref(), Some("World"));
    }

    #[test]
    fn defaults_keep_explicit_values() {
        let n = Notification::new()
            .activation_type(ActivationType::Foreground)
            .duration(Duration::Long)
            .audio(Audio::Silent)
            .with_defaults();

        assert_eq!(n.activation_type, Some(ActivationType::Foreground));
        assert_eq!(n.duration, Some(Duration::Long));
        assert_eq!(n.audio, Some(Audio::Silent));
    }

    #[test]
    fn defaults_are_idempotent() {
        let base = Notification::new()
            .title("t")
            .action(Action::protocol("Open", "https://example.com"))
            .looping(true);

        let once = base.clone().with_defaults();
        let twice = once.clone().with_defaults();
        assert_eq!(once, twice);
    }

    #[test]
    fn app_id_falls_back_to_platform_label() {
        assert_eq!(Notification::new().resolved_app_id(), DEFAULT_APP_ID);
        assert_eq!(Notification::new().app_id("").resolved_app_id(), DEFAULT_APP_ID);
        assert_eq!(Notification::new().app_id("Acme").resolved_app_id(), "Acme");
    }

    #[test]
    fn deserializes_wire_names() {
        let json = r#"{
            "appID": "Acme",
            "title": "Build finished",
            "hero": "C:/img/hero.png",
            "activationArguments": "https://ci.example.com",
            "actions": [{"type": "protocol", "label": "Open", "arguments": "https://ci.example.com/1"}],
            "audio": "LoopingCall2",
            "loop": true,
            "duration": "long"
        }"#;

        let n: Notification = serde_json::from_str(json).unwrap();
        assert_eq!(n.app_id.as_deref(), Some("Acme"));
        assert_eq!(n.hero_image.as_deref(), Some("C:/img/hero.png"));
        assert_eq!(n.audio, Some(Audio::LoopingCall2));
        assert!(n.looping);
        assert_eq!(n.duration, Some(Duration::Long));
        assert_eq!(
            n.actions,
            vec![Action::protocol("Open", "https://ci.example.com/1")]
        );
    }

    #[test]
    fn rejects_unknown_audio_in_json() {
        let err = serde_json::from_str::<Notification>(r#"{"audio": "gong"}"#).unwrap_err();
        assert!(err.to_string().contains("invalid audio"));
    }
}
