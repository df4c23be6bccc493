//! Push orchestration: defaults, render, deliver

use crate::delivery::{Deliver, PowerShell};
use crate::document::DocumentBuilder;
use crate::error::Result;
use crate::notification::Notification;

/// Renders notifications and hands them to a delivery collaborator.
///
/// Holds no mutable state, so a single notifier can be shared between threads
/// when its collaborator allows it.
pub struct Notifier<D = PowerShell> {
    builder: DocumentBuilder,
    delivery: D,
}

impl Notifier<PowerShell> {
    /// Create a notifier that shows toasts through `powershell`
    pub fn new() -> Result<Self> {
        Self::with_delivery(PowerShell::default())
    }
}

impl<D: Deliver> Notifier<D> {
    pub fn with_delivery(delivery: D) -> Result<Self> {
        Ok(Notifier {
            builder: DocumentBuilder::new()?,
            delivery,
        })
    }

    pub fn with_parts(builder: DocumentBuilder, delivery: D) -> Self {
        Notifier { builder, delivery }
    }

    /// Apply defaults and render, without delivering.
    pub fn render(&self, notification: Notification) -> Result<String> {
        self.builder.build(&notification.with_defaults())
    }

    /// Show a notification, blocking until delivery finishes.
    ///
    /// Render and delivery errors are returned as they are; nothing is retried.
    pub fn push(&self, notification: Notification) -> Result<()> {
        let notification = notification.with_defaults();
        let document = self.builder.build(&notification)?;
        tracing::debug!("Rendered toast document:\n{}", document);

        self.delivery
            .deliver(&document, notification.resolved_app_id())
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::error::ToastError;
    use crate::{Audio, DEFAULT_APP_ID};

    #[derive(Default)]
    struct Recorder {
        calls: RefCell<Vec<(String, String)>>,
    }

    impl Deliver for &Recorder {
        fn deliver(&self, document: &str, app_id: &str) -> Result<()> {
            self.calls
                .borrow_mut()
                .push((document.to_string(), app_id.to_string()));
            Ok(())
        }
    }

    struct Refuse;

    impl Deliver for Refuse {
        fn deliver(&self, _document: &str, _app_id: &str) -> Result<()> {
            Err(ToastError::Config("refused".to_string()))
        }
    }

    #[test]
    fn push_defaults_then_delivers() {
        let recorder = Recorder::default();
        let notifier = Notifier::with_delivery(&recorder).unwrap();

        notifier
            .push(Notification::new().app_id("Acme").title("Hello").message("World"))
            .unwrap();

        let calls = recorder.calls.borrow();
        assert_eq!(calls.len(), 1);
        let (document, app_id) = &calls[0];
        assert_eq!(app_id, "Acme");
        assert!(document.contains(r#"activationType="protocol""#));
        assert!(document.contains(r#"duration="short""#));
        assert!(document.contains(Audio::Default.source().unwrap()));
    }

    #[test]
    fn push_uses_default_app_id() {
        let recorder = Recorder::default();
        let notifier = Notifier::with_delivery(&recorder).unwrap();

        notifier.push(Notification::new().title("x")).unwrap();

        assert_eq!(recorder.calls.borrow()[0].1, DEFAULT_APP_ID);
    }

    #[test]
    fn delivery_error_is_returned_unchanged() {
        let notifier = Notifier::with_delivery(Refuse).unwrap();
        let err = notifier.push(Notification::new()).unwrap_err();

        assert!(matches!(err, ToastError::Config(ref msg) if msg == "refused"));
    }

    #[test]
    fn render_error_skips_delivery() {
        let recorder = Recorder::default();
        let builder = DocumentBuilder::with_template("{{ nope }}").unwrap();
        let notifier = Notifier::with_parts(builder, &recorder);

        let err = notifier.push(Notification::new()).unwrap_err();

        assert!(matches!(err, ToastError::Render(_)));
        assert!(recorder.calls.borrow().is_empty());
    }

    #[test]
    fn render_matches_pushed_document() {
        let recorder = Recorder::default();
        let notifier = Notifier::with_delivery(&recorder).unwrap();
        let n = Notification::new().title("same");

        let rendered = notifier.render(n.clone()).unwrap();
        notifier.push(n).unwrap();

        assert_eq!(recorder.calls.borrow()[0].0, rendered);
    }
}
