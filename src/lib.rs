//! Windows toast notifications
//!
//! Describe a toast with [`Notification`], then [`push`](Notification::push)
//! it. The notification is rendered to toast XML and shown through a short
//! PowerShell script, so no WinRT bindings are needed.
//!
//! ```no_run
//! use toast::{Action, Audio, Duration, Notification};
//!
//! Notification::new()
//!     .app_id("Example App")
//!     .title("My notification")
//!     .message("Some message about how important something is...")
//!     .action(Action::protocol("I'm a button", ""))
//!     .action(Action::protocol("Me too!", ""))
//!     .audio(Audio::Reminder)
//!     .duration(Duration::Long)
//!     .push()?;
//! # Ok::<(), toast::ToastError>(())
//! ```
//!
//! Nothing reports which button the user picked; protocol actions such as
//! `bingmaps:?q=sushi` or `https://` URIs are the useful kind.

mod activation;
mod audio;
pub mod config;
mod delivery;
mod document;
mod duration;
mod error;
mod notification;
mod notifier;

pub use activation::ActivationType;
pub use audio::Audio;
pub use delivery::{Deliver, PowerShell, script};
pub use document::{DocumentBuilder, escape_xml};
pub use duration::Duration;
pub use error::{Result, ToastError};
pub use notification::{Action, DEFAULT_APP_ID, Notification};
pub use notifier::Notifier;
