//! Notification sounds
//!
//! Every sound maps to one of the `ms-winsoundevent` identifiers the toast
//! schema recognises. `Silent` has no identifier and renders a silence flag.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ToastError;

/// Sound played when the toast is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum Audio {
    #[default]
    Default,
    Im,
    Mail,
    Reminder,
    Sms,
    LoopingAlarm,
    LoopingAlarm2,
    LoopingAlarm3,
    LoopingAlarm4,
    LoopingAlarm5,
    LoopingAlarm6,
    LoopingAlarm7,
    LoopingAlarm8,
    LoopingAlarm9,
    LoopingAlarm10,
    LoopingCall,
    LoopingCall2,
    LoopingCall3,
    LoopingCall4,
    LoopingCall5,
    LoopingCall6,
    LoopingCall7,
    LoopingCall8,
    LoopingCall9,
    LoopingCall10,
    Silent,
}

impl Audio {
    pub const ALL: [Audio; 26] = [
        Audio::Default,
        Audio::Im,
        Audio::Mail,
        Audio::Reminder,
        Audio::Sms,
        Audio::LoopingAlarm,
        Audio::LoopingAlarm2,
        Audio::LoopingAlarm3,
        Audio::LoopingAlarm4,
        Audio::LoopingAlarm5,
        Audio::LoopingAlarm6,
        Audio::LoopingAlarm7,
        Audio::LoopingAlarm8,
        Audio::LoopingAlarm9,
        Audio::LoopingAlarm10,
        Audio::LoopingCall,
        Audio::LoopingCall2,
        Audio::LoopingCall3,
        Audio::LoopingCall4,
        Audio::LoopingCall5,
        Audio::LoopingCall6,
        Audio::LoopingCall7,
        Audio::LoopingCall8,
        Audio::LoopingCall9,
        Audio::LoopingCall10,
        Audio::Silent,
    ];

    /// Lower-case name accepted by [`Audio::lookup`].
    pub fn name(self) -> &'static str {
        match self {
            Audio::Default => "default",
            Audio::Im => "im",
            Audio::Mail => "mail",
            Audio::Reminder => "reminder",
            Audio::Sms => "sms",
            Audio::LoopingAlarm => "loopingalarm",
            Audio::LoopingAlarm2 => "loopingalarm2",
            Audio::LoopingAlarm3 => "loopingalarm3",
            Audio::LoopingAlarm4 => "loopingalarm4",
            Audio::LoopingAlarm5 => "loopingalarm5",
            Audio::LoopingAlarm6 => "loopingalarm6",
            Audio::LoopingAlarm7 => "loopingalarm7",
            Audio::LoopingAlarm8 => "loopingalarm8",
            Audio::LoopingAlarm9 => "loopingalarm9",
            Audio::LoopingAlarm10 => "loopingalarm10",
            Audio::LoopingCall => "loopingcall",
            Audio::LoopingCall2 => "loopingcall2",
            Audio::LoopingCall3 => "loopingcall3",
            Audio::LoopingCall4 => "loopingcall4",
            Audio::LoopingCall5 => "loopingcall5",
            Audio::LoopingCall6 => "loopingcall6",
            Audio::LoopingCall7 => "loopingcall7",
            Audio::LoopingCall8 => "loopingcall8",
            Audio::LoopingCall9 => "loopingcall9",
            Audio::LoopingCall10 => "loopingcall10",
            Audio::Silent => "silent",
        }
    }

    /// Platform sound identifier, `None` for [`Audio::Silent`].
    pub fn source(self) -> Option<&'static str> {
        let src = match self {
            Audio::Default => "ms-winsoundevent:Notification.Default",
            Audio::Im => "ms-winsoundevent:Notification.IM",
            Audio::Mail => "ms-winsoundevent:Notification.Mail",
            Audio::Reminder => "ms-winsoundevent:Notification.Reminder",
            Audio::Sms => "ms-winsoundevent:Notification.SMS",
            Audio::LoopingAlarm => "ms-winsoundevent:Notification.Looping.Alarm",
            Audio::LoopingAlarm2 => "ms-winsoundevent:Notification.Looping.Alarm2",
            Audio::LoopingAlarm3 => "ms-winsoundevent:Notification.Looping.Alarm3",
            Audio::LoopingAlarm4 => "ms-winsoundevent:Notification.Looping.Alarm4",
            Audio::LoopingAlarm5 => "ms-winsoundevent:Notification.Looping.Alarm5",
            Audio::LoopingAlarm6 => "ms-winsoundevent:Notification.Looping.Alarm6",
            Audio::LoopingAlarm7 => "ms-winsoundevent:Notification.Looping.Alarm7",
            Audio::LoopingAlarm8 => "ms-winsoundevent:Notification.Looping.Alarm8",
            Audio::LoopingAlarm9 => "ms-winsoundevent:Notification.Looping.Alarm9",
            Audio::LoopingAlarm10 => "ms-winsoundevent:Notification.Looping.Alarm10",
            Audio::LoopingCall => "ms-winsoundevent:Notification.Looping.Call",
            Audio::LoopingCall2 => "ms-winsoundevent:Notification.Looping.Call2",
            Audio::LoopingCall3 => "ms-winsoundevent:Notification.Looping.Call3",
            Audio::LoopingCall4 => "ms-winsoundevent:Notification.Looping.Call4",
            Audio::LoopingCall5 => "ms-winsoundevent:Notification.Looping.Call5",
            Audio::LoopingCall6 => "ms-winsoundevent:Notification.Looping.Call6",
            Audio::LoopingCall7 => "ms-winsoundevent:Notification.Looping.Call7",
            Audio::LoopingCall8 => "ms-winsoundevent:Notification.Looping.Call8",
            Audio::LoopingCall9 => "ms-winsoundevent:Notification.Looping.Call9",
            Audio::LoopingCall10 => "ms-winsoundevent:Notification.Looping.Call10",
            Audio::Silent => return None,
        };
        Some(src)
    }

    /// Resolves a user-provided name, case-insensitively.
    ///
    /// Unknown names resolve to [`Audio::Default`] together with
    /// [`ToastError::InvalidAudio`], so a CLI can warn and carry on.
    pub fn lookup(name: &str) -> (Audio, Option<ToastError>) {
        match name.parse() {
            Ok(audio) => (audio, None),
            Err(e) => (Audio::Default, Some(e)),
        }
    }
}

impl FromStr for Audio {
    type Err = ToastError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_lowercase();
        Audio::ALL
            .into_iter()
            .find(|audio| audio.name() == lower)
            .ok_or_else(|| ToastError::InvalidAudio(s.to_string()))
    }
}

/// Accepts lookup names and, for stored notifications, full platform
/// identifiers such as `ms-winsoundevent:Notification.Mail`.
impl TryFrom<String> for Audio {
    type Error = ToastError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if let Some(audio) = Audio::ALL
            .into_iter()
            .find(|audio| audio.source() == Some(value.as_str()))
        {
            return Ok(audio);
        }
        value.parse()
    }
}

impl fmt::Display for Audio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn lookup_is_case_insensitive() {
        assert_eq!(Audio::lookup("Default").0, Audio::Default);
        assert_eq!(Audio::lookup("MAIL").0, Audio::Mail);
        assert_eq!(Audio::lookup("loopingalarm10").0, Audio::LoopingAlarm10);
        assert_eq!(Audio::lookup("LoopingCall7").0, Audio::LoopingCall7);
        assert_eq!(Audio::lookup("Silent").0, Audio::Silent);
        assert!(Audio::lookup("sMs").1.is_none());
    }

    #[test]
    fn every_name_resolves_to_itself() {
        for audio in Audio::ALL {
            let (found, err) = Audio::lookup(audio.name());
            assert_eq!(found, audio);
            assert!(err.is_none(), "{} reported an error", audio);

            let (found, err) = Audio::lookup(&audio.name().to_uppercase());
            assert_eq!(found, audio);
            assert!(err.is_none());
        }
    }

    #[test]
    fn unknown_name_falls_back_to_default_with_error() {
        for name in ["", "beep", "loopingalarm11", "looping alarm", "ms-winsoundevent:Notification.Mail"] {
            let (audio, err) = Audio::lookup(name);
            assert_eq!(audio, Audio::Default);
            assert!(matches!(err, Some(ToastError::InvalidAudio(ref n)) if n == name));
        }
    }

    #[test]
    fn sources_are_distinct_and_silent_has_none() {
        let sources: HashSet<_> = Audio::ALL.iter().filter_map(|a| a.source()).collect();
        assert_eq!(sources.len(), Audio::ALL.len() - 1);
        assert_eq!(Audio::Silent.source(), None);
        assert_eq!(
            Audio::Default.source(),
            Some("ms-winsoundevent:Notification.Default")
        );
        assert_eq!(
            Audio::LoopingCall10.source(),
            Some("ms-winsoundevent:Notification.Looping.Call10")
        );
    }

    #[test]
    fn serde_uses_lookup_names() {
        let json = serde_json::to_string(&Audio::LoopingAlarm3).unwrap();
        assert_eq!(json, "\"loopingalarm3\"");

        let audio: Audio = serde_json::from_str("\"Reminder\"").unwrap();
        assert_eq!(audio, Audio::Reminder);

        assert!(serde_json::from_str::<Audio>("\"klaxon\"").is_err());
    }

    #[test]
    fn serde_accepts_platform_identifiers() {
        let audio: Audio =
            serde_json::from_str("\"ms-winsoundevent:Notification.Mail\"").unwrap();
        assert_eq!(audio, Audio::Mail);

        let audio: Audio =
            serde_json::from_str("\"ms-winsoundevent:Notification.Looping.Call10\"").unwrap();
        assert_eq!(audio, Audio::LoopingCall10);

        let audio: Audio = serde_json::from_str("\"silent\"").unwrap();
        assert_eq!(audio, Audio::Silent);
    }

    #[test]
    fn lookup_rejects_platform_identifiers() {
        let (audio, err) = Audio::lookup("ms-winsoundevent:Notification.Mail");
        assert_eq!(audio, Audio::Default);
        assert!(err.is_some());
    }
}
