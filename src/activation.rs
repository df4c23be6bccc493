//! Activation behaviour for the toast body and its action buttons

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ToastError;

/// What happens when the toast (or one of its buttons) is clicked.
///
/// Only `Protocol` is useful from an unpackaged process: nothing reports the
/// user's choice back, so the arguments are launched as a URI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum ActivationType {
    Foreground,
    Background,
    #[default]
    Protocol,
    System,
}

impl ActivationType {
    pub fn name(self) -> &'static str {
        match self {
            ActivationType::Foreground => "foreground",
            ActivationType::Background => "background",
            ActivationType::Protocol => "protocol",
            ActivationType::System => "system",
        }
    }

    pub fn lookup(name: &str) -> (ActivationType, Option<ToastError>) {
        match name.parse() {
            Ok(kind) => (kind, None),
            Err(e) => (ActivationType::Protocol, Some(e)),
        }
    }
}

impl FromStr for ActivationType {
    type Err = ToastError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "foreground" => Ok(ActivationType::Foreground),
            "background" => Ok(ActivationType::Background),
            "protocol" => Ok(ActivationType::Protocol),
            "system" => Ok(ActivationType::System),
            _ => Err(ToastError::InvalidActivationType(s.to_string())),
        }
    }
}

impl TryFrom<String> for ActivationType {
    type Error = ToastError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for ActivationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_matches_schema_values() {
        assert_eq!(ActivationType::lookup("Protocol").0, ActivationType::Protocol);
        assert_eq!(ActivationType::lookup("FOREGROUND").0, ActivationType::Foreground);
        assert_eq!(ActivationType::lookup("system").0, ActivationType::System);

        let (kind, err) = ActivationType::lookup("url");
        assert_eq!(kind, ActivationType::Protocol);
        assert!(matches!(err, Some(ToastError::InvalidActivationType(_))));
    }
}
