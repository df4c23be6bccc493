//! How long a toast stays on screen

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ToastError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum Duration {
    #[default]
    Short,
    Long,
}

impl Duration {
    pub fn name(self) -> &'static str {
        match self {
            Duration::Short => "short",
            Duration::Long => "long",
        }
    }

    /// Resolves a user-provided name, falling back to [`Duration::Short`]
    /// alongside [`ToastError::InvalidDuration`] when it doesn't match.
    pub fn lookup(name: &str) -> (Duration, Option<ToastError>) {
        match name.parse() {
            Ok(duration) => (duration, None),
            Err(e) => (Duration::Short, Some(e)),
        }
    }
}

impl FromStr for Duration {
    type Err = ToastError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "short" => Ok(Duration::Short),
            "long" => Ok(Duration::Long),
            _ => Err(ToastError::InvalidDuration(s.to_string())),
        }
    }
}

impl TryFrom<String> for Duration {
    type Error = ToastError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
