use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Text shown wherever an official reading is absent.
pub const MISSING_READING: &str = "N/A";

/// A temperature reading in degrees Celsius that may be absent.
///
/// Serializes as a plain number, or as the string `"N/A"` when missing, so
/// chart data keeps the same shape the page tables show. A recorded `0.0`
/// is a real reading and never collapses into [`Reading::Missing`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Reading {
    Recorded(f64),
    Missing,
}

impl Reading {
    pub fn is_missing(&self) -> bool {
        matches!(self, Reading::Missing)
    }
}

impl From<Option<f64>> for Reading {
    fn from(value: Option<f64>) -> Self {
        value.map_or(Reading::Missing, Reading::Recorded)
    }
}

impl fmt::Display for Reading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reading::Recorded(value) => write!(f, "{value}"),
            Reading::Missing => f.write_str(MISSING_READING),
        }
    }
}

impl Serialize for Reading {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Reading::Recorded(value) => serializer.serialize_f64(*value),
            Reading::Missing => serializer.serialize_str(MISSING_READING),
        }
    }
}

impl<'de> Deserialize<'de> for Reading {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Number(f64),
            Text(String),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Number(value) => Ok(Reading::Recorded(value)),
            Raw::Text(text) if text == MISSING_READING => Ok(Reading::Missing),
            Raw::Text(text) => Err(serde::de::Error::custom(format!(
                "expected a number or \"{MISSING_READING}\", got \"{text}\""
            ))),
        }
    }
}
