use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{FlowError, FlowResult};

/// Colour of a scene or choice.
///
/// Colours double as a lightweight typing scheme for the story canvas:
/// green edges grant tricks, yellow edges are gated by tricks, and orange
/// edges link a scene to its state variant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Color {
    /// No explicit colour.
    #[default]
    Gray,
    /// Canvas code `"1"`.
    Red,
    /// Canvas code `"2"`.
    Orange,
    /// Canvas code `"3"`.
    Yellow,
    /// Canvas code `"4"`.
    Green,
    /// Canvas code `"5"`.
    Blue,
    /// Canvas code `"6"`.
    Purple,
}

impl Color {
    /// Map an optional canvas colour code to a colour.
    ///
    /// An absent code is gray; any code outside `"1"`..=`"6"` is an error.
    pub fn from_code(code: Option<&str>) -> FlowResult<Self> {
        match code {
            None => Ok(Self::Gray),
            Some("1") => Ok(Self::Red),
            Some("2") => Ok(Self::Orange),
            Some("3") => Ok(Self::Yellow),
            Some("4") => Ok(Self::Green),
            Some("5") => Ok(Self::Blue),
            Some("6") => Ok(Self::Purple),
            Some(other) => Err(FlowError::UnrecognizedColor(other.to_string())),
        }
    }

    /// The canvas code for this colour, `None` for gray.
    pub fn code(self) -> Option<&'static str> {
        match self {
            Self::Gray => None,
            Self::Red => Some("1"),
            Self::Orange => Some("2"),
            Self::Yellow => Some("3"),
            Self::Green => Some("4"),
            Self::Blue => Some("5"),
            Self::Purple => Some("6"),
        }
    }

    /// Lowercase colour name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Gray => "gray",
            Self::Red => "red",
            Self::Orange => "orange",
            Self::Yellow => "yellow",
            Self::Green => "green",
            Self::Blue => "blue",
            Self::Purple => "purple",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
