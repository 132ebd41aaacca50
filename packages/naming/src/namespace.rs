use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::NamingError;

/// The element collection a tag was documented in.
///
/// HTML and SVG share several tag names (`a`, `script`, `style`, `title`), so
/// every derivation is scoped to one collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Namespace {
    Html,
    Svg,
}

impl Namespace {
    pub const SVG_URI: &'static str = "http://www.w3.org/2000/svg";

    /// The XML namespace elements of this collection live in. HTML elements carry none.
    pub fn uri(self) -> Option<&'static str> {
        match self {
            Namespace::Html => None,
            Namespace::Svg => Some(Self::SVG_URI),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Namespace::Html => "html",
            Namespace::Svg => "svg",
        }
    }
}

impl Display for Namespace {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Namespace {
    type Err = NamingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "html" => Ok(Namespace::Html),
            "svg" => Ok(Namespace::Svg),
            _ => Err(NamingError::UnknownNamespace(s.to_string())),
        }
    }
}
