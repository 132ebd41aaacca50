use std::path::Path;

use serde::{Deserialize, Serialize};
use tagkit_naming::{Namespace, SourceEntry};

use crate::{Error, Result};

/// A scraped element list for one collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    pub namespace: Namespace,

    /// The page the entries were scraped from.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub source: String,

    #[serde(default)]
    pub elements: Vec<SourceEntry>,
}

impl Manifest {
    pub fn new(namespace: Namespace) -> Self {
        Self {
            namespace,
            source: String::new(),
            elements: Vec::new(),
        }
    }

    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        toml::from_str(&contents).map_err(|source| Error::Toml {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string(self)?)
    }

    /// Entries that will become catalog entries, before duplicate filtering.
    pub fn live(&self) -> impl Iterator<Item = &SourceEntry> {
        self.elements.iter().filter(|entry| !entry.deprecated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn toml_round_trip_keeps_flags() {
        let mut manifest = Manifest::new(Namespace::Svg);
        manifest.elements.push(SourceEntry::new("g").with_description("A group"));
        manifest.elements.push(SourceEntry::new("tref").deprecated());

        let text = manifest.to_toml().unwrap();
        assert!(text.contains("namespace = \"svg\""));
        assert!(!text.contains("source"));

        let parsed: Manifest = toml::from_str(&text).unwrap();
        assert_eq!(parsed, manifest);
        assert_eq!(parsed.live().count(), 1);
    }
}
