use serde::{Deserialize, Serialize};

use crate::{function_name, Namespace};

/// One row scraped from an element reference page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceEntry {
    pub tag: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub link: String,

    /// Obsolete, deprecated or trashed upstream. Such rows never become catalog entries.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub deprecated: bool,
}

impl SourceEntry {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            description: String::new(),
            link: String::new(),
            deprecated: false,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_link(mut self, link: impl Into<String>) -> Self {
        self.link = link.into();
        self
    }

    pub fn deprecated(mut self) -> Self {
        self.deprecated = true;
        self
    }
}

/// Everything needed to emit one factory binding. Lives only for the duration of a generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementDescriptor {
    pub raw_tag: String,
    pub canonical_name: String,
    pub namespace: Namespace,
    pub self_closing: bool,
    pub description: String,
    pub source_link: String,
}

impl ElementDescriptor {
    /// The snake_case name of the Rust alias for this element.
    pub fn function_name(&self) -> String {
        function_name(&self.canonical_name)
    }
}
