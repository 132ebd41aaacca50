use thiserror::Error as ThisError;

use crate::Namespace;

#[derive(ThisError, Debug, Clone, PartialEq, Eq)]
pub enum NamingError {
    #[error("Element tag name is empty")]
    EmptyTag,

    #[error("Tag `{tag}` derives `{name}`, which is not a valid identifier")]
    InvalidIdentifier { tag: String, name: String },

    #[error("Canonical name `{name}` claimed by {first_namespace} `{first}` is derived again from {second_namespace} `{second}`")]
    DuplicateName {
        name: String,
        first: String,
        first_namespace: Namespace,
        second: String,
        second_namespace: Namespace,
    },

    #[error("Alias `{alias}` for {first_namespace} `{first}` is derived again from {second_namespace} `{second}`")]
    DuplicateAlias {
        alias: String,
        first: String,
        first_namespace: Namespace,
        second: String,
        second_namespace: Namespace,
    },

    #[error("Unknown element namespace: {0}")]
    UnknownNamespace(String),
}
