//! Raw tag to canonical name derivation.
//!
//! The rules, in order:
//!
//! 1. A tag listed in the namespace's override table takes the listed name.
//! 2. Otherwise the tag is split on `-`; the first segment is kept as-is and every later
//!    segment has its first character upper-cased before they are joined.
//! 3. The first character of the result is upper-cased.
//! 4. SVG names that did not come from an override get an `Svg` prefix, except for `svg` itself.
//!
//! The result must be an ASCII identifier.

use std::collections::{HashMap, HashSet};

use convert_case::{Boundary, Case, Casing};

use crate::{is_self_closing, overrides, ElementDescriptor, Namespace, NamingError, SourceEntry};

/// Derive the canonical name for one raw tag.
///
/// ```
/// use tagkit_naming::{derive_name, Namespace};
///
/// assert_eq!(derive_name("dl", Namespace::Html).unwrap(), "DescriptionList");
/// assert_eq!(derive_name("circle", Namespace::Svg).unwrap(), "SvgCircle");
/// assert_eq!(derive_name("svg", Namespace::Svg).unwrap(), "Svg");
/// ```
pub fn derive_name(tag: &str, namespace: Namespace) -> Result<String, NamingError> {
    if tag.is_empty() {
        return Err(NamingError::EmptyTag);
    }

    let name = match overrides(namespace).get(tag) {
        Some(name) => capitalize(name),
        None => {
            let name = capitalize(&camel_join(tag));
            match namespace {
                Namespace::Svg if name != "Svg" => format!("Svg{name}"),
                _ => name,
            }
        }
    };

    if !is_valid_identifier(&name) {
        return Err(NamingError::InvalidIdentifier {
            tag: tag.to_string(),
            name,
        });
    }

    Ok(name)
}

/// Join hyphen-separated segments camel-case style: `font-face-uri` becomes `fontFaceUri`.
///
/// Empty segments (from doubled or trailing hyphens) contribute nothing.
pub fn camel_join(tag: &str) -> String {
    let mut segments = tag.split('-');
    let mut out = String::with_capacity(tag.len());
    if let Some(first) = segments.next() {
        out.push_str(first);
    }
    for segment in segments {
        out.push_str(&capitalize(segment));
    }
    out
}

/// Upper-case the first character, leaving the rest untouched.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// An ASCII letter followed by ASCII letters and digits.
pub fn is_valid_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() => chars.all(|c| c.is_ascii_alphanumeric()),
        _ => false,
    }
}

/// Keywords and reserved words that can be written as raw identifiers.
const RAW_KEYWORDS: &[&str] = &[
    "abstract", "as", "async", "await", "become", "box", "break", "const", "continue", "do",
    "dyn", "else", "enum", "extern", "false", "final", "fn", "for", "gen", "if", "impl", "in",
    "let", "loop", "macro", "match", "mod", "move", "mut", "override", "priv", "pub", "ref",
    "return", "static", "struct", "trait", "true", "try", "type", "typeof", "unsafe", "unsized",
    "use", "virtual", "where", "while", "yield",
];

/// Path keywords have no raw form.
const PATH_KEYWORDS: &[&str] = &["crate", "self", "super"];

/// The snake_case function name for a canonical name: `DescriptionList` becomes
/// `description_list`, `SvgFeFuncA` becomes `svg_fe_func_a`, and `H1` stays `h1`.
///
/// Keywords come back as raw identifiers; `crate`, `self` and `super` get a trailing underscore.
pub fn function_name(canonical: &str) -> String {
    let mut out = canonical
        .without_boundaries(&Boundary::digits())
        .to_case(Case::Snake);

    if PATH_KEYWORDS.contains(&out.as_str()) {
        out.push('_');
    } else if RAW_KEYWORDS.contains(&out.as_str()) {
        out.insert_str(0, "r#");
    }

    out
}

/// Tracks every name handed out during one generation run.
///
/// Deprecated rows and repeated raw tags are skipped. A canonical name or alias derived twice
/// is an error.
#[derive(Debug, Default)]
pub struct Deriver {
    claimed: HashMap<String, (Namespace, String)>,
    aliases: HashMap<String, (Namespace, String)>,
    seen: HashSet<(Namespace, String)>,
}

impl Deriver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Derive a descriptor for one entry, or `None` if the entry is skipped.
    pub fn derive(
        &mut self,
        namespace: Namespace,
        entry: &SourceEntry,
    ) -> Result<Option<ElementDescriptor>, NamingError> {
        if entry.deprecated {
            tracing::debug!(tag = %entry.tag, %namespace, "skipping deprecated element");
            return Ok(None);
        }

        let canonical_name = derive_name(&entry.tag, namespace)?;

        if !self.seen.insert((namespace, entry.tag.clone())) {
            tracing::debug!(tag = %entry.tag, %namespace, "skipping repeated element");
            return Ok(None);
        }

        if let Some((first_namespace, first)) = self.claimed.get(&canonical_name) {
            return Err(NamingError::DuplicateName {
                name: canonical_name,
                first: first.clone(),
                first_namespace: *first_namespace,
                second: entry.tag.clone(),
                second_namespace: namespace,
            });
        }

        let alias = function_name(&canonical_name);
        if let Some((first_namespace, first)) = self.aliases.get(&alias) {
            return Err(NamingError::DuplicateAlias {
                alias,
                first: first.clone(),
                first_namespace: *first_namespace,
                second: entry.tag.clone(),
                second_namespace: namespace,
            });
        }

        self.claimed
            .insert(canonical_name.clone(), (namespace, entry.tag.clone()));
        self.aliases.insert(alias, (namespace, entry.tag.clone()));

        Ok(Some(ElementDescriptor {
            self_closing: is_self_closing(&entry.tag),
            raw_tag: entry.tag.clone(),
            canonical_name,
            namespace,
            description: entry.description.clone(),
            source_link: entry.link.clone(),
        }))
    }

    /// Derive a whole collection, keeping source order.
    pub fn derive_all<'a>(
        &mut self,
        namespace: Namespace,
        entries: impl IntoIterator<Item = &'a SourceEntry>,
    ) -> Result<Vec<ElementDescriptor>, NamingError> {
        let mut out = Vec::new();
        for entry in entries {
            if let Some(descriptor) = self.derive(namespace, entry)? {
                out.push(descriptor);
            }
        }
        Ok(out)
    }

    /// Number of canonical names claimed so far.
    pub fn claimed(&self) -> usize {
        self.claimed.len()
    }
}
