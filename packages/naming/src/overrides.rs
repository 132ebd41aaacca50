//! Fixed display names for tags whose literal spelling makes a poor identifier.
//!
//! Entries are keyed by raw tag within one namespace and are final: the deriver
//! only capitalizes them and never adds the `Svg` prefix.

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::Namespace;

pub const HTML_OVERRIDES: &[(&str, &str)] = &[
    ("a", "Anchor"),
    ("abbr", "Abbreviation"),
    ("b", "Bold"),
    ("bdi", "BidirectionalIsolate"),
    ("bdo", "BidirectionalOverride"),
    ("blockquote", "BlockQuote"),
    ("br", "LineBreak"),
    ("col", "Column"),
    ("colgroup", "ColumnGroup"),
    ("datalist", "DataList"),
    ("dd", "DescriptionDetails"),
    ("del", "Deleted"),
    ("dfn", "Definition"),
    ("dl", "DescriptionList"),
    ("dt", "DescriptionTerm"),
    ("em", "Emphasis"),
    ("fieldset", "FieldSet"),
    ("figcaption", "FigureCaption"),
    ("hgroup", "HeadingGroup"),
    ("hr", "HorizontalRule"),
    ("i", "Italic"),
    ("iframe", "InlineFrame"),
    ("img", "Image"),
    ("ins", "Inserted"),
    ("kbd", "Keyboard"),
    ("li", "ListItem"),
    ("nav", "Navigation"),
    ("noscript", "NoScript"),
    ("ol", "OrderedList"),
    ("optgroup", "OptionGroup"),
    ("p", "Paragraph"),
    ("pre", "Preformatted"),
    ("q", "Quote"),
    ("rp", "RubyFallback"),
    ("rt", "RubyText"),
    ("s", "Strikethrough"),
    ("samp", "Sample"),
    ("sub", "Subscript"),
    ("sup", "Superscript"),
    ("tbody", "TableBody"),
    ("td", "TableCell"),
    ("textarea", "TextArea"),
    ("tfoot", "TableFoot"),
    ("th", "TableHeader"),
    ("thead", "TableHead"),
    ("tr", "TableRow"),
    ("u", "Underline"),
    ("ul", "UnorderedList"),
    ("var", "Variable"),
    ("wbr", "WordBreak"),
];

pub const SVG_OVERRIDES: &[(&str, &str)] = &[
    ("a", "SvgAnchor"),
    ("font-face-src", "FontFaceSrc"),
    ("g", "Group"),
];

/// An exact-match lookup over one of the override slices.
#[derive(Debug)]
pub struct TagOverrides {
    entries: HashMap<&'static str, &'static str>,
}

impl TagOverrides {
    fn from_slice(entries: &'static [(&'static str, &'static str)]) -> Self {
        Self {
            entries: entries.iter().copied().collect(),
        }
    }

    pub fn get(&self, tag: &str) -> Option<&'static str> {
        self.entries.get(tag).copied()
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.entries.contains_key(tag)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

static HTML: LazyLock<TagOverrides> = LazyLock::new(|| TagOverrides::from_slice(HTML_OVERRIDES));
static SVG: LazyLock<TagOverrides> = LazyLock::new(|| TagOverrides::from_slice(SVG_OVERRIDES));

/// The override table for a namespace.
pub fn overrides(namespace: Namespace) -> &'static TagOverrides {
    match namespace {
        Namespace::Html => &HTML,
        Namespace::Svg => &SVG,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_are_unique() {
        for (namespace, slice) in [(Namespace::Html, HTML_OVERRIDES), (Namespace::Svg, SVG_OVERRIDES)] {
            assert_eq!(overrides(namespace).len(), slice.len(), "{namespace} has a repeated key");
        }
    }

    #[test]
    fn lookups_are_scoped_to_a_namespace() {
        assert_eq!(overrides(Namespace::Html).get("a"), Some("Anchor"));
        assert_eq!(overrides(Namespace::Svg).get("a"), Some("SvgAnchor"));
        assert_eq!(overrides(Namespace::Html).get("g"), None);
        assert!(!overrides(Namespace::Svg).contains("dl"));
    }
}
