use std::collections::HashSet;
use std::sync::LazyLock;

/// Void elements: they never hold children and are written without a closing tag.
///
/// `use` is the only SVG member; the rest are HTML void elements, including the
/// obsolete `command` and `keygen` which still show up in scraped markup.
pub const SELF_CLOSING_TAGS: &[&str] = &[
    "area", "base", "br", "col", "command", "embed", "hr", "img", "input", "keygen", "link",
    "meta", "param", "source", "track", "use", "wbr",
];

static SELF_CLOSING: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| SELF_CLOSING_TAGS.iter().copied().collect());

/// Whether or not this tag is self closing
///
/// ```
/// use tagkit_naming::is_self_closing;
///
/// assert_eq!(is_self_closing("br"), true);
///
/// assert_eq!(is_self_closing("div"), false);
/// ```
pub fn is_self_closing(tag: &str) -> bool {
    SELF_CLOSING.contains(tag)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn void_elements_are_self_closing() {
        for tag in [
            "br", "hr", "img", "input", "meta", "area", "base", "col", "embed", "param",
            "source", "track", "wbr", "use", "keygen", "command", "link",
        ] {
            assert!(is_self_closing(tag), "{tag} should be self closing");
        }
    }

    #[test]
    fn containers_are_not() {
        for tag in ["div", "span", "p", "g", "svg", "", "BR", "br "] {
            assert!(!is_self_closing(tag), "{tag:?} should not be self closing");
        }
    }
}
