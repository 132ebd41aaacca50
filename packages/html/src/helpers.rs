use tagkit_core::{Modifier, Node};
use tagkit_naming::is_self_closing;

use crate::section;

/// A plain text node. The text is escaped when rendered.
pub fn text(text: impl Into<String>) -> Node {
    Node::text(text)
}

/// `count` non-breaking spaces. Counts below one produce an empty node.
///
/// ```
/// use tagkit_html::nbsp;
///
/// assert_eq!(nbsp(3).render(), "&nbsp;&nbsp;&nbsp;");
/// assert_eq!(nbsp(-1).render(), "");
/// ```
pub fn nbsp(count: i32) -> Node {
    let count = usize::try_from(count).unwrap_or(0);
    Node::raw("&nbsp;".repeat(count))
}

/// An element with an arbitrary tag, for custom elements and anything missing from the catalog.
///
/// Whether it is self-closing is decided by the void element set.
pub fn tag(name: impl Into<String>, modifiers: impl Modifier) -> Node {
    let name = name.into();
    let self_closing = is_self_closing(&name);
    Node::element(name, self_closing).with(modifiers)
}

/// One node stays as it is; anything else is wrapped in a `section`. Modifiers go on the result.
pub(crate) fn wrap_roots(nodes: Vec<Node>, modifiers: impl Modifier) -> Node {
    let root = match <[Node; 1]>::try_from(nodes) {
        Ok([node]) => node,
        Err(nodes) => {
            tracing::debug!(count = nodes.len(), "wrapping parsed nodes in a section");
            section(nodes)
        }
    };
    root.with(modifiers)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tagkit_core::{attr, class};

    #[test]
    fn nbsp_counts() {
        assert_eq!(nbsp(0), Node::raw(""));
        assert_eq!(nbsp(i32::MIN), Node::raw(""));
        assert_eq!(nbsp(1), Node::raw("&nbsp;"));
        assert_eq!(nbsp(3), Node::raw("&nbsp;&nbsp;&nbsp;"));
    }

    #[test]
    fn custom_tags() {
        assert_eq!(
            tag("my-widget", (attr("size", 2), "hi")).render(),
            "<my-widget size=\"2\">hi</my-widget>"
        );
        assert_eq!(tag("embed", attr("src", "a.swf")).render(), "<embed src=\"a.swf\"/>");
    }

    #[test]
    fn single_root_is_not_wrapped() {
        let node = wrap_roots(vec![Node::element("p", false)], class("x"));
        assert_eq!(node.render(), "<p class=\"x\"></p>");
    }

    #[test]
    fn many_roots_are_wrapped() {
        let node = wrap_roots(vec![Node::text("a"), Node::text("b")], class("x"));
        assert_eq!(node.render(), "<section class=\"x\">ab</section>");

        let empty = wrap_roots(Vec::new(), ());
        assert_eq!(empty.render(), "<section></section>");
    }
}
