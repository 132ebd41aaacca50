//! Markup parsing into catalog nodes.

use html_parser::{Dom, ElementVariant};
use tagkit_core::{AttributeValue, Element, Modifier, Node};
use tagkit_naming::{is_self_closing, Namespace};

use crate::{helpers::wrap_roots, Error, Result};

/// Parse a markup fragment.
///
/// A single top-level node gets `modifiers` applied directly. Zero or several top-level nodes
/// are wrapped in a `section` first.
///
/// ```
/// use tagkit_html::{parse, prelude::*};
///
/// let node = parse("<p>one</p><p>two</p>", class("pair")).unwrap();
/// assert_eq!(node.render(), "<section class=\"pair\"><p>one</p><p>two</p></section>");
/// ```
pub fn parse(markup: &str, modifiers: impl Modifier) -> Result<Node> {
    let dom = Dom::parse(markup)?;
    let nodes = nodes_from_html(&dom.children, None);
    Ok(wrap_roots(nodes, modifiers))
}

/// Parse a fragment as the content of a `root` element.
///
/// The root itself is not part of the result. Inside an `svg` root every element is placed in
/// the SVG namespace.
pub fn parse_in_root(root: &str, markup: &str, modifiers: impl Modifier) -> Result<Node> {
    if !is_valid_root(root) {
        return Err(Error::InvalidRoot(root.to_string()));
    }

    let wrapped = format!("<{root}>{markup}</{root}>");
    let dom = Dom::parse(&wrapped)?;

    let namespace = match root.eq_ignore_ascii_case("svg") {
        true => Namespace::Svg.uri(),
        false => None,
    };

    let nodes = match dom.children.as_slice() {
        [html_parser::Node::Element(el)] if el.name.eq_ignore_ascii_case(root) => {
            nodes_from_html(&el.children, namespace)
        }
        children => {
            tracing::debug!(root, "parser did not keep the root element; using every node");
            nodes_from_html(children, namespace)
        }
    };

    Ok(wrap_roots(nodes, modifiers))
}

fn is_valid_root(root: &str) -> bool {
    let mut chars = root.chars();
    let starts_with_letter = chars.next().is_some_and(|c| c.is_ascii_alphabetic());
    starts_with_letter
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '-')
        && !is_self_closing(root)
}

/// Convert parsed nodes, dropping comments and whitespace between top-level nodes.
fn nodes_from_html(nodes: &[html_parser::Node], namespace: Option<&'static str>) -> Vec<Node> {
    nodes
        .iter()
        .filter(|node| !matches!(node, html_parser::Node::Text(text) if text.trim().is_empty()))
        .filter_map(|node| node_from_html(node, namespace))
        .collect()
}

/// Convert one parsed node.
///
/// Text keeps its source entities, so it becomes a raw node. Comments are dropped.
pub(crate) fn node_from_html(
    node: &html_parser::Node,
    namespace: Option<&'static str>,
) -> Option<Node> {
    match node {
        html_parser::Node::Text(text) => Some(Node::raw(text.clone())),

        html_parser::Node::Element(el) => {
            let namespace = match el.name.eq_ignore_ascii_case("svg") {
                true => Namespace::Svg.uri(),
                false => namespace,
            };

            let self_closing =
                matches!(el.variant, ElementVariant::Void) || is_self_closing(&el.name);
            let mut out = Element::new(el.name.clone(), self_closing);
            out.set_namespace(namespace);

            if let Some(id) = &el.id {
                out.set_attribute("id", decode_entities(id));
            }

            let class = el.classes.join(" ");
            if !class.is_empty() {
                out.add_class(&decode_entities(&class));
            }

            let mut attributes: Vec<_> = el.attributes.iter().collect();
            attributes.sort_by(|a, b| a.0.cmp(b.0));
            for (name, value) in attributes {
                let value = match value {
                    Some(value) => AttributeValue::Text(decode_entities(value)),
                    None => AttributeValue::Bool(true),
                };
                out.set_attribute(name.clone(), value);
            }

            for child in &el.children {
                if let Some(child) = node_from_html(child, namespace) {
                    out.push_child(child);
                }
            }

            Some(Node::Element(out))
        }

        // We ignore comments
        html_parser::Node::Comment(_) => None,
    }
}

/// Undo the escaping the renderer applies, so attribute values are not escaped twice.
fn decode_entities(value: &str) -> String {
    if !value.contains('&') {
        return value.to_string();
    }

    value
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&#x27;", "'")
        .replace("&apos;", "'")
        .replace("&amp;", "&")
}
