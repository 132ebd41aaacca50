//! Modifiers for attributes, classes, inline styles and event bindings.

use std::borrow::Cow;

use crate::{AttributeValue, Element, Event, IntoAttributeValue, Listener, Modifier, Node};

fn on_element(node: &mut Node, what: &'static str, f: impl FnOnce(&mut Element)) {
    match node.as_element_mut() {
        Some(el) => f(el),
        None => tracing::trace!(modifier = what, "ignoring modifier on a text node"),
    }
}

/// Sets one attribute.
#[derive(Clone, Debug, PartialEq)]
pub struct Attr {
    name: Cow<'static, str>,
    value: AttributeValue,
}

impl Modifier for Attr {
    fn apply(self, node: &mut Node) {
        on_element(node, "attr", |el| el.set_attribute(self.name, self.value));
    }
}

pub fn attr(name: impl Into<Cow<'static, str>>, value: impl IntoAttributeValue) -> Attr {
    Attr {
        name: name.into(),
        value: value.into_value(),
    }
}

pub fn id(value: impl IntoAttributeValue) -> Attr {
    attr("id", value)
}

/// Sets a `data-*` attribute.
pub fn dataset(key: &str, value: impl IntoAttributeValue) -> Attr {
    attr(format!("data-{key}"), value)
}

/// Adds classes to the element's `class` attribute.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Class(String);

impl Modifier for Class {
    fn apply(self, node: &mut Node) {
        on_element(node, "class", |el| el.add_class(&self.0));
    }
}

pub fn class(value: impl Into<String>) -> Class {
    Class(value.into())
}

/// Sets one inline style property.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Css {
    property: Cow<'static, str>,
    value: String,
}

impl Modifier for Css {
    fn apply(self, node: &mut Node) {
        on_element(node, "css", |el| el.set_style(self.property, self.value));
    }
}

pub fn css(property: impl Into<Cow<'static, str>>, value: impl Into<String>) -> Css {
    Css {
        property: property.into(),
        value: value.into(),
    }
}

/// Binds an event handler.
#[derive(Clone, Debug, PartialEq)]
pub struct On(Listener);

impl Modifier for On {
    fn apply(self, node: &mut Node) {
        on_element(node, "on", |el| el.add_listener(self.0));
    }
}

pub fn on(event: impl Into<Cow<'static, str>>, handler: impl Fn(&Event) + 'static) -> On {
    On(Listener::new(event, handler))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn modifiers_skip_text_nodes() {
        let mut node = Node::text("plain");
        Node::apply(&mut node, (id("x"), class("y"), css("color", "red"), on("click", |_| {})));
        assert_eq!(node, Node::text("plain"));
    }

    #[test]
    fn dataset_prefixes_key() {
        let node = Node::element("div", false).with(dataset("user-id", 42));
        let el = node.as_element().unwrap();
        assert_eq!(el.attribute("data-user-id"), Some(&AttributeValue::Int(42)));
    }
}
