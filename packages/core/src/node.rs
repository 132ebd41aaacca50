use std::borrow::Cow;

use crate::{AttributeValue, Event, IntoAttributeValue, Listener, Modifier, Renderer};

/// A single attribute on an element.
#[derive(Clone, Debug, PartialEq)]
pub struct Attribute {
    pub name: Cow<'static, str>,
    pub value: AttributeValue,
}

/// A node in the markup tree.
#[derive(Clone, Debug, PartialEq)]
pub enum Node {
    Element(Element),

    /// Text that is escaped when rendered.
    Text(String),

    /// Markup that is written out exactly as given.
    Raw(String),
}

impl Node {
    /// Create an element node. This is the constructor every catalog entry goes through.
    pub fn element(tag: impl Into<Cow<'static, str>>, self_closing: bool) -> Self {
        Node::Element(Element::new(tag, self_closing))
    }

    pub fn text(text: impl Into<String>) -> Self {
        Node::Text(text.into())
    }

    pub fn raw(markup: impl Into<String>) -> Self {
        Node::Raw(markup.into())
    }

    /// Apply a modifier in place. `None` modifiers are a no-op.
    pub fn apply(&mut self, modifier: impl Modifier) {
        modifier.apply(self);
    }

    /// Apply a modifier and hand the node back.
    pub fn with(mut self, modifier: impl Modifier) -> Self {
        modifier.apply(&mut self);
        self
    }

    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(el) => Some(el),
            _ => None,
        }
    }

    pub fn as_element_mut(&mut self) -> Option<&mut Element> {
        match self {
            Node::Element(el) => Some(el),
            _ => None,
        }
    }

    pub fn into_element(self) -> Option<Element> {
        match self {
            Node::Element(el) => Some(el),
            _ => None,
        }
    }

    /// The tag of an element node.
    pub fn tag(&self) -> Option<&str> {
        self.as_element().map(Element::tag)
    }

    /// Append a child. Text and raw nodes cannot hold children, so the child is dropped.
    pub fn push_child(&mut self, child: Node) {
        match self {
            Node::Element(el) => {
                el.push_child(child);
            }
            _ => tracing::trace!("ignoring child appended to a text node"),
        }
    }

    /// All text below this node, concatenated in document order.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            Node::Text(text) | Node::Raw(text) => out.push_str(text),
            Node::Element(el) => {
                for child in &el.children {
                    child.collect_text(out);
                }
            }
        }
    }

    /// Render with the default [`Renderer`].
    pub fn render(&self) -> String {
        Renderer::new().render(self)
    }
}

impl From<Element> for Node {
    fn from(el: Element) -> Self {
        Node::Element(el)
    }
}

impl std::fmt::Display for Node {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Renderer::new().render_to(f, self)
    }
}

/// An element with its attributes, inline styles, event bindings and children.
#[derive(Clone, Debug, PartialEq)]
pub struct Element {
    tag: Cow<'static, str>,
    namespace: Option<&'static str>,
    self_closing: bool,
    attributes: Vec<Attribute>,
    styles: Vec<(Cow<'static, str>, String)>,
    listeners: Vec<Listener>,
    children: Vec<Node>,
}

impl Element {
    pub fn new(tag: impl Into<Cow<'static, str>>, self_closing: bool) -> Self {
        Self {
            tag: tag.into(),
            namespace: None,
            self_closing,
            attributes: Vec::new(),
            styles: Vec::new(),
            listeners: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Create an element with a namespace (e.g., for SVG elements).
    pub fn new_with_namespace(
        tag: impl Into<Cow<'static, str>>,
        namespace: &'static str,
        self_closing: bool,
    ) -> Self {
        Self {
            namespace: Some(namespace),
            ..Self::new(tag, self_closing)
        }
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn namespace(&self) -> Option<&'static str> {
        self.namespace
    }

    pub fn set_namespace(&mut self, namespace: Option<&'static str>) {
        self.namespace = namespace;
    }

    pub fn is_self_closing(&self) -> bool {
        self.self_closing
    }

    pub fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }

    pub fn attribute(&self, name: &str) -> Option<&AttributeValue> {
        self.attributes
            .iter()
            .find(|attr| attr.name == name)
            .map(|attr| &attr.value)
    }

    /// Set an attribute. An existing attribute of the same name keeps its position and takes the new value.
    pub fn set_attribute(
        &mut self,
        name: impl Into<Cow<'static, str>>,
        value: impl IntoAttributeValue,
    ) {
        let name = name.into();
        let value = value.into_value();
        match self.attributes.iter_mut().find(|attr| attr.name == name) {
            Some(attr) => attr.value = value,
            None => self.attributes.push(Attribute { name, value }),
        }
    }

    pub fn remove_attribute(&mut self, name: &str) -> Option<AttributeValue> {
        let idx = self.attributes.iter().position(|attr| attr.name == name)?;
        Some(self.attributes.remove(idx).value)
    }

    pub fn classes(&self) -> impl Iterator<Item = &str> {
        self.attribute("class")
            .and_then(AttributeValue::as_text)
            .unwrap_or_default()
            .split_whitespace()
    }

    /// Add one or more whitespace-separated classes, skipping any already present.
    pub fn add_class(&mut self, classes: &str) {
        let mut current: Vec<String> = self.classes().map(str::to_string).collect();
        let before = current.len();
        for class in classes.split_whitespace() {
            if !current.iter().any(|c| c == class) {
                current.push(class.to_string());
            }
        }
        if current.len() != before {
            self.set_attribute("class", current.join(" "));
        }
    }

    pub fn styles(&self) -> &[(Cow<'static, str>, String)] {
        &self.styles
    }

    pub fn style(&self, property: &str) -> Option<&str> {
        self.styles
            .iter()
            .find(|(name, _)| name == property)
            .map(|(_, value)| value.as_str())
    }

    pub fn set_style(&mut self, property: impl Into<Cow<'static, str>>, value: impl Into<String>) {
        let property = property.into();
        let value = value.into();
        match self.styles.iter_mut().find(|(name, _)| *name == property) {
            Some(slot) => slot.1 = value,
            None => self.styles.push((property, value)),
        }
    }

    pub fn listeners(&self) -> &[Listener] {
        &self.listeners
    }

    pub fn add_listener(&mut self, listener: Listener) {
        self.listeners.push(listener);
    }

    /// Run every handler bound to this event's name, in binding order. Returns how many ran.
    pub fn dispatch(&self, event: &Event) -> usize {
        let mut ran = 0;
        for listener in self.listeners.iter().filter(|l| l.event() == event.name()) {
            listener.call(event);
            ran += 1;
        }
        ran
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Append a child. Returns false (and drops the child) for self-closing elements.
    pub fn push_child(&mut self, child: Node) -> bool {
        if self.self_closing {
            tracing::warn!(tag = %self.tag, "dropping child of self-closing element");
            return false;
        }
        self.children.push(child);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attributes_replace_in_place() {
        let mut el = Element::new("a", false);
        el.set_attribute("href", "/one");
        el.set_attribute("rel", "next");
        el.set_attribute("href", "/two");

        let names: Vec<_> = el.attributes().iter().map(|a| a.name.as_ref()).collect();
        assert_eq!(names, ["href", "rel"]);
        assert_eq!(el.attribute("href"), Some(&AttributeValue::Text("/two".into())));
        assert_eq!(el.remove_attribute("rel"), Some(AttributeValue::Text("next".into())));
        assert_eq!(el.attribute("rel"), None);
    }

    #[test]
    fn classes_accumulate_without_repeats() {
        let mut el = Element::new("div", false);
        el.add_class("card");
        el.add_class("card wide");
        el.add_class("  ");
        assert_eq!(el.classes().collect::<Vec<_>>(), ["card", "wide"]);
    }

    #[test]
    fn void_elements_reject_children() {
        let mut br = Element::new("br", true);
        assert!(!br.push_child(Node::text("nope")));
        assert!(br.children().is_empty());
    }

    #[test]
    fn text_nodes_ignore_children() {
        let mut node = Node::text("hi");
        node.push_child(Node::text("there"));
        assert_eq!(node, Node::text("hi"));
    }
}
