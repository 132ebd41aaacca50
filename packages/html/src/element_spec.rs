use std::collections::HashMap;
use std::sync::LazyLock;

use tagkit_core::{Element, Modifier, Node};
use tagkit_naming::Namespace;

use crate::ELEMENTS;

/// One catalog entry: everything needed to construct an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ElementSpec {
    /// The canonical name, e.g. `DescriptionList`.
    pub name: &'static str,

    /// The raw tag written to markup, e.g. `dl`.
    pub tag: &'static str,

    pub namespace: Namespace,

    pub self_closing: bool,
}

impl ElementSpec {
    /// Construct the element and apply `modifiers` in order.
    pub fn build(&self, modifiers: impl Modifier) -> Node {
        let mut el = Element::new(self.tag, self.self_closing);
        el.set_namespace(self.namespace.uri());
        Node::Element(el).with(modifiers)
    }

    /// The name of this entry's alias function.
    pub fn function_name(&self) -> String {
        tagkit_naming::function_name(self.name)
    }
}

static BY_NAME: LazyLock<HashMap<&'static str, &'static ElementSpec>> =
    LazyLock::new(|| ELEMENTS.iter().map(|spec| (spec.name, spec)).collect());

static BY_TAG: LazyLock<HashMap<(Namespace, &'static str), &'static ElementSpec>> =
    LazyLock::new(|| {
        ELEMENTS
            .iter()
            .map(|spec| ((spec.namespace, spec.tag), spec))
            .collect()
    });

/// Find an entry by canonical name.
///
/// ```
/// use tagkit_html::lookup;
///
/// let spec = lookup("DescriptionList").unwrap();
/// assert_eq!(spec.tag, "dl");
/// ```
pub fn lookup(name: &str) -> Option<&'static ElementSpec> {
    BY_NAME.get(name).copied()
}

/// Find an entry by its raw tag within one collection.
pub fn lookup_tag(namespace: Namespace, tag: &str) -> Option<&'static ElementSpec> {
    BY_TAG.get(&(namespace, tag)).copied()
}
