//! Modifiers mutate a node after it is constructed.
//!
//! Anything that sets attributes, styles, event bindings or children is a [`Modifier`].
//! Optional modifiers are first class: `None` applies nothing, so call sites can pass
//! `cond.then(|| class("active"))` without branching.

use crate::Node;

/// A value that can mutate a node in place.
pub trait Modifier {
    fn apply(self, node: &mut Node);

    /// Erase the type so modifiers of different kinds can share a `Vec`.
    fn boxed(self) -> BoxedModifier
    where
        Self: Sized + 'static,
    {
        BoxedModifier::new(self)
    }
}

impl Modifier for () {
    fn apply(self, _node: &mut Node) {}
}

impl<M: Modifier> Modifier for Option<M> {
    fn apply(self, node: &mut Node) {
        if let Some(modifier) = self {
            modifier.apply(node);
        }
    }
}

impl<M: Modifier> Modifier for Vec<M> {
    fn apply(self, node: &mut Node) {
        for modifier in self {
            modifier.apply(node);
        }
    }
}

impl<M: Modifier, const N: usize> Modifier for [M; N] {
    fn apply(self, node: &mut Node) {
        for modifier in self {
            modifier.apply(node);
        }
    }
}

/// Nodes are appended as children.
impl Modifier for Node {
    fn apply(self, node: &mut Node) {
        node.push_child(self);
    }
}

impl Modifier for crate::Element {
    fn apply(self, node: &mut Node) {
        node.push_child(Node::Element(self));
    }
}

/// Strings are appended as text children.
impl Modifier for &str {
    fn apply(self, node: &mut Node) {
        node.push_child(Node::text(self));
    }
}

impl Modifier for String {
    fn apply(self, node: &mut Node) {
        node.push_child(Node::Text(self));
    }
}

macro_rules! tuple_modifiers {
    ($($name:ident),+) => {
        impl<$($name: Modifier),+> Modifier for ($($name,)+) {
            #[allow(non_snake_case)]
            fn apply(self, node: &mut Node) {
                let ($($name,)+) = self;
                $($name.apply(node);)+
            }
        }
    };
}

tuple_modifiers!(A);
tuple_modifiers!(A, B);
tuple_modifiers!(A, B, C);
tuple_modifiers!(A, B, C, D);
tuple_modifiers!(A, B, C, D, E);
tuple_modifiers!(A, B, C, D, E, F);
tuple_modifiers!(A, B, C, D, E, F, G);
tuple_modifiers!(A, B, C, D, E, F, G, H);
tuple_modifiers!(A, B, C, D, E, F, G, H, I);
tuple_modifiers!(A, B, C, D, E, F, G, H, I, J);
tuple_modifiers!(A, B, C, D, E, F, G, H, I, J, K);
tuple_modifiers!(A, B, C, D, E, F, G, H, I, J, K, L);
tuple_modifiers!(A, B, C, D, E, F, G, H, I, J, K, L, M);
tuple_modifiers!(A, B, C, D, E, F, G, H, I, J, K, L, M, N);
tuple_modifiers!(A, B, C, D, E, F, G, H, I, J, K, L, M, N, O);
tuple_modifiers!(A, B, C, D, E, F, G, H, I, J, K, L, M, N, O, P);

trait ErasedModifier {
    fn apply_boxed(self: Box<Self>, node: &mut Node);
}

impl<M: Modifier> ErasedModifier for M {
    fn apply_boxed(self: Box<Self>, node: &mut Node) {
        (*self).apply(node)
    }
}

/// A type-erased modifier.
pub struct BoxedModifier(Box<dyn ErasedModifier>);

impl BoxedModifier {
    pub fn new(modifier: impl Modifier + 'static) -> Self {
        Self(Box::new(modifier))
    }
}

impl Modifier for BoxedModifier {
    fn apply(self, node: &mut Node) {
        self.0.apply_boxed(node)
    }
}

impl std::fmt::Debug for BoxedModifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("BoxedModifier")
    }
}

/// A modifier built from a closure.
pub struct ApplyFn<F>(F);

impl<F: FnOnce(&mut Node)> Modifier for ApplyFn<F> {
    fn apply(self, node: &mut Node) {
        (self.0)(node)
    }
}

/// Wrap a closure so it can be passed wherever a modifier is expected.
pub fn apply_fn<F: FnOnce(&mut Node)>(f: F) -> ApplyFn<F> {
    ApplyFn(f)
}
