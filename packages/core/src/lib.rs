//! # tagkit core
//!
//! The markup tree behind the tagkit element catalog.
//!
//! A [`Node`] is an element, a text node or a chunk of raw markup. Elements are built
//! once and then changed by [`Modifier`]s: attributes, classes, inline styles, event
//! bindings and children all arrive the same way.
//!
//! ```rust
//! use tagkit_core::*;
//!
//! let link = Node::element("a", false).with((
//!     attr("href", "/docs"),
//!     class("nav"),
//!     None::<Css>,
//!     "Docs",
//! ));
//!
//! assert_eq!(link.render(), "<a href=\"/docs\" class=\"nav\">Docs</a>");
//! ```

mod attributes;
mod events;
mod modifier;
mod node;
mod renderer;
mod value;

pub use attributes::*;
pub use events::*;
pub use modifier::*;
pub use node::*;
pub use renderer::Renderer;
pub use value::*;

/// Re-export common types for ease of development use.
pub mod prelude {
    pub use crate::{
        apply_fn, attr, class, css, dataset, id, on, Attr, AttributeValue, BoxedModifier, Class,
        Css, Element, Event, Modifier, Node, On,
    };
}
