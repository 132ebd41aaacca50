//! # tagkit HTML
//!
//! One constructor per HTML and SVG element, plus a few helpers for the cases the catalog
//! cannot cover: custom tags, text, parsed markup, templates, markdown and stylesheets.
//!
//! Every constructor takes a single [`Modifier`](tagkit_core::Modifier). Tuples, arrays,
//! vectors and `Option`s are all modifiers, so any number of them can be passed at once and
//! `None` entries are skipped.
//!
//! ```rust
//! use tagkit_html::prelude::*;
//!
//! let logged_in = false;
//! let page = navigation((
//!     class("top"),
//!     unordered_list([
//!         list_item(anchor((attr("href", "/"), "Home"))),
//!         list_item(anchor((attr("href", "/login"), "Log in"))),
//!     ]),
//!     logged_in.then(|| span("Welcome back")),
//! ));
//!
//! assert_eq!(
//!     page.render(),
//!     "<nav class=\"top\"><ul><li><a href=\"/\">Home</a></li><li><a href=\"/login\">Log in</a></li></ul></nav>"
//! );
//! ```

mod commonmark;
mod css;
mod element_spec;
mod elements;
mod error;
mod helpers;
mod parser;
mod templates;

pub use commonmark::*;
pub use css::{scope_css, stylesheet};
pub use element_spec::*;
pub use elements::*;
pub use error::*;
pub use helpers::*;
pub use parser::{parse, parse_in_root};
pub use templates::parse_template;

pub use tagkit_core;
pub use tagkit_naming::Namespace;

pub mod prelude {
    pub use crate::elements::*;
    pub use crate::{
        markdown, nbsp, parse, parse_in_root, parse_template, stylesheet, tag, text,
    };
    pub use tagkit_core::prelude::*;
}
