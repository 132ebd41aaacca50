//! # tagkit naming
//!
//! Turns raw HTML and SVG tag names into the identifiers the tagkit catalog is built from,
//! and decides which tags are void elements.
//!
//! ```
//! use tagkit_naming::{derive_name, is_self_closing, Namespace};
//!
//! assert_eq!(derive_name("font-face-format", Namespace::Html).unwrap(), "FontFaceFormat");
//! assert_eq!(derive_name("g", Namespace::Svg).unwrap(), "Group");
//! assert!(is_self_closing("use"));
//! ```

mod derive;
mod descriptor;
mod error;
mod namespace;
mod overrides;
mod self_closing;

pub use derive::*;
pub use descriptor::*;
pub use error::*;
pub use namespace::*;
pub use overrides::*;
pub use self_closing::*;
