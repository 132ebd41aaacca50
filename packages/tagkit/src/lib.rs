//! Build HTML and SVG with plain functions.
//!
//! ```rust
//! use tagkit::prelude::*;
//!
//! let card = div((
//!     class("card"),
//!     h2("Hello"),
//!     paragraph(("Made with ", strong("tagkit"), nbsp(1))),
//! ));
//!
//! assert_eq!(
//!     card.to_string(),
//!     "<div class=\"card\"><h2>Hello</h2><p>Made with <strong>tagkit</strong>&nbsp;</p></div>"
//! );
//! ```

pub use tagkit_core as core;

pub use tagkit_naming as naming;

#[cfg(feature = "html")]
pub use tagkit_html as html;

pub mod prelude {
    pub use tagkit_core::prelude::*;

    #[cfg(feature = "html")]
    pub use tagkit_html::prelude::*;
}
