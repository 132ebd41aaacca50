//! # tagkit codegen
//!
//! The offline half of tagkit: scrape saved MDN element reference pages into TOML manifests,
//! then derive canonical names for every entry and write the `tagkit-html` catalog.
//!
//! The manifests under `data/` are the checked-in snapshot the catalog is generated from, so a
//! regeneration never depends on what the live documentation says that day.

mod config;
mod error;
mod generate;
mod manifest;
mod scrape;

pub use config::*;
pub use error::*;
pub use generate::*;
pub use manifest::*;
pub use scrape::*;
