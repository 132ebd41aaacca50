//! The element catalog.
//!
//! Every entry is one row of [`ELEMENTS`] plus a one-line alias that builds it. The rows live
//! in `elements/catalog.rs`, which `tagkit-gen generate` writes from the checked-in manifests.

macro_rules! elements {
    (
        $(
            $(#[$attr:meta])*
            $func:ident => $name:ident, $tag:literal, $namespace:ident, $self_closing:literal;
        )*
    ) => {
        /// Every catalog entry, HTML first and then SVG, in manifest order.
        pub static ELEMENTS: &[$crate::ElementSpec] = &[
            $(
                $crate::ElementSpec {
                    name: stringify!($name),
                    tag: $tag,
                    namespace: ::tagkit_naming::Namespace::$namespace,
                    self_closing: $self_closing,
                },
            )*
        ];

        $(
            $(#[$attr])*
            #[inline]
            pub fn $func(modifiers: impl ::tagkit_core::Modifier) -> ::tagkit_core::Node {
                $crate::ElementSpec {
                    name: stringify!($name),
                    tag: $tag,
                    namespace: ::tagkit_naming::Namespace::$namespace,
                    self_closing: $self_closing,
                }
                .build(modifiers)
            }
        )*
    };
}

mod catalog;

pub use catalog::*;
