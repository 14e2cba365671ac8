//! Procedural macros for the `oprint` pretty-printer.
//!
//! Provides `#[derive(Reflect)]`, generating the struct descriptor the
//! printing engine consumes: field enumeration in declaration order plus
//! the static schema used for configuration-time member resolution.

use proc_macro::TokenStream;

mod reflect;

/// Derive `oprint::Reflect` for a named-field struct.
///
/// Only `pub` fields are enumerated; non-public fields and fields marked
/// `#[reflect(skip)]` are absent from the output entirely. Enums, tuple
/// structs, and generic structs are rejected with a compile error.
#[proc_macro_derive(Reflect, attributes(reflect))]
pub fn derive_reflect(input: TokenStream) -> TokenStream {
    reflect::derive_reflect(input)
}
