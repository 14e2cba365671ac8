//! Object Pretty-Printer
//!
//! Converts a value graph into an indented, nested textual representation
//! for diagnostic output (assertion messages and the like). Callers
//! customize the output per type or per member through a fluent builder:
//! exclusion, custom formatting, truncation, and culture-specific number
//! rendering.
//!
//! # Architecture
//!
//! - [`reflect`]: the [`Reflect`] trait values implement (by hand or via
//!   `#[derive(Reflect)]`), replacing runtime reflection with an explicit
//!   struct descriptor
//! - [`printer`]: the recursive engine and the fluent configuration
//!   surface ([`Printer`])
//! - [`emitter`]: output abstraction with tab indentation
//! - [`culture`]: separator conventions for numeric terminals
//! - [`error`]: configuration-time errors
//!
//! # Example
//!
//! ```
//! use oprint::{Printer, Reflect};
//!
//! #[derive(Reflect)]
//! struct Person {
//!     pub name: String,
//!     pub age: i32,
//! }
//!
//! let person = Person { name: "Alice".to_owned(), age: 30 };
//!
//! let plain = Printer::<Person>::new();
//! assert_eq!(plain.render(&person), "Person\n\tname = Alice\n\tage = 30\n");
//!
//! let trimmed = Printer::<Person>::new().format_type::<String>().trim_to(2);
//! assert_eq!(trimmed.render(&person), "Person\n\tname = Al\n\tage = 30\n");
//! ```

mod config;
pub mod culture;
pub mod emitter;
pub mod error;
pub mod printer;
pub mod reflect;

pub use culture::{Culture, CultureFormat};
pub use emitter::{Emitter, StringEmitter};
pub use error::ConfigError;
pub use printer::{MemberFormat, Printer, TypeFormat, CYCLE_SENTINEL};
pub use reflect::{FieldRef, FieldSpec, Reflect, Schema};

pub use oprint_derive::Reflect;
