//! Printing Engine
//!
//! Recursive, depth-first renderer plus the fluent configuration surface
//! that feeds it.
//!
//! # Algorithm
//!
//! For each value, in pre-order:
//!
//! 1. Null (`Option::None`) renders as the literal `null`
//! 2. A terminal value renders via its default string conversion; this
//!    takes priority over any registered formatter for that type
//! 3. A composite value renders its simple type name, then one line per
//!    publicly readable field in declaration order: excluded fields are
//!    skipped outright, fields with a matching formatter render on a
//!    single line without descent, everything else recurses at the next
//!    nesting level
//!
//! A field at nesting level `d` is indented with `d + 1` tabs; every
//! line, including the last, ends in `\n`. A stack of ancestor object
//! identities guards against cyclic graphs: revisiting an ancestor emits
//! the `<cycle>` sentinel instead of recursing.


use std::any::TypeId;
use std::fmt;
use std::marker::PhantomData;

use tracing::trace;

use crate::config::{FormatFn, FormatKey, MemberId, PrintConfig};
use crate::culture::{Culture, CultureFormat};
use crate::emitter::{Emitter, StringEmitter};
use crate::error::ConfigError;
use crate::reflect::Reflect;

/// Sentinel emitted in place of a value already on the recursion path.
pub const CYCLE_SENTINEL: &str = "<cycle>";

/// Wrap a typed formatter into the type-erased table entry. The caller
/// keys the entry by `T`'s `TypeId`, so the downcast always succeeds.
fn erase<T, F>(formatter: F) -> FormatFn
where
    T: Reflect,
    F: Fn(&T) -> String + 'static,
{
    Box::new(move |value: &dyn Reflect| {
        value
            .as_any()
            .downcast_ref::<T>()
            .map(&formatter)
            .unwrap_or_default()
    })
}

/// A configured printer for values of `TOwner`.
///
/// Built through chained calls, then driven by [`Printer::render`]. The
/// configuration is read-only during rendering and carries no state
/// between calls.
///
/// ```
/// use oprint::{Printer, Reflect};
///
/// #[derive(Reflect)]
/// struct Person {
///     pub name: String,
///     pub age: i32,
/// }
///
/// let printer = Printer::<Person>::new().exclude_type::<i32>();
/// let person = Person { name: "Alice".to_owned(), age: 30 };
/// assert_eq!(printer.render(&person), "Person\n\tname = Alice\n");
/// ```
pub struct Printer<TOwner: Reflect> {
    config: PrintConfig,
    _owner: PhantomData<fn() -> TOwner>,
}

impl<TOwner: Reflect> Printer<TOwner> {
    /// A printer with no overrides.
    pub fn new() -> Self {
        Self {
            config: PrintConfig::default(),
            _owner: PhantomData,
        }
    }

    /// Skip every field whose declared type is `T`, at any nesting
    /// depth. Idempotent.
    pub fn exclude_type<T: Reflect>(mut self) -> Self {
        self.config.exclude_type(TypeId::of::<T>());
        self
    }

    /// Skip one specific member of `TOwner`, regardless of its type.
    ///
    /// The name is resolved against the owner's schema immediately;
    /// an unresolvable name fails here, not at render time.
    pub fn exclude_member(mut self, member: &str) -> Result<Self, ConfigError> {
        let schema = TOwner::schema();
        let spec = schema
            .field(member)
            .ok_or_else(|| ConfigError::UnknownMember {
                owner: schema.name,
                member: member.to_owned(),
            })?;
        self.config.exclude_member(MemberId {
            owner: TypeId::of::<TOwner>(),
            name: spec.name,
        });
        Ok(self)
    }

    /// Override the rendering of every field declared as `T`.
    ///
    /// Returns a transient builder; a terminal call (`using`, `trim_to`,
    /// `with_culture`) commits the formatter and hands the printer back.
    pub fn format_type<T: Reflect>(self) -> TypeFormat<TOwner, T> {
        TypeFormat {
            printer: self,
            _prop: PhantomData,
        }
    }

    /// Override the rendering of one specific member of `TOwner`,
    /// declared as `T`. Member-specific formatters take precedence over
    /// type-wide ones.
    pub fn format_member<T: Reflect>(
        self,
        member: &str,
    ) -> Result<MemberFormat<TOwner, T>, ConfigError> {
        let schema = TOwner::schema();
        let spec = schema
            .field(member)
            .ok_or_else(|| ConfigError::UnknownMember {
                owner: schema.name,
                member: member.to_owned(),
            })?;
        if spec.declared != TypeId::of::<T>() {
            return Err(ConfigError::MemberTypeMismatch {
                owner: schema.name,
                member: member.to_owned(),
                expected: std::any::type_name::<T>(),
                declared: spec.declared_name,
            });
        }
        Ok(MemberFormat {
            printer: self,
            member: spec.name,
            _prop: PhantomData,
        })
    }

    /// Render a value to its full textual representation.
    ///
    /// Every output line, including the last, ends in `\n`. Pure
    /// function of the value and the configuration.
    pub fn render(&self, value: &TOwner) -> String {
        let mut out = StringEmitter::with_capacity(128);
        let mut ancestors = Vec::new();
        self.render_value(value, 0, &mut out, &mut ancestors);
        out.output()
    }

    fn render_value<E: Emitter>(
        &self,
        value: &dyn Reflect,
        depth: usize,
        out: &mut E,
        ancestors: &mut Vec<*const ()>,
    ) {
        if value.is_null() {
            out.emit("null");
            out.emit_newline();
            return;
        }
        // Terminal conversion wins over any registered formatter here;
        // formatters are consulted at the field level below.
        if let Some(text) = value.terminal() {
            out.emit(&text);
            out.emit_newline();
            return;
        }

        let identity = std::ptr::from_ref(value).cast::<()>();
        if ancestors.contains(&identity) {
            out.emit(CYCLE_SENTINEL);
            out.emit_newline();
            return;
        }
        ancestors.push(identity);

        trace!(ty = value.type_name(), depth, "rendering composite");
        out.emit(value.type_name());
        out.emit_newline();

        let owner = value.as_any().type_id();
        for field in value.fields() {
            if self.config.is_excluded(owner, &field) {
                continue;
            }
            out.emit_indent(depth + 1);
            out.emit(field.name);
            out.emit(" = ");
            if let Some(formatter) = self.config.formatter(owner, &field) {
                out.emit(&formatter(field.value));
                out.emit_newline();
            } else {
                self.render_value(field.value, depth + 1, out, ancestors);
            }
        }

        ancestors.pop();
    }
}

impl<TOwner: Reflect> Default for Printer<TOwner> {
    fn default() -> Self {
        Self::new()
    }
}

impl<TOwner: Reflect> fmt::Debug for Printer<TOwner> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Printer").field("config", &self.config).finish()
    }
}

/// Transient builder binding a declared type to a pending formatter.
///
/// Exists only between [`Printer::format_type`] and the terminal call
/// that commits the formatter and returns the printer.
#[derive(Debug)]
pub struct TypeFormat<TOwner: Reflect, TProp: Reflect> {
    printer: Printer<TOwner>,
    _prop: PhantomData<fn() -> TProp>,
}

impl<TOwner: Reflect, TProp: Reflect> TypeFormat<TOwner, TProp> {
    /// Commit a custom formatter for every field declared as `TProp`.
    pub fn using<F>(mut self, formatter: F) -> Printer<TOwner>
    where
        F: Fn(&TProp) -> String + 'static,
    {
        self.printer
            .config
            .set_formatter(FormatKey::ByType(TypeId::of::<TProp>()), erase(formatter));
        self.printer
    }
}

impl<TOwner: Reflect> TypeFormat<TOwner, String> {
    /// Commit a truncating formatter: the first `min(n, max)` characters.
    pub fn trim_to(self, max: usize) -> Printer<TOwner> {
        self.using(move |text: &String| text.chars().take(max).collect())
    }
}

impl<TOwner: Reflect, TProp: Reflect + CultureFormat> TypeFormat<TOwner, TProp> {
    /// Commit a formatter rendering numbers under the given culture.
    pub fn with_culture(self, culture: Culture) -> Printer<TOwner> {
        self.using(move |value: &TProp| value.format_with(culture))
    }
}

/// Transient builder binding one member of `TOwner` to a pending
/// formatter. Committed entries apply to that member only.
#[derive(Debug)]
pub struct MemberFormat<TOwner: Reflect, TProp: Reflect> {
    printer: Printer<TOwner>,
    member: &'static str,
    _prop: PhantomData<fn() -> TProp>,
}

impl<TOwner: Reflect, TProp: Reflect> MemberFormat<TOwner, TProp> {
    /// Commit a custom formatter for the bound member.
    pub fn using<F>(mut self, formatter: F) -> Printer<TOwner>
    where
        F: Fn(&TProp) -> String + 'static,
    {
        self.printer.config.set_formatter(
            FormatKey::ByMember(TypeId::of::<TOwner>(), self.member),
            erase(formatter),
        );
        self.printer
    }
}

impl<TOwner: Reflect> MemberFormat<TOwner, String> {
    /// Commit a truncating formatter for the bound member.
    pub fn trim_to(self, max: usize) -> Printer<TOwner> {
        self.using(move |text: &String| text.chars().take(max).collect())
    }
}

impl<TOwner: Reflect, TProp: Reflect + CultureFormat> MemberFormat<TOwner, TProp> {
    /// Commit a culture-aware formatter for the bound member.
    pub fn with_culture(self, culture: Culture) -> Printer<TOwner> {
        self.using(move |value: &TProp| value.format_with(culture))
    }
}
