//! Value Introspection
//!
//! The printer does not rely on runtime reflection. Every printable type
//! implements [`Reflect`], either by hand or through `#[derive(Reflect)]`
//! from `oprint_derive`. The trait exposes three views of a value:
//!
//! - **terminal**: a fixed set of atomic types rendered via their default
//!   string conversion and never traversed (`i32`, `f64`, `f32`, `String`,
//!   `DateTime<Utc>`, `TimeDelta`)
//! - **null**: `Option::None` renders as the literal `null`
//! - **composite**: everything else enumerates its publicly readable
//!   fields in declaration order
//!
//! [`Schema`] is the static descriptor of a composite type, used by the
//! fluent builder to resolve member names at configuration time.

use std::any::{Any, TypeId};

use chrono::{DateTime, TimeDelta, Utc};

/// A value the printing engine can traverse.
pub trait Reflect: Any {
    /// Simple (unqualified) name of the value's runtime type.
    fn type_name(&self) -> &'static str;

    /// Downcast hook for type-erased formatter invocation.
    fn as_any(&self) -> &dyn Any;

    /// Whether this value is the null reference (`Option::None`).
    fn is_null(&self) -> bool {
        false
    }

    /// Default string conversion for atomic values, `None` for composites.
    fn terminal(&self) -> Option<String> {
        None
    }

    /// Publicly readable fields, in declaration order. Empty for atomics.
    fn fields(&self) -> Vec<FieldRef<'_>> {
        Vec::new()
    }

    /// Static descriptor used for configuration-time member resolution.
    fn schema() -> Schema
    where
        Self: Sized,
    {
        Schema::opaque(std::any::type_name::<Self>())
    }
}

/// A single field of a composite value: name, declared type, and a
/// borrowed view of the value itself.
pub struct FieldRef<'a> {
    /// Field name as declared.
    pub name: &'static str,
    /// `TypeId` of the field's declared type.
    pub declared: TypeId,
    /// The field's value.
    pub value: &'a dyn Reflect,
}

impl<'a> FieldRef<'a> {
    /// Build a field reference, capturing the declared type from `T`.
    pub fn new<T: Reflect>(name: &'static str, value: &'a T) -> Self {
        Self {
            name,
            declared: TypeId::of::<T>(),
            value,
        }
    }
}

/// Static descriptor of a type: its simple name and field specs.
#[derive(Clone, Debug)]
pub struct Schema {
    /// Simple name of the described type.
    pub name: &'static str,
    fields: Vec<FieldSpec>,
}

impl Schema {
    /// Descriptor for a composite type with the given fields.
    pub fn new(name: &'static str, fields: Vec<FieldSpec>) -> Self {
        Self { name, fields }
    }

    /// Descriptor for a type with no resolvable members.
    pub fn opaque(name: &'static str) -> Self {
        Self {
            name,
            fields: Vec::new(),
        }
    }

    /// Look up a field spec by name.
    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|spec| spec.name == name)
    }
}

/// Static description of one field: name and declared type.
#[derive(Clone, Copy, Debug)]
pub struct FieldSpec {
    /// Field name as declared.
    pub name: &'static str,
    /// `TypeId` of the declared type.
    pub declared: TypeId,
    /// Declared type name, for error messages.
    pub declared_name: &'static str,
}

impl FieldSpec {
    /// Build a field spec for a field declared as `T`.
    pub fn new<T: Reflect>(name: &'static str) -> Self {
        Self {
            name,
            declared: TypeId::of::<T>(),
            declared_name: std::any::type_name::<T>(),
        }
    }
}

macro_rules! terminal {
    ($ty:ty, $name:literal) => {
        impl Reflect for $ty {
            fn type_name(&self) -> &'static str {
                $name
            }

            fn as_any(&self) -> &dyn Any {
                self
            }

            fn terminal(&self) -> Option<String> {
                Some(self.to_string())
            }
        }
    };
}

terminal!(i32, "i32");
terminal!(f64, "f64");
terminal!(f32, "f32");
terminal!(String, "String");
terminal!(DateTime<Utc>, "DateTime");
terminal!(TimeDelta, "TimeDelta");

/// `Option` is the nullable wrapper: `None` takes the engine's null
/// branch, `Some` behaves exactly like the inner value.
impl<T: Reflect> Reflect for Option<T> {
    fn type_name(&self) -> &'static str {
        match self {
            Some(value) => value.type_name(),
            None => "Option",
        }
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn is_null(&self) -> bool {
        self.is_none()
    }

    fn terminal(&self) -> Option<String> {
        self.as_ref().and_then(Reflect::terminal)
    }

    fn fields(&self) -> Vec<FieldRef<'_>> {
        match self {
            Some(value) => value.fields(),
            None => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    struct Pair {
        left: i32,
        right: i32,
    }

    impl Reflect for Pair {
        fn type_name(&self) -> &'static str {
            "Pair"
        }

        fn as_any(&self) -> &dyn Any {
            self
        }

        fn fields(&self) -> Vec<FieldRef<'_>> {
            vec![
                FieldRef::new("left", &self.left),
                FieldRef::new("right", &self.right),
            ]
        }

        fn schema() -> Schema {
            Schema::new(
                "Pair",
                vec![FieldSpec::new::<i32>("left"), FieldSpec::new::<i32>("right")],
            )
        }
    }

    #[test]
    fn terminal_conversion_matches_display() {
        assert_eq!(42_i32.terminal(), Some("42".to_owned()));
        assert_eq!(1.5_f64.terminal(), Some("1.5".to_owned()));
        assert_eq!("abc".to_owned().terminal(), Some("abc".to_owned()));
    }

    #[test]
    fn composite_has_no_terminal_form() {
        let pair = Pair { left: 1, right: 2 };
        assert!(pair.terminal().is_none());
        assert_eq!(pair.fields().len(), 2);
    }

    #[test]
    fn fields_preserve_declaration_order() {
        let pair = Pair { left: 1, right: 2 };
        let names: Vec<_> = pair.fields().iter().map(|f| f.name).collect();
        assert_eq!(names, vec!["left", "right"]);
    }

    #[test]
    fn schema_resolves_known_members() {
        let schema = Pair::schema();
        assert_eq!(schema.name, "Pair");
        assert!(schema.field("left").is_some());
        assert!(schema.field("missing").is_none());
    }

    #[test]
    fn none_is_null() {
        let value: Option<i32> = None;
        assert!(value.is_null());
        assert_eq!(value.terminal(), None);
    }

    #[test]
    fn some_delegates_to_inner() {
        let value = Some(7_i32);
        assert!(!value.is_null());
        assert_eq!(value.terminal(), Some("7".to_owned()));
        assert_eq!(value.type_name(), "i32");
    }
}
