//! Configuration Store
//!
//! Pure storage for the three override tables the engine consults while
//! rendering: excluded types, excluded members, and registered
//! formatters. Mutated only through the fluent builder on
//! [`Printer`](crate::Printer); read-only for the duration of a render.

use std::any::TypeId;
use std::fmt;

use rustc_hash::{FxHashMap, FxHashSet};

use crate::reflect::{FieldRef, Reflect};

/// Type-erased formatter. The fluent builder pins the key to the
/// closure's concrete argument type, so the downcast inside never fails.
pub(crate) type FormatFn = Box<dyn Fn(&dyn Reflect) -> String>;

/// Identity of a specific member of the owner type.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct MemberId {
    pub owner: TypeId,
    pub name: &'static str,
}

/// Formatter table key. Member-specific entries take precedence over
/// type-wide entries at lookup time.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum FormatKey {
    ByType(TypeId),
    ByMember(TypeId, &'static str),
}

/// The override tables for one printing session.
#[derive(Default)]
pub(crate) struct PrintConfig {
    excluded_types: FxHashSet<TypeId>,
    excluded_members: FxHashSet<MemberId>,
    formatters: FxHashMap<FormatKey, FormatFn>,
}

impl PrintConfig {
    pub(crate) fn exclude_type(&mut self, ty: TypeId) {
        self.excluded_types.insert(ty);
    }

    pub(crate) fn exclude_member(&mut self, member: MemberId) {
        self.excluded_members.insert(member);
    }

    /// Register a formatter; the last registration for a key wins.
    pub(crate) fn set_formatter(&mut self, key: FormatKey, formatter: FormatFn) {
        self.formatters.insert(key, formatter);
    }

    /// Whether a field is skipped outright. Exclusion is checked before
    /// formatter lookup, independent of any registered formatter.
    pub(crate) fn is_excluded(&self, owner: TypeId, field: &FieldRef<'_>) -> bool {
        self.excluded_types.contains(&field.declared)
            || self.excluded_members.contains(&MemberId {
                owner,
                name: field.name,
            })
    }

    /// Formatter for a field, member-specific entries first.
    pub(crate) fn formatter(&self, owner: TypeId, field: &FieldRef<'_>) -> Option<&FormatFn> {
        self.formatters
            .get(&FormatKey::ByMember(owner, field.name))
            .or_else(|| self.formatters.get(&FormatKey::ByType(field.declared)))
    }
}

impl fmt::Debug for PrintConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrintConfig")
            .field("excluded_types", &self.excluded_types.len())
            .field("excluded_members", &self.excluded_members.len())
            .field("formatters", &self.formatters.len())
            .finish()
    }
}
