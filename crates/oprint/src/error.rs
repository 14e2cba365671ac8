//! Configuration-time errors.
//!
//! All errors surface while building the printer, never during
//! rendering; `render` itself is total.

use std::error::Error;
use std::fmt;

/// Error raised when a member selector fails to resolve against the
/// owner type's schema.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// The name does not resolve to a publicly readable field.
    UnknownMember {
        /// Simple name of the owner type.
        owner: &'static str,
        /// The member name that failed to resolve.
        member: String,
    },
    /// The member resolved, but its declared type differs from the
    /// type the formatter was requested for.
    MemberTypeMismatch {
        /// Simple name of the owner type.
        owner: &'static str,
        /// The member name.
        member: String,
        /// Type the caller asked for.
        expected: &'static str,
        /// Type the member is actually declared as.
        declared: &'static str,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::UnknownMember { owner, member } => {
                write!(f, "`{owner}` has no publicly readable member `{member}`")
            }
            ConfigError::MemberTypeMismatch {
                owner,
                member,
                expected,
                declared,
            } => {
                write!(
                    f,
                    "member `{member}` of `{owner}` is declared as `{declared}`, not `{expected}`"
                )
            }
        }
    }
}

impl Error for ConfigError {}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn unknown_member_message() {
        let err = ConfigError::UnknownMember {
            owner: "Person",
            member: "nickname".to_owned(),
        };
        assert_eq!(
            err.to_string(),
            "`Person` has no publicly readable member `nickname`"
        );
    }

    #[test]
    fn type_mismatch_message() {
        let err = ConfigError::MemberTypeMismatch {
            owner: "Person",
            member: "age".to_owned(),
            expected: "alloc::string::String",
            declared: "i32",
        };
        assert_eq!(
            err.to_string(),
            "member `age` of `Person` is declared as `i32`, not `alloc::string::String`"
        );
    }
}
