//! Stable diagnostic identifiers for frontend rejections (spec §6.4).
//!
//! Every code is prefixed `[FAKT]` when displayed, per spec. These are
//! the only identifiers a user ever sees; internal-invariant failures
//! (`crate::InternalError`) are a separate, non-user-facing channel.

use std::fmt;

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    /// `@Fake` applied to a non-interface, non-class declaration.
    FakeMustBeInterface,
    /// `@Fake` applied to a sealed interface.
    FakeCannotBeSealed,
    /// `@Fake` applied to a declaration declared inside a function body.
    FakeCannotBeLocal,
    /// `@Fake` applied to a concrete (non-abstract) class.
    FakeClassMustBeAbstract,
    /// `@Fake` applied to a sealed class.
    FakeClassCannotBeSealed,
}

impl ErrorCode {
    /// The stable identifier exactly as it appears in the spec's
    /// diagnostic contract (spec §6.4).
    pub const fn identifier(self) -> &'static str {
        match self {
            ErrorCode::FakeMustBeInterface => "FAKE_MUST_BE_INTERFACE",
            ErrorCode::FakeCannotBeSealed => "FAKE_CANNOT_BE_SEALED",
            ErrorCode::FakeCannotBeLocal => "FAKE_CANNOT_BE_LOCAL",
            ErrorCode::FakeClassMustBeAbstract => "FAKE_CLASS_MUST_BE_ABSTRACT",
            ErrorCode::FakeClassCannotBeSealed => "FAKE_CLASS_CANNOT_BE_SEALED",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[FAKT] {}", self.identifier())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_prefixed() {
        assert_eq!(
            ErrorCode::FakeMustBeInterface.to_string(),
            "[FAKT] FAKE_MUST_BE_INTERFACE"
        );
    }

    #[test]
    fn identifiers_are_stable() {
        assert_eq!(
            ErrorCode::FakeCannotBeSealed.identifier(),
            "FAKE_CANNOT_BE_SEALED"
        );
        assert_eq!(
            ErrorCode::FakeClassCannotBeSealed.identifier(),
            "FAKE_CLASS_CANNOT_BE_SEALED"
        );
    }
}
