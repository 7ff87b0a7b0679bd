//! User-authored diagnostics (spec §7 kind 1): frontend rejections
//! attached to a declaration's source location. Always an error — the
//! frontend never warns about shape, it either accepts a declaration or
//! rejects it outright.

use fakt_ir::SourceLocation;

use crate::error_code::ErrorCode;

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Diagnostic {
    pub code: ErrorCode,
    pub message: String,
    pub location: SourceLocation,
}

impl Diagnostic {
    pub fn new(code: ErrorCode, message: impl Into<String>, location: SourceLocation) -> Self {
        Self {
            code,
            message: message.into(),
            location,
        }
    }

    /// The full rendered line a host compiler would attach to the
    /// declaration, e.g. `[FAKT] FAKE_CANNOT_BE_SEALED: ...`.
    pub fn rendered(&self) -> String {
        format!("{}: {}", self.code, self.message)
    }
}

/// A host-resolver desync (spec §7 kind 2): the IR phase could not find
/// a member the frontend phase promised would exist, or a parameter
/// count mismatch. Reported as a compiler-internal error, never shown to
/// the user as a `[FAKT]` diagnostic (spec §6.4).
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum InternalError {
    #[error(
        "internal error in declaration `{declaration}`: IR property `{member}` not found \
         in direct declarations (frontend/IR desync)"
    )]
    MissingIrProperty {
        declaration: String,
        member: String,
    },
    #[error(
        "internal error in declaration `{declaration}`: IR function `{member}` not found \
         in direct declarations (frontend/IR desync)"
    )]
    MissingIrFunction {
        declaration: String,
        member: String,
    },
    #[error(
        "internal error in declaration `{declaration}`, function `{function}`: expected \
         {expected} regular parameters from the frontend descriptor but the IR function has \
         {actual}"
    )]
    ParamCountMismatch {
        declaration: String,
        function: String,
        expected: usize,
        actual: usize,
    },
}
