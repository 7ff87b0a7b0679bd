//! Diagnostic and error reporting for the Fakt fake-generation pipeline.
//!
//! Three channels, matching spec §7's error kinds:
//! - [`Diagnostic`] — user-authored frontend rejections (kind 1), stable
//!   `[FAKT]`-prefixed identifiers from [`ErrorCode`].
//! - [`InternalError`] — host-resolver desync (kind 2), never shown to
//!   the user as a `[FAKT]` code.
//! - [`DiagnosticQueue`] — per-compilation accumulation of both, so one
//!   bad declaration never stops the others.
//!
//! I/O degradation (kind 3) and fatal misconfiguration (kind 4) are
//! reported by the crates that own those resources (`fakt_cache`,
//! `faktc`) via `tracing` and their own error enums, not through this
//! queue — they are process/config-level, not per-declaration.

mod diagnostic;
mod error_code;
mod queue;

pub use diagnostic::{Diagnostic, InternalError};
pub use error_code::ErrorCode;
pub use queue::DiagnosticQueue;
