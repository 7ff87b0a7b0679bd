//! Accumulates diagnostics and internal errors across one compilation.
//!
//! Frontend rejections abort only the declaration they're attached to
//! (spec §4.1 "Failure semantics"); the queue is how the orchestrator
//! collects every rejection across every declaration without letting one
//! bad declaration stop the others.

use crate::diagnostic::{Diagnostic, InternalError};

#[derive(Debug, Default)]
pub struct DiagnosticQueue {
    diagnostics: Vec<Diagnostic>,
    internal_errors: Vec<InternalError>,
}

impl DiagnosticQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    pub fn push_internal(&mut self, error: InternalError) {
        self.internal_errors.push(error);
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn internal_errors(&self) -> &[InternalError] {
        &self.internal_errors
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty() && self.internal_errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len() + self.internal_errors.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error_code::ErrorCode;
    use fakt_ir::SourceLocation;

    #[test]
    fn accumulates_independently() {
        let mut queue = DiagnosticQueue::new();
        assert!(queue.is_empty());
        queue.push(Diagnostic::new(
            ErrorCode::FakeCannotBeSealed,
            "Foo is sealed",
            SourceLocation::unknown(),
        ));
        queue.push_internal(InternalError::MissingIrProperty {
            declaration: "Foo".into(),
            member: "bar".into(),
        });
        assert_eq!(queue.len(), 2);
        assert_eq!(queue.diagnostics().len(), 1);
        assert_eq!(queue.internal_errors().len(), 1);
    }
}
