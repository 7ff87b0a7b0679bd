//! Frontend Validator & Extractor (spec §4.1).
//!
//! Walks an annotated declaration, rejects disallowed shapes, and
//! produces a [`fakt_ir::ValidatedInterface`] or
//! [`fakt_ir::ValidatedClass`] for everything else.

mod extract;
mod validate;

pub use extract::{extract_class, extract_interface};
pub use validate::validate_shape;

use fakt_diagnostic::Diagnostic;
use fakt_ir::{DeclHandle, DeclShape, DeclarationSource};

/// Either half of a validated `@Fake` target.
#[derive(Clone, Debug)]
pub enum ValidatedDeclaration {
    Interface(fakt_ir::ValidatedInterface),
    Class(fakt_ir::ValidatedClass),
}

/// Validates and extracts one annotated declaration. A rejection aborts
/// only this declaration (spec §4.1 "Failure semantics"); the caller
/// keeps processing the rest of the compilation.
pub fn process_declaration<S: DeclarationSource + ?Sized>(
    source: &S,
    decl: DeclHandle,
) -> Result<ValidatedDeclaration, Diagnostic> {
    validate_shape(source, decl)?;
    tracing::debug!(qualified_id = %source.qualified_id(decl), "declaration accepted by frontend validator");
    Ok(match source.shape(decl) {
        DeclShape::Interface => ValidatedDeclaration::Interface(extract_interface(source, decl)),
        DeclShape::Class => ValidatedDeclaration::Class(extract_class(source, decl)),
        DeclShape::Other => unreachable!("validate_shape already rejected non-interface/class shapes"),
    })
}
