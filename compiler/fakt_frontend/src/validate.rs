//! Validation rules (spec §4.1). Rejections never halt the compilation —
//! they are returned as a single [`Diagnostic`] for the caller to attach
//! to the declaration's source location; the caller moves on to the next
//! annotated declaration.

use fakt_diagnostic::{Diagnostic, ErrorCode};
use fakt_ir::{DeclHandle, DeclShape, DeclarationSource};

/// Checks the shape-rejection rules in the order spec §4.1 lists them.
/// Returns `Ok(())` if the declaration is a valid fake target; `Err` with
/// the diagnostic to attach otherwise.
pub fn validate_shape<S: DeclarationSource + ?Sized>(
    source: &S,
    decl: DeclHandle,
) -> Result<(), Diagnostic> {
    let shape = source.shape(decl);
    let location = source.source_location(decl);
    let name = source.qualified_id(decl);

    match shape {
        DeclShape::Other => {
            return Err(Diagnostic::new(
                ErrorCode::FakeMustBeInterface,
                format!("`@Fake` cannot be applied to `{name}`: only interfaces and abstract classes are supported"),
                location,
            ));
        }
        DeclShape::Interface => {
            if source.is_sealed(decl) {
                return Err(Diagnostic::new(
                    ErrorCode::FakeCannotBeSealed,
                    format!("`@Fake` cannot be applied to sealed interface `{name}`"),
                    location,
                ));
            }
        }
        DeclShape::Class => {
            if source.is_sealed(decl) {
                return Err(Diagnostic::new(
                    ErrorCode::FakeClassCannotBeSealed,
                    format!("`@Fake` cannot be applied to sealed class `{name}`"),
                    location,
                ));
            }
        }
    }

    if source.is_local(decl) {
        return Err(Diagnostic::new(
            ErrorCode::FakeCannotBeLocal,
            format!("`@Fake` cannot be applied to local declaration `{name}`"),
            location,
        ));
    }

    if shape == DeclShape::Class {
        // Spec §4.1: "no abstract constructors, no private primary
        // constructor" — a private primary constructor makes the class
        // just as unusable as a concrete class would be, since the
        // generated implementation must be able to construct it with no
        // arguments. Constructor parameters themselves are never part
        // of the fake contract (spec §4.1 parenthetical), so they are
        // not otherwise inspected.
        if !source.is_abstract_class(decl) {
            return Err(Diagnostic::new(
                ErrorCode::FakeClassMustBeAbstract,
                format!("`@Fake` cannot be applied to concrete class `{name}`"),
                location,
            ));
        }
        if source.has_private_primary_constructor(decl) {
            return Err(Diagnostic::new(
                ErrorCode::FakeClassMustBeAbstract,
                format!(
                    "`@Fake` cannot be applied to `{name}`: primary constructor is private"
                ),
                location,
            ));
        }
    }

    Ok(())
}
