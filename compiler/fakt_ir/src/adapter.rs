//! The host-compiler seam (spec §1, "plugin-registration glue ... out of
//! scope"; SPEC_FULL.md §6 ambient addition).
//!
//! A real Fakt plugin binds these two traits to its host compiler's
//! resolved declaration tree and IR tree. This workspace's tests and
//! demo binary bind them to `fakt_fixtures`'s plain in-memory trees.
//! Neither trait performs validation or caching; both are pure lookups
//! over whatever the host already resolved.

use crate::frontend::{FunctionInfo, PropertyInfo, TypeParamInfo};
use crate::ir_descriptors::{IrClassHandle, IrFunctionHandle, IrParamHandle, IrPropertyHandle};
use crate::location::SourceLocation;
use crate::resolved_type::ResolvedType;

/// Opaque, adapter-defined handle to a frontend declaration (interface or
/// class) under consideration for `@Fake` generation.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct DeclHandle(pub u32);

/// The coarse shape of a declaration, as seen before validation rejects
/// unsupported shapes (spec §4.1).
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum DeclShape {
    Interface,
    Class,
    /// Object, enum, annotation class, etc. — always rejected.
    Other,
}

/// Walks an annotated declaration as the frontend phase would see it:
/// string-typed, position-matched, no IR involved.
pub trait DeclarationSource {
    fn shape(&self, decl: DeclHandle) -> DeclShape;
    fn is_sealed(&self, decl: DeclHandle) -> bool;
    fn is_local(&self, decl: DeclHandle) -> bool;
    /// Classes only: whether the class itself is declared `abstract`.
    fn is_abstract_class(&self, decl: DeclHandle) -> bool;
    /// Classes only: whether the primary constructor is `private`.
    fn has_private_primary_constructor(&self, decl: DeclHandle) -> bool;

    fn qualified_id(&self, decl: DeclHandle) -> String;
    fn simple_name(&self, decl: DeclHandle) -> String;
    fn package_name(&self, decl: DeclHandle) -> String;
    fn source_location(&self, decl: DeclHandle) -> SourceLocation;

    fn type_params(&self, decl: DeclHandle) -> Vec<TypeParamInfo>;
    fn direct_properties(&self, decl: DeclHandle) -> Vec<PropertyInfo>;
    fn direct_functions(&self, decl: DeclHandle) -> Vec<FunctionInfo>;

    /// Direct supertypes, for the transitive inherited-member walk
    /// (spec §4.1). Does not need to be acyclic; extraction dedupes by
    /// name and stops revisiting a declaration it has already visited.
    fn supertypes(&self, decl: DeclHandle) -> Vec<DeclHandle>;

    /// The IR class handle this frontend declaration corresponds to,
    /// used to bridge into [`IrClassLookup`] for the transform phase.
    fn ir_class_handle(&self, decl: DeclHandle) -> IrClassHandle;
}

/// A class-level type parameter as seen from the IR phase: its name, its
/// already-rendered bound text, and the bound's resolved type (used by
/// the pattern classifier to build [`crate::pattern::Constraint`]
/// values).
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct IrTypeParamInfo {
    pub name: String,
    pub bound_text: String,
    pub bound_type: ResolvedType,
}

/// Resolves IR-level declarations by pure lookup, as the frontend→IR
/// transformer requires (spec §4.2: "by pure lookup, without any
/// additional validation or discovery").
pub trait IrClassLookup {
    fn direct_property(&self, class: IrClassHandle, name: &str) -> Option<IrPropertyHandle>;
    fn direct_function(&self, class: IrClassHandle, name: &str) -> Option<IrFunctionHandle>;

    /// The getter's declared return type, if the IR property has one.
    fn property_getter_return_type(&self, prop: IrPropertyHandle) -> Option<ResolvedType>;
    /// The backing field's type, used as a fallback when the getter's
    /// return type is unavailable (spec §4.2 step 1).
    fn property_backing_field_type(&self, prop: IrPropertyHandle) -> Option<ResolvedType>;

    fn function_return_type(&self, func: IrFunctionHandle) -> ResolvedType;
    /// Regular (non-receiver, non-context) parameters only, in
    /// declaration order (spec §4.2 step 2).
    fn function_regular_params(&self, func: IrFunctionHandle) -> Vec<IrParamHandle>;
    fn param_type(&self, param: IrParamHandle) -> ResolvedType;
    fn is_operator(&self, func: IrFunctionHandle) -> bool;
    fn extension_receiver_type(&self, func: IrFunctionHandle) -> Option<ResolvedType>;

    /// The IR class's own (class-level) type parameters, used by the
    /// pattern classifier (spec §4.3). Empty for non-generic classes.
    fn class_type_params(&self, class: IrClassHandle) -> Vec<IrTypeParamInfo>;

    /// A generic function's own (method-level) type parameters, used by
    /// the pattern classifier to build [`crate::pattern::Constraint`]
    /// values for [`crate::pattern::GenericMethod`]. Empty for
    /// non-generic functions.
    fn function_type_params(&self, func: IrFunctionHandle) -> Vec<IrTypeParamInfo>;
}
