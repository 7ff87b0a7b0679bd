//! Core data model for the Fakt fake-generation pipeline.
//!
//! This crate holds the value types shared by every stage of the pipeline:
//! the build-tool-supplied [`routing::RoutingRecord`], the string-typed
//! frontend descriptors produced by declaration extraction, the
//! `ResolvedType`-typed IR descriptors produced by the frontend→IR
//! transform, the [`pattern::GenericPattern`] classification, and the
//! [`generation_model::GenerationModel`] handed to the emitters.
//!
//! It also defines the two adapter traits ([`adapter::DeclarationSource`]
//! and [`adapter::IrClassLookup`]) that stand in for a live host-compiler
//! frontend and IR phase. A real compiler-plugin binding implements both
//! traits over its own resolved trees; this workspace's test suite and
//! demo binary use the in-memory implementation in `fakt_fixtures`.
//!
//! Frontend descriptors are discarded at the end of a compilation. IR
//! descriptors and the generation model are discarded once a declaration's
//! file has been emitted. Nothing here is a salsa input or a
//! process-wide singleton — see `DESIGN.md` for why.

pub mod adapter;
pub mod frontend;
pub mod generation_model;
pub mod ir_descriptors;
pub mod location;
pub mod pattern;
pub mod resolved_type;
pub mod routing;
pub mod sanitize;

pub use adapter::{DeclHandle, DeclShape, DeclarationSource, IrClassLookup, IrTypeParamInfo};
pub use frontend::{
    FunctionInfo, MemberModifier, ParamInfo, PropertyInfo, TypeParamInfo, ValidatedClass,
    ValidatedInterface,
};
pub use generation_model::{ClassGenerationModel, InterfaceGenerationModel};
pub use ir_descriptors::{
    IrClassHandle, IrFunctionHandle, IrFunctionMeta, IrParamHandle, IrParamMeta, IrPropertyHandle,
    IrPropertyMeta,
};
pub use location::SourceLocation;
pub use pattern::{Constraint, GenericMethod, GenericPattern};
pub use resolved_type::{PrimitiveArrayKind, ResolvedType};
pub use routing::{PlatformKind, RoutingRecord, SourceSetRef};
