//! The generation model (spec §3): the typed shape the emitters consume,
//! produced once per declaration by `fakt_transform`.
//!
//! `pattern` is a `OnceLock`-backed cell rather than a plain field: spec
//! §4.2 step 5 and §9 call for classification to run at most once, on
//! first read, with concurrent first reads observing the same value.
//! `OnceLock` is the idiomatic single-init/many-read primitive for that;
//! see `DESIGN.md`.

use std::sync::OnceLock;

use crate::ir_descriptors::{IrClassHandle, IrFunctionMeta, IrPropertyMeta};
use crate::pattern::GenericPattern;

/// Generation model for an `@Fake` interface.
#[derive(Debug)]
pub struct InterfaceGenerationModel {
    pub simple_name: String,
    pub package_name: String,
    /// Formatted type-parameter text (`"T"` / `"T : Bound"`), in
    /// declaration order.
    pub type_params: Vec<String>,
    pub properties: Vec<IrPropertyMeta>,
    pub functions: Vec<IrFunctionMeta>,
    pub source_handle: IrClassHandle,
    pattern: OnceLock<GenericPattern>,
}

impl InterfaceGenerationModel {
    pub fn new(
        simple_name: String,
        package_name: String,
        type_params: Vec<String>,
        properties: Vec<IrPropertyMeta>,
        functions: Vec<IrFunctionMeta>,
        source_handle: IrClassHandle,
    ) -> Self {
        Self {
            simple_name,
            package_name,
            type_params,
            properties,
            functions,
            source_handle,
            pattern: OnceLock::new(),
        }
    }

    /// Returns the memoized generic-pattern classification, computing it
    /// via `compute` on first access only.
    pub fn pattern<F: FnOnce() -> GenericPattern>(&self, compute: F) -> &GenericPattern {
        self.pattern.get_or_init(compute)
    }

    /// Whether the pattern has already been computed, without forcing
    /// computation. Exposed for telemetry (spec §2, Telemetry: "per-fake
    /// metrics") and tests.
    pub fn pattern_is_computed(&self) -> bool {
        self.pattern.get().is_some()
    }
}

/// Generation model for an `@Fake` abstract class. Same shape as
/// [`InterfaceGenerationModel`] but members are partitioned into
/// abstract/open, mirroring [`crate::frontend::ValidatedClass`].
#[derive(Debug)]
pub struct ClassGenerationModel {
    pub simple_name: String,
    pub package_name: String,
    pub type_params: Vec<String>,
    pub abstract_properties: Vec<IrPropertyMeta>,
    pub open_properties: Vec<IrPropertyMeta>,
    pub abstract_methods: Vec<IrFunctionMeta>,
    pub open_methods: Vec<IrFunctionMeta>,
    pub source_handle: IrClassHandle,
    pattern: OnceLock<GenericPattern>,
}

impl ClassGenerationModel {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        simple_name: String,
        package_name: String,
        type_params: Vec<String>,
        abstract_properties: Vec<IrPropertyMeta>,
        open_properties: Vec<IrPropertyMeta>,
        abstract_methods: Vec<IrFunctionMeta>,
        open_methods: Vec<IrFunctionMeta>,
        source_handle: IrClassHandle,
    ) -> Self {
        Self {
            simple_name,
            package_name,
            type_params,
            abstract_properties,
            open_properties,
            abstract_methods,
            open_methods,
            source_handle,
            pattern: OnceLock::new(),
        }
    }

    pub fn pattern<F: FnOnce() -> GenericPattern>(&self, compute: F) -> &GenericPattern {
        self.pattern.get_or_init(compute)
    }

    pub fn all_properties(&self) -> impl Iterator<Item = &IrPropertyMeta> {
        self.abstract_properties.iter().chain(self.open_properties.iter())
    }

    pub fn all_functions(&self) -> impl Iterator<Item = &IrFunctionMeta> {
        self.abstract_methods.iter().chain(self.open_methods.iter())
    }
}
