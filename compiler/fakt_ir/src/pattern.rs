//! Generic-pattern classification (spec §4.3): how a declaration uses
//! type parameters, computed lazily and memoized at most once per
//! generation model (spec §4.2 step 5, §9).

use crate::resolved_type::ResolvedType;

/// A single type-parameter constraint collected from an IR class's
/// direct super-type bounds.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Constraint {
    pub param_name: String,
    pub bound_text: String,
    pub bound_type: ResolvedType,
}

/// A function that carries its own (method-level) type parameters.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GenericMethod {
    pub name: String,
    pub type_params: Vec<String>,
    pub constraints: Vec<Constraint>,
    pub params: Vec<crate::ir_descriptors::IrParamMeta>,
    pub return_type: ResolvedType,
    pub is_suspend: bool,
}

/// How a declaration uses type parameters, classified per spec §4.3.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum GenericPattern {
    /// No type parameters anywhere.
    None,
    /// Only class-level type parameters.
    ClassLevel {
        type_params: Vec<String>,
        constraints: Vec<Constraint>,
    },
    /// Only method-level type parameters, on one or more functions.
    MethodLevel { generic_methods: Vec<GenericMethod> },
    /// Both class-level and method-level type parameters.
    Mixed {
        class_params: Vec<String>,
        class_constraints: Vec<Constraint>,
        generic_methods: Vec<GenericMethod>,
    },
}

impl GenericPattern {
    /// Whether the implementation class header needs class-level type
    /// parameters erased to the type system's top type (spec §4.6.1).
    pub fn erases_class_type_params(&self) -> bool {
        matches!(self, GenericPattern::ClassLevel { .. } | GenericPattern::Mixed { .. })
    }

    pub fn is_none(&self) -> bool {
        matches!(self, GenericPattern::None)
    }

    pub fn class_type_params(&self) -> &[String] {
        match self {
            GenericPattern::ClassLevel { type_params, .. }
            | GenericPattern::Mixed {
                class_params: type_params,
                ..
            } => type_params,
            GenericPattern::None | GenericPattern::MethodLevel { .. } => &[],
        }
    }
}
