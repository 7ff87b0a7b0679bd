//! IR descriptors (spec §3): the frontend descriptor shape with every
//! `type: text` field replaced by a [`crate::ResolvedType`], plus a
//! back-reference to the corresponding IR node. Produced only by
//! `fakt_transform`'s pure-lookup algorithm (spec §4.2); never
//! constructed by hand outside tests.

use crate::resolved_type::ResolvedType;

/// Opaque, adapter-defined handle to an IR class declaration.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct IrClassHandle(pub u32);

/// Opaque, adapter-defined handle to an IR property declaration.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct IrPropertyHandle(pub u32);

/// Opaque, adapter-defined handle to an IR function declaration.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct IrFunctionHandle(pub u32);

/// Opaque, adapter-defined handle to an IR value parameter.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct IrParamHandle(pub u32);

/// One IR-resolved parameter, position-matched to its frontend
/// counterpart (spec §3 invariant: regular IR parameter count equals
/// frontend parameter count, same order).
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct IrParamMeta {
    pub name: String,
    pub ty: ResolvedType,
    pub has_default: bool,
    pub default_expr: Option<String>,
    pub is_vararg: bool,
}

/// One IR-resolved property member.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct IrPropertyMeta {
    pub name: String,
    pub ty: ResolvedType,
    pub is_mutable: bool,
    pub is_nullable: bool,
    pub ir_node: IrPropertyHandle,
}

/// One IR-resolved function member.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct IrFunctionMeta {
    pub name: String,
    pub params: Vec<IrParamMeta>,
    pub return_type: ResolvedType,
    pub is_suspend: bool,
    pub is_inline: bool,
    pub is_operator: bool,
    pub extension_receiver_type: Option<ResolvedType>,
    /// Formatted type-parameter text (`"T"` or `"T : B1, B2"`), sanitized
    /// per [`crate::sanitize`]. Empty for non-generic functions.
    pub type_params: Vec<String>,
    pub ir_node: IrFunctionHandle,
}

impl IrFunctionMeta {
    pub fn is_generic(&self) -> bool {
        !self.type_params.is_empty()
    }
}
