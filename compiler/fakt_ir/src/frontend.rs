//! Frontend descriptors (spec §3): shape information extracted after
//! name and type resolution, with every type carried as already-rendered
//! source text.

use crate::location::SourceLocation;

/// A type parameter with its (sanitized, already-formatted) bounds.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct TypeParamInfo {
    pub name: String,
    pub bounds: Vec<String>,
}

/// One parameter of a frontend function.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct ParamInfo {
    pub name: String,
    pub ty: String,
    pub has_default: bool,
    /// Verbatim source rendering of the default expression, if the host
    /// resolver has a stable one. Carried as future-use metadata (spec
    /// §9): generated overrides never emit default-parameter syntax.
    pub default_expr: Option<String>,
    pub is_vararg: bool,
}

/// A property member, declared or inherited.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct PropertyInfo {
    pub name: String,
    pub ty: String,
    pub is_mutable: bool,
    pub is_nullable: bool,
    /// Only meaningful for class members; interface members are always
    /// effectively abstract and this field is ignored there.
    pub modifier: MemberModifier,
}

/// A function member, declared or inherited.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct FunctionInfo {
    pub name: String,
    pub params: Vec<ParamInfo>,
    pub return_type: String,
    pub is_suspend: bool,
    pub is_inline: bool,
    pub type_params: Vec<TypeParamInfo>,
    pub modifier: MemberModifier,
}

/// Whether a class member is still abstract or has an overridable
/// default (`open`). Interfaces do not use this distinction; every
/// interface member behaves as `Abstract` for the purposes of fake
/// generation.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum MemberModifier {
    Abstract,
    Open,
}

/// A validated `@Fake`-annotated interface, ready for transformation.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ValidatedInterface {
    pub qualified_id: String,
    pub simple_name: String,
    pub package_name: String,
    pub type_params: Vec<TypeParamInfo>,
    pub properties: Vec<PropertyInfo>,
    pub functions: Vec<FunctionInfo>,
    pub inherited_properties: Vec<PropertyInfo>,
    pub inherited_functions: Vec<FunctionInfo>,
    pub source_location: SourceLocation,
}

impl ValidatedInterface {
    /// All properties (direct then inherited), in that order, matching
    /// the emitters' member-iteration order throughout.
    pub fn all_properties(&self) -> impl Iterator<Item = &PropertyInfo> {
        self.properties.iter().chain(self.inherited_properties.iter())
    }

    pub fn all_functions(&self) -> impl Iterator<Item = &FunctionInfo> {
        self.functions.iter().chain(self.inherited_functions.iter())
    }
}

/// A validated `@Fake`-annotated abstract class, ready for
/// transformation. Members are partitioned by whether they remain
/// abstract or carry an `open` default implementation (spec §3).
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ValidatedClass {
    pub qualified_id: String,
    pub simple_name: String,
    pub package_name: String,
    pub type_params: Vec<TypeParamInfo>,
    pub abstract_properties: Vec<PropertyInfo>,
    pub open_properties: Vec<PropertyInfo>,
    pub abstract_methods: Vec<FunctionInfo>,
    pub open_methods: Vec<FunctionInfo>,
    pub inherited_properties: Vec<PropertyInfo>,
    pub inherited_functions: Vec<FunctionInfo>,
    pub source_location: SourceLocation,
}

impl ValidatedClass {
    pub fn all_properties(&self) -> impl Iterator<Item = &PropertyInfo> {
        self.abstract_properties
            .iter()
            .chain(self.open_properties.iter())
            .chain(self.inherited_properties.iter())
    }

    pub fn all_functions(&self) -> impl Iterator<Item = &FunctionInfo> {
        self.abstract_methods
            .iter()
            .chain(self.open_methods.iter())
            .chain(self.inherited_functions.iter())
    }
}
