//! A small in-memory declaration tree implementing both
//! [`DeclarationSource`] and [`IrClassLookup`] over the same data, used
//! by the workspace's tests and the `faktc` demo binary in place of a
//! live host compiler (spec §6 ambient addition).

use std::sync::Mutex;

use fakt_ir::{
    DeclHandle, DeclShape, DeclarationSource, FunctionInfo, IrClassHandle, IrClassLookup,
    IrFunctionHandle, IrParamHandle, IrPropertyHandle, IrTypeParamInfo, MemberModifier, ParamInfo,
    PropertyInfo, ResolvedType, SourceLocation, TypeParamInfo,
};

use crate::type_parse::parse_type;

#[derive(Clone, Debug)]
pub struct FixtureParam {
    pub name: String,
    pub ty: String,
    pub has_default: bool,
    pub default_expr: Option<String>,
    pub is_vararg: bool,
}

impl FixtureParam {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            has_default: false,
            default_expr: None,
            is_vararg: false,
        }
    }

    pub fn vararg(mut self) -> Self {
        self.is_vararg = true;
        self
    }

    pub fn with_default(mut self, expr: impl Into<String>) -> Self {
        self.has_default = true;
        self.default_expr = Some(expr.into());
        self
    }
}

#[derive(Clone, Debug)]
pub struct FixtureProperty {
    pub name: String,
    pub ty: String,
    pub is_mutable: bool,
    pub is_nullable: bool,
    pub modifier: MemberModifier,
}

impl FixtureProperty {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            is_mutable: false,
            is_nullable: false,
            modifier: MemberModifier::Abstract,
        }
    }

    pub fn mutable(mut self) -> Self {
        self.is_mutable = true;
        self
    }

    pub fn nullable(mut self) -> Self {
        self.is_nullable = true;
        self
    }

    pub fn open(mut self) -> Self {
        self.modifier = MemberModifier::Open;
        self
    }
}

#[derive(Clone, Debug)]
pub struct FixtureFunction {
    pub name: String,
    pub params: Vec<FixtureParam>,
    pub return_type: String,
    pub is_suspend: bool,
    pub is_inline: bool,
    pub is_operator: bool,
    pub extension_receiver: Option<String>,
    pub type_params: Vec<TypeParamInfo>,
    pub modifier: MemberModifier,
}

impl FixtureFunction {
    pub fn new(name: impl Into<String>, return_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            params: Vec::new(),
            return_type: return_type.into(),
            is_suspend: false,
            is_inline: false,
            is_operator: false,
            extension_receiver: None,
            type_params: Vec::new(),
            modifier: MemberModifier::Abstract,
        }
    }

    pub fn param(mut self, param: FixtureParam) -> Self {
        self.params.push(param);
        self
    }

    pub fn suspend(mut self) -> Self {
        self.is_suspend = true;
        self
    }

    pub fn inline(mut self) -> Self {
        self.is_inline = true;
        self
    }

    pub fn operator(mut self) -> Self {
        self.is_operator = true;
        self
    }

    pub fn extension_receiver(mut self, ty: impl Into<String>) -> Self {
        self.extension_receiver = Some(ty.into());
        self
    }

    pub fn type_param(mut self, name: impl Into<String>, bounds: Vec<String>) -> Self {
        self.type_params.push(TypeParamInfo {
            name: name.into(),
            bounds,
        });
        self
    }

    pub fn open(mut self) -> Self {
        self.modifier = MemberModifier::Open;
        self
    }
}

#[derive(Clone, Debug)]
struct DeclData {
    shape: DeclShape,
    qualified_id: String,
    sealed: bool,
    local: bool,
    abstract_class: bool,
    private_primary_ctor: bool,
    type_params: Vec<TypeParamInfo>,
    properties: Vec<FixtureProperty>,
    functions: Vec<FixtureFunction>,
    supertypes: Vec<DeclHandle>,
}

/// An in-memory, append-only declaration tree. Build one with
/// `FixtureSource::new()` and the `declare_*`/`add_*` methods, then pass
/// `&fx` anywhere a [`DeclarationSource`] or [`IrClassLookup`] is
/// expected.
#[derive(Default)]
pub struct FixtureSource {
    decls: Vec<DeclData>,
    prop_registry: Mutex<Vec<(u32, usize)>>,
    func_registry: Mutex<Vec<(u32, usize)>>,
    param_registry: Mutex<Vec<(u32, usize, usize)>>,
}

impl FixtureSource {
    pub fn new() -> Self {
        Self::default()
    }

    fn declare(&mut self, shape: DeclShape, qualified_id: &str, abstract_class: bool) -> DeclHandle {
        let idx = self.decls.len() as u32;
        self.decls.push(DeclData {
            shape,
            qualified_id: qualified_id.to_owned(),
            sealed: false,
            local: false,
            abstract_class,
            private_primary_ctor: false,
            type_params: Vec::new(),
            properties: Vec::new(),
            functions: Vec::new(),
            supertypes: Vec::new(),
        });
        DeclHandle(idx)
    }

    pub fn declare_interface(&mut self, qualified_id: &str) -> DeclHandle {
        self.declare(DeclShape::Interface, qualified_id, false)
    }

    pub fn declare_class(&mut self, qualified_id: &str, is_abstract: bool) -> DeclHandle {
        self.declare(DeclShape::Class, qualified_id, is_abstract)
    }

    pub fn declare_other(&mut self, qualified_id: &str) -> DeclHandle {
        self.declare(DeclShape::Other, qualified_id, false)
    }

    fn decl_mut(&mut self, decl: DeclHandle) -> &mut DeclData {
        &mut self.decls[decl.0 as usize]
    }

    fn decl(&self, decl: DeclHandle) -> &DeclData {
        &self.decls[decl.0 as usize]
    }

    pub fn set_sealed(&mut self, decl: DeclHandle, sealed: bool) {
        self.decl_mut(decl).sealed = sealed;
    }

    pub fn set_local(&mut self, decl: DeclHandle, local: bool) {
        self.decl_mut(decl).local = local;
    }

    pub fn set_private_primary_constructor(&mut self, decl: DeclHandle, private: bool) {
        self.decl_mut(decl).private_primary_ctor = private;
    }

    pub fn add_property(&mut self, decl: DeclHandle, property: FixtureProperty) {
        self.decl_mut(decl).properties.push(property);
    }

    pub fn add_function(&mut self, decl: DeclHandle, function: FixtureFunction) {
        self.decl_mut(decl).functions.push(function);
    }

    pub fn add_supertype(&mut self, decl: DeclHandle, supertype: DeclHandle) {
        self.decl_mut(decl).supertypes.push(supertype);
    }

    pub fn add_type_param(&mut self, decl: DeclHandle, name: &str, bounds: Vec<String>) {
        self.decl_mut(decl).type_params.push(TypeParamInfo {
            name: name.to_owned(),
            bounds,
        });
    }

    /// Every handle declared so far, in declaration order. Lets a caller
    /// that built a fixture tree (a demo binary, an integration test)
    /// walk the whole "compilation" without tracking handles itself.
    pub fn all_declared(&self) -> Vec<DeclHandle> {
        (0..self.decls.len() as u32).map(DeclHandle).collect()
    }
}

fn to_property_info(p: &FixtureProperty) -> PropertyInfo {
    PropertyInfo {
        name: p.name.clone(),
        ty: p.ty.clone(),
        is_mutable: p.is_mutable,
        is_nullable: p.is_nullable,
        modifier: p.modifier,
    }
}

fn to_function_info(f: &FixtureFunction) -> FunctionInfo {
    FunctionInfo {
        name: f.name.clone(),
        params: f
            .params
            .iter()
            .map(|p| ParamInfo {
                name: p.name.clone(),
                ty: p.ty.clone(),
                has_default: p.has_default,
                default_expr: p.default_expr.clone(),
                is_vararg: p.is_vararg,
            })
            .collect(),
        return_type: f.return_type.clone(),
        is_suspend: f.is_suspend,
        is_inline: f.is_inline,
        type_params: f.type_params.clone(),
        modifier: f.modifier,
    }
}

impl DeclarationSource for FixtureSource {
    fn shape(&self, decl: DeclHandle) -> DeclShape {
        self.decl(decl).shape
    }

    fn is_sealed(&self, decl: DeclHandle) -> bool {
        self.decl(decl).sealed
    }

    fn is_local(&self, decl: DeclHandle) -> bool {
        self.decl(decl).local
    }

    fn is_abstract_class(&self, decl: DeclHandle) -> bool {
        self.decl(decl).abstract_class
    }

    fn has_private_primary_constructor(&self, decl: DeclHandle) -> bool {
        self.decl(decl).private_primary_ctor
    }

    fn qualified_id(&self, decl: DeclHandle) -> String {
        self.decl(decl).qualified_id.clone()
    }

    fn simple_name(&self, decl: DeclHandle) -> String {
        self.decl(decl)
            .qualified_id
            .rsplit('.')
            .next()
            .unwrap_or_default()
            .to_owned()
    }

    fn package_name(&self, decl: DeclHandle) -> String {
        let qid = &self.decl(decl).qualified_id;
        match qid.rfind('.') {
            Some(idx) => qid[..idx].to_owned(),
            None => String::new(),
        }
    }

    fn source_location(&self, _decl: DeclHandle) -> SourceLocation {
        SourceLocation::unknown()
    }

    fn type_params(&self, decl: DeclHandle) -> Vec<TypeParamInfo> {
        self.decl(decl).type_params.clone()
    }

    fn direct_properties(&self, decl: DeclHandle) -> Vec<PropertyInfo> {
        self.decl(decl).properties.iter().map(to_property_info).collect()
    }

    fn direct_functions(&self, decl: DeclHandle) -> Vec<FunctionInfo> {
        self.decl(decl).functions.iter().map(to_function_info).collect()
    }

    fn supertypes(&self, decl: DeclHandle) -> Vec<DeclHandle> {
        self.decl(decl).supertypes.clone()
    }

    fn ir_class_handle(&self, decl: DeclHandle) -> IrClassHandle {
        IrClassHandle(decl.0)
    }
}

impl IrClassLookup for FixtureSource {
    fn direct_property(&self, class: IrClassHandle, name: &str) -> Option<IrPropertyHandle> {
        let idx = self.decls[class.0 as usize]
            .properties
            .iter()
            .position(|p| p.name == name)?;
        let mut registry = self.prop_registry.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
        registry.push((class.0, idx));
        Some(IrPropertyHandle((registry.len() - 1) as u32))
    }

    fn direct_function(&self, class: IrClassHandle, name: &str) -> Option<IrFunctionHandle> {
        let idx = self.decls[class.0 as usize]
            .functions
            .iter()
            .position(|f| f.name == name)?;
        let mut registry = self.func_registry.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
        registry.push((class.0, idx));
        Some(IrFunctionHandle((registry.len() - 1) as u32))
    }

    fn property_getter_return_type(&self, prop: IrPropertyHandle) -> Option<ResolvedType> {
        let (class_idx, idx) = self.prop_registry.lock().unwrap_or_else(std::sync::PoisonError::into_inner)[prop.0 as usize];
        let p = &self.decls[class_idx as usize].properties[idx];
        Some(parse_type(&p.ty))
    }

    fn property_backing_field_type(&self, prop: IrPropertyHandle) -> Option<ResolvedType> {
        self.property_getter_return_type(prop)
    }

    fn function_return_type(&self, func: IrFunctionHandle) -> ResolvedType {
        let (class_idx, idx) = self.func_registry.lock().unwrap_or_else(std::sync::PoisonError::into_inner)[func.0 as usize];
        parse_type(&self.decls[class_idx as usize].functions[idx].return_type)
    }

    fn function_regular_params(&self, func: IrFunctionHandle) -> Vec<IrParamHandle> {
        let (class_idx, func_idx) = self.func_registry.lock().unwrap_or_else(std::sync::PoisonError::into_inner)[func.0 as usize];
        let count = self.decls[class_idx as usize].functions[func_idx].params.len();
        let mut registry = self.param_registry.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
        (0..count)
            .map(|param_idx| {
                registry.push((class_idx, func_idx, param_idx));
                IrParamHandle((registry.len() - 1) as u32)
            })
            .collect()
    }

    fn param_type(&self, param: IrParamHandle) -> ResolvedType {
        let (class_idx, func_idx, param_idx) = self.param_registry.lock().unwrap_or_else(std::sync::PoisonError::into_inner)[param.0 as usize];
        parse_type(&self.decls[class_idx as usize].functions[func_idx].params[param_idx].ty)
    }

    fn is_operator(&self, func: IrFunctionHandle) -> bool {
        let (class_idx, idx) = self.func_registry.lock().unwrap_or_else(std::sync::PoisonError::into_inner)[func.0 as usize];
        self.decls[class_idx as usize].functions[idx].is_operator
    }

    fn extension_receiver_type(&self, func: IrFunctionHandle) -> Option<ResolvedType> {
        let (class_idx, idx) = self.func_registry.lock().unwrap_or_else(std::sync::PoisonError::into_inner)[func.0 as usize];
        self.decls[class_idx as usize].functions[idx]
            .extension_receiver
            .as_deref()
            .map(parse_type)
    }

    fn class_type_params(&self, class: IrClassHandle) -> Vec<IrTypeParamInfo> {
        type_params_of(&self.decls[class.0 as usize].type_params)
    }

    fn function_type_params(&self, func: IrFunctionHandle) -> Vec<IrTypeParamInfo> {
        let (class_idx, idx) = self.func_registry.lock().unwrap_or_else(std::sync::PoisonError::into_inner)[func.0 as usize];
        type_params_of(&self.decls[class_idx as usize].functions[idx].type_params)
    }
}

fn type_params_of(type_params: &[TypeParamInfo]) -> Vec<IrTypeParamInfo> {
    type_params
        .iter()
        .map(|tp| {
            let bound_text = tp.bounds.first().cloned().unwrap_or_default();
            let bound_type = tp
                .bounds
                .first()
                .map(|b| parse_type(b))
                .unwrap_or(ResolvedType::Named {
                    qualified_name: "kotlin.Any".to_owned(),
                    type_arguments: vec![],
                });
            IrTypeParamInfo {
                name: tp.name.clone(),
                bound_text,
                bound_type,
            }
        })
        .collect()
}
