//! A generic-pattern-agnostic view over a generation model (spec §4.6):
//! the emitters only need a flat member list, the formatted type
//! parameters, and the already-classified pattern, regardless of
//! whether the source declaration was an interface or an abstract
//! class.

use fakt_ir::{ClassGenerationModel, GenericPattern, InterfaceGenerationModel, IrFunctionMeta, IrPropertyMeta};

pub struct EmitTarget<'a> {
    pub simple_name: &'a str,
    pub package_name: &'a str,
    pub type_params: &'a [String],
    pub properties: Vec<&'a IrPropertyMeta>,
    pub functions: Vec<&'a IrFunctionMeta>,
    pub pattern: &'a GenericPattern,
}

impl<'a> EmitTarget<'a> {
    pub fn from_interface(model: &'a InterfaceGenerationModel, pattern: &'a GenericPattern) -> Self {
        Self {
            simple_name: &model.simple_name,
            package_name: &model.package_name,
            type_params: &model.type_params,
            properties: model.properties.iter().collect(),
            functions: model.functions.iter().collect(),
            pattern,
        }
    }

    pub fn from_class(model: &'a ClassGenerationModel, pattern: &'a GenericPattern) -> Self {
        Self {
            simple_name: &model.simple_name,
            package_name: &model.package_name,
            type_params: &model.type_params,
            properties: model.all_properties().collect(),
            functions: model.all_functions().collect(),
            pattern,
        }
    }

    /// Whether an occurrence of a class-level type parameter should
    /// render symbolically (spec §4.6.1): `false` once erased under
    /// `ClassLevel`/`Mixed`, in which case every occurrence becomes the
    /// top type instead.
    pub fn preserve_class_type_params(&self) -> bool {
        !self.pattern.erases_class_type_params()
    }

    /// The implementation class never declares its own class-level
    /// generic parameter list: under `None`/`MethodLevel` there are no
    /// class-level parameters to declare, and under `ClassLevel`/`Mixed`
    /// they are erased rather than declared (spec §4.6.1).
    pub fn header_generics(&self) -> &'static str {
        ""
    }

    /// The type-argument list satisfying the source declaration's own
    /// generic contract at the `: SourceType<...>` supertype position:
    /// the symbolic parameter names when preserved, or one top-type
    /// argument per erased class-level parameter.
    pub fn supertype_type_arguments(&self) -> String {
        if self.type_params.is_empty() {
            return String::new();
        }
        if self.preserve_class_type_params() {
            let names: Vec<&str> = self
                .type_params
                .iter()
                .map(|tp| tp.split(" : ").next().unwrap_or(tp.as_str()))
                .collect();
            format!("<{}>", names.join(", "))
        } else {
            let tops = vec!["Any"; self.type_params.len()].join(", ");
            format!("<{tops}>")
        }
    }

    /// Bare class-level type-parameter names to erase in member
    /// signatures, e.g. `["T"]` for `"T : Comparable<T>"`. Empty unless
    /// the pattern erases class-level parameters.
    pub fn erased_class_param_names(&self) -> Vec<String> {
        if !self.pattern.erases_class_type_params() {
            return Vec::new();
        }
        self.pattern
            .class_type_params()
            .iter()
            .map(|tp| tp.split(" : ").next().unwrap_or(tp.as_str()).to_owned())
            .collect()
    }

    /// Renders a member-signature type, erasing only this target's
    /// own (class-level) type parameters and leaving a function's own
    /// method-level parameters symbolic.
    pub fn render_member_type(&self, ty: &fakt_ir::ResolvedType) -> String {
        let erased = self.erased_class_param_names();
        if erased.is_empty() {
            fakt_resolve::render(ty, true)
        } else {
            fakt_resolve::render_erasing(ty, &erased)
        }
    }
}
