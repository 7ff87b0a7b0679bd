//! Frontend-to-IR Transformer & Pattern Classifier (spec §4.2, §4.3).
//!
//! [`transform_interface`] and [`transform_class`] turn a validated
//! frontend declaration into a [`fakt_ir::InterfaceGenerationModel`] or
//! [`fakt_ir::ClassGenerationModel`] by pure lookup against the IR
//! adapter — no validation, no discovery, no caching. [`classify::classify`]
//! is the generic-pattern classifier consumed lazily through the
//! generation model's memoized `pattern()` accessor; this crate never
//! calls it itself.

mod classify;
mod lookup;

pub use classify::classify;
pub use lookup::{transform_function, transform_property};

use fakt_diagnostic::InternalError;
use fakt_ir::sanitize::format_type_param;
use fakt_ir::{
    ClassGenerationModel, DeclHandle, DeclarationSource, InterfaceGenerationModel, IrClassLookup,
    ValidatedClass, ValidatedInterface,
};

/// Transforms a validated interface into its generation model (spec
/// §4.2). `decl` resolves the IR class handle via the declaration
/// source; `adapter` resolves every member against it.
pub fn transform_interface<D, L>(
    source: &D,
    adapter: &L,
    decl: DeclHandle,
    validated: &ValidatedInterface,
) -> Result<InterfaceGenerationModel, InternalError>
where
    D: DeclarationSource + ?Sized,
    L: IrClassLookup + ?Sized,
{
    let ir_class = source.ir_class_handle(decl);

    let properties = validated
        .all_properties()
        .map(|p| transform_property(adapter, ir_class, &validated.qualified_id, p))
        .collect::<Result<Vec<_>, _>>()?;

    let functions = validated
        .all_functions()
        .map(|f| transform_function(adapter, ir_class, &validated.qualified_id, f))
        .collect::<Result<Vec<_>, _>>()?;

    let type_params = validated
        .type_params
        .iter()
        .map(|tp| format_type_param(&tp.name, &tp.bounds))
        .collect();

    Ok(InterfaceGenerationModel::new(
        validated.simple_name.clone(),
        validated.package_name.clone(),
        type_params,
        properties,
        functions,
        ir_class,
    ))
}

/// Transforms a validated abstract class into its generation model (spec
/// §4.2), preserving the abstract/open member partition.
pub fn transform_class<D, L>(
    source: &D,
    adapter: &L,
    decl: DeclHandle,
    validated: &ValidatedClass,
) -> Result<ClassGenerationModel, InternalError>
where
    D: DeclarationSource + ?Sized,
    L: IrClassLookup + ?Sized,
{
    let ir_class = source.ir_class_handle(decl);
    let qid = &validated.qualified_id;

    let abstract_properties = validated
        .abstract_properties
        .iter()
        .chain(validated.inherited_properties.iter())
        .map(|p| transform_property(adapter, ir_class, qid, p))
        .collect::<Result<Vec<_>, _>>()?;

    let open_properties = validated
        .open_properties
        .iter()
        .map(|p| transform_property(adapter, ir_class, qid, p))
        .collect::<Result<Vec<_>, _>>()?;

    let abstract_methods = validated
        .abstract_methods
        .iter()
        .chain(validated.inherited_functions.iter())
        .map(|f| transform_function(adapter, ir_class, qid, f))
        .collect::<Result<Vec<_>, _>>()?;

    let open_methods = validated
        .open_methods
        .iter()
        .map(|f| transform_function(adapter, ir_class, qid, f))
        .collect::<Result<Vec<_>, _>>()?;

    let type_params = validated
        .type_params
        .iter()
        .map(|tp| format_type_param(&tp.name, &tp.bounds))
        .collect();

    Ok(ClassGenerationModel::new(
        validated.simple_name.clone(),
        validated.package_name.clone(),
        type_params,
        abstract_properties,
        open_properties,
        abstract_methods,
        open_methods,
        ir_class,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use fakt_fixtures::{FixtureFunction, FixtureProperty, FixtureSource};

    #[test]
    fn transforms_interface_into_generation_model() {
        let mut fx = FixtureSource::new();
        let decl = fx.declare_interface("com.example.UserRepository");
        fx.add_property(decl, FixtureProperty::new("cacheSize", "kotlin.Int"));
        fx.add_function(
            decl,
            FixtureFunction::new("findById", "com.example.User?")
                .param(fakt_fixtures::FixtureParam::new("id", "kotlin.String")),
        );
        let validated = fakt_frontend::extract_interface(&fx, decl);

        let model = transform_interface(&fx, &fx, decl, &validated).unwrap();
        assert_eq!(model.simple_name, "UserRepository");
        assert_eq!(model.properties.len(), 1);
        assert_eq!(model.functions.len(), 1);
        assert!(!model.pattern_is_computed());

        let pattern = model.pattern(|| classify(&fx, model.source_handle, &model.functions));
        assert!(pattern.is_none());
        assert!(model.pattern_is_computed());
    }

    #[test]
    fn transforms_class_preserving_abstract_open_partition() {
        let mut fx = FixtureSource::new();
        let decl = fx.declare_class("com.example.BaseService", true);
        fx.add_property(decl, FixtureProperty::new("id", "kotlin.String"));
        fx.add_property(decl, FixtureProperty::new("name", "kotlin.String").open());
        let validated = fakt_frontend::extract_class(&fx, decl);

        let model = transform_class(&fx, &fx, decl, &validated).unwrap();
        assert_eq!(model.abstract_properties.len(), 1);
        assert_eq!(model.open_properties.len(), 1);
        assert_eq!(model.all_properties().count(), 2);
    }
}
