//! Generic-pattern classification (spec §4.3): decides how a declaration
//! uses type parameters from already-transformed IR members, purely by
//! inspecting what the adapter and the already-built function list
//! expose. Never caches its own result — the caller is expected to wrap
//! this behind a generation model's memoized `pattern()` accessor so the
//! classification runs at most once per declaration (spec §4.2 step 5).

use fakt_ir::{Constraint, GenericMethod, GenericPattern, IrClassHandle, IrClassLookup, IrFunctionMeta, IrTypeParamInfo};

fn to_constraints(type_params: &[IrTypeParamInfo]) -> Vec<Constraint> {
    type_params
        .iter()
        .map(|tp| Constraint {
            param_name: tp.name.clone(),
            bound_text: tp.bound_text.clone(),
            bound_type: tp.bound_type.clone(),
        })
        .collect()
}

fn to_generic_method(function: &IrFunctionMeta, type_params: &[IrTypeParamInfo]) -> GenericMethod {
    GenericMethod {
        name: function.name.clone(),
        type_params: function.type_params.clone(),
        constraints: to_constraints(type_params),
        params: function.params.clone(),
        return_type: function.return_type.clone(),
        is_suspend: function.is_suspend,
    }
}

/// Classifies a declaration's generic pattern (spec §4.3) from its IR
/// class handle and already-transformed function list.
pub fn classify<L: IrClassLookup + ?Sized>(
    adapter: &L,
    ir_class: IrClassHandle,
    functions: &[IrFunctionMeta],
) -> GenericPattern {
    let class_type_params = adapter.class_type_params(ir_class);
    let has_class_params = !class_type_params.is_empty();

    let generic_methods: Vec<GenericMethod> = functions
        .iter()
        .filter(|f| f.is_generic())
        .map(|f| {
            let method_type_params = adapter.function_type_params(f.ir_node);
            to_generic_method(f, &method_type_params)
        })
        .collect();
    let has_generic_methods = !generic_methods.is_empty();

    match (has_class_params, has_generic_methods) {
        (false, false) => GenericPattern::None,
        (true, false) => GenericPattern::ClassLevel {
            type_params: class_type_params.iter().map(|tp| tp.name.clone()).collect(),
            constraints: to_constraints(&class_type_params),
        },
        (false, true) => GenericPattern::MethodLevel { generic_methods },
        (true, true) => GenericPattern::Mixed {
            class_params: class_type_params.iter().map(|tp| tp.name.clone()).collect(),
            class_constraints: to_constraints(&class_type_params),
            generic_methods,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fakt_fixtures::{FixtureFunction, FixtureSource};

    #[test]
    fn no_type_params_classifies_as_none() {
        let mut fx = FixtureSource::new();
        let decl = fx.declare_interface("com.example.Plain");
        let ir_class = fakt_ir::DeclarationSource::ir_class_handle(&fx, decl);
        let pattern = classify(&fx, ir_class, &[]);
        assert!(pattern.is_none());
    }

    #[test]
    fn class_level_type_param_classifies_as_class_level() {
        let mut fx = FixtureSource::new();
        let decl = fx.declare_interface("com.example.Repository");
        fx.add_type_param(decl, "T", vec!["kotlin.Any".to_owned()]);
        let ir_class = fakt_ir::DeclarationSource::ir_class_handle(&fx, decl);
        let pattern = classify(&fx, ir_class, &[]);
        assert!(matches!(pattern, GenericPattern::ClassLevel { .. }));
        assert!(pattern.erases_class_type_params());
        assert_eq!(pattern.class_type_params(), &["T".to_owned()]);
    }

    #[test]
    fn generic_function_without_class_params_classifies_as_method_level() {
        let mut fx = FixtureSource::new();
        let decl = fx.declare_interface("com.example.Mapper");
        fx.add_function(
            decl,
            FixtureFunction::new("map", "R").type_param("R", vec!["kotlin.Any".to_owned()]),
        );
        let ir_class = fakt_ir::DeclarationSource::ir_class_handle(&fx, decl);
        let function = crate::lookup::transform_function(
            &fx,
            ir_class,
            "com.example.Mapper",
            &fakt_ir::FunctionInfo {
                name: "map".into(),
                params: vec![],
                return_type: "R".into(),
                is_suspend: false,
                is_inline: false,
                type_params: vec![fakt_ir::TypeParamInfo {
                    name: "R".into(),
                    bounds: vec!["kotlin.Any".into()],
                }],
                modifier: fakt_ir::MemberModifier::Abstract,
            },
        )
        .expect("function is declared on the fixture");
        let pattern = classify(&fx, ir_class, std::slice::from_ref(&function));
        match pattern {
            GenericPattern::MethodLevel { generic_methods } => {
                assert_eq!(generic_methods.len(), 1);
                assert_eq!(generic_methods[0].name, "map");
            }
            other => panic!("expected MethodLevel, got {other:?}"),
        }
    }

    #[test]
    fn class_and_method_type_params_classify_as_mixed() {
        let mut fx = FixtureSource::new();
        let decl = fx.declare_interface("com.example.Store");
        fx.add_type_param(decl, "T", vec!["kotlin.Any".to_owned()]);
        fx.add_function(
            decl,
            FixtureFunction::new("convert", "R").type_param("R", vec!["kotlin.Any".to_owned()]),
        );
        let ir_class = fakt_ir::DeclarationSource::ir_class_handle(&fx, decl);
        let function = crate::lookup::transform_function(
            &fx,
            ir_class,
            "com.example.Store",
            &fakt_ir::FunctionInfo {
                name: "convert".into(),
                params: vec![],
                return_type: "R".into(),
                is_suspend: false,
                is_inline: false,
                type_params: vec![fakt_ir::TypeParamInfo {
                    name: "R".into(),
                    bounds: vec!["kotlin.Any".into()],
                }],
                modifier: fakt_ir::MemberModifier::Abstract,
            },
        )
        .expect("function is declared on the fixture");
        let pattern = classify(&fx, ir_class, std::slice::from_ref(&function));
        assert!(matches!(pattern, GenericPattern::Mixed { .. }));
        assert!(pattern.erases_class_type_params());
    }
}
