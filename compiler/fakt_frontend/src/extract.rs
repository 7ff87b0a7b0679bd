//! Extraction (spec §4.1): builds the frontend descriptor tree for a
//! declaration that has already passed [`crate::validate::validate_shape`].

use rustc_hash::FxHashSet;

use fakt_ir::sanitize::sanitize_type_text;
use fakt_ir::{
    DeclHandle, DeclarationSource, FunctionInfo, MemberModifier, PropertyInfo, TypeParamInfo,
    ValidatedClass, ValidatedInterface,
};

fn sanitized_type_params<S: DeclarationSource + ?Sized>(
    source: &S,
    decl: DeclHandle,
) -> Vec<TypeParamInfo> {
    source
        .type_params(decl)
        .into_iter()
        .map(|tp| TypeParamInfo {
            name: tp.name,
            bounds: tp.bounds.iter().map(|b| sanitize_type_text(b)).collect(),
        })
        .collect()
}

/// Transitive inherited-member walk (spec §4.1): visits every supertype
/// reachable from `decl`, collecting properties/functions not already
/// present in `seen_props`/`seen_funcs`. Dedup is by name, per spec §9's
/// resolution of the "by name vs by erased signature" open question —
/// applied uniformly to both properties and functions, and across the
/// whole inherited closure (not just one level), since that is the only
/// reading that gives a deterministic, order-independent result.
fn collect_inherited<S: DeclarationSource + ?Sized>(
    source: &S,
    decl: DeclHandle,
    mut seen_props: FxHashSet<String>,
    mut seen_funcs: FxHashSet<String>,
) -> (Vec<PropertyInfo>, Vec<FunctionInfo>) {
    let mut visited: FxHashSet<DeclHandle> = FxHashSet::default();
    let mut stack: Vec<DeclHandle> = source.supertypes(decl);
    let mut out_props = Vec::new();
    let mut out_funcs = Vec::new();

    while let Some(current) = stack.pop() {
        if !visited.insert(current) {
            continue;
        }
        for prop in source.direct_properties(current) {
            if seen_props.insert(prop.name.clone()) {
                out_props.push(prop);
            }
        }
        for func in source.direct_functions(current) {
            if seen_funcs.insert(func.name.clone()) {
                out_funcs.push(func);
            }
        }
        stack.extend(source.supertypes(current));
    }

    (out_props, out_funcs)
}

/// Extracts a [`ValidatedInterface`] from an already-validated interface
/// declaration.
pub fn extract_interface<S: DeclarationSource + ?Sized>(
    source: &S,
    decl: DeclHandle,
) -> ValidatedInterface {
    let properties = source.direct_properties(decl);
    let functions = source.direct_functions(decl);

    let seen_props: FxHashSet<String> = properties.iter().map(|p| p.name.clone()).collect();
    let seen_funcs: FxHashSet<String> = functions.iter().map(|f| f.name.clone()).collect();
    let (inherited_properties, inherited_functions) =
        collect_inherited(source, decl, seen_props, seen_funcs);

    ValidatedInterface {
        qualified_id: source.qualified_id(decl),
        simple_name: source.simple_name(decl),
        package_name: source.package_name(decl),
        type_params: sanitized_type_params(source, decl),
        properties,
        functions,
        inherited_properties,
        inherited_functions,
        source_location: source.source_location(decl),
    }
}

/// Extracts a [`ValidatedClass`] from an already-validated abstract-class
/// declaration, partitioning direct members by modifier.
pub fn extract_class<S: DeclarationSource + ?Sized>(
    source: &S,
    decl: DeclHandle,
) -> ValidatedClass {
    let direct_properties = source.direct_properties(decl);
    let direct_functions = source.direct_functions(decl);

    let mut abstract_properties = Vec::new();
    let mut open_properties = Vec::new();
    for prop in direct_properties {
        match prop.modifier {
            MemberModifier::Abstract => abstract_properties.push(prop),
            MemberModifier::Open => open_properties.push(prop),
        }
    }

    let mut abstract_methods = Vec::new();
    let mut open_methods = Vec::new();
    for func in direct_functions {
        match func.modifier {
            MemberModifier::Abstract => abstract_methods.push(func),
            MemberModifier::Open => open_methods.push(func),
        }
    }

    let seen_props: FxHashSet<String> = abstract_properties
        .iter()
        .chain(open_properties.iter())
        .map(|p| p.name.clone())
        .collect();
    let seen_funcs: FxHashSet<String> = abstract_methods
        .iter()
        .chain(open_methods.iter())
        .map(|f| f.name.clone())
        .collect();
    let (inherited_properties, inherited_functions) =
        collect_inherited(source, decl, seen_props, seen_funcs);

    ValidatedClass {
        qualified_id: source.qualified_id(decl),
        simple_name: source.simple_name(decl),
        package_name: source.package_name(decl),
        type_params: sanitized_type_params(source, decl),
        abstract_properties,
        open_properties,
        abstract_methods,
        open_methods,
        inherited_properties,
        inherited_functions,
        source_location: source.source_location(decl),
    }
}
