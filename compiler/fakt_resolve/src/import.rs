//! Import Resolver (spec §4.5): collects the fully-qualified names a
//! generated file needs to import, by walking every resolved type
//! reachable from a generation model's members.

use rustc_hash::FxHashSet;

use fakt_ir::{IrFunctionMeta, IrPropertyMeta, ResolvedType};

/// Subpackages of the prelude root that never require an explicit
/// import, alongside the root package itself.
const PRELUDE_SUBPACKAGES: &[&str] = &["collections", "ranges", "sequences", "text", "io", "comparisons"];
const PRELUDE_ROOT: &str = "kotlin";

fn is_prelude(qualified_name: &str) -> bool {
    let Some(rest) = qualified_name.strip_prefix(PRELUDE_ROOT) else {
        return false;
    };
    let Some(sub) = rest.strip_prefix('.') else {
        // Bare `kotlin` (no further segments) is the root package itself.
        return rest.is_empty();
    };
    let first_segment = sub.split('.').next().unwrap_or(sub);
    PRELUDE_SUBPACKAGES.contains(&first_segment)
}

fn package_of(qualified_name: &str) -> &str {
    qualified_name.rfind('.').map_or("", |idx| &qualified_name[..idx])
}

fn walk(ty: &ResolvedType, target_package: &str, out: &mut FxHashSet<String>) {
    match ty {
        ResolvedType::Unit
        | ResolvedType::StringType
        | ResolvedType::Boolean
        | ResolvedType::Char
        | ResolvedType::Int
        | ResolvedType::Long
        | ResolvedType::Short
        | ResolvedType::Byte
        | ResolvedType::Float
        | ResolvedType::Double
        | ResolvedType::PrimitiveArray(_)
        | ResolvedType::TypeParam(_) => {}
        ResolvedType::Nullable(inner)
        | ResolvedType::List(inner)
        | ResolvedType::MutableList(inner)
        | ResolvedType::Set(inner)
        | ResolvedType::MutableSet(inner)
        | ResolvedType::Array(inner)
        | ResolvedType::Sequence(inner)
        | ResolvedType::Result(inner) => walk(inner, target_package, out),
        ResolvedType::Map(k, v) | ResolvedType::MutableMap(k, v) => {
            walk(k, target_package, out);
            walk(v, target_package, out);
        }
        ResolvedType::Named {
            qualified_name,
            type_arguments,
        } => {
            if !is_prelude(qualified_name) && package_of(qualified_name) != target_package {
                out.insert(qualified_name.clone());
            }
            for arg in type_arguments {
                walk(arg, target_package, out);
            }
        }
    }
}

/// Collects every fully-qualified name reachable from `properties` and
/// `functions` that needs an explicit import in `target_package`, in
/// stable sorted order.
pub fn resolve_imports(
    target_package: &str,
    properties: &[IrPropertyMeta],
    functions: &[IrFunctionMeta],
) -> Vec<String> {
    let mut out = FxHashSet::default();
    for prop in properties {
        walk(&prop.ty, target_package, &mut out);
    }
    for func in functions {
        walk(&func.return_type, target_package, &mut out);
        if let Some(receiver) = &func.extension_receiver_type {
            walk(receiver, target_package, &mut out);
        }
        for param in &func.params {
            walk(&param.ty, target_package, &mut out);
        }
    }
    let mut sorted: Vec<String> = out.into_iter().collect();
    sorted.sort();
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;
    use fakt_ir::{IrFunctionHandle, IrParamMeta, IrPropertyHandle};

    fn named(qualified_name: &str) -> ResolvedType {
        ResolvedType::Named {
            qualified_name: qualified_name.to_owned(),
            type_arguments: vec![],
        }
    }

    #[test]
    fn excludes_prelude_and_target_package() {
        let properties = vec![IrPropertyMeta {
            name: "id".into(),
            ty: ResolvedType::StringType,
            is_mutable: false,
            is_nullable: false,
            ir_node: IrPropertyHandle(0),
        }];
        let functions = vec![IrFunctionMeta {
            name: "save".into(),
            params: vec![IrParamMeta {
                name: "user".into(),
                ty: named("com.example.User"),
                has_default: false,
                default_expr: None,
                is_vararg: false,
            }],
            return_type: named("com.example.Result"),
            is_suspend: false,
            is_inline: false,
            is_operator: false,
            extension_receiver_type: None,
            type_params: vec![],
            ir_node: IrFunctionHandle(0),
        }];
        let imports = resolve_imports("com.example", &properties, &functions);
        assert_eq!(imports, vec!["com.example.User".to_owned()]);
    }

    #[test]
    fn collects_nested_generic_arguments() {
        let functions = vec![IrFunctionMeta {
            name: "findAll".into(),
            params: vec![],
            return_type: ResolvedType::List(Box::new(named("com.other.Widget"))),
            is_suspend: false,
            is_inline: false,
            is_operator: false,
            extension_receiver_type: None,
            type_params: vec![],
            ir_node: IrFunctionHandle(0),
        }];
        let imports = resolve_imports("com.example", &[], &functions);
        assert_eq!(imports, vec!["com.other.Widget".to_owned()]);
    }

    #[test]
    fn excludes_kotlin_collections_subpackage() {
        let properties = vec![IrPropertyMeta {
            name: "items".into(),
            ty: named("kotlin.collections.ArrayDeque"),
            is_mutable: false,
            is_nullable: false,
            ir_node: IrPropertyHandle(0),
        }];
        let imports = resolve_imports("com.example", &properties, &[]);
        assert!(imports.is_empty());
    }

    #[test]
    fn result_is_sorted() {
        let properties = vec![
            IrPropertyMeta {
                name: "b".into(),
                ty: named("com.example.Zeta"),
                is_mutable: false,
                is_nullable: false,
                ir_node: IrPropertyHandle(0),
            },
            IrPropertyMeta {
                name: "a".into(),
                ty: named("com.example.Alpha"),
                is_mutable: false,
                is_nullable: false,
                ir_node: IrPropertyHandle(1),
            },
        ];
        let imports = resolve_imports("other.pkg", &properties, &[]);
        assert_eq!(imports, vec!["com.example.Alpha".to_owned(), "com.example.Zeta".to_owned()]);
    }
}
