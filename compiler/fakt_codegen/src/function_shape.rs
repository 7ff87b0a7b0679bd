//! Shared rendering for a member's function type, override parameter
//! list, and forwarding call — used by both the implementation class
//! emitter (§4.6.1) and the configuration DSL emitter (§4.6.3), which
//! must stay byte-identical for the same member.

use fakt_ir::{IrParamMeta, ResolvedType};

/// A type renderer that already knows which names (if any) to erase;
/// [`crate::target::EmitTarget::render_member_type`] is the production
/// implementation.
pub type TypeRenderer<'a> = dyn Fn(&ResolvedType) -> String + 'a;

/// The field type for a vararg parameter is its element type wrapped in
/// `Array<...>` (spec §4.6.1); everything else renders normally.
fn field_param_type(param: &IrParamMeta, render_ty: &TypeRenderer<'_>) -> String {
    let rendered = render_ty(&param.ty);
    if param.is_vararg {
        format!("Array<{rendered}>")
    } else {
        rendered
    }
}

/// The exact function type a behavior field (or `configure…` method
/// parameter) carries, e.g. `(String, Int) -> Unit` or
/// `suspend (String) -> User`.
pub fn function_type(
    params: &[IrParamMeta],
    return_type: &ResolvedType,
    is_suspend: bool,
    render_ty: &TypeRenderer<'_>,
) -> String {
    let param_types: Vec<String> = params.iter().map(|p| field_param_type(p, render_ty)).collect();
    let suspend_prefix = if is_suspend { "suspend " } else { "" };
    format!("{suspend_prefix}({}) -> {}", param_types.join(", "), render_ty(return_type))
}

/// A lambda literal whose body is `body_expr`, with one placeholder
/// parameter per entry in `params` (unused parameter names are
/// underscore-prefixed to avoid warnings in generated code).
pub fn default_lambda(params: &[IrParamMeta], body_expr: &str) -> String {
    if params.is_empty() {
        return format!("{{ {body_expr} }}");
    }
    let names: Vec<String> = (0..params.len()).map(|i| format!("_a{i}")).collect();
    format!("{{ {} -> {body_expr} }}", names.join(", "))
}

/// The declaration-site parameter list for an override, e.g.
/// `id: String, tags: String...` (vararg keeps its container type).
pub fn override_param_list(params: &[IrParamMeta], render_ty: &TypeRenderer<'_>) -> String {
    params
        .iter()
        .map(|p| {
            let rendered = render_ty(&p.ty);
            if p.is_vararg {
                format!("vararg {}: {}", p.name, rendered)
            } else {
                format!("{}: {}", p.name, rendered)
            }
        })
        .collect::<Vec<_>>()
        .join(", ")
}

/// The argument list an override forwards to its behavior field,
/// spreading vararg parameters with `*`.
pub fn forward_args(params: &[IrParamMeta]) -> String {
    params
        .iter()
        .map(|p| if p.is_vararg { format!("*{}", p.name) } else { p.name.clone() })
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use fakt_ir::ResolvedType;

    fn param(name: &str, ty: ResolvedType, vararg: bool) -> IrParamMeta {
        IrParamMeta {
            name: name.to_owned(),
            ty,
            has_default: false,
            default_expr: None,
            is_vararg: vararg,
        }
    }

    fn preserve_all(ty: &ResolvedType) -> String {
        fakt_resolve::render(ty, true)
    }

    #[test]
    fn vararg_field_type_wraps_element_in_array() {
        let params = vec![param("tags", ResolvedType::StringType, true)];
        let ty = function_type(&params, &ResolvedType::Unit, false, &preserve_all);
        assert_eq!(ty, "(Array<String>) -> Unit");
    }

    #[test]
    fn suspend_prefix_is_applied() {
        let ty = function_type(&[], &ResolvedType::Unit, true, &preserve_all);
        assert_eq!(ty, "suspend () -> Unit");
    }

    #[test]
    fn override_param_list_keeps_vararg_keyword() {
        let params = vec![param("tags", ResolvedType::StringType, true)];
        assert_eq!(override_param_list(&params, &preserve_all), "vararg tags: String");
    }

    #[test]
    fn forward_args_spreads_vararg() {
        let params = vec![
            param("id", ResolvedType::StringType, false),
            param("tags", ResolvedType::StringType, true),
        ];
        assert_eq!(forward_args(&params), "id, *tags");
    }

    #[test]
    fn default_lambda_uses_placeholder_params() {
        let params = vec![param("id", ResolvedType::StringType, false)];
        assert_eq!(default_lambda(&params, "0"), "{ _a0 -> 0 }");
        assert_eq!(default_lambda(&[], "0"), "{ 0 }");
    }
}
