//! Per-member frontend→IR lookup (spec §4.2 steps 1-4): pure lookup, no
//! validation, no discovery. A lookup miss or parameter-count mismatch is
//! an internal-invariant violation (spec §4.2, §7 kind 2), never a user
//! diagnostic.

use fakt_diagnostic::InternalError;
use fakt_ir::sanitize::format_type_param;
use fakt_ir::{
    FunctionInfo, IrClassHandle, IrClassLookup, IrFunctionMeta, IrParamMeta, IrPropertyMeta,
    PropertyInfo,
};

/// Transforms one frontend property into its IR counterpart (spec §4.2
/// step 1).
pub fn transform_property<L: IrClassLookup + ?Sized>(
    adapter: &L,
    class: IrClassHandle,
    declaration_name: &str,
    property: &PropertyInfo,
) -> Result<IrPropertyMeta, InternalError> {
    let handle = adapter
        .direct_property(class, &property.name)
        .ok_or_else(|| InternalError::MissingIrProperty {
            declaration: declaration_name.to_owned(),
            member: property.name.clone(),
        })?;

    let ty = adapter
        .property_getter_return_type(handle)
        .or_else(|| adapter.property_backing_field_type(handle))
        .ok_or_else(|| InternalError::MissingIrProperty {
            declaration: declaration_name.to_owned(),
            member: property.name.clone(),
        })?;

    Ok(IrPropertyMeta {
        name: property.name.clone(),
        ty,
        is_mutable: property.is_mutable,
        is_nullable: property.is_nullable,
        ir_node: handle,
    })
}

/// Transforms one frontend function into its IR counterpart (spec §4.2
/// steps 2-4).
pub fn transform_function<L: IrClassLookup + ?Sized>(
    adapter: &L,
    class: IrClassHandle,
    declaration_name: &str,
    function: &FunctionInfo,
) -> Result<IrFunctionMeta, InternalError> {
    let handle = adapter
        .direct_function(class, &function.name)
        .ok_or_else(|| InternalError::MissingIrFunction {
            declaration: declaration_name.to_owned(),
            member: function.name.clone(),
        })?;

    let regular_params = adapter.function_regular_params(handle);
    if regular_params.len() != function.params.len() {
        return Err(InternalError::ParamCountMismatch {
            declaration: declaration_name.to_owned(),
            function: function.name.clone(),
            expected: function.params.len(),
            actual: regular_params.len(),
        });
    }

    let params = function
        .params
        .iter()
        .zip(regular_params.into_iter())
        .map(|(frontend_param, ir_param)| IrParamMeta {
            name: frontend_param.name.clone(),
            ty: adapter.param_type(ir_param),
            has_default: frontend_param.has_default,
            default_expr: frontend_param.default_expr.clone(),
            is_vararg: frontend_param.is_vararg,
        })
        .collect();

    let type_params = function
        .type_params
        .iter()
        .map(|tp| format_type_param(&tp.name, &tp.bounds))
        .collect();

    Ok(IrFunctionMeta {
        name: function.name.clone(),
        params,
        return_type: adapter.function_return_type(handle),
        is_suspend: function.is_suspend,
        is_inline: function.is_inline,
        is_operator: adapter.is_operator(handle),
        extension_receiver_type: adapter.extension_receiver_type(handle),
        type_params,
        ir_node: handle,
    })
}
