//! Implementation Class Emitter (spec §4.6.1).

use fakt_ir::IrFunctionMeta;

use crate::emitter::StringEmitter;
use crate::function_shape::{default_lambda, forward_args, function_type, override_param_list};
use crate::naming::{setter_slot, SlotNames};
use crate::target::EmitTarget;

fn emit_call_count_handle(out: &mut StringEmitter, names: &SlotNames) {
    out.emit_indent(1);
    out.emit_line(&format!(
        "private val {} = androidx.compose.runtime.mutableStateOf(0)",
        names.call_count_state
    ));
    out.emit_indent(1);
    out.emit_line(&format!("val {}: Int get() = {}.value", names.call_count, names.call_count_state));
}

fn emit_function_member(out: &mut StringEmitter, func: &IrFunctionMeta, target: &EmitTarget<'_>) {
    let names = SlotNames::for_slot(&func.name);
    let render_ty = |ty: &fakt_ir::ResolvedType| target.render_member_type(ty);
    let field_type = function_type(&func.params, &func.return_type, func.is_suspend, &render_ty);
    let default_body = fakt_resolve::default_value(&func.return_type);
    let default = default_lambda(&func.params, &default_body);

    out.emit_indent(1);
    out.emit_line(&format!("private var {}: {field_type} = {default}", names.behavior_field));
    emit_call_count_handle(out, &names);

    let suspend_kw = if func.is_suspend { "suspend " } else { "" };
    let params = override_param_list(&func.params, &render_ty);
    let return_ty = render_ty(&func.return_type);
    let method_generics = if func.is_generic() {
        format!("<{}> ", func.type_params.join(", "))
    } else {
        String::new()
    };
    out.emit_indent(1);
    out.emit_line(&format!(
        "override {suspend_kw}fun {method_generics}{}({params}): {return_ty} {{",
        func.name
    ));
    out.emit_indent(2);
    out.emit_line(&format!("{}.value += 1", names.call_count_state));
    out.emit_indent(2);
    out.emit_line(&format!("return {}({})", names.behavior_field, forward_args(&func.params)));
    out.emit_indent(1);
    out.emit_line("}");

    out.emit_indent(1);
    out.emit_line(&format!("internal fun {}(behavior: {field_type}) {{", names.configure));
    out.emit_indent(2);
    out.emit_line(&format!("{} = behavior", names.behavior_field));
    out.emit_indent(1);
    out.emit_line("}");
    out.emit_newline();
}

fn emit_property_member(out: &mut StringEmitter, prop: &fakt_ir::IrPropertyMeta, target: &EmitTarget<'_>) {
    let getter_names = SlotNames::for_slot(&prop.name);
    let ty = target.render_member_type(&prop.ty);
    let default_body = fakt_resolve::default_value(&prop.ty);

    out.emit_indent(1);
    out.emit_line(&format!(
        "private var {}: () -> {ty} = {{ {default_body} }}",
        getter_names.behavior_field
    ));
    emit_call_count_handle(out, &getter_names);

    if prop.is_mutable {
        let setter_slot_name = setter_slot(&prop.name);
        let setter_names = SlotNames::for_slot(&setter_slot_name);
        out.emit_indent(1);
        out.emit_line(&format!(
            "private var {}: ({ty}) -> Unit = {{ _a0 -> }}",
            setter_names.behavior_field
        ));
        emit_call_count_handle(out, &setter_names);

        out.emit_indent(1);
        out.emit_line(&format!("override var {}: {ty}", prop.name));
        out.emit_indent(2);
        out.emit_line("get() {");
        out.emit_indent(3);
        out.emit_line(&format!("{}.value += 1", getter_names.call_count_state));
        out.emit_indent(3);
        out.emit_line(&format!("return {}()", getter_names.behavior_field));
        out.emit_indent(2);
        out.emit_line("}");
        out.emit_indent(2);
        out.emit_line("set(value) {");
        out.emit_indent(3);
        out.emit_line(&format!("{}.value += 1", setter_names.call_count_state));
        out.emit_indent(3);
        out.emit_line(&format!("{}(value)", setter_names.behavior_field));
        out.emit_indent(2);
        out.emit_line("}");

        out.emit_indent(1);
        out.emit_line(&format!("internal fun {}(behavior: () -> {ty}) {{", getter_names.configure));
        out.emit_indent(2);
        out.emit_line(&format!("{} = behavior", getter_names.behavior_field));
        out.emit_indent(1);
        out.emit_line("}");
        out.emit_indent(1);
        out.emit_line(&format!("internal fun {}(behavior: ({ty}) -> Unit) {{", setter_names.configure));
        out.emit_indent(2);
        out.emit_line(&format!("{} = behavior", setter_names.behavior_field));
        out.emit_indent(1);
        out.emit_line("}");
        out.emit_newline();
    } else {
        out.emit_indent(1);
        out.emit_line(&format!("override val {}: {ty}", prop.name));
        out.emit_indent(2);
        out.emit_line("get() {");
        out.emit_indent(3);
        out.emit_line(&format!("{}.value += 1", getter_names.call_count_state));
        out.emit_indent(3);
        out.emit_line(&format!("return {}()", getter_names.behavior_field));
        out.emit_indent(2);
        out.emit_line("}");

        out.emit_indent(1);
        out.emit_line(&format!("internal fun {}(behavior: () -> {ty}) {{", getter_names.configure));
        out.emit_indent(2);
        out.emit_line(&format!("{} = behavior", getter_names.behavior_field));
        out.emit_indent(1);
        out.emit_line("}");
        out.emit_newline();
    }
}

/// Emits the `Fake<Name>Impl` class body (spec §4.6.1).
pub fn emit_implementation_class(target: &EmitTarget<'_>) -> String {
    let mut out = StringEmitter::new();
    let header_generics = target.header_generics();
    let supertype_args = target.supertype_type_arguments();

    out.emit_line(&format!(
        "internal class Fake{}Impl{header_generics} : {}{supertype_args} {{",
        target.simple_name, target.simple_name
    ));

    for prop in &target.properties {
        emit_property_member(&mut out, prop, target);
    }
    for func in &target.functions {
        emit_function_member(&mut out, func, target);
    }

    out.emit_line("}");
    out.output()
}
