//! Configuration DSL Emitter (spec §4.6.3).

use fakt_ir::IrFunctionMeta;

use crate::emitter::StringEmitter;
use crate::function_shape::{function_type, TypeRenderer};
use crate::naming::{setter_slot, SlotNames};
use crate::target::EmitTarget;

/// A DSL forwarding method is named after the member itself (`getUser`,
/// `now`, `setName`), not after the implementation class's internal
/// `configure…` method it delegates to (spec §4.6.3, S1/S2/S6).
fn emit_forwarding_method(out: &mut StringEmitter, slot: &str, field_type: &str) {
    let names = SlotNames::for_slot(slot);
    out.emit_indent(1);
    out.emit_line(&format!("fun {slot}(behavior: {field_type}) {{"));
    out.emit_indent(2);
    out.emit_line(&format!("fake.{}(behavior)", names.configure));
    out.emit_indent(1);
    out.emit_line("}");
    out.emit_newline();
}

fn emit_function_forwarder(out: &mut StringEmitter, func: &IrFunctionMeta, render_ty: &TypeRenderer<'_>) {
    let field_type = function_type(&func.params, &func.return_type, func.is_suspend, render_ty);
    emit_forwarding_method(out, &func.name, &field_type);
}

fn emit_property_forwarder(out: &mut StringEmitter, prop: &fakt_ir::IrPropertyMeta, render_ty: &TypeRenderer<'_>) {
    let ty = render_ty(&prop.ty);
    emit_forwarding_method(out, &prop.name, &format!("() -> {ty}"));
    if prop.is_mutable {
        let setter_slot_name = setter_slot(&prop.name);
        emit_forwarding_method(out, &setter_slot_name, &format!("({ty}) -> Unit"));
    }
}

/// Emits the `Fake<Name>Config` class body (spec §4.6.3): one
/// bare-named forwarding method per member, delegating to the
/// implementation class's internal `configure…` method. Field types
/// match the implementation class emitter's exactly (vararg unwrapping,
/// suspend, and class-level type-parameter erasure all compose
/// identically).
pub fn emit_configuration_dsl(target: &EmitTarget<'_>) -> String {
    let mut out = StringEmitter::new();
    let render_ty = |ty: &fakt_ir::ResolvedType| target.render_member_type(ty);

    out.emit_line(&format!(
        "class Fake{}Config(private val fake: Fake{}Impl) {{",
        target.simple_name, target.simple_name
    ));

    for prop in &target.properties {
        emit_property_forwarder(&mut out, prop, &render_ty);
    }
    for func in &target.functions {
        emit_function_forwarder(&mut out, func, &render_ty);
    }

    out.emit_line("}");
    out.output()
}

#[cfg(test)]
mod tests {
    use super::*;
    use fakt_ir::{GenericPattern, IrClassHandle, IrFunctionHandle, IrParamMeta, IrPropertyMeta, ResolvedType};

    #[test]
    fn emits_header_and_closing_brace() {
        let pattern = GenericPattern::None;
        let model = fakt_ir::InterfaceGenerationModel::new("Clock".into(), "com.example".into(), vec![], vec![], vec![], IrClassHandle(0));
        let target = EmitTarget::from_interface(&model, &pattern);
        let src = emit_configuration_dsl(&target);
        assert!(src.starts_with("class FakeClockConfig(private val fake: FakeClockImpl) {\n"));
        assert!(src.trim_end().ends_with('}'));
    }

    #[test]
    fn function_member_forwards_to_configure() {
        let pattern = GenericPattern::None;
        let model = fakt_ir::InterfaceGenerationModel::new(
            "Repository".into(),
            "com.example".into(),
            vec![],
            vec![],
            vec![IrFunctionMeta {
                name: "find".into(),
                params: vec![IrParamMeta {
                    name: "id".into(),
                    ty: ResolvedType::StringType,
                    has_default: false,
                    default_expr: None,
                    is_vararg: false,
                }],
                return_type: ResolvedType::StringType,
                is_suspend: false,
                is_inline: false,
                is_operator: false,
                extension_receiver_type: None,
                type_params: vec![],
                ir_node: IrFunctionHandle(0),
            }],
            IrClassHandle(0),
        );
        let target = EmitTarget::from_interface(&model, &pattern);
        let src = emit_configuration_dsl(&target);
        assert!(src.contains("fun find(behavior: (String) -> String) {"));
        assert!(src.contains("fake.configureFind(behavior)"));
    }

    #[test]
    fn mutable_property_forwards_both_getter_and_setter() {
        let pattern = GenericPattern::None;
        let model = fakt_ir::InterfaceGenerationModel::new(
            "Store".into(),
            "com.example".into(),
            vec![],
            vec![IrPropertyMeta {
                name: "name".into(),
                ty: ResolvedType::StringType,
                is_mutable: true,
                is_nullable: false,
                ir_node: fakt_ir::IrPropertyHandle(0),
            }],
            vec![],
            IrClassHandle(0),
        );
        let target = EmitTarget::from_interface(&model, &pattern);
        let src = emit_configuration_dsl(&target);
        assert!(src.contains("fun name(behavior: () -> String) {"));
        assert!(src.contains("fun setName(behavior: (String) -> Unit) {"));
        assert!(src.contains("fake.configureSetName(behavior)"));
    }
}
