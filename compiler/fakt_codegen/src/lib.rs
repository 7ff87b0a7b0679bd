//! Emitters (spec §4.6): pure functions from a generation model and its
//! classified [`fakt_ir::GenericPattern`] to target source text. Nothing
//! here touches the host compiler or the filesystem; [`compose_file`] is
//! the single entry point the orchestrator calls per declaration.

mod class_emitter;
mod compose;
mod dsl_emitter;
mod emitter;
mod factory_emitter;
mod function_shape;
mod naming;
mod target;

pub use class_emitter::emit_implementation_class;
pub use compose::compose_file;
pub use dsl_emitter::emit_configuration_dsl;
pub use factory_emitter::emit_factory;
pub use target::EmitTarget;

#[cfg(test)]
mod tests {
    use super::*;
    use fakt_ir::{GenericPattern, IrClassHandle, InterfaceGenerationModel, IrFunctionHandle, IrFunctionMeta, IrParamMeta, ResolvedType};

    #[test]
    fn end_to_end_compose_matches_member_names_across_sections() {
        let pattern = GenericPattern::None;
        let model = InterfaceGenerationModel::new(
            "Greeter".into(),
            "com.example".into(),
            vec![],
            vec![],
            vec![IrFunctionMeta {
                name: "greet".into(),
                params: vec![IrParamMeta {
                    name: "who".into(),
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
        let src = compose_file(&target, &[]);

        assert!(src.contains("internal class FakeGreeterImpl : Greeter {"));
        assert!(src.contains("fun fakeGreeter(configure: FakeGreeterConfig.() -> Unit = {}): Greeter {"));
        assert!(src.contains("class FakeGreeterConfig(private val fake: FakeGreeterImpl) {"));
        assert!(src.contains("internal fun configureGreet(behavior: (String) -> String) {"));
        assert!(src.contains("fun greet(behavior: (String) -> String) {"));
    }
}
