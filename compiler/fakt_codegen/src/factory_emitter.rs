//! Factory Emitter (spec §4.6.2).

use crate::naming::capitalize_first;
use crate::target::EmitTarget;

fn bare_name(type_param: &str) -> &str {
    type_param.split(" : ").next().unwrap_or(type_param)
}

/// Emits `fun fake<Name>(configure: Fake<Name>Config.() -> Unit = {}): <Name> { ... }`
/// (spec §4.6.2). Generic in the class-level type parameters only under
/// `ClassLevel`/`Mixed`; `MethodLevel` and `None` produce a non-generic
/// factory.
pub fn emit_factory(target: &EmitTarget<'_>) -> String {
    let name = target.simple_name;
    let factory_name = format!("fake{}", capitalize_first(name));
    let is_generic = target.pattern.erases_class_type_params();

    let header_generics = if is_generic {
        format!("<{}> ", target.type_params.join(", "))
    } else {
        String::new()
    };
    let contract_type_args = if is_generic {
        let names: Vec<&str> = target.type_params.iter().map(|tp| bare_name(tp)).collect();
        format!("<{}>", names.join(", "))
    } else {
        String::new()
    };

    format!(
        "fun {header_generics}{factory_name}(configure: Fake{name}Config.() -> Unit = {{}}): {name}{contract_type_args} {{\n    val fake = Fake{name}Impl()\n    Fake{name}Config(fake).apply(configure)\n    return fake\n}}\n"
    )
}
