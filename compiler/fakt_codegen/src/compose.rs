//! File Composition (spec §4.6.4): package declaration, sorted imports,
//! then the three emitted sections, each separated by a blank line.

use crate::class_emitter::emit_implementation_class;
use crate::dsl_emitter::emit_configuration_dsl;
use crate::factory_emitter::emit_factory;
use crate::target::EmitTarget;

/// Composes the full `Fake<Name>Impl.kt` file body for one target.
/// `imports` is the already-sorted list from [`fakt_resolve::resolve_imports`].
pub fn compose_file(target: &EmitTarget<'_>, imports: &[String]) -> String {
    let mut sections = vec![format!("package {}", target.package_name)];

    if !imports.is_empty() {
        let import_lines = imports.iter().map(|i| format!("import {i}")).collect::<Vec<_>>().join("\n");
        sections.push(import_lines);
    }

    sections.push(emit_implementation_class(target).trim_end().to_owned());
    sections.push(emit_factory(target).trim_end().to_owned());
    sections.push(emit_configuration_dsl(target).trim_end().to_owned());

    sections.join("\n\n") + "\n"
}
