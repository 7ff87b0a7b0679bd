//! Type Resolver & Import Resolver (spec §4.4, §4.5): pure functions
//! from already-resolved IR data to target source text. No adapter
//! dependency — everything here operates on [`fakt_ir::ResolvedType`]
//! and the generation-model member lists directly.

mod import;
mod render;

pub use import::resolve_imports;
pub use render::{default_value, is_primitive, render, render_erasing};
