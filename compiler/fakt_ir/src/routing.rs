//! The Routing Record (spec §3): a build-tool-supplied description of the
//! current compilation, decoded from the `sourceSetContext` compiler
//! option (spec §6.2).

/// The kind of compilation target the routing record describes.
///
/// The core never branches on this beyond passing it through to
/// telemetry; it is opaque text supplied by the build tool.
pub type PlatformKind = String;

/// One named source set with its parent chain (most-immediate parent
/// first), e.g. `jvmTest` might have parents `["commonTest"]`.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct SourceSetRef {
    pub name: String,
    pub parents: Vec<String>,
}

impl SourceSetRef {
    pub fn new(name: impl Into<String>, parents: Vec<String>) -> Self {
        Self {
            name: name.into(),
            parents,
        }
    }
}

/// Describes the current compilation: which target, which platform,
/// whether this is a test compilation, which source set is primary, the
/// full set of source sets in scope, and where generated files must land.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RoutingRecord {
    pub compilation_name: String,
    pub target_name: String,
    pub platform_kind: PlatformKind,
    pub is_test: bool,
    pub default_source_set: SourceSetRef,
    pub source_sets: Vec<SourceSetRef>,
    pub output_dir: std::path::PathBuf,
}

impl RoutingRecord {
    /// Whether `name` is one of the source sets in scope for this
    /// compilation (the default source set counts).
    pub fn has_source_set(&self, name: &str) -> bool {
        self.default_source_set.name == name || self.source_sets.iter().any(|s| s.name == name)
    }
}
