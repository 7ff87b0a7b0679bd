//! Source locations carried on frontend descriptors for diagnostic
//! attachment (spec §6.4). Deliberately minimal: the core never parses or
//! prints source text itself, it only carries enough to let a host
//! compiler point a squiggly line at the right place.

/// A location in the original source, as reported by the host resolver.
///
/// `None` fields mean the host resolver could not supply that detail;
/// diagnostics fall back to the compilation's generic location (§7.4)
/// when `file` itself is `None`.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Default)]
pub struct SourceLocation {
    pub file: Option<std::path::PathBuf>,
    pub line: Option<u32>,
    pub column: Option<u32>,
}

impl SourceLocation {
    pub fn new(file: impl Into<std::path::PathBuf>, line: u32, column: u32) -> Self {
        Self {
            file: Some(file.into()),
            line: Some(line),
            column: Some(column),
        }
    }

    /// The generic, file-less location used when the host resolver has no
    /// better answer (spec §7.4: "otherwise to the compilation's generic
    /// location").
    pub fn unknown() -> Self {
        Self::default()
    }
}
