//! Structural signature computation (spec §4.7).
//!
//! A signature is derivable from frontend descriptors alone, before the
//! Transformer ever runs — that is what lets the orchestrator consult
//! the cache before paying for transform and emission.

/// Current signature grammar version. Bumping this invalidates every
/// existing cache file; the cache file name embeds it (spec §4.7).
pub const SIGNATURE_VERSION: u32 = 1;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum DeclKind {
    Interface,
    Class,
}

impl DeclKind {
    fn as_str(self) -> &'static str {
        match self {
            DeclKind::Interface => "interface",
            DeclKind::Class => "class",
        }
    }
}

/// Computes a declaration's structural signature:
/// `"v<N>:<kind>:<fqn>|tp:<count>|p:<count>|f:<count>"`.
pub fn compute_signature(
    kind: DeclKind,
    qualified_id: &str,
    type_param_count: usize,
    property_count: usize,
    function_count: usize,
) -> String {
    format!(
        "v{SIGNATURE_VERSION}:{}:{qualified_id}|tp:{type_param_count}|p:{property_count}|f:{function_count}",
        kind.as_str()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_per_grammar() {
        let sig = compute_signature(DeclKind::Interface, "com.example.Repo", 1, 2, 3);
        assert_eq!(sig, "v1:interface:com.example.Repo|tp:1|p:2|f:3");
    }

    #[test]
    fn distinguishes_interface_and_class() {
        let iface = compute_signature(DeclKind::Interface, "com.example.X", 0, 0, 0);
        let class = compute_signature(DeclKind::Class, "com.example.X", 0, 0, 0);
        assert_ne!(iface, class);
    }
}
