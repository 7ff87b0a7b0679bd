//! Bound-text sanitization shared by extraction (§4.1) and formatting (§4.2).
//!
//! Applied to every rendered type-parameter bound: path separators become
//! dots, and the well-known standard-library prefix is stripped — along
//! with a prelude subpackage immediately under it, if any — so that
//! `stdlib.collections.List<T>` renders as `List<T>`. Other packages are
//! left intact.

/// The root package whose prefix is elided from rendered bound text.
pub const STDLIB_PREFIX: &str = "stdlib.";

/// Prelude subpackages that are elided along with the root, matching the
/// set `fakt_resolve::import_resolver` already excludes from imports.
const STDLIB_SUBPACKAGES: &[&str] = &["collections", "ranges", "sequences", "text", "io", "comparisons"];

/// Sanitize a single rendered type (or bound) for display.
///
/// `/` is replaced with `.` first (host resolvers sometimes render
/// qualified names with path separators), then the stdlib prefix is
/// stripped if present, along with one well-known prelude subpackage
/// segment immediately following it.
pub fn sanitize_type_text(raw: &str) -> String {
    let dotted = raw.replace('/', ".");
    let Some(rest) = dotted.strip_prefix(STDLIB_PREFIX) else {
        return dotted;
    };
    for sub in STDLIB_SUBPACKAGES {
        let prefix = format!("{sub}.");
        if let Some(stripped) = rest.strip_prefix(&prefix) {
            return stripped.to_owned();
        }
    }
    rest.to_owned()
}

/// Format a type parameter as `"T"` when it has no bounds, or
/// `"T : B1, B2, ..."` when it does, sanitizing each bound.
pub fn format_type_param(name: &str, bounds: &[String]) -> String {
    if bounds.is_empty() {
        return name.to_owned();
    }
    let rendered: Vec<String> = bounds.iter().map(|b| sanitize_type_text(b)).collect();
    format!("{name} : {}", rendered.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_stdlib_prefix() {
        assert_eq!(sanitize_type_text("stdlib.collections.List<T>"), "List<T>");
    }

    #[test]
    fn replaces_path_separators() {
        assert_eq!(sanitize_type_text("com/example/Foo"), "com.example.Foo");
    }

    #[test]
    fn leaves_other_packages_intact() {
        assert_eq!(sanitize_type_text("com.example.Bar"), "com.example.Bar");
    }

    #[test]
    fn formats_bound_free_param() {
        assert_eq!(format_type_param("T", &[]), "T");
    }

    #[test]
    fn formats_bounded_param() {
        let bounds = vec!["stdlib.Comparable<T>".to_owned(), "com.x.Y".to_owned()];
        assert_eq!(
            format_type_param("T", &bounds),
            "T : Comparable<T>, com.x.Y"
        );
    }
}
