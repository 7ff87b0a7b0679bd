//! Type Resolver (spec §4.4): pure functions from a [`ResolvedType`] to
//! target source syntax, primitiveness, and default-value text. Nothing
//! here consults the adapter or any declaration; every function is total
//! over `ResolvedType`.

use fakt_ir::{PrimitiveArrayKind, ResolvedType};

/// Renders a resolved type as target source syntax.
///
/// `preserve_type_params` controls how every bare [`ResolvedType::TypeParam`]
/// renders: `true` keeps it symbolic (`T`), `false` erases it to the type
/// system's top type (`Any`). Use this when every type-parameter
/// occurrence in `ty` gets the same treatment; when only a subset of
/// names (a class's own parameters, in a `Mixed` pattern) should erase
/// while the rest stay symbolic, use [`render_erasing`] instead.
pub fn render(ty: &ResolvedType, preserve_type_params: bool) -> String {
    render_with(ty, &|_| preserve_type_params)
}

/// Renders a resolved type, erasing only the [`ResolvedType::TypeParam`]
/// occurrences whose name is in `erase_names` to `Any`; every other
/// type-parameter name renders symbolically. Used by the implementation
/// class emitter (spec §4.6.1) for member signatures under a `Mixed`
/// pattern, where a function's own type parameters must stay symbolic
/// even as the class's are erased.
pub fn render_erasing(ty: &ResolvedType, erase_names: &[String]) -> String {
    render_with(ty, &|name| !erase_names.iter().any(|n| n == name))
}

fn render_with(ty: &ResolvedType, preserve: &dyn Fn(&str) -> bool) -> String {
    match ty {
        ResolvedType::Unit => "Unit".to_owned(),
        ResolvedType::StringType => "String".to_owned(),
        ResolvedType::Boolean => "Boolean".to_owned(),
        ResolvedType::Char => "Char".to_owned(),
        ResolvedType::Int => "Int".to_owned(),
        ResolvedType::Long => "Long".to_owned(),
        ResolvedType::Short => "Short".to_owned(),
        ResolvedType::Byte => "Byte".to_owned(),
        ResolvedType::Float => "Float".to_owned(),
        ResolvedType::Double => "Double".to_owned(),
        ResolvedType::Nullable(inner) => format!("{}?", render_with(inner, preserve)),
        ResolvedType::List(inner) => format!("List<{}>", render_with(inner, preserve)),
        ResolvedType::MutableList(inner) => format!("MutableList<{}>", render_with(inner, preserve)),
        ResolvedType::Set(inner) => format!("Set<{}>", render_with(inner, preserve)),
        ResolvedType::MutableSet(inner) => format!("MutableSet<{}>", render_with(inner, preserve)),
        ResolvedType::Map(k, v) => format!(
            "Map<{}, {}>",
            render_with(k, preserve),
            render_with(v, preserve)
        ),
        ResolvedType::MutableMap(k, v) => format!(
            "MutableMap<{}, {}>",
            render_with(k, preserve),
            render_with(v, preserve)
        ),
        ResolvedType::Array(inner) => format!("Array<{}>", render_with(inner, preserve)),
        ResolvedType::PrimitiveArray(kind) => primitive_array_name(*kind).to_owned(),
        ResolvedType::Sequence(inner) => format!("Sequence<{}>", render_with(inner, preserve)),
        ResolvedType::Result(inner) => format!("Result<{}>", render_with(inner, preserve)),
        ResolvedType::TypeParam(name) => {
            if preserve(name) {
                name.clone()
            } else {
                "Any".to_owned()
            }
        }
        ResolvedType::Named {
            qualified_name,
            type_arguments,
        } => {
            let simple = qualified_name.rsplit('.').next().unwrap_or(qualified_name);
            if type_arguments.is_empty() {
                simple.to_owned()
            } else {
                let args: Vec<String> = type_arguments.iter().map(|t| render_with(t, preserve)).collect();
                format!("{simple}<{}>", args.join(", "))
            }
        }
    }
}

fn primitive_array_name(kind: PrimitiveArrayKind) -> &'static str {
    match kind {
        PrimitiveArrayKind::Int => "IntArray",
        PrimitiveArrayKind::Long => "LongArray",
        PrimitiveArrayKind::Short => "ShortArray",
        PrimitiveArrayKind::Byte => "ByteArray",
        PrimitiveArrayKind::Float => "FloatArray",
        PrimitiveArrayKind::Double => "DoubleArray",
        PrimitiveArrayKind::Boolean => "BooleanArray",
        PrimitiveArrayKind::Char => "CharArray",
    }
}

fn primitive_array_ctor(kind: PrimitiveArrayKind) -> &'static str {
    match kind {
        PrimitiveArrayKind::Int => "intArrayOf()",
        PrimitiveArrayKind::Long => "longArrayOf()",
        PrimitiveArrayKind::Short => "shortArrayOf()",
        PrimitiveArrayKind::Byte => "byteArrayOf()",
        PrimitiveArrayKind::Float => "floatArrayOf()",
        PrimitiveArrayKind::Double => "doubleArrayOf()",
        PrimitiveArrayKind::Boolean => "booleanArrayOf()",
        PrimitiveArrayKind::Char => "charArrayOf()",
    }
}

/// Whether a resolved type is one of the target language's primitive
/// value types (spec §4.4). Collections, `Unit`, `String` and named
/// types are not primitives.
pub fn is_primitive(ty: &ResolvedType) -> bool {
    matches!(
        ty,
        ResolvedType::Boolean
            | ResolvedType::Char
            | ResolvedType::Int
            | ResolvedType::Long
            | ResolvedType::Short
            | ResolvedType::Byte
            | ResolvedType::Float
            | ResolvedType::Double
    )
}

/// Returns the default-value expression for a resolved type, per the
/// table in spec §4.4 (first match wins, searched top to bottom).
pub fn default_value(ty: &ResolvedType) -> String {
    match ty {
        ResolvedType::Unit => "Unit".to_owned(),
        ResolvedType::StringType => "\"\"".to_owned(),
        ResolvedType::Boolean => "false".to_owned(),
        ResolvedType::Int | ResolvedType::Short | ResolvedType::Byte => "0".to_owned(),
        ResolvedType::Long => "0L".to_owned(),
        ResolvedType::Float => "0f".to_owned(),
        ResolvedType::Double => "0.0".to_owned(),
        ResolvedType::Char => "'\\u0000'".to_owned(),
        ResolvedType::List(_) => "emptyList()".to_owned(),
        ResolvedType::MutableList(_) => "mutableListOf()".to_owned(),
        ResolvedType::Set(_) => "emptySet()".to_owned(),
        ResolvedType::MutableSet(_) => "mutableSetOf()".to_owned(),
        ResolvedType::Map(_, _) => "emptyMap()".to_owned(),
        ResolvedType::MutableMap(_, _) => "mutableMapOf()".to_owned(),
        ResolvedType::Array(_) => "emptyArray()".to_owned(),
        ResolvedType::PrimitiveArray(kind) => primitive_array_ctor(*kind).to_owned(),
        ResolvedType::Sequence(_) => "emptySequence()".to_owned(),
        ResolvedType::Result(inner) => format!("Result.success({})", default_value(inner)),
        ResolvedType::Nullable(_) => "null".to_owned(),
        ResolvedType::Named { qualified_name, .. } if is_list_like(qualified_name) => "emptyList()".to_owned(),
        ResolvedType::TypeParam(_) | ResolvedType::Named { .. } => format!(
            "error(\"unimplemented: provide a default for {} via the factory\")",
            render(ty, true)
        ),
    }
}

/// `Iterable`/`Collection` have no dedicated [`ResolvedType`] variant the
/// way `List` does, so they fall into `Named` and are recognized by
/// simple name here instead — spec §4.4's default table maps all three
/// container families to the same `emptyList()` expression.
fn is_list_like(qualified_name: &str) -> bool {
    let simple = qualified_name.rsplit('.').next().unwrap_or(qualified_name);
    matches!(simple, "Iterable" | "Collection")
}
