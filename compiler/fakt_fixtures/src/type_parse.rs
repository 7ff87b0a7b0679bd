//! Parses the small fixed vocabulary of fixture type strings into
//! [`ResolvedType`] values, standing in for a real host type-checker's
//! resolved-type table (spec §6 ambient addition: host adapter seam).

use fakt_ir::{PrimitiveArrayKind, ResolvedType};

/// Parse a fixture type string such as `"kotlin.collections.List<T>"` or
/// `"kotlin.String?"` into a [`ResolvedType`].
pub fn parse_type(raw: &str) -> ResolvedType {
    let raw = raw.trim();
    if let Some(inner) = raw.strip_suffix('?') {
        return ResolvedType::Nullable(Box::new(parse_type(inner)));
    }

    let (head, args) = split_head_and_args(raw);
    match head {
        "kotlin.Unit" | "Unit" => ResolvedType::Unit,
        "kotlin.String" | "String" => ResolvedType::StringType,
        "kotlin.Boolean" | "Boolean" => ResolvedType::Boolean,
        "kotlin.Char" | "Char" => ResolvedType::Char,
        "kotlin.Int" | "Int" => ResolvedType::Int,
        "kotlin.Long" | "Long" => ResolvedType::Long,
        "kotlin.Short" | "Short" => ResolvedType::Short,
        "kotlin.Byte" | "Byte" => ResolvedType::Byte,
        "kotlin.Float" | "Float" => ResolvedType::Float,
        "kotlin.Double" | "Double" => ResolvedType::Double,
        "kotlin.IntArray" | "IntArray" => ResolvedType::PrimitiveArray(PrimitiveArrayKind::Int),
        "kotlin.LongArray" | "LongArray" => ResolvedType::PrimitiveArray(PrimitiveArrayKind::Long),
        "kotlin.ShortArray" | "ShortArray" => {
            ResolvedType::PrimitiveArray(PrimitiveArrayKind::Short)
        }
        "kotlin.ByteArray" | "ByteArray" => ResolvedType::PrimitiveArray(PrimitiveArrayKind::Byte),
        "kotlin.FloatArray" | "FloatArray" => {
            ResolvedType::PrimitiveArray(PrimitiveArrayKind::Float)
        }
        "kotlin.DoubleArray" | "DoubleArray" => {
            ResolvedType::PrimitiveArray(PrimitiveArrayKind::Double)
        }
        "kotlin.BooleanArray" | "BooleanArray" => {
            ResolvedType::PrimitiveArray(PrimitiveArrayKind::Boolean)
        }
        "kotlin.CharArray" | "CharArray" => ResolvedType::PrimitiveArray(PrimitiveArrayKind::Char),
        "kotlin.Array" | "Array" => ResolvedType::Array(Box::new(parse_single_arg(&args))),
        "kotlin.collections.List" | "List" => {
            ResolvedType::List(Box::new(parse_single_arg(&args)))
        }
        "kotlin.collections.MutableList" | "MutableList" => {
            ResolvedType::MutableList(Box::new(parse_single_arg(&args)))
        }
        "kotlin.collections.Set" | "Set" => ResolvedType::Set(Box::new(parse_single_arg(&args))),
        "kotlin.collections.MutableSet" | "MutableSet" => {
            ResolvedType::MutableSet(Box::new(parse_single_arg(&args)))
        }
        "kotlin.collections.Map" | "Map" => {
            let (k, v) = parse_two_args(&args);
            ResolvedType::Map(Box::new(k), Box::new(v))
        }
        "kotlin.collections.MutableMap" | "MutableMap" => {
            let (k, v) = parse_two_args(&args);
            ResolvedType::MutableMap(Box::new(k), Box::new(v))
        }
        "kotlin.collections.Iterable" | "Iterable" => {
            ResolvedType::List(Box::new(parse_single_arg(&args)))
        }
        "kotlin.collections.Collection" | "Collection" => {
            ResolvedType::List(Box::new(parse_single_arg(&args)))
        }
        "kotlin.sequences.Sequence" | "Sequence" => {
            ResolvedType::Sequence(Box::new(parse_single_arg(&args)))
        }
        "kotlin.Result" | "Result" => ResolvedType::Result(Box::new(parse_single_arg(&args))),
        // A single uppercase letter with no qualification and no
        // generic arguments is treated as an in-scope type parameter
        // reference (`T`, `K`, `V`, ...); everything else is a named
        // type, generic or not.
        _ if args.is_empty() && is_bare_type_param_name(head) => {
            ResolvedType::TypeParam(head.to_owned())
        }
        _ => ResolvedType::Named {
            qualified_name: head.to_owned(),
            type_arguments: split_top_level_args(&args).iter().map(|a| parse_type(a)).collect(),
        },
    }
}

fn is_bare_type_param_name(head: &str) -> bool {
    !head.contains('.')
        && head.chars().all(|c| c.is_ascii_uppercase() || c.is_ascii_digit())
        && head.chars().next().is_some_and(|c| c.is_ascii_uppercase())
        && head.len() <= 2
}

fn split_head_and_args(raw: &str) -> (&str, String) {
    match raw.find('<') {
        Some(start) if raw.ends_with('>') => (&raw[..start], raw[start + 1..raw.len() - 1].to_owned()),
        _ => (raw, String::new()),
    }
}

fn split_top_level_args(args: &str) -> Vec<String> {
    if args.is_empty() {
        return Vec::new();
    }
    let mut parts = Vec::new();
    let mut depth = 0i32;
    let mut current = String::new();
    for ch in args.chars() {
        match ch {
            '<' => {
                depth += 1;
                current.push(ch);
            }
            '>' => {
                depth -= 1;
                current.push(ch);
            }
            ',' if depth == 0 => {
                parts.push(current.trim().to_owned());
                current.clear();
            }
            _ => current.push(ch),
        }
    }
    if !current.trim().is_empty() {
        parts.push(current.trim().to_owned());
    }
    parts
}

fn parse_single_arg(args: &str) -> ResolvedType {
    split_top_level_args(args)
        .first()
        .map(|a| parse_type(a))
        .unwrap_or(ResolvedType::Named {
            qualified_name: "kotlin.Any".to_owned(),
            type_arguments: vec![],
        })
}

fn parse_two_args(args: &str) -> (ResolvedType, ResolvedType) {
    let parts = split_top_level_args(args);
    let any = || ResolvedType::Named {
        qualified_name: "kotlin.Any".to_owned(),
        type_arguments: vec![],
    };
    let k = parts.first().map(|a| parse_type(a)).unwrap_or_else(any);
    let v = parts.get(1).map(|a| parse_type(a)).unwrap_or_else(any);
    (k, v)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_primitives() {
        assert_eq!(parse_type("kotlin.String"), ResolvedType::StringType);
        assert_eq!(parse_type("kotlin.Unit"), ResolvedType::Unit);
    }

    #[test]
    fn parses_nullable() {
        assert_eq!(
            parse_type("kotlin.String?"),
            ResolvedType::Nullable(Box::new(ResolvedType::StringType))
        );
    }

    #[test]
    fn parses_list_of_type_param() {
        assert_eq!(
            parse_type("kotlin.collections.List<T>"),
            ResolvedType::List(Box::new(ResolvedType::TypeParam("T".into())))
        );
    }

    #[test]
    fn parses_map_of_two_args() {
        assert_eq!(
            parse_type("kotlin.collections.Map<String, Int>"),
            ResolvedType::Map(
                Box::new(ResolvedType::Named {
                    qualified_name: "String".into(),
                    type_arguments: vec![]
                }),
                Box::new(ResolvedType::Int)
            )
        );
    }

    #[test]
    fn parses_named_generic_type() {
        assert_eq!(
            parse_type("com.example.User"),
            ResolvedType::Named {
                qualified_name: "com.example.User".into(),
                type_arguments: vec![]
            }
        );
    }

    #[test]
    fn parses_result_of_unit() {
        assert_eq!(
            parse_type("kotlin.Result<kotlin.Unit>"),
            ResolvedType::Result(Box::new(ResolvedType::Unit))
        );
    }
}
