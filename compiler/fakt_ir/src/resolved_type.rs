//! `ResolvedType`: the IR-level replacement for frontend's `type: text`.
//!
//! Design note (see `DESIGN.md` for the full rationale): spec §3 calls IR
//! types "opaque resolved handles". A real host-compiler binding's type
//! representation genuinely is opaque outside the host's own type table.
//! This standalone core has no host type table to hold, so `ResolvedType`
//! is instead a closed algebraic value that the `IrClassLookup` adapter
//! constructs from whatever the host's type system gives it. The
//! opaqueness spec §3 cares about is preserved at the seam that matters:
//! `fakt_transform` never interprets a `ResolvedType`, it only moves
//! values the adapter handed it; only `fakt_resolve`'s pure functions
//! (spec §4.4) pattern-match on the shape.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum ResolvedType {
    Unit,
    StringType,
    Boolean,
    Char,
    Int,
    Long,
    Short,
    Byte,
    Float,
    Double,
    Nullable(Box<ResolvedType>),
    List(Box<ResolvedType>),
    MutableList(Box<ResolvedType>),
    Set(Box<ResolvedType>),
    MutableSet(Box<ResolvedType>),
    Map(Box<ResolvedType>, Box<ResolvedType>),
    MutableMap(Box<ResolvedType>, Box<ResolvedType>),
    Array(Box<ResolvedType>),
    PrimitiveArray(PrimitiveArrayKind),
    Sequence(Box<ResolvedType>),
    Result(Box<ResolvedType>),
    /// A reference to a type parameter in scope (e.g. `T`), kept symbolic.
    TypeParam(String),
    /// Any other named type, user-defined or otherwise: a fully-qualified
    /// name plus resolved type arguments (empty for non-generic types).
    Named {
        qualified_name: String,
        type_arguments: Vec<ResolvedType>,
    },
}

/// The primitive array specializations the target language's standard
/// library provides distinct builders for (e.g. `IntArray`, `LongArray`).
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum PrimitiveArrayKind {
    Int,
    Long,
    Short,
    Byte,
    Float,
    Double,
    Boolean,
    Char,
}

impl ResolvedType {
    pub fn is_nullable(&self) -> bool {
        matches!(self, ResolvedType::Nullable(_))
    }

    /// The non-nullable type underneath a `Nullable` wrapper, or `self`.
    pub fn strip_nullable(&self) -> &ResolvedType {
        match self {
            ResolvedType::Nullable(inner) => inner,
            other => other,
        }
    }
}
