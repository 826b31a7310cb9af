//! Fixed lookup tables for Rust -> Python type translation.

/// Fallback for type shapes with no Python counterpart.
pub const ANY: &str = "Any";

/// Rendering of `[u8]`.
pub const BYTES: &str = "bytes";

/// Rendering of the unit type `()`.
pub const NONE: &str = "None";

/// Generic placeholder for the enclosing type.
pub const SELF_TYPE: &str = "Self";

/// Element type a slice must have.
pub const SLICE_ELEMENT: &str = "u8";

/// Numeric and boolean primitives.
pub const PRIMITIVES: &[(&str, &str)] = &[
    ("f32", "float"),
    ("f64", "float"),
    ("i8", "int"),
    ("i16", "int"),
    ("i32", "int"),
    ("i64", "int"),
    ("i128", "int"),
    ("isize", "int"),
    ("u8", "int"),
    ("u16", "int"),
    ("u32", "int"),
    ("u64", "int"),
    ("u128", "int"),
    ("usize", "int"),
    ("bool", "bool"),
];

/// Named types with a Python builtin equivalent.
pub const RENAMES: &[(&str, &str)] = &[("String", "str"), ("Cow", "bytes")];

/// Prefix of numpy's read-only array handles (`PyReadonlyArray1`, ...).
pub const ARRAY_HANDLE_PREFIX: &str = "PyReadonlyArray";

/// Element type -> numpy array alias.
pub const ARRAY_ALIASES: &[(&str, &str)] = &[
    ("f32", "NDArray[float32]"),
    ("f64", "NDArray[float64]"),
    ("i64", "NDArray[int64]"),
];

/// Import lines every stub starts with. The formatter drops unused ones.
pub const PREAMBLE: &[&str] = &[
    "from typing import Any",
    "from numpy.typing import NDArray",
    "from numpy import float64, float32, int64, uint32",
];

/// Generic containers the translator unwraps.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Container {
    /// `Option<T>` -> `T | None`
    Optional,
    /// `Result<T, E>` -> `T`
    Fallible,
    /// `Vec<T>` -> `list[T]`
    List,
    /// `PyReadonlyArrayN<T>` -> `NDArray[..]`
    ArrayHandle,
}

impl Container {
    /// Classify a bare (unqualified) type name.
    pub fn of(bare_name: &str) -> Option<Self> {
        match bare_name {
            "Option" => Some(Self::Optional),
            "Result" | "PyResult" => Some(Self::Fallible),
            "Vec" => Some(Self::List),
            name if name.starts_with(ARRAY_HANDLE_PREFIX) => Some(Self::ArrayHandle),
            _ => None,
        }
    }
}

pub fn lookup(table: &[(&str, &'static str)], key: &str) -> Option<&'static str> {
    table
        .iter()
        .find_map(|&(from, to)| (from == key).then_some(to))
}
