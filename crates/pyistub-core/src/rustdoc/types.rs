//! rustdoc item and type definitions.

use std::fmt;

use indexmap::IndexMap;

/// Opaque item identifier.
///
/// rustdoc has emitted ids both as strings (`"0:12:345"`) and as integers;
/// both are normalized to their textual form so references resolve against
/// the keys of the `index` map.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Id(pub String);

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Id {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<u64> for Id {
    fn from(n: u64) -> Self {
        Self(n.to_string())
    }
}

/// One entry of the rustdoc `index`.
#[derive(Debug, Clone)]
pub struct Item {
    pub id: Id,
    /// Item name. Impl blocks and some re-exports have none.
    pub name: Option<String>,
    /// Doc comment text. Non-textual values are treated as absent.
    pub docs: Option<String>,
    pub inner: ItemInner,
}

impl Item {
    /// Item name, or an empty string for anonymous items.
    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or_default()
    }
}

/// The part of an item's payload the stub compiler cares about.
#[derive(Debug, Clone)]
pub enum ItemInner {
    Function(Function),
    Impl(ImplBlock),
    /// Modules, structs, constants, ...
    Other,
}

/// A function or method.
#[derive(Debug, Clone, Default)]
pub struct Function {
    /// The signature, taken from `decl` or `sig` depending on the format
    /// version. `None` when the payload carries neither.
    pub sig: Option<FnSig>,
}

/// Function signature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FnSig {
    /// Ordered `(name, type)` inputs, including `self`.
    pub inputs: Vec<(String, TypeExpr)>,
    pub output: Option<TypeExpr>,
}

/// An `impl` block.
#[derive(Debug, Clone)]
pub struct ImplBlock {
    /// The type the block is implemented for.
    pub target: TypeExpr,
    /// Member item ids, in declaration order.
    pub items: Vec<Id>,
}

/// A type appearing in argument or return position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeExpr {
    /// `f64`, `u8`, `bool`, ...
    Primitive(String),
    /// A type parameter, including `Self`.
    Generic(String),
    /// A named type with its type arguments (lifetimes and consts dropped).
    ResolvedPath { name: String, args: Vec<TypeExpr> },
    /// `&T` / `&mut T`.
    BorrowedRef(Box<TypeExpr>),
    Tuple(Vec<TypeExpr>),
    /// `[T]`.
    Slice(Box<TypeExpr>),
    /// `[T; N]`. The length is not kept.
    Array(Box<TypeExpr>),
    /// Any other shape. Carries the JSON tag for diagnostics.
    Unknown(String),
}

impl TypeExpr {
    pub fn primitive(name: &str) -> Self {
        Self::Primitive(name.to_string())
    }

    pub fn generic(name: &str) -> Self {
        Self::Generic(name.to_string())
    }

    pub fn path(name: &str, args: Vec<TypeExpr>) -> Self {
        Self::ResolvedPath {
            name: name.to_string(),
            args,
        }
    }

    pub fn borrowed(inner: TypeExpr) -> Self {
        Self::BorrowedRef(Box::new(inner))
    }

    pub fn slice(element: TypeExpr) -> Self {
        Self::Slice(Box::new(element))
    }

    pub fn array(element: TypeExpr) -> Self {
        Self::Array(Box::new(element))
    }

    /// Short human-readable description, used in error messages.
    pub fn describe(&self) -> String {
        match self {
            Self::Primitive(name) | Self::Generic(name) => name.clone(),
            Self::ResolvedPath { name, .. } => name.clone(),
            Self::BorrowedRef(inner) => format!("&{}", inner.describe()),
            Self::Tuple(elements) => {
                let inner: Vec<_> = elements.iter().map(Self::describe).collect();
                format!("({})", inner.join(", "))
            }
            Self::Slice(element) => format!("[{}]", element.describe()),
            Self::Array(element) => format!("[{}; _]", element.describe()),
            Self::Unknown(kind) => format!("<{kind}>"),
        }
    }
}

/// The `index` of a rustdoc JSON document, keyed by item id.
///
/// Preserves document order.
#[derive(Debug, Clone, Default)]
pub struct DocIndex {
    items: IndexMap<Id, Item>,
}

impl DocIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, item: Item) {
        self.items.insert(item.id.clone(), item);
    }

    pub fn get(&self, id: &Id) -> Option<&Item> {
        self.items.get(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Item> {
        self.items.values()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl FromIterator<Item> for DocIndex {
    fn from_iter<I: IntoIterator<Item = Item>>(iter: I) -> Self {
        let mut index = Self::new();
        for item in iter {
            index.insert(item);
        }
        index
    }
}
