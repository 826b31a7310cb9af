//! rustdoc type -> Python type syntax.

use pyistub_core::TypeExpr;
use pyistub_core::utils::bare_name;

use super::tables::{
    self, ANY, ARRAY_ALIASES, BYTES, Container, NONE, PRIMITIVES, RENAMES, SELF_TYPE,
    SLICE_ELEMENT,
};
use crate::SchemaError;

/// Translate a type into Python stub syntax.
///
/// `class_name` is the enclosing class, used to resolve `Self`. Shapes with
/// no Python counterpart render as `Any`; shapes that contradict the
/// expected schema (unknown primitives, unsupported array elements) fail.
pub fn translate(expr: &TypeExpr, class_name: Option<&str>) -> Result<String, SchemaError> {
    let translator = Translator {
        class_name: class_name.map(bare_name),
    };
    translator.translate(expr)
}

struct Translator<'a> {
    class_name: Option<&'a str>,
}

impl Translator<'_> {
    fn translate(&self, expr: &TypeExpr) -> Result<String, SchemaError> {
        match expr {
            TypeExpr::Tuple(elements) => self.tuple(elements),
            TypeExpr::Primitive(name) => primitive(name).map(str::to_string),
            TypeExpr::Generic(name) => Ok(self.generic(name)),
            TypeExpr::ResolvedPath { name, args } => self.resolved_path(name, args),
            TypeExpr::BorrowedRef(inner) => self.translate(inner),
            TypeExpr::Slice(element) => slice(element),
            TypeExpr::Array(element) => Ok(format!("list[{}]", self.translate(element)?)),
            TypeExpr::Unknown(kind) => {
                log::debug!("no Python equivalent for `{kind}` type, using {ANY}");
                Ok(ANY.to_string())
            }
        }
    }

    fn tuple(&self, elements: &[TypeExpr]) -> Result<String, SchemaError> {
        if elements.is_empty() {
            return Ok(NONE.to_string());
        }
        let inner = elements
            .iter()
            .map(|e| self.translate(e))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(format!("tuple[{}]", inner.join(", ")))
    }

    fn generic(&self, name: &str) -> String {
        match self.class_name {
            Some(class_name) if name == SELF_TYPE => class_name.to_string(),
            _ => name.to_string(),
        }
    }

    fn resolved_path(&self, name: &str, args: &[TypeExpr]) -> Result<String, SchemaError> {
        let bare = bare_name(name);
        let Some(container) = Container::of(bare) else {
            return Ok(tables::lookup(RENAMES, bare).unwrap_or(bare).to_string());
        };

        let first = args
            .first()
            .ok_or_else(|| SchemaError::MissingTypeArgument(name.to_string()))?;

        match container {
            Container::Optional => Ok(format!("{} | None", self.translate(first)?)),
            Container::Fallible => self.translate(first),
            Container::List => Ok(format!("list[{}]", self.translate(first)?)),
            Container::ArrayHandle => array_alias(name, first),
        }
    }
}

fn primitive(name: &str) -> Result<&'static str, SchemaError> {
    tables::lookup(PRIMITIVES, name).ok_or_else(|| SchemaError::UnknownPrimitive(name.to_string()))
}

fn slice(element: &TypeExpr) -> Result<String, SchemaError> {
    match element {
        TypeExpr::Primitive(name) if name == SLICE_ELEMENT => Ok(BYTES.to_string()),
        other => Err(SchemaError::UnsupportedSlice(other.describe())),
    }
}

fn array_alias(container: &str, element: &TypeExpr) -> Result<String, SchemaError> {
    let alias = match element {
        TypeExpr::Primitive(name) => tables::lookup(ARRAY_ALIASES, name),
        _ => None,
    };
    alias
        .map(str::to_string)
        .ok_or_else(|| SchemaError::UnsupportedArrayElement {
            container: container.to_string(),
            element: element.describe(),
        })
}
