//! Test fixtures for types, functions and doc index items.

use pyistub_core::{FnSig, Function, Id, ImplBlock, Item, ItemInner, TypeExpr};

use crate::{FuncArg, FuncInfo};

pub fn prim(name: &str) -> TypeExpr {
    TypeExpr::primitive(name)
}

pub fn ty(name: &str, args: Vec<TypeExpr>) -> TypeExpr {
    TypeExpr::path(name, args)
}

pub fn string() -> TypeExpr {
    ty("String", vec![])
}

/// `&self`
pub fn self_ref() -> TypeExpr {
    TypeExpr::borrowed(TypeExpr::generic("Self"))
}

pub fn func(
    name: &str,
    args: Vec<(&str, TypeExpr)>,
    ret: Option<TypeExpr>,
    doc: Option<&str>,
) -> FuncInfo {
    FuncInfo {
        name: name.to_string(),
        args: args
            .into_iter()
            .map(|(name, ty)| FuncArg {
                name: name.to_string(),
                ty,
            })
            .collect(),
        ret,
        doc: doc.map(str::to_string),
    }
}

pub fn fn_item(
    id: &str,
    name: &str,
    docs: Option<&str>,
    inputs: Vec<(&str, TypeExpr)>,
    output: Option<TypeExpr>,
) -> Item {
    Item {
        id: Id::from(id),
        name: Some(name.to_string()),
        docs: docs.map(str::to_string),
        inner: ItemInner::Function(Function {
            sig: Some(FnSig {
                inputs: inputs
                    .into_iter()
                    .map(|(name, ty)| (name.to_string(), ty))
                    .collect(),
                output,
            }),
        }),
    }
}

pub fn impl_item(id: &str, docs: Option<&str>, target: TypeExpr, members: &[&str]) -> Item {
    Item {
        id: Id::from(id),
        name: None,
        docs: docs.map(str::to_string),
        inner: ItemInner::Impl(ImplBlock {
            target,
            items: members.iter().map(|m| Id::from(*m)).collect(),
        }),
    }
}

pub fn other_item(id: &str, name: &str, docs: Option<&str>) -> Item {
    Item {
        id: Id::from(id),
        name: Some(name.to_string()),
        docs: docs.map(str::to_string),
        inner: ItemInner::Other,
    }
}
