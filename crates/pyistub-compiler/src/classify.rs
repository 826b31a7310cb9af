//! Split documented items into free functions and per-class methods.

use std::collections::HashSet;

use indexmap::IndexMap;
use pyistub_core::utils::bare_name;
use pyistub_core::{DocIndex, Id, ImplBlock, Item, ItemInner, TypeExpr};

use crate::SchemaError;
use crate::markers::Marker;

/// Which group a function belongs to.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum GroupKey {
    /// Module-level functions.
    Global,
    /// Methods of the named class.
    Class(String),
}

impl GroupKey {
    pub fn class_name(&self) -> Option<&str> {
        match self {
            Self::Global => None,
            Self::Class(name) => Some(name),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FuncArg {
    pub name: String,
    pub ty: TypeExpr,
}

/// Everything the renderer needs about one function.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FuncInfo {
    pub name: String,
    pub args: Vec<FuncArg>,
    pub ret: Option<TypeExpr>,
    pub doc: Option<String>,
}

/// Group -> member functions, in discovery order.
pub type ClassGroups = IndexMap<GroupKey, Vec<FuncInfo>>;

/// A documented item without a recognized marker.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SkippedItem {
    pub id: Id,
    pub name: String,
}

#[derive(Debug, Default)]
pub struct Classification {
    pub groups: ClassGroups,
    pub skipped: Vec<SkippedItem>,
}

impl Classification {
    pub fn class_count(&self) -> usize {
        self.groups
            .keys()
            .filter(|key| matches!(key, GroupKey::Class(_)))
            .count()
    }

    pub fn function_count(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }
}

/// Group every marked item of the index.
///
/// Members of a `(pymethods)` block belong to that block's class only, even
/// when their own docs carry a marker. Documented top-level items without a
/// marker are logged and skipped; undocumented items are ignored.
pub fn classify(index: &DocIndex) -> Result<Classification, SchemaError> {
    let members = method_block_members(index);
    let mut out = Classification::default();

    for item in index.iter() {
        let Some(docs) = item.docs.as_deref() else {
            continue;
        };

        match Marker::of(docs) {
            Some(Marker::Methods) => {
                let ItemInner::Impl(block) = &item.inner else {
                    return Err(SchemaError::NotAnImpl {
                        id: item.id.clone(),
                    });
                };
                let class_name = impl_target_name(item, block)?;
                log::debug!("class `{class_name}` from impl block {}", item.id);

                let methods = block
                    .items
                    .iter()
                    .map(|member| resolve_member(index, item, member).and_then(extract_function))
                    .collect::<Result<Vec<_>, _>>()?;
                out.groups
                    .entry(GroupKey::Class(class_name))
                    .or_default()
                    .extend(methods);
            }
            _ if members.contains(&item.id) => {}
            Some(Marker::Function) => {
                let function = extract_function(item)?;
                log::debug!("function `{}`", function.name);
                out.groups
                    .entry(GroupKey::Global)
                    .or_default()
                    .push(function);
            }
            None if docs.trim().is_empty() => {}
            None => {
                log::warn!(
                    "skipping `{}` (item {}): unrecognized doc marker in {:?}",
                    item.name(),
                    item.id,
                    first_line(docs)
                );
                out.skipped.push(SkippedItem {
                    id: item.id.clone(),
                    name: item.name().to_string(),
                });
            }
        }
    }

    Ok(out)
}

/// Build a `FuncInfo` from a function item.
pub fn extract_function(item: &Item) -> Result<FuncInfo, SchemaError> {
    let ItemInner::Function(function) = &item.inner else {
        return Err(SchemaError::NotAFunction {
            id: item.id.clone(),
            name: item.name().to_string(),
        });
    };
    let sig = function
        .sig
        .as_ref()
        .ok_or_else(|| SchemaError::MissingSignature {
            id: item.id.clone(),
            name: item.name().to_string(),
        })?;

    Ok(FuncInfo {
        name: item.name().to_string(),
        args: sig
            .inputs
            .iter()
            .map(|(name, ty)| FuncArg {
                name: name.clone(),
                ty: ty.clone(),
            })
            .collect(),
        ret: sig.output.clone(),
        doc: item.docs.clone(),
    })
}

fn method_block_members(index: &DocIndex) -> HashSet<Id> {
    index
        .iter()
        .filter(|item| item.docs.as_deref().and_then(Marker::of) == Some(Marker::Methods))
        .filter_map(|item| match &item.inner {
            ItemInner::Impl(block) => Some(block.items.iter().cloned()),
            _ => None,
        })
        .flatten()
        .collect()
}

fn impl_target_name(item: &Item, block: &ImplBlock) -> Result<String, SchemaError> {
    match &block.target {
        TypeExpr::ResolvedPath { name, .. } => Ok(bare_name(name).to_string()),
        other => Err(SchemaError::UnnamedImplTarget {
            id: item.id.clone(),
            target: other.describe(),
        }),
    }
}

fn resolve_member<'a>(
    index: &'a DocIndex,
    block: &Item,
    member: &Id,
) -> Result<&'a Item, SchemaError> {
    index.get(member).ok_or_else(|| SchemaError::DanglingMember {
        impl_id: block.id.clone(),
        member: member.clone(),
    })
}

fn first_line(docs: &str) -> &str {
    docs.lines().next().unwrap_or_default().trim()
}
