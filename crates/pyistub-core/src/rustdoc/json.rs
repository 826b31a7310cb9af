//! JSON deserialization for rustdoc output.
//!
//! rustdoc uses externally-tagged objects (`{"primitive": "f64"}`) for both
//! item payloads and types. Only the variants the stub compiler understands
//! are decoded; everything else collapses into `Other` / `Unknown`.

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use super::types::{DocIndex, FnSig, Function, Id, ImplBlock, Item, ItemInner, TypeExpr};

/// Error during rustdoc JSON parsing.
#[derive(Debug, thiserror::Error)]
pub enum DocError {
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

impl DocIndex {
    /// Parse the `index` of a rustdoc JSON document.
    pub fn from_json(json: &str) -> Result<Self, DocError> {
        let raw: RawCrate = serde_json::from_str(json)?;
        Ok(raw.into())
    }
}

/// Top-level rustdoc document. Only `index` is read.
#[derive(Debug, Deserialize)]
struct RawCrate {
    index: IndexMap<String, RawItem>,
}

impl From<RawCrate> for DocIndex {
    fn from(raw: RawCrate) -> Self {
        // The map key is authoritative; `id` inside the item is redundant.
        raw.index
            .into_iter()
            .map(|(key, item)| Item {
                id: Id(key),
                name: item.name,
                docs: item.docs,
                inner: item.inner.into(),
            })
            .collect()
    }
}

#[derive(Debug, Deserialize)]
struct RawItem {
    #[serde(default)]
    name: Option<String>,
    #[serde(default, deserialize_with = "textual_docs")]
    docs: Option<String>,
    #[serde(default)]
    inner: RawInner,
}

/// Item payload. Unknown variants (`module`, `struct`, ...) are ignored.
#[derive(Debug, Default, Deserialize)]
struct RawInner {
    #[serde(default)]
    function: Option<RawFunction>,
    #[serde(default, rename = "impl")]
    impl_block: Option<RawImpl>,
}

impl From<RawInner> for ItemInner {
    fn from(raw: RawInner) -> Self {
        match (raw.function, raw.impl_block) {
            (Some(function), _) => ItemInner::Function(function.into()),
            (None, Some(impl_block)) => ItemInner::Impl(impl_block.into()),
            (None, None) => ItemInner::Other,
        }
    }
}

/// Older format versions call the signature `decl`, newer ones `sig`.
#[derive(Debug, Deserialize)]
struct RawFunction {
    #[serde(default)]
    decl: Option<RawSig>,
    #[serde(default)]
    sig: Option<RawSig>,
}

impl From<RawFunction> for Function {
    fn from(raw: RawFunction) -> Self {
        Self {
            sig: raw.decl.or(raw.sig).map(Into::into),
        }
    }
}

#[derive(Debug, Deserialize)]
struct RawSig {
    inputs: Vec<(String, TypeExpr)>,
    #[serde(default)]
    output: Option<TypeExpr>,
}

impl From<RawSig> for FnSig {
    fn from(raw: RawSig) -> Self {
        Self {
            inputs: raw.inputs,
            output: raw.output,
        }
    }
}

#[derive(Debug, Deserialize)]
struct RawImpl {
    #[serde(rename = "for")]
    target: TypeExpr,
    #[serde(default)]
    items: Vec<RawId>,
}

impl From<RawImpl> for ImplBlock {
    fn from(raw: RawImpl) -> Self {
        Self {
            target: raw.target,
            items: raw.items.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawId {
    Int(u64),
    Str(String),
}

impl From<RawId> for Id {
    fn from(raw: RawId) -> Self {
        match raw {
            RawId::Int(n) => Id::from(n),
            RawId::Str(s) => Id(s),
        }
    }
}

fn textual_docs<'de, D: Deserializer<'de>>(d: D) -> Result<Option<String>, D::Error> {
    Ok(match Value::deserialize(d)? {
        Value::String(s) => Some(s),
        _ => None,
    })
}

impl<'de> Deserialize<'de> for TypeExpr {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(d)?;
        Ok(TypeExpr::from_json(&value))
    }
}

/// Type tags in match precedence.
const TYPE_KINDS: [&str; 7] = [
    "tuple",
    "primitive",
    "generic",
    "resolved_path",
    "borrowed_ref",
    "slice",
    "array",
];

impl TypeExpr {
    /// Decode one rustdoc type node.
    ///
    /// Never fails: shapes outside the known set, or known tags with a
    /// malformed payload, become [`TypeExpr::Unknown`].
    pub fn from_json(value: &Value) -> Self {
        let map = match value {
            Value::Object(map) => map,
            // Unit variants such as `"infer"`
            Value::String(tag) => return Self::Unknown(tag.clone()),
            other => return Self::Unknown(other.to_string()),
        };

        let Some((kind, payload)) = TYPE_KINDS
            .iter()
            .find_map(|kind| map.get(*kind).map(|payload| (*kind, payload)))
        else {
            let tag = map.keys().next().cloned().unwrap_or_default();
            return Self::Unknown(tag);
        };

        decode_kind(kind, payload).unwrap_or_else(|| Self::Unknown(kind.to_string()))
    }
}

fn decode_kind(kind: &str, payload: &Value) -> Option<TypeExpr> {
    let expr = match kind {
        "tuple" => TypeExpr::Tuple(
            payload
                .as_array()?
                .iter()
                .map(TypeExpr::from_json)
                .collect(),
        ),
        "primitive" => TypeExpr::Primitive(payload.as_str()?.to_string()),
        "generic" => TypeExpr::Generic(payload.as_str()?.to_string()),
        "resolved_path" => decode_resolved_path(payload)?,
        "borrowed_ref" => TypeExpr::borrowed(TypeExpr::from_json(payload.get("type")?)),
        "slice" => TypeExpr::slice(TypeExpr::from_json(payload)),
        "array" => TypeExpr::array(TypeExpr::from_json(payload.get("type")?)),
        _ => return None,
    };
    Some(expr)
}

fn decode_resolved_path(payload: &Value) -> Option<TypeExpr> {
    let name = payload
        .get("name")
        .or_else(|| payload.get("path"))?
        .as_str()?;

    // Lifetime and const arguments carry no `type` key and are skipped.
    let args = payload
        .pointer("/args/angle_bracketed/args")
        .and_then(Value::as_array)
        .map(|args| {
            args.iter()
                .filter_map(|arg| arg.get("type"))
                .map(TypeExpr::from_json)
                .collect()
        })
        .unwrap_or_default();

    Some(TypeExpr::path(name, args))
}
