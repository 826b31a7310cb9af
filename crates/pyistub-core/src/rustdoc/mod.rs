//! rustdoc JSON model.
//!
//! This module provides the types describing a crate's public surface as
//! emitted by `cargo rustdoc -- --output-format json`, restricted to what a
//! Python stub needs: functions, impl blocks and the types they mention.

mod json;
mod types;


pub use json::DocError;
pub use types::{DocIndex, FnSig, Function, Id, ImplBlock, Item, ItemInner, TypeExpr};
