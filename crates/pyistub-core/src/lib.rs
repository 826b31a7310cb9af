#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core data structures for pyistub.
//!
//! Two layers, as in the rest of the workspace:
//! - **Deserialization layer**: raw structs mirroring rustdoc's JSON output
//! - **Domain layer**: the closed [`Item`] / [`TypeExpr`] model the stub
//!   compiler matches on exhaustively
//!
//! Unrecognized shapes are decoded exactly once, at the JSON boundary, into
//! [`TypeExpr::Unknown`] or [`ItemInner::Other`].

pub mod rustdoc;
pub mod utils;

#[cfg(test)]
mod utils_tests;

pub use rustdoc::{DocError, DocIndex, FnSig, Function, Id, ImplBlock, Item, ItemInner, TypeExpr};
