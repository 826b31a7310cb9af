//! pyistub compiler: rustdoc JSON to Python interface stubs.
//!
//! This crate provides the stub generation pipeline:
//! - `loader` - run the doc generator and load its JSON into a `DocIndex`
//! - `classify` - split documented items into free functions and class methods
//! - `typegen` - Python type translation, signature rendering and assembly
//! - `tools` - external collaborators (`cargo rustdoc`, `ruff`)
//! - `pipeline` - the end-to-end driver

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod classify;
pub mod loader;
pub mod markers;
pub mod pipeline;
pub mod tools;
pub mod typegen;

mod error;

#[cfg(test)]
pub mod test_utils;

pub use classify::{ClassGroups, Classification, FuncArg, FuncInfo, GroupKey, classify};
pub use error::{Error, GenerationError, SchemaError, ToolError};
pub use pipeline::{Pipeline, Report};
pub use tools::{DocGenerator, Formatter};

/// Result type for stub generation.
pub type Result<T> = std::result::Result<T, Error>;
