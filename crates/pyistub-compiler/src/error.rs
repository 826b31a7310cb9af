//! Error taxonomy for stub generation.

use std::io;
use std::path::PathBuf;
use std::process::ExitStatus;

use pyistub_core::{DocError, Id};

/// Failure of an external tool invocation.
#[derive(Debug, thiserror::Error)]
pub enum ToolError {
    #[error("failed to run `{program}`: {source}")]
    Spawn { program: String, source: io::Error },

    #[error("`{command}` exited with {status}")]
    Failed { command: String, status: ExitStatus },
}

/// The documentation generator did not produce a usable artifact.
#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
    #[error(transparent)]
    Tool(#[from] ToolError),

    #[error("doc JSON not found at {}", .0.display())]
    MissingArtifact(PathBuf),

    #[error("failed to read {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("malformed doc JSON in {}: {source}", path.display())]
    Parse { path: PathBuf, source: DocError },
}

/// The doc JSON no longer matches the shape the stub compiler assumes.
///
/// Partial output would be misleading, so all of these abort the run.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SchemaError {
    #[error("function `{name}` (item {id}) has neither `decl` nor `sig`")]
    MissingSignature { id: Id, name: String },

    #[error("item {id} (`{name}`) is exported as a function but is not one")]
    NotAFunction { id: Id, name: String },

    #[error("item {id} is marked as a method block but is not an impl")]
    NotAnImpl { id: Id },

    #[error("impl block {id} targets `{target}`, which is not a named type")]
    UnnamedImplTarget { id: Id, target: String },

    #[error("impl block {impl_id} references missing item {member}")]
    DanglingMember { impl_id: Id, member: Id },

    #[error("unknown primitive type `{0}`")]
    UnknownPrimitive(String),

    #[error("`{container}` has unsupported element type `{element}`")]
    UnsupportedArrayElement { container: String, element: String },

    #[error("slice of `{0}` is not supported, only `[u8]`")]
    UnsupportedSlice(String),

    #[error("`{0}` is missing its type argument")]
    MissingTypeArgument(String),
}

/// Errors that abort stub generation.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("documentation generation failed: {0}")]
    Generation(#[from] GenerationError),

    #[error("unexpected doc JSON shape: {0}")]
    Schema(#[from] SchemaError),

    #[error("failed to write {}: {source}", path.display())]
    Write { path: PathBuf, source: io::Error },

    /// The stub was written but the formatter rejected it.
    #[error("formatter failed: {0}")]
    Format(#[source] ToolError),
}
