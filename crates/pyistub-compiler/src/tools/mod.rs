//! External collaborators: the documentation generator and the formatter.
//!
//! Both are traits so the pipeline can be driven by fakes in tests.

mod ruff;
mod rustdoc;


use std::path::{Path, PathBuf};
use std::process::Command;

pub use ruff::Ruff;
pub use rustdoc::CargoRustdoc;

use crate::{GenerationError, ToolError};

/// Produces the rustdoc JSON for a crate.
pub trait DocGenerator {
    /// Generate docs for `module` and return the path of the JSON artifact.
    fn generate(&self, module: &str) -> Result<PathBuf, GenerationError>;
}

impl<T: DocGenerator + ?Sized> DocGenerator for &T {
    fn generate(&self, module: &str) -> Result<PathBuf, GenerationError> {
        (*self).generate(module)
    }
}

/// Rewrites a Python file in place.
pub trait Formatter {
    fn format(&self, path: &Path) -> Result<(), ToolError>;
}

impl<T: Formatter + ?Sized> Formatter for &T {
    fn format(&self, path: &Path) -> Result<(), ToolError> {
        (*self).format(path)
    }
}

/// Run a command to completion, inheriting stdio.
pub(crate) fn run(cmd: &mut Command) -> Result<(), ToolError> {
    let command = describe(cmd);
    log::debug!("running `{command}`");

    let status = cmd.status().map_err(|source| ToolError::Spawn {
        program: cmd.get_program().to_string_lossy().into_owned(),
        source,
    })?;

    if status.success() {
        Ok(())
    } else {
        Err(ToolError::Failed { command, status })
    }
}

fn describe(cmd: &Command) -> String {
    std::iter::once(cmd.get_program())
        .chain(cmd.get_args())
        .map(|part| part.to_string_lossy())
        .collect::<Vec<_>>()
        .join(" ")
}
