use std::path::PathBuf;
use std::process::Command;

use pyistub_core::utils::to_crate_ident;

use super::{DocGenerator, run};
use crate::GenerationError;

/// `cargo rustdoc` with the unstable JSON output format.
///
/// Requires a nightly toolchain (or `RUSTC_BOOTSTRAP`) in the crate directory.
#[derive(Clone, Debug)]
pub struct CargoRustdoc {
    crate_dir: PathBuf,
    target_dir: PathBuf,
    cargo: String,
}

impl CargoRustdoc {
    pub fn new(crate_dir: impl Into<PathBuf>, target_dir: impl Into<PathBuf>) -> Self {
        Self {
            crate_dir: crate_dir.into(),
            target_dir: target_dir.into(),
            cargo: "cargo".to_string(),
        }
    }

    /// Use a different cargo executable.
    pub fn cargo(mut self, program: impl Into<String>) -> Self {
        self.cargo = program.into();
        self
    }

    /// Where rustdoc writes the JSON for `module`.
    pub fn artifact_path(&self, module: &str) -> PathBuf {
        self.target_dir
            .join("doc")
            .join(format!("{}.json", to_crate_ident(module)))
    }

    pub(super) fn command(&self) -> Command {
        let mut cmd = Command::new(&self.cargo);
        cmd.current_dir(&self.crate_dir)
            .arg("rustdoc")
            .arg("--target-dir")
            .arg(&self.target_dir)
            .args(["--", "--output-format", "json", "-Z", "unstable-options"]);
        cmd
    }
}

impl DocGenerator for CargoRustdoc {
    fn generate(&self, module: &str) -> Result<PathBuf, GenerationError> {
        run(&mut self.command())?;

        let artifact = self.artifact_path(module);
        if !artifact.is_file() {
            return Err(GenerationError::MissingArtifact(artifact));
        }
        Ok(artifact)
    }
}
