//! Locate the pieces of a binding crate: module name and target directory.

use std::fs;
use std::path::{Path, PathBuf};

use pyistub_core::utils::to_crate_ident;
use serde::Deserialize;

const MANIFEST: &str = "Cargo.toml";
const TARGET_DIR_ENV: &str = "CARGO_TARGET_DIR";

#[derive(Debug, thiserror::Error)]
pub enum LayoutError {
    #[error("cannot access crate directory '{}': {source}", path.display())]
    CrateDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to read '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse '{}': {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("'{}' has neither [lib] nor [package] name", .0.display())]
    MissingName(PathBuf),
}

/// The parts of `Cargo.toml` that matter here.
#[derive(Debug, Deserialize)]
struct Manifest {
    package: Option<Named>,
    lib: Option<Named>,
    workspace: Option<toml::Table>,
}

#[derive(Debug, Deserialize)]
struct Named {
    name: Option<String>,
}

impl Manifest {
    fn read(path: &Path) -> Result<Self, LayoutError> {
        let content = fs::read_to_string(path).map_err(|source| LayoutError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| LayoutError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// `[lib] name`, else `[package] name`, as a Rust identifier.
    fn module_name(&self) -> Option<String> {
        [&self.lib, &self.package]
            .into_iter()
            .flatten()
            .find_map(|named| named.name.as_deref())
            .map(to_crate_ident)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrateLayout {
    pub crate_dir: PathBuf,
    pub module: String,
    pub target_dir: PathBuf,
}

impl CrateLayout {
    /// Inspect `crate_dir`, honoring `CARGO_TARGET_DIR`.
    pub fn discover(crate_dir: &Path) -> Result<Self, LayoutError> {
        let env_target = std::env::var_os(TARGET_DIR_ENV)
            .map(PathBuf::from)
            .map(|dir| std::path::absolute(&dir).unwrap_or(dir));
        Self::discover_with(crate_dir, env_target)
    }

    pub fn discover_with(
        crate_dir: &Path,
        env_target: Option<PathBuf>,
    ) -> Result<Self, LayoutError> {
        let crate_dir = fs::canonicalize(crate_dir).map_err(|source| LayoutError::CrateDir {
            path: crate_dir.to_path_buf(),
            source,
        })?;

        let manifest_path = crate_dir.join(MANIFEST);
        let module = Manifest::read(&manifest_path)?
            .module_name()
            .ok_or(LayoutError::MissingName(manifest_path))?;

        let target_dir = match env_target {
            Some(dir) => dir,
            None => workspace_root(&crate_dir)
                .unwrap_or_else(|| crate_dir.clone())
                .join("target"),
        };

        Ok(Self {
            crate_dir,
            module,
            target_dir,
        })
    }
}

/// Nearest directory at or above `dir` whose manifest has a `[workspace]`.
///
/// Unreadable ancestor manifests are skipped.
fn workspace_root(dir: &Path) -> Option<PathBuf> {
    dir.ancestors()
        .find(|ancestor| {
            let manifest = ancestor.join(MANIFEST);
            manifest.is_file()
                && Manifest::read(&manifest).is_ok_and(|m| m.workspace.is_some())
        })
        .map(Path::to_path_buf)
}
