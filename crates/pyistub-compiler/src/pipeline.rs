//! End-to-end stub generation.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::classify::{SkippedItem, classify};
use crate::loader::load;
use crate::tools::{DocGenerator, Formatter};
use crate::typegen::python::assemble;
use crate::{Error, Result};

/// Summary of a successful run.
#[derive(Debug)]
pub struct Report {
    pub output: PathBuf,
    pub classes: usize,
    pub functions: usize,
    pub skipped: Vec<SkippedItem>,
}

/// Generate docs, build the stub, write it, and format it.
#[derive(Debug)]
pub struct Pipeline<G, F> {
    generator: G,
    formatter: F,
    output: PathBuf,
}

impl<G: DocGenerator, F: Formatter> Pipeline<G, F> {
    pub fn new(generator: G, formatter: F, output: impl Into<PathBuf>) -> Self {
        Self {
            generator,
            formatter,
            output: output.into(),
        }
    }

    /// Run every stage for `module`.
    ///
    /// Nothing is written unless the whole stub could be built. A formatter
    /// failure is reported after the unformatted stub is on disk.
    pub fn run(&self, module: &str) -> Result<Report> {
        let index = load(&self.generator, module)?;

        let classification = classify(&index)?;
        let stub = assemble(&classification.groups)?;

        write_stub(&self.output, &stub)?;
        log::info!("wrote stub to {}", self.output.display());

        self.formatter.format(&self.output).map_err(Error::Format)?;
        log::info!("formatted {}", self.output.display());

        Ok(Report {
            output: self.output.clone(),
            classes: classification.class_count(),
            functions: classification.function_count(),
            skipped: classification.skipped,
        })
    }
}

/// Replace `path` with `contents` via a temporary file in the same directory.
///
/// The stub keeps the mode of the file it replaces; a new stub gets the
/// same mode a plain `File::create` would.
fn write_stub(path: &Path, contents: &str) -> Result<()> {
    let write_err = |source| Error::Write {
        path: path.to_path_buf(),
        source,
    };
    let dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };

    let existing = fs::metadata(path).ok().map(|meta| meta.permissions());

    let mut file = new_stub_file(dir).map_err(write_err)?;
    if let Some(permissions) = existing {
        file.as_file().set_permissions(permissions).map_err(write_err)?;
    }
    file.write_all(contents.as_bytes()).map_err(write_err)?;
    file.persist(path).map_err(|err| write_err(err.error))?;
    Ok(())
}

#[cfg(unix)]
fn new_stub_file(dir: &Path) -> io::Result<NamedTempFile> {
    use std::os::unix::fs::PermissionsExt;

    // 0o666 less the umask, applied by open(2).
    tempfile::Builder::new()
        .permissions(fs::Permissions::from_mode(0o666))
        .tempfile_in(dir)
}

#[cfg(not(unix))]
fn new_stub_file(dir: &Path) -> io::Result<NamedTempFile> {
    NamedTempFile::new_in(dir)
}
