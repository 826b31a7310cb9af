//! Load rustdoc JSON into a `DocIndex`.

use std::fs;
use std::path::Path;

use pyistub_core::DocIndex;

use crate::GenerationError;
use crate::tools::DocGenerator;

/// Run the generator for `module` and load the artifact it produced.
pub fn load(generator: &impl DocGenerator, module: &str) -> Result<DocIndex, GenerationError> {
    let path = generator.generate(module)?;
    log::info!("generated doc JSON at {}", path.display());
    load_index(&path)
}

/// Read and parse a rustdoc JSON file.
pub fn load_index(path: &Path) -> Result<DocIndex, GenerationError> {
    let json = fs::read_to_string(path).map_err(|source| GenerationError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let index = DocIndex::from_json(&json).map_err(|source| GenerationError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    log::debug!("loaded {} items from {}", index.len(), path.display());
    Ok(index)
}
