//! Doc-comment markers that select what ends up in the stub.
//!
//! The binding crate opts items in by starting their doc comment with a
//! marker token:
//!
//! ```ignore
//! /// (pymethods)
//! #[pymethods]
//! impl PyTrimesh { ... }
//!
//! /// (pyfunc) Load a mesh from a file.
//! #[pyfunction]
//! fn py_load_mesh(...) { ... }
//! ```

/// Marks an impl block whose methods form a Python class.
pub const METHODS: &str = "(pymethods)";

/// Marks a standalone Python function.
pub const FUNCTION: &str = "(pyfunc)";

/// Which marker a doc string starts with.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Marker {
    Methods,
    Function,
}

impl Marker {
    pub fn of(docs: &str) -> Option<Self> {
        if docs.starts_with(METHODS) {
            Some(Self::Methods)
        } else if docs.starts_with(FUNCTION) {
            Some(Self::Function)
        } else {
            None
        }
    }
}

/// Remove a leading marker token, if any.
pub fn strip_marker(docs: &str) -> &str {
    docs.strip_prefix(METHODS)
        .or_else(|| docs.strip_prefix(FUNCTION))
        .unwrap_or(docs)
}
