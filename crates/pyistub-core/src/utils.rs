/// Strip any module-path qualifier, returning the last `::` segment.
///
/// # Examples
/// ```
/// use pyistub_core::utils::bare_name;
/// assert_eq!(bare_name("crate::mesh::PyTrimesh"), "PyTrimesh");
/// assert_eq!(bare_name("anyhow::Result"), "Result");
/// assert_eq!(bare_name("Vec"), "Vec");
/// ```
pub fn bare_name(path: &str) -> &str {
    path.rsplit("::").next().unwrap_or(path)
}

/// Convert a Cargo package name into the identifier rustdoc uses for
/// the crate (and its JSON artifact file name).
///
/// # Examples
/// ```
/// use pyistub_core::utils::to_crate_ident;
/// assert_eq!(to_crate_ident("rmesh-python"), "rmesh_python");
/// ```
pub fn to_crate_ident(name: &str) -> String {
    name.replace('-', "_")
}
