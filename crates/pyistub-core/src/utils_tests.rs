use crate::utils::{bare_name, to_crate_ident};

#[test]
fn bare_name_strips_qualifiers() {
    assert_eq!(bare_name("crate::Trimesh"), "Trimesh");
    assert_eq!(bare_name("std::option::Option"), "Option");
    assert_eq!(bare_name("anyhow::Result"), "Result");
}

#[test]
fn bare_name_passes_unqualified() {
    assert_eq!(bare_name("String"), "String");
    assert_eq!(bare_name(""), "");
}

#[test]
fn crate_ident_replaces_dashes() {
    assert_eq!(to_crate_ident("rmesh-python"), "rmesh_python");
    assert_eq!(to_crate_ident("rmesh"), "rmesh");
}
