use indoc::indoc;
use pyistub_core::TypeExpr;

use super::render_function;
use crate::test_utils::{func, prim, self_ref, string, ty};
use crate::{FuncInfo, SchemaError};

fn render(func: &FuncInfo, class_name: Option<&str>) -> String {
    let mut out = render_function(func, class_name).unwrap().join("\n");
    out.push('\n');
    out
}

#[test]
fn constructor_becomes_init() {
    let new = func(
        "new",
        vec![("path", string())],
        Some(ty("Result", vec![TypeExpr::generic("Self")])),
        None,
    );

    assert_eq!(
        render(&new, Some("Mesh")),
        indoc! {r#"
            def __init__(self, path: str):
                """ Undocumented function """
        "#}
    );
}

#[test]
fn constructor_without_args() {
    let new = func("new", vec![], None, None);
    let lines = render_function(&new, Some("Mesh")).unwrap();
    assert_eq!(lines[0], "def __init__(self):");
}

#[test]
fn constructor_return_is_never_translated() {
    // An untranslatable return would fail anywhere else.
    let new = func("new", vec![], Some(prim("char")), None);
    let lines = render_function(&new, Some("Mesh")).unwrap();
    assert_eq!(lines[0], "def __init__(self):");
}

#[test]
fn getter_becomes_property() {
    let getter = func(
        "py_get_vertices",
        vec![("self", self_ref())],
        Some(ty("Vec", vec![prim("f64")])),
        None,
    );

    assert_eq!(
        render(&getter, Some("Mesh")),
        indoc! {r#"
            @property
            def vertices(self) -> list[float]:
                """ Undocumented function """
        "#}
    );
}

#[test]
fn binding_prefix_is_stripped_without_marker() {
    let check = func("py_check", vec![("self", self_ref())], Some(prim("usize")), None);
    let lines = render_function(&check, Some("Mesh")).unwrap();
    assert_eq!(lines[0], "def check(self) -> int:");
    assert!(!lines.iter().any(|l| l == "@property"));
}

#[test]
fn plain_names_are_unchanged() {
    let area = func("area", vec![("self", self_ref())], Some(prim("f64")), None);
    let lines = render_function(&area, Some("Mesh")).unwrap();
    assert_eq!(lines[0], "def area(self) -> float:");
}

#[test]
fn self_is_never_annotated() {
    let copy = func(
        "copy",
        vec![("self", self_ref())],
        Some(TypeExpr::generic("Self")),
        None,
    );
    let lines = render_function(&copy, Some("Mesh")).unwrap();
    assert_eq!(lines[0], "def copy(self) -> Mesh:");
}

#[test]
fn free_function_with_docs() {
    let load = func(
        "py_load_mesh",
        vec![
            ("file_data", TypeExpr::borrowed(TypeExpr::slice(prim("u8")))),
            ("file_type", string()),
        ],
        Some(ty("Result", vec![ty("PyTrimesh", vec![])])),
        Some("(pyfunc) Load a mesh from a file, doing no initial processing.\n\nSupports `stl` and `obj`.  "),
    );

    assert_eq!(
        render(&load, None),
        indoc! {r#"
            def load_mesh(file_data: bytes, file_type: str) -> PyTrimesh:
                """
                Load a mesh from a file, doing no initial processing.

                Supports `stl` and `obj`.
                """
        "#}
    );
}

#[test]
fn method_docs_strip_marker() {
    let new = func(
        "new",
        vec![("vertices", ty("PyReadonlyArray2", vec![prim("f64")]))],
        None,
        Some("(pyfunc) Create a new Trimesh."),
    );

    assert_eq!(
        render(&new, Some("PyTrimesh")),
        indoc! {r#"
            def __init__(self, vertices: NDArray[float64]):
                """
                Create a new Trimesh.
                """
        "#}
    );
}

#[test]
fn argument_errors_propagate() {
    let bad = func("py_bad", vec![("x", TypeExpr::slice(prim("f32")))], None, None);
    let err = render_function(&bad, None).unwrap_err();
    assert_eq!(err, SchemaError::UnsupportedSlice("f32".into()));
}

#[test]
fn return_errors_propagate() {
    let bad = func("py_bad", vec![], Some(prim("char")), None);
    let err = render_function(&bad, None).unwrap_err();
    assert_eq!(err, SchemaError::UnknownPrimitive("char".into()));
}

#[test]
fn marker_only_docs_give_empty_docstring() {
    let version = func("py_version", vec![], Some(string()), Some("(pyfunc)"));
    assert_eq!(
        render(&version, None),
        indoc! {r#"
            def version() -> str:
                """

                """
        "#}
    );
}
