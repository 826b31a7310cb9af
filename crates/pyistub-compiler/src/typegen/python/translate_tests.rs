use pyistub_core::TypeExpr;

use super::translate;
use crate::SchemaError;
use crate::test_utils::{prim, string, ty};

fn py(expr: TypeExpr) -> String {
    translate(&expr, None).unwrap()
}

#[test]
fn primitives() {
    assert_eq!(py(prim("f32")), "float");
    assert_eq!(py(prim("f64")), "float");
    assert_eq!(py(prim("i8")), "int");
    assert_eq!(py(prim("u64")), "int");
    assert_eq!(py(prim("usize")), "int");
    assert_eq!(py(prim("bool")), "bool");
}

#[test]
fn unknown_primitive_is_an_error() {
    let err = translate(&prim("char"), None).unwrap_err();
    assert_eq!(err, SchemaError::UnknownPrimitive("char".into()));

    // Nested anywhere in the tree
    let nested = ty("Vec", vec![ty("Option", vec![prim("str")])]);
    let err = translate(&nested, None).unwrap_err();
    assert_eq!(err, SchemaError::UnknownPrimitive("str".into()));
}

#[test]
fn self_resolves_to_enclosing_class() {
    let expr = TypeExpr::generic("Self");
    assert_eq!(translate(&expr, Some("Mesh")).unwrap(), "Mesh");
    assert_eq!(translate(&expr, Some("crate::mesh::Mesh")).unwrap(), "Mesh");
    assert_eq!(translate(&expr, None).unwrap(), "Self");
}

#[test]
fn other_generics_pass_through() {
    assert_eq!(translate(&TypeExpr::generic("T"), Some("Mesh")).unwrap(), "T");
}

#[test]
fn optional_appends_none() {
    assert_eq!(py(ty("Option", vec![prim("f64")])), "float | None");
    assert_eq!(
        translate(&ty("Option", vec![TypeExpr::generic("Self")]), Some("Mesh")).unwrap(),
        "Mesh | None"
    );
}

#[test]
fn result_keeps_success_type_only() {
    assert_eq!(py(ty("Result", vec![string(), ty("PyErr", vec![])])), "str");
    assert_eq!(py(ty("anyhow::Result", vec![prim("usize")])), "int");
    assert_eq!(py(ty("PyResult", vec![prim("bool")])), "bool");
}

#[test]
fn vec_and_array_become_lists() {
    assert_eq!(py(ty("Vec", vec![prim("u32")])), "list[int]");
    assert_eq!(py(TypeExpr::array(prim("f64"))), "list[float]");
    assert_eq!(
        py(ty("Vec", vec![TypeExpr::array(prim("f32"))])),
        "list[list[float]]"
    );
}

#[test]
fn tuples() {
    let pair = TypeExpr::Tuple(vec![prim("usize"), string()]);
    assert_eq!(py(pair), "tuple[int, str]");

    let triple = TypeExpr::Tuple(vec![prim("f64"), prim("f64"), prim("f64")]);
    assert_eq!(py(triple), "tuple[float, float, float]");
}

#[test]
fn tuple_elements_see_enclosing_class() {
    let pair = TypeExpr::Tuple(vec![TypeExpr::generic("Self"), prim("bool")]);
    assert_eq!(translate(&pair, Some("Mesh")).unwrap(), "tuple[Mesh, bool]");
}

#[test]
fn unit_is_none() {
    assert_eq!(py(TypeExpr::Tuple(vec![])), "None");
    assert_eq!(py(ty("Result", vec![TypeExpr::Tuple(vec![])])), "None");
}

#[test]
fn numpy_array_handles() {
    assert_eq!(py(ty("PyReadonlyArray2", vec![prim("f64")])), "NDArray[float64]");
    assert_eq!(py(ty("PyReadonlyArray1", vec![prim("f32")])), "NDArray[float32]");
    assert_eq!(py(ty("PyReadonlyArrayDyn", vec![prim("i64")])), "NDArray[int64]");
}

#[test]
fn numpy_array_handle_rejects_other_elements() {
    let err = translate(&ty("PyReadonlyArray2", vec![prim("u32")]), None).unwrap_err();
    assert_eq!(
        err,
        SchemaError::UnsupportedArrayElement {
            container: "PyReadonlyArray2".into(),
            element: "u32".into(),
        }
    );

    let err = translate(&ty("PyReadonlyArray1", vec![string()]), None).unwrap_err();
    assert!(matches!(err, SchemaError::UnsupportedArrayElement { .. }));
}

#[test]
fn renames_and_strips_module_paths() {
    assert_eq!(py(string()), "str");
    assert_eq!(py(ty("std::string::String", vec![])), "str");
    assert_eq!(py(ty("Cow", vec![TypeExpr::slice(prim("u8"))])), "bytes");
    assert_eq!(py(ty("crate::mesh::PyTrimesh", vec![])), "PyTrimesh");
    assert_eq!(py(ty("Trimesh", vec![])), "Trimesh");
}

#[test]
fn borrowed_refs_are_transparent() {
    assert_eq!(py(TypeExpr::borrowed(string())), "str");
    assert_eq!(
        translate(&TypeExpr::borrowed(TypeExpr::generic("Self")), Some("Mesh")).unwrap(),
        "Mesh"
    );
}

#[test]
fn byte_slices_are_bytes() {
    assert_eq!(py(TypeExpr::slice(prim("u8"))), "bytes");
    assert_eq!(py(TypeExpr::borrowed(TypeExpr::slice(prim("u8")))), "bytes");
}

#[test]
fn other_slices_are_errors() {
    let err = translate(&TypeExpr::slice(prim("f64")), None).unwrap_err();
    assert_eq!(err, SchemaError::UnsupportedSlice("f64".into()));
}

#[test]
fn unknown_shapes_degrade_to_any() {
    assert_eq!(py(TypeExpr::Unknown("dyn_trait".into())), "Any");
    assert_eq!(
        py(ty("Option", vec![TypeExpr::Unknown("impl_trait".into())])),
        "Any | None"
    );
}

#[test]
fn wrapper_without_argument_is_an_error() {
    let err = translate(&ty("Option", vec![]), None).unwrap_err();
    assert_eq!(err, SchemaError::MissingTypeArgument("Option".into()));
}
