//! Function -> `def` block rendering.

use super::translate;
use crate::markers::strip_marker;
use crate::{FuncArg, FuncInfo, SchemaError};

/// Rust name of a `#[new]` constructor.
const CONSTRUCTOR_NAME: &str = "new";
/// Python initializer name.
const INIT_NAME: &str = "__init__";
/// Prefix of `#[getter]` methods rendered as properties.
const PROPERTY_PREFIX: &str = "py_get_";
/// Prefix binding crates use to avoid clashing with Rust names.
const BINDING_PREFIX: &str = "py_";

const SELF_ARG: &str = "self";
const PROPERTY_DECORATOR: &str = "@property";
const UNDOCUMENTED: &str = "\"\"\" Undocumented function \"\"\"";
const DOC_QUOTES: &str = "\"\"\"";

pub(super) const INDENT: &str = "    ";

/// Render one function as stub lines, without any class indentation.
///
/// ```text
/// @property
/// def vertices(self) -> NDArray[float64]:
///     """
///     Vertex positions.
///     """
/// ```
pub fn render_function(
    func: &FuncInfo,
    class_name: Option<&str>,
) -> Result<Vec<String>, SchemaError> {
    let mut lines = Vec::new();
    let mut params = func
        .args
        .iter()
        .map(|arg| render_arg(arg, class_name))
        .collect::<Result<Vec<_>, _>>()?;

    let is_init = func.name == CONSTRUCTOR_NAME;
    let name = if is_init {
        params.insert(0, SELF_ARG.to_string());
        INIT_NAME
    } else if let Some(stripped) = func.name.strip_prefix(PROPERTY_PREFIX) {
        lines.push(PROPERTY_DECORATOR.to_string());
        stripped
    } else if let Some(stripped) = func.name.strip_prefix(BINDING_PREFIX) {
        stripped
    } else {
        func.name.as_str()
    };

    let mut signature = format!("def {name}({})", params.join(", "));
    // Initializers never annotate a return, whatever the Rust side returns.
    if let (false, Some(ret)) = (is_init, &func.ret) {
        signature.push_str(" -> ");
        signature.push_str(&translate(ret, class_name)?);
    }
    signature.push(':');
    lines.push(signature);

    lines.extend(render_docstring(func.doc.as_deref()));
    Ok(lines)
}

fn render_arg(arg: &FuncArg, class_name: Option<&str>) -> Result<String, SchemaError> {
    if arg.name == SELF_ARG {
        return Ok(SELF_ARG.to_string());
    }
    Ok(format!("{}: {}", arg.name, translate(&arg.ty, class_name)?))
}

fn render_docstring(doc: Option<&str>) -> Vec<String> {
    let Some(doc) = doc else {
        return vec![format!("{INDENT}{UNDOCUMENTED}")];
    };

    let body = strip_marker(doc).trim();
    let mut lines = vec![format!("{INDENT}{DOC_QUOTES}")];
    lines.extend(body.split('\n').map(|line| {
        let line = line.trim_end();
        if line.is_empty() {
            String::new()
        } else {
            format!("{INDENT}{line}")
        }
    }));
    lines.push(format!("{INDENT}{DOC_QUOTES}"));
    lines
}
