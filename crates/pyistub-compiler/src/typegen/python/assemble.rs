//! Group rendering and final stub assembly.

use pyistub_core::utils::bare_name;

use super::render::{INDENT, render_function};
use super::tables::PREAMBLE;
use crate::{ClassGroups, FuncInfo, GroupKey, SchemaError};

/// Body of a class with no exported methods.
const EMPTY_BODY: &str = "...";

/// Assemble the complete stub file.
///
/// Group blocks are sorted by their rendered text, so the output depends
/// only on the set of functions, not on the order they were discovered in.
pub fn assemble(groups: &ClassGroups) -> Result<String, SchemaError> {
    let mut blocks = groups
        .iter()
        .map(|(key, functions)| render_group(key, functions))
        .collect::<Result<Vec<_>, _>>()?;
    blocks.sort();

    let mut output = PREAMBLE.join("\n");
    output.push_str("\n\n");
    output.push_str(&blocks.join("\n"));
    Ok(output)
}

/// Render one group: a `class` declaration with indented methods, or the
/// bare module-level functions.
pub fn render_group(key: &GroupKey, functions: &[FuncInfo]) -> Result<String, SchemaError> {
    let class_name = key.class_name();
    let indent = if class_name.is_some() { INDENT } else { "" };

    let mut bodies = functions
        .iter()
        .map(|func| {
            let lines = render_function(func, class_name)?;
            Ok(indent_block(&lines, indent))
        })
        .collect::<Result<Vec<_>, SchemaError>>()?;
    bodies.sort();

    let mut output = match class_name {
        Some(name) => format!("class {}:\n", bare_name(name)),
        None => String::new(),
    };
    if class_name.is_some() && bodies.is_empty() {
        output.push_str(INDENT);
        output.push_str(EMPTY_BODY);
        output.push('\n');
    }
    output.push_str(&bodies.join("\n"));
    Ok(output)
}

/// Join lines with `indent` applied, ending in a newline.
fn indent_block(lines: &[String], indent: &str) -> String {
    let mut block = String::new();
    for line in lines {
        if !line.is_empty() {
            block.push_str(indent);
            block.push_str(line);
        }
        block.push('\n');
    }
    block
}
