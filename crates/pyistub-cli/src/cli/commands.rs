//! Command builder for the CLI.

use clap::Command;

use super::args::*;

/// Build the complete CLI.
pub fn build_cli() -> Command {
    Command::new("pyistub")
        .about("Generate a Python `.pyi` stub from a pyo3 binding crate's rustdoc")
        .version(env!("CARGO_PKG_VERSION"))
        .after_help(
            r#"EXAMPLES:
  pyistub                          # stub for the crate in the current directory
  pyistub crates/rmesh_python      # writes crates/rmesh_python/__init__.pyi
  pyistub . -o python/rmesh.pyi    # custom output path
  pyistub -v                       # debug logging (or set PYISTUB_LOG)

Requires a nightly toolchain for `cargo rustdoc` JSON output and `ruff` on PATH."#,
        )
        .arg(crate_dir_arg())
        .arg(output_arg())
        .arg(verbose_arg())
}
