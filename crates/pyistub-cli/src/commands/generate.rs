use std::path::PathBuf;

use pyistub_compiler::tools::{CargoRustdoc, Ruff};
use pyistub_compiler::{Error, Pipeline};

use super::layout::CrateLayout;

pub struct GenerateArgs {
    pub crate_dir: PathBuf,
    pub output: PathBuf,
}

impl GenerateArgs {
    pub const DEFAULT_OUTPUT: &'static str = "__init__.pyi";
}

pub fn run(args: GenerateArgs) {
    let layout = match CrateLayout::discover(&args.crate_dir) {
        Ok(layout) => layout,
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    };
    log::info!(
        "generating stub for `{}` in {}",
        layout.module,
        layout.crate_dir.display()
    );
    log::debug!("target directory: {}", layout.target_dir.display());

    let generator = CargoRustdoc::new(&layout.crate_dir, &layout.target_dir);
    let pipeline = Pipeline::new(generator, Ruff::default(), &args.output);

    match pipeline.run(&layout.module) {
        Ok(report) => {
            if !report.skipped.is_empty() {
                log::warn!(
                    "{} documented item(s) had no recognized marker and were skipped",
                    report.skipped.len()
                );
            }
            log::info!(
                "{} class(es), {} function(s) -> {}",
                report.classes,
                report.functions,
                report.output.display()
            );
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(exit_code(&e));
        }
    }
}

/// Formatter failures leave a usable stub behind, so they get their own code.
pub fn exit_code(err: &Error) -> i32 {
    match err {
        Error::Format(_) => 2,
        _ => 1,
    }
}
