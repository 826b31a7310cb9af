//! Dispatch logic: extract params from `ArgMatches` and convert to command args.

use std::path::PathBuf;

use clap::ArgMatches;

use crate::commands::generate::GenerateArgs;

pub struct GenerateParams {
    pub crate_dir: PathBuf,
    pub output: Option<PathBuf>,
    pub verbose: u8,
}

impl GenerateParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            crate_dir: m
                .get_one::<PathBuf>("crate_dir")
                .cloned()
                .unwrap_or_else(|| PathBuf::from(".")),
            output: m.get_one::<PathBuf>("output").cloned(),
            verbose: m.get_count("verbose"),
        }
    }
}

impl From<GenerateParams> for GenerateArgs {
    fn from(p: GenerateParams) -> Self {
        let output = p
            .output
            .unwrap_or_else(|| p.crate_dir.join(GenerateArgs::DEFAULT_OUTPUT));
        Self {
            crate_dir: p.crate_dir,
            output,
        }
    }
}
