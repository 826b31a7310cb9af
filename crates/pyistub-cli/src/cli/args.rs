//! Argument builders for the CLI.
//!
//! Each function returns a `clap::Arg` that is composed in `commands.rs`.

use std::path::PathBuf;

use clap::{Arg, ArgAction, value_parser};

/// Binding crate directory (positional).
pub fn crate_dir_arg() -> Arg {
    Arg::new("crate_dir")
        .value_name("CRATE_DIR")
        .value_parser(value_parser!(PathBuf))
        .default_value(".")
        .help("Directory of the binding crate (contains Cargo.toml)")
}

/// Output stub path (-o/--output).
pub fn output_arg() -> Arg {
    Arg::new("output")
        .short('o')
        .long("output")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .help("Where to write the stub [default: <CRATE_DIR>/__init__.pyi]")
}

/// Verbosity (-v, -vv).
pub fn verbose_arg() -> Arg {
    Arg::new("verbose")
        .short('v')
        .long("verbose")
        .action(ArgAction::Count)
        .help("Verbosity level (-v for debug, -vv for trace)")
}
