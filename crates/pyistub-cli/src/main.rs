mod cli;
mod commands;

use cli::{GenerateParams, build_cli};

fn main() {
    let matches = build_cli().get_matches();
    let params = GenerateParams::from_matches(&matches);

    init_logging(params.verbose);
    commands::generate::run(params.into());
}

/// `-v` raises the default `info` level; `PYISTUB_LOG` overrides both.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => log::LevelFilter::Info,
        1 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    pretty_env_logger::formatted_builder()
        .filter_level(level)
        .parse_env("PYISTUB_LOG")
        .init();
}
