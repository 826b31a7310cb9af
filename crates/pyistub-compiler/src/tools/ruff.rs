use std::path::Path;
use std::process::Command;

use super::{Formatter, run};
use crate::ToolError;

/// Format, lint-fix, then format again, stopping at the first failure.
#[derive(Clone, Debug)]
pub struct Ruff {
    program: String,
}

impl Default for Ruff {
    fn default() -> Self {
        Self {
            program: "ruff".to_string(),
        }
    }
}

impl Ruff {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub(super) fn passes(&self, path: &Path) -> [Command; 3] {
        let step = |args: &[&str]| {
            let mut cmd = Command::new(&self.program);
            cmd.args(args).arg(path);
            cmd
        };
        [
            step(&["format"]),
            step(&["check", "--fix"]),
            step(&["format"]),
        ]
    }
}

impl Formatter for Ruff {
    fn format(&self, path: &Path) -> Result<(), ToolError> {
        for mut cmd in self.passes(path) {
            run(&mut cmd)?;
        }
        Ok(())
    }
}
