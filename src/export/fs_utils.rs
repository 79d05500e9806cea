// src/export/fs_utils.rs

use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, warning};
use std::io::{self, IsTerminal, Write};
use std::path::Path;

/// Kind of file a command is about to write, used in the overwrite prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputKind {
    Dashboard,
    Intervals,
}

impl OutputKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputKind::Dashboard => "dashboard",
            OutputKind::Intervals => "interval export",
        }
    }
}

/// `y`/`yes`/`j`/`ja`, any case. Everything else, including an empty line, is no.
pub fn overwrite_confirmed(answer: &str) -> bool {
    matches!(
        answer.trim().to_ascii_lowercase().as_str(),
        "y" | "yes" | "j" | "ja"
    )
}

/// Gate for every writer: a new path or `force` passes, an existing file needs
/// a confirmation on an interactive stdin and is refused otherwise.
pub(crate) fn ensure_writable(path: &Path, kind: OutputKind, force: bool) -> AppResult<()> {
    if !path.exists() || force {
        return Ok(());
    }

    warning(format!(
        "The {} file '{}' already exists.",
        kind.as_str(),
        path.display()
    ));

    let stdin = io::stdin();
    if !stdin.is_terminal() {
        return Err(AppError::Export(format!(
            "{} not written, use --force to overwrite '{}'",
            kind.as_str(),
            path.display()
        )));
    }

    print!("Overwrite? [y/N]: ");
    io::stdout().flush()?;

    let mut answer = String::new();
    stdin.read_line(&mut answer)?;

    if overwrite_confirmed(&answer) {
        info(format!("Overwriting {}.", path.display()));
        Ok(())
    } else {
        Err(AppError::Export(format!(
            "{} not written, '{}' kept",
            kind.as_str(),
            path.display()
        )))
    }
}
