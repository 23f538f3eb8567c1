use std::io::Write;
use std::path::{Path, PathBuf};

use log::error;

use crate::catalog::{Catalog, ConstraintMode, LoadError};
use crate::harness::{self, HarnessOptions};
use crate::{Scanner, Writer, report};

const PROMPT: &str =
    "Please, enter the input size (small, medium, large) or in order to exit press 'e': ";

#[derive(Debug, PartialEq)]
enum Choice {
    Exit,
    Size(&'static str),
    Invalid,
}

fn parse_choice(line: &str) -> Choice {
    match line.to_lowercase().as_str() {
        "e" => Choice::Exit,
        "small" => Choice::Size("small"),
        "medium" => Choice::Size("medium"),
        "large" => Choice::Size("large"),
        _ => Choice::Invalid,
    }
}

/// Interactive loop: pick a dataset size, compare the solvers on it, repeat until `e`.
pub struct Menu {
    data_dir: PathBuf,
    mode: ConstraintMode,
    options: HarnessOptions,
}

impl Menu {
    pub fn new(data_dir: impl Into<PathBuf>, mode: ConstraintMode, options: HarnessOptions) -> Self {
        Self {
            data_dir: data_dir.into(),
            mode,
            options,
        }
    }

    pub fn input_path(&self, size: &str) -> PathBuf {
        self.data_dir.join(format!("input_{}.txt", size))
    }

    /// Runs until the user exits or the input ends. Only I/O failures on `input`/`out` end
    /// the loop early; a dataset that cannot be loaded is reported and the prompt repeats.
    pub fn run(&self, input: &mut Scanner, out: &mut impl Write) -> std::io::Result<()> {
        loop {
            write!(out, "{}", PROMPT)?;
            out.flush()?;

            let Some(line) = input.next_line()? else {
                writeln!(out)?;
                return Ok(());
            };

            match parse_choice(&line) {
                Choice::Exit => return Ok(()),
                Choice::Invalid => {
                    writeln!(out, "Incorrect input, please choose: small, medium, or large.")?
                }
                Choice::Size(size) => self.compare_dataset(&self.input_path(size), out)?,
            }
        }
    }

    fn compare_dataset(&self, path: &Path, out: &mut impl Write) -> std::io::Result<()> {
        let catalog = match Catalog::load(path, self.mode) {
            Ok(catalog) => catalog,
            Err(LoadError::NotFound { path }) => {
                return writeln!(out, "Input file not found: {}", path.display());
            }
            Err(e) => {
                error!("could not load {}: {}", path.display(), e);
                return writeln!(out, "Could not load {}: {}", path.display(), e);
            }
        };

        let comparison = harness::compare(&catalog, &self.options);
        let source = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        let mut report = Writer::new();
        report::render(&mut report, &source, &catalog, &comparison);
        out.write_all(report.as_bytes())
    }
}
