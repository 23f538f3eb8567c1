use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

pub mod catalog;
pub mod harness;
pub mod menu;
pub mod report;
pub mod solvers;

/// Line reader shared by the catalog loader and the interactive menu.
pub struct Scanner {
    reader: Box<dyn BufRead>,
    line_no: usize,
}

impl Scanner {
    pub fn new(reader: impl BufRead + 'static) -> Self {
        Self {
            reader: Box::new(reader),
            line_no: 0,
        }
    }

    pub fn open(path: &Path) -> std::io::Result<Self> {
        let file = File::open(path)?;
        Ok(Self::new(BufReader::new(file)))
    }

    /// Next line with surrounding whitespace trimmed, `None` once the input is exhausted.
    pub fn next_line(&mut self) -> std::io::Result<Option<String>> {
        let mut input = String::new();
        if self.reader.read_line(&mut input)? == 0 {
            return Ok(None);
        }
        self.line_no += 1;
        Ok(Some(input.trim().to_string()))
    }

    /// 1-based number of the line last returned by `next_line`.
    pub fn line_no(&self) -> usize {
        self.line_no
    }
}

/// Report output buffer. Reports are rendered in memory and flushed in one write.
pub struct Writer(Vec<u8>);

impl Writer {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn print<T: std::fmt::Display>(&mut self, value: T) {
        // writing into a Vec<u8> cannot fail
        let _ = write!(self.0, "{}", value);
    }

    pub fn println<T: std::fmt::Display>(&mut self, value: T) {
        let _ = writeln!(self.0, "{}", value);
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn into_string(self) -> Result<String, std::string::FromUtf8Error> {
        String::from_utf8(self.0)
    }
}

impl Default for Writer {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture runner: every `data/<mode>/<n>.in` catalog is paired with a `<n>.out` file holding
/// the optimal enjoyment for it.
pub mod testing {
    use std::fs;
    use std::path::{Path, PathBuf};

    use crate::catalog::{Catalog, ConstraintMode};
    use crate::harness::{self, Comparison, HarnessOptions};

    /// Discover all fixture numbers for a given constraint mode
    pub fn discover_fixtures(data_dir: &Path, mode: ConstraintMode) -> Vec<usize> {
        let fixture_dir = data_dir.join(mode.dir_name());

        let mut fixture_numbers = Vec::new();
        if let Ok(entries) = fs::read_dir(&fixture_dir) {
            for entry in entries.flatten() {
                if let Some(file_name) = entry.file_name().to_str() {
                    if let Some(num_str) = file_name.strip_suffix(".in") {
                        if let Ok(num) = num_str.parse::<usize>() {
                            fixture_numbers.push(num);
                        }
                    }
                }
            }
        }

        fixture_numbers.sort_unstable();
        fixture_numbers
    }

    /// Run every solver on a single fixture and return (expected, catalog, comparison).
    pub fn run_fixture(
        data_dir: &Path,
        mode: ConstraintMode,
        fixture: usize,
    ) -> Result<(u64, Catalog, Comparison), String> {
        let fixture_dir: PathBuf = data_dir.join(mode.dir_name());
        let in_file = fixture_dir.join(format!("{}.in", fixture));
        let out_file = fixture_dir.join(format!("{}.out", fixture));

        let catalog = Catalog::load(&in_file, mode).map_err(|e| e.to_string())?;
        let expected = fs::read_to_string(&out_file)
            .map_err(|e| format!("Failed to read {}: {}", out_file.display(), e))?;
        let expected: u64 = expected
            .trim()
            .parse()
            .map_err(|e| format!("Bad expected value in {}: {}", out_file.display(), e))?;

        let comparison = harness::compare(&catalog, &HarnessOptions::default());
        Ok((expected, catalog, comparison))
    }

    /// Check a comparison against the expected optimum, returning one message per violation.
    pub fn check(expected: u64, catalog: &Catalog, comparison: &Comparison) -> Vec<String> {
        let mut failures = Vec::new();
        for run in comparison.completed() {
            let enjoyment = run.selection.enjoyment;
            if !run.selection.is_feasible(catalog) {
                failures.push(format!("{} returned an infeasible selection", run.label));
            }
            if run.kind.is_exact() && enjoyment != expected {
                failures.push(format!(
                    "{} expected {} enjoyment, got {}",
                    run.label, expected, enjoyment
                ));
            } else if enjoyment > expected {
                failures.push(format!(
                    "{} beat the optimum: {} > {}",
                    run.label, enjoyment, expected
                ));
            }
        }
        failures
    }

    fn check_fixture(data_dir: &Path, mode: ConstraintMode, fixture: usize) -> Vec<String> {
        match run_fixture(data_dir, mode, fixture) {
            Ok((expected, catalog, comparison)) => check(expected, &catalog, &comparison),
            Err(e) => vec![e],
        }
    }

    /// Verify all fixtures for a mode
    pub fn verify_all_fixtures(data_dir: &Path, mode: ConstraintMode) {
        let fixtures = discover_fixtures(data_dir, mode);
        assert!(
            !fixtures.is_empty(),
            "No fixtures found under {}/{}",
            data_dir.display(),
            mode.dir_name()
        );

        for fixture in fixtures {
            let failures = check_fixture(data_dir, mode, fixture);
            assert!(
                failures.is_empty(),
                "Fixture {}/{} failed:\n{}",
                mode.dir_name(),
                fixture,
                failures.join("\n")
            );
        }
    }

    /// Run all fixtures and print results (for CLI usage). Returns the number of failures.
    pub fn run_all_fixtures(data_dir: &Path, mode: ConstraintMode) -> usize {
        let fixtures = discover_fixtures(data_dir, mode);
        if fixtures.is_empty() {
            println!(
                "No fixtures found under {}/{}",
                data_dir.display(),
                mode.dir_name()
            );
            return 0;
        }

        println!(
            "Running {} fixtures for {}...",
            fixtures.len(),
            mode.dir_name()
        );

        let mut passed = 0;
        let mut failed = 0;
        for fixture in &fixtures {
            let failures = check_fixture(data_dir, mode, *fixture);
            if failures.is_empty() {
                println!("✓ Fixture {}: PASSED", fixture);
                passed += 1;
            } else {
                println!("✗ Fixture {}: FAILED", fixture);
                for failure in failures {
                    println!("  {}", failure);
                }
                failed += 1;
            }
        }

        println!("\nResults: {} passed, {} failed", passed, failed);
        failed
    }
}
