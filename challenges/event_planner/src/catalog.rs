use std::fmt;
use std::num::ParseIntError;
use std::path::{Path, PathBuf};

use log::{debug, info, warn};
use thiserror::Error;

use crate::Scanner;

/// Which resource budgets a catalog is constrained by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ConstraintMode {
    /// Only the time budget applies; activity costs are carried but never checked.
    #[value(name = "single")]
    TimeOnly,
    /// Both the time and the money budget apply.
    #[value(name = "dual")]
    TimeAndBudget,
}

impl ConstraintMode {
    pub fn dir_name(&self) -> &'static str {
        match self {
            ConstraintMode::TimeOnly => "single",
            ConstraintMode::TimeAndBudget => "dual",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Activity {
    pub name: String,
    pub time: u32,
    pub cost: u32,
    pub enjoyment: u32,
}

impl Activity {
    pub fn new(name: impl Into<String>, time: u32, cost: u32, enjoyment: u32) -> Self {
        Self {
            name: name.into(),
            time,
            cost,
            enjoyment,
        }
    }
}

impl fmt::Display for Activity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({} hours, £{}, enjoyment {})",
            self.name, self.time, self.cost, self.enjoyment
        )
    }
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("input file not found: {}", path.display())]
    NotFound { path: PathBuf },
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to read input: {0}")]
    Read(#[from] std::io::Error),
    #[error("missing {what}")]
    MissingHeader { what: &'static str },
    #[error("line {line}: invalid {field} {value:?}: {source}")]
    InvalidNumber {
        line: usize,
        field: &'static str,
        value: String,
        #[source]
        source: ParseIntError,
    },
}

/// The candidate activities and the budgets for one optimisation run. Read-only once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    activities: Vec<Activity>,
    max_time: u32,
    max_budget: Option<u32>,
}

impl Catalog {
    /// `max_budget == None` makes this a time-only catalog.
    pub fn new(activities: Vec<Activity>, max_time: u32, max_budget: Option<u32>) -> Self {
        Self {
            activities,
            max_time,
            max_budget,
        }
    }

    pub fn activities(&self) -> &[Activity] {
        &self.activities
    }

    pub fn len(&self) -> usize {
        self.activities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.activities.is_empty()
    }

    pub fn max_time(&self) -> u32 {
        self.max_time
    }

    pub fn max_budget(&self) -> Option<u32> {
        self.max_budget
    }

    pub fn mode(&self) -> ConstraintMode {
        match self.max_budget {
            Some(_) => ConstraintMode::TimeAndBudget,
            None => ConstraintMode::TimeOnly,
        }
    }

    /// Whether the given aggregate consumption stays within every active budget.
    pub fn fits(&self, time: u64, cost: u64) -> bool {
        time <= self.max_time as u64
            && self
                .max_budget
                .is_none_or(|budget| cost <= budget as u64)
    }

    pub fn load(path: &Path, mode: ConstraintMode) -> Result<Self, LoadError> {
        let mut scanner = Scanner::open(path).map_err(|source| match source.kind() {
            std::io::ErrorKind::NotFound => LoadError::NotFound {
                path: path.to_path_buf(),
            },
            _ => LoadError::Io {
                path: path.to_path_buf(),
                source,
            },
        })?;
        let catalog = Self::read(&mut scanner, mode).map_err(|e| match e {
            LoadError::Read(source) => LoadError::Io {
                path: path.to_path_buf(),
                source,
            },
            other => other,
        })?;
        info!(
            "loaded {} activities from {} (max time {}, max budget {:?})",
            catalog.len(),
            path.display(),
            catalog.max_time,
            catalog.max_budget
        );
        Ok(catalog)
    }

    /// Parse a catalog: a count line, a `max_time max_budget` line, then one
    /// `name time cost enjoyment` line per activity. Short lines are skipped with a warning.
    pub fn read(input: &mut Scanner, mode: ConstraintMode) -> Result<Self, LoadError> {
        let count_line = input.next_line()?.ok_or(LoadError::MissingHeader {
            what: "activity count",
        })?;
        let count: usize = parse_field(&count_line, "activity count", input.line_no())?;

        let constraints = input.next_line()?.ok_or(LoadError::MissingHeader {
            what: "constraint line",
        })?;
        let mut tokens = constraints.split_whitespace();
        let max_time: u32 = match tokens.next() {
            Some(token) => parse_field(token, "max time", input.line_no())?,
            None => return Err(LoadError::MissingHeader { what: "max time" }),
        };
        let max_budget = match (mode, tokens.next()) {
            (ConstraintMode::TimeOnly, _) => None,
            (ConstraintMode::TimeAndBudget, Some(token)) => {
                Some(parse_field(token, "max budget", input.line_no())?)
            }
            (ConstraintMode::TimeAndBudget, None) => {
                return Err(LoadError::MissingHeader { what: "max budget" });
            }
        };

        let mut activities = Vec::with_capacity(count);
        for _ in 0..count {
            let Some(line) = input.next_line()? else {
                debug!(
                    "input ended after {} of {} activity lines",
                    input.line_no().saturating_sub(2),
                    count
                );
                break;
            };
            if line.is_empty() {
                continue;
            }
            let parts: Vec<&str> = line.split_whitespace().collect();
            let [name, time, cost, enjoyment, ..] = parts[..] else {
                warn!("Skipping invalid line {}: {}", input.line_no(), line);
                continue;
            };
            let line_no = input.line_no();
            activities.push(Activity {
                name: name.to_string(),
                time: parse_field(time, "time", line_no)?,
                cost: parse_field(cost, "cost", line_no)?,
                enjoyment: parse_field(enjoyment, "enjoyment", line_no)?,
            });
        }

        Ok(Catalog::new(activities, max_time, max_budget))
    }
}

fn parse_field<T>(token: &str, field: &'static str, line: usize) -> Result<T, LoadError>
where
    T: std::str::FromStr<Err = ParseIntError>,
{
    token.parse().map_err(|source| LoadError::InvalidNumber {
        line,
        field,
        value: token.to_string(),
        source,
    })
}
