use std::time::{Duration, Instant};

use log::{debug, warn};

use crate::catalog::Catalog;
use crate::solvers::{Selection, SolverKind, dynamic};

/// Which solvers to run and the input bounds beyond which a solver is skipped.
#[derive(Debug, Clone)]
pub struct HarnessOptions {
    pub solvers: Vec<SolverKind>,
    /// Skip the exhaustive solver for catalogs with more activities than this.
    pub max_exhaustive_items: Option<usize>,
    /// Skip the DP solver when its table would need more cells than this.
    pub max_table_cells: Option<u128>,
}

impl Default for HarnessOptions {
    fn default() -> Self {
        Self {
            solvers: SolverKind::ALL.to_vec(),
            max_exhaustive_items: None,
            max_table_cells: None,
        }
    }
}

#[derive(Debug, Clone)]
pub enum Outcome {
    Completed {
        selection: Selection,
        elapsed: Duration,
    },
    Skipped {
        reason: String,
    },
}

#[derive(Debug, Clone)]
pub struct SolverRun {
    pub kind: SolverKind,
    pub label: &'static str,
    pub outcome: Outcome,
}

/// A completed run, borrowed out of a `SolverRun`.
pub struct CompletedRun<'a> {
    pub kind: SolverKind,
    pub label: &'static str,
    pub selection: &'a Selection,
    pub elapsed: Duration,
}

/// Results of every requested solver on one catalog, in the order they ran.
#[derive(Debug, Clone)]
pub struct Comparison {
    pub runs: Vec<SolverRun>,
}

impl Comparison {
    pub fn completed(&self) -> impl Iterator<Item = CompletedRun<'_>> {
        self.runs.iter().filter_map(|run| match &run.outcome {
            Outcome::Completed { selection, elapsed } => Some(CompletedRun {
                kind: run.kind,
                label: run.label,
                selection,
                elapsed: *elapsed,
            }),
            Outcome::Skipped { .. } => None,
        })
    }

    fn enjoyment_of(&self, kind: SolverKind) -> Option<u64> {
        self.completed()
            .find(|run| run.kind == kind)
            .map(|run| run.selection.enjoyment)
    }

    /// Optimal enjoyment, taken from the DP run or else the exhaustive run.
    pub fn optimal(&self) -> Option<u64> {
        self.enjoyment_of(SolverKind::Dynamic)
            .or_else(|| self.enjoyment_of(SolverKind::Exhaustive))
    }

    /// Greedy enjoyment as a percentage of the optimum. `None` when either is unavailable or
    /// the optimum is zero.
    pub fn greedy_percentage(&self) -> Option<f64> {
        let greedy = self.enjoyment_of(SolverKind::Greedy)?;
        match self.optimal()? {
            0 => None,
            optimal => Some(greedy as f64 * 100.0 / optimal as f64),
        }
    }
}

fn skip_reason(kind: SolverKind, catalog: &Catalog, options: &HarnessOptions) -> Option<String> {
    match kind {
        SolverKind::Exhaustive => options
            .max_exhaustive_items
            .filter(|&limit| catalog.len() > limit)
            .map(|limit| {
                format!(
                    "{} activities exceeds the exhaustive limit of {}",
                    catalog.len(),
                    limit
                )
            }),
        SolverKind::Dynamic => {
            let cells = dynamic::table_cells(catalog);
            options
                .max_table_cells
                .filter(|&limit| cells > limit)
                .map(|limit| format!("{} table cells exceeds the limit of {}", cells, limit))
        }
        SolverKind::Greedy => None,
    }
}

/// Run each requested solver in turn on the same catalog, timing every call.
pub fn compare(catalog: &Catalog, options: &HarnessOptions) -> Comparison {
    let runs = options
        .solvers
        .iter()
        .map(|&kind| {
            let solver = kind.solver();
            let label = solver.label();

            if let Some(reason) = skip_reason(kind, catalog, options) {
                warn!("skipping {}: {}", label, reason);
                return SolverRun {
                    kind,
                    label,
                    outcome: Outcome::Skipped { reason },
                };
            }

            debug!("running {} on {} activities", label, catalog.len());
            let start = Instant::now();
            let selection = solver.solve(catalog);
            let elapsed = start.elapsed();
            debug!(
                "{} finished in {:.6}s with enjoyment {}",
                label,
                elapsed.as_secs_f64(),
                selection.enjoyment
            );

            SolverRun {
                kind,
                label,
                outcome: Outcome::Completed { selection, elapsed },
            }
        })
        .collect();

    Comparison { runs }
}
