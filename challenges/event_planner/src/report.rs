use crate::Writer;
use crate::catalog::Catalog;
use crate::harness::{Comparison, Outcome, SolverRun};
use crate::solvers::{Selection, SolverKind};

const RULE: &str = "========================================";

fn summary_name(kind: SolverKind) -> &'static str {
    match kind {
        SolverKind::Exhaustive => "Brute Force",
        SolverKind::Dynamic => "Dynamic Programming",
        SolverKind::Greedy => "Greedy Heuristic",
    }
}

pub fn render_header(out: &mut Writer, source: &str, catalog: &Catalog) {
    out.println(RULE);
    out.println("EVENT PLANNER - RESULTS");
    out.println(RULE);
    out.println(format!("Input File: {}", source));
    out.println(format!("Available Time: {} hours", catalog.max_time()));
    if let Some(budget) = catalog.max_budget() {
        out.println(format!("Available Budget: £{}", budget));
    }
    out.println("");
}

pub fn render_selection(out: &mut Writer, selection: &Selection) {
    if selection.is_empty() {
        out.println("No activities were selected.");
    } else {
        out.println("Selected Activities:");
        for activity in &selection.activities {
            out.println(format!("- {}", activity));
        }
    }

    out.println(format!("Total Enjoyment: {}", selection.enjoyment));
    out.println(format!("Total Time Used: {} hours", selection.total_time()));
    out.println(format!("Total Cost: £{}", selection.total_cost()));
}

pub fn render_run(out: &mut Writer, run: &SolverRun) {
    out.println(format!("--- {} ---", run.label));
    match &run.outcome {
        Outcome::Completed { selection, elapsed } => {
            render_selection(out, selection);
            out.println(format!(
                "Execution Time: {:.6} seconds",
                elapsed.as_secs_f64()
            ));
        }
        Outcome::Skipped { reason } => out.println(format!("Skipped: {}", reason)),
    }
    out.println("");
}

pub fn render_summary(out: &mut Writer, comparison: &Comparison) {
    out.println(RULE);
    out.println("ALGORITHM COMPARISON SUMMARY");
    out.println(RULE);
    for run in &comparison.runs {
        let name = format!("{}:", summary_name(run.kind));
        match &run.outcome {
            Outcome::Completed { selection, elapsed } => {
                let mut line = format!(
                    "{:<21}{} enjoyment  ({:.6}s)",
                    name,
                    selection.enjoyment,
                    elapsed.as_secs_f64()
                );
                if run.kind == SolverKind::Greedy {
                    if let Some(pct) = comparison.greedy_percentage() {
                        line.push_str(&format!(", {:.1}% of optimal", pct));
                    }
                }
                out.println(line);
            }
            Outcome::Skipped { .. } => out.println(format!("{:<21}skipped", name)),
        }
    }
    out.println(RULE);
    out.println("");
}

/// Full report: header, one block per solver run, then the comparison summary.
pub fn render(out: &mut Writer, source: &str, catalog: &Catalog, comparison: &Comparison) {
    render_header(out, source, catalog);
    for run in &comparison.runs {
        render_run(out, run);
    }
    render_summary(out, comparison);
}
