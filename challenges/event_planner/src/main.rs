use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, bail};
use clap::{Args, Parser, Subcommand};

use event_planner::catalog::{Catalog, ConstraintMode};
use event_planner::harness::{self, HarnessOptions};
use event_planner::menu::Menu;
use event_planner::solvers::SolverKind;
use event_planner::{Scanner, Writer, report, testing};

#[derive(Parser)]
#[command(name = "event-planner")]
#[command(about = "Pick the most enjoyable activities within a time and money budget", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compare the solvers on one input file
    Compare {
        file: PathBuf,
        #[command(flatten)]
        run: RunArgs,
    },
    /// Prompt for a dataset size and compare the solvers on it, until 'e' is entered
    Menu {
        #[arg(long, default_value = "Input_Files")]
        data_dir: PathBuf,
        #[command(flatten)]
        run: RunArgs,
    },
    /// Check every solver against the fixtures under the data directory
    Verify {
        #[arg(long, default_value = "data")]
        data_dir: PathBuf,
    },
}

#[derive(Args)]
struct RunArgs {
    /// Constraints to apply: time only, or time and budget
    #[arg(long, value_enum, default_value = "dual")]
    mode: ConstraintMode,
    /// Solvers to run, in order (defaults to all of them)
    #[arg(long = "solver", value_enum)]
    solvers: Vec<SolverKind>,
    /// Skip the exhaustive solver above this many activities
    #[arg(long)]
    max_exhaustive_items: Option<usize>,
    /// Skip the DP solver when its table would exceed this many cells
    #[arg(long)]
    max_table_cells: Option<u128>,
}

impl RunArgs {
    fn options(&self) -> HarnessOptions {
        let mut options = HarnessOptions {
            max_exhaustive_items: self.max_exhaustive_items,
            max_table_cells: self.max_table_cells,
            ..HarnessOptions::default()
        };
        if !self.solvers.is_empty() {
            options.solvers = self.solvers.clone();
        }
        options
    }
}

fn main() -> anyhow::Result<()> {
    // install global collector configured based on RUST_LOG env var.
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Compare { file, run } => {
            let catalog = Catalog::load(&file, run.mode)
                .with_context(|| format!("could not load {}", file.display()))?;
            let comparison = harness::compare(&catalog, &run.options());

            let source = file
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_else(|| file.display().to_string());
            let mut out = Writer::new();
            report::render(&mut out, &source, &catalog, &comparison);
            std::io::stdout().write_all(out.as_bytes())?;
        }
        Commands::Menu { data_dir, run } => {
            let menu = Menu::new(data_dir, run.mode, run.options());
            let mut input = Scanner::new(std::io::stdin().lock());
            menu.run(&mut input, &mut std::io::stdout())?;
        }
        Commands::Verify { data_dir } => {
            let failed = [ConstraintMode::TimeOnly, ConstraintMode::TimeAndBudget]
                .into_iter()
                .map(|mode| testing::run_all_fixtures(&data_dir, mode))
                .sum::<usize>();
            if failed > 0 {
                bail!("{} fixtures failed", failed);
            }
        }
    }

    Ok(())
}
