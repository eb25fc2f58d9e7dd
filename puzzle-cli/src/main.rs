//! Command-line interface for running the 2019 puzzle solvers

mod cli;
mod error;
mod executor;
mod input;
mod output;

// Import puzzle-solutions to link the solver plugins
use puzzle_solutions as _;

use clap::Parser;
use cli::Args;
use error::CliError;
use executor::{Executor, WorkItem};
use input::InputStore;
use output::OutputFormatter;
use puzzle_solver::{RegistryBuilder, SolverRegistry};

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), CliError> {
    let registry = build_registry(&args.tags)?;

    let inputs = match (&args.input, args.day) {
        (Some(path), Some(day)) => InputStore::with_override(args.input_dir, day, path.clone()),
        _ => InputStore::new(args.input_dir),
    };

    let executor = Executor::new(registry, inputs, args.day, args.part);

    let work_items = executor.collect_work_items();
    if work_items.is_empty() {
        println!("No solvers found matching the specified filters.");
        return Ok(());
    }

    // Report missing inputs up front and run what is left
    let missing = executor.missing_inputs(&work_items);
    if !missing.is_empty() {
        println!("Missing {} input file(s):", missing.len());
        for day in &missing {
            println!("  - {}", executor.inputs().path(*day).display());
        }
        println!();
    }
    let runnable: Vec<WorkItem> = work_items
        .into_iter()
        .filter(|w| !missing.contains(&w.day))
        .collect();
    if runnable.is_empty() {
        return Err(CliError::NoInputs);
    }

    let formatter = OutputFormatter::new(args.quiet);
    let results = executor.execute(&runnable, |result| formatter.print_result(result));
    formatter.print_summary(&results);

    // Missing inputs count as failures for the exit code
    let failures =
        results.iter().filter(|r| r.answer.is_err()).count() + missing.len();
    if failures > 0 {
        return Err(CliError::SolversFailed(failures));
    }
    Ok(())
}

/// Build registry with tag filtering
fn build_registry(tags: &[String]) -> Result<SolverRegistry, CliError> {
    let builder = RegistryBuilder::new();

    let builder = if tags.is_empty() {
        builder.register_all_plugins()?
    } else {
        builder.register_plugins(|plugin| {
            tags.iter().all(|tag| plugin.tags.contains(&tag.as_str()))
        })?
    };

    Ok(builder.build())
}
