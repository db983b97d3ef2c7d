use aircargo::search::{
    validate, AirCargoProblem, Plan, PlanningError, Result, ScenarioCatalog, Task, Verbosity,
};
use clap::Parser;
use console::style;
use std::{path::PathBuf, process::ExitCode};
use tracing::info;

#[derive(Parser)]
#[command(version)]
/// Check that a plan solves an air cargo scenario.
struct Cli {
    #[arg(help = "The scenario: a standard problem index (see `planner list`) or a TOML file")]
    scenario: String,
    #[arg(help = "The plan file to validate")]
    plan: PathBuf,
    #[arg(
        value_enum,
        help = "The verbosity level",
        short = 'v',
        long = "verbosity",
        id = "VERBOSITY",
        default_value_t = Verbosity::Silent
    )]
    verbosity: Verbosity,
    #[arg(help = "Whether to use coloured output", short = 'c', long = "colour")]
    colour: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level: tracing::Level = cli.verbosity.into();
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_ansi(cli.colour)
        .with_line_number(true)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    match check(&cli) {
        Ok(()) => {
            println!("{}", style("Plan valid").green());
            ExitCode::SUCCESS
        }
        Err(e) => {
            println!("{} {}", style("Plan invalid:").red(), e);
            ExitCode::FAILURE
        }
    }
}

fn load_scenario(scenario: &str) -> Result<Task> {
    match scenario.parse::<usize>() {
        Ok(index) => match index.checked_sub(1) {
            Some(index) => ScenarioCatalog::standard().build(index),
            None => Err(PlanningError::Parse {
                input: scenario.to_string(),
                reason: "problem indices start at 1".to_string(),
            }),
        },
        Err(_) => Task::from_path(&PathBuf::from(scenario)),
    }
}

fn check(cli: &Cli) -> Result<()> {
    let problem = AirCargoProblem::new(load_scenario(&cli.scenario)?);
    let plan = Plan::from_path(&cli.plan, problem.task())?;
    info!(plan_length = plan.len(), "validating plan");
    validate(&plan, &problem)
}
