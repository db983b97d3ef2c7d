use aircargo::search::{
    runner::{default_configurations, run_search, write_reports, RunReport, SearchConfiguration},
    search_engines::TerminationCondition,
    AirCargoProblem, PlanningError, Result, ScenarioCatalog, Verbosity,
};
use clap::{Args, Parser, Subcommand};
use console::style;
use dialoguer::{theme::ColorfulTheme, MultiSelect};
use itertools::Itertools;
use std::{io, path::PathBuf, process::ExitCode, time::Duration};
use tracing::{error, info};

#[derive(Parser)]
#[command(version)]
/// Solve air cargo planning problems using a variety of state space search
/// methods including uninformed, greedy and informed heuristic search.
struct Cli {
    #[command(subcommand)]
    command: Commands,
    #[arg(
        value_enum,
        help = "The verbosity level",
        short = 'v',
        long = "verbosity",
        id = "VERBOSITY",
        global = true,
        default_value_t = Verbosity::Normal
    )]
    verbosity: Verbosity,
    #[arg(
        help = "Whether to use coloured output",
        short = 'c',
        long = "colour",
        global = true
    )]
    colour: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the selected searches on the selected problems.
    Run {
        #[arg(
            help = "The indices of the problems to solve, see `list`",
            short = 'p',
            long = "problems",
            id = "PROBLEMS",
            num_args = 1..,
            required_unless_present = "SCENARIO"
        )]
        problems: Vec<usize>,
        #[arg(
            help = "The indices of the searches to use, see `list`",
            short = 's',
            long = "searches",
            id = "SEARCHES",
            num_args = 1..,
            required = true
        )]
        searches: Vec<usize>,
        #[arg(
            help = "TOML scenario files to solve instead of the standard problems",
            long = "scenario",
            id = "SCENARIO"
        )]
        scenarios: Vec<PathBuf>,
        #[command(flatten)]
        limits: Limits,
    },
    /// Run every search on every standard problem.
    All {
        #[command(flatten)]
        limits: Limits,
    },
    /// Interactively select the problems and searches to run.
    Manual {
        #[command(flatten)]
        limits: Limits,
    },
    /// List the standard problems and the searches.
    List,
}

#[derive(Args, Clone)]
struct Limits {
    #[arg(
        help = "Stop a search after this many expansions",
        long = "max-expansions",
        id = "MAX_EXPANSIONS"
    )]
    max_expansions: Option<usize>,
    #[arg(
        help = "Stop a search after this long, e.g. `30s` or `5min`",
        long = "time-limit",
        id = "TIME_LIMIT",
        value_parser = humantime::parse_duration
    )]
    time_limit: Option<Duration>,
    #[arg(
        help = "Stop a search once memory usage exceeds this many MB",
        long = "memory-limit",
        id = "MEMORY_LIMIT"
    )]
    memory_limit_mb: Option<usize>,
    #[arg(
        help = "Write the run reports to this file as JSON",
        short = 'o',
        long = "outfile",
        id = "OUTFILE"
    )]
    outfile: Option<PathBuf>,
}

impl Limits {
    fn termination_condition(&self) -> TerminationCondition {
        TerminationCondition::new(self.max_expansions, self.time_limit, self.memory_limit_mb)
    }
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

    match execute(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            eprintln!("{} {}", style("error:").red().bold(), e);
            ExitCode::FAILURE
        }
    }
}

fn execute(command: Commands) -> Result<()> {
    let configurations = default_configurations();
    match command {
        Commands::Run {
            problems,
            searches,
            scenarios,
            limits,
        } => {
            let (catalog, problems) = if scenarios.is_empty() {
                (ScenarioCatalog::standard(), problems)
            } else {
                let mut catalog = ScenarioCatalog::new();
                for path in scenarios {
                    catalog.add_file(path);
                }
                let all = (1..=catalog.len()).collect();
                (catalog, all)
            };
            let problems = to_indices(&problems, catalog.len(), "problem")?;
            let searches = to_indices(&searches, configurations.len(), "search")?;
            let searches: Vec<_> = searches
                .into_iter()
                .map(|index| configurations[index].clone())
                .collect();
            solve(&catalog, &problems, &searches, &limits)
        }
        Commands::All { limits } => {
            let catalog = ScenarioCatalog::standard();
            let problems: Vec<usize> = (0..catalog.len()).collect();
            solve(&catalog, &problems, &configurations, &limits)
        }
        Commands::Manual { limits } => manual(&configurations, &limits),
        Commands::List => {
            list(&ScenarioCatalog::standard(), &configurations);
            Ok(())
        }
    }
}

/// Turns one-based selections into sorted, deduplicated zero-based indices.
fn to_indices(selection: &[usize], len: usize, what: &str) -> Result<Vec<usize>> {
    selection
        .iter()
        .copied()
        .sorted()
        .dedup()
        .map(|choice| {
            if (1..=len).contains(&choice) {
                Ok(choice - 1)
            } else {
                Err(PlanningError::Parse {
                    input: choice.to_string(),
                    reason: format!("{} choices are 1 to {}", what, len),
                })
            }
        })
        .collect()
}

fn solve(
    catalog: &ScenarioCatalog,
    problems: &[usize],
    searches: &[SearchConfiguration],
    limits: &Limits,
) -> Result<()> {
    let mut reports = Vec::new();
    for &problem_index in problems {
        for configuration in searches {
            let task = catalog.build(problem_index)?;
            println!(
                "\nSolving {} using {}...",
                style(task.name()).bold(),
                style(configuration.label()).cyan()
            );
            let mut problem = AirCargoProblem::new(task);
            let report = run_search(&mut problem, configuration, limits.termination_condition())?;
            print_report(&report);
            reports.push(report);
        }
    }

    if let Some(outfile) = &limits.outfile {
        write_reports(outfile, &reports)?;
        info!(outfile = %outfile.display(), num_reports = reports.len(), "wrote reports");
    }
    Ok(())
}

fn print_report(report: &RunReport) {
    let statistics = &report.statistics;
    println!("\nExpansions   Goal Tests   New Nodes   Max Depth");
    println!(
        "{:^10}  {:^10}  {:^10} {:^10}\n",
        statistics.expanded_nodes(),
        statistics.goal_tests(),
        statistics.generated_nodes(),
        statistics.max_depth()
    );
    match (&report.solution, report.plan_length) {
        (Some(solution), Some(plan_length)) => {
            println!(
                "Plan length: {}  Time elapsed in seconds: {}",
                style(plan_length).green(),
                report.time
            );
            if !solution.is_empty() {
                println!("{}", solution);
            }
        }
        _ => println!(
            "{}  Time elapsed in seconds: {}",
            style(&report.status).red(),
            report.time
        ),
    }
}

fn list(catalog: &ScenarioCatalog, configurations: &[SearchConfiguration]) {
    println!("{}\n-----------------", style("Problems").bold());
    for (index, entry) in catalog.entries().iter().enumerate() {
        println!("    {}. {}", index + 1, entry.name());
    }
    println!();
    println!("{}\n-----------------", style("Search Algorithms").bold());
    for (index, configuration) in configurations.iter().enumerate() {
        println!("    {}. {}", index + 1, configuration.label());
    }
    println!();
}

fn select(prompt: &str, items: &[String]) -> Result<Vec<usize>> {
    MultiSelect::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .items(items)
        .interact()
        .map_err(|e| PlanningError::Io(io::Error::other(e.to_string())))
}

fn manual(configurations: &[SearchConfiguration], limits: &Limits) -> Result<()> {
    let catalog = ScenarioCatalog::standard();
    let problem_names: Vec<String> = catalog
        .entries()
        .iter()
        .map(|entry| entry.name().to_string())
        .collect();
    let search_names: Vec<String> = configurations
        .iter()
        .map(SearchConfiguration::label)
        .collect();

    let problems = select("Select the air cargo problems to solve", &problem_names)?;
    let searches = select("Select the searches to use", &search_names)?;
    if problems.is_empty() || searches.is_empty() {
        println!("Nothing selected.");
        return Ok(());
    }
    let selected: Vec<SearchConfiguration> = searches
        .iter()
        .map(|&index| configurations[index].clone())
        .collect();
    solve(&catalog, &problems, &selected, limits)?;

    println!(
        "\nYou can run this selection again automatically from the command line\n\
        with the following command:"
    );
    println!(
        "\n  planner run -p {} -s {}\n",
        problems.iter().map(|index| index + 1).join(" "),
        searches.iter().map(|index| index + 1).join(" ")
    );
    Ok(())
}
