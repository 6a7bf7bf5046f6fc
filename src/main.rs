use clap::Parser;
use linewalk::config::RunConfig;
use linewalk::search::{
    search_engines::{SearchEngineName, SearchResult},
    Problem, TextTrace, Verbosity,
};
use std::path::PathBuf;
use strum::IntoEnumIterator;
use tracing::info;

#[derive(Parser)]
#[command(version)]
/// Search for a path between two positions on the integer line.
struct Cli {
    #[arg(help = "Start position, overrides the configuration file", long)]
    start: Option<i64>,
    #[arg(help = "Goal position, overrides the configuration file", long)]
    goal: Option<i64>,
    #[arg(help = "Step size applied in both directions", long)]
    delta: Option<i64>,
    #[arg(
        help = "Safety bound on the absolute value of explored positions",
        long = "max-abs",
        id = "MAX_ABS"
    )]
    max_abs: Option<i64>,
    #[arg(
        help = "TOML file supplying the run configuration",
        long = "config",
        id = "CONFIG"
    )]
    config: Option<PathBuf>,
    #[arg(
        value_enum,
        help = "The search engine to run; when omitted every engine runs in turn",
        short = 'e',
        long = "engine",
        id = "ENGINE"
    )]
    engine: Option<SearchEngineName>,
    #[arg(
        value_enum,
        help = "The verbosity level",
        short = 'v',
        long = "verbosity",
        id = "VERBOSITY",
        default_value_t = Verbosity::Normal
    )]
    verbosity: Verbosity,
    #[arg(help = "Whether to use coloured output", short = 'c', long = "colour")]
    colour: bool,
}

fn main() {
    let cli = Cli::parse();

    let level: tracing::Level = cli.verbosity.into();
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_ansi(cli.colour)
        .with_line_number(true)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    let mut config = match &cli.config {
        Some(path) => match RunConfig::load(path) {
            Ok(config) => config,
            Err(error) => {
                eprintln!("{error}");
                std::process::exit(2);
            }
        },
        None => RunConfig::default(),
    };
    if let Some(start) = cli.start {
        config.start = start;
    }
    if let Some(goal) = cli.goal {
        config.goal = goal;
    }
    if let Some(delta) = cli.delta {
        config.delta = delta;
    }
    if let Some(max_abs) = cli.max_abs {
        config.max_abs = max_abs;
    }

    let problem = match config.to_problem() {
        Ok(problem) => problem,
        Err(error) => {
            eprintln!("invalid configuration: {error}");
            std::process::exit(2);
        }
    };

    println!(
        "line search: start={}, goal={}, delta={}, bound={}",
        problem.start(),
        problem.goal(),
        problem.delta(),
        problem.max_abs()
    );

    let engines: Vec<SearchEngineName> = match cli.engine {
        Some(name) => vec![name],
        None => SearchEngineName::iter().collect(),
    };

    for name in engines {
        println!();
        println!("=== {name} ===");
        run(name, &problem);
    }
}

fn run(name: SearchEngineName, problem: &Problem) {
    let mut engine = name.create();
    let heuristic = name.heuristic();
    let mut sink = TextTrace::stdout();

    let (result, mut statistics) = engine.search(problem, heuristic.as_ref(), &mut sink);
    statistics.finalise_search();

    match result {
        SearchResult::Success(path) => {
            info!(moves = path.moves());
            println!("path: {path}");
            println!("moves: {}", path.moves());
        }
        SearchResult::Exhausted => {
            info!("search exhausted without reaching the goal");
            println!("no path found");
        }
    }
}
