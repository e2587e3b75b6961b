use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use trip_planner::{PlannerConfig, PlannerError, TripRequest, dataset, logging, plan_trip, report, web};

/// Trip cost estimator for road trips out of Sofia
#[derive(Parser)]
#[command(name = "trip-planner", version, about)]
struct Cli {
    /// Path to a TOML config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Print configuration details and debug logs
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Estimate a trip and print the itemized report
    Plan(PlanArgs),
    /// List the available routes
    Routes,
    /// Serve the JSON API
    Serve {
        /// Override the configured port
        #[arg(short, long)]
        port: Option<u16>,
    },
}

#[derive(Args)]
struct PlanArgs {
    /// Route slug (bg-de, bg-it, bg-fr, bg-ro), label or flags
    #[arg(short, long)]
    route: Option<String>,
    /// car, train, bus or plane
    #[arg(short, long)]
    transport: Option<String>,
    /// Trip length in days (1-14)
    #[arg(short, long)]
    days: Option<u32>,
    /// Number of travelers (1-6)
    #[arg(short = 'n', long)]
    travelers: Option<u32>,
    /// economy, standard or luxury
    #[arg(long)]
    tier: Option<String>,
    /// Budget for the whole party
    #[arg(short, long)]
    budget: Option<f64>,
    /// Print the plan as JSON instead of the text report
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            match err.downcast_ref::<PlannerError>() {
                Some(config_err @ PlannerError::Config { .. }) => {
                    eprintln!("Error: {}", config_err.user_message());
                    eprintln!("  {config_err}");
                }
                Some(planner_err) => eprintln!("Error: {}", planner_err.user_message()),
                None => eprintln!("Error: {err:#}"),
            }
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = PlannerConfig::load_from_path(cli.config.as_deref())?;
    logging::init(&config.logging, cli.verbose)?;

    if cli.verbose {
        let source = cli
            .config
            .clone()
            .or_else(|| PlannerConfig::get_config_path().filter(|p| p.exists()))
            .map_or_else(|| "defaults".to_string(), |p| p.display().to_string());
        println!("Using config from: {source}");
        println!("Log level: {}", config.logging.level);
        println!("Server: {}:{}", config.server.host, config.server.port);
    }

    match cli.command.unwrap_or(Command::Routes) {
        Command::Plan(args) => plan(&config, args),
        Command::Routes => {
            for route in dataset().routes() {
                println!("{:<6} {}  {}", route.slug, route.label, route.line());
            }
            Ok(())
        }
        Command::Serve { port } => {
            let mut server = config.server.clone();
            if let Some(port) = port {
                server.port = port;
            }
            web::run(&server).await
        }
    }
}

fn plan(config: &PlannerConfig, args: PlanArgs) -> Result<()> {
    let defaults = &config.defaults;
    let request = TripRequest::parse(
        args.route.as_deref().unwrap_or(&defaults.route),
        args.transport.as_deref().unwrap_or(&defaults.transport),
        args.days.unwrap_or(defaults.days),
        args.travelers.unwrap_or(defaults.travelers),
        args.tier.as_deref().unwrap_or(&defaults.tier),
        args.budget.unwrap_or(defaults.budget),
    )?;

    let plan = plan_trip(dataset(), &request)?;
    if args.json {
        println!("{}", serde_json::to_string_pretty(&plan)?);
    } else {
        print!("{}", report::render(&plan));
    }
    Ok(())
}
