use crate::server;
use crate::walk::{run_catalog, run_resolve, run_walk, ResolveArgs, WalkArgs};
use clap::{Args, Parser, Subcommand};
use decision_guide::config::AppConfig;
use decision_guide::error::AppError;
use decision_guide::telemetry;

#[derive(Parser, Debug)]
#[command(
    name = "Time-Driven Decision Guide",
    about = "Recommend a leadership decision process using Vroom's Time-Driven model",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Resolve a set of answers given as FACTOR=H|L pairs
    Resolve(ResolveArgs),
    /// Answer the questions interactively and export a summary
    Walk(WalkArgs),
    /// List the factors and decision styles
    Catalog,
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    match command {
        Command::Serve(args) => server::run(config, args).await,
        Command::Resolve(args) => run_resolve(args),
        Command::Walk(args) => run_walk(args, &config),
        Command::Catalog => {
            run_catalog();
            Ok(())
        }
    }
}
