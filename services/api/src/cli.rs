use crate::demo::{run_assess, run_roster, AssessArgs, RosterArgs};
use crate::notebook::{run_fix, FixArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use promotion_ai::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Promotion Assessment Service",
    about = "Score promotion eligibility with the pre-trained classifier, from HTTP or the command line",
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
    /// Assess a single candidate profile from a JSON file or the bundled sample
    Assess(AssessArgs),
    /// Assess every candidate in a roster CSV
    Roster(RosterArgs),
    /// Utilities for structured notebook files
    Notebook {
        #[command(subcommand)]
        command: NotebookCommand,
    },
}

#[derive(Subcommand, Debug)]
enum NotebookCommand {
    /// Re-parse a notebook's JSON and save a cleanly formatted copy
    Fix(FixArgs),
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

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Assess(args) => run_assess(args),
        Command::Roster(args) => run_roster(args),
        Command::Notebook {
            command: NotebookCommand::Fix(args),
        } => run_fix(args),
    }
}
