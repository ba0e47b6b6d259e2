use crate::demo::{run_directory_search, run_screener_evaluate, DirectorySearchArgs, ScreenerArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use gapp_directory::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "GAPP Provider Directory",
    about = "Run the GAPP provider directory service or query it from the command line",
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
    /// Query the provider directory
    Directory {
        #[command(subcommand)]
        command: DirectoryCommand,
    },
    /// Run the eligibility screener without the web flow
    Screener {
        #[command(subcommand)]
        command: ScreenerCommand,
    },
}

#[derive(Subcommand, Debug)]
enum DirectoryCommand {
    /// Print one ranked page of providers
    Search(DirectorySearchArgs),
}

#[derive(Subcommand, Debug)]
enum ScreenerCommand {
    /// Print the fit level, next steps, and call scripts for a set of answers
    Evaluate(ScreenerArgs),
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
        Command::Directory {
            command: DirectoryCommand::Search(args),
        } => run_directory_search(args),
        Command::Screener {
            command: ScreenerCommand::Evaluate(args),
        } => run_screener_evaluate(args),
    }
}
