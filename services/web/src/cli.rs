use crate::commands::{run_listings, run_signup, ListingsArgs, SignupArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use shiftcare::error::AppError;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "ShiftCare",
    about = "Serve the ShiftCare pre-launch page and manage early-access sign-ups",
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
    /// Print the listing cards shown on the landing page
    Listings(ListingsArgs),
    /// Submit one early-access sign-up to the relay
    Signup(SignupArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
    /// JSON listings file to serve instead of the built-in examples
    #[arg(long)]
    pub(crate) listings: Option<PathBuf>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Listings(args) => run_listings(args),
        Command::Signup(args) => run_signup(args).await,
    }
}
