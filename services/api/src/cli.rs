use crate::report::{run_list_submissions, run_rules, ListArgs, RulesArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use formflow::error::AppError;
use formflow::forms::FormKind;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "formflow",
    about = "Serve the contact and registration forms, or inspect stored submissions",
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
    /// Inspect accepted submissions without starting the server
    Submissions {
        #[command(subcommand)]
        command: SubmissionsCommand,
    },
    /// Print the validation rules a form variant enforces
    Rules(RulesArgs),
}

#[derive(Subcommand, Debug)]
enum SubmissionsCommand {
    /// List stored submissions as text or CSV
    List(ListArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
    /// Form variant to serve (contact, registration, strict-registration)
    #[arg(long)]
    pub(crate) form: Option<FormKind>,
    /// Override the JSON file accepted submissions are written to
    #[arg(long)]
    pub(crate) submissions_path: Option<PathBuf>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Submissions {
            command: SubmissionsCommand::List(args),
        } => run_list_submissions(args),
        Command::Rules(args) => run_rules(args),
    }
}
