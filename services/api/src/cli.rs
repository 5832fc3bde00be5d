use crate::commands::{run_recommend, run_steps, RecommendArgs, StepsArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use emergency_planner::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Emergency Planner",
    about = "Serve the emergency planner API or explore plans from the command line",
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
    /// Inspect plan questionnaires and score survey answers offline
    Plans {
        #[command(subcommand)]
        command: PlansCommand,
    },
}

#[derive(Subcommand, Debug)]
enum PlansCommand {
    /// Print the questionnaire steps for a plan type
    Steps(StepsArgs),
    /// Score survey answers and print the ranked recommendation
    Recommend(RecommendArgs),
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
        Command::Plans {
            command: PlansCommand::Steps(args),
        } => run_steps(args),
        Command::Plans {
            command: PlansCommand::Recommend(args),
        } => run_recommend(args),
    }
}
