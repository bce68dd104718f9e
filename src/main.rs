use clap::Parser;

use runway::commands::base_commands::{CliArgs, Commands};
use runway::commands::calculate_cmd::calculate_command;
use runway::commands::chart_cmd::chart_command;
use runway::commands::completions_cmd::completions_command;
use runway::commands::email_cmd::email_command;
use runway::commands::export_cmd::export_command;

#[tokio::main]
async fn main() {
    env_logger::init();

    let args = CliArgs::parse();
    match args.command {
        cmd @ Commands::Calculate { .. } => calculate_command(cmd).await,
        cmd @ Commands::Chart { .. } => chart_command(cmd).await,
        cmd @ Commands::Export { .. } => export_command(cmd).await,
        cmd @ Commands::Email { .. } => email_command(cmd).await,
        cmd @ Commands::Completions { .. } => completions_command(cmd),
    }
}
