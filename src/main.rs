//! tfws - Main entry point

use std::process::ExitCode;

use clap::Parser;
use log::{debug, info};

use tfws::{
    run_create_command, run_delete_command, run_list_command, run_push_var_command,
    run_update_command, vcs, Cli, Command, Result, TfeClient, TokenResolver,
};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&cli.log_level))
        .init();

    info!("Starting tfws v{}", env!("CARGO_PKG_VERSION"));
    debug!(
        "CLI args: org={}, tfe={}, search_suffix={}",
        cli.org, cli.tfe, cli.search_suffix
    );

    match run(&cli).await {
        Ok(()) => {
            info!("Completed successfully");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: &Cli) -> Result<()> {
    let token = TokenResolver::new(&cli.tfe).resolve(cli.token.as_deref())?;

    // Only VCS-linked workspaces need the repository identifier
    let vcs_identifier = match cli.command.oauth_token_id() {
        Some(_) => {
            let cwd = std::env::current_dir()?;
            let identifier = vcs::discover_identifier(&cwd)?;
            info!("Using VCS repository identifier {}", identifier);
            Some(identifier)
        }
        None => None,
    };

    let client = TfeClient::new(token, cli.tfe.clone(), cli.org.clone())
        .with_vcs_identifier(vcs_identifier);

    match &cli.command {
        Command::Create(_) => run_create_command(&client, cli).await,
        Command::Update(_) => run_update_command(&client, cli).await,
        Command::Delete(_) => run_delete_command(&client, cli).await,
        Command::PushVar(_) => run_push_var_command(&client, cli).await,
        Command::List => run_list_command(&client).await,
    }
}
