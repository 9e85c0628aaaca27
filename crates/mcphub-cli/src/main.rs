//! CLI entry point - the composition root.
//!
//! This is the only place where logging is initialized and the admin client
//! is bootstrapped. Command dispatch routes to handlers.

use std::process::ExitCode;
use std::time::Duration;

use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use mcphub_cli::{Cli, CliConfig, CliError, Commands, bootstrap, handlers};

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let mut config = CliConfig::from_cli(&cli);
    let Some(command) = cli.command else {
        // No command provided - show help
        Cli::command().print_help()?;
        return Ok(());
    };

    if let Commands::Watch { interval } = &command {
        config = config.with_refresh_interval(Duration::from_secs((*interval).max(1)));
    }
    let ctx = bootstrap(config)?;

    match command {
        Commands::Servers { command } => handlers::servers::execute(&ctx, command).await,
        Commands::Commands { command } => handlers::commands::execute(&ctx, command).await,
        Commands::Auth { command } => handlers::auth::execute(&ctx, command).await,
        Commands::Render { target } => handlers::render::execute(&ctx, target).await,
        Commands::Watch { .. } => handlers::watch::execute(&ctx).await,
        Commands::ReloadConfig => handlers::reload_config::execute(&ctx).await,
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    // Load environment variables before clap reads MCPHUB_* defaults
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            let code = err.downcast_ref::<CliError>().map_or(1, CliError::exit_code);
            ExitCode::from(u8::try_from(code).unwrap_or(1))
        }
    }
}
