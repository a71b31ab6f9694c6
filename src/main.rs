use anyhow::Result;
use clap::Parser;

mod cli;
mod commands;

use cloud_price_calculator::pricing::ComputeRequest;
use cloud_price_calculator::{config, init_tracing};

#[tokio::main]
async fn main() -> Result<()> {
    let args = cli::Cli::parse();

    // Logging settings come from the config file when it loads; errors
    // surface again from the command itself
    let (log_level, log_format) = match config::load_config(&args.config) {
        Ok(cfg) => (cfg.server.log_level, cfg.server.log_format),
        Err(_) => ("info".to_string(), "text".to_string()),
    };
    init_tracing(&log_level, &log_format);

    match args.get_command() {
        cli::Commands::Start { host, port } => {
            commands::start::execute(&args.config, host, port).await?;
        }
        cli::Commands::Quote {
            provider,
            instance_type,
            hours,
            storage_gb,
            region,
            storage_type,
        } => {
            let request = ComputeRequest {
                provider,
                instance_type,
                hours_running: hours,
                storage_gb,
                region,
                storage_type,
            };
            commands::quote::execute(request)?;
        }
        cli::Commands::Test => {
            commands::test::execute(&args.config)?;
        }
        cli::Commands::Config { action } => match action {
            cli::ConfigCommands::Show => commands::config::show(&args.config)?,
            cli::ConfigCommands::Validate => commands::config::validate(&args.config)?,
        },
        cli::Commands::Version => {
            println!("Cloud Price Calculator v{}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
