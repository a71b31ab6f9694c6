use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "cloud-pricing", version, about = "Cloud Price Calculator")]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, default_value = "config.toml", global = true)]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Start the pricing server (default)
    Start {
        /// Override server.host
        #[arg(long)]
        host: Option<String>,

        /// Override server.port
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Price a single instance offline and print the result as JSON
    Quote {
        /// aws, gcp or azure
        #[arg(long)]
        provider: String,

        #[arg(short, long)]
        instance_type: String,

        /// Hours of runtime
        #[arg(long, default_value = "720")]
        hours: f64,

        #[arg(long)]
        storage_gb: Option<f64>,

        #[arg(short, long)]
        region: Option<String>,

        #[arg(long)]
        storage_type: Option<String>,
    },

    /// Test configuration and price one sample instance per provider
    Test,

    /// Configuration management commands
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },

    /// Show version information
    Version,
}

#[derive(Subcommand, Debug, Clone)]
pub enum ConfigCommands {
    /// Display current configuration (with secrets masked)
    Show,

    /// Validate configuration file
    Validate,
}

impl Cli {
    /// Get the command to execute, defaulting to Start if none provided
    pub fn get_command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Start {
            host: None,
            port: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_command_is_start() {
        let cli = Cli {
            config: PathBuf::from("config.toml"),
            command: None,
        };

        match cli.get_command() {
            Commands::Start { host, port } => {
                assert!(host.is_none());
                assert!(port.is_none());
            }
            _ => panic!("Expected Start command"),
        }
    }

    #[test]
    fn test_cli_parsing_start_with_port() {
        let cli = Cli::try_parse_from(["cloud-pricing", "start", "--port", "9000"]).unwrap();

        match cli.get_command() {
            Commands::Start { port, .. } => assert_eq!(port, Some(9000)),
            _ => panic!("Expected Start command"),
        }
    }

    #[test]
    fn test_cli_parsing_quote() {
        let cli = Cli::try_parse_from([
            "cloud-pricing",
            "quote",
            "--provider",
            "aws",
            "--instance-type",
            "t3.medium",
            "--hours",
            "100",
            "--storage-gb",
            "50",
        ])
        .unwrap();

        match cli.get_command() {
            Commands::Quote {
                provider,
                instance_type,
                hours,
                storage_gb,
                region,
                ..
            } => {
                assert_eq!(provider, "aws");
                assert_eq!(instance_type, "t3.medium");
                assert_eq!(hours, 100.0);
                assert_eq!(storage_gb, Some(50.0));
                assert!(region.is_none());
            }
            _ => panic!("Expected Quote command"),
        }
    }

    #[test]
    fn test_cli_parsing_config_show_with_global_config() {
        let cli = Cli::try_parse_from(["cloud-pricing", "config", "show", "--config", "prod.toml"]).unwrap();

        assert_eq!(cli.config, PathBuf::from("prod.toml"));
        assert!(matches!(
            cli.get_command(),
            Commands::Config {
                action: ConfigCommands::Show
            }
        ));
    }
}
