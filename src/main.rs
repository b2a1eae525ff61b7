//! ccnav: discovers AWS CodeCommit repositories as git sources

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use codecommit_navigator::commands::discover::{handle_discover_command, DiscoverOptions, OutputFormat};
use codecommit_navigator::commands::init::handle_init_command;
use codecommit_navigator::commands::validate::handle_validate_command;
use codecommit_navigator::credentials::CredentialStore;
use codecommit_navigator::navigator::NavigatorConfig;
use codecommit_navigator::utils::init_logging;

#[derive(Parser)]
#[command(name = "ccnav")]
#[command(about = "Discover AWS CodeCommit repositories as git sources", long_about = None)]
#[command(version)]
struct Cli {
    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Navigator configuration file
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Credentials file
    #[arg(long, global = true, value_name = "PATH")]
    credentials: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a default navigator configuration
    Init {
        /// Overwrite an existing configuration
        #[arg(long)]
        force: bool,
    },
    /// Check the configuration without contacting AWS
    Validate,
    /// List matching repositories and their clone URLs
    Discover {
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// Skip clone URL resolution
        #[arg(long)]
        names_only: bool,

        /// Send API calls to this URL instead of the regional endpoint
        #[arg(long, value_name = "URL")]
        endpoint_override: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config_path = match cli.config {
        Some(path) => path,
        None => NavigatorConfig::default_path()?,
    };
    let credentials_path = match cli.credentials {
        Some(path) => path,
        None => CredentialStore::default_path()?,
    };

    match cli.command {
        Commands::Init { force } => handle_init_command(&config_path, &credentials_path, force),
        Commands::Validate => handle_validate_command(&config_path, &credentials_path),
        Commands::Discover {
            format,
            names_only,
            endpoint_override,
        } => {
            let options = DiscoverOptions {
                format,
                names_only,
                endpoint_override,
            };
            handle_discover_command(&config_path, &credentials_path, options).await
        }
    }
}
