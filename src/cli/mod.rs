pub mod commands;
pub mod utils;

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};

use crate::registry::{ConfigRegistry, FileRegistry};

#[derive(Parser)]
#[command(name = "idm-authz")]
#[command(about = "Inspect and run authorization hooks against managed object configuration")]
#[command(version)]
pub struct Cli {
    #[arg(long, global = true, help = "Output in human-readable text format")]
    pub text: bool,

    #[arg(long, global = true, help = "Output in JSON format")]
    pub json: bool,

    #[arg(
        long,
        global = true,
        help = "Managed object config file (defaults to IDM_MANAGED_CONFIG or conf/managed.json)"
    )]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Run the setProtectedAttributes hook on an authorization context")]
    Annotate {
        #[arg(long, help = "Component path, e.g. managed/user")]
        component: String,

        #[arg(long, help = "Existing authorization map as a JSON object")]
        authorization: Option<String>,
    },

    #[command(about = "Show the protected attributes of a managed object")]
    Protected {
        #[arg(long, help = "Component path, e.g. managed/user")]
        component: String,
    },

    #[command(about = "List managed objects and their protected attributes")]
    Objects,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    pub fn from_cli(cli: &Cli) -> Self {
        if cli.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

pub fn run(cli: Cli) -> anyhow::Result<()> {
    let output_format = OutputFormat::from_cli(&cli);

    let path = cli
        .config
        .clone()
        .unwrap_or_else(|| crate::config::config().registry.managed_config_path.clone());
    tracing::debug!("Using managed object config at {}", path.display());
    let registry: Arc<dyn ConfigRegistry> = Arc::new(FileRegistry::new(path));

    match cli.command {
        Commands::Annotate { component, authorization } => {
            commands::annotate::handle(registry, &component, authorization.as_deref(), output_format)
        }
        Commands::Protected { component } => commands::protected::handle(registry, &component, output_format),
        Commands::Objects => commands::objects::handle(registry, output_format),
    }
}
