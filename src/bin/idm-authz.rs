use clap::Parser;
use idm_protected_attrs::cli::{utils, Cli, OutputFormat};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    // Load .env if present so IDM_MANAGED_CONFIG, APP_ENV, etc. are picked up
    let _ = dotenvy::dotenv();

    let config = idm_protected_attrs::config::config();
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.filter));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
    tracing::debug!("Starting idm-authz in {:?} mode", config.environment);

    let cli = Cli::parse();
    let output_format = OutputFormat::from_cli(&cli);

    if let Err(e) = idm_protected_attrs::cli::run(cli) {
        let verbose = matches!(std::env::var("CLI_VERBOSE").as_deref(), Ok("true") | Ok("1"));
        utils::output_error(&output_format, &e, verbose);
        std::process::exit(1);
    }

    Ok(())
}
