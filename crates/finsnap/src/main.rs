use clap::Parser;
use finsnap::{App, AppConfig, init_logging};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "finsnap")]
#[command(about = "A terminal dashboard for quick financial health snapshots")]
struct Args {
    /// Path to the data directory (default: ~/.finsnap/)
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// Log level (debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,

    /// Base URL of the analysis service (overrides config.yaml)
    #[arg(short, long)]
    service_url: Option<String>,
}

fn default_data_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".finsnap")
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Args::parse();
    let data_dir = args.data_dir.unwrap_or_else(default_data_dir);

    init_logging(&data_dir, &args.log_level)?;

    let mut config = AppConfig::load(&data_dir);
    if let Some(url) = args.service_url {
        config.service_url = url;
    }

    let mut app = App::new(config)?;

    ratatui::run(|terminal| app.run(terminal))?;

    tracing::info!("Application shutting down");

    if let Err(err) = ratatui::try_restore() {
        tracing::error!("Failed to restore terminal: {err}");
    }

    Ok(())
}
