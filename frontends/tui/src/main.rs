use anyhow::Result;
use clap::Parser;
use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use xdf_tui::config::{ExplorerConfig, CONFIG_ENV_VAR};
use xdf_tui::launcher::run_app;

/// Browse an XDatenfelder JSON export in the terminal
#[derive(Debug, Parser)]
#[command(name = "xdf-explorer", version)]
struct Args {
    /// Export to open on start
    file: Option<PathBuf>,

    /// YAML configuration file
    #[arg(short, long, env = CONFIG_ENV_VAR)]
    config: Option<PathBuf>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let args = Args::parse();
    let config = ExplorerConfig::resolve(args.config.as_deref());

    init_logging(&config);

    run_app(config, args.file).await
}

/// Log to a file so the terminal output stays clean.
/// `RUST_LOG` overrides the configured filter.
fn init_logging(config: &ExplorerConfig) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_filter))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let log_file_path = config.log_file_path();
    if let Some(dir) = log_file_path.parent() {
        std::fs::create_dir_all(dir).ok();
    }

    let registry = tracing_subscriber::registry().with(filter);
    match OpenOptions::new().create(true).append(true).open(&log_file_path) {
        Ok(file) => registry
            .with(fmt::layer().with_writer(Mutex::new(file)).with_ansi(false))
            .init(),
        Err(e) => {
            eprintln!(
                "Warning: Could not open log file {}: {}, logging disabled",
                log_file_path.display(),
                e
            );
            registry
                .with(fmt::layer().with_writer(std::io::sink).with_ansi(false))
                .init();
        }
    }
}
