//! File logging

use std::{env, fs, path::PathBuf};

use color_eyre::eyre::Result;
use tracing_error::ErrorLayer;
use tracing_subscriber::{
    fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer,
};

use super::paths::{get_data_dir, LOG_ENV, LOG_FILE};

/// Filter directives, from `RUST_LOG`, then the project variable, then `widgetui=info`
pub fn log_filter(rust_log: Option<String>, project_level: Option<String>) -> String {
    rust_log
        .or(project_level)
        .filter(|directives| !directives.trim().is_empty())
        .unwrap_or_else(|| format!("{}=info", env!("CARGO_CRATE_NAME")))
}

/// Route `tracing` and `log` records to `<data_dir>/widgetui.log`.
///
/// Returns the path of the log file.
pub fn initialize_logging() -> Result<PathBuf> {
    let directory = get_data_dir();
    fs::create_dir_all(&directory)?;
    let log_path = directory.join(LOG_FILE.as_str());
    let log_file = fs::File::create(&log_path)?;

    let filter = EnvFilter::try_new(log_filter(
        env::var("RUST_LOG").ok(),
        env::var(LOG_ENV.as_str()).ok(),
    ))?;
    let file_layer = fmt::layer()
        .with_writer(log_file)
        .with_ansi(false)
        .with_target(false)
        .with_file(true)
        .with_line_number(true)
        .with_filter(filter);

    tracing_subscriber::registry()
        .with(file_layer)
        .with(ErrorLayer::default())
        .try_init()?;

    Ok(log_path)
}
