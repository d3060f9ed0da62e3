pub mod persistence;

use std::{env, path::PathBuf, sync::Once};

const DEFAULT_DIR_NAME: &str = "expense_tracker";
const HOME_ENV: &str = "EXPENSE_TRACKER_HOME";
const DATA_FILE_ENV: &str = "EXPENSE_TRACKER_FILE";

static TRACING_INIT: Once = Once::new();

/// Initializes the global tracing subscriber with sensible defaults.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter = match "expense_tracker=info".parse() {
            Ok(directive) => EnvFilter::from_default_env().add_directive(directive),
            Err(_) => EnvFilter::from_default_env(),
        };

        fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
    });
}

/// Returns the directory holding `config.json`.
///
/// `EXPENSE_TRACKER_HOME` wins; otherwise the platform config directory is used,
/// falling back to the working directory.
pub fn app_data_dir() -> PathBuf {
    if let Some(custom) = env::var_os(HOME_ENV) {
        return PathBuf::from(custom);
    }
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_DIR_NAME)
}

/// Data-file path forced through the environment, if any.
pub fn data_file_override() -> Option<PathBuf> {
    env::var_os(DATA_FILE_ENV)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}
