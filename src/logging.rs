use std::fs::OpenOptions;
use std::sync::Mutex;

use time::macros::format_description;
use tracing_subscriber::fmt::time::UtcTime;
use tracing_subscriber::EnvFilter;

use crate::error::WordNetError;

/// Installs the global subscriber. Logs go to `log_file` if given, otherwise
/// to standard error. `RUST_LOG` overrides the default `info` level.
pub fn init(log_file : Option<&str>) -> Result<(), WordNetError> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info"));
    let timer = UtcTime::new(format_description!("[day]/[month]/[year repr:last_two] [hour]:[minute]"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_timer(timer);
    match log_file {
        Some(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            builder.with_ansi(false).with_writer(Mutex::new(file)).init();
        },
        None => builder.init()
    }
    Ok(())
}
