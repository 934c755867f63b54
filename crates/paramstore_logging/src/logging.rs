use std::io;
use std::str::FromStr;

use paramstore_error::error::LoggingError;
use tracing::Level;
use tracing_subscriber::fmt::time::UtcTime;

const DEFAULT_TIME_PATTERN: &str =
    "[year]-[month]-[day]T[hour repr:24]:[minute]:[second]::[subsecond digits:4]";

/// Install the global JSON subscriber. `level` accepts the usual level
/// names ("trace" through "error"); `None` selects info.
pub fn setup_logging(level: Option<&str>) -> Result<(), LoggingError> {
    let level = match level {
        Some(level) => Level::from_str(level)
            .map_err(|e| LoggingError::Error(format!("Invalid log level {}: {}", level, e)))?,
        None => Level::INFO,
    };

    let time_format = time::format_description::parse(DEFAULT_TIME_PATTERN).map_err(|e| {
        LoggingError::Error(format!(
            "Failed to parse time format: {} with error: {}",
            DEFAULT_TIME_PATTERN, e
        ))
    })?;

    tracing_subscriber::fmt()
        .json()
        .with_max_level(level)
        .with_target(false)
        .flatten_event(true)
        .with_thread_ids(true)
        .with_timer(UtcTime::new(time_format))
        .with_writer(io::stdout)
        .try_init()
        .map_err(|e| LoggingError::Error(format!("Failed to setup logging with error: {}", e)))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_setup_logging() {
        // unknown level names are rejected before anything is installed
        assert!(setup_logging(Some("verbose")).is_err());

        setup_logging(Some("debug")).unwrap();

        // the global subscriber can only be installed once
        assert!(setup_logging(None).is_err());
    }
}
