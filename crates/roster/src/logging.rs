//! Logging bootstrap for the CLI.
//!
//! Logs go to stderr so they never mix with command output. `RUST_LOG`, when
//! set, takes precedence over the configured level; `--verbose` raises the
//! configured level to `debug`.

use flexi_logger::{Logger, LoggerHandle};
use log::debug;

const SUPPORTED_LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

/// Starts the logger. The returned handle must be kept alive for the life of
/// the process.
pub fn init_logging(level: &str, verbose: bool) -> Result<LoggerHandle, String> {
    let level = if verbose {
        "debug".to_string()
    } else {
        normalize_level(level)?
    };

    let handle = Logger::try_with_env_or_str(&level)
        .map_err(|err| format!("invalid log level `{level}`: {err}"))?
        .log_to_stderr()
        .start()
        .map_err(|err| format!("failed to start logger: {err}"))?;

    debug!(
        "event=cli_start module=cli status=ok level={} version={}",
        level,
        env!("CARGO_PKG_VERSION")
    );
    Ok(handle)
}

fn normalize_level(level: &str) -> Result<String, String> {
    let normalized = level.trim().to_ascii_lowercase();
    if SUPPORTED_LEVELS.contains(&normalized.as_str()) {
        Ok(normalized)
    } else {
        Err(format!(
            "unsupported log level `{}`; expected one of {}",
            level,
            SUPPORTED_LEVELS.join(", ")
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::normalize_level;

    #[test]
    fn test_normalize_level_accepts_known_levels() {
        assert_eq!(normalize_level(" WARN ").unwrap(), "warn");
        assert_eq!(normalize_level("trace").unwrap(), "trace");
    }

    #[test]
    fn test_normalize_level_rejects_unknown() {
        assert!(normalize_level("chatty").is_err());
    }
}
