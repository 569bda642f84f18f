//! Process-wide log sink bootstrap.
//!
//! # Responsibility
//! - Initialize size-rotated file logging exactly once per process.
//! - Emit stable `event=... module=... status=...` diagnostic lines.
//!
//! # Invariants
//! - Logging init is idempotent for the same file and level.
//! - Logging initialization must not panic.
//! - Re-initialization with a different file or level is rejected.

use crate::config::LoggingConfig;
use flexi_logger::{Cleanup, Criterion, FileSpec, Logger, LoggerHandle, Naming, WriteMode};
use log::{error, info};
use once_cell::sync::OnceCell;
use std::path::{Path, PathBuf};

const DEFAULT_LOG_BASENAME: &str = "meeting_tracker";
const MAX_LOG_FILE_SIZE_BYTES: u64 = 10 * 1024 * 1024;
const MAX_LOG_FILES: usize = 5;
const MAX_PANIC_PAYLOAD_CHARS: usize = 160;

static LOGGING_STATE: OnceCell<LoggingState> = OnceCell::new();
static PANIC_HOOK_INSTALLED: OnceCell<()> = OnceCell::new();

struct LoggingState {
    level: &'static str,
    log_file: PathBuf,
    _logger: LoggerHandle,
}

/// Initializes logging from startup configuration.
pub fn init_logging_from(config: &LoggingConfig) -> Result<(), String> {
    init_logging(&config.log_level, &config.log_file)
}

/// Initializes file logging with `level` at `log_file`.
///
/// Relative paths are resolved against the current directory.
///
/// # Errors
/// - `level` is unsupported.
/// - `log_file` is empty or its directory cannot be created.
/// - The logger backend fails to start.
/// - Logging is already active with a different file or level.
pub fn init_logging(level: &str, log_file: impl AsRef<Path>) -> Result<(), String> {
    let normalized_level = normalize_level(level)?;
    let normalized_file = normalize_log_file(log_file.as_ref())?;

    if let Some(state) = LOGGING_STATE.get() {
        return check_same_config(state, normalized_level, &normalized_file);
    }

    let init_file = normalized_file.clone();
    let state = LOGGING_STATE.get_or_try_init(|| -> Result<LoggingState, String> {
        let logger = start_logger(normalized_level, &init_file)?;

        install_panic_hook_once();

        info!(
            "event=app_start module=core status=ok platform={} version={}",
            std::env::consts::OS,
            env!("CARGO_PKG_VERSION")
        );
        info!(
            "event=logging_init module=core status=ok level={} log_file={}",
            normalized_level,
            init_file.display()
        );

        Ok(LoggingState {
            level: normalized_level,
            log_file: init_file,
            _logger: logger,
        })
    })?;

    check_same_config(state, normalized_level, &normalized_file)
}

/// Returns `(level, log_file)` when logging is active.
pub fn logging_status() -> Option<(&'static str, PathBuf)> {
    LOGGING_STATE
        .get()
        .map(|state| (state.level, state.log_file.clone()))
}

fn start_logger(level: &'static str, log_file: &Path) -> Result<LoggerHandle, String> {
    let directory = log_file.parent().unwrap_or_else(|| Path::new("."));
    std::fs::create_dir_all(directory).map_err(|err| {
        format!(
            "failed to create log directory `{}`: {err}",
            directory.display()
        )
    })?;

    let basename = log_file
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or(DEFAULT_LOG_BASENAME);
    let mut file_spec = FileSpec::default()
        .directory(directory)
        .basename(basename)
        .suppress_timestamp();
    if let Some(suffix) = log_file.extension().and_then(|ext| ext.to_str()) {
        file_spec = file_spec.suffix(suffix);
    }

    Logger::try_with_str(level)
        .map_err(|err| format!("invalid log level `{level}`: {err}"))?
        .log_to_file(file_spec)
        .rotate(
            Criterion::Size(MAX_LOG_FILE_SIZE_BYTES),
            Naming::NumbersDirect,
            Cleanup::KeepLogFiles(MAX_LOG_FILES),
        )
        .write_mode(WriteMode::Direct)
        .append()
        .format_for_files(flexi_logger::detailed_format)
        .start()
        .map_err(|err| format!("failed to start logger: {err}"))
}

fn check_same_config(state: &LoggingState, level: &str, log_file: &Path) -> Result<(), String> {
    if state.log_file != log_file {
        return Err(format!(
            "logging already initialized at `{}`; refusing to switch to `{}`",
            state.log_file.display(),
            log_file.display()
        ));
    }
    if state.level != level {
        return Err(format!(
            "logging already initialized with level `{}`; refusing to switch to `{}`",
            state.level, level
        ));
    }
    Ok(())
}

fn normalize_level(level: &str) -> Result<&'static str, String> {
    match level.trim().to_ascii_lowercase().as_str() {
        "trace" => Ok("trace"),
        "debug" => Ok("debug"),
        "info" => Ok("info"),
        "warn" | "warning" => Ok("warn"),
        "error" => Ok("error"),
        other => Err(format!(
            "unsupported log level `{other}`; expected trace|debug|info|warn|error"
        )),
    }
}

fn normalize_log_file(log_file: &Path) -> Result<PathBuf, String> {
    if log_file.as_os_str().is_empty() || log_file.file_name().is_none() {
        return Err(format!(
            "log_file must name a file, got `{}`",
            log_file.display()
        ));
    }
    if log_file.is_absolute() {
        return Ok(log_file.to_path_buf());
    }
    std::env::current_dir()
        .map(|cwd| cwd.join(log_file))
        .map_err(|err| format!("failed to resolve log_file `{}`: {err}", log_file.display()))
}

fn install_panic_hook_once() {
    if PANIC_HOOK_INSTALLED.get().is_some() {
        return;
    }

    let previous_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        // Payload may echo user input; keep it to one bounded line.
        let location = panic_info
            .location()
            .map(|loc| format!("{}:{}", loc.file(), loc.line()))
            .unwrap_or_else(|| "unknown".to_string());
        let payload = panic_payload_summary(panic_info);
        error!(
            "event=panic_captured module=core status=error location={} payload={}",
            location, payload
        );
        previous_hook(panic_info);
    }));

    let _ = PANIC_HOOK_INSTALLED.set(());
}

fn panic_payload_summary(info: &std::panic::PanicHookInfo<'_>) -> String {
    let payload = if let Some(message) = info.payload().downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = info.payload().downcast_ref::<String>() {
        message.clone()
    } else {
        "non-string panic payload".to_string()
    };

    sanitize_message(&payload, MAX_PANIC_PAYLOAD_CHARS)
}

fn sanitize_message(value: &str, max_chars: usize) -> String {
    let normalized = value.replace(['\n', '\r'], " ");
    let mut truncated = normalized.chars().take(max_chars).collect::<String>();
    if normalized.chars().count() > max_chars {
        truncated.push_str("...");
    }
    truncated
}

#[cfg(test)]
mod tests {
    use super::{
        init_logging, logging_status, normalize_level, normalize_log_file, sanitize_message,
    };
    use std::path::Path;

    #[test]
    fn normalize_level_accepts_known_values() {
        assert_eq!(normalize_level("INFO").unwrap(), "info");
        assert_eq!(normalize_level(" warning ").unwrap(), "warn");
        assert!(normalize_level("verbose").is_err());
    }

    #[test]
    fn normalize_log_file_resolves_relative_and_rejects_empty() {
        let resolved = normalize_log_file(Path::new("logs/app.log")).unwrap();
        assert!(resolved.is_absolute());
        assert!(resolved.ends_with("logs/app.log"));

        assert!(normalize_log_file(Path::new("")).is_err());
    }

    #[test]
    fn sanitize_message_removes_newlines_and_truncates() {
        let sanitized = sanitize_message("line1\nline2\rline3", 8);
        assert!(!sanitized.contains('\n'));
        assert!(!sanitized.contains('\r'));
        assert!(sanitized.ends_with("..."));
    }

    #[test]
    fn init_logging_is_idempotent_for_same_config_and_rejects_conflicts() {
        let dir = tempfile::tempdir().unwrap();
        let log_file = dir.path().join("nested").join("tracker.log");
        let other_file = dir.path().join("other.log");

        init_logging("info", &log_file).unwrap();
        init_logging("INFO", &log_file).unwrap();

        let level_error = init_logging("debug", &log_file).unwrap_err();
        assert!(level_error.contains("refusing to switch"));

        let file_error = init_logging("info", &other_file).unwrap_err();
        assert!(file_error.contains("refusing to switch"));

        let (active_level, active_file) = logging_status().unwrap();
        assert_eq!(active_level, "info");
        assert_eq!(active_file, log_file);

        log::info!("event=logging_written module=test status=ok");
        assert!(log_file.is_file());
        let content = std::fs::read_to_string(&log_file).unwrap();
        assert!(content.contains("event=logging_written"));
    }
}
