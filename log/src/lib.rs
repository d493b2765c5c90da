//! Logging setup for glide with file output and optional stderr.
//!
//! Logs always go to a file at `warn` level (or more verbose if a filter is set).
//! Stderr logging is enabled when `GLIDE_LOG` or `RUST_LOG` is set, or in debug builds.
//!
//! ## Environment Variables
//!
//! 1. **`GLIDE_LOG`** (highest priority) - glide-specific logging control
//! 2. **`RUST_LOG`** - Standard tracing environment variable
//! 3. **Default** - `warn` globally, `info` for glide crates
//!
//! `GLIDE_LOG=debug` raises every glide crate to `debug`; anything containing
//! `=`, `:` or `,` is used verbatim as a tracing filter.
//!
//! ## Log File Location
//!
//! Default: `<data_local_dir>/glide/logs/glide-<pid>.log`
//! - macOS: `~/Library/Application Support/glide/logs/glide-12345.log`
//! - Linux: `~/.local/share/glide/logs/glide-12345.log`
//!
//! Override with `--log-file <path>` or `GLIDE_LOG_FILE`.

use std::{
    env,
    path::{Path, PathBuf},
};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer, Registry,
};

/// Crates whose level follows a bare `GLIDE_LOG` value.
const GLIDE_CRATES: &[&str] = &["glide", "glide_web", "glide_bin"];

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Returned from [`init`]; must be held alive to ensure log file flushing.
pub struct LogGuard {
    _file_guard: WorkerGuard,
    pub log_file: PathBuf,
}

#[derive(Debug, Default)]
pub struct LogConfig {
    pub log_file_path: Option<PathBuf>,
}

/// Initialize logging.
///
/// Filters follow the priority described in the module docs:
/// `GLIDE_LOG` > `RUST_LOG` > default settings.
///
/// The returned [`LogGuard`] must be held for the lifetime of the program --
/// dropping it flushes and stops the background file writer.
pub fn init(config: LogConfig) -> Result<LogGuard, BoxError> {
    let (log_dir, filename) = resolve_log_path(config.log_file_path);

    std::fs::create_dir_all(&log_dir).ok();

    let file_appender = tracing_appender::rolling::never(&log_dir, &filename);
    let (non_blocking_file, file_guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false)
        .with_filter(create_file_filter());

    let console_enabled =
        env::var("GLIDE_LOG").is_ok() || env::var("RUST_LOG").is_ok() || cfg!(debug_assertions);

    let console_layer = if console_enabled {
        Some(fmt::layer().with_writer(std::io::stderr).with_filter(create_filter()))
    } else {
        None
    };

    Registry::default()
        .with(file_layer)
        .with(console_layer)
        .try_init()?;

    Ok(LogGuard {
        _file_guard: file_guard,
        log_file: log_dir.join(filename),
    })
}

/// Initialize logging for tests.
///
/// Console-only (no file output) and captured by the test harness. Will not crash
/// if called multiple times or if logging is already initialized by another test.
pub fn test() {
    let _ = fmt()
        .with_env_filter(create_filter())
        .with_test_writer()
        .try_init();
}

fn resolve_log_path(override_path: Option<PathBuf>) -> (PathBuf, String) {
    let filename = format!("glide-{}.log", std::process::id());

    if let Some(path) = override_path {
        if path.extension().is_some() {
            let dir = path.parent().unwrap_or_else(|| Path::new("."));
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or(filename);
            return (dir.to_path_buf(), name);
        }
        return (path, filename);
    }

    let dir = dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("glide")
        .join("logs");

    (dir, filename)
}

/// File filter: uses user-specified level if set, otherwise defaults to `warn`.
fn create_file_filter() -> EnvFilter {
    if env::var("GLIDE_LOG").is_ok() || env::var("RUST_LOG").is_ok() {
        return create_filter();
    }
    EnvFilter::new("warn")
}

/// Create the [`EnvFilter`] for the current environment.
pub fn create_filter() -> EnvFilter {
    EnvFilter::new(filter_directives(
        env::var("GLIDE_LOG").ok().as_deref(),
        env::var("RUST_LOG").ok().as_deref(),
    ))
}

/// Pick the filter directives: `GLIDE_LOG` > `RUST_LOG` > defaults.
fn filter_directives(glide_log: Option<&str>, rust_log: Option<&str>) -> String {
    if let Some(glide_log) = glide_log {
        return expand_glide_log(glide_log);
    }
    if let Some(rust_log) = rust_log {
        return rust_log.to_string();
    }
    expand_glide_log("info")
}

/// Expand a bare level into per-crate directives.
///
/// - `debug` becomes `warn,glide=debug,glide_web=debug,glide_bin=debug`
/// - `glide::animator=trace,warn` is used as-is
fn expand_glide_log(glide_log: &str) -> String {
    if glide_log.contains('=') || glide_log.contains(':') || glide_log.contains(',') {
        return glide_log.to_string();
    }

    let mut directives = String::from("warn");
    for krate in GLIDE_CRATES {
        directives.push_str(&format!(",{krate}={glide_log}"));
    }
    directives
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn glide_log_takes_priority() {
        assert_eq!(
            filter_directives(Some("debug"), Some("trace")),
            "warn,glide=debug,glide_web=debug,glide_bin=debug"
        );
    }

    #[test]
    fn rust_log_used_verbatim() {
        assert_eq!(filter_directives(None, Some("glide=trace")), "glide=trace");
    }

    #[test]
    fn default_is_info_for_glide() {
        assert_eq!(
            filter_directives(None, None),
            "warn,glide=info,glide_web=info,glide_bin=info"
        );
    }

    #[test]
    fn advanced_glide_log_syntax_passes_through() {
        assert_eq!(
            expand_glide_log("glide::animator=trace,warn"),
            "glide::animator=trace,warn"
        );
    }

    #[test]
    fn log_file_override_with_extension() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("custom.log");
        let (dir, name) = resolve_log_path(Some(path));
        assert_eq!(dir, tmp.path());
        assert_eq!(name, "custom.log");
    }

    #[test]
    fn log_file_override_as_directory() {
        let tmp = tempfile::tempdir().unwrap();
        let (dir, name) = resolve_log_path(Some(tmp.path().to_path_buf()));
        assert_eq!(dir, tmp.path());
        assert_eq!(name, format!("glide-{}.log", std::process::id()));
    }

    #[test]
    fn test_init_is_idempotent() {
        test();
        test();
    }
}
