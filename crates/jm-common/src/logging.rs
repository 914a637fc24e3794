use std::{env, fs, panic, path::PathBuf, sync::OnceLock};

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt::writer::BoxMakeWriter};

/// Directory for daily-rotated log files. Unset means stdout.
pub const LOG_DIR_ENV: &str = "JM_LOG_DIR";
/// `1` or `true` also runs the default panic hook after logging.
pub const LOG_BACKTRACE_ENV: &str = "JM_LOG_INCLUDE_BACKTRACE";

static LOG_GUARD: OnceLock<WorkerGuard> = OnceLock::new();

/// Routes panics through `tracing` so they land in the same sink as other logs.
/// Only the first call installs the hook.
pub fn install_tracing_panic_hook(app_name: &'static str) {
    static INSTALLED: OnceLock<()> = OnceLock::new();

    INSTALLED.get_or_init(|| {
        let default_hook = panic::take_hook();
        let include_backtrace = env::var(LOG_BACKTRACE_ENV)
            .map(|value| is_truthy(&value))
            .unwrap_or(false);

        panic::set_hook(Box::new(move |info| {
            let location = info
                .location()
                .map(|loc| format!("{}:{}", loc.file(), loc.line()));
            let message = info
                .payload()
                .downcast_ref::<&str>()
                .map(|s| (*s).to_string())
                .or_else(|| info.payload().downcast_ref::<String>().cloned())
                .unwrap_or_else(|| "non-string panic payload".into());

            tracing::error!(
                application = app_name,
                location = location.as_deref().unwrap_or("unknown"),
                panic_message = %message,
                "panic"
            );

            if include_backtrace {
                default_hook(info);
            }
        }));
    });
}

/// `RUST_LOG` filtering (default `info`), written to stdout or to
/// `<JM_LOG_DIR>/<app_name>.log` rotated daily.
pub fn init_tracing_subscriber(app_name: &'static str) {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false);

    match log_file_writer(app_name) {
        Some(writer) => {
            let _ = builder.with_ansi(false).with_writer(writer).try_init();
        }
        None => {
            let _ = builder.with_writer(std::io::stderr).try_init();
        }
    }
}

fn log_file_writer(app_name: &str) -> Option<BoxMakeWriter> {
    let dir = PathBuf::from(env::var_os(LOG_DIR_ENV)?);
    if let Err(err) = fs::create_dir_all(&dir) {
        eprintln!("{LOG_DIR_ENV}={} is not usable ({err}); logging to stderr", dir.display());
        return None;
    }

    let appender = tracing_appender::rolling::daily(dir, format!("{app_name}.log"));
    let (writer, guard) = tracing_appender::non_blocking(appender);
    let _ = LOG_GUARD.set(guard);
    Some(BoxMakeWriter::new(writer))
}

fn is_truthy(value: &str) -> bool {
    value == "1" || value.eq_ignore_ascii_case("true")
}
