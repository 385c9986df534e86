//! Tracing/logging initialization: pretty or JSON-lines to stderr, plus an
//! optional non-blocking file sink, keeping logs separate from the
//! results/error output on stdout.

use std::path::Path;

use tracing_subscriber::{fmt, EnvFilter};

use crate::cli::FILE_GUARD;

pub fn init_tracing(json: bool, log_level: &str, log_file: Option<&Path>) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    let builder = fmt().with_env_filter(filter).with_writer(std::io::stderr);

    if let Some(path) = log_file {
        let dir = path.parent().filter(|p| !p.as_os_str().is_empty()).unwrap_or_else(|| Path::new("."));
        let file_name = path
            .file_name()
            .map(|f| f.to_string_lossy().to_string())
            .unwrap_or_else(|| "ptcalc.log".to_string());
        let appender = tracing_appender::rolling::never(dir, file_name);
        let (non_blocking, guard) = tracing_appender::non_blocking(appender);
        let _ = FILE_GUARD.set(guard);

        let file_layer = fmt::layer().json().with_writer(non_blocking);
        use tracing_subscriber::layer::SubscriberExt;
        use tracing_subscriber::util::SubscriberInitExt;

        let base = if json {
            builder.json().finish()
        } else {
            builder.finish()
        };
        let _ = base.with(file_layer).try_init();
    } else if json {
        let _ = builder.json().try_init();
    } else {
        let _ = builder.try_init();
    }
}
