use std::fs::File;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::config::LogConfig;

/// Installs the global `tracing` subscriber. `RUST_LOG` overrides the
/// default directive.
pub fn init(config: &LogConfig) -> std::io::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.default_directive()));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    // try_init fails only if a subscriber is already set, e.g. in tests
    if let Some(path) = &config.file {
        let file = File::create(path)?;
        let _ = builder
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .try_init();
    } else if config.quiet_terminal {
        let _ = builder.with_writer(std::io::sink).try_init();
    } else {
        let _ = builder.with_writer(std::io::stderr).try_init();
    }
    Ok(())
}
