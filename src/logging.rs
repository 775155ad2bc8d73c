//! Logger set-up for the `log` facade.

use env_logger::{Builder, Env};
use log::LevelFilter;

/// Level used when `RUST_LOG` is unset: `info` by default, `debug` for one
/// `-v` and `trace` for two or more.
#[must_use]
pub const fn default_level(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Info,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Installs `env_logger` as the global logger.
///
/// `RUST_LOG` takes precedence over `verbosity`. Calling this more than once
/// is harmless; later calls leave the first logger in place.
pub fn init(verbosity: u8) {
    let env = Env::default().default_filter_or(default_level(verbosity).as_str());
    let mut builder = Builder::from_env(env);
    if builder.try_init().is_err() {
        log::debug!("logger already installed");
    }
}
