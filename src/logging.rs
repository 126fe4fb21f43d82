// src/logging.rs
use env_logger::Env;

/// Default log filter for the given verbosity. `RUST_LOG` still wins.
pub fn default_filter(verbose: u8, quiet: bool) -> &'static str {
    if quiet {
        return "off";
    }
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Installs the global logger. Calling it twice is harmless.
pub fn init(verbose: u8, quiet: bool) {
    let _ = env_logger::Builder::from_env(Env::default().default_filter_or(default_filter(verbose, quiet)))
        .format_timestamp(None)
        .try_init();
}
