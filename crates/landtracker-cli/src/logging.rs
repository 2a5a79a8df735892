//! Log output setup.

use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset.
///
/// `--verbose` raises the configured level to `debug`, which is where the
/// gate reports individual decisions.
pub fn default_filter(configured: &str, verbose: bool) -> String {
    if verbose {
        "debug".to_string()
    } else {
        configured.to_string()
    }
}

/// Installs the global subscriber, writing to stderr so stdout stays clean
/// for command output. `log` records from the libraries are bridged in.
pub fn init(configured: &str, verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(configured, verbose)));

    if tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .is_err()
    {
        eprintln!("logging already initialized");
    }
}
