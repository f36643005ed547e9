//! Logging initialization.
//!
//! Log lines go to stderr so the SARIF document on disk is the only output
//! artifact. `RUST_LOG` overrides the level chosen from `-v`/`-q`.

use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

/// Maps the CLI verbosity count to a default filter directive.
pub fn default_filter(verbose: u8, quiet: bool) -> &'static str {
    if quiet {
        return "axe_sarif_converter=error";
    }
    match verbose {
        0 => "axe_sarif_converter=warn",
        1 => "axe_sarif_converter=info",
        2 => "axe_sarif_converter=debug",
        _ => "axe_sarif_converter=trace",
    }
}

pub fn init_logging(verbose: u8, quiet: bool) {
    let fmt_layer = fmt::layer().with_target(false).with_writer(std::io::stderr);
    let filter_layer = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbose, quiet)));

    // try_init keeps a subscriber the host application already installed.
    let _ = tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .try_init();
}
