//! Logging setup

use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset
///
/// Other crates stay at warnings; this crate gets more with each `-v`.
pub fn default_directives(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "warn,rxgithub_link=info",
        _ => "warn,rxgithub_link=debug",
    }
}

/// Install a stderr subscriber
pub fn init_logging(verbosity: u8) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(verbosity)));

    // stdout carries the command output, so logs go to stderr
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}
