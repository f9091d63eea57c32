use std::io;

/// Installs a stderr `fmt` subscriber at INFO.
///
/// The level is fixed: the binaries read no environment variables, `RUST_LOG`
/// included.
pub fn init_logging() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_target(false)
        .with_ansi(false)
        .with_writer(io::stderr)
        .init();
}
