//! Diagnostic logging setup for the binary.

/// Route `log` output to stderr. Quiet (`warn`) unless `RUST_LOG` says otherwise.
pub fn init() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .target(env_logger::Target::Stderr)
        .init();
}
