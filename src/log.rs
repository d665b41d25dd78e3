use log::LevelFilter;
use std::io::Write;

/// Installs an `env_logger` writing `[LEVEL] message` lines to stderr. Settings in `RUST_LOG`
/// take precedence over `level`. Calling it more than once is harmless.
pub fn build_logger_for_level(level: LevelFilter) {
    let _ = env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
        .target(env_logger::Target::Stderr)
        .try_init();
}

/// Raises `base` by one level per `verbosity`, i.e. `-v` turns `Warn` into `Info`
pub fn build_logger_for_verbosity(base: LevelFilter, verbosity: usize) {
    let levels = [
        LevelFilter::Off,
        LevelFilter::Error,
        LevelFilter::Warn,
        LevelFilter::Info,
        LevelFilter::Debug,
        LevelFilter::Trace,
    ];

    let base_idx = levels.iter().position(|&l| l == base).unwrap_or(2);
    let level = levels[(base_idx + verbosity).min(levels.len() - 1)];
    build_logger_for_level(level);
}
