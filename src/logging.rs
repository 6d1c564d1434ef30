use log::{debug, error, info, warn};
use std::io::Write;

/// Filter used when `RUST_LOG` is unset; `-v` raises it.
pub fn default_filter(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "off",
        1 => "gistclip=info",
        _ => "gistclip=debug",
    }
}

/// Console logging goes to stderr so stdout only ever carries the gist URL.
pub fn init_logging(verbosity: u8) {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(default_filter(verbosity)),
    )
    .target(env_logger::Target::Stderr)
    .format(|buf, record| {
        writeln!(
            buf,
            "gistclip [{}] [{}:{}] {}",
            record.level(),
            record.file().unwrap_or("unknown"),
            record.line().unwrap_or(0),
            record.args()
        )
    })
    .init();
}

pub fn log_error(msg: &str) {
    error!("{}", msg);
}

pub fn log_warn(msg: &str) {
    warn!("{}", msg);
}

pub fn log_info(msg: &str) {
    info!("{}", msg);
}

pub fn log_debug(msg: &str) {
    debug!("{}", msg);
}
