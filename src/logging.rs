//! Debug-build logging
//!
//! The terminal belongs to the TUI, so records go to
//! `<cache dir>/askbar/askbar.log`. Release builds install no logger and
//! every `log::` call compiles to a level check.

use std::path::PathBuf;

const LOG_DIR: &str = "askbar";
const LOG_FILE: &str = "askbar.log";
#[cfg(debug_assertions)]
const DEFAULT_FILTER: &str = "askbar=debug";

pub fn log_path() -> Option<PathBuf> {
    dirs::cache_dir().map(|p| p.join(LOG_DIR).join(LOG_FILE))
}

/// Install the file logger; failures are ignored so logging never blocks startup
pub fn init() {
    #[cfg(debug_assertions)]
    if let Some(path) = log_path() {
        let _ = init_file_logger(&path);
    }
}

#[cfg(debug_assertions)]
fn init_file_logger(path: &std::path::Path) -> std::io::Result<()> {
    use std::fs::{self, OpenOptions};
    use std::io::Write;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(path)?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(DEFAULT_FILTER))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .format(|buf, record| {
            writeln!(
                buf,
                "{} {:<5} [{}] {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                record.level(),
                record.target(),
                record.args()
            )
        })
        .try_init()
        .map_err(std::io::Error::other)
}
