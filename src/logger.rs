//! Logger setup for the command-line binary.
//!
//! The library only talks to the `log` facade; this installs `env_logger`
//! with a timestamped, level-coloured format. `RUST_LOG` overrides the
//! default `info` filter.

use chrono::Local;
use env_logger::Builder;
use log::Level;
use std::io::Write;

/// Install the global logger. Later calls are ignored.
pub fn init_logger() {
    let _ = Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format(|buf, record| {
            let time = Local::now().format("%Y-%m-%d %H:%M:%S%.3f");
            let level_color = match record.level() {
                Level::Error => "\x1b[31m\x1b[1m",
                Level::Warn => "\x1b[33m\x1b[1m",
                Level::Info => "\x1b[32m\x1b[1m",
                Level::Debug => "\x1b[36m\x1b[1m",
                Level::Trace => "\x1b[90m\x1b[1m",
            };
            writeln!(
                buf,
                "{}{} {}\x1b[0m [{}] {}",
                time,
                level_color,
                record.level(),
                record.target(),
                record.args(),
            )
        })
        .try_init();
}
