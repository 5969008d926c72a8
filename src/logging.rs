use std::io::Write;

use colored::Colorize;
use env_logger::Builder;
use log::{Level, LevelFilter};

pub fn init_logger(verbosity: u8, quiet: bool) {
    let level = if quiet {
        LevelFilter::Error // -q: only errors
    } else {
        match verbosity {
            0 => LevelFilter::Info,  // default: the tool's output is its info log
            1 => LevelFilter::Debug, // -v: debug and up
            _ => LevelFilter::Trace, // -vv: trace and up
        }
    };

    let mut builder = Builder::new();
    builder.filter_level(level);

    builder.format(|buf, record| {
        let level = record.level();

        let level_label = match level {
            Level::Error => "ERROR".red().bold(),
            Level::Warn  => "WARN ".yellow().bold(),
            Level::Info  => "INFO ".white().bold(),
            Level::Debug => "DEBUG".bright_black(),
            Level::Trace => "TRACE".bright_black(),
        };

        writeln!(
            buf,
            "{} {} {}",
            buf.timestamp(),
            level_label,
            record.args()
        )
    });

    builder.init();
}
