use chrono::Local;
use colored::Colorize;
use fern::Dispatch;
use log::LevelFilter;
use std::fs::{OpenOptions, create_dir_all};
use std::path::Path;

/// Maps a textual level to a filter, falling back to `Info`.
pub fn level_filter(log_level: &str) -> LevelFilter {
    match log_level.trim().to_lowercase().as_str() {
        "trace" => LevelFilter::Trace,
        "debug" => LevelFilter::Debug,
        "info" => LevelFilter::Info,
        "warn" => LevelFilter::Warn,
        "error" => LevelFilter::Error,
        "off" => LevelFilter::Off,
        _ => LevelFilter::Info,
    }
}

/// Installs the global logger, writing to stdout and appending to `log_file_path`.
pub fn init_logger(log_level: &str, log_file_path: &str) -> Result<(), fern::InitError> {
    if let Some(parent) = Path::new(log_file_path).parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            create_dir_all(parent)?;
        }
    }

    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file_path)?;

    Dispatch::new()
        .format(|out, message, record| {
            let level_str = match record.level() {
                log::Level::Error => "ERROR".red(),
                log::Level::Warn => "WARN".yellow(),
                log::Level::Info => "INFO".green(),
                log::Level::Debug => "DEBUG".cyan(),
                log::Level::Trace => "TRACE".normal(),
            };

            out.finish(format_args!(
                "[{}][{}][{}] {}",
                Local::now().format("%Y-%m-%d %H:%M:%S"),
                level_str,
                record.target(),
                message
            ))
        })
        .level(level_filter(log_level))
        // sqlx logs every statement at info
        .level_for("sqlx", LevelFilter::Warn)
        .level_for("sea_orm", LevelFilter::Warn)
        .chain(std::io::stdout())
        .chain(log_file)
        .apply()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_levels_case_insensitively() {
        assert_eq!(level_filter("DEBUG"), LevelFilter::Debug);
        assert_eq!(level_filter(" warn "), LevelFilter::Warn);
        assert_eq!(level_filter("off"), LevelFilter::Off);
    }

    #[test]
    fn unknown_level_falls_back_to_info() {
        assert_eq!(level_filter("api=info"), LevelFilter::Info);
        assert_eq!(level_filter(""), LevelFilter::Info);
    }

    #[test]
    fn creates_log_directory_and_installs_once() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("seeder.log");
        init_logger("debug", path.to_str().unwrap()).unwrap();
        assert!(path.exists());

        // A second global logger cannot be installed.
        assert!(init_logger("debug", path.to_str().unwrap()).is_err());
    }
}
