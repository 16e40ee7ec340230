use chrono::Utc;
use env_logger::{Builder, Target};
use log::{debug, LevelFilter, SetLoggerError};

/// Environment variable holding the default log level.
pub const LOG_ENV: &str = "ORFSCAN_LOG";

/// Command-line level wins, then `$ORFSCAN_LOG`, then `warn`.
pub fn resolve_level(cli_level: Option<LevelFilter>, env_value: Option<&str>) -> LevelFilter {
    if let Some(level) = cli_level {
        return level;
    }
    match env_value.map(|v| v.trim().parse::<LevelFilter>()) {
        Some(Ok(level)) => level,
        Some(Err(_)) => {
            eprintln!("Invalid {LOG_ENV} value, defaulting to 'warn'");
            LevelFilter::Warn
        }
        None => LevelFilter::Warn,
    }
}

/// Log to stderr so stdout only ever carries report data.
pub fn init_logging(level: LevelFilter) -> Result<(), SetLoggerError> {
    Builder::new()
        .filter_level(level)
        .target(Target::Stderr)
        .format(|buf, record| {
            use std::io::Write;
            writeln!(
                buf,
                "{} [{}] [{}:{}] {}",
                Utc::now().format("%Y-%m-%d %H:%M:%S%.3f UTC"),
                record.level(),
                record.module_path().unwrap_or("unknown"),
                record.line().unwrap_or(0),
                record.args()
            )
        })
        .try_init()?;

    debug!("logging initialized at level {level}");
    Ok(())
}
