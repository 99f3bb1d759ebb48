//! Logger setup for the verfile binary
//!
//! Library code logs through the `log` facade only; this module wires that
//! facade to flexi_logger for the CLI.

// Global static logger handle for flexi_logger
static LOGGER_HANDLE: std::sync::OnceLock<std::sync::Mutex<flexi_logger::LoggerHandle>> =
    std::sync::OnceLock::new();

/// Initialize flexi_logger with the given level spec (defaults to "info").
pub fn init_logging(log_level: Option<&str>) -> Result<(), Box<dyn std::error::Error>> {
    use flexi_logger::Logger;

    let level_str = log_level.unwrap_or("info");
    let handle = Logger::try_with_str(level_str)?
        .format(simple_format)
        .log_to_stderr()
        .start()?;
    let _ = LOGGER_HANDLE.set(std::sync::Mutex::new(handle));

    Ok(())
}

// Simple text format without target info
fn simple_format(
    w: &mut dyn std::io::Write,
    now: &mut flexi_logger::DeferredNow,
    record: &log::Record,
) -> Result<(), std::io::Error> {
    let level_abbr = match record.level() {
        log::Level::Error => "ERR",
        log::Level::Warn => "WRN",
        log::Level::Info => "INF",
        log::Level::Debug => "DBG",
        log::Level::Trace => "TRC",
    };

    // Format: "YYYY-MM-DD HH:mm:ss.fff INF message"
    write!(
        w,
        "{} {} {}",
        now.format("%Y-%m-%d %H:%M:%S%.3f"),
        level_abbr,
        record.args()
    )
}
