use flexi_logger::{opt_format, Logger, LoggerHandle};

/// Level used when none is given on the command line.
pub const DEFAULT_LOG_SPEC: &str = "warn";

/// Start logging to stderr.
///
/// `spec` is a flexi_logger spec such as `"info"` or `"memorama=debug"`.
/// The returned handle must be kept alive for the rest of the program.
pub fn setup_logging(spec: &str) -> crate::Result<LoggerHandle> {
    let handle = Logger::try_with_str(spec)?
        .format(opt_format)
        .log_to_stderr()
        .start()?;
    Ok(handle)
}
