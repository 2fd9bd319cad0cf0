use log::LevelFilter;
use simple_logger::SimpleLogger;

/// Set the log level for the application.
///
/// The logger itself is installed once by `init_logging`; the global max
/// level is what commands adjust afterwards for --verbose / --quiet.
pub fn set_log_level(level: LevelFilter) {
    log::set_max_level(level);
}

/// Initialize logging with the specified level
pub fn init_logging(debug: bool) -> LevelFilter {
    let log_level = if debug {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    // Install the logger wide open; filtering happens at the facade so the
    // level can still be changed after initialization
    let _ = SimpleLogger::new()
        .with_level(LevelFilter::Trace)
        .init();
    log::set_max_level(log_level);

    log_level
}

/// Configure backtrace if trace is enabled
pub fn configure_backtrace(trace: bool) {
    if trace {
        std::env::set_var("RUST_BACKTRACE", "1");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_can_change_after_init() {
        init_logging(false);
        assert_eq!(log::max_level(), LevelFilter::Info);

        set_log_level(LevelFilter::Error);
        assert_eq!(log::max_level(), LevelFilter::Error);

        set_log_level(LevelFilter::Debug);
        assert_eq!(log::max_level(), LevelFilter::Debug);
    }
}
