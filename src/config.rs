//! Config handling

use tracing::log::LevelFilter;

/// Sets up logging based on the debug flag. Log lines go to stderr, stdout is
/// reserved for command output.
pub fn setup_logging(debug: bool) -> Result<(), Box<std::io::Error>> {
    let level = if debug {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    let mut logger = simple_logger::SimpleLogger::new().with_level(level);
    if !debug {
        logger = logger
            .with_module_level("ureq", LevelFilter::Warn)
            .with_module_level("ureq_proto", LevelFilter::Warn)
            .with_module_level("rustls", LevelFilter::Warn);
    }
    logger.init().map_err(|err| {
        eprintln!("Failed to initialize logger: {}", err);
        Box::new(std::io::Error::other(err))
    })
}
