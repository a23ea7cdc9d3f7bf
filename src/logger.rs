use anyhow::Result;
use log::LevelFilter;
use simple_logger::SimpleLogger;

// Warn by default so stdout stays a bare number; RUST_LOG raises the level.
pub fn init() -> Result<()> {
    SimpleLogger::new().with_level(LevelFilter::Warn).env().init()?;

    Ok(())
}
