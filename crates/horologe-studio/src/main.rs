use anyhow::Result;

use horologe_clock::ClockApplication;
use horologe_engine::logging::{init_logging, LoggingConfig};

fn main() {
    init_logging(LoggingConfig::default());

    if let Err(e) = run() {
        log::error!("horologe: {e:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    // Front face: Hamburg (UTC+1). Back face: one zone east (UTC+2).
    ClockApplication::new()
        .title("horologe")
        .size(900.0, 900.0)
        .front_utc_offset(1)
        .back_zone_offset(1)
        .run()
}
