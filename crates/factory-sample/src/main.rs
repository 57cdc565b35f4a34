//! Binary entry point: runs both pattern demonstrations against stdout.
//!
//! Takes no arguments and reads no configuration. `RUST_LOG` controls
//! diagnostic verbosity only; the demo transcript itself is fixed.

use std::io::Write;

use tracing::info;

use factory_patterns::{setup_tracing, DemoError};
use factory_sample::scenario;

fn main() -> Result<(), DemoError> {
    // Setup tracing once for the entire application
    setup_tracing();

    info!("Starting the creational patterns demo");

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    scenario::run_abstract_factory(&mut out)?;
    writeln!(out)?;
    scenario::run_factory_method(&mut out)?;

    info!("Demo completed successfully");
    Ok(())
}
