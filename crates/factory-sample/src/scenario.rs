//! # Demo Scenarios
//!
//! The scripted call sequences, one per pattern. Each scenario runs the same
//! client procedure twice with two different concrete variants, separated by
//! a blank line. This demonstrates that the client code never changes while the
//! products it ends up working with do.

use std::io::Write;

use tracing::info;

use factory_patterns::abstract_factory::{self, ConcreteFactory1, ConcreteFactory2};
use factory_patterns::factory_method::{self, ConcreteCreator1, ConcreteCreator2};
use factory_patterns::DemoError;

/// Runs the Abstract Factory demonstration against `out`.
pub fn run_abstract_factory<W: Write>(out: &mut W) -> Result<(), DemoError> {
    info!("Running the abstract factory scenario");

    writeln!(out, "Client: Testing client code with the first factory type...")?;
    abstract_factory::client_code(&ConcreteFactory1, out)?;
    writeln!(out)?;
    writeln!(
        out,
        "Client: Testing the same client code with the second factory type..."
    )?;
    abstract_factory::client_code(&ConcreteFactory2, out)?;
    Ok(())
}

/// Runs the Factory Method demonstration against `out`.
pub fn run_factory_method<W: Write>(out: &mut W) -> Result<(), DemoError> {
    info!("Running the factory method scenario");

    writeln!(out, "App: Launched with the ConcreteCreator1.")?;
    factory_method::client_code(&ConcreteCreator1, out)?;
    writeln!(out)?;
    writeln!(out, "App: Launched with the ConcreteCreator2.")?;
    factory_method::client_code(&ConcreteCreator2, out)?;
    Ok(())
}
