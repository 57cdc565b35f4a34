//! # Client Procedure
//!
//! Works with any creator through the [`FactoryMethod`] trait. As long as the
//! client keeps talking to the creator via the abstract capabilities, it can
//! be handed any variant.

use std::io::Write;

use tracing::debug;

use super::creator::{Creator, FactoryMethod};
use crate::error::DemoError;

/// Runs the demonstration against an arbitrary creator.
///
/// Writes a fixed informational line followed by the result of
/// [`some_operation`](Creator::some_operation). The procedure has no idea
/// which concrete creator it received, and it still works.
pub fn client_code<W: Write>(creator: &dyn FactoryMethod, out: &mut W) -> Result<(), DemoError> {
    debug!("Running the shared creator operation");
    writeln!(
        out,
        "Client: I'm not aware of the creator's class, but it still works."
    )?;
    writeln!(out, "{}", creator.some_operation())?;
    Ok(())
}
