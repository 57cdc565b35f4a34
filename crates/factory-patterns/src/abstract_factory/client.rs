//! # Client Procedure
//!
//! The client only ever sees the [`AbstractFactory`] and product traits. It
//! can therefore work with any factory variant, present or future, without
//! a single change.

use std::io::Write;

use tracing::debug;

use super::factory::AbstractFactory;
use crate::error::DemoError;

/// Runs the demonstration against an arbitrary factory.
///
/// Calls `create_product_a` and `create_product_b` exactly once each, then
/// writes two lines to `out`: the B product's own result, followed by its
/// collaboration with the A product. The procedure never inspects which
/// concrete variants it received; that is the behavioral guarantee the
/// pattern exists to enforce.
///
/// # Example
///
/// ```rust
/// use factory_patterns::abstract_factory::{client_code, ConcreteFactory2};
///
/// let mut out = Vec::new();
/// client_code(&ConcreteFactory2, &mut out).unwrap();
/// assert_eq!(
///     String::from_utf8(out).unwrap(),
///     "The result of the product b2.\n\
///      The result of the B2 collaborating with the (The result of the product a2.)\n",
/// );
/// ```
pub fn client_code<W: Write>(factory: &dyn AbstractFactory, out: &mut W) -> Result<(), DemoError> {
    debug!("Requesting a product pair from the factory");
    let product_a = factory.create_product_a();
    let product_b = factory.create_product_b();

    writeln!(out, "{}", product_b.useful_function_b())?;
    writeln!(out, "{}", product_b.another_useful_function_b(&*product_a))?;
    Ok(())
}
