//! Product variants for the factory-method demonstration. Stateless, like
//! their abstract-factory cousins, and identified only by their output.

/// The capability every product variant provides.
pub trait Product {
    fn operation(&self) -> String;
}

/// First product variant, built by [`ConcreteCreator1`](super::ConcreteCreator1).
pub struct ConcreteProduct1;

impl Product for ConcreteProduct1 {
    fn operation(&self) -> String {
        "{Result of the ConcreteProduct1}".to_string()
    }
}

/// Second product variant, built by [`ConcreteCreator2`](super::ConcreteCreator2).
pub struct ConcreteProduct2;

impl Product for ConcreteProduct2 {
    fn operation(&self) -> String {
        "{Result of the ConcreteProduct2}".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variants_identify_themselves() {
        assert_eq!(ConcreteProduct1.operation(), "{Result of the ConcreteProduct1}");
        assert_eq!(ConcreteProduct2.operation(), "{Result of the ConcreteProduct2}");
    }
}
