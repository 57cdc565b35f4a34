//! # Product Traits & Variants
//!
//! Each distinct product of a family has a base trait. All variants of a
//! product must implement its trait, and the client only ever talks to the
//! trait.
//!
//! # Architecture Note
//! Products are stateless unit structs: they carry no data, have no identity
//! beyond their type, and are created fresh per call. Two instances of the
//! same variant are always value-equal in behavior.

/// The capability every variant of product A provides.
pub trait ProductA {
    fn useful_function_a(&self) -> String;
}

/// First variant of product A. Compatible with [`ConcreteProductB1`].
pub struct ConcreteProductA1;

impl ProductA for ConcreteProductA1 {
    fn useful_function_a(&self) -> String {
        "The result of the product a1.".to_string()
    }
}

/// Second variant of product A. Compatible with [`ConcreteProductB2`].
pub struct ConcreteProductA2;

impl ProductA for ConcreteProductA2 {
    fn useful_function_a(&self) -> String {
        "The result of the product a2.".to_string()
    }
}

/// The capability every variant of product B provides.
///
/// Product B can do its own thing, and it can also **collaborate** with any
/// product A. The collaborator is taken as `&dyn ProductA` because the
/// pattern only guarantees compatibility within a family; the signature
/// stays abstract so the client never names a concrete variant.
pub trait ProductB {
    fn useful_function_b(&self) -> String;

    /// Invokes the collaborator and interpolates its result.
    fn another_useful_function_b(&self, collaborator: &dyn ProductA) -> String;
}

/// First variant of product B. Designed to collaborate with the A1 variant.
pub struct ConcreteProductB1;

impl ProductB for ConcreteProductB1 {
    fn useful_function_b(&self) -> String {
        "The result of the product b1.".to_string()
    }

    fn another_useful_function_b(&self, collaborator: &dyn ProductA) -> String {
        let result = collaborator.useful_function_a();
        format!("The result of the B1 collaborating with the ({result})")
    }
}

/// Second variant of product B. Designed to collaborate with the A2 variant.
pub struct ConcreteProductB2;

impl ProductB for ConcreteProductB2 {
    fn useful_function_b(&self) -> String {
        "The result of the product b2.".to_string()
    }

    fn another_useful_function_b(&self, collaborator: &dyn ProductA) -> String {
        let result = collaborator.useful_function_a();
        format!("The result of the B2 collaborating with the ({result})")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn product_a_variants_identify_themselves() {
        assert_eq!(
            ConcreteProductA1.useful_function_a(),
            "The result of the product a1."
        );
        assert_eq!(
            ConcreteProductA2.useful_function_a(),
            "The result of the product a2."
        );
    }

    #[test]
    fn product_b_variants_identify_themselves() {
        assert_eq!(
            ConcreteProductB1.useful_function_b(),
            "The result of the product b1."
        );
        assert_eq!(
            ConcreteProductB2.useful_function_b(),
            "The result of the product b2."
        );
    }

    #[test]
    fn collaboration_interpolates_the_collaborator_result() {
        assert_eq!(
            ConcreteProductB1.another_useful_function_b(&ConcreteProductA1),
            "The result of the B1 collaborating with the (The result of the product a1.)"
        );
        assert_eq!(
            ConcreteProductB2.another_useful_function_b(&ConcreteProductA2),
            "The result of the B2 collaborating with the (The result of the product a2.)"
        );
    }

    #[test]
    fn collaboration_works_across_families_too() {
        // The type system allows mixing families; only the factories enforce
        // the pairing. The collaboration itself stays well-defined.
        assert_eq!(
            ConcreteProductB1.another_useful_function_b(&ConcreteProductA2),
            "The result of the B1 collaborating with the (The result of the product a2.)"
        );
    }
}
