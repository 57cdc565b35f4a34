use factory_patterns::abstract_factory::{
    client_code, AbstractFactory, ConcreteFactory1, ConcreteFactory2,
};
use factory_patterns::mock::RecordingFactory;

fn transcript(factory: &dyn AbstractFactory) -> String {
    let mut out = Vec::new();
    client_code(factory, &mut out).expect("writing to a Vec cannot fail");
    String::from_utf8(out).expect("transcript is valid UTF-8")
}

#[test]
fn client_output_for_the_first_family() {
    assert_eq!(
        transcript(&ConcreteFactory1),
        "The result of the product b1.\n\
         The result of the B1 collaborating with the (The result of the product a1.)\n",
    );
}

#[test]
fn client_output_for_the_second_family() {
    assert_eq!(
        transcript(&ConcreteFactory2),
        "The result of the product b2.\n\
         The result of the B2 collaborating with the (The result of the product a2.)\n",
    );
}

/// The client must call each creation method exactly once per run.
#[test]
fn client_creates_each_product_exactly_once() {
    let factory = RecordingFactory::new(ConcreteFactory2);
    let mut out = Vec::new();
    client_code(&factory, &mut out).expect("writing to a Vec cannot fail");
    assert_eq!(factory.product_a_calls(), 1);
    assert_eq!(factory.product_b_calls(), 1);
}

/// Creation is idempotent: fresh, independent instances with equal behavior.
#[test]
fn repeated_creation_is_value_equal() {
    let factory = ConcreteFactory1;
    let b_first = factory.create_product_b();
    let b_second = factory.create_product_b();
    assert_eq!(b_first.useful_function_b(), b_second.useful_function_b());

    let a = factory.create_product_a();
    assert_eq!(
        b_first.another_useful_function_b(&*a),
        b_second.another_useful_function_b(&*a),
    );
}

/// Output must not depend on how the factory reached the client.
#[test]
fn client_output_is_stable_under_indirection() {
    let direct = transcript(&ConcreteFactory1);

    let boxed: Box<dyn AbstractFactory> = Box::new(ConcreteFactory1);
    assert_eq!(transcript(&*boxed), direct);

    let wrapped = RecordingFactory::new(ConcreteFactory1);
    assert_eq!(transcript(&wrapped), direct);
}
