use crate::{
    error::RenderError,
    pretty_print_expression, render_node,
    tests::util::*,
    EmptyScope, ExpressionNode, RenderConfig,
};

#[test]
fn test_verbose() {
    assert_eq!(
        render!("a + b*x", scope! { a => 1.2, b => 2.3 }, RenderConfig::default().with_precision(6)),
        "1.20000 + (2.30000 * x)",
    );
    assert_eq!(render!("a + b*x", scope! { a => 1.2, b => 2.3 }), "1.20 + (2.30 * x)");

    // Every operator child is wrapped, however tightly it binds
    assert_eq!(render!("a^b^c"), "a ^ (b ^ c)");
    assert_eq!(render!("a - -b"), "a - (-b)");
    assert_eq!(render!("-(x + 1)"), "-(x + 1)");
    assert_eq!(render!("-x"), "-x");
    assert_eq!(render!("(x + 1)!"), "(x + 1)!");
    assert_eq!(render!("2x"), "2 * x");
}

#[test]
fn test_opaque_values() {
    assert_eq!(
        render!("a + b*e^(x+1)", scope! { a => "(12 +/- 2.321)", b => "(1.213 +/- 0.021)" }),
        "(12 +/- 2.321) + ((1.213 +/- 0.021) * (e ^ (x + 1)))",
    );
}

#[test]
fn test_simplified() {
    assert_eq!(render!("a + b*x", scope! { a => 1.2, b => 2.3 }, simplified()), "1.20 + 2.30x");
    assert_eq!(render!("a + b*x", scope! { a => 0, b => 1 }, simplified()), "x");
    assert_eq!(render!(POLYNOMIAL, polynomial_scope(), simplified()), "2.13e+6x + 212x^2 + 1.00e-19x^4");
    assert_eq!(render!(GAUSSIAN, gaussian_scope(), simplified()), "e^((-(x + 212)^2) / (2(1.00)^2))");
    assert_eq!(render!(TRIG, trig_scope(), simplified()), "cos(2(1.32)x) + 1.32sin(x)");
    assert_eq!(render!("a + b*e^(x+1)", scope! { a => 12, b => 2 }, simplified()), "12.0 + 2.00e^(x + 1)");
}

#[test]
fn test_simplified_parentheses() {
    assert_eq!(render!("x - (y + z)", EmptyScope, simplified()), "x - (y + z)");
    assert_eq!(render!("x + (y + z)", EmptyScope, simplified()), "x + y + z");
    assert_eq!(render!("(a^b)^c", EmptyScope, simplified()), "(a^b)^c");
    assert_eq!(render!("a^b^c", EmptyScope, simplified()), "a^b^c");
    assert_eq!(render!("(a*b) / c", EmptyScope, simplified()), "(a*b) / c");
    assert_eq!(render!("a * (b / c)", EmptyScope, simplified()), "a*b / c");
    assert_eq!(render!("-(a + b)", EmptyScope, simplified()), "-(a + b)");
    assert_eq!(render!("x!", EmptyScope, simplified()), "x!");
    assert_eq!(render!("(x + 1)!", EmptyScope, simplified()), "(x + 1)!");
    assert_eq!(render!("x*(-y)", EmptyScope, simplified()), "x*(-y)");
    assert_eq!(render!("(-a)*b", EmptyScope, simplified()), "(-a)*b");
    assert_eq!(render!("-(a*b)", EmptyScope, simplified()), "-(a*b)");
    assert_eq!(render!("x + (-a + b)", EmptyScope, simplified()), "x + (-a + b)");
    assert_eq!(render!("x = -a + b", EmptyScope, simplified()), "x = -a + b");
    assert_eq!(render!("-(a / b)", EmptyScope, simplified()), "-(a / b)");
    assert_eq!(render!("-x^2!", EmptyScope, simplified()), "-x^2!");
    assert_eq!(render!("2*((-b)*a)", EmptyScope, simplified()), "2((-b)*a)");

    // Assignment associates to the right
    assert_eq!(render!("a = b = c", EmptyScope, simplified()), "a = b = c");
    assert_eq!(render!("(a = b) = c", EmptyScope, simplified()), "(a = b) = c");
    assert_eq!(render!("(a = b) = c"), "(a = b) = c");
}

#[test]
fn test_simplified_signs() {
    assert_eq!(render!("0 - x", EmptyScope, simplified()), "-x");
    assert_eq!(render!("a - b", scope! { a => 0, b => -2 }, simplified()), "2.00");
    assert_eq!(render!("a - -b", EmptyScope, simplified()), "a + b");
    assert_eq!(render!("a - -(b + c)", EmptyScope, simplified()), "a + b + c");
    assert_eq!(render!("--x", EmptyScope, simplified()), "x");
    assert_eq!(render!("x + y", scope! { y => -3 }, simplified()), "x - 3.00");
    assert_eq!(render!("x*y", scope! { x => -2 }, simplified()), "-2.00y");
    assert_eq!(render!("x*y", scope! { x => -2, y => "z" }, simplified()), "-2.00z");

    // A negated numeral is still a numeral
    assert_eq!(render!("-2x", EmptyScope, simplified()), "-2x");
    assert_eq!(render!("-2(3)", EmptyScope, simplified()), "-2(3)");
    assert_eq!(render!("-2.00y", EmptyScope, simplified()), "-2.00y");
    assert_eq!(render!("-2x"), "(-2) * x");

    // Opaque text which starts with a minus takes part in sign folding
    assert_eq!(render!("x*y", scope! { x => 2, y => "-5" }, simplified()), "-2.00(5)");
    assert_eq!(render!("x - y", scope! { y => "-5" }, simplified()), "x + 5");
    assert_eq!(render!("x + y", scope! { y => "-k" }, simplified()), "x - k");
    assert_eq!(render!("y^x", scope! { y => "-5" }, simplified()), "(-5)^x");
    assert_eq!(render!("-y", scope! { y => "-5" }, simplified()), "5");
}

#[test]
fn test_numeric_products() {
    assert_eq!(render!("2*3*x", EmptyScope, simplified()), "2(3)x");
    assert_eq!(render!("3*(2*x)", EmptyScope, simplified()), "3(2)x");
    assert_eq!(render!("2*3*4*x", EmptyScope, simplified()), "2(3)(4)x");
    assert_eq!(render!("a*b", scope! { a => 2, b => -3 }, simplified()), "2.00(-3.00)");
    assert_eq!(render!("0*x + y", EmptyScope, simplified()), "y");
}

#[test]
fn test_leaves() {
    assert_eq!(render!("\"hello\" + x"), "\"hello\" + x");
    assert_eq!(render!("max(a, b)"), "max(a, b)");
    assert_eq!(render!("max(a, b)", scope! { a => 1, b => 2 }), "max(1.00, 2.00)");
    assert_eq!(render!("x", scope! { x => f64::INFINITY }), "Infinity");
    assert_eq!(render!("x", scope! { x => f64::NAN }), "NaN");

    // Constants are written as they were in the source
    assert_eq!(render!("2.13e+6 + 0.50", EmptyScope, simplified()), "2.13e+6 + 0.50");
}

#[test]
fn test_trim_zeros() {
    assert_eq!(
        render!("a + b*x", scope! { a => 1.2, b => 2.3 }, simplified().trim_zeros(true)),
        "1.2 + 2.3x",
    );
    assert_eq!(
        render!("a + b*e^(x+1)", scope! { a => 12, b => 2 }, simplified().trim_zeros(true)),
        "12 + 2e^(x + 1)",
    );
}

#[test]
fn test_rank_overrides() {
    assert_eq!(render!("1:(n + 1)", EmptyScope, simplified()), "1 : (n + 1)");
    assert_eq!(render!("1:(n + 1)", EmptyScope, simplified().with_rank(":", 9)), "1 : n + 1");
}

#[test]
fn test_render_node() {
    let node = ExpressionNode::binary("+", ExpressionNode::number(1.0), ExpressionNode::symbol("x"));
    assert_eq!(render_node(&node, &EmptyScope, &RenderConfig::default()).unwrap(), "1 + x");

    // An operator without a rank is laid out as a call
    let node = op!("and", sym!(a), sym!(b));
    assert_eq!(render_node(&node, &EmptyScope, &simplified()).unwrap(), "and(a, b)");

    // As is a ranked operator with the wrong number of operands
    let node = op!("+", sym!(a), sym!(b), sym!(c));
    assert_eq!(render_node(&node, &EmptyScope, &RenderConfig::default()).unwrap(), "+(a, b, c)");

    let node = op!("+", sym!(x));
    assert_eq!(render_node(&node, &EmptyScope, &RenderConfig::default()).unwrap(), "+x");
    assert_eq!(render_node(&node, &EmptyScope, &simplified()).unwrap(), "x");
}

#[test]
fn test_invalid_precision() {
    assert_eq!(
        pretty_print_expression("x", &EmptyScope, &RenderConfig::default().with_precision(0)),
        Err(RenderError::InvalidPrecision(0)),
    );
    assert_eq!(
        pretty_print_expression("x", &EmptyScope, &RenderConfig::default().with_precision(22)),
        Err(RenderError::InvalidPrecision(22)),
    );
    assert!(pretty_print_expression("x", &EmptyScope, &RenderConfig::default().with_precision(21)).is_ok());
}
