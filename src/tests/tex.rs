use crate::{error::RenderError, pretty_print_expression, tests::util::*, EmptyScope};

#[test]
fn test_tex() {
    assert_eq!(render!("a + b*x", scope! { a => 1.2, b => 2.3 }, tex()), "{1.20}+{{2.30} \\, {x}}");
    assert_eq!(render!("a + b*x", scope! { a => 0, b => 1 }, tex()), "{0.00}+{{1.00} \\, {x}}");
    assert_eq!(
        render!(POLYNOMIAL, polynomial_scope(), tex()),
        "{{{{0.00}+{{2.13 \\cdot 10^{+6}} \\, {x}}}-{\\left({-212}\\right) \\cdot {x^{2}}}}+{{0.00} \\cdot {x^{3}}}}+{{1.00 \\cdot 10^{-19}} \\cdot {x^{4}}}",
    );
    assert_eq!(
        render!(GAUSSIAN, gaussian_scope(), tex()),
        "{0.00}+{{1.00} \\cdot {e^{\\frac{-\\left({{x}-{-212}}\\right)^{2}}{{2} \\cdot {{1.00}^{2}}}}}}",
    );
    assert_eq!(
        render!(TRIG, trig_scope(), tex()),
        "{{0.00}+{{1.00} \\, {\\cos\\left({{{{2} \\cdot {1.32}} \\, {x}}}\\right)}}}+{{1.32} \\, {\\sin\\left({{x}}\\right)}}",
    );
    assert_eq!(render!("a + b*e^(x+1)", scope! { a => 12, b => 2 }, tex()), "{12.0}+{{2.00} \\cdot {e^{{x}+{1}}}}");
}

#[test]
fn test_tex_simplified() {
    let config = tex().simplified(true);

    assert_eq!(render!("a + b*x", scope! { a => 0, b => 1 }, config), "x");
    assert_eq!(
        render!(POLYNOMIAL, polynomial_scope(), config),
        "{{{2.13 \\cdot 10^{+6}} \\, {x}}+{{212} \\cdot {x^{2}}}}+{{1.00 \\cdot 10^{-19}} \\cdot {x^{4}}}",
    );
    assert_eq!(
        render!(GAUSSIAN, gaussian_scope(), config),
        "e^{\\frac{-\\left({{x}+{212}}\\right)^{2}}{{2} \\cdot {{1.00}^{2}}}}",
    );
    assert_eq!(
        render!(TRIG, trig_scope(), config),
        "{\\cos\\left({{{2} \\cdot \\left({{1.32} \\, {x}}\\right)}}\\right)}+{{1.32} \\, {\\sin\\left({{x}}\\right)}}",
    );
    assert_eq!(render!("a + b*e^(x+1)", scope! { a => 12, b => 2 }, config), "{12.0}+{{2.00} \\cdot {e^{{x}+{1}}}}");
}

#[test]
fn test_tex_uncertainties() {
    assert_eq!(
        render!("a + b*e^(x+1)", scope! { a => "(12 +/- 2.321)", b => "(1.213 +/- 0.021)" }, tex()),
        "{{12}\\pm{2.321}}+{{{1.213}\\pm{0.021}} \\cdot {e^{{x}+{1}}}}",
    );

    // Other opaque text is inserted as-is
    assert_eq!(render!("a", scope! { a => "\\alpha_0" }, tex()), "\\alpha_0");
}

#[test]
fn test_tex_signs() {
    let config = tex().simplified(true);

    assert_eq!(render!("-x", EmptyScope, tex()), "-x");
    assert_eq!(render!("a - -b", EmptyScope, config), "{a}+{b}");
    assert_eq!(render!("x + y", scope! { y => -3 }, config), "{x}-{3.00}");
    assert_eq!(render!("x*(-y)", EmptyScope, config), "{x} \\cdot \\left({-y}\\right)");
    assert_eq!(render!("x*y", scope! { x => -2 }, config), "-{2.00} \\, {y}");
    assert_eq!(render!("x*y", scope! { x => 2, y => "-5" }, config), "-{2.00} \\cdot {5}");
    assert_eq!(render!("x - y", scope! { y => "-5" }, config), "{x}+{5}");
    assert_eq!(render!("-a/b", EmptyScope, config), "\\frac{-a}{b}");
}

#[test]
fn test_tex_numeric_products() {
    let config = tex().simplified(true);

    assert_eq!(render!("2*3*x", EmptyScope, config), "{2} \\cdot \\left({{3} \\, {x}}\\right)");
    assert_eq!(render!("2*3", EmptyScope, config), "{2} \\cdot {3}");

    // Plain text can show this, TeX cannot
    assert_eq!(render!("2*3*4*x", EmptyScope, simplified()), "2(3)(4)x");
    assert!(matches!(
        pretty_print_expression("2*3*4*x", &EmptyScope, &config),
        Err(RenderError::UnsupportedTexCombination(_)),
    ));
}

#[test]
fn test_tex_symbols_and_calls() {
    assert_eq!(render!("pi", EmptyScope, tex()), "\\pi");
    assert_eq!(render!("2*pi", EmptyScope, tex().simplified(true)), "{2} \\, {\\pi}");
    assert_eq!(render!("sqrt(x)", EmptyScope, tex()), "\\sqrt{{x}}");
    assert_eq!(render!("asin(x)", EmptyScope, tex()), "\\arcsin\\left({{x}}\\right)");
    assert_eq!(render!("f(x, y)", EmptyScope, tex()), "\\mathrm{f}\\left({{x},{y}}\\right)");
    assert_eq!(render!("\"abc\"", EmptyScope, tex()), "\\text{abc}");
    assert_eq!(render!("x", scope! { x => f64::INFINITY }, tex()), "\\infty");
    assert_eq!(render!("x", scope! { x => f64::NEG_INFINITY }, tex()), "-\\infty");
}

#[test]
fn test_tex_operators() {
    assert_eq!(render!("a % b", EmptyScope, tex()), "{a}\\bmod{b}");
    assert_eq!(render!("a <= b", EmptyScope, tex()), "{a}\\leq{b}");
    assert_eq!(render!("a != b", EmptyScope, tex()), "{a}\\neq{b}");
    assert_eq!(render!("x / y", EmptyScope, tex()), "\\frac{x}{y}");
    assert_eq!(render!("x^2", EmptyScope, tex()), "x^{2}");
    assert_eq!(render!("(x + 1)^2", EmptyScope, tex()), "\\left({{x}+{1}}\\right)^{2}");
    assert_eq!(render!("A'", EmptyScope, tex()), "A^{\\top}");
    assert_eq!(render!("(a + b)!", EmptyScope, tex()), "\\left({{a}+{b}}\\right)!");
    assert_eq!(render!("x - (y + z)", EmptyScope, tex()), "{x}-\\left({{y}+{z}}\\right)");
}
