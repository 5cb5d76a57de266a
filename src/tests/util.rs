/// Builds a scope from `name => value` pairs, where each value is anything convertible into a
/// `ScopeValue`.
macro_rules! scope {
    ($($name:ident => $value:expr),* $(,)?) => { {
        #[allow(unused_mut)]
        let mut scope = alloc::collections::BTreeMap::<alloc::string::String, crate::ScopeValue>::new();
        $( scope.insert(alloc::string::String::from(stringify!($name)), crate::ScopeValue::from($value)); )*
        scope
    } };
}

/// Pretty-prints an expression string, panicking on error.
macro_rules! render {
    ($source:expr, $scope:expr, $config:expr $(,)?) => {
        crate::pretty_print_expression($source, &$scope, &$config).unwrap()
    };

    ($source:expr, $scope:expr $(,)?) => { render!($source, $scope, crate::RenderConfig::default()) };

    ($source:expr $(,)?) => { render!($source, crate::EmptyScope) };
}

macro_rules! parse {
    ($source:expr) => {
        <str as crate::node::Upgradable>::upgrade($source).unwrap()
    };
}

macro_rules! sym {
    ($name:ident) => { crate::ExpressionNode::symbol(stringify!($name)) };
}

macro_rules! num {
    ($text:literal) => {
        crate::ExpressionNode::Constant(crate::Constant::Number {
            value: stringify!($text).parse::<f64>().unwrap(),
            text: alloc::string::String::from(stringify!($text)),
        })
    };
}

macro_rules! op {
    ($op:literal, $($child:expr),+ $(,)?) => {
        crate::ExpressionNode::Operator(alloc::string::String::from($op), alloc::vec![ $($child),+ ])
    };
}

pub fn simplified() -> crate::RenderConfig {
    crate::RenderConfig::default().simplified(true)
}

pub fn tex() -> crate::RenderConfig {
    crate::RenderConfig::default().tex(true)
}

/// The scopes used by the polynomial, Gaussian and trigonometric examples.
pub fn polynomial_scope() -> alloc::collections::BTreeMap<alloc::string::String, crate::ScopeValue> {
    scope! { a => 0.0, b => 2132123.21321, c => -212.22, d => 0.0, e => 1e-19 }
}

pub fn gaussian_scope() -> alloc::collections::BTreeMap<alloc::string::String, crate::ScopeValue> {
    scope! { a => 0.0, h => 1, x0 => -212.22, w => 1 }
}

pub fn trig_scope() -> alloc::collections::BTreeMap<alloc::string::String, crate::ScopeValue> {
    scope! { a => 0.0, b => 1, c => 1.321213 }
}

pub const POLYNOMIAL: &str = "a + b*x - c*x^2 + d*x^3 + e*x^4";
pub const GAUSSIAN: &str = "a + h*e^( -(x-x0)^2/(2*w^2) )";
pub const TRIG: &str = "a + b*cos(2*c*x) + c*sin(x)";
