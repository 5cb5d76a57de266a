/// A mathematical function with a dedicated TeX command. Calls to any other name are still
/// rendered, just without a command of their own.
#[derive(PartialEq, Eq, Debug, Copy, Clone)]
pub enum Function {
    Sine,
    Cosine,
    Tangent,
    Secant,
    Cosecant,
    Cotangent,
    HyperbolicSine,
    HyperbolicCosine,
    HyperbolicTangent,
    ArcSine,
    ArcCosine,
    ArcTangent,
    NaturalLogarithm,
    Logarithm,
    Exponential,
    SquareRoot,
    Determinant,
    Minimum,
    Maximum,
}

impl Function {
    /// Looks up a function by the name it is called with in expressions.
    pub fn from_name(name: &str) -> Option<Function> {
        Some(match name {
            "sin" => Self::Sine,
            "cos" => Self::Cosine,
            "tan" => Self::Tangent,
            "sec" => Self::Secant,
            "csc" => Self::Cosecant,
            "cot" => Self::Cotangent,
            "sinh" => Self::HyperbolicSine,
            "cosh" => Self::HyperbolicCosine,
            "tanh" => Self::HyperbolicTangent,
            "asin" => Self::ArcSine,
            "acos" => Self::ArcCosine,
            "atan" => Self::ArcTangent,
            "ln" => Self::NaturalLogarithm,
            "log" => Self::Logarithm,
            "exp" => Self::Exponential,
            "sqrt" => Self::SquareRoot,
            "det" => Self::Determinant,
            "min" => Self::Minimum,
            "max" => Self::Maximum,
            _ => return None,
        })
    }

    /// The TeX command used when this function is rendered.
    pub fn tex_command(&self) -> &'static str {
        match self {
            Self::Sine => "\\sin",
            Self::Cosine => "\\cos",
            Self::Tangent => "\\tan",
            Self::Secant => "\\sec",
            Self::Cosecant => "\\csc",
            Self::Cotangent => "\\cot",
            Self::HyperbolicSine => "\\sinh",
            Self::HyperbolicCosine => "\\cosh",
            Self::HyperbolicTangent => "\\tanh",
            Self::ArcSine => "\\arcsin",
            Self::ArcCosine => "\\arccos",
            Self::ArcTangent => "\\arctan",
            Self::NaturalLogarithm => "\\ln",
            Self::Logarithm => "\\log",
            Self::Exponential => "\\exp",
            Self::SquareRoot => "\\sqrt",
            Self::Determinant => "\\det",
            Self::Minimum => "\\min",
            Self::Maximum => "\\max",
        }
    }

    /// Returns true if this function's argument is typeset as a group after the command, like
    /// `\sqrt{x}`, instead of in parentheses.
    pub fn takes_group(&self) -> bool {
        matches!(self, Self::SquareRoot)
    }
}
