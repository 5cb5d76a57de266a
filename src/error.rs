use alloc::string::String;
use core::fmt;

pub trait Error : fmt::Display + fmt::Debug {}

/// An error raised while turning expression source text into a node tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeError {
    UnexpectedCharacter(char),
    UnterminatedString,
    InvalidNumber(String),
    UnexpectedToken(String),
    UnexpectedEnd,
    UnexpectedTokensAtEnd,
}

impl fmt::Display for NodeError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            NodeError::UnexpectedCharacter(c) => write!(f, "unexpected character '{}'", c),
            NodeError::UnterminatedString => write!(f, "unterminated string literal"),
            NodeError::InvalidNumber(text) => write!(f, "invalid number '{}'", text),
            NodeError::UnexpectedToken(token) => write!(f, "unexpected token {}", token),
            NodeError::UnexpectedEnd => write!(f, "unexpected end of expression"),
            NodeError::UnexpectedTokensAtEnd => write!(f, "unexpected tokens after the end of the expression"),
        }
    }
}
impl Error for NodeError {}

/// An error raised while pretty-printing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    /// The input was neither an expression string nor a collection of them. Carries the name of
    /// the rejected input's type.
    InputType(&'static str),

    /// Simplification produced a combination which has no TeX rendering.
    UnsupportedTexCombination(&'static str),

    /// The configured precision is outside `1..=21`.
    InvalidPrecision(usize),

    Parse(NodeError),
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            RenderError::InputType(found) =>
                write!(f, "expected an expression string or a collection of them, got {}", found),
            RenderError::UnsupportedTexCombination(what) =>
                write!(f, "cannot render {} as TeX", what),
            RenderError::InvalidPrecision(p) =>
                write!(f, "precision must be between 1 and 21, got {}", p),
            RenderError::Parse(e) => write!(f, "parse error: {}", e),
        }
    }
}
impl Error for RenderError {}

impl From<NodeError> for RenderError {
    fn from(e: NodeError) -> Self {
        RenderError::Parse(e)
    }
}
