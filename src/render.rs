//! The rendering framework shared by every output format.
//!
//! A [Renderer] walks an [ExpressionNode] tree bottom-up. The traversal itself, symbol
//! substitution and the simplification decisions live in the trait's default methods. Each
//! output format implements the hook methods which lay out leaves and operators as text.
//!
//! Every hook returns a [Rendered], which carries the text alongside what the enclosing node needs
//! to know about it: whether it is numeric (and its value), which rank it binds with, and whether
//! it starts with a sign.

use alloc::{boxed::Box, format, string::String, vec::Vec};
use log::{debug, trace};

use crate::{
    error::RenderError,
    node::structured::{Constant, ExpressionNode},
    precedence::{self, PrecedenceTable, Rank, Side},
    scope::{self, Scope, ScopeBinding},
    simplify::{self, Plan},
};

/// The smallest supported number of significant figures.
pub const MIN_PRECISION: usize = 1;

/// The largest supported number of significant figures.
pub const MAX_PRECISION: usize = 21;

/// Options which control how an expression is rendered.
#[derive(PartialEq, Eq, Debug, Clone)]
pub struct RenderConfig {
    /// Significant figures used for numbers substituted from scope.
    pub precision: usize,

    /// Whether to apply the simplification rules, such as dropping `1*` and writing `2.30x`.
    pub simplify: bool,

    /// Whether to produce TeX rather than plain text.
    pub tex: bool,

    /// Whether to drop trailing zeros from substituted numbers, so `1.20` becomes `1.2`.
    pub trim_zeros: bool,

    pub precedence: PrecedenceTable,
}

impl Default for RenderConfig {
    fn default() -> Self {
        RenderConfig {
            precision: 3,
            simplify: false,
            tex: false,
            trim_zeros: false,
            precedence: PrecedenceTable::default(),
        }
    }
}

impl RenderConfig {
    pub fn new() -> RenderConfig {
        RenderConfig::default()
    }

    pub fn with_precision(mut self, precision: usize) -> RenderConfig {
        self.precision = precision;
        self
    }

    pub fn simplified(mut self, simplify: bool) -> RenderConfig {
        self.simplify = simplify;
        self
    }

    pub fn tex(mut self, tex: bool) -> RenderConfig {
        self.tex = tex;
        self
    }

    pub fn trim_zeros(mut self, trim_zeros: bool) -> RenderConfig {
        self.trim_zeros = trim_zeros;
        self
    }

    /// Overrides the rank of one operator, for both parsing and rendering.
    pub fn with_rank(mut self, op: &str, rank: Rank) -> RenderConfig {
        self.precedence = self.precedence.with_rank(op, rank);
        self
    }

    /// Returns an error if this configuration cannot be rendered with.
    pub fn validate(&self) -> Result<(), RenderError> {
        if (MIN_PRECISION..=MAX_PRECISION).contains(&self.precision) {
            Ok(())
        } else {
            Err(RenderError::InvalidPrecision(self.precision))
        }
    }
}

/// What a rendered piece of text represents.
#[derive(PartialEq, Debug, Clone)]
pub enum Kind {
    /// A number, either substituted from scope or written as a constant.
    Numeral(f64),

    /// Two numerals multiplied together by simplification, such as `2(1.32)`. This is still
    /// numeric, so it can be compacted with a following factor. `head` and `tail` are the
    /// renderings of the two factors.
    Product { value: f64, head: String, tail: String },

    /// Opaque text from scope, or a string constant.
    Text,

    /// A symbol which was not in scope.
    Symbol,

    Call,

    /// Any other operator application.
    Compound,
}

/// A rendered subexpression.
#[derive(PartialEq, Debug, Clone)]
pub struct Rendered {
    pub text: String,
    pub kind: Kind,

    /// The rank this text binds with when placed inside another operator, or `None` if it never
    /// needs parentheses.
    pub rank: Option<Rank>,

    /// Whether the text starts with a minus sign which belongs to the whole piece.
    pub negative: bool,

    /// For a prefix negation, the rendering of its operand.
    pub unsigned: Option<Box<Rendered>>,
}

impl Rendered {
    /// Creates a numeral. A negative numeral binds like a prefix minus.
    pub fn numeral(value: f64, text: String) -> Rendered {
        let negative = text.starts_with('-');
        Rendered {
            text,
            kind: Kind::Numeral(value),
            rank: if negative { Some(precedence::ADDITIVE) } else { None },
            negative,
            unsigned: None,
        }
    }

    /// Creates opaque text, which binds like a prefix minus if it starts with one.
    pub fn opaque(text: String) -> Rendered {
        let negative = text.starts_with('-');
        Rendered {
            text,
            kind: Kind::Text,
            rank: if negative { Some(precedence::ADDITIVE) } else { None },
            negative,
            unsigned: None,
        }
    }

    /// Creates a piece which never needs parentheses.
    pub fn leaf(text: String, kind: Kind) -> Rendered {
        Rendered { text, kind, rank: None, negative: false, unsigned: None }
    }

    /// Creates an operator application binding with `rank`.
    pub fn operation(text: String, rank: Rank) -> Rendered {
        Rendered::signed_operation(text, rank, false)
    }

    /// Creates an operator application binding with `rank`, which may start with a sign that
    /// belongs to the whole application, as in `-2x`.
    pub fn signed_operation(text: String, rank: Rank, negative: bool) -> Rendered {
        Rendered { text, kind: Kind::Compound, rank: Some(rank), negative, unsigned: None }
    }

    /// Creates the prefix negation of `operand`, written as `text`.
    pub fn negation(text: String, rank: Rank, operand: Rendered) -> Rendered {
        Rendered {
            text,
            kind: Kind::Compound,
            rank: Some(rank),
            negative: true,
            unsigned: Some(Box::new(operand)),
        }
    }

    /// Creates a product of two numerals, written as `text`.
    pub fn product(text: String, rank: Rank, value: f64, head: String, tail: String) -> Rendered {
        Rendered {
            negative: text.starts_with('-'),
            text,
            kind: Kind::Product { value, head, tail },
            rank: Some(rank),
            unsigned: None,
        }
    }

    /// Returns the numeric value of this piece, if it has one.
    pub fn value(&self) -> Option<f64> {
        match self.kind {
            Kind::Numeral(value) | Kind::Product { value, .. } => Some(value),
            _ => None,
        }
    }

    pub fn is_numeric(&self) -> bool {
        self.value().is_some()
    }

    /// Returns true if this is an operator application (as opposed to a leaf or a call).
    pub fn is_operator(&self) -> bool {
        matches!(self.kind, Kind::Compound | Kind::Product { .. })
    }

    /// Returns this piece without its leading minus sign. Pieces which are not negative are
    /// returned unchanged.
    pub fn strip_sign(self) -> Rendered {
        if !self.negative {
            return self;
        }
        if let Some(operand) = self.unsigned {
            return *operand;
        }

        let text = String::from(&self.text[1..]);
        let (kind, rank) = match self.kind {
            Kind::Numeral(value) => (Kind::Numeral(-value), None),
            Kind::Text => (Kind::Text, None),
            Kind::Product { value, head, tail } => (
                Kind::Product {
                    value: -value,
                    head: head.strip_prefix('-').map(String::from).unwrap_or(head),
                    tail,
                },
                self.rank,
            ),
            other => (other, self.rank),
        };

        Rendered { text, kind, rank, negative: false, unsigned: None }
    }

    /// Returns the negation of a numeral or numeric product by writing a minus sign in front of
    /// it, or `None` if this piece is not numeric.
    pub fn negated(&self) -> Option<Rendered> {
        let text = format!("-{}", self.text);
        match &self.kind {
            Kind::Numeral(value) => Some(Rendered::numeral(-value, text)),
            Kind::Product { value, head, tail } => Some(Rendered::product(
                text,
                self.rank.unwrap_or(precedence::MULTIPLY),
                -value,
                format!("-{}", head),
                tail.clone(),
            )),
            _ => None,
        }
    }

    /// Returns true if this piece must be parenthesised when placed at `side` of the binary
    /// operator `op` with rank `rank`, under the simplified layout.
    ///
    /// A negative piece on the right binds no tighter than subtraction, so that a sign never
    /// directly follows another operator.
    pub fn needs_parentheses(&self, op: &str, rank: Rank, side: Side) -> bool {
        // In `x + -a + b` the minus would attach to `a` alone
        if side == Side::Right && !self.negative && self.text.starts_with('-')
            && self.rank.map_or(false, |r| r >= rank)
        {
            return true;
        }

        let own_rank = if self.negative && side == Side::Right {
            Some(self.rank.map_or(precedence::ADDITIVE, |r| r.max(precedence::ADDITIVE)))
        } else {
            self.rank
        };
        precedence::needs_parentheses(op, rank, own_rank, self.is_operator(), side)
    }
}

/// Implemented by each output format. The hook methods lay out a single node given the
/// renderings of its children; [Renderer::render] drives them over a whole tree.
pub trait Renderer {
    fn config(&self) -> &RenderConfig;

    /// Lays out a number which was substituted for a symbol from scope.
    fn substituted_numeral(&self, value: f64) -> Rendered;

    /// Lays out a numeric constant, which was written as `text` in the expression.
    fn literal_numeral(&self, value: f64, text: &str) -> Rendered;

    /// Lays out non-numeric text which was substituted for a symbol from scope.
    fn opaque_text(&self, text: &str) -> Rendered;

    fn string_constant(&self, text: &str) -> Rendered;

    /// Lays out a symbol which is not in scope.
    fn free_symbol(&self, name: &str) -> Rendered;

    /// Lays out a call to the function `name`. Also used for any operator without a rank.
    fn call(&self, name: &str, arguments: Vec<Rendered>) -> Result<Rendered, RenderError>;

    /// Lays out a prefix operator, `-` or `+`.
    fn prefix(&self, op: &str, rank: Rank, operand: Rendered) -> Result<Rendered, RenderError>;

    /// Lays out a postfix operator, `!` or `'`.
    fn postfix(&self, op: &str, rank: Rank, operand: Rendered) -> Result<Rendered, RenderError>;

    /// Lays out a binary operator between two operands.
    fn infix(&self, op: &str, rank: Rank, left: Rendered, right: Rendered) -> Result<Rendered, RenderError>;

    /// Lays out a multiplication which simplified to zero.
    fn zero(&self) -> Rendered;

    /// Lays out a multiplication of a numeral and a non-numeric factor, with the numeral written
    /// first and no operator between them. Both have had their signs removed already; `negative`
    /// says whether the product is negative.
    fn implicit_product(&self, rank: Rank, negative: bool, numeral: Rendered, other: Rendered) -> Result<Rendered, RenderError>;

    /// Lays out a multiplication of two numerals, whose product is `value`.
    fn numeric_product(&self, rank: Rank, value: f64, left: Rendered, right: Rendered) -> Result<Rendered, RenderError>;

    /// Renders a whole tree, substituting symbols bound in `scope`.
    fn render(&self, node: &ExpressionNode, scope: &dyn Scope) -> Result<Rendered, RenderError> {
        let rendered = match node {
            ExpressionNode::Constant(Constant::Number { value, text }) =>
                self.literal_numeral(*value, text),
            ExpressionNode::Constant(Constant::Text(text)) =>
                self.string_constant(text),
            ExpressionNode::Symbol(name) => match scope::resolve(name, scope) {
                ScopeBinding::Unbound => self.free_symbol(name),
                ScopeBinding::Numeric(value) => self.substituted_numeral(value),
                ScopeBinding::Opaque(text) => self.opaque_text(text),
            },
            ExpressionNode::Operator(op, children) =>
                self.render_operator(op, children, scope)?,
        };

        trace!("rendered {:?} as {:?}", node, rendered.text);
        Ok(rendered)
    }

    /// Renders an operator node, choosing between a call and a prefix, postfix or binary
    /// operator from the operator's rank and arity.
    fn render_operator(&self, op: &str, children: &[ExpressionNode], scope: &dyn Scope) -> Result<Rendered, RenderError> {
        let rank = match self.config().precedence.rank(op) {
            Some(rank) if matches!(children.len(), 1 | 2) => rank,
            _ => {
                let arguments = children
                    .iter()
                    .map(|c| self.render(c, scope))
                    .collect::<Result<Vec<_>, _>>()?;
                return self.call(op, arguments);
            }
        };

        if let [operand] = children {
            let operand = self.render(operand, scope)?;
            match op {
                "-" => self.negate(rank, operand),
                "+" if self.config().simplify => Ok(operand),
                "+" => self.prefix(op, rank, operand),
                _ => self.postfix(op, rank, operand),
            }
        } else {
            let left = self.render(&children[0], scope)?;
            let right = self.render(&children[1], scope)?;
            self.binary(op, rank, left, right)
        }
    }

    /// Negates `operand`. When simplifying, negating something which is already negative just
    /// removes its sign, and a negated numeral stays a numeral.
    fn negate(&self, rank: Rank, operand: Rendered) -> Result<Rendered, RenderError> {
        if !self.config().simplify {
            return self.prefix("-", rank, operand);
        }

        if operand.negative {
            Ok(operand.strip_sign())
        } else if let Some(negated) = operand.negated() {
            Ok(negated)
        } else {
            self.prefix("-", rank, operand)
        }
    }

    /// Lays out a binary operator, simplifying it first if that is enabled.
    fn binary(&self, op: &str, rank: Rank, left: Rendered, right: Rendered) -> Result<Rendered, RenderError> {
        if !self.config().simplify {
            return self.infix(op, rank, left, right);
        }

        let plan = simplify::plan(op, rank, left, right);
        debug!("simplifying '{}': {:?}", op, plan);

        match plan {
            Plan::Keep(operand) => Ok(operand),
            Plan::Zero => Ok(self.zero()),
            Plan::Negate(operand) => {
                let minus = self.config().precedence.rank("-").unwrap_or(rank);
                self.negate(minus, operand)
            }
            Plan::ImplicitProduct { negative, numeral, other } =>
                self.implicit_product(rank, negative, numeral, other),
            Plan::NumericProduct { value, left, right } =>
                self.numeric_product(rank, value, left, right),
            Plan::Infix { op, left, right } => self.infix(op, rank, left, right),
        }
    }
}
