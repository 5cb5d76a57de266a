//! The expression tree which is rendered.

use alloc::{string::String, vec, vec::Vec};

use crate::number;

/// A literal value appearing in an expression.
#[derive(PartialEq, Debug, Clone)]
pub enum Constant {
    /// A number, along with the text it was written as. The text is rendered as-is, so a number
    /// which was parsed back out of a rendering renders the same way again.
    Number { value: f64, text: String },

    /// A string literal, without its quotes.
    Text(String),
}

/// A node of an expression tree.
///
/// `Operator` covers both operators and function calls: an operator symbol with a rank (see
/// [precedence](crate::precedence)) is laid out as a prefix, postfix or infix operator depending
/// on how many children it has, and anything else is laid out as a call.
#[derive(PartialEq, Debug, Clone)]
pub enum ExpressionNode {
    Constant(Constant),
    Symbol(String),
    Operator(String, Vec<ExpressionNode>),
}

impl ExpressionNode {
    /// Creates a numeric constant written as the shortest literal for `value`.
    pub fn number(value: f64) -> ExpressionNode {
        ExpressionNode::Constant(Constant::Number { value, text: number::literal(value) })
    }

    pub fn text(text: &str) -> ExpressionNode {
        ExpressionNode::Constant(Constant::Text(text.into()))
    }

    pub fn symbol(name: &str) -> ExpressionNode {
        ExpressionNode::Symbol(name.into())
    }

    pub fn unary(op: &str, operand: ExpressionNode) -> ExpressionNode {
        ExpressionNode::Operator(op.into(), vec![operand])
    }

    pub fn binary(op: &str, left: ExpressionNode, right: ExpressionNode) -> ExpressionNode {
        ExpressionNode::Operator(op.into(), vec![left, right])
    }

    pub fn call(name: &str, arguments: Vec<ExpressionNode>) -> ExpressionNode {
        ExpressionNode::Operator(name.into(), arguments)
    }

    /// Returns the operator symbol or function name of this node, if it has one.
    pub fn operator(&self) -> Option<&str> {
        match self {
            ExpressionNode::Operator(op, _) => Some(op),
            _ => None,
        }
    }

    pub fn children(&self) -> &[ExpressionNode] {
        match self {
            ExpressionNode::Operator(_, children) => children,
            _ => &[],
        }
    }
}
