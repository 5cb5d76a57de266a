use alloc::{string::ToString, vec, vec::Vec};

use crate::{error::NodeError, precedence::{PrecedenceTable, Rank}};

use super::{structured::{Constant, ExpressionNode}, token::Token};

/// Converts a list of tokens into a single expression tree. Used to implement `Upgradable` for
/// token lists and source text.
///
/// Binary operators are parsed by precedence climbing over a [PrecedenceTable], so that the tree
/// agrees with where a renderer using the same table places parentheses.
pub struct Parser<'a> {
    pub tokens: &'a [Token],
    pub index: usize,
    pub table: &'a PrecedenceTable,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: &'a [Token], table: &'a PrecedenceTable) -> Parser<'a> {
        Parser { tokens, index: 0, table }
    }

    pub fn parse(&mut self) -> Result<ExpressionNode, NodeError> {
        let result = self.parse_binary(Rank::MAX)?;

        // Leftover tokens is an error
        if self.index < self.tokens.len() {
            Err(NodeError::UnexpectedTokensAtEnd)
        } else {
            Ok(result)
        }
    }

    fn advance(&mut self) {
        self.index += 1;
    }

    fn current(&self) -> Option<&'a Token> {
        self.tokens.get(self.index)
    }

    fn current_operator(&self) -> Option<&'static str> {
        if let Some(Token::Operator(op)) = self.current() {
            Some(*op)
        } else {
            None
        }
    }

    fn eoi(&self) -> bool {
        self.index >= self.tokens.len()
    }

    fn expect(&mut self, expected: Token) -> Result<(), NodeError> {
        match self.current() {
            Some(t) if *t == expected => {
                self.advance();
                Ok(())
            }
            Some(t) => Err(NodeError::UnexpectedToken(t.to_string())),
            None => Err(NodeError::UnexpectedEnd),
        }
    }

    /// Returns the binary operator at the current position, if it binds at least as loosely as
    /// `max_rank`. A term directly followed by an identifier or parenthesis is an implicit
    /// multiplication, for which no token is consumed.
    fn binary_operator(&self, max_rank: Rank) -> Option<(&'static str, Rank, bool)> {
        let (op, implicit) = match self.current()? {
            Token::Operator("^" | "!" | "'") => return None,
            Token::Operator(op) => (*op, false),
            Token::Identifier(_) | Token::LeftParen => ("*", true),
            _ => return None,
        };

        let rank = self.table.rank(op)?;
        if rank <= max_rank {
            Some((op, rank, implicit))
        } else {
            None
        }
    }

    /// Parses a chain of binary operators which bind at least as tightly as `max_rank`.
    fn parse_binary(&mut self, max_rank: Rank) -> Result<ExpressionNode, NodeError> {
        let mut out = self.parse_prefix()?;

        while let Some((op, rank, implicit)) = self.binary_operator(max_rank) {
            if !implicit {
                self.advance();
            }

            // Assignment associates to the right, everything else to the left
            let right = if op == "=" {
                self.parse_binary(rank)?
            } else {
                self.parse_binary(rank.saturating_sub(1))?
            };
            out = ExpressionNode::binary(op, out, right);
        }

        Ok(out)
    }

    /// Parses prefix signs. A minus binds looser than powers and postfix operators but tighter
    /// than any binary operator, so `-x^2` is `-(x^2)` and `-a/b` is `(-a)/b`.
    fn parse_prefix(&mut self) -> Result<ExpressionNode, NodeError> {
        match self.current_operator() {
            Some("-") => {
                self.advance();
                let operand = self.parse_prefix()?;
                Ok(ExpressionNode::unary("-", operand))
            }
            Some("+") => {
                self.advance();
                self.parse_prefix()
            }
            _ => self.parse_power(),
        }
    }

    /// Parses a power with any postfix operators bound to it. Postfix operators bind more loosely
    /// than powers, so `x^2!` is `(x^2)!`.
    fn parse_power(&mut self) -> Result<ExpressionNode, NodeError> {
        let power = self.parse_power_chain()?;
        self.accepts_postfix(power)
    }

    /// Parses a unit with an optional exponent. Powers associate to the right.
    fn parse_power_chain(&mut self) -> Result<ExpressionNode, NodeError> {
        let base = self.parse_unit()?;

        if let Some("^") = self.current_operator() {
            self.advance();
            let exponent = self.parse_exponent()?;
            Ok(ExpressionNode::binary("^", base, exponent))
        } else {
            Ok(base)
        }
    }

    /// Exponents may be negated without parentheses, as in `x^-1`.
    fn parse_exponent(&mut self) -> Result<ExpressionNode, NodeError> {
        match self.current_operator() {
            Some("-") => {
                self.advance();
                Ok(ExpressionNode::unary("-", self.parse_exponent()?))
            }
            Some("+") => {
                self.advance();
                self.parse_exponent()
            }
            _ => self.parse_power_chain(),
        }
    }

    /// Designed to wrap the return value of a `parse_xxx` function, indicating that this node can
    /// have postfix operators bound to it. Each `!` or `'` which follows wraps the node again.
    fn accepts_postfix(&mut self, node: ExpressionNode) -> Result<ExpressionNode, NodeError> {
        let mut result = node;
        while let Some(op @ ("!" | "'")) = self.current_operator() {
            self.advance();
            result = ExpressionNode::unary(op, result);
        }

        Ok(result)
    }

    fn parse_unit(&mut self) -> Result<ExpressionNode, NodeError> {
        let token = self.current().ok_or(NodeError::UnexpectedEnd)?;
        self.advance();

        Ok(match token {
            Token::Number(text) => {
                let value = text.parse::<f64>()
                    .map_err(|_| NodeError::InvalidNumber(text.clone()))?;
                ExpressionNode::Constant(Constant::Number { value, text: text.clone() })
            }

            Token::Text(text) => ExpressionNode::Constant(Constant::Text(text.clone())),

            Token::Identifier(name) => {
                if let Some(Token::LeftParen) = self.current() {
                    self.advance();
                    ExpressionNode::call(name, self.parse_arguments()?)
                } else {
                    ExpressionNode::Symbol(name.clone())
                }
            }

            Token::LeftParen => {
                let inner = self.parse_binary(Rank::MAX)?;
                self.expect(Token::RightParen)?;
                inner
            }

            other => return Err(NodeError::UnexpectedToken(other.to_string())),
        })
    }

    /// Parses comma-separated call arguments, up to and including the closing parenthesis.
    fn parse_arguments(&mut self) -> Result<Vec<ExpressionNode>, NodeError> {
        if let Some(Token::RightParen) = self.current() {
            self.advance();
            return Ok(vec![]);
        }

        let mut arguments = vec![self.parse_binary(Rank::MAX)?];
        while let Some(Token::Comma) = self.current() {
            self.advance();
            arguments.push(self.parse_binary(Rank::MAX)?);
        }
        if self.eoi() {
            return Err(NodeError::UnexpectedEnd);
        }
        self.expect(Token::RightParen)?;

        Ok(arguments)
    }
}
