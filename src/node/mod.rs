//! Expression trees and the parser which builds them from source text.
//!
//! Source text is split into [tokens](token) and then [upgraded](Upgradable) into a
//! [structured] tree, which is what renderers consume.

pub mod structured;
pub mod token;
pub mod function;
mod parser;

use crate::{error::NodeError, precedence::PrecedenceTable};

use self::{parser::Parser, structured::ExpressionNode, token::Token};

/// Something which can be converted into an expression tree.
pub trait Upgradable {
    /// Builds a tree using the built-in operator ranks.
    fn upgrade(&self) -> Result<ExpressionNode, NodeError> {
        self.upgrade_with(&PrecedenceTable::default())
    }

    /// Builds a tree using the ranks in `table`.
    fn upgrade_with(&self, table: &PrecedenceTable) -> Result<ExpressionNode, NodeError>;
}

impl Upgradable for [Token] {
    fn upgrade_with(&self, table: &PrecedenceTable) -> Result<ExpressionNode, NodeError> {
        if self.is_empty() {
            return Err(NodeError::UnexpectedEnd);
        }
        Parser::new(self, table).parse()
    }
}

impl Upgradable for str {
    fn upgrade_with(&self, table: &PrecedenceTable) -> Result<ExpressionNode, NodeError> {
        token::tokenize(self)?.upgrade_with(table)
    }
}

/// Parses `source` into an expression tree, using the ranks in `table`.
pub fn parse(source: &str, table: &PrecedenceTable) -> Result<ExpressionNode, NodeError> {
    source.upgrade_with(table)
}
