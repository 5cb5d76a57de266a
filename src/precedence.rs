//! Operator binding strength. The same table drives both parsing and the decision of where a
//! rendered child needs parentheses, so a rendering always re-parses to the tree it came from.
//!
//! Lower ranks bind tighter. Anything without a rank (function names, unknown operators) is
//! rendered as a call and never needs wrapping.

use alloc::{collections::BTreeMap, string::String};

/// Binding rank of an operator. Lower numbers bind tighter.
pub type Rank = u8;

pub const POWER: Rank = 1;
pub const FACTORIAL: Rank = 2;
pub const TRANSPOSE: Rank = 3;
pub const RANGE: Rank = 4;
pub const DIVIDE: Rank = 5;
pub const MULTIPLY: Rank = 6;
pub const MODULO: Rank = 7;
pub const ADDITIVE: Rank = 8;
pub const CONVERSION: Rank = 9;
pub const RELATIONAL: Rank = 10;
pub const EQUALITY: Rank = 11;
pub const ASSIGNMENT: Rank = 12;

/// Returns the built-in rank of an operator symbol, or `None` if the symbol has no rank.
pub fn default_rank(op: &str) -> Option<Rank> {
    Some(match op {
        "^" => POWER,
        "!" => FACTORIAL,
        "'" => TRANSPOSE,
        ":" => RANGE,
        "/" | "./" => DIVIDE,
        "*" | ".*" => MULTIPLY,
        "%" => MODULO,
        "+" | "-" => ADDITIVE,
        "in" => CONVERSION,
        "<" | ">" | "<=" | ">=" => RELATIONAL,
        "==" | "!=" => EQUALITY,
        "=" => ASSIGNMENT,
        _ => return None,
    })
}

/// The built-in ranks, plus any per-operator overrides.
#[derive(PartialEq, Eq, Debug, Clone, Default)]
pub struct PrecedenceTable {
    overrides: BTreeMap<String, Rank>,
}

impl PrecedenceTable {
    pub fn new() -> PrecedenceTable {
        PrecedenceTable::default()
    }

    /// Returns a copy of this table in which `op` has the given rank. The operator does not need
    /// to have a built-in rank.
    pub fn with_rank(mut self, op: &str, rank: Rank) -> PrecedenceTable {
        self.overrides.insert(op.into(), rank);
        self
    }

    pub fn rank(&self, op: &str) -> Option<Rank> {
        self.overrides.get(op).copied().or_else(|| default_rank(op))
    }

    /// Returns true if `op` has a rank, and so is laid out as an operator rather than a call.
    pub fn is_operator(&self, op: &str) -> bool {
        self.rank(op).is_some()
    }
}

/// Which operand of a binary operator a child sits in.
#[derive(PartialEq, Eq, Debug, Copy, Clone)]
pub enum Side {
    Left,
    Right,
}

/// Returns true if an operand at `side` which has equal rank to its parent `op` must still be
/// wrapped, because the operator does not associate that way.
pub fn wraps_equal_rank(op: &str, side: Side) -> bool {
    match side {
        Side::Left => matches!(op, "^" | "="),
        Side::Right => matches!(op, "-" | "/" | "./" | "%"),
    }
}

/// Returns true if a child with rank `child` needs parentheses when placed at `side` of a binary
/// operator `op` with rank `parent`.
///
/// `child_is_operator` distinguishes an operator node of equal rank (which may need wrapping for
/// associativity) from a leaf which merely binds like one, such as a negative numeral.
pub fn needs_parentheses(
    op: &str,
    parent: Rank,
    child: Option<Rank>,
    child_is_operator: bool,
    side: Side,
) -> bool {
    match child {
        None => false,
        Some(child) if child > parent => true,
        Some(child) if child == parent => child_is_operator && wraps_equal_rank(op, side),
        Some(_) => false,
    }
}
