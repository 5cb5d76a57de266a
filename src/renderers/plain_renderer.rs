use alloc::{format, string::String, vec::Vec};

use crate::{
    error::RenderError,
    fragment::{FragmentAssembly, Slot, Spacing},
    number,
    precedence::{self, Rank, Side},
    render::{Kind, RenderConfig, Rendered, Renderer},
};

/// Renders expressions as plain text, such as `1.20 + 2.30x`.
///
/// Without simplification, every operator child is parenthesised and every operator is spaced,
/// giving an unambiguous rendering like `1.20000 + (2.30000 * x)`. With simplification,
/// parentheses are only added where the ranks require them, and powers and products are written
/// without spaces.
#[derive(PartialEq, Eq, Debug, Clone, Default)]
pub struct PlainRenderer {
    pub config: RenderConfig,
}

impl PlainRenderer {
    pub fn new(config: RenderConfig) -> PlainRenderer {
        PlainRenderer { config }
    }

    /// Returns true if `child` is parenthesised at `side` of `op`.
    fn wraps(&self, op: &str, rank: Rank, child: &Rendered, side: Side) -> bool {
        if self.config.simplify {
            child.needs_parentheses(op, rank, side)
        } else {
            child.is_operator()
        }
    }

    /// Returns true if the operand of a unary operator with rank `rank` is parenthesised.
    fn wraps_operand(&self, rank: Rank, operand: &Rendered) -> bool {
        if operand.negative {
            true
        } else if self.config.simplify {
            operand.rank.map_or(false, |r| r > rank)
        } else {
            operand.is_operator()
        }
    }
}

fn parenthesize(text: &str) -> String {
    format!("({})", text)
}

impl Renderer for PlainRenderer {
    fn config(&self) -> &RenderConfig {
        &self.config
    }

    fn substituted_numeral(&self, value: f64) -> Rendered {
        Rendered::numeral(value, number::format(value, self.config.precision, self.config.trim_zeros))
    }

    fn literal_numeral(&self, value: f64, text: &str) -> Rendered {
        Rendered::numeral(value, text.into())
    }

    fn opaque_text(&self, text: &str) -> Rendered {
        Rendered::opaque(text.into())
    }

    fn string_constant(&self, text: &str) -> Rendered {
        Rendered::leaf(format!("\"{}\"", text), Kind::Text)
    }

    fn free_symbol(&self, name: &str) -> Rendered {
        Rendered::leaf(name.into(), Kind::Symbol)
    }

    fn call(&self, name: &str, arguments: Vec<Rendered>) -> Result<Rendered, RenderError> {
        let arguments = arguments.iter().map(|a| a.text.as_str()).collect::<Vec<_>>();
        Ok(Rendered::leaf(format!("{}({})", name, arguments.join(", ")), Kind::Call))
    }

    fn prefix(&self, op: &str, rank: Rank, operand: Rendered) -> Result<Rendered, RenderError> {
        // A prefix minus only takes powers and postfix operators without parentheses
        let body = if self.wraps_operand(precedence::TRANSPOSE, &operand) {
            parenthesize(&operand.text)
        } else {
            operand.text.clone()
        };
        let text = format!("{}{}", op, body);

        if op == "-" {
            Ok(Rendered::negation(text, rank, operand))
        } else {
            Ok(Rendered::operation(text, rank))
        }
    }

    fn postfix(&self, op: &str, rank: Rank, operand: Rendered) -> Result<Rendered, RenderError> {
        let body = if self.wraps_operand(rank, &operand) {
            parenthesize(&operand.text)
        } else {
            operand.text
        };
        Ok(Rendered::operation(format!("{}{}", body, op), rank))
    }

    fn infix(&self, op: &str, rank: Rank, left: Rendered, right: Rendered) -> Result<Rendered, RenderError> {
        let wrap_left = self.wraps(op, rank, &left, Side::Left);
        let wrap_right = self.wraps(op, rank, &right, Side::Right);
        let spacing = if self.config.simplify { Spacing::Compact } else { Spacing::Spaced };

        // The sign of an unwrapped left factor belongs to the whole product
        let negative = rank == precedence::MULTIPLY && left.negative && !wrap_left;

        let mut assembly = FragmentAssembly::new(left.text, op, right.text, Some(rank), spacing);
        if wrap_left {
            assembly.wrap(Slot::Left, "(", ")");
        }
        if wrap_right {
            assembly.wrap(Slot::Right, "(", ")");
        }

        Ok(Rendered::signed_operation(assembly.join(), rank, negative))
    }

    fn zero(&self) -> Rendered {
        Rendered::numeral(0.0, "0".into())
    }

    fn implicit_product(&self, rank: Rank, negative: bool, numeral: Rendered, other: Rendered) -> Result<Rendered, RenderError> {
        // `2(-b)*a` would read as `(2(-b))*a`
        let wrap = other.needs_parentheses("*", rank, Side::Right)
            || (other.rank == Some(rank) && other.text.starts_with('('));
        let leading_numeral = if wrap { None } else { number::leading_numeral_len(&other.text) };

        let mut assembly = FragmentAssembly::new(numeral.text, "*", other.text, Some(rank), Spacing::Compact);
        assembly.juxtapose();
        if wrap {
            assembly.wrap(Slot::Right, "(", ")");
        } else if let Some(len) = leading_numeral {
            // `2` next to `1.00^2` would read as one number
            assembly.wrap_prefix(Slot::Right, len, "(", ")");
        }
        if negative {
            assembly.prepend(Slot::Left, "-");
        }

        Ok(Rendered::signed_operation(assembly.join(), rank, negative))
    }

    fn numeric_product(&self, rank: Rank, value: f64, left: Rendered, right: Rendered) -> Result<Rendered, RenderError> {
        let (head, tail) = (left.text.clone(), right.text.clone());

        let mut assembly = FragmentAssembly::new(left.text, "*", right.text, Some(rank), Spacing::Compact);
        assembly.juxtapose();
        assembly.wrap(Slot::Right, "(", ")");

        Ok(Rendered::product(assembly.join(), rank, value, head, tail))
    }
}
