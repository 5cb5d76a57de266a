//! Decides how a binary operation is simplified, independently of the output format.
//!
//! The rules are tried in a fixed order, and the first one which applies wins:
//!
//!   1. identities: `1*x` and `x*1` become `x`, a product with `0` becomes `0`, `0 + x` and
//!      `x ± 0` become `x`, and `0 - x` becomes `-x`;
//!   2. a numeral multiplied by anything non-numeric is written as an implicit product with the
//!      numeral first, carrying the combined sign of both factors;
//!   3. two numerals multiplied together are kept as a numeric product;
//!   4. adding or subtracting a negative flips the operator and drops the sign.
//!
//! Anything else is laid out as a plain infix operation.

use crate::{precedence::{self, Rank}, render::Rendered};

/// The outcome of simplifying one binary operation.
#[derive(PartialEq, Debug, Clone)]
pub enum Plan<'a> {
    /// The operation reduces to one of its operands.
    Keep(Rendered),

    /// The operation is a product with zero.
    Zero,

    /// The operation reduces to the negation of an operand.
    Negate(Rendered),

    /// A numeral times a non-numeric factor. Neither has a sign; `negative` is the sign of the
    /// product.
    ImplicitProduct { negative: bool, numeral: Rendered, other: Rendered },

    /// Two numerals multiplied together, whose product is `value`.
    NumericProduct { value: f64, left: Rendered, right: Rendered },

    Infix { op: &'a str, left: Rendered, right: Rendered },
}

/// Decides how to simplify `left op right`, where `op` has rank `rank`.
pub fn plan<'a>(op: &'a str, rank: Rank, left: Rendered, right: Rendered) -> Plan<'a> {
    let multiplicative = rank == precedence::MULTIPLY;
    let additive = rank == precedence::ADDITIVE;
    let (left_value, right_value) = (left.value(), right.value());

    if multiplicative {
        if left_value == Some(1.0) {
            return Plan::Keep(right);
        }
        if right_value == Some(1.0) {
            return Plan::Keep(left);
        }
        if left_value == Some(0.0) || right_value == Some(0.0) {
            return Plan::Zero;
        }

        return match (left_value, right_value) {
            (Some(l), Some(r)) => Plan::NumericProduct { value: l * r, left, right },
            (Some(_), None) => implicit_product(left, right),
            (None, Some(_)) => implicit_product(right, left),
            (None, None) => Plan::Infix { op, left, right },
        };
    }

    if additive {
        if left_value == Some(0.0) {
            return if op == "-" { Plan::Negate(right) } else { Plan::Keep(right) };
        }
        if right_value == Some(0.0) {
            return Plan::Keep(left);
        }

        if right.negative {
            match op {
                "+" => return Plan::Infix { op: "-", left, right: right.strip_sign() },
                "-" => return Plan::Infix { op: "+", left, right: right.strip_sign() },
                _ => (),
            }
        }
    }

    Plan::Infix { op, left, right }
}

fn implicit_product<'a>(numeral: Rendered, other: Rendered) -> Plan<'a> {
    let negative = numeral.negative != other.negative;
    Plan::ImplicitProduct {
        negative,
        numeral: numeral.strip_sign(),
        other: other.strip_sign(),
    }
}
