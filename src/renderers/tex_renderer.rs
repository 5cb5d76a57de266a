use alloc::{format, string::String, vec::Vec};

use crate::{
    error::RenderError,
    fragment::{FragmentAssembly, Slot, Spacing},
    node::function::Function,
    number::FormattedNumber,
    precedence::{self, Rank, Side},
    render::{Kind, RenderConfig, Rendered, Renderer},
};

/// Symbol names which are written as TeX commands.
const GREEK_LETTERS: [&str; 25] = [
    "alpha", "beta", "gamma", "delta", "epsilon", "zeta", "eta", "theta", "iota", "kappa",
    "lambda", "mu", "nu", "xi", "pi", "rho", "sigma", "tau", "upsilon", "phi", "chi", "psi",
    "omega", "Gamma", "Delta",
];

/// Renders expressions as TeX, such as `{1.20}+{{2.30} \, {x}}`.
///
/// Operands are grouped in braces, and operands which bind more loosely than their parent are
/// wrapped in `\left(` and `\right)` instead. Division is written with `\frac`.
#[derive(PartialEq, Eq, Debug, Clone, Default)]
pub struct TexRenderer {
    pub config: RenderConfig,
}

impl TexRenderer {
    pub fn new(config: RenderConfig) -> TexRenderer {
        TexRenderer { config }
    }

    /// Groups `child` as the operand at `side` of `op`.
    fn operand(&self, op: &str, rank: Rank, child: &Rendered, side: Side) -> String {
        if child.needs_parentheses(op, rank, side) {
            delimit(&child.text)
        } else {
            brace(&child.text)
        }
    }

    /// Lays out the base of a power. Symbols and calls need no grouping.
    fn base(&self, base: &Rendered) -> String {
        if base.rank.is_some() {
            delimit(&base.text)
        } else if matches!(base.kind, Kind::Symbol | Kind::Call) {
            base.text.clone()
        } else {
            brace(&base.text)
        }
    }
}

/// Returns true if the operand of a unary operator with rank `rank` must be delimited.
fn wraps_unary_operand(rank: Rank, operand: &Rendered) -> bool {
    operand.negative || operand.rank.map_or(false, |r| r > rank)
}

fn brace(text: &str) -> String {
    format!("{{{}}}", text)
}

fn delimit(text: &str) -> String {
    format!("\\left({{{}}}\\right)", text)
}

/// Thin space before a symbol or call, so `2 x` reads as a product; an explicit dot otherwise.
fn multiplication_glyph(factor: &Rendered) -> &'static str {
    match factor.kind {
        Kind::Symbol | Kind::Call => "\\,",
        _ => "\\cdot",
    }
}

fn tex_operator(op: &str) -> &str {
    match op {
        "%" => "\\bmod",
        "<=" => "\\leq",
        ">=" => "\\geq",
        "!=" => "\\neq",
        "==" => "=",
        "in" => "\\rightarrow",
        other => other,
    }
}

/// Lays out text of the form `(v +/- e)` as a value with an uncertainty.
fn uncertainty(text: &str) -> Option<String> {
    let inner = text.trim().strip_prefix('(')?.strip_suffix(')')?;
    let (value, error) = inner.split_once("+/-")?;
    Some(format!("{{{}}}\\pm{{{}}}", value.trim(), error.trim()))
}

impl Renderer for TexRenderer {
    fn config(&self) -> &RenderConfig {
        &self.config
    }

    fn substituted_numeral(&self, value: f64) -> Rendered {
        let formatted = FormattedNumber::with_precision(value, self.config.precision, self.config.trim_zeros);
        Rendered::numeral(value, formatted.to_tex())
    }

    fn literal_numeral(&self, value: f64, text: &str) -> Rendered {
        Rendered::numeral(value, FormattedNumber::from_literal(text).to_tex())
    }

    fn opaque_text(&self, text: &str) -> Rendered {
        Rendered::opaque(uncertainty(text).unwrap_or_else(|| text.into()))
    }

    fn string_constant(&self, text: &str) -> Rendered {
        Rendered::leaf(format!("\\text{{{}}}", text), Kind::Text)
    }

    fn free_symbol(&self, name: &str) -> Rendered {
        if GREEK_LETTERS.contains(&name) {
            Rendered::leaf(format!("\\{}", name), Kind::Symbol)
        } else {
            Rendered::leaf(name.into(), Kind::Symbol)
        }
    }

    fn call(&self, name: &str, arguments: Vec<Rendered>) -> Result<Rendered, RenderError> {
        let arguments = arguments.iter().map(|a| brace(&a.text)).collect::<Vec<_>>().join(",");
        let text = match Function::from_name(name) {
            Some(function) if function.takes_group() =>
                format!("{}{{{}}}", function.tex_command(), arguments),
            Some(function) =>
                format!("{}\\left({{{}}}\\right)", function.tex_command(), arguments),
            None =>
                format!("\\mathrm{{{}}}\\left({{{}}}\\right)", name, arguments),
        };
        Ok(Rendered::leaf(text, Kind::Call))
    }

    fn prefix(&self, op: &str, rank: Rank, operand: Rendered) -> Result<Rendered, RenderError> {
        let body = if wraps_unary_operand(precedence::TRANSPOSE, &operand) {
            delimit(&operand.text)
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
        let glyph = if op == "'" { "^{\\top}" } else { op };
        let body = if wraps_unary_operand(rank, &operand) { delimit(&operand.text) } else { operand.text };
        Ok(Rendered::operation(format!("{}{}", body, glyph), rank))
    }

    fn infix(&self, op: &str, rank: Rank, left: Rendered, right: Rendered) -> Result<Rendered, RenderError> {
        let assembly = match op {
            "/" => return Ok(Rendered::operation(
                format!("\\frac{{{}}}{{{}}}", left.text, right.text),
                rank,
            )),

            "^" => FragmentAssembly::new(self.base(&left), "^", brace(&right.text), Some(rank), Spacing::Tight),

            "*" | ".*" => FragmentAssembly::new(
                self.operand(op, rank, &left, Side::Left),
                multiplication_glyph(&right),
                self.operand(op, rank, &right, Side::Right),
                Some(rank),
                Spacing::Spaced,
            ),

            _ => FragmentAssembly::new(
                self.operand(op, rank, &left, Side::Left),
                tex_operator(op),
                self.operand(op, rank, &right, Side::Right),
                Some(rank),
                Spacing::Tight,
            ),
        };

        Ok(Rendered::operation(assembly.join(), rank))
    }

    fn zero(&self) -> Rendered {
        Rendered::numeral(0.0, "0".into())
    }

    fn implicit_product(&self, rank: Rank, negative: bool, numeral: Rendered, other: Rendered) -> Result<Rendered, RenderError> {
        let glyph = multiplication_glyph(&other);
        let right = self.operand("*", rank, &other, Side::Right);

        let mut assembly = match &numeral.kind {
            // The numeric product's second factor is pulled in next to `other`, and the first
            // factor stays outside: `{2} \cdot \left({{1.32} \, {x}}\right)`
            Kind::Product { head, tail, .. } => {
                let inner = format!("{} {} {}", brace(tail), glyph, right);
                FragmentAssembly::new(head.clone(), "\\cdot", delimit(&inner), Some(rank), Spacing::Spaced)
            }
            _ => FragmentAssembly::new(brace(&numeral.text), glyph, right, Some(rank), Spacing::Spaced),
        };
        if negative {
            assembly.prepend(Slot::Left, "-");
        }

        Ok(Rendered::signed_operation(assembly.join(), rank, negative))
    }

    fn numeric_product(&self, rank: Rank, value: f64, left: Rendered, right: Rendered) -> Result<Rendered, RenderError> {
        if let Kind::Product { .. } = left.kind {
            return Err(RenderError::UnsupportedTexCombination(
                "a product of numerals whose first factor is itself a product of numerals",
            ));
        }

        let head = self.operand("*", rank, &left, Side::Left);
        let assembly = FragmentAssembly::new(
            head.clone(),
            "\\cdot",
            self.operand("*", rank, &right, Side::Right),
            Some(rank),
            Spacing::Spaced,
        );

        Ok(Rendered::product(assembly.join(), rank, value, head, right.text))
    }
}
