//! Pretty-printing of mathematical expressions as plain text or TeX.
//!
//! An expression is parsed into a [node tree](node), symbols bound in a [scope] are substituted
//! (numbers to a fixed number of significant figures), and the tree is laid out by one of the
//! [renderers]. Optionally, the layout is [simplified](simplify) along the way: identities are
//! dropped, numerals are written next to what they multiply, and signs are folded into the
//! surrounding operators.
//!
//! ```
//! use prettyexpr::{pretty_print_expression, RenderConfig, ScopeValue};
//! use std::collections::BTreeMap;
//!
//! let mut scope = BTreeMap::new();
//! scope.insert("a", ScopeValue::from(1.2));
//! scope.insert("b", ScopeValue::from(2.3));
//!
//! let config = RenderConfig::default().simplified(true);
//! assert_eq!(pretty_print_expression("a + b*x", &scope, &config).unwrap(), "1.20 + 2.30x");
//! ```

#![no_std]
extern crate alloc;

pub mod error;
pub mod node;
pub mod precedence;
pub mod number;
pub mod scope;
pub mod fragment;
pub mod simplify;
pub mod render;
pub mod renderers;
pub mod print;
mod decimal_ext;

#[cfg(test)]
mod tests;

pub use crate::{
    error::{NodeError, RenderError},
    node::structured::{Constant, ExpressionNode},
    print::{pretty_print, pretty_print_expression, render_node, Input, Output},
    render::RenderConfig,
    scope::{EmptyScope, Scope, ScopeValue},
};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
