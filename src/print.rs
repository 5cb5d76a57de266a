//! The pretty-printing entry points.

use alloc::{string::String, vec::Vec};
use core::fmt;
use log::debug;

use crate::{
    error::RenderError,
    node::{structured::ExpressionNode, Upgradable},
    render::{RenderConfig, Renderer},
    renderers::{PlainRenderer, TexRenderer},
    scope::{EmptyScope, Scope},
};

/// Something which can be pretty-printed. Only expressions and collections of them are accepted;
/// the other variants exist so that callers holding loosely-typed values get a type error rather
/// than a rendering.
#[derive(PartialEq, Debug, Clone)]
pub enum Input {
    Expression(String),
    Collection(Vec<Input>),
    Number(f64),
    Boolean(bool),
    Null,
}

impl Input {
    /// A name for this input's type, used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Input::Expression(_) => "expression",
            Input::Collection(_) => "collection",
            Input::Number(_) => "number",
            Input::Boolean(_) => "boolean",
            Input::Null => "null",
        }
    }

    /// Checks that this input, and every element if it is a collection, is an expression or a
    /// collection.
    fn into_printable(self) -> Result<Printable, RenderError> {
        match self {
            Input::Expression(source) => Ok(Printable::Expression(source)),
            Input::Collection(items) => items
                .into_iter()
                .map(Input::into_printable)
                .collect::<Result<Vec<_>, _>>()
                .map(Printable::Collection),
            other => Err(RenderError::InputType(other.type_name())),
        }
    }
}

/// An [Input] which has passed the type check.
enum Printable {
    Expression(String),
    Collection(Vec<Printable>),
}

impl From<&str> for Input {
    fn from(source: &str) -> Self {
        Input::Expression(source.into())
    }
}

impl From<String> for Input {
    fn from(source: String) -> Self {
        Input::Expression(source)
    }
}

impl From<f64> for Input {
    fn from(value: f64) -> Self {
        Input::Number(value)
    }
}

impl From<bool> for Input {
    fn from(value: bool) -> Self {
        Input::Boolean(value)
    }
}

impl<T: Into<Input>> From<Vec<T>> for Input {
    fn from(items: Vec<T>) -> Self {
        Input::Collection(items.into_iter().map(Into::into).collect())
    }
}

/// The result of pretty-printing an [Input], with the same shape.
#[derive(PartialEq, Eq, Debug, Clone)]
pub enum Output {
    Text(String),
    Collection(Vec<Output>),
}

impl Output {
    /// Returns the rendered text, if this is not a collection.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Output::Text(text) => Some(text),
            Output::Collection(_) => None,
        }
    }

    pub fn into_text(self) -> Option<String> {
        match self {
            Output::Text(text) => Some(text),
            Output::Collection(_) => None,
        }
    }
}

impl fmt::Display for Output {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Output::Text(text) => f.write_str(text),
            Output::Collection(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                f.write_str("]")
            }
        }
    }
}

/// Pretty-prints an expression, or each expression in a (possibly nested) collection.
///
/// A single expression is rendered with `scope` and `config`. Elements of a collection are
/// rendered with an empty scope and the default configuration, regardless of the arguments.
/// Inputs of any other type are rejected before anything is parsed.
pub fn pretty_print(input: impl Into<Input>, scope: &dyn Scope, config: &RenderConfig) -> Result<Output, RenderError> {
    let input = input.into();
    debug!("pretty-printing {} (simplify: {}, tex: {})", input.type_name(), config.simplify, config.tex);

    match input.into_printable()? {
        Printable::Expression(source) => pretty_print_expression(&source, scope, config).map(Output::Text),
        Printable::Collection(items) => print_collection(items),
    }
}

fn print_collection(items: Vec<Printable>) -> Result<Output, RenderError> {
    let config = RenderConfig::default();
    items
        .into_iter()
        .map(|item| match item {
            Printable::Expression(source) =>
                pretty_print_expression(&source, &EmptyScope, &config).map(Output::Text),
            Printable::Collection(items) => print_collection(items),
        })
        .collect::<Result<Vec<_>, _>>()
        .map(Output::Collection)
}

/// Parses and pretty-prints a single expression.
pub fn pretty_print_expression(source: &str, scope: &dyn Scope, config: &RenderConfig) -> Result<String, RenderError> {
    config.validate()?;
    let node = source.upgrade_with(&config.precedence)?;
    render_node(&node, scope, config)
}

/// Pretty-prints an expression tree which has already been built.
pub fn render_node(node: &ExpressionNode, scope: &dyn Scope, config: &RenderConfig) -> Result<String, RenderError> {
    config.validate()?;

    let rendered = if config.tex {
        TexRenderer::new(config.clone()).render(node, scope)?
    } else {
        PlainRenderer::new(config.clone()).render(node, scope)?
    };

    Ok(rendered.text)
}
