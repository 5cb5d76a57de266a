//! Splits expression source text into tokens.

use alloc::{string::String, vec::Vec};
use core::fmt;

use crate::error::NodeError;

/// Operator symbols, longest first so that `<=` is preferred over `<`. The keyword operator `in`
/// is recognised from identifiers instead.
const OPERATORS: [&str; 18] = [
    "==", "!=", "<=", ">=", ".*", "./",
    "+", "-", "*", "/", "^", "%", "!", "'", ":", "<", ">", "=",
];

#[derive(PartialEq, Eq, Debug, Clone)]
pub enum Token {
    /// A number, as written.
    Number(String),

    /// A double-quoted string, without its quotes.
    Text(String),

    Identifier(String),
    Operator(&'static str),
    LeftParen,
    RightParen,
    Comma,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Token::Number(n) => write!(f, "number {}", n),
            Token::Text(t) => write!(f, "string \"{}\"", t),
            Token::Identifier(i) => write!(f, "identifier {}", i),
            Token::Operator(o) => write!(f, "'{}'", o),
            Token::LeftParen => write!(f, "'('"),
            Token::RightParen => write!(f, "')'"),
            Token::Comma => write!(f, "','"),
        }
    }
}

fn is_identifier_start(c: char) -> bool {
    c.is_alphabetic() || c == '_' || c == '$'
}

fn is_identifier_continue(c: char) -> bool {
    is_identifier_start(c) || c.is_ascii_digit()
}

/// Splits `source` into tokens. Whitespace separates tokens but is otherwise ignored.
pub fn tokenize(source: &str) -> Result<Vec<Token>, NodeError> {
    let mut tokens = Vec::new();
    let mut rest = source;

    while let Some(c) = rest.chars().next() {
        if c.is_whitespace() {
            rest = &rest[c.len_utf8()..];
            continue;
        }

        let starts_number = c.is_ascii_digit()
            || (c == '.' && rest[1..].starts_with(|n: char| n.is_ascii_digit()));

        if starts_number {
            let len = number_len(rest);
            let text = &rest[..len];
            if text.parse::<f64>().is_err() {
                return Err(NodeError::InvalidNumber(text.into()));
            }
            tokens.push(Token::Number(text.into()));
            rest = &rest[len..];
        } else if is_identifier_start(c) {
            let len = rest
                .char_indices()
                .find(|(_, c)| !is_identifier_continue(*c))
                .map(|(i, _)| i)
                .unwrap_or(rest.len());
            let name = &rest[..len];
            tokens.push(if name == "in" {
                Token::Operator("in")
            } else {
                Token::Identifier(name.into())
            });
            rest = &rest[len..];
        } else if c == '"' {
            let body = &rest[1..];
            let end = body.find('"').ok_or(NodeError::UnterminatedString)?;
            tokens.push(Token::Text(body[..end].into()));
            rest = &body[end + 1..];
        } else if c == '(' || c == ')' || c == ',' {
            tokens.push(match c {
                '(' => Token::LeftParen,
                ')' => Token::RightParen,
                _ => Token::Comma,
            });
            rest = &rest[1..];
        } else if let Some(op) = OPERATORS.iter().find(|op| rest.starts_with(**op)) {
            tokens.push(Token::Operator(*op));
            rest = &rest[op.len()..];
        } else {
            return Err(NodeError::UnexpectedCharacter(c));
        }
    }

    Ok(tokens)
}

/// Returns the length of the number at the start of `text`: digits with an optional fractional
/// part, then an optional exponent which must have at least one digit.
fn number_len(text: &str) -> usize {
    let bytes = text.as_bytes();
    let mut index = 0;

    while index < bytes.len() && bytes[index].is_ascii_digit() {
        index += 1;
    }
    if index < bytes.len() && bytes[index] == b'.' {
        index += 1;
        while index < bytes.len() && bytes[index].is_ascii_digit() {
            index += 1;
        }
    }

    if index < bytes.len() && (bytes[index] == b'e' || bytes[index] == b'E') {
        let mut end = index + 1;
        if end < bytes.len() && (bytes[end] == b'+' || bytes[end] == b'-') {
            end += 1;
        }
        let digits_start = end;
        while end < bytes.len() && bytes[end].is_ascii_digit() {
            end += 1;
        }
        if end > digits_start {
            index = end;
        }
    }

    index
}
