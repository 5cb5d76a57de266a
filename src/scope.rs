//! Values which are substituted for symbols while rendering.

use alloc::{collections::BTreeMap, string::String};

/// A value bound to a symbol name.
#[derive(PartialEq, Debug, Clone)]
pub enum ScopeValue {
    /// Substituted as a numeral, formatted to the configured precision.
    Number(f64),

    /// Substituted verbatim, for example a pre-rendered uncertainty like `(12 +/- 2.321)`.
    Text(String),
}

impl From<f64> for ScopeValue {
    fn from(value: f64) -> Self {
        ScopeValue::Number(value)
    }
}

impl From<i32> for ScopeValue {
    fn from(value: i32) -> Self {
        ScopeValue::Number(value.into())
    }
}

impl From<&str> for ScopeValue {
    fn from(text: &str) -> Self {
        ScopeValue::Text(text.into())
    }
}

impl From<String> for ScopeValue {
    fn from(text: String) -> Self {
        ScopeValue::Text(text)
    }
}

/// How a symbol resolves against a scope.
#[derive(PartialEq, Debug, Clone, Copy)]
pub enum ScopeBinding<'a> {
    /// The symbol is not in scope and is rendered under its own name.
    Unbound,
    Numeric(f64),
    Opaque(&'a str),
}

/// A read-only mapping from symbol names to values.
pub trait Scope {
    fn lookup(&self, name: &str) -> Option<&ScopeValue>;
}

impl Scope for BTreeMap<String, ScopeValue> {
    fn lookup(&self, name: &str) -> Option<&ScopeValue> {
        self.get(name)
    }
}

impl Scope for BTreeMap<&str, ScopeValue> {
    fn lookup(&self, name: &str) -> Option<&ScopeValue> {
        self.get(name)
    }
}

impl<'k> Scope for [(&'k str, ScopeValue)] {
    fn lookup(&self, name: &str) -> Option<&ScopeValue> {
        self.iter().find(|(key, _)| *key == name).map(|(_, value)| value)
    }
}

/// A scope with no bindings, so that every symbol renders under its own name.
#[derive(PartialEq, Eq, Debug, Clone, Copy, Default)]
pub struct EmptyScope;

impl Scope for EmptyScope {
    fn lookup(&self, _: &str) -> Option<&ScopeValue> {
        None
    }
}

/// Resolves `name` against `scope`.
pub fn resolve<'a, S: Scope + ?Sized>(name: &str, scope: &'a S) -> ScopeBinding<'a> {
    match scope.lookup(name) {
        None => ScopeBinding::Unbound,
        Some(ScopeValue::Number(value)) => ScopeBinding::Numeric(*value),
        Some(ScopeValue::Text(text)) => ScopeBinding::Opaque(text),
    }
}
