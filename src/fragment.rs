//! Five-slot text assembly for a rendered binary operation.
//!
//! A binary operation is laid out as `[left, left separator, operator, right separator, right]`,
//! and every rewrite made while simplifying is expressed as a change to one or more slots.

use alloc::{format, string::String};
use core::fmt;

use crate::precedence::{self, Rank};

/// One of the five positions in a [FragmentAssembly].
#[derive(PartialEq, Eq, Debug, Copy, Clone)]
pub enum Slot {
    Left,
    LeftSeparator,
    Operator,
    RightSeparator,
    Right,
}

impl Slot {
    fn index(self) -> usize {
        match self {
            Slot::Left => 0,
            Slot::LeftSeparator => 1,
            Slot::Operator => 2,
            Slot::RightSeparator => 3,
            Slot::Right => 4,
        }
    }
}

/// How the separators around the operator are initialised.
#[derive(PartialEq, Eq, Debug, Copy, Clone)]
pub enum Spacing {
    /// A space either side of every operator.
    Spaced,

    /// A space either side, except for powers and multiplication which are written tight.
    Compact,

    /// No spaces at all.
    Tight,
}

#[derive(PartialEq, Eq, Debug, Clone)]
pub struct FragmentAssembly {
    slots: [String; 5],
}

impl FragmentAssembly {
    /// Creates a new assembly for `left op right`. `rank` is the operator's rank, which decides
    /// the separators under [Spacing::Compact].
    pub fn new(left: String, op: &str, right: String, rank: Option<Rank>, spacing: Spacing) -> FragmentAssembly {
        let separator = match spacing {
            Spacing::Spaced => " ",
            Spacing::Compact if matches!(rank, Some(precedence::POWER | precedence::MULTIPLY)) => "",
            Spacing::Compact => " ",
            Spacing::Tight => "",
        };

        FragmentAssembly {
            slots: [left, separator.into(), op.into(), separator.into(), right],
        }
    }

    pub fn get(&self, slot: Slot) -> &str {
        &self.slots[slot.index()]
    }

    pub fn set(&mut self, slot: Slot, text: impl Into<String>) {
        self.slots[slot.index()] = text.into();
    }

    pub fn blank(&mut self, slot: Slot) {
        self.slots[slot.index()].clear();
    }

    /// Blanks the operator and both separators, leaving the operands directly adjacent.
    pub fn juxtapose(&mut self) {
        self.blank(Slot::LeftSeparator);
        self.blank(Slot::Operator);
        self.blank(Slot::RightSeparator);
    }

    /// Surrounds the contents of `slot` with `open` and `close`.
    pub fn wrap(&mut self, slot: Slot, open: &str, close: &str) {
        let inner = &self.slots[slot.index()];
        self.slots[slot.index()] = format!("{}{}{}", open, inner, close);
    }

    /// Surrounds only the first `len` bytes of `slot` with `open` and `close`.
    pub fn wrap_prefix(&mut self, slot: Slot, len: usize, open: &str, close: &str) {
        let text = &self.slots[slot.index()];
        if len > text.len() || !text.is_char_boundary(len) {
            return;
        }
        let (head, tail) = text.split_at(len);
        self.slots[slot.index()] = format!("{}{}{}{}", open, head, close, tail);
    }

    /// Prefixes the contents of `slot` with `prefix`.
    pub fn prepend(&mut self, slot: Slot, prefix: &str) {
        self.slots[slot.index()].insert_str(0, prefix);
    }

    pub fn join(&self) -> String {
        self.slots.concat()
    }
}

impl fmt::Display for FragmentAssembly {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for slot in &self.slots {
            f.write_str(slot)?;
        }
        Ok(())
    }
}
