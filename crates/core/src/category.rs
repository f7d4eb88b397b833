//! Position categories reported through [`CursorTraits`](crate::CursorTraits).
//!
//! A category is a zero-sized marker describing what a cursor can do. Adaptors
//! never change the category of the cursor they wrap; they pass it through so
//! generic code sees the same metadata it would see for the raw cursor.

/// A marker type naming the capabilities of a cursor.
pub trait Category {
    /// A short human-readable name, used in diagnostics.
    const NAME: &'static str;

    /// Whether cursors of this category can be read from.
    const READABLE: bool;

    /// Whether two positions of this category can be measured against each other.
    const MEASURABLE: bool;
}

/// Single-pass, read-only positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {}

/// Write-only positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Output {}

/// Multi-pass positions that only move forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Forward {}

/// Multi-pass positions that can also move backward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bidirectional {}

/// Positions that support constant-time distance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RandomAccess {}

impl Category for Input {
    const NAME: &'static str = "input";
    const READABLE: bool = true;
    const MEASURABLE: bool = false;
}

impl Category for Output {
    const NAME: &'static str = "output";
    const READABLE: bool = false;
    const MEASURABLE: bool = false;
}

impl Category for Forward {
    const NAME: &'static str = "forward";
    const READABLE: bool = true;
    const MEASURABLE: bool = false;
}

impl Category for Bidirectional {
    const NAME: &'static str = "bidirectional";
    const READABLE: bool = true;
    const MEASURABLE: bool = false;
}

impl Category for RandomAccess {
    const NAME: &'static str = "random access";
    const READABLE: bool = true;
    const MEASURABLE: bool = true;
}
