//! `CellId`: a strong, zero-cost handle for mesh cells
//!
//! Owner/neighbour incidence arrays, boundary-cell lists, and interior
//! snapshots all index cells by position, so `CellId` wraps a plain `usize`
//! index. "No cell" is expressed as `Option<CellId>` rather than a reserved
//! sentinel value; the inward-cell derivation returns exactly that.
//!
//! This module provides:
//! - A transparent `CellId` newtype for zero-cost array indexing.
//! - Implementations of common traits (`Debug`, `Display`, ordering,
//!   hashing, serde) so `CellId` can be used in maps, sets, and printed
//!   easily.

use std::fmt;

/// Index of a cell in the mesh's cell enumeration.
///
/// # Memory layout
/// This type is `repr(transparent)`, meaning it has the same ABI and
/// alignment as its single `usize` field.
#[derive(
    Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
#[repr(transparent)]
pub struct CellId(usize);

impl CellId {
    /// Creates a new `CellId` from a raw index.
    #[inline]
    pub const fn new(index: usize) -> Self {
        CellId(index)
    }

    /// Returns the raw index of this cell.
    ///
    /// Use it when indexing into per-cell arrays; prefer to work with
    /// `CellId` otherwise for type safety.
    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl From<usize> for CellId {
    #[inline]
    fn from(index: usize) -> Self {
        CellId(index)
    }
}

/// Custom `Debug` implementation to display as `CellId(raw_value)`.
impl fmt::Debug for CellId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("CellId").field(&self.0).finish()
    }
}

/// Custom `Display` implementation to print only the raw index.
impl fmt::Display for CellId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod layout_tests {
    //! Compile-time assertion that `CellId` has the same size as `usize`.
    use super::*;
    use static_assertions::{assert_eq_align, assert_eq_size};

    // If this fails, our repr(transparent) guarantee is broken!
    assert_eq_size!(CellId, usize);
    assert_eq_align!(CellId, usize);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_and_index() {
        let c = CellId::new(42);
        assert_eq!(c.index(), 42);
    }

    #[test]
    fn debug_and_display() {
        let c = CellId::new(7);
        assert_eq!(format!("{:?}", c), "CellId(7)");
        assert_eq!(format!("{}", c), "7");
    }

    #[test]
    fn ordering_and_hash() {
        let a = CellId::new(1);
        let b = CellId::new(2);
        assert!(a < b);
        use std::collections::HashSet;
        let mut set = HashSet::new();
        set.insert(a);
        set.insert(b);
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn json_roundtrip() {
        let c = CellId::new(123);
        let s = serde_json::to_string(&c).unwrap();
        let c2: CellId = serde_json::from_str(&s).unwrap();
        assert_eq!(c2, c);
    }
}
