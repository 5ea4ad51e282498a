//! Top-level module for mesh topology abstractions.
//!
//! This module provides the types this crate consumes from the external
//! mesh's connectivity:
//! - `CellId` handles for mesh cells
//! - `FaceIncidence`, the owner/neighbour arrays for internal faces
//!
//! The incidence arrays are read-only from the crate's perspective; the
//! inward-cell derivation in [`crate::algs::inward`] walks them once per
//! patch construction.

pub mod cell;
pub mod incidence;

pub use cell::CellId;
pub use incidence::FaceIncidence;
