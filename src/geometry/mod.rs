//! Geometry utilities for fv-extrap.
//!
//! This module provides the small vector/tensor algebra the extrapolation
//! math needs, plus the owned cell-centre snapshot the inward-cell scan and
//! the gradient computation read from.

pub mod algebra;
pub mod centers;

pub use algebra::{Tensor, Vector, distance};
pub use centers::CellCenters;
