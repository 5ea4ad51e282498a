//! Re-export public algorithms.

pub mod inward;

pub use inward::{chain_monotonicity_breaks, derive_inward_cells};
