//! # fv-extrap
//!
//! fv-extrap computes extrapolation boundary conditions for finite-volume
//! simulations on unstructured meshes. Given the mesh's internal-face
//! incidence and a boundary patch's owning cells, it discovers for each
//! boundary cell the interior cell one layer further along the wall-normal
//! chain, forms a one-sided gradient between the two, extrapolates the
//! patch face values, and exports the four linearization coefficients an
//! external sparse-system assembler needs to embed the condition
//! implicitly.
//!
//! ## Features
//! - Inward-cell derivation from raw owner/neighbour incidence, with an
//!   explicit nearest-centre tie-break and chain-ordering diagnostics
//! - An extrapolation patch field generic over the value type (scalar,
//!   vector, tensor) through one shared code path
//! - Value/gradient × internal/boundary coefficient exports consistent
//!   with the evaluation formula by construction
//! - Remap (`auto_map`) and reverse-map (`rmap`) support for topology
//!   changes, plus an explicit reconstruct operation
//! - A textual configuration record with the single recognized
//!   `gradient` option
//!
//! ## Determinism
//!
//! All operations are synchronous and deterministic; ties in the
//! inward-cell scan resolve by face order, never by iteration order of a
//! hash map.
//!
//! ## Usage
//! Add `fv-extrap` as a dependency in your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! fv-extrap = "0.1"
//! ```

// Re-export our major subsystems:
pub mod algs;
pub mod data;
pub mod geometry;
pub mod patch_error;
pub mod topology;

/// A convenient prelude to import the most-used traits & types:
pub mod prelude {
    pub use crate::algs::inward::{chain_monotonicity_breaks, derive_inward_cells};
    pub use crate::data::config::{EXTRAPOLATION_TYPE_NAME, ExtrapolationConfig};
    pub use crate::data::extrapolation::ExtrapolationPatchField;
    pub use crate::data::mapper::PatchMapper;
    pub use crate::data::patch::BoundaryPatch;
    pub use crate::data::patch_field::PatchField;
    pub use crate::data::snapshot::InteriorSnapshot;
    pub use crate::data::value::FieldValue;
    pub use crate::geometry::algebra::{Tensor, Vector, distance};
    pub use crate::geometry::centers::CellCenters;
    pub use crate::patch_error::PatchFieldError;
    pub use crate::topology::cell::CellId;
    pub use crate::topology::incidence::FaceIncidence;
}
