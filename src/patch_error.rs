//! PatchFieldError: unified error type for fv-extrap public APIs
//!
//! This error type is used throughout the crate to provide robust,
//! non-panicking error handling for all public APIs. Diagnostics that are
//! non-fatal by contract (unresolved inward cells, incomplete mappings) go
//! through the `log` facade instead and never appear here.

use thiserror::Error;

use crate::topology::cell::CellId;

/// Unified error type for boundary patch field operations.
#[derive(Debug, Error)]
pub enum PatchFieldError {
    /// Owner and neighbour arrays describe a different number of internal faces.
    #[error("incidence arrays disagree: {owner} owner entries vs {neighbour} neighbour entries")]
    IncidenceLengthMismatch {
        /// Number of owner entries.
        owner: usize,
        /// Number of neighbour entries.
        neighbour: usize,
    },
    /// An internal face lists the same cell on both sides.
    #[error("internal face {face} connects cell {cell} to itself")]
    SelfAdjacentFace {
        /// Offending face index.
        face: usize,
        /// The cell appearing as both owner and neighbour.
        cell: CellId,
    },
    /// Boundary-cell list and delta-coefficient list disagree on face count.
    #[error("patch `{patch}`: {bcells} boundary cells vs {deltas} delta coefficients")]
    PatchSizeMismatch {
        /// Patch name.
        patch: String,
        /// Number of boundary cells.
        bcells: usize,
        /// Number of delta coefficients.
        deltas: usize,
    },
    /// A delta coefficient (inverse face-to-cell distance) must be positive and finite.
    #[error("patch `{patch}`: delta coefficient {value} at face {face} is not positive and finite")]
    InvalidDeltaCoeff {
        /// Patch name.
        patch: String,
        /// Offending face index.
        face: usize,
        /// The rejected coefficient.
        value: f64,
    },
    /// A cell index does not exist in the interior snapshot.
    #[error("cell {cell} out of range: snapshot holds {len} cells")]
    CellOutOfRange {
        /// Offending cell.
        cell: CellId,
        /// Number of cells in the snapshot.
        len: usize,
    },
    /// Interior values and cell centres disagree on cell count.
    #[error("snapshot arrays disagree: {values} values vs {centers} cell centres")]
    SnapshotLengthMismatch {
        /// Number of interior values.
        values: usize,
        /// Number of cell centres.
        centers: usize,
    },
    /// A configured gradient seed does not match the patch face count.
    #[error("patch `{patch}`: gradient seed has {found} entries, expected {expected}")]
    GradientSeedLengthMismatch {
        /// Patch name.
        patch: String,
        /// Patch face count.
        expected: usize,
        /// Seed length actually supplied.
        found: usize,
    },
    /// Configuration record declares a different patch field type.
    #[error("configuration declares type `{found}`, expected `{expected}`")]
    UnknownPatchFieldType {
        /// The type keyword this field answers to.
        expected: &'static str,
        /// The keyword found in the record.
        found: String,
    },
    /// A mapper was applied whose face count disagrees with the target patch.
    #[error("patch `{patch}`: mapper covers {mapper} faces, patch has {patch_faces}")]
    MapperSizeMismatch {
        /// Patch name.
        patch: String,
        /// Mapper destination size.
        mapper: usize,
        /// Patch face count.
        patch_faces: usize,
    },
    /// Reverse-map source is not of this extrapolation kind.
    #[error("reverse-map source is `{found}`, not `{expected}`")]
    IncompatibleRmapSource {
        /// The kind required by the destination.
        expected: &'static str,
        /// The kind actually supplied.
        found: &'static str,
    },
    /// Reverse-map addressing does not cover the source faces.
    #[error("reverse-map addressing has {found} entries, source holds {expected} faces")]
    RmapAddressingLengthMismatch {
        /// Source face count.
        expected: usize,
        /// Addressing length actually supplied.
        found: usize,
    },
    /// Reverse-map addressing points outside the destination patch.
    #[error("reverse-map address {address} (entry {entry}) out of range for {len} faces")]
    RmapAddressOutOfRange {
        /// Position in the addressing list.
        entry: usize,
        /// The out-of-range destination index.
        address: usize,
        /// Destination face count.
        len: usize,
    },
    /// Reading a configuration record failed.
    #[error("failed to read configuration record: {0}")]
    ConfigRead(#[source] serde_json::Error),
    /// Writing a configuration record failed.
    #[error("failed to write configuration record: {0}")]
    ConfigWrite(#[source] serde_json::Error),
}
