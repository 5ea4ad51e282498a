//! Face-to-cell incidence for internal mesh faces.
//!
//! For each internal face `f`, `owner[f]` and `neighbour[f]` name the two
//! cells the face separates. By convention the owner is the lower-indexed
//! cell, but that is a convention of the surrounding framework, not an
//! invariant of this type: meshes whose face orientation disagrees with it
//! are accepted unchanged, and the inward-cell scan relies only on which
//! side a cell appears on.

use crate::patch_error::PatchFieldError;
use crate::topology::cell::CellId;

/// Owned owner/neighbour arrays for the internal faces of a mesh.
///
/// # Invariants
///
/// - `owner.len() == neighbour.len()` (one entry per internal face).
/// - No face connects a cell to itself.
///
/// These invariants are checked at construction and, after that, in debug
/// builds and when the `check-invariants` feature is enabled via
/// [`validate_invariants`](Self::validate_invariants).
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct FaceIncidence {
    /// Owner cell per internal face.
    owner: Vec<CellId>,
    /// Neighbour cell per internal face.
    neighbour: Vec<CellId>,
}

impl FaceIncidence {
    /// Build incidence arrays from per-face owner and neighbour cells.
    ///
    /// # Errors
    /// Returns `Err(IncidenceLengthMismatch)` if the arrays differ in
    /// length, or `Err(SelfAdjacentFace)` if any face lists the same cell
    /// on both sides.
    pub fn try_new(owner: Vec<CellId>, neighbour: Vec<CellId>) -> Result<Self, PatchFieldError> {
        if owner.len() != neighbour.len() {
            return Err(PatchFieldError::IncidenceLengthMismatch {
                owner: owner.len(),
                neighbour: neighbour.len(),
            });
        }
        for (face, (&o, &n)) in owner.iter().zip(&neighbour).enumerate() {
            if o == n {
                return Err(PatchFieldError::SelfAdjacentFace { face, cell: o });
            }
        }
        let incidence = Self { owner, neighbour };
        #[cfg(any(debug_assertions, feature = "check-invariants"))]
        incidence.validate_invariants();
        Ok(incidence)
    }

    /// Number of internal faces.
    #[inline]
    pub fn len(&self) -> usize {
        debug_assert_eq!(self.owner.len(), self.neighbour.len());
        self.owner.len()
    }

    /// Whether the mesh has no internal faces.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.owner.is_empty()
    }

    /// Owner cells, one per internal face.
    #[inline]
    pub fn owner(&self) -> &[CellId] {
        &self.owner
    }

    /// Neighbour cells, one per internal face.
    #[inline]
    pub fn neighbour(&self) -> &[CellId] {
        &self.neighbour
    }

    /// Iterate over `(owner, neighbour)` pairs in face order.
    pub fn iter(&self) -> impl Iterator<Item = (CellId, CellId)> + '_ {
        self.owner
            .iter()
            .copied()
            .zip(self.neighbour.iter().copied())
    }

    /// Re-check the structural invariants; panics on violation.
    ///
    /// Runs automatically after construction in debug builds and under the
    /// `check-invariants` feature.
    pub fn validate_invariants(&self) {
        assert_eq!(
            self.owner.len(),
            self.neighbour.len(),
            "owner/neighbour length mismatch"
        );
        for (face, (&o, &n)) in self.owner.iter().zip(&self.neighbour).enumerate() {
            assert_ne!(o, n, "face {face} connects cell {o} to itself");
        }
    }
}
