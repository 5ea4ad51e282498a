//! Owned snapshot of per-cell centre positions.
//!
//! The extrapolation core copies cell centres out of the live mesh at
//! construction time so distance computations are insulated from external
//! mesh mutation. The copy goes stale if the mesh changes; reconstructing
//! the patch field is the only supported way to pick that up.

use crate::geometry::algebra::Vector;
use crate::patch_error::PatchFieldError;
use crate::topology::cell::CellId;

/// Cell-centre positions indexed by `CellId`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CellCenters(Vec<Vector>);

impl CellCenters {
    /// Wrap an owned list of cell centres, indexed by cell.
    #[inline]
    pub fn new(centers: Vec<Vector>) -> Self {
        Self(centers)
    }

    /// Number of cells covered.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no centres are stored.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Centre of cell `c`.
    ///
    /// # Errors
    /// Returns `Err(CellOutOfRange)` if `c` is not covered by the snapshot.
    #[inline]
    pub fn try_center(&self, c: CellId) -> Result<Vector, PatchFieldError> {
        self.0
            .get(c.index())
            .copied()
            .ok_or(PatchFieldError::CellOutOfRange {
                cell: c,
                len: self.0.len(),
            })
    }

    /// All centres, indexed by cell.
    #[inline]
    pub fn as_slice(&self) -> &[Vector] {
        &self.0
    }
}

impl From<Vec<Vector>> for CellCenters {
    fn from(centers: Vec<Vector>) -> Self {
        Self(centers)
    }
}
