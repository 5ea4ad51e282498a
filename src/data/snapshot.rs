//! Interior state snapshot: field values and cell centres at construction.
//!
//! The core copies the interior field values and the cell-centre positions
//! out of the live mesh/field when a patch field is constructed. Every
//! later gradient computation reads these copies, never the live data, so
//! the extrapolation math is decoupled from external mutation timing.
//!
//! # Staleness contract
//! The snapshot reflects the mesh and field as of construction. If the
//! external mesh or field changes, the snapshot does not follow;
//! reconstructing the patch field (or calling its explicit reconstruct
//! operation with a fresh snapshot) is the only supported way to pick up
//! the change.

use crate::geometry::algebra::Vector;
use crate::geometry::centers::CellCenters;
use crate::patch_error::PatchFieldError;
use crate::topology::cell::CellId;

/// Owned copies of the interior field values and cell-centre positions.
#[derive(Clone, Debug)]
pub struct InteriorSnapshot<T> {
    values: Vec<T>,
    centers: CellCenters,
}

impl<T> InteriorSnapshot<T> {
    /// Build a snapshot from per-cell values and centres.
    ///
    /// # Errors
    /// Returns `Err(SnapshotLengthMismatch)` if the two arrays disagree on
    /// cell count.
    pub fn try_new(values: Vec<T>, centers: CellCenters) -> Result<Self, PatchFieldError> {
        if values.len() != centers.len() {
            return Err(PatchFieldError::SnapshotLengthMismatch {
                values: values.len(),
                centers: centers.len(),
            });
        }
        Ok(Self { values, centers })
    }

    /// Number of interior cells covered.
    #[inline]
    pub fn num_cells(&self) -> usize {
        debug_assert_eq!(self.values.len(), self.centers.len());
        self.values.len()
    }

    /// The cell-centre snapshot.
    #[inline]
    pub fn centers(&self) -> &CellCenters {
        &self.centers
    }

    /// All interior values, indexed by cell.
    #[inline]
    pub fn values(&self) -> &[T] {
        &self.values
    }

    /// Interior value at cell `c`.
    ///
    /// # Errors
    /// Returns `Err(CellOutOfRange)` if `c` is not covered.
    #[inline]
    pub fn try_value(&self, c: CellId) -> Result<&T, PatchFieldError> {
        self.values
            .get(c.index())
            .ok_or(PatchFieldError::CellOutOfRange {
                cell: c,
                len: self.values.len(),
            })
    }

    /// Centre of cell `c`.
    ///
    /// # Errors
    /// Returns `Err(CellOutOfRange)` if `c` is not covered.
    #[inline]
    pub fn try_center(&self, c: CellId) -> Result<Vector, PatchFieldError> {
        self.centers.try_center(c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_length_mismatch() {
        let centers = CellCenters::new(vec![Vector::default(); 2]);
        let err = InteriorSnapshot::try_new(vec![1.0], centers).unwrap_err();
        assert!(matches!(
            err,
            PatchFieldError::SnapshotLengthMismatch {
                values: 1,
                centers: 2
            }
        ));
    }

    #[test]
    fn indexed_access() {
        let centers = CellCenters::new(vec![
            Vector::new(0.0, 0.0, 0.0),
            Vector::new(1.0, 0.0, 0.0),
        ]);
        let snap = InteriorSnapshot::try_new(vec![10.0, 4.0], centers).unwrap();
        assert_eq!(snap.num_cells(), 2);
        assert_eq!(*snap.try_value(CellId::new(1)).unwrap(), 4.0);
        assert!(snap.try_value(CellId::new(2)).is_err());
        assert_eq!(
            snap.try_center(CellId::new(1)).unwrap(),
            Vector::new(1.0, 0.0, 0.0)
        );
    }
}
