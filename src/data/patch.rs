//! Boundary patch geometry, as handed over by the external mesh.
//!
//! A patch is one named external surface of the domain. The core needs the
//! cells owning the patch faces (in patch-face order) and the per-face
//! delta coefficients: the inverse distance from each face centre to its
//! owning cell centre, used to convert a gradient into a face-value
//! correction.

use crate::patch_error::PatchFieldError;
use crate::topology::cell::CellId;

/// Per-patch geometry consumed from the mesh framework.
#[derive(Clone, Debug, PartialEq)]
pub struct BoundaryPatch {
    name: String,
    bcells: Vec<CellId>,
    delta_coeffs: Vec<f64>,
}

impl BoundaryPatch {
    /// Build a patch from its owning cells and delta coefficients.
    ///
    /// # Errors
    /// Returns `Err(PatchSizeMismatch)` if the two lists disagree on face
    /// count, or `Err(InvalidDeltaCoeff)` if any delta coefficient is not
    /// strictly positive and finite (a delta coefficient is an inverse
    /// distance, so zero or negative values have no geometric meaning).
    pub fn try_new(
        name: impl Into<String>,
        bcells: Vec<CellId>,
        delta_coeffs: Vec<f64>,
    ) -> Result<Self, PatchFieldError> {
        let name = name.into();
        if bcells.len() != delta_coeffs.len() {
            return Err(PatchFieldError::PatchSizeMismatch {
                patch: name,
                bcells: bcells.len(),
                deltas: delta_coeffs.len(),
            });
        }
        if let Some((face, &value)) = delta_coeffs
            .iter()
            .enumerate()
            .find(|(_, d)| !(d.is_finite() && **d > 0.0))
        {
            return Err(PatchFieldError::InvalidDeltaCoeff {
                patch: name,
                face,
                value,
            });
        }
        Ok(Self {
            name,
            bcells,
            delta_coeffs,
        })
    }

    /// Patch name, as used in diagnostics and configuration.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of faces on the patch.
    #[inline]
    pub fn len(&self) -> usize {
        debug_assert_eq!(self.bcells.len(), self.delta_coeffs.len());
        self.bcells.len()
    }

    /// Whether the patch has no faces.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bcells.is_empty()
    }

    /// Face-owning cells in patch-face order.
    #[inline]
    pub fn bcells(&self) -> &[CellId] {
        &self.bcells
    }

    /// Inverse face-centre-to-cell-centre distance per face.
    #[inline]
    pub fn delta_coeffs(&self) -> &[f64] {
        &self.delta_coeffs
    }
}
