//! Extrapolation boundary patch field.
//!
//! The patch value is calculated by linear extrapolation from two interior
//! cells along the wall-normal chain:
//!
//! ```text
//! gradient[i] = (value[bcells[i]] - value[icells[i]]) / |center[bcells[i]] - center[icells[i]]|
//! value[i]    = value[bcells[i]] + gradient[i] / delta_coeffs[i]
//! ```
//!
//! where `icells` is derived once per construction by
//! [`derive_inward_cells`](crate::algs::inward::derive_inward_cells). The
//! first step is a one-sided finite difference between the boundary cell
//! and its inward neighbour; the second extrapolates from the boundary cell
//! centre out to the face through the patch's delta coefficient.
//!
//! A face whose inward cell could not be resolved keeps a zero gradient,
//! so its boundary value degenerates to the interior value. The interior
//! field and the cell centres are snapshots taken at construction; see
//! [`crate::data::snapshot`] for the staleness contract.

use std::any::Any;
use std::io;

use crate::algs::inward::{chain_monotonicity_breaks, derive_inward_cells};
use crate::data::config::{self, EXTRAPOLATION_TYPE_NAME, ExtrapolationConfig};
use crate::data::mapper::PatchMapper;
use crate::data::patch::BoundaryPatch;
use crate::data::patch_field::PatchField;
use crate::data::snapshot::InteriorSnapshot;
use crate::data::value::FieldValue;
use crate::geometry::algebra::distance;
use crate::patch_error::PatchFieldError;
use crate::topology::cell::CellId;
use crate::topology::incidence::FaceIncidence;

/// Boundary patch field supplying the extrapolation condition.
///
/// # Invariants
///
/// - `icells`, `gradient`, and `values` all have exactly one entry per
///   patch face.
/// - Every resolved entry of `icells` indexes into the snapshot.
///
/// Checked after construction and mutation in debug builds and under the
/// `check-invariants` feature.
#[derive(Clone, Debug)]
pub struct ExtrapolationPatchField<T: FieldValue> {
    patch: BoundaryPatch,
    snapshot: InteriorSnapshot<T>,
    icells: Vec<Option<CellId>>,
    gradient: Vec<T>,
    values: Vec<T>,
}

impl<T: FieldValue> ExtrapolationPatchField<T> {
    /// Construct from patch and interior snapshot.
    ///
    /// Derives the inward cells from the face incidence and evaluates the
    /// boundary values once.
    ///
    /// # Errors
    /// Returns `Err(CellOutOfRange)` if a boundary cell is not covered by
    /// the snapshot.
    pub fn try_new(
        patch: BoundaryPatch,
        incidence: &FaceIncidence,
        snapshot: InteriorSnapshot<T>,
    ) -> Result<Self, PatchFieldError> {
        let mut field = Self::prepare(patch, incidence, snapshot)?;
        field.evaluate();
        Ok(field)
    }

    /// Construct from patch, interior snapshot, and a configuration record.
    ///
    /// A configured gradient seed replaces the derived gradient for the
    /// initial evaluation; the next call to [`evaluate`](Self::evaluate)
    /// recomputes it from the interior field.
    ///
    /// # Errors
    /// In addition to [`try_new`](Self::try_new)'s errors, returns
    /// `Err(UnknownPatchFieldType)` for a record declaring another type and
    /// `Err(GradientSeedLengthMismatch)` for a seed of the wrong length.
    pub fn try_from_config(
        patch: BoundaryPatch,
        incidence: &FaceIncidence,
        snapshot: InteriorSnapshot<T>,
        record: &ExtrapolationConfig<T>,
    ) -> Result<Self, PatchFieldError> {
        record.validate_kind()?;
        if let Some(seed) = &record.gradient {
            if seed.len() != patch.len() {
                return Err(PatchFieldError::GradientSeedLengthMismatch {
                    patch: patch.name().to_string(),
                    expected: patch.len(),
                    found: seed.len(),
                });
            }
        }
        let mut field = Self::prepare(patch, incidence, snapshot)?;
        match &record.gradient {
            Some(seed) => {
                field.gradient.copy_from_slice(seed);
                field.apply_gradient();
            }
            None => field.evaluate(),
        }
        Ok(field)
    }

    /// Clone with the interior-field snapshot rebound.
    ///
    /// The derived inward cells and the current gradient are carried over
    /// verbatim, not recomputed; only the snapshot the next evaluation
    /// reads is replaced.
    ///
    /// # Errors
    /// Returns `Err(CellOutOfRange)` if the new snapshot does not cover
    /// every boundary or inward cell.
    pub fn try_clone_with_snapshot(
        &self,
        snapshot: InteriorSnapshot<T>,
    ) -> Result<Self, PatchFieldError> {
        Self::check_coverage(&self.patch, self.icells.iter().copied().flatten(), &snapshot)?;
        Ok(Self {
            patch: self.patch.clone(),
            snapshot,
            icells: self.icells.clone(),
            gradient: self.gradient.clone(),
            values: self.values.clone(),
        })
    }

    /// Rebuild derived state from fresh mesh data.
    ///
    /// This is the explicit way to pick up a topology change: the inward
    /// cells are re-derived against the new incidence and snapshot, and
    /// the boundary values are re-evaluated. The patch geometry is kept.
    ///
    /// # Errors
    /// Same as [`try_new`](Self::try_new). On error, `self` is unchanged.
    pub fn try_reconstruct(
        &mut self,
        incidence: &FaceIncidence,
        snapshot: InteriorSnapshot<T>,
    ) -> Result<(), PatchFieldError> {
        *self = Self::try_new(self.patch.clone(), incidence, snapshot)?;
        Ok(())
    }

    fn prepare(
        patch: BoundaryPatch,
        incidence: &FaceIncidence,
        snapshot: InteriorSnapshot<T>,
    ) -> Result<Self, PatchFieldError> {
        Self::check_coverage(&patch, std::iter::empty(), &snapshot)?;
        let icells = derive_inward_cells(incidence, patch.bcells(), snapshot.centers());
        let unresolved = icells.iter().filter(|c| c.is_none()).count();
        if unresolved > 0 {
            log::warn!(
                "patch `{}`: no inward cell for {unresolved} of {} boundary faces; \
                 their extrapolation gradient defaults to zero",
                patch.name(),
                patch.len(),
            );
        }
        let breaks = chain_monotonicity_breaks(patch.bcells(), &icells, snapshot.centers());
        if !breaks.is_empty() {
            log::debug!(
                "patch `{}`: inward chain restarts at face indices {breaks:?}",
                patch.name(),
            );
        }
        let n = patch.len();
        let field = Self {
            patch,
            snapshot,
            icells,
            gradient: vec![T::zero(); n],
            values: vec![T::zero(); n],
        };
        #[cfg(any(debug_assertions, feature = "check-invariants"))]
        field.validate_invariants();
        Ok(field)
    }

    fn check_coverage(
        patch: &BoundaryPatch,
        extra: impl Iterator<Item = CellId>,
        snapshot: &InteriorSnapshot<T>,
    ) -> Result<(), PatchFieldError> {
        let len = snapshot.num_cells();
        for cell in patch.bcells().iter().copied().chain(extra) {
            if cell.index() >= len {
                return Err(PatchFieldError::CellOutOfRange { cell, len });
            }
        }
        Ok(())
    }

    /// Number of faces on the patch.
    #[inline]
    pub fn len(&self) -> usize {
        self.patch.len()
    }

    /// Whether the patch has no faces.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.patch.is_empty()
    }

    /// The underlying patch geometry.
    #[inline]
    pub fn patch(&self) -> &BoundaryPatch {
        &self.patch
    }

    /// The interior snapshot this field evaluates against.
    #[inline]
    pub fn snapshot(&self) -> &InteriorSnapshot<T> {
        &self.snapshot
    }

    /// Derived inward cell per face; `None` where the scan found no match.
    #[inline]
    pub fn icells(&self) -> &[Option<CellId>] {
        &self.icells
    }

    /// Current per-face boundary values.
    #[inline]
    pub fn values(&self) -> &[T] {
        &self.values
    }

    /// Surface-normal gradient per face.
    #[inline]
    pub fn sn_grad(&self) -> &[T] {
        &self.gradient
    }

    /// Recompute the per-face gradient from the snapshot.
    ///
    /// Faces without a resolved inward cell, or with coincident cell
    /// centres, fall back to a zero gradient.
    pub fn update_gradient(&mut self) {
        let bcells = self.patch.bcells();
        let centers = self.snapshot.centers().as_slice();
        let interior = self.snapshot.values();
        for (i, &b) in bcells.iter().enumerate() {
            self.gradient[i] = match self.icells[i] {
                Some(ic) => {
                    let d = distance(centers[b.index()], centers[ic.index()]);
                    if d.is_finite() && d > 0.0 {
                        (interior[b.index()] - interior[ic.index()]) / d
                    } else {
                        T::zero()
                    }
                }
                None => T::zero(),
            };
        }
    }

    /// Set the boundary values from the current gradient.
    fn apply_gradient(&mut self) {
        let bcells = self.patch.bcells();
        let deltas = self.patch.delta_coeffs();
        let interior = self.snapshot.values();
        for (i, &b) in bcells.iter().enumerate() {
            self.values[i] = interior[b.index()] + self.gradient[i] / deltas[i];
        }
    }

    /// Evaluate the patch field: refresh the gradient, then the values.
    ///
    /// Idempotent for unchanged inputs.
    pub fn evaluate(&mut self) {
        self.update_gradient();
        self.apply_gradient();
    }

    /// Weight of the owner cell's unknown in the value expression: the
    /// component-wise identity.
    pub fn value_internal_coeffs(&self) -> Vec<T> {
        vec![T::one(); self.len()]
    }

    /// Explicit contribution to the value expression:
    /// `gradient[i] / delta_coeffs[i]`.
    pub fn value_boundary_coeffs(&self) -> Vec<T> {
        self.gradient
            .iter()
            .zip(self.patch.delta_coeffs())
            .map(|(&g, &d)| g / d)
            .collect()
    }

    /// The normal-gradient expression has no dependence on the owner
    /// unknown: zero.
    pub fn gradient_internal_coeffs(&self) -> Vec<T> {
        vec![T::zero(); self.len()]
    }

    /// Explicit contribution to the normal-gradient expression: the
    /// gradient itself.
    pub fn gradient_boundary_coeffs(&self) -> Vec<T> {
        self.gradient.clone()
    }

    /// Remap per-face state onto a reorganized patch.
    ///
    /// See [`PatchField::auto_map`]. The inward-cell entries ride along
    /// with their faces but are not re-derived; call
    /// [`try_reconstruct`](Self::try_reconstruct) afterwards to refresh
    /// them from mesh data.
    pub fn auto_map(
        &mut self,
        mapper: &PatchMapper,
        patch: BoundaryPatch,
    ) -> Result<(), PatchFieldError> {
        if mapper.len() != patch.len() {
            return Err(PatchFieldError::MapperSizeMismatch {
                patch: patch.name().to_string(),
                mapper: mapper.len(),
                patch_faces: patch.len(),
            });
        }
        Self::check_coverage(&patch, std::iter::empty(), &self.snapshot)?;
        let n = mapper.len();
        let mut gradient = vec![T::zero(); n];
        let mut values = vec![T::zero(); n];
        let mut icells = vec![None; n];
        let mut unmapped = 0usize;
        for (dest, src) in mapper.iter().enumerate() {
            match src {
                Some(s) if s < self.gradient.len() => {
                    gradient[dest] = self.gradient[s];
                    values[dest] = self.values[s];
                    icells[dest] = self.icells[s];
                }
                _ => unmapped += 1,
            }
        }
        if unmapped > 0 {
            log::warn!(
                "patch `{}`: mapper leaves {unmapped} of {n} faces without a source; \
                 defaulting to zero",
                patch.name(),
            );
        }
        self.patch = patch;
        self.gradient = gradient;
        self.values = values;
        self.icells = icells;
        #[cfg(any(debug_assertions, feature = "check-invariants"))]
        self.validate_invariants();
        Ok(())
    }

    /// Merge another extrapolation field's state into addressed faces.
    ///
    /// Entry `i` of `addressing` receives source face `i`. The whole
    /// addressing is validated before any face is written, so a failed
    /// call leaves `self` untouched.
    ///
    /// # Errors
    /// Returns `Err(IncompatibleRmapSource)` if `source` is not an
    /// extrapolation field, `Err(RmapAddressingLengthMismatch)` if the
    /// addressing does not cover the source, and
    /// `Err(RmapAddressOutOfRange)` for addresses outside this patch.
    pub fn rmap(
        &mut self,
        source: &dyn PatchField<T>,
        addressing: &[usize],
    ) -> Result<(), PatchFieldError> {
        let Some(src) = source.as_any().downcast_ref::<Self>() else {
            return Err(PatchFieldError::IncompatibleRmapSource {
                expected: EXTRAPOLATION_TYPE_NAME,
                found: source.type_name(),
            });
        };
        if addressing.len() != src.len() {
            return Err(PatchFieldError::RmapAddressingLengthMismatch {
                expected: src.len(),
                found: addressing.len(),
            });
        }
        if let Some((entry, &address)) = addressing
            .iter()
            .enumerate()
            .find(|&(_, &a)| a >= self.len())
        {
            return Err(PatchFieldError::RmapAddressOutOfRange {
                entry,
                address,
                len: self.len(),
            });
        }
        for (entry, &address) in addressing.iter().enumerate() {
            self.gradient[address] = src.gradient[entry];
            self.values[address] = src.values[entry];
        }
        Ok(())
    }

    /// Write the configuration record this field reconstructs from.
    ///
    /// Only the type keyword is persisted; inward cells and gradient are
    /// derived state and are recomputed on reconstruction.
    pub fn write(&self, writer: &mut dyn io::Write) -> Result<(), PatchFieldError> {
        config::write_type_record(writer)
    }

    /// Re-check the structural invariants; panics on violation.
    pub fn validate_invariants(&self) {
        let n = self.patch.len();
        assert_eq!(self.icells.len(), n, "icells length mismatch");
        assert_eq!(self.gradient.len(), n, "gradient length mismatch");
        assert_eq!(self.values.len(), n, "values length mismatch");
        let cells = self.snapshot.num_cells();
        for ic in self.icells.iter().copied().flatten() {
            assert!(
                ic.index() < cells,
                "inward cell {ic} out of snapshot range {cells}"
            );
        }
    }
}

impl<T: FieldValue> PatchField<T> for ExtrapolationPatchField<T> {
    fn type_name(&self) -> &'static str {
        EXTRAPOLATION_TYPE_NAME
    }

    fn patch_name(&self) -> &str {
        self.patch.name()
    }

    fn len(&self) -> usize {
        self.len()
    }

    fn values(&self) -> &[T] {
        self.values()
    }

    fn evaluate(&mut self) {
        self.evaluate();
    }

    fn sn_grad(&self) -> &[T] {
        self.sn_grad()
    }

    fn value_internal_coeffs(&self) -> Vec<T> {
        self.value_internal_coeffs()
    }

    fn value_boundary_coeffs(&self) -> Vec<T> {
        self.value_boundary_coeffs()
    }

    fn gradient_internal_coeffs(&self) -> Vec<T> {
        self.gradient_internal_coeffs()
    }

    fn gradient_boundary_coeffs(&self) -> Vec<T> {
        self.gradient_boundary_coeffs()
    }

    fn auto_map(
        &mut self,
        mapper: &PatchMapper,
        patch: BoundaryPatch,
    ) -> Result<(), PatchFieldError> {
        self.auto_map(mapper, patch)
    }

    fn rmap(
        &mut self,
        source: &dyn PatchField<T>,
        addressing: &[usize],
    ) -> Result<(), PatchFieldError> {
        self.rmap(source, addressing)
    }

    fn write(&self, writer: &mut dyn io::Write) -> Result<(), PatchFieldError> {
        self.write(writer)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
