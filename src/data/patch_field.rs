//! Framework-facing interface of a boundary patch field.
//!
//! The external field/matrix framework drives patch fields through this
//! narrow trait: evaluation, the four linearization coefficient exports,
//! topology-change mapping, and textual serialization. The coefficient
//! contract is: for each face,
//!
//! ```text
//! value          = value_internal_coeffs * cell_value + value_boundary_coeffs
//! normal_gradient = gradient_internal_coeffs * cell_value + gradient_boundary_coeffs
//! ```
//!
//! so the assembler can embed the condition implicitly. Implementations
//! must keep all four exports consistent with `evaluate`.

use std::any::Any;
use std::fmt::Debug;
use std::io;

use crate::data::mapper::PatchMapper;
use crate::data::patch::BoundaryPatch;
use crate::data::value::FieldValue;
use crate::patch_error::PatchFieldError;

/// A boundary patch field over value type `T`, as consumed by the external
/// assembler.
pub trait PatchField<T: FieldValue>: Debug {
    /// The type keyword this field answers to in configuration records.
    fn type_name(&self) -> &'static str;

    /// Name of the underlying boundary patch.
    fn patch_name(&self) -> &str;

    /// Number of faces on the patch.
    fn len(&self) -> usize;

    /// Whether the patch has no faces.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Current per-face boundary values.
    fn values(&self) -> &[T];

    /// Recompute the boundary values from current state.
    ///
    /// Safe to call repeatedly; with unchanged inputs the result is
    /// identical.
    fn evaluate(&mut self);

    /// Surface-normal gradient per face.
    fn sn_grad(&self) -> &[T];

    /// Weight of the owner cell's unknown in the value expression.
    fn value_internal_coeffs(&self) -> Vec<T>;

    /// Explicit (non-matrix) contribution to the value expression.
    fn value_boundary_coeffs(&self) -> Vec<T>;

    /// Weight of the owner cell's unknown in the normal-gradient expression.
    fn gradient_internal_coeffs(&self) -> Vec<T>;

    /// Explicit contribution to the normal-gradient expression.
    fn gradient_boundary_coeffs(&self) -> Vec<T>;

    /// Remap per-face state onto a reorganized patch.
    ///
    /// `patch` is the patch as reorganized by the framework; `mapper` names,
    /// for each new face, the old face its data comes from. Faces without a
    /// source default to zero with a non-fatal diagnostic.
    fn auto_map(
        &mut self,
        mapper: &PatchMapper,
        patch: BoundaryPatch,
    ) -> Result<(), PatchFieldError>;

    /// Merge another field's per-face state into addressed faces of this one.
    ///
    /// Entry `i` of `addressing` receives source face `i`. The source must
    /// be of the same patch field kind; anything else is a typed failure,
    /// checked before any state is touched.
    fn rmap(
        &mut self,
        source: &dyn PatchField<T>,
        addressing: &[usize],
    ) -> Result<(), PatchFieldError>;

    /// Write the textual configuration record this field reconstructs from.
    fn write(&self, writer: &mut dyn io::Write) -> Result<(), PatchFieldError>;

    /// Capability hook for same-kind checks (see [`rmap`](Self::rmap)).
    fn as_any(&self) -> &dyn Any;
}
