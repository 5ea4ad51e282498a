//! Data module: patch geometry, field values, and the extrapolation engine
#![warn(missing_docs)]

pub mod config;
pub mod extrapolation;
pub mod mapper;
pub mod patch;
pub mod patch_field;
pub mod snapshot;
pub mod value;

pub use config::ExtrapolationConfig;
pub use extrapolation::ExtrapolationPatchField;
pub use mapper::PatchMapper;
pub use patch::BoundaryPatch;
pub use patch_field::PatchField;
pub use snapshot::InteriorSnapshot;
pub use value::FieldValue;
