//! Textual configuration record for extrapolation patch fields.
//!
//! The record carries the declared patch field type and the single
//! recognized option, `gradient`: an optional seed for the per-face
//! gradient array. The derived inward cells and the recomputed gradient
//! are never persisted; writing a field emits only what reconstruction
//! needs, and reconstruction re-derives the rest from mesh data.

use std::io;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::patch_error::PatchFieldError;

/// Type keyword extrapolation patch fields answer to.
pub const EXTRAPOLATION_TYPE_NAME: &str = "extrapolation";

/// Configuration record for an extrapolation patch field.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(bound(deserialize = "T: serde::de::DeserializeOwned"))]
pub struct ExtrapolationConfig<T> {
    #[serde(rename = "type")]
    kind: String,
    /// Optional seed for the initial per-face gradient. Declared but not
    /// required; when absent the initial gradient is computed from the
    /// interior field.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gradient: Option<Vec<T>>,
}

impl<T> Default for ExtrapolationConfig<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> ExtrapolationConfig<T> {
    /// Record declaring the extrapolation type with no options.
    pub fn new() -> Self {
        Self {
            kind: EXTRAPOLATION_TYPE_NAME.to_string(),
            gradient: None,
        }
    }

    /// Record with a gradient seed.
    pub fn with_gradient(gradient: Vec<T>) -> Self {
        Self {
            kind: EXTRAPOLATION_TYPE_NAME.to_string(),
            gradient: Some(gradient),
        }
    }

    /// The declared type keyword.
    #[inline]
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// Check the record declares the extrapolation type.
    ///
    /// # Errors
    /// Returns `Err(UnknownPatchFieldType)` otherwise.
    pub fn validate_kind(&self) -> Result<(), PatchFieldError> {
        if self.kind == EXTRAPOLATION_TYPE_NAME {
            Ok(())
        } else {
            Err(PatchFieldError::UnknownPatchFieldType {
                expected: EXTRAPOLATION_TYPE_NAME,
                found: self.kind.clone(),
            })
        }
    }
}

impl<T: DeserializeOwned> ExtrapolationConfig<T> {
    /// Read and validate a record.
    ///
    /// # Errors
    /// Returns `Err(ConfigRead)` on malformed input and
    /// `Err(UnknownPatchFieldType)` if the record declares another type.
    pub fn try_read(reader: impl io::Read) -> Result<Self, PatchFieldError> {
        let config: Self = serde_json::from_reader(reader).map_err(PatchFieldError::ConfigRead)?;
        config.validate_kind()?;
        Ok(config)
    }
}

impl<T: Serialize> ExtrapolationConfig<T> {
    /// Write the record.
    ///
    /// # Errors
    /// Returns `Err(ConfigWrite)` if serialization or the underlying
    /// writer fails.
    pub fn write_to(&self, writer: impl io::Write) -> Result<(), PatchFieldError> {
        serde_json::to_writer(writer, self).map_err(PatchFieldError::ConfigWrite)
    }
}

/// Write the bare type record (`{"type": "extrapolation"}`).
///
/// This is all a patch field persists: the derived state is recomputed on
/// reconstruction, so the written form is independent of the value type.
pub fn write_type_record(writer: impl io::Write) -> Result<(), PatchFieldError> {
    #[derive(Serialize)]
    struct TypeRecord<'a> {
        #[serde(rename = "type")]
        kind: &'a str,
    }
    serde_json::to_writer(
        writer,
        &TypeRecord {
            kind: EXTRAPOLATION_TYPE_NAME,
        },
    )
    .map_err(PatchFieldError::ConfigWrite)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_record_roundtrip() {
        let mut buf = Vec::new();
        write_type_record(&mut buf).unwrap();
        assert_eq!(buf, br#"{"type":"extrapolation"}"#);
        let config = ExtrapolationConfig::<f64>::try_read(buf.as_slice()).unwrap();
        assert_eq!(config, ExtrapolationConfig::new());
        assert!(config.gradient.is_none());
    }

    #[test]
    fn gradient_seed_roundtrip() {
        let config = ExtrapolationConfig::with_gradient(vec![1.5, -2.0]);
        let mut buf = Vec::new();
        config.write_to(&mut buf).unwrap();
        let back = ExtrapolationConfig::<f64>::try_read(buf.as_slice()).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn foreign_type_is_rejected() {
        let raw = br#"{"type":"fixedValue"}"#;
        let err = ExtrapolationConfig::<f64>::try_read(raw.as_slice()).unwrap_err();
        assert!(matches!(
            err,
            PatchFieldError::UnknownPatchFieldType { found, .. } if found == "fixedValue"
        ));
    }

    #[test]
    fn malformed_record_is_a_read_error() {
        let raw = b"{not json";
        let err = ExtrapolationConfig::<f64>::try_read(raw.as_slice()).unwrap_err();
        assert!(matches!(err, PatchFieldError::ConfigRead(_)));
    }
}
