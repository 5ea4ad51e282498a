//! Mapping abstraction for topology changes.
//!
//! When a mesh refines or patches are reorganized, the framework hands the
//! patch field a correspondence from old face positions to new ones. The
//! mapper is direct-addressed: for each destination face it names the
//! source face its data comes from, or `None` for a face with no source
//! (a freshly created face). Applying an incomplete mapper is non-fatal;
//! the field defaults those faces and logs a diagnostic.

/// Direct-addressing map from old patch faces to new ones.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PatchMapper {
    sources: Vec<Option<usize>>,
}

impl PatchMapper {
    /// Build a mapper from per-destination source indices.
    pub fn new(sources: Vec<Option<usize>>) -> Self {
        Self { sources }
    }

    /// Identity mapper over `n` faces.
    pub fn identity(n: usize) -> Self {
        Self {
            sources: (0..n).map(Some).collect(),
        }
    }

    /// Destination face count.
    #[inline]
    pub fn len(&self) -> usize {
        self.sources.len()
    }

    /// Whether the mapper covers no faces.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    /// Source face for destination face `i`, if any.
    #[inline]
    pub fn source_of(&self, i: usize) -> Option<usize> {
        self.sources.get(i).copied().flatten()
    }

    /// True if some destination face has no source.
    pub fn has_unmapped(&self) -> bool {
        self.sources.iter().any(Option::is_none)
    }

    /// Iterate over source indices in destination-face order.
    pub fn iter(&self) -> impl Iterator<Item = Option<usize>> + '_ {
        self.sources.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_maps_every_face() {
        let m = PatchMapper::identity(3);
        assert_eq!(m.len(), 3);
        assert!(!m.has_unmapped());
        assert_eq!(m.source_of(2), Some(2));
        assert_eq!(m.source_of(3), None);
    }

    #[test]
    fn unmapped_faces_are_reported() {
        let m = PatchMapper::new(vec![Some(1), None, Some(0)]);
        assert!(m.has_unmapped());
        assert_eq!(m.iter().collect::<Vec<_>>(), vec![Some(1), None, Some(0)]);
    }
}
