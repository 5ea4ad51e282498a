//! Inward-cell derivation for boundary patches.
//!
//! Given the internal-face incidence and a patch's boundary cells in
//! patch-face order, derive for each boundary cell the interior cell one
//! layer further from the wall. The boundary cells are assumed to trace one
//! or more geometric chains inward: consecutive entries correspond to
//! consecutive mesh layers, as in a structured-like extrusion embedded in
//! an unstructured mesh. The scan relies on that ordering and does not
//! generalize to arbitrary boundary-cell enumerations; use
//! [`chain_monotonicity_breaks`] to check the assumption on a given patch.
//!
//! # Complexity
//! **O(n_bfaces × n_internal_faces)** per derivation. Patches are small
//! relative to the mesh and the scan runs once per patch construction, not
//! per solver iteration.

use itertools::Itertools;

use crate::geometry::algebra::distance;
use crate::geometry::centers::CellCenters;
use crate::topology::cell::CellId;
use crate::topology::incidence::FaceIncidence;

/// Derive the inward cell for every boundary cell of a patch.
///
/// For boundary face `i`, candidate interior cells are the owners of
/// internal faces whose neighbour is `bcells[i]`; for `i > 0` the owner
/// equal to `bcells[i-1]` is excluded, which is what steps the chain one
/// layer further inward instead of staying adjacent to the boundary layer.
/// When several candidates remain, the one whose centre lies closest to
/// `bcells[i]`'s centre wins; ties keep the earliest face in scan order.
///
/// A boundary cell with no qualifying candidate yields `None`. Candidates
/// without a centre in the snapshot, or at zero/non-finite distance, are
/// skipped, so every returned id is a valid index into `centers`. Never
/// panics.
pub fn derive_inward_cells(
    incidence: &FaceIncidence,
    bcells: &[CellId],
    centers: &CellCenters,
) -> Vec<Option<CellId>> {
    let mut icells = Vec::with_capacity(bcells.len());
    for (i, &bcell) in bcells.iter().enumerate() {
        let exclude = if i > 0 { Some(bcells[i - 1]) } else { None };
        icells.push(find_inward_cell(incidence, bcell, exclude, centers));
    }
    icells
}

fn find_inward_cell(
    incidence: &FaceIncidence,
    bcell: CellId,
    exclude: Option<CellId>,
    centers: &CellCenters,
) -> Option<CellId> {
    let anchor = centers.try_center(bcell).ok()?;
    let mut best: Option<(f64, CellId)> = None;
    for (owner, neighbour) in incidence.iter() {
        if neighbour != bcell || exclude == Some(owner) {
            continue;
        }
        let Ok(center) = centers.try_center(owner) else {
            continue;
        };
        let d = distance(anchor, center);
        if !d.is_finite() || d <= 0.0 {
            continue;
        }
        if best.is_none_or(|(best_d, _)| d < best_d) {
            best = Some((d, owner));
        }
    }
    best.map(|(_, c)| c)
}

/// Indices at which the derived chain fails to step monotonically inward.
///
/// The chain-ordering assumption says each inward cell lies one layer
/// further from the chain origin (the first boundary cell) than its
/// predecessor. This reports every index `i >= 1` where both `icells[i-1]`
/// and `icells[i]` resolved but the distance from the origin did not
/// increase. A break is not necessarily an error: a patch composed of
/// several independent chains breaks exactly where the next chain starts.
/// Callers that expect a single chain can treat a non-empty result as a
/// violated assumption.
pub fn chain_monotonicity_breaks(
    bcells: &[CellId],
    icells: &[Option<CellId>],
    centers: &CellCenters,
) -> Vec<usize> {
    let Some(&first) = bcells.first() else {
        return Vec::new();
    };
    let Ok(origin) = centers.try_center(first) else {
        return Vec::new();
    };
    let reach = |ic: Option<CellId>| -> Option<f64> {
        let c = centers.try_center(ic?).ok()?;
        Some(distance(origin, c))
    };
    icells
        .iter()
        .enumerate()
        .tuple_windows()
        .filter_map(|((_, &prev), (i, &cur))| {
            let (prev_d, cur_d) = (reach(prev)?, reach(cur)?);
            (cur_d <= prev_d).then_some(i)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::algebra::Vector;
    use crate::patch_error::PatchFieldError;

    fn cells(raw: &[usize]) -> Vec<CellId> {
        raw.iter().copied().map(CellId::new).collect()
    }

    /// Single column of `n` cells along +y: cell `k` at (0, k, 0), each
    /// internal face owned by the deeper cell with the shallower one as
    /// neighbour.
    fn column(n: usize) -> (FaceIncidence, CellCenters) {
        let owner = cells(&(1..n).collect::<Vec<_>>());
        let neighbour = cells(&(0..n - 1).collect::<Vec<_>>());
        let centers = (0..n).map(|k| Vector::new(0.0, k as f64, 0.0)).collect();
        (
            FaceIncidence::try_new(owner, neighbour).unwrap(),
            CellCenters::new(centers),
        )
    }

    #[test]
    fn single_column_chain() {
        let (inc, centers) = column(4);
        let icells = derive_inward_cells(&inc, &cells(&[0, 1, 2]), &centers);
        assert_eq!(
            icells,
            vec![
                Some(CellId::new(1)),
                Some(CellId::new(2)),
                Some(CellId::new(3))
            ]
        );
        assert!(chain_monotonicity_breaks(&cells(&[0, 1, 2]), &icells, &centers).is_empty());
    }

    #[test]
    fn isolated_cell_resolves_to_none() {
        let (inc, _) = column(3);
        // Cell 5 exists in the centre snapshot but no internal face has it
        // as neighbour.
        let centers = CellCenters::new(
            (0..6).map(|k| Vector::new(0.0, k as f64, 0.0)).collect(),
        );
        let icells = derive_inward_cells(&inc, &cells(&[5]), &centers);
        assert_eq!(icells, vec![None]);
    }

    #[test]
    fn nearest_candidate_wins() {
        // Two faces list cell 0 as neighbour; owner 2 sits closer.
        let inc = FaceIncidence::try_new(cells(&[1, 2]), cells(&[0, 0])).unwrap();
        let centers = CellCenters::new(vec![
            Vector::new(0.0, 0.0, 0.0),
            Vector::new(0.0, 3.0, 0.0),
            Vector::new(0.0, 1.0, 0.0),
        ]);
        let icells = derive_inward_cells(&inc, &cells(&[0]), &centers);
        assert_eq!(icells, vec![Some(CellId::new(2))]);
    }

    #[test]
    fn coincident_candidate_is_skipped() {
        // Owner 1 sits exactly on top of the boundary cell; owner 2 is the
        // only usable candidate.
        let inc = FaceIncidence::try_new(cells(&[1, 2]), cells(&[0, 0])).unwrap();
        let centers = CellCenters::new(vec![
            Vector::new(0.0, 0.0, 0.0),
            Vector::new(0.0, 0.0, 0.0),
            Vector::new(0.0, 2.0, 0.0),
        ]);
        let icells = derive_inward_cells(&inc, &cells(&[0]), &centers);
        assert_eq!(icells, vec![Some(CellId::new(2))]);
    }

    #[test]
    fn candidate_without_center_is_skipped() {
        let inc = FaceIncidence::try_new(cells(&[7]), cells(&[0])).unwrap();
        let centers = CellCenters::new(vec![Vector::new(0.0, 0.0, 0.0)]);
        // Owner 7 has no centre in the snapshot: no valid candidate, and in
        // particular no out-of-range id leaks out.
        let icells = derive_inward_cells(&inc, &cells(&[0]), &centers);
        assert_eq!(icells, vec![None]);
        assert!(centers.try_center(CellId::new(7)).is_err());
        assert!(matches!(
            centers.try_center(CellId::new(7)),
            Err(PatchFieldError::CellOutOfRange { .. })
        ));
    }

    #[test]
    fn monotonicity_break_marks_second_chain() {
        // Two independent 2-cell columns: chain restarts at index 1.
        let inc = FaceIncidence::try_new(cells(&[1, 3]), cells(&[0, 2])).unwrap();
        let centers = CellCenters::new(vec![
            Vector::new(0.0, 0.0, 0.0),
            Vector::new(0.0, 1.0, 0.0),
            Vector::new(5.0, 0.0, 0.0),
            Vector::new(5.0, 1.0, 0.0),
        ]);
        let bcells = cells(&[0, 2]);
        let icells = derive_inward_cells(&inc, &bcells, &centers);
        assert_eq!(icells, vec![Some(CellId::new(1)), Some(CellId::new(3))]);
        // Distance from the origin (cell 0) to cell 3 exceeds that to cell
        // 1, so this particular layout happens to stay monotone.
        assert!(chain_monotonicity_breaks(&bcells, &icells, &centers).is_empty());

        // Pull the second column close to the origin and the restart shows.
        let centers = CellCenters::new(vec![
            Vector::new(0.0, 0.0, 0.0),
            Vector::new(0.0, 1.0, 0.0),
            Vector::new(0.5, 0.0, 0.0),
            Vector::new(0.5, 0.5, 0.0),
        ]);
        let icells = derive_inward_cells(&inc, &bcells, &centers);
        assert_eq!(
            chain_monotonicity_breaks(&bcells, &icells, &centers),
            vec![1]
        );
    }
}
