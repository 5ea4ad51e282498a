#![allow(dead_code)]
use fv_extrap::geometry::algebra::Vector;
use fv_extrap::geometry::centers::CellCenters;
use fv_extrap::topology::cell::CellId;
use fv_extrap::topology::incidence::FaceIncidence;

pub fn cells(raw: &[usize]) -> Vec<CellId> {
    raw.iter().copied().map(CellId::new).collect()
}

/// Single column of `n` cells along +x with unit spacing: cell `k` at
/// (k, 0, 0). Each internal face is owned by the deeper cell with the
/// shallower one as neighbour, so the inward scan walks up the column.
pub fn single_column(n: usize) -> (FaceIncidence, CellCenters) {
    let owner = cells(&(1..n).collect::<Vec<_>>());
    let neighbour = cells(&(0..n - 1).collect::<Vec<_>>());
    let centers = (0..n).map(|k| Vector::new(k as f64, 0.0, 0.0)).collect();
    (
        FaceIncidence::try_new(owner, neighbour).unwrap(),
        CellCenters::new(centers),
    )
}

/// Independent 2-cell columns, one per face: cell `2i` is the boundary
/// cell of column `i` at (i, 0, 0) and cell `2i+1` its inward neighbour at
/// (i, spacing[i], 0).
pub fn independent_columns(spacing: &[f64]) -> (FaceIncidence, CellCenters) {
    let n = spacing.len();
    let owner = cells(&(0..n).map(|i| 2 * i + 1).collect::<Vec<_>>());
    let neighbour = cells(&(0..n).map(|i| 2 * i).collect::<Vec<_>>());
    let mut centers = Vec::with_capacity(2 * n);
    for (i, &s) in spacing.iter().enumerate() {
        centers.push(Vector::new(i as f64, 0.0, 0.0));
        centers.push(Vector::new(i as f64, s, 0.0));
    }
    (
        FaceIncidence::try_new(owner, neighbour).unwrap(),
        CellCenters::new(centers),
    )
}

/// Boundary cells of the columns built by [`independent_columns`].
pub fn column_bcells(n: usize) -> Vec<CellId> {
    cells(&(0..n).map(|i| 2 * i).collect::<Vec<_>>())
}
