mod util;

use fv_extrap::prelude::*;
use proptest::prelude::*;
use util::{column_bcells, independent_columns};

/// Per-face inputs: boundary value, inward value, layer spacing, delta
/// coefficient.
fn face_inputs() -> impl Strategy<Value = (f64, f64, f64, f64)> {
    (
        -100.0f64..100.0,
        -100.0f64..100.0,
        0.1f64..5.0,
        0.1f64..10.0,
    )
}

fn build_field(faces: &[(f64, f64, f64, f64)]) -> ExtrapolationPatchField<f64> {
    let spacing: Vec<f64> = faces.iter().map(|f| f.2).collect();
    let deltas: Vec<f64> = faces.iter().map(|f| f.3).collect();
    let (incidence, centers) = independent_columns(&spacing);
    let values: Vec<f64> = faces.iter().flat_map(|&(vb, vi, _, _)| [vb, vi]).collect();
    let snapshot = InteriorSnapshot::try_new(values, centers).unwrap();
    let patch = BoundaryPatch::try_new("wall", column_bcells(faces.len()), deltas).unwrap();
    ExtrapolationPatchField::try_new(patch, &incidence, snapshot).unwrap()
}

proptest! {
    #[test]
    fn coefficients_stay_mutually_consistent(
        faces in prop::collection::vec(face_inputs(), 1..16)
    ) {
        let field = build_field(&faces);
        let vic = field.value_internal_coeffs();
        let vbc = field.value_boundary_coeffs();
        let gic = field.gradient_internal_coeffs();
        let gbc = field.gradient_boundary_coeffs();

        for (i, &(vb, vi, spacing, delta)) in faces.iter().enumerate() {
            // Internal coefficients are exactly identity and zero.
            prop_assert_eq!(vic[i], 1.0);
            prop_assert_eq!(gic[i], 0.0);

            // The gradient matches the one-sided difference.
            let expected_gradient = (vb - vi) / spacing;
            prop_assert!((gbc[i] - expected_gradient).abs() <= 1e-9 * expected_gradient.abs().max(1.0));

            // valueBoundaryCoeffs * delta == gradientBoundaryCoeffs.
            prop_assert!((vbc[i] * delta - gbc[i]).abs() <= 1e-9 * gbc[i].abs().max(1.0));

            // The exported coefficients reproduce evaluate()'s formula.
            let reconstructed = vic[i] * vb + vbc[i];
            prop_assert!((reconstructed - field.values()[i]).abs() <= 1e-9 * field.values()[i].abs().max(1.0));
            let sn = gic[i] * vb + gbc[i];
            prop_assert!((sn - field.sn_grad()[i]).abs() <= 1e-9 * sn.abs().max(1.0));
        }
    }

    #[test]
    fn evaluation_is_idempotent(
        faces in prop::collection::vec(face_inputs(), 1..16)
    ) {
        let mut field = build_field(&faces);
        let values = field.values().to_vec();
        let gradient = field.sn_grad().to_vec();
        field.evaluate();
        prop_assert_eq!(field.values(), values.as_slice());
        prop_assert_eq!(field.sn_grad(), gradient.as_slice());
    }
}
