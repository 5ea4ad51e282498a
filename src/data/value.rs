//! Field-value capability trait.
//!
//! The extrapolation engine is generic over the value carried per face:
//! scalar, vector, or tensor. `FieldValue` is the narrow interface that
//! genericity needs: component-wise zero/one and the arithmetic the
//! one-sided finite difference uses. Each value type implements it once;
//! all extrapolation and coefficient code is shared.

use std::fmt::Debug;
use std::ops::{Add, Div, Mul, Sub};

use num_traits::{One, Zero};

use crate::geometry::algebra::{Tensor, Vector};

/// A value type a boundary patch field can carry.
///
/// `Zero` supplies the additive identity (the safe gradient fallback);
/// [`one`](Self::one) is the component-wise multiplicative identity used by
/// the value-internal coefficient export.
pub trait FieldValue:
    Copy
    + Debug
    + PartialEq
    + Zero
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<f64, Output = Self>
    + Div<f64, Output = Self>
    + Send
    + Sync
    + 'static
{
    /// Component-wise multiplicative identity.
    fn one() -> Self;
}

impl FieldValue for f64 {
    #[inline]
    fn one() -> Self {
        One::one()
    }
}

impl FieldValue for Vector {
    #[inline]
    fn one() -> Self {
        Vector::uniform(1.0)
    }
}

impl FieldValue for Tensor {
    #[inline]
    fn one() -> Self {
        Tensor::uniform(1.0)
    }
}
