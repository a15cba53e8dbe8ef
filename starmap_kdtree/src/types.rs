// Copyright 2025 the Starmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Coordinate scalars and the point capability used by the tree.

use alloc::vec::Vec;
use core::cmp::Ordering;
use core::fmt::Debug;

/// Numeric scalar abstraction for point coordinates.
///
/// Distances are compared squared, in an associated widened accumulator type
/// (e.g., f32→f64, i64→i128), so no square roots are needed and integer
/// coordinates do not overflow for realistic inputs.
pub trait Scalar: Copy + PartialOrd + Debug {
    /// Widened accumulator type suitable for squared distances.
    type Acc: Copy
        + PartialOrd
        + core::ops::Add<Output = Self::Acc>
        + core::ops::Sub<Output = Self::Acc>
        + core::ops::Mul<Output = Self::Acc>
        + Debug;

    /// Convert a scalar to the accumulator type.
    fn widen(v: Self) -> Self::Acc;

    /// Zero value for the accumulator type.
    fn acc_zero() -> Self::Acc;
}

impl Scalar for f32 {
    type Acc = f64;

    #[inline]
    fn widen(v: Self) -> Self::Acc {
        v as f64
    }

    #[inline]
    fn acc_zero() -> Self::Acc {
        0.0
    }
}

impl Scalar for f64 {
    type Acc = Self;

    #[inline]
    fn widen(v: Self) -> Self::Acc {
        v
    }

    #[inline]
    fn acc_zero() -> Self::Acc {
        0.0
    }
}

impl Scalar for i32 {
    type Acc = i128;

    #[inline]
    fn widen(v: Self) -> Self::Acc {
        v as i128
    }

    #[inline]
    fn acc_zero() -> Self::Acc {
        0
    }
}

impl Scalar for i64 {
    type Acc = i128;

    #[inline]
    fn widen(v: Self) -> Self::Acc {
        v as i128
    }

    #[inline]
    fn acc_zero() -> Self::Acc {
        0
    }
}

/// Helper alias for the widened accumulator type associated with a scalar `T`.
pub type ScalarAcc<T> = <T as Scalar>::Acc;

/// A point with a fixed number of coordinates.
///
/// The tree only ever reads coordinates through this trait; any other data a
/// payload carries (a back-reference to a domain entity, a list position) is
/// opaque to it.
///
/// `coord` may panic for `axis >= dims()`; the tree never asks for such an axis.
pub trait Coords {
    /// Coordinate scalar.
    type Scalar: Scalar;

    /// Number of coordinates (the `k` in k-d tree).
    fn dims(&self) -> usize;

    /// Coordinate along `axis`.
    fn coord(&self, axis: usize) -> Self::Scalar;
}

impl<C: Coords + ?Sized> Coords for &C {
    type Scalar = C::Scalar;

    #[inline]
    fn dims(&self) -> usize {
        (**self).dims()
    }

    #[inline]
    fn coord(&self, axis: usize) -> Self::Scalar {
        (**self).coord(axis)
    }
}

impl<T: Scalar, const N: usize> Coords for [T; N] {
    type Scalar = T;

    #[inline]
    fn dims(&self) -> usize {
        N
    }

    #[inline]
    fn coord(&self, axis: usize) -> T {
        self[axis]
    }
}

impl<T: Scalar> Coords for [T] {
    type Scalar = T;

    #[inline]
    fn dims(&self) -> usize {
        self.len()
    }

    #[inline]
    fn coord(&self, axis: usize) -> T {
        self[axis]
    }
}

impl<T: Scalar> Coords for Vec<T> {
    type Scalar = T;

    #[inline]
    fn dims(&self) -> usize {
        self.len()
    }

    #[inline]
    fn coord(&self, axis: usize) -> T {
        self[axis]
    }
}

impl<T: Scalar> Coords for (T, T) {
    type Scalar = T;

    #[inline]
    fn dims(&self) -> usize {
        2
    }

    fn coord(&self, axis: usize) -> T {
        match axis {
            0 => self.0,
            1 => self.1,
            _ => panic!("axis {axis} out of range for a 2D point"),
        }
    }
}

impl<T: Scalar> Coords for (T, T, T) {
    type Scalar = T;

    #[inline]
    fn dims(&self) -> usize {
        3
    }

    fn coord(&self, axis: usize) -> T {
        match axis {
            0 => self.0,
            1 => self.1,
            2 => self.2,
            _ => panic!("axis {axis} out of range for a 3D point"),
        }
    }
}

/// Squared distance between `a` and `b` along a single axis.
#[inline]
pub fn axis_dist_sq<T: Scalar>(a: T, b: T) -> T::Acc {
    let d = T::widen(a) - T::widen(b);
    d * d
}

/// Squared Euclidean distance between two points over their first `dims` axes.
pub fn dist_sq<A, B>(a: &A, b: &B, dims: usize) -> ScalarAcc<A::Scalar>
where
    A: Coords + ?Sized,
    B: Coords<Scalar = A::Scalar> + ?Sized,
{
    let mut acc = <A::Scalar as Scalar>::acc_zero();
    for axis in 0..dims {
        acc = acc + axis_dist_sq(a.coord(axis), b.coord(axis));
    }
    acc
}

/// Total-ish order for sorting; incomparable values (NaN) compare equal.
pub(crate) fn cmp_t<T: PartialOrd>(a: T, b: T) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}

pub(crate) fn le<T: PartialOrd>(a: T, b: T) -> bool {
    a.partial_cmp(&b)
        .map(|o| o != Ordering::Greater)
        .unwrap_or(false)
}

pub(crate) fn lt<T: PartialOrd>(a: T, b: T) -> bool {
    a.partial_cmp(&b)
        .map(|o| o == Ordering::Less)
        .unwrap_or(false)
}
