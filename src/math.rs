//! Shared numerical primitives anchored on `nalgebra`.

use nalgebra::{DVector, Vector2};

/// Primary scalar type used across the crate.
pub type Scalar = f64;
/// Convenient alias for two-dimensional real vectors (x, y in meters).
pub type R2 = Vector2<Scalar>;
/// Dense real vector, used for per-node quantities.
pub type DenseVector = DVector<Scalar>;

/// Euclidean distance from `origin` to each of `points`, in order.
#[must_use]
pub fn distances_from<'a, I>(origin: R2, points: I) -> DenseVector
where
    I: IntoIterator<Item = &'a R2>,
    I::IntoIter: ExactSizeIterator,
{
    let iter = points.into_iter();
    DenseVector::from_iterator(iter.len(), iter.map(|p| (p - origin).norm()))
}

/// Generates `n` linearly spaced samples in [start, stop].
#[must_use]
pub fn linspace(start: Scalar, stop: Scalar, n: usize) -> Vec<Scalar> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (n as Scalar - 1.0);
            (0..n).map(|i| start + step * i as Scalar).collect()
        }
    }
}
