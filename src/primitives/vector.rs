//! Fixed-size 3-vector.
//!
//! ## Purpose
//!
//! `Vector3` is the immutable value type used for eigenvectors and for the
//! direction samples consumed by `VectorAnalysis`.
//!
//! ## Invariants
//!
//! * Components are never mutated after construction.

// External dependencies
use num_traits::Float;

/// A 3-vector with components `(x, y, z)`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector3<T> {
    x: T,
    y: T,
    z: T,
}

impl<T: Float> Vector3<T> {
    /// Create a vector from its three components.
    #[inline]
    pub fn new(x: T, y: T, z: T) -> Self {
        Self { x, y, z }
    }

    /// X component.
    #[inline]
    pub fn x(&self) -> T {
        self.x
    }

    /// Y component.
    #[inline]
    pub fn y(&self) -> T {
        self.y
    }

    /// Z component.
    #[inline]
    pub fn z(&self) -> T {
        self.z
    }

    /// Components as an array `[x, y, z]`.
    #[inline]
    pub fn to_array(&self) -> [T; 3] {
        [self.x, self.y, self.z]
    }

    /// Dot product `self · other`.
    #[inline]
    pub fn dot(&self, other: &Self) -> T {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Euclidean length.
    #[inline]
    pub fn norm(&self) -> T {
        self.dot(self).sqrt()
    }

    /// Outer product `v · vᵗ` of the vector with itself, as rows.
    ///
    /// ```text
    /// [[xx, xy, xz],
    ///  [yx, yy, yz],
    ///  [zx, zy, zz]]
    /// ```
    pub fn outer(&self) -> [[T; 3]; 3] {
        let v = self.to_array();
        let mut rows = [[T::zero(); 3]; 3];
        for (row, &a) in rows.iter_mut().zip(v.iter()) {
            for (cell, &b) in row.iter_mut().zip(v.iter()) {
                *cell = a * b;
            }
        }
        rows
    }

    /// Whether all three components are finite.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

impl<T: Float> From<[T; 3]> for Vector3<T> {
    fn from(v: [T; 3]) -> Self {
        Self::new(v[0], v[1], v[2])
    }
}

impl<T: Float> From<Vector3<T>> for [T; 3] {
    fn from(v: Vector3<T>) -> Self {
        v.to_array()
    }
}
