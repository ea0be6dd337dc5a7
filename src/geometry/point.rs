// SPDX-License-Identifier: MIT
//
// Copyright (c) 2025 Alexandre Severino
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.

use std::{array::from_fn, ops::Index};

use crate::{geometry::vector::Vector, numeric::scalar::Scalar};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point<T: Scalar, const N: usize> {
    pub coords: [T; N],
}

pub trait PointOps<T: Scalar, const N: usize>: Sized {
    fn vector_to(&self, other: &Self) -> Vector<T, N>;
    fn add_vector(&self, v: &Vector<T, N>) -> Self;
    fn lerp(&self, other: &Self, t: T) -> Self;
    fn midpoint(&self, other: &Self) -> Self;
    fn approx_eq(&self, other: &Self) -> bool;
}

impl<T: Scalar, const N: usize> Point<T, N> {
    pub fn as_vector(&self) -> Vector<T, N> {
        Vector {
            coords: self.coords,
        }
    }
}

impl<T: Scalar> Point<T, 2> {
    pub fn new(x: T, y: T) -> Self {
        Point { coords: [x, y] }
    }

    pub fn x(&self) -> T {
        self.coords[0]
    }

    pub fn y(&self) -> T {
        self.coords[1]
    }

    /// Lifts the point into 3D at height `z`.
    pub fn with_z(&self, z: T) -> Point<T, 3> {
        Point::<T, 3>::new(self.coords[0], self.coords[1], z)
    }
}

impl<T: Scalar> Point<T, 3> {
    pub fn new(x: T, y: T, z: T) -> Self {
        Point { coords: [x, y, z] }
    }

    pub fn x(&self) -> T {
        self.coords[0]
    }

    pub fn y(&self) -> T {
        self.coords[1]
    }

    pub fn z(&self) -> T {
        self.coords[2]
    }

    /// Projection along the Z axis.
    pub fn xy(&self) -> Point<T, 2> {
        Point::<T, 2>::new(self.coords[0], self.coords[1])
    }
}

impl<T: Scalar, const N: usize> Default for Point<T, N> {
    fn default() -> Point<T, N> {
        Point {
            coords: [T::zero(); N],
        }
    }
}

impl<T: Scalar, const N: usize> Index<usize> for Point<T, N> {
    type Output = T;
    fn index(&self, i: usize) -> &Self::Output {
        &self.coords[i]
    }
}

impl<T: Scalar, const N: usize> PointOps<T, N> for Point<T, N> {
    fn vector_to(&self, other: &Self) -> Vector<T, N> {
        Vector {
            coords: from_fn(|i| other.coords[i] - self.coords[i]),
        }
    }

    fn add_vector(&self, v: &Vector<T, N>) -> Self {
        Point {
            coords: from_fn(|i| self.coords[i] + v.coords[i]),
        }
    }

    fn lerp(&self, other: &Self, t: T) -> Self {
        Point {
            coords: from_fn(|i| self.coords[i] + t * (other.coords[i] - self.coords[i])),
        }
    }

    fn midpoint(&self, other: &Self) -> Self {
        let two = T::from_num_den(2, 1);
        Point {
            coords: from_fn(|i| (self.coords[i] + other.coords[i]) / two),
        }
    }

    fn approx_eq(&self, other: &Self) -> bool {
        self.coords
            .iter()
            .zip(other.coords.iter())
            .all(|(a, b)| a.approx_eq(*b))
    }
}

impl<T: Scalar, const N: usize> From<[T; N]> for Point<T, N> {
    fn from(coords: [T; N]) -> Self {
        Point { coords }
    }
}

pub type Point2<T> = Point<T, 2>;
pub type Point3<T> = Point<T, 3>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::vector::VectorOps;

    #[test]
    fn vector_to_and_back() {
        let a = Point2::new(1.0, 2.0);
        let b = Point2::new(4.0, -2.0);
        let v = a.vector_to(&b);
        assert_eq!(v.coords, [3.0, -4.0]);
        assert_eq!(v.norm(), 5.0);
        assert_eq!(a.add_vector(&v), b);
    }

    #[test]
    fn lerp_endpoints_and_middle() {
        let a = Point3::new(0.0, 0.0, 0.0);
        let b = Point3::new(2.0, 4.0, -6.0);
        assert_eq!(a.lerp(&b, 0.0), a);
        assert_eq!(a.lerp(&b, 1.0), b);
        assert_eq!(a.lerp(&b, 0.5), a.midpoint(&b));
    }

    #[test]
    fn approx_eq_tolerates_rounding() {
        let a = Point2::new(0.1 + 0.2, 1.0);
        let b = Point2::new(0.3, 1.0);
        assert_ne!(a, b);
        assert!(a.approx_eq(&b));
        assert!(!a.approx_eq(&Point2::new(0.31, 1.0)));
    }

    #[test]
    fn drop_and_lift_z() {
        let p = Point3::new(1.0_f32, 2.0, 3.0);
        assert_eq!(p.xy(), Point2::new(1.0, 2.0));
        assert_eq!(p.xy().with_z(7.0), Point3::new(1.0, 2.0, 7.0));
    }
}
