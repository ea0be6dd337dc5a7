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

use crate::{
    geometry::{
        point::{Point, Point2, Point3, PointOps},
        vector::{Vector3, VectorOps},
    },
    numeric::scalar::Scalar,
};

/// Ordered, implicitly closed sequence of points. The last point connects back
/// to the first; no closing duplicate is stored.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Polygon<T: Scalar, const N: usize> {
    pub points: Vec<Point<T, N>>,
}

impl<T: Scalar, const N: usize> Polygon<T, N> {
    pub fn new(points: Vec<Point<T, N>>) -> Self {
        Polygon { points }
    }

    pub fn empty() -> Self {
        Polygon { points: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &[Point<T, N>] {
        &self.points
    }

    /// True if both polygons visit the same points in the same cyclic order,
    /// regardless of the starting vertex.
    pub fn same_cycle(&self, other: &Self) -> bool {
        let n = self.len();
        if n != other.len() {
            return false;
        }
        if n == 0 {
            return true;
        }
        (0..n).any(|shift| {
            (0..n).all(|i| self.points[(i + shift) % n].approx_eq(&other.points[i]))
        })
    }
}

impl<T: Scalar> Polygon<T, 2> {
    /// Shoelace formula; positive for counter-clockwise winding.
    pub fn signed_area(&self) -> T {
        let n = self.len();
        let doubled = (0..n).fold(T::zero(), |acc, i| {
            let p: &Point2<T> = &self.points[i];
            let q = &self.points[(i + 1) % n];
            acc + p.x() * q.y() - q.x() * p.y()
        });
        doubled / T::from_num_den(2, 1)
    }

    pub fn area(&self) -> T {
        self.signed_area().abs()
    }
}

impl<T: Scalar> Polygon<T, 3> {
    /// Area of a planar polygon via Newell's normal.
    pub fn area(&self) -> T {
        let n = self.len();
        let normal = (0..n).fold(Vector3::<T>::zero(), |acc, i| {
            let p: &Point3<T> = &self.points[i];
            let q = &self.points[(i + 1) % n];
            let c = p.as_vector().cross(&q.as_vector());
            Vector3::new(
                acc.coords[0] + c.coords[0],
                acc.coords[1] + c.coords[1],
                acc.coords[2] + c.coords[2],
            )
        });
        normal.norm() / T::from_num_den(2, 1)
    }
}

pub type Polygon2<T> = Polygon<T, 2>;
pub type Polygon3<T> = Polygon<T, 3>;
