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

//! Triangulation of convex polygons.

use crate::{
    config::TriangulationMethod,
    error::Result,
    geometry::{
        point::Point,
        triangle::Triangle,
        vector::{Vector, VectorOps},
    },
    numeric::scalar::Scalar,
};

pub mod ear_clipping;
pub mod fan;

pub use ear_clipping::EarClipping;
pub use fan::Fan;

/// Splits a convex polygon into `n - 2` triangles that keep its winding.
pub trait TriangulateConvex<T: Scalar, const N: usize> {
    fn triangulate(points: &[Point<T, N>]) -> Result<Triangulation<T, N>>;
}

/// Point list plus index triples into it.
#[derive(Clone, Debug, PartialEq)]
pub struct Triangulation<T: Scalar, const N: usize> {
    pub points: Vec<Point<T, N>>,
    pub triangles: Vec<[usize; 3]>,
}

impl<T: Scalar, const N: usize> Triangulation<T, N> {
    pub fn len(&self) -> usize {
        self.triangles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    /// Resolved triangles, in emission order.
    pub fn triangles(&self) -> impl Iterator<Item = Triangle<T, N>> + '_ {
        self.triangles
            .iter()
            .map(|&[i, j, k]| Triangle::new(self.points[i], self.points[j], self.points[k]))
    }
}

/// Dispatches to the triangulator selected by `method`.
pub fn triangulate<T: Scalar, const N: usize>(
    method: TriangulationMethod,
    points: &[Point<T, N>],
) -> Result<Triangulation<T, N>>
where
    Vector<T, N>: VectorOps<T, N>,
{
    match method {
        TriangulationMethod::EarClipping => EarClipping::triangulate(points),
        TriangulationMethod::Fan => Fan::triangulate(points),
    }
}
