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
    error::{GeometryError, Result},
    geometry::point::Point,
    numeric::scalar::Scalar,
    operations::triangulation::{TriangulateConvex, Triangulation},
};

/// Fan around the first vertex: `(v0, v[i - 1], v[i])`.
pub struct Fan;

impl<T: Scalar, const N: usize> TriangulateConvex<T, N> for Fan {
    fn triangulate(points: &[Point<T, N>]) -> Result<Triangulation<T, N>> {
        let n = points.len();
        if n < 3 {
            return Err(GeometryError::TooFewVertices(n));
        }
        Ok(Triangulation {
            points: points.to_vec(),
            triangles: (2..n).map(|i| [0, i - 1, i]).collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::point::Point3;

    #[test]
    fn hexagon() {
        let hexagon: Vec<Point3<f64>> = (0..6)
            .map(|i| {
                let a = i as f64 * std::f64::consts::FRAC_PI_3;
                Point3::new(a.cos(), a.sin(), 1.0)
            })
            .collect();
        let t = Fan::triangulate(&hexagon).unwrap();
        assert_eq!(t.triangles, vec![[0, 1, 2], [0, 2, 3], [0, 3, 4], [0, 4, 5]]);
        assert!(t.triangles().all(|tri| tri.normal().coords[2] > 0.0));
    }

    #[test]
    fn empty_input() {
        let err = Fan::triangulate(&Vec::<Point3<f32>>::new()).unwrap_err();
        assert_eq!(err, GeometryError::TooFewVertices(0));
    }
}
