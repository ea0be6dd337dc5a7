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
    geometry::{
        point::Point,
        util::{barycentric_coords, is_strictly_inside_barycentric},
        vector::{Vector, VectorOps},
    },
    numeric::scalar::Scalar,
    operations::triangulation::{TriangulateConvex, Triangulation},
};

/// Ear clipping with a moving cursor.
///
/// The triple starting at the cursor is an ear when no other remaining vertex
/// lies strictly inside it. An ear is emitted and its middle vertex removed;
/// otherwise the cursor advances. The last three vertices form the final
/// triangle. For convex input the first candidate is always an ear, which
/// gives a fan around the first vertex.
pub struct EarClipping;

fn is_ear<T: Scalar, const N: usize>(
    points: &[Point<T, N>],
    remaining: &[usize],
    [i0, i1, i2]: [usize; 3],
) -> bool
where
    Vector<T, N>: VectorOps<T, N>,
{
    let (a, b, c) = (&points[i0], &points[i1], &points[i2]);
    remaining
        .iter()
        .filter(|&&r| r != i0 && r != i1 && r != i2)
        .all(|&r| match barycentric_coords(a, b, c, &points[r]) {
            Some((u, v)) => !is_strictly_inside_barycentric(u, v),
            // collinear candidate, nothing can be inside it
            None => true,
        })
}

impl<T: Scalar, const N: usize> TriangulateConvex<T, N> for EarClipping
where
    Vector<T, N>: VectorOps<T, N>,
{
    fn triangulate(points: &[Point<T, N>]) -> Result<Triangulation<T, N>> {
        let n = points.len();
        if n < 3 {
            return Err(GeometryError::TooFewVertices(n));
        }

        let mut remaining: Vec<usize> = (0..n).collect();
        let mut triangles = Vec::with_capacity(n - 2);
        let mut cursor = 0;
        let mut misses = 0;

        while remaining.len() > 3 {
            let m = remaining.len();
            cursor %= m;
            let candidate = [
                remaining[cursor],
                remaining[(cursor + 1) % m],
                remaining[(cursor + 2) % m],
            ];

            if is_ear(points, &remaining, candidate) {
                triangles.push(candidate);
                let middle = (cursor + 1) % m;
                remaining.remove(middle);
                if middle < cursor {
                    cursor -= 1;
                }
                misses = 0;
            } else {
                cursor += 1;
                misses += 1;
                if misses >= m {
                    return Err(GeometryError::NoEarFound(n));
                }
            }
        }
        triangles.push([remaining[0], remaining[1], remaining[2]]);

        Ok(Triangulation {
            points: points.to_vec(),
            triangles,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::point::Point2;

    fn pts(p: &[(f64, f64)]) -> Vec<Point2<f64>> {
        p.iter().map(|&(x, y)| Point2::new(x, y)).collect()
    }

    #[test]
    fn pentagon_fans_from_first_vertex() {
        let pentagon = pts(&[(0.0, 0.0), (2.0, 0.0), (3.0, 1.5), (1.0, 3.0), (-1.0, 1.5)]);
        let t = EarClipping::triangulate(&pentagon).unwrap();
        assert_eq!(t.triangles, vec![[0, 1, 2], [0, 2, 3], [0, 3, 4]]);
    }

    #[test]
    fn square() {
        let square = pts(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]);
        let t = EarClipping::triangulate(&square).unwrap();
        assert_eq!(t.triangles, vec![[0, 1, 2], [0, 2, 3]]);
        let area: f64 = t.triangles().map(|tri| tri.area()).sum();
        assert_eq!(area, 1.0);
    }

    #[test]
    fn blocked_ear_moves_cursor() {
        // (1, 1) lies inside the first candidate, so the cursor has to move on
        let quad = pts(&[(0.0, 0.0), (4.0, 0.0), (0.0, 4.0), (1.0, 1.0)]);
        let t = EarClipping::triangulate(&quad).unwrap();
        assert_eq!(t.len(), 2);
        assert_eq!(t.triangles[0], [1, 2, 3]);
    }

    #[test]
    fn single_triangle() {
        let t = EarClipping::triangulate(&pts(&[(0.0, 0.0), (1.0, 0.0), (0.0, 1.0)])).unwrap();
        assert_eq!(t.triangles, vec![[0, 1, 2]]);
    }

    #[test]
    fn too_few_vertices() {
        let err = EarClipping::triangulate(&pts(&[(0.0, 0.0), (1.0, 0.0)])).unwrap_err();
        assert_eq!(err, GeometryError::TooFewVertices(2));
    }

    #[test]
    fn doubled_triangle_has_no_ear() {
        let doubled = pts(&[
            (0.0, 0.0),
            (4.0, 0.0),
            (0.0, 4.0),
            (0.0, 0.0),
            (4.0, 0.0),
            (0.0, 4.0),
        ]);
        let err = EarClipping::triangulate(&doubled).unwrap_err();
        assert_eq!(err, GeometryError::NoEarFound(6));
    }
}
