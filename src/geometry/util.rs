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
        point::{Point, PointOps},
        vector::{Vector, VectorOps},
    },
    numeric::scalar::Scalar,
};

/// Barycentric weights `(u, v)` of `p` relative to `(a1, a2, a3)`, where `u`
/// weighs `a3 - a1` and `v` weighs `a2 - a1`:
///
/// `p = a1 + u * (a3 - a1) + v * (a2 - a1)`
///
/// Works for 2D and 3D; in 3D `p` is assumed to lie in the triangle's plane.
/// Returns `None` for a zero-area triangle.
pub fn barycentric_coords<T: Scalar, const N: usize>(
    a1: &Point<T, N>,
    a2: &Point<T, N>,
    a3: &Point<T, N>,
    p: &Point<T, N>,
) -> Option<(T, T)>
where
    Vector<T, N>: VectorOps<T, N>,
{
    let v0 = a1.vector_to(a3);
    let v1 = a1.vector_to(a2);
    let v2 = a1.vector_to(p);

    let dot00 = v0.dot(&v0);
    let dot01 = v0.dot(&v1);
    let dot02 = v0.dot(&v2);
    let dot11 = v1.dot(&v1);
    let dot12 = v1.dot(&v2);

    let denom = dot00 * dot11 - dot01 * dot01;
    if denom.is_zero() {
        return None; // degenerate triangle
    }

    let u = (dot11 * dot02 - dot01 * dot12) / denom;
    let v = (dot00 * dot12 - dot01 * dot02) / denom;
    Some((u, v))
}

/// Interpolates per-vertex values `[w1, w2, w3]` with weights from
/// [`barycentric_coords`].
pub fn barycentric_blend<T: Scalar>(u: T, v: T, values: [T; 3]) -> T {
    let [w1, w2, w3] = values;
    w1 + u * (w3 - w1) + v * (w2 - w1)
}

/// `u >= 0, v >= 0, u + v <= 1`
pub fn is_inside_barycentric<T: Scalar>(u: T, v: T) -> bool {
    u >= T::zero() && v >= T::zero() && u + v <= T::one()
}

/// Like [`is_inside_barycentric`] but rejects points on the `a2`-`a3` edge.
pub fn is_strictly_inside_barycentric<T: Scalar>(u: T, v: T) -> bool {
    u >= T::zero() && v >= T::zero() && u + v < T::one()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::point::{Point2, Point3};

    #[test]
    fn weights_follow_edge_convention() {
        let a1 = Point2::new(0.0, 0.0);
        let a2 = Point2::new(2.0, 0.0);
        let a3 = Point2::new(0.0, 2.0);

        assert_eq!(barycentric_coords(&a1, &a2, &a3, &Point2::new(0.5, 0.5)), Some((0.25, 0.25)));
        // u weighs a3, v weighs a2
        assert_eq!(barycentric_coords(&a1, &a2, &a3, &a3), Some((1.0, 0.0)));
        assert_eq!(barycentric_coords(&a1, &a2, &a3, &a2), Some((0.0, 1.0)));
    }

    #[test]
    fn degenerate_triangle_has_no_weights() {
        let a1 = Point3::new(0.0, 0.0, 0.0);
        let a2 = Point3::new(1.0, 1.0, 1.0);
        let a3 = Point3::new(2.0, 2.0, 2.0);
        assert_eq!(barycentric_coords(&a1, &a2, &a3, &a2), None);
    }

    #[test]
    fn weights_in_3d_plane() {
        let a1 = Point3::new(0.0, 0.0, 1.0);
        let a2 = Point3::new(1.0, 0.0, 1.0);
        let a3 = Point3::new(0.0, 1.0, 1.0);
        let (u, v) = barycentric_coords(&a1, &a2, &a3, &Point3::new(0.25, 0.5, 1.0)).unwrap();
        assert_eq!((u, v), (0.5, 0.25));
        assert!(is_inside_barycentric(u, v));
        assert!(is_strictly_inside_barycentric(u, v));
    }

    #[test]
    fn edge_points_are_inside_but_not_strictly() {
        assert!(is_inside_barycentric(0.5, 0.5));
        assert!(!is_strictly_inside_barycentric(0.5, 0.5));
        assert!(!is_inside_barycentric(-0.1, 0.5));
    }

    #[test]
    fn blend_reproduces_vertex_values() {
        assert_eq!(barycentric_blend(0.0, 0.0, [1.0, 2.0, 3.0]), 1.0);
        assert_eq!(barycentric_blend(1.0, 0.0, [1.0, 2.0, 3.0]), 3.0);
        assert_eq!(barycentric_blend(0.0, 1.0, [1.0, 2.0, 3.0]), 2.0);
        assert_eq!(barycentric_blend(0.25, 0.25, [0.0, 4.0, 8.0]), 3.0);
    }
}
