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

use crate::geometry::point::{Point, Point2, PointOps};
use crate::geometry::vector::VectorOps;
use crate::kernel::orientation::signed_distance;
use crate::numeric::scalar::Scalar;

/// Coordinate-wise equality within [`Scalar::tolerance`].
pub fn are_equal<T: Scalar, const N: usize>(p1: &Point<T, N>, p2: &Point<T, N>) -> bool {
    p1.approx_eq(p2)
}

fn near_zero<T: Scalar>(d: T, p: &Point2<T>) -> bool {
    let scale = T::one().max(p.x().abs()).max(p.y().abs());
    d.abs() <= T::tolerance() * scale
}

/// Half-plane test, inclusive of the boundary, valid for either winding.
pub fn point_in_triangle<T: Scalar>(
    p: &Point2<T>,
    a: &Point2<T>,
    b: &Point2<T>,
    c: &Point2<T>,
) -> bool {
    let mut has_neg = false;
    let mut has_pos = false;
    for (s, e) in [(a, b), (b, c), (c, a)] {
        let d = signed_distance(s, e, p);
        if near_zero(d, p) {
            continue;
        }
        if d < T::zero() {
            has_neg = true;
        } else {
            has_pos = true;
        }
    }
    !(has_neg && has_pos)
}

/// Parameter of `p` along `a -> b` if `p` lies on the closed segment.
pub fn point_u_on_segment<T: Scalar>(a: &Point2<T>, b: &Point2<T>, p: &Point2<T>) -> Option<T> {
    let ab = a.vector_to(b);
    let len2 = ab.dot(&ab);
    if len2.is_zero() {
        return are_equal(a, p).then(T::zero);
    }
    if !near_zero(signed_distance(a, b, p), p) {
        return None;
    }
    let t = a.vector_to(p).dot(&ab) / len2;
    let slack = T::tolerance();
    if t < -slack || t > T::one() + slack {
        return None;
    }
    Some(t.max(T::zero()).min(T::one()))
}
