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
        point::{Point2, PointOps},
        segment::{Segment2, SegmentOps},
        triangle::Triangle2,
        vector::VectorOps,
    },
    kernel::are_equal,
    numeric::scalar::Scalar,
};

/// Intersection point of two 2D segments (or a line and a segment).
///
/// `ua` is the parameter along the first operand and `ub` along the second,
/// so `point == first.point_at(ua)`. The clipper orders several hits on one
/// edge by these coefficients.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentHit<T: Scalar> {
    pub point: Point2<T>,
    pub ua: T,
    pub ub: T,
}

/// Parameters `(ua, ub)` of the supporting lines' crossing; `None` when the
/// lines are parallel. Collinear overlap is treated as parallel.
fn line_parameters<T: Scalar>(s1: &Segment2<T>, s2: &Segment2<T>) -> Option<(T, T)> {
    let d1 = s1.direction();
    let d2 = s2.direction();
    let denom = d1.cross(&d2);
    if denom.is_zero() {
        return None; // parallel
    }
    let w = s2.a.vector_to(&s1.a);
    Some((d2.cross(&w) / denom, d1.cross(&w) / denom))
}

fn in_unit_range<T: Scalar>(t: T) -> bool {
    t >= T::zero() && t <= T::one()
}

/// Crossing of two closed segments, endpoints included.
pub fn segment_segment_intersection<T: Scalar>(
    s1: &Segment2<T>,
    s2: &Segment2<T>,
) -> Option<SegmentHit<T>> {
    let (ua, ub) = line_parameters(s1, s2)?;
    if !in_unit_range(ua) || !in_unit_range(ub) {
        return None; // out of range
    }
    Some(SegmentHit {
        point: s1.point_at(ua),
        ua,
        ub,
    })
}

/// Crossing of the infinite line through `line` with the closed segment `seg`.
/// Only `ub` is range-checked.
pub fn segment_line_intersection<T: Scalar>(
    line: &Segment2<T>,
    seg: &Segment2<T>,
) -> Option<SegmentHit<T>> {
    let (ua, ub) = line_parameters(line, seg)?;
    if !in_unit_range(ub) {
        return None;
    }
    Some(SegmentHit {
        point: line.point_at(ua),
        ua,
        ub,
    })
}

/// Points where the infinite line through `line` meets the boundary of `tri`.
///
/// Edges are visited as `(t1, t2)`, `(t2, t3)`, `(t3, t1)`. A hit equal to an
/// earlier one (a line through a vertex reports it twice) replaces it, so the
/// later edge's copy is the one kept.
pub fn line_triangle_intersection<T: Scalar>(
    line: &Segment2<T>,
    tri: &Triangle2<T>,
) -> Vec<Point2<T>> {
    let mut intersections: Vec<Point2<T>> = Vec::with_capacity(3);
    for edge in tri.edges() {
        let Some(hit) = segment_line_intersection(line, &edge) else {
            continue;
        };
        if let Some(i) = intersections.iter().position(|p| are_equal(p, &hit.point)) {
            intersections.remove(i);
        }
        intersections.push(hit.point);
    }
    intersections
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seg(a: (f64, f64), b: (f64, f64)) -> Segment2<f64> {
        Segment2::new(&Point2::new(a.0, a.1), &Point2::new(b.0, b.1))
    }

    #[test]
    fn test_simple_intersection() {
        let hit = segment_segment_intersection(&seg((0.0, 0.0), (2.0, 2.0)), &seg((0.0, 2.0), (2.0, 0.0)))
            .unwrap();
        assert_eq!(hit.point, Point2::new(1.0, 1.0));
        assert_eq!((hit.ua, hit.ub), (0.5, 0.5));
    }

    #[test]
    fn coefficients_are_per_segment() {
        let hit = segment_segment_intersection(&seg((0.0, 0.0), (4.0, 0.0)), &seg((1.0, -1.0), (1.0, 3.0)))
            .unwrap();
        assert_eq!(hit.point, Point2::new(1.0, 0.0));
        assert_eq!(hit.ua, 0.25);
        assert_eq!(hit.ub, 0.25);
    }

    #[test]
    fn test_no_intersection() {
        // parallel
        assert!(segment_segment_intersection(&seg((0.0, 0.0), (1.0, 0.0)), &seg((0.0, 1.0), (1.0, 1.0))).is_none());
        // collinear overlap counts as parallel
        assert!(segment_segment_intersection(&seg((0.0, 0.0), (2.0, 0.0)), &seg((1.0, 0.0), (3.0, 0.0))).is_none());
        // lines cross outside the first segment
        assert!(segment_segment_intersection(&seg((0.0, 0.0), (1.0, 0.0)), &seg((2.0, -1.0), (2.0, 1.0))).is_none());
    }

    #[test]
    fn endpoints_are_included() {
        let hit = segment_segment_intersection(&seg((0.0, 0.0), (2.0, 0.0)), &seg((2.0, 0.0), (2.0, 2.0)))
            .unwrap();
        assert_eq!(hit.point, Point2::new(2.0, 0.0));
        assert_eq!((hit.ua, hit.ub), (1.0, 0.0));
    }

    #[test]
    fn line_is_unbounded() {
        let line = seg((0.0, 0.0), (1.0, 0.0));
        let edge = seg((5.0, -1.0), (5.0, 1.0));
        assert!(segment_segment_intersection(&line, &edge).is_none());
        let hit = segment_line_intersection(&line, &edge).unwrap();
        assert_eq!(hit.point, Point2::new(5.0, 0.0));
        assert_eq!(hit.ua, 5.0);
        // but the edge itself stays bounded
        assert!(segment_line_intersection(&line, &seg((5.0, 1.0), (5.0, 2.0))).is_none());
    }

    #[test]
    fn line_through_vertex_is_deduplicated() {
        let tri = Triangle2::new(Point2::new(-2.0, 0.0), Point2::new(2.0, 0.0), Point2::new(0.0, 2.0));
        let points = line_triangle_intersection(&seg((0.0, 0.0), (0.0, 1.0)), &tri);
        assert_eq!(points, vec![Point2::new(0.0, 0.0), Point2::new(0.0, 2.0)]);

        let apex_only = line_triangle_intersection(&seg((0.0, 2.0), (2.0, 2.0)), &tri);
        assert_eq!(apex_only, vec![Point2::new(0.0, 2.0)]);
    }
}
