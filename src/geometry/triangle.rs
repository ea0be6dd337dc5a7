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
        Aabb,
        point::{Point, Point2, PointOps},
        segment::Segment,
        util::barycentric_coords,
        vector::{Vector, VectorOps},
    },
    kernel::{orient2d, point_in_triangle},
    numeric::scalar::Scalar,
};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Triangle<T: Scalar, const N: usize> {
    pub vertices: [Point<T, N>; 3],
}

impl<T: Scalar, const N: usize> Triangle<T, N> {
    pub fn new(a: Point<T, N>, b: Point<T, N>, c: Point<T, N>) -> Self {
        Triangle {
            vertices: [a, b, c],
        }
    }

    pub fn vertices(&self) -> &[Point<T, N>; 3] {
        &self.vertices
    }

    /// Edges `(v0, v1)`, `(v1, v2)`, `(v2, v0)`.
    pub fn edges(&self) -> [Segment<T, N>; 3] {
        let [a, b, c] = &self.vertices;
        [Segment::new(a, b), Segment::new(b, c), Segment::new(c, a)]
    }

    pub fn barycentric(&self, p: &Point<T, N>) -> Option<(T, T)>
    where
        Vector<T, N>: VectorOps<T, N>,
    {
        let [a, b, c] = &self.vertices;
        barycentric_coords(a, b, c, p)
    }

    pub fn aabb(&self) -> Aabb<T, N> {
        let [a, b, c] = &self.vertices;
        Aabb::new(*a, *a)
            .union(&Aabb::new(*b, *b))
            .union(&Aabb::new(*c, *c))
    }

    /// Same triangle with the first and last vertex swapped.
    pub fn flipped(&self) -> Self {
        let [a, b, c] = self.vertices;
        Triangle::new(c, b, a)
    }
}

impl<T: Scalar> Triangle<T, 2> {
    /// Twice the signed area; positive for counter-clockwise winding.
    pub fn doubled_signed_area(&self) -> T {
        let [a, b, c] = &self.vertices;
        orient2d(a, b, c)
    }

    pub fn area(&self) -> T {
        self.doubled_signed_area().abs() / T::from_num_den(2, 1)
    }

    pub fn is_degenerate(&self, eps: T) -> bool {
        self.doubled_signed_area().abs() <= eps
    }

    pub fn is_ccw(&self) -> bool {
        self.doubled_signed_area() > T::zero()
    }

    /// Counter-clockwise copy of the triangle.
    pub fn to_ccw(&self) -> Self {
        if self.doubled_signed_area() < T::zero() {
            self.flipped()
        } else {
            *self
        }
    }

    /// Inclusive containment test, independent of winding.
    pub fn contains(&self, p: &Point2<T>) -> bool {
        let [a, b, c] = &self.vertices;
        point_in_triangle(p, a, b, c)
    }
}

impl<T: Scalar> Triangle<T, 3> {
    /// Projection along the Z axis.
    pub fn xy(&self) -> Triangle<T, 2> {
        let [a, b, c] = &self.vertices;
        Triangle::new(a.xy(), b.xy(), c.xy())
    }

    pub fn z_values(&self) -> [T; 3] {
        self.vertices.map(|p| p.z())
    }

    pub fn area(&self) -> T {
        let [a, b, c] = &self.vertices;
        a.vector_to(b).cross(&a.vector_to(c)).norm() / T::from_num_den(2, 1)
    }

    pub fn normal(&self) -> Vector<T, 3> {
        let [a, b, c] = &self.vertices;
        a.vector_to(b).cross(&a.vector_to(c))
    }
}

impl<T: Scalar, const N: usize> From<[Point<T, N>; 3]> for Triangle<T, N> {
    fn from(vertices: [Point<T, N>; 3]) -> Self {
        Triangle { vertices }
    }
}

pub type Triangle2<T> = Triangle<T, 2>;
pub type Triangle3<T> = Triangle<T, 3>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::point::Point3;

    fn tri(a: (f64, f64), b: (f64, f64), c: (f64, f64)) -> Triangle2<f64> {
        Triangle::new(Point2::new(a.0, a.1), Point2::new(b.0, b.1), Point2::new(c.0, c.1))
    }

    #[test]
    fn winding_normalization_swaps_first_and_last() {
        let cw = tri((2.0, 2.0), (2.0, 0.0), (0.0, 0.0));
        assert!(!cw.is_ccw());
        let ccw = cw.to_ccw();
        assert!(ccw.is_ccw());
        assert_eq!(ccw, tri((0.0, 0.0), (2.0, 0.0), (2.0, 2.0)));
        assert_eq!(ccw.to_ccw(), ccw);
    }

    #[test]
    fn degenerate_detection() {
        assert!(tri((0.0, 0.0), (2.0, 0.0), (1.0, 0.0)).is_degenerate(0.0));
        assert!(!tri((0.0, 0.0), (2.0, 0.0), (1.0, 0.001)).is_degenerate(0.0));
        assert!(tri((0.0, 0.0), (2.0, 0.0), (1.0, 0.001)).is_degenerate(0.01));
    }

    #[test]
    fn areas() {
        assert_eq!(tri((0.0, 0.0), (2.0, 0.0), (2.0, 2.0)).area(), 2.0);
        let t3 = Triangle3::new(
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(0.0, 3.0, 0.0),
            Point3::new(0.0, 0.0, 4.0),
        );
        assert_eq!(t3.area(), 6.0);
        assert_eq!(t3.xy().area(), 0.0);
    }

    #[test]
    fn bounding_box() {
        let bb = tri((0.0, 1.0), (2.0, -1.0), (3.0, 1.0)).aabb();
        assert_eq!(bb.min, Point2::new(0.0, -1.0));
        assert_eq!(bb.max, Point2::new(3.0, 1.0));
    }
}
