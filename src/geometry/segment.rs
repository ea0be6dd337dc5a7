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

pub trait SegmentOps<T: Scalar, const N: usize>: Sized
where
    Vector<T, N>: VectorOps<T, N>,
{
    fn a(&self) -> &Point<T, N>;
    fn b(&self) -> &Point<T, N>;

    fn direction(&self) -> Vector<T, N> {
        self.a().vector_to(self.b())
    }

    fn point_at(&self, t: T) -> Point<T, N> {
        self.a().lerp(self.b(), t)
    }

    fn midpoint(&self) -> Point<T, N> {
        self.a().midpoint(self.b())
    }

    fn inverse(&self) -> Self;
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment<T: Scalar, const N: usize> {
    pub a: Point<T, N>,
    pub b: Point<T, N>,
}

impl<T: Scalar, const N: usize> Segment<T, N> {
    pub fn new(a: &Point<T, N>, b: &Point<T, N>) -> Self {
        Self { a: *a, b: *b }
    }
}

impl<T: Scalar> Segment<T, 3> {
    /// Projection along the Z axis.
    pub fn xy(&self) -> Segment<T, 2> {
        Segment::new(&self.a.xy(), &self.b.xy())
    }
}

impl<T: Scalar, const N: usize> SegmentOps<T, N> for Segment<T, N>
where
    Vector<T, N>: VectorOps<T, N>,
{
    fn a(&self) -> &Point<T, N> {
        &self.a
    }

    fn b(&self) -> &Point<T, N> {
        &self.b
    }

    fn inverse(&self) -> Self {
        Self::new(self.b(), self.a())
    }
}

pub type Segment2<T> = Segment<T, 2>;
pub type Segment3<T> = Segment<T, 3>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::point::{Point2, Point3};

    #[test]
    fn test_segment_direction() {
        let s = Segment2::new(&Point2::new(1.0, 0.0), &Point2::new(1.0, 5.0));
        assert_eq!(s.direction().coords, [0.0, 5.0]);
    }

    #[test]
    fn point_at_follows_direction() {
        let s = Segment3::new(&Point3::new(0.0, 0.0, 0.0), &Point3::new(2.0, 4.0, 6.0));
        assert_eq!(s.point_at(0.25), Point3::new(0.5, 1.0, 1.5));
        assert_eq!(s.inverse().point_at(0.25), Point3::new(1.5, 3.0, 4.5));
        assert_eq!(s.xy().midpoint(), Point2::new(1.0, 2.0));
    }
}
