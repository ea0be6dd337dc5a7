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
        point::{Point2, Point3, PointOps},
        triangle::Triangle3,
        util::{barycentric_blend, barycentric_coords},
        vector::{Vector3, VectorOps},
    },
    numeric::scalar::Scalar,
};

/// Plane in implicit form `normal · p + d = 0`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Plane<T: Scalar> {
    pub normal: Vector3<T>,
    pub d: T,
}

impl<T: Scalar> Plane<T> {
    pub fn new(normal: Vector3<T>, d: T) -> Self {
        Plane { normal, d }
    }

    /// Plane through three points; the normal is `(p2 - p1) x (p3 - p1)`,
    /// unnormalized.
    pub fn from_points(p1: &Point3<T>, p2: &Point3<T>, p3: &Point3<T>) -> Self {
        let normal = p1.vector_to(p2).cross(&p1.vector_to(p3));
        let d = -normal.dot(&p1.as_vector());
        Plane::new(normal, d)
    }

    pub fn from_triangle(tri: &Triangle3<T>) -> Self {
        let [a, b, c] = tri.vertices();
        Plane::from_points(a, b, c)
    }

    /// `normal · p + d`; zero for points on the plane.
    pub fn residual(&self, p: &Point3<T>) -> T {
        self.normal.dot(&p.as_vector()) + self.d
    }

    /// Z of the plane above `(x, y)`.
    pub fn z_at(&self, x: T, y: T) -> Result<T> {
        let [nx, ny, nz] = self.normal.coords;
        let len = self.normal.norm();
        if len.is_zero() {
            return Err(GeometryError::DegenerateTriangle);
        }
        if nz.abs() <= T::tolerance() * len {
            return Err(GeometryError::DegeneratePlane);
        }
        Ok(-(nx * x + ny * y + self.d) / nz)
    }

    pub fn lift_point(&self, p: &Point2<T>) -> Result<Point3<T>> {
        Ok(p.with_z(self.z_at(p.x(), p.y())?))
    }

    /// Lifts every 2D point onto the plane, keeping `(x, y)` unchanged.
    pub fn lift(&self, points: &[Point2<T>]) -> Result<Vec<Point3<T>>> {
        points.iter().map(|p| self.lift_point(p)).collect()
    }
}

/// Lifts 2D points onto `reference` by blending its vertex Z values with
/// barycentric weights taken against its XY projection.
pub fn lift_barycentric<T: Scalar>(
    points: &[Point2<T>],
    reference: &Triangle3<T>,
) -> Result<Vec<Point3<T>>> {
    let [a1, a2, a3] = reference.xy().vertices;
    let zs = reference.z_values();
    points
        .iter()
        .map(|p| {
            let (u, v) =
                barycentric_coords(&a1, &a2, &a3, p).ok_or(GeometryError::DegenerateTriangle)?;
            Ok(p.with_z(barycentric_blend(u, v, zs)))
        })
        .collect()
}
