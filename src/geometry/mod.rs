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

pub mod aabb;
pub mod intersection;
pub mod plane;
pub mod point;
pub mod polygon;
pub mod segment;
pub mod triangle;
pub mod util;
pub mod vector;

pub use aabb::Aabb;
pub use intersection::{
    SegmentHit, line_triangle_intersection, segment_line_intersection,
    segment_segment_intersection,
};
pub use plane::{Plane, lift_barycentric};
pub use point::{Point, Point2, Point3, PointOps};
pub use polygon::{Polygon, Polygon2, Polygon3};
pub use segment::{Segment, Segment2, Segment3, SegmentOps};
pub use triangle::{Triangle, Triangle2, Triangle3};
pub use util::barycentric_coords;
pub use vector::{Vector, Vector2, Vector3, VectorOps};
