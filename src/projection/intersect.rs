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

use log::debug;

use crate::{
    error::Result,
    geometry::{
        intersection::line_triangle_intersection,
        plane::Plane,
        point::Point3,
        segment::Segment3,
        triangle::Triangle3,
    },
    numeric::scalar::Scalar,
    projection::buffer::{flatten_points, read_segment, read_triangle},
};

/// Where the infinite line through `line` crosses the boundary of `triangle`,
/// seen along the Z axis, with Z taken from the triangle's plane.
///
/// Yields exactly two points or none. A line that only grazes a vertex yields
/// none.
pub fn intersect_line_triangle<T: Scalar>(
    line: &Segment3<T>,
    triangle: &Triangle3<T>,
) -> Result<Vec<Point3<T>>> {
    let points = line_triangle_intersection(&line.xy(), &triangle.xy());
    if points.len() != 2 {
        debug!("line meets the projected triangle in {} points", points.len());
        return Ok(Vec::new());
    }
    Plane::from_triangle(triangle).lift(&points)
}

/// Flat-buffer form of [`intersect_line_triangle`].
///
/// `line` holds at least 6 floats and `triangle` at least 9. The result holds
/// 6 floats, or none.
pub fn intersect_projected_triangle<T: Scalar>(line: &[T], triangle: &[T]) -> Vec<T> {
    let result = read_segment(line).and_then(|line| {
        let triangle = read_triangle(triangle)?;
        intersect_line_triangle(&line, &triangle)
    });
    match result {
        Ok(points) => flatten_points(&points),
        Err(e) => {
            debug!("intersection dropped: {e}");
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn through_two_edges() {
        let out = intersect_projected_triangle(
            &[-5.0, 1.0, 0.0, 5.0, 1.0, 0.0],
            &[0.0, 0.0, 0.0, 2.0, 0.0, 0.0, 2.0, 2.0, 0.0],
        );
        assert_eq!(out, vec![2.0, 1.0, 0.0, 1.0, 1.0, 0.0]);
    }

    #[test]
    fn upright_triangle_yields_nothing() {
        // the projection collapses to a segment, which the line meets once
        let out = intersect_projected_triangle(
            &[0.0, -1.0, 0.0, 0.0, 1.0, 0.0],
            &[-1.0, 0.0, 0.0, 1.0, 0.0, 0.0, 1.0, 0.0, 3.0],
        );
        assert!(out.is_empty());
    }

    #[test]
    fn short_line_buffer() {
        let out = intersect_projected_triangle(&[0.0_f32; 5], &[0.0; 9]);
        assert!(out.is_empty());
    }
}
