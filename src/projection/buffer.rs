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

//! Flat, point-major float buffers (`x, y, z, x, y, z, ...`).

use crate::{
    error::{GeometryError, Result},
    geometry::{point::Point3, segment::Segment3, triangle::Triangle3},
    numeric::scalar::Scalar,
};

/// Reads `count` 3D points from the front of `buf`. Trailing floats are
/// ignored.
pub fn read_points<T: Scalar>(buf: &[T], count: usize) -> Result<Vec<Point3<T>>> {
    let expected = count * 3;
    if buf.len() < expected {
        return Err(GeometryError::BufferTooShort {
            expected,
            found: buf.len(),
        });
    }
    Ok(buf[..expected]
        .chunks_exact(3)
        .map(|c| Point3::new(c[0], c[1], c[2]))
        .collect())
}

/// Reads a triangle from the first 9 floats.
pub fn read_triangle<T: Scalar>(buf: &[T]) -> Result<Triangle3<T>> {
    let p = read_points(buf, 3)?;
    Ok(Triangle3::new(p[0], p[1], p[2]))
}

/// Reads a segment from the first 6 floats.
pub fn read_segment<T: Scalar>(buf: &[T]) -> Result<Segment3<T>> {
    let p = read_points(buf, 2)?;
    Ok(Segment3::new(&p[0], &p[1]))
}

pub fn flatten_points<'a, T: Scalar>(points: impl IntoIterator<Item = &'a Point3<T>>) -> Vec<T> {
    points.into_iter().flat_map(|p| p.coords).collect()
}

pub fn flatten_triangles<T: Scalar>(triangles: &[Triangle3<T>]) -> Vec<T> {
    flatten_points(triangles.iter().flat_map(|t| t.vertices.iter()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_and_ignores_trailing() {
        let buf = [0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 99.0];
        let tri = read_triangle(&buf).unwrap();
        assert_eq!(tri.vertices[2], Point3::new(6.0, 7.0, 8.0));
        assert_eq!(flatten_triangles(&[tri]), buf[..9].to_vec());

        let seg = read_segment(&buf).unwrap();
        assert_eq!(seg.b, Point3::new(3.0, 4.0, 5.0));
    }

    #[test]
    fn short_buffer() {
        let err = read_triangle(&[0.0_f32; 8]).unwrap_err();
        assert_eq!(
            err,
            GeometryError::BufferTooShort {
                expected: 9,
                found: 8
            }
        );
        assert!(read_segment(&[0.0_f32; 6]).is_ok());
    }
}
