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
    clipping::clip_triangles,
    config::{LiftMode, OverlapConfig},
    error::Result,
    geometry::{
        plane::{Plane, lift_barycentric},
        triangle::Triangle3,
    },
    numeric::scalar::Scalar,
    operations::triangulation::triangulate,
    projection::buffer::{flatten_triangles, read_triangle},
};

/// Overlap of `a` and `b` seen along the Z axis, as triangles lying in `b`'s
/// plane.
///
/// Returns `Ok` with no triangles when the projections share no area. Errors
/// are reserved for a reference plane that cannot be solved for Z.
pub fn overlap_triangles<T: Scalar>(
    a: &Triangle3<T>,
    b: &Triangle3<T>,
    config: &OverlapConfig<T>,
) -> Result<Vec<Triangle3<T>>> {
    let (a2, b2) = (a.xy(), b.xy());
    if !a2.aabb().intersects(&b2.aabb()) {
        debug!("projected bounding boxes are disjoint");
        return Ok(Vec::new());
    }

    let polygon = clip_triangles(&a2, &b2, &config.clip);
    if polygon.is_empty() {
        return Ok(Vec::new());
    }

    let lifted = match config.lift {
        LiftMode::Plane => Plane::from_triangle(b).lift(polygon.points())?,
        LiftMode::Barycentric => lift_barycentric(polygon.points(), b)?,
    };
    let triangulation = triangulate(config.triangulation, &lifted)?;
    Ok(triangulation.triangles().collect())
}

/// Flat-buffer form of [`overlap_triangles`] with the default configuration.
///
/// `a` and `b` hold at least 9 floats each. The result holds 9 floats per
/// overlap triangle and is empty when there is no overlap or the input cannot
/// be processed.
pub fn overlap_projected_triangle<T: Scalar>(a: &[T], b: &[T]) -> Vec<T> {
    overlap_projected_triangle_with(a, b, &OverlapConfig::default())
}

pub fn overlap_projected_triangle_with<T: Scalar>(
    a: &[T],
    b: &[T],
    config: &OverlapConfig<T>,
) -> Vec<T> {
    let result = read_triangle(a).and_then(|a| {
        let b = read_triangle(b)?;
        overlap_triangles(&a, &b, config)
    });
    match result {
        Ok(triangles) => flatten_triangles(&triangles),
        Err(e) => {
            debug!("overlap dropped: {e}");
            Vec::new()
        }
    }
}
