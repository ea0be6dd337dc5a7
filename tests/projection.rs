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

use approx::assert_abs_diff_eq;
use projclip::geometry::{Point3, Segment3, Triangle3};
use projclip::{
    GeometryError, LiftMode, OverlapConfig, TriangulationMethod, intersect_line_triangle,
    intersect_projected_triangle, overlap_projected_triangle, overlap_projected_triangle_with,
    overlap_triangles,
};

const RIGHT_TRIANGLE: [f32; 9] = [0.0, 0.0, 0.0, 2.0, 0.0, 0.0, 2.0, 2.0, 0.0];
const ISOSCELES: [f32; 9] = [-2.0, 0.0, 0.0, 2.0, 0.0, 0.0, 0.0, 2.0, 0.0];

fn assert_buffer(actual: &[f32], expected: &[f32]) {
    assert_eq!(actual.len(), expected.len(), "{actual:?}");
    for (a, e) in actual.iter().zip(expected) {
        assert_abs_diff_eq!(*a, *e, epsilon = 1e-5);
    }
}

#[test]
fn line_through_triangle() {
    let out = intersect_projected_triangle(&[-5.0, 1.0, 0.0, 5.0, 1.0, 0.0], &RIGHT_TRIANGLE);
    assert_buffer(&out, &[2.0, 1.0, 0.0, 1.0, 1.0, 0.0]);
}

#[test]
fn reversed_line() {
    let out = intersect_projected_triangle(&[5.0, 1.0, 0.0, -5.0, 1.0, 0.0], &RIGHT_TRIANGLE);
    assert_buffer(&out, &[2.0, 1.0, 0.0, 1.0, 1.0, 0.0]);
}

#[test]
fn bisecting_line() {
    let out = intersect_projected_triangle(&[0.0, 0.0, 0.0, 0.0, 1.0, 0.0], &ISOSCELES);
    assert_buffer(&out, &[0.0, 0.0, 0.0, 0.0, 2.0, 0.0]);
}

#[test]
fn line_touching_vertex() {
    let out = intersect_projected_triangle(&[0.0, 2.0, 0.0, 2.0, 2.0, 0.0], &ISOSCELES);
    assert!(out.is_empty());
}

#[test]
fn line_along_edge() {
    let out = intersect_projected_triangle(&[-3.0, 0.0, 0.0, 3.0, 0.0, 0.0], &ISOSCELES);
    assert_buffer(&out, &[2.0, 0.0, 0.0, -2.0, 0.0, 0.0]);
}

#[test]
fn line_missing_triangle() {
    let out = intersect_projected_triangle(&[-3.0, 10.0, 0.0, 3.0, 10.0, 0.0], &ISOSCELES);
    assert!(out.is_empty());
}

#[test]
fn intersection_takes_z_from_triangle_plane() {
    let out = intersect_projected_triangle(
        &[-5.0, 1.0, 50.0, 5.0, 1.0, -50.0],
        &[0.0, 0.0, -10.0, 2.0, 0.0, 10.0, 2.0, 2.0, 10.0],
    );
    assert_buffer(&out, &[2.0, 1.0, 10.0, 1.0, 1.0, 0.0]);
}

#[test]
fn typed_intersection() {
    let line = Segment3::new(&Point3::new(-5.0, 1.0, 0.0), &Point3::new(5.0, 1.0, 0.0));
    let triangle = Triangle3::new(
        Point3::new(0.0, 0.0, -10.0),
        Point3::new(2.0, 0.0, 10.0),
        Point3::new(2.0, 2.0, 10.0),
    );
    let points = intersect_line_triangle(&line, &triangle).unwrap();
    assert_eq!(points.len(), 2);
    assert_abs_diff_eq!(points[0].z(), 10.0, epsilon = 1e-12);
    assert_abs_diff_eq!(points[1].z(), 0.0, epsilon = 1e-12);
}

#[test]
fn overlap_of_shifted_triangles() {
    let a = [0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0];
    let b = [0.2, 0.2, 0.0, 1.2, 0.2, 0.0, 0.2, 1.2, 0.0];
    let out = overlap_projected_triangle(&a, &b);
    assert_buffer(&out, &[0.2, 0.8, 0.0, 0.2, 0.2, 0.0, 0.8, 0.2, 0.0]);
}

#[test]
fn overlap_lies_in_second_triangle_plane() {
    let a = [0.0, 0.0, 100.0, 2.0, 0.0, 100.0, 2.0, 2.0, 100.0];
    let b = [1.0, 1.0, 0.0, 2.0, -1.0, 2.0, 3.0, 1.0, 4.0];
    let out = overlap_projected_triangle(&a, &b);
    // quadrilateral overlap, two triangles
    assert_eq!(out.len(), 18);
    // b's plane is z = 2x - 2
    let plane_z = |x: f32| 2.0 * x - 2.0;
    for p in out.chunks_exact(3) {
        assert_abs_diff_eq!(p[2], plane_z(p[0]), epsilon = 1e-4);
    }
}

#[test]
fn overlap_with_fan_and_barycentric_lift() {
    let a = Triangle3::new(
        Point3::new(0.0, 0.0, 0.0),
        Point3::new(2.0, 0.0, 0.0),
        Point3::new(2.0, 2.0, 0.0),
    );
    let b = Triangle3::new(
        Point3::new(1.0, 1.0, 1.0),
        Point3::new(2.0, -1.0, 1.0),
        Point3::new(3.0, 1.0, 1.0),
    );
    let cfg = OverlapConfig::new()
        .with_lift(LiftMode::Barycentric)
        .with_triangulation(TriangulationMethod::Fan);
    let triangles = overlap_triangles(&a, &b, &cfg).unwrap();
    assert_eq!(triangles.len(), 2);
    let area: f64 = triangles.iter().map(|t| t.area()).sum();
    assert_abs_diff_eq!(area, 0.75, epsilon = 1e-12);
    for t in &triangles {
        for p in t.vertices {
            assert_abs_diff_eq!(p.z(), 1.0, epsilon = 1e-12);
        }
    }
}

#[test]
fn overlap_bounding_boxes_apart() {
    let far = [10.0, 10.0, 0.0, 11.0, 10.0, 0.0, 10.0, 11.0, 0.0];
    assert!(overlap_projected_triangle(&RIGHT_TRIANGLE, &far).is_empty());
}

#[test]
fn overlap_degenerate_input() {
    let flat = [0.0, 0.0, 0.0, 2.0, 0.0, 0.0, 1.0, 0.0, 0.0];
    assert!(overlap_projected_triangle(&flat, &RIGHT_TRIANGLE).is_empty());
    assert!(overlap_projected_triangle(&RIGHT_TRIANGLE, &flat).is_empty());
}

#[test]
fn short_buffers() {
    assert!(overlap_projected_triangle(&RIGHT_TRIANGLE[..8], &RIGHT_TRIANGLE).is_empty());
    assert!(intersect_projected_triangle(&[0.0; 5], &RIGHT_TRIANGLE).is_empty());
    assert!(
        overlap_projected_triangle_with(&RIGHT_TRIANGLE, &[], &OverlapConfig::default())
            .is_empty()
    );
}

#[test]
fn trailing_floats_are_ignored() {
    let mut long = RIGHT_TRIANGLE.to_vec();
    long.extend([9.0, 9.0, 9.0]);
    let out = overlap_projected_triangle(&long, &RIGHT_TRIANGLE);
    assert_buffer(&out, &RIGHT_TRIANGLE);
}

#[test]
fn steep_reference_plane_is_an_error() {
    let a = Triangle3::new(
        Point3::new(0.0, 0.0, 0.0),
        Point3::new(2.0, 0.0, 0.0),
        Point3::new(2.0, 2.0, 0.0),
    );
    let b = Triangle3::new(
        Point3::new(0.0, 0.0, 0.0),
        Point3::new(2.0, 0.0, 0.0),
        Point3::new(1.0, 1e-8, 5.0),
    );
    assert_eq!(
        overlap_triangles(&a, &b, &OverlapConfig::default()),
        Err(GeometryError::DegeneratePlane)
    );
}
