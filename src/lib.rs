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

//! Overlap and intersection of triangles projected along the Z axis.
//!
//! Triangles are projected onto the XY plane, clipped against each other with
//! a Weiler-Atherton walk specialized to triangle pairs, and the overlap is
//! lifted back onto the reference triangle's plane and triangulated.
//!
//! The [`projection`] module offers both typed entry points and flat,
//! point-major float buffers.

pub mod clipping;
pub mod config;
pub mod error;
pub mod geometry;
pub mod kernel;
pub mod numeric;
pub mod operations;
pub mod projection;

pub use config::{ClipConfig, LiftMode, OverlapConfig, TriangulationMethod};
pub use error::{GeometryError, Result};
pub use numeric::Scalar;
pub use projection::{
    intersect_line_triangle, intersect_projected_triangle, overlap_projected_triangle,
    overlap_projected_triangle_with, overlap_triangles,
};
