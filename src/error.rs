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

//! Error types for the projection pipeline.

use thiserror::Error;

/// Conditions under which a geometric result cannot be computed.
///
/// Callers of the flat-buffer entry points never see these: they collapse to
/// an empty output buffer. The typed API surfaces them so that, for instance,
/// a vertical reference plane can be told apart from plain "no overlap".
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GeometryError {
    /// Input buffer is shorter than the point layout requires.
    #[error("buffer holds {found} floats, expected at least {expected}")]
    BufferTooShort { expected: usize, found: usize },

    /// Triangle has zero area, so no plane or barycentric frame exists.
    #[error("triangle is degenerate")]
    DegenerateTriangle,

    /// Plane is parallel to the Z axis; Z cannot be solved from (x, y).
    #[error("plane is parallel to the projection axis")]
    DegeneratePlane,

    /// Polygon has fewer than 3 vertices.
    #[error("polygon needs at least 3 vertices, got {0}")]
    TooFewVertices(usize),

    /// Ear clipping went around the polygon without finding an ear.
    #[error("no ear found in polygon with {0} vertices")]
    NoEarFound(usize),
}

/// Result type for geometry operations.
pub type Result<T> = std::result::Result<T, GeometryError>;
