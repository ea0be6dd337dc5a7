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

//! Configuration for clipping and the overlap pipeline.

use crate::numeric::scalar::Scalar;

/// Tolerances used by the triangle-triangle clipper.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClipConfig<T: Scalar> {
    /// Fraction of an edge of B by which a crossing is nudged along that edge
    /// to decide whether B's boundary enters A there.
    pub entry_epsilon: T,

    /// Triangles whose doubled signed area has magnitude at or below this
    /// value are degenerate and clip to nothing.
    pub area_epsilon: T,
}

impl<T: Scalar> Default for ClipConfig<T> {
    fn default() -> Self {
        Self {
            entry_epsilon: T::from_num_den(1, 100),
            area_epsilon: T::zero(),
        }
    }
}

impl<T: Scalar> ClipConfig<T> {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the entry nudge fraction.
    pub fn with_entry_epsilon(mut self, eps: T) -> Self {
        self.entry_epsilon = eps;
        self
    }

    /// Sets the degeneracy threshold. Negative values are clamped to zero.
    pub fn with_area_epsilon(mut self, eps: T) -> Self {
        self.area_epsilon = eps.max(T::zero());
        self
    }
}

/// How Z is recovered for 2D overlap points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LiftMode {
    /// Solve the reference plane's implicit equation for Z.
    #[default]
    Plane,
    /// Blend the reference triangle's vertex Z values barycentrically.
    Barycentric,
}

/// How the convex overlap polygon is split into triangles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TriangulationMethod {
    #[default]
    EarClipping,
    Fan,
}

/// Configuration for [`overlap_triangles`](crate::projection::overlap_triangles).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverlapConfig<T: Scalar> {
    pub clip: ClipConfig<T>,
    pub lift: LiftMode,
    pub triangulation: TriangulationMethod,
}

impl<T: Scalar> Default for OverlapConfig<T> {
    fn default() -> Self {
        Self {
            clip: ClipConfig::default(),
            lift: LiftMode::default(),
            triangulation: TriangulationMethod::default(),
        }
    }
}

impl<T: Scalar> OverlapConfig<T> {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the clipper tolerances.
    pub fn with_clip(mut self, clip: ClipConfig<T>) -> Self {
        self.clip = clip;
        self
    }

    /// Sets how Z is recovered.
    pub fn with_lift(mut self, lift: LiftMode) -> Self {
        self.lift = lift;
        self
    }

    /// Sets the triangulation method.
    pub fn with_triangulation(mut self, method: TriangulationMethod) -> Self {
        self.triangulation = method;
        self
    }
}
