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

use num_traits::Float;

use std::fmt::{Debug, Display};

/// Floating-point coordinate type used throughout the crate.
///
/// Implemented for `f32` and `f64`. Besides the arithmetic inherited from
/// [`Float`], a scalar carries the tolerance that decides when two
/// coordinates are "the same" for clipping and deduplication purposes.
pub trait Scalar: Float + Debug + Display + Default + Send + Sync + 'static {
    fn from_num_den(num: i32, den: i32) -> Self;

    /// Relative tolerance for coordinate comparisons.
    fn tolerance() -> Self;

    /// `|a - b| <= tol * max(1, |a|, |b|)`
    fn approx_eq(self, other: Self) -> bool {
        let scale = Self::one().max(self.abs()).max(other.abs());
        (self - other).abs() <= Self::tolerance() * scale
    }
}

impl Scalar for f64 {
    fn from_num_den(num: i32, den: i32) -> Self {
        num as f64 / den as f64
    }

    fn tolerance() -> Self {
        1e-6
    }
}

impl Scalar for f32 {
    fn from_num_den(num: i32, den: i32) -> Self {
        num as f32 / den as f32
    }

    fn tolerance() -> Self {
        1e-5
    }
}

#[cfg(test)]
mod tests {
    use super::Scalar;

    #[test]
    fn approx_eq_is_relative_for_large_values() {
        assert!(1_000_000.0_f64.approx_eq(1_000_000.5));
        assert!(!1_000_000.0_f64.approx_eq(1_000_010.0));
    }

    #[test]
    fn approx_eq_is_absolute_near_zero() {
        assert!(0.0_f64.approx_eq(5e-7));
        assert!(!0.0_f64.approx_eq(5e-6));
        assert!(0.0_f32.approx_eq(5e-6));
    }

    #[test]
    fn from_num_den() {
        assert_eq!(f64::from_num_den(1, 100), 0.01);
        assert_eq!(f32::from_num_den(1, 2), 0.5);
    }
}
