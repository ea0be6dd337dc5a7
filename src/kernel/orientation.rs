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
    geometry::{
        point::{Point2, PointOps},
        vector::VectorOps,
    },
    numeric::scalar::Scalar,
};

/// Twice the signed area of `(a, b, c)`: positive when counter-clockwise,
/// negative when clockwise, zero when collinear.
pub fn orient2d<T: Scalar>(a: &Point2<T>, b: &Point2<T>, c: &Point2<T>) -> T {
    a.vector_to(b).cross(&a.vector_to(c))
}

/// Signed distance of `p` from the directed line `a -> b`, positive on the left.
/// Falls back to the raw orientation when `a == b`.
pub fn signed_distance<T: Scalar>(a: &Point2<T>, b: &Point2<T>, p: &Point2<T>) -> T {
    let len = a.vector_to(b).norm();
    let o = orient2d(a, b, p);
    if len.is_zero() { o } else { o / len }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ccw_test() {
        let a = Point2::new(0.0, 0.0);
        let b = Point2::new(1.0, 0.0);
        let c = Point2::new(0.0, 1.0);

        assert!(orient2d(&a, &b, &c) > 0.0); // Counter-clockwise
        assert!(orient2d(&a, &c, &b) < 0.0);
    }

    #[test]
    fn collinear_is_zero() {
        let a = Point2::new(0.0, 0.0);
        let b = Point2::new(1.0, 1.0);
        let c = Point2::new(3.0, 3.0);
        assert_eq!(orient2d(&a, &b, &c), 0.0);
    }

    #[test]
    fn signed_distance_is_normalized() {
        let a = Point2::new(0.0, 0.0);
        let b = Point2::new(10.0, 0.0);
        assert_eq!(signed_distance(&a, &b, &Point2::new(3.0, 2.0)), 2.0);
        assert_eq!(signed_distance(&a, &b, &Point2::new(3.0, -0.5)), -0.5);
    }
}
