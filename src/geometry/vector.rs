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

use std::array::from_fn;

use crate::numeric::scalar::Scalar;

pub trait VectorOps<T: Scalar, const N: usize>: Sized {
    type Cross;

    fn dot(&self, other: &Self) -> T;
    fn cross(&self, other: &Self) -> Self::Cross;
    fn norm(&self) -> T;
    fn scale(&self, s: T) -> Self;
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Vector<T: Scalar, const N: usize> {
    pub coords: [T; N],
}

impl<T: Scalar, const N: usize> Vector<T, N> {
    pub fn zero() -> Self {
        Vector {
            coords: [T::zero(); N],
        }
    }

    fn dot_n(&self, other: &Self) -> T {
        self.coords
            .iter()
            .zip(other.coords.iter())
            .fold(T::zero(), |acc, (a, b)| acc + *a * *b)
    }

    fn scale_n(&self, s: T) -> Self {
        Vector {
            coords: from_fn(|i| self.coords[i] * s),
        }
    }
}

impl<T: Scalar> Vector<T, 2> {
    pub fn new(x: T, y: T) -> Self {
        Vector { coords: [x, y] }
    }
}

impl<T: Scalar> Vector<T, 3> {
    pub fn new(x: T, y: T, z: T) -> Self {
        Vector { coords: [x, y, z] }
    }
}

impl<T: Scalar> VectorOps<T, 2> for Vector<T, 2> {
    type Cross = T;

    fn dot(&self, other: &Self) -> T {
        self.dot_n(other)
    }

    /// z-component of the 3D cross product; twice the signed area spanned.
    fn cross(&self, other: &Self) -> T {
        self.coords[0] * other.coords[1] - self.coords[1] * other.coords[0]
    }

    fn norm(&self) -> T {
        self.dot_n(self).sqrt()
    }

    fn scale(&self, s: T) -> Self {
        self.scale_n(s)
    }
}

impl<T: Scalar> VectorOps<T, 3> for Vector<T, 3> {
    type Cross = Vector<T, 3>;

    fn dot(&self, other: &Self) -> T {
        self.dot_n(other)
    }

    fn cross(&self, other: &Self) -> Vector<T, 3> {
        let [ax, ay, az] = self.coords;
        let [bx, by, bz] = other.coords;
        Vector {
            coords: [ay * bz - az * by, az * bx - ax * bz, ax * by - ay * bx],
        }
    }

    fn norm(&self) -> T {
        self.dot_n(self).sqrt()
    }

    fn scale(&self, s: T) -> Self {
        self.scale_n(s)
    }
}

pub type Vector2<T> = Vector<T, 2>;
pub type Vector3<T> = Vector<T, 3>;
