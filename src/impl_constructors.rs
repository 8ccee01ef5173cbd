// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Constructor methods for ndarray-lite
//!
use num_traits::{Float, One, Zero};

use crate::dimension;
use crate::imp_prelude::*;
use crate::linspace;

macro_rules! size_checked {
    ($shape:expr) => {
        match dimension::size_of_shape_checked($shape) {
            Some(sz) => sz,
            None => {
                return Err(error::incompatible_shape(
                    "shape too large, number of elements overflows usize",
                ))
            }
        }
    };
}

/// Constructor methods that take ownership of their data.
impl<A> Array<A> {
    /// Create a one-dimensional array from a vector (no copying needed).
    ///
    /// ```rust
    /// use ndarray_lite::Array;
    ///
    /// let array = Array::from_vec(vec![1., 2., 3., 4.]);
    /// assert_eq!(array.shape(), &[4]);
    /// ```
    pub fn from_vec(v: Vec<A>) -> Array<A> {
        Self::from_shape_vec_unchecked(vec![v.len()], v)
    }

    /// Create an array with the given shape from a vector (no copying needed).
    ///
    /// **Errors** if `shape` does not correspond to the number of elements in `v`.
    pub fn from_shape_vec(shape: &[Ix], v: Vec<A>) -> Result<Array<A>, ArrayError> {
        if dimension::size_of_shape_checked(shape) != Some(v.len()) {
            return Err(error::incompatible_shape(
                "data length does not equal shape length",
            ));
        }
        Ok(Self::from_shape_vec_unchecked(shape.to_vec(), v))
    }

    /// Create an array from a vector whose length is known to match `dim`.
    pub(crate) fn from_shape_vec_unchecked(dim: Vec<Ix>, v: Vec<A>) -> Array<A> {
        debug_assert_eq!(dimension::size_of_shape(&dim), v.len());
        Array {
            strides: dimension::default_strides(&dim),
            data: v,
            dim,
        }
    }

    /// Create the empty array: shape `[0]`, strides `[0, 1]`, no elements.
    pub(crate) fn empty() -> Array<A> {
        Self::from_shape_vec_unchecked(vec![0], Vec::new())
    }
}

impl<A> Default for Array<A> {
    /// The empty array.
    fn default() -> Self {
        Array::empty()
    }
}

impl<A> From<Vec<A>> for Array<A> {
    /// Create a one-dimensional array from a vector (no copying needed).
    fn from(v: Vec<A>) -> Self {
        Array::from_vec(v)
    }
}

impl<A> Array<A>
where
    A: Clone,
{
    /// Create an array with copies of `elem`, shape `shape`.
    ///
    /// **Errors** if `shape` is empty, has a zero-length axis, or its
    /// number of elements would overflow usize.
    ///
    /// ```
    /// use ndarray_lite::Array;
    ///
    /// let a = Array::full(1., &[2, 2, 2]).unwrap();
    /// assert_eq!(a.values(), &[1.; 8]);
    /// assert_eq!(a.strides(), &[8, 4, 2, 1]);
    /// ```
    pub fn full(elem: A, shape: &[Ix]) -> Result<Array<A>, ArrayError> {
        if shape.is_empty() {
            return Err(error::incompatible_shape("shape is empty"));
        }
        if shape.contains(&0) {
            return Err(error::incompatible_shape(
                "shape should be positive when data is absent",
            ));
        }
        let size = size_checked!(shape);
        Ok(Self::from_shape_vec_unchecked(shape.to_vec(), vec![elem; size]))
    }
}

impl<A> Array<A>
where
    A: Clone + Zero,
{
    /// Create an array from optional flat `data` and an optional `shape`.
    ///
    /// There are four cases:
    ///
    /// 1. No shape and no data: the empty array (shape `[0]`).
    /// 2. No shape, with data: a one-dimensional array of `data.len()`
    ///    elements.
    /// 3. A shape without data: an array of zeros. Every axis length must be
    ///    positive.
    /// 4. A shape with data: the data is read in row-major order. At most one
    ///    axis may be negative; its length is inferred from `data.len()`.
    ///
    /// The data is always copied, the new array never shares `data`.
    ///
    /// **Errors** with `IncompatibleShape` if the shape has a non-positive
    /// axis when there is no data, more than one negative axis, or does not
    /// fit `data.len()` exactly.
    ///
    /// ```
    /// use ndarray_lite::Array;
    ///
    /// let data = [1., 2., 3., 4., 5., 6.];
    /// let a = Array::new(Some(&data[..]), &[-1, 3]).unwrap();
    /// assert_eq!(a.shape(), &[2, 3]);
    ///
    /// let z = Array::<f64>::new(None, &[2, 2]).unwrap();
    /// assert_eq!(z.values(), &[0.; 4]);
    ///
    /// assert!(Array::new(Some(&data[..]), &[4, -1]).is_err());
    /// ```
    pub fn new(data: Option<&[A]>, shape: &[isize]) -> Result<Array<A>, ArrayError> {
        match (data, shape.is_empty()) {
            (None, true) => Ok(Self::empty()),
            (Some(data), true) => Ok(Self::from_vec(data.to_vec())),
            (None, false) => {
                if shape.iter().any(|&s| s <= 0) {
                    return Err(error::incompatible_shape(
                        "shape should be positive when data is absent",
                    ));
                }
                let dim: Vec<Ix> = shape.iter().map(|&s| s as Ix).collect();
                let size = size_checked!(&dim);
                Ok(Self::from_shape_vec_unchecked(dim, vec![A::zero(); size]))
            }
            (Some(data), false) => {
                let dim = dimension::infer_shape(data.len(), shape)?;
                Ok(Self::from_shape_vec_unchecked(dim, data.to_vec()))
            }
        }
    }

    /// Create an array with zeros, shape `shape`.
    ///
    /// **Errors** like [`Array::full`].
    pub fn zeros(shape: &[Ix]) -> Result<Array<A>, ArrayError> {
        Self::full(A::zero(), shape)
    }

    /// Create an array of zeros with the same shape as `other`.
    pub fn zeros_like<B>(other: &Array<B>) -> Array<A> {
        Self::from_shape_vec_unchecked(other.dim.clone(), vec![A::zero(); other.len()])
    }
}

impl<A> Array<A>
where
    A: Clone + One,
{
    /// Create an array with ones, shape `shape`.
    ///
    /// **Errors** like [`Array::full`].
    pub fn ones(shape: &[Ix]) -> Result<Array<A>, ArrayError> {
        Self::full(A::one(), shape)
    }

    /// Create an array of ones with the same shape as `other`.
    pub fn ones_like<B>(other: &Array<B>) -> Array<A> {
        Self::from_shape_vec_unchecked(other.dim.clone(), vec![A::one(); other.len()])
    }
}

impl<A> Array<A>
where
    A: Clone + Zero + One,
{
    /// Create an identity matrix of size `n` (square 2D array).
    ///
    /// `eye(0)` is the empty array.
    ///
    /// **Panics** if `n * n` would overflow usize.
    ///
    /// ```
    /// use ndarray_lite::Arrf;
    ///
    /// let e = Arrf::eye(2);
    /// assert_eq!(e.values(), &[1., 0., 0., 1.]);
    /// ```
    pub fn eye(n: Ix) -> Array<A> {
        if n == 0 {
            return Self::empty();
        }
        let mut eye = Self::from_shape_vec_unchecked(vec![n, n], vec![A::zero(); n * n]);
        for a_ii in eye.data.iter_mut().step_by(n + 1) {
            *a_ii = A::one();
        }
        eye
    }

    /// Another name for [`Array::eye`].
    pub fn identity(n: Ix) -> Array<A> {
        Self::eye(n)
    }
}

impl<F> Array<F>
where
    F: Float,
{
    /// Create a one-dimensional array of integer values.
    ///
    /// * `arange(&[stop])`: `0, 1, ..` up to, not including, `stop`; or
    ///   `0, -1, ..` down to, not including, `stop` when `stop <= 0`.
    /// * `arange(&[start, stop])`: from `start` towards `stop` in unit steps.
    /// * `arange(&[start, stop, step])`: from `start` towards `stop` by
    ///   `step`. Arguments after the third are ignored.
    ///
    /// An empty range gives the empty array, so `arange(&[0])` and
    /// `arange(&[5, 5])` have no elements rather than wrapping past `stop`.
    ///
    /// **Errors** with `InvalidParameter` if `vals` is empty or the sign of
    /// `step` points away from `stop`.
    ///
    /// ```
    /// use ndarray_lite::Arrf;
    ///
    /// assert_eq!(Arrf::arange(&[5]).unwrap().values(), &[0., 1., 2., 3., 4.]);
    /// assert_eq!(Arrf::arange(&[5, 1]).unwrap().values(), &[5., 4., 3., 2.]);
    /// assert_eq!(Arrf::arange(&[0, 10, 4]).unwrap().values(), &[0., 4., 8.]);
    /// assert!(Arrf::arange(&[5, 5]).unwrap().is_empty());
    /// ```
    pub fn arange(vals: &[i64]) -> Result<Array<F>, ArrayError> {
        let seq: Vec<F> = linspace::arange(vals)?.collect();
        if seq.is_empty() {
            return Ok(Self::empty());
        }
        Ok(Self::from_vec(seq))
    }

    /// Create a one-dimensional array from the inclusive interval
    /// `[start, end]` with `n` elements. `F` must be a floating point type.
    ///
    /// The values descend when `end < start`. With `n == 1` the array holds
    /// only `start`; with `n == 0` it is the empty array.
    ///
    /// ```rust
    /// use ndarray_lite::Arrf;
    ///
    /// let array = Arrf::linspace(0., 1., 5);
    /// assert_eq!(array.values(), &[0.0, 0.25, 0.5, 0.75, 1.0]);
    /// ```
    pub fn linspace(start: F, end: F, n: usize) -> Array<F> {
        if n == 0 {
            return Self::empty();
        }
        Self::from_vec(linspace::linspace(start, end, n).collect())
    }
}
