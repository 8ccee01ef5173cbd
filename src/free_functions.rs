// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! numpy-style free functions, all producing [`Arrf`].

use crate::imp_prelude::*;
use crate::Arrf;

/// Create an array from optional flat `data` and an optional `shape`, with at
/// most one negative (inferred) axis.
///
/// See [`Array::new`].
///
/// ```
/// use ndarray_lite::array;
///
/// let a = array(Some(&[1., 2., 3., 4., 5., 6.][..]), &[2, -1]).unwrap();
/// assert_eq!(a.shape(), &[2, 3]);
/// ```
pub fn array(data: Option<&[f64]>, shape: &[isize]) -> Result<Arrf, ArrayError> {
    Array::new(data, shape)
}

/// Create a one-dimensional array of integer values. See [`Array::arange`].
///
/// ```
/// use ndarray_lite::arange;
///
/// assert_eq!(arange(&[-2, 2]).unwrap().values(), &[-2., -1., 0., 1.]);
/// ```
pub fn arange(vals: &[i64]) -> Result<Arrf, ArrayError> {
    Array::arange(vals)
}

/// Create `num` evenly spaced values over `[start, stop]`. See
/// [`Array::linspace`].
pub fn linspace(start: f64, stop: f64, num: usize) -> Arrf {
    Array::linspace(start, stop, num)
}

/// Create an array filled with `value`. See [`Array::full`].
pub fn full(value: f64, shape: &[Ix]) -> Result<Arrf, ArrayError> {
    Array::full(value, shape)
}

/// Create an array of ones. See [`Array::ones`].
pub fn ones(shape: &[Ix]) -> Result<Arrf, ArrayError> {
    Array::ones(shape)
}

/// Create an array of zeros. See [`Array::zeros`].
pub fn zeros(shape: &[Ix]) -> Result<Arrf, ArrayError> {
    Array::zeros(shape)
}

/// Create an array of ones shaped like `a`.
pub fn ones_like<A>(a: &Array<A>) -> Arrf {
    Array::ones_like(a)
}

/// Create an array of zeros shaped like `a`.
pub fn zeros_like<A>(a: &Array<A>) -> Arrf {
    Array::zeros_like(a)
}

/// Create an `n × n` identity matrix. See [`Array::eye`].
///
/// ```
/// use ndarray_lite::eye;
///
/// let e = eye(3);
/// assert_eq!(e.shape(), &[3, 3]);
/// assert_eq!(e.at(&[2, 2]), Ok(1.));
/// assert_eq!(e.at(&[2, 1]), Ok(0.));
/// ```
pub fn eye(n: Ix) -> Arrf {
    Array::eye(n)
}

/// Another name for [`eye`].
pub fn identity(n: Ix) -> Arrf {
    Array::identity(n)
}
