// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
#![doc(html_root_url = "https://docs.rs/ndarray-lite/0.1/")]

//! The `ndarray-lite` crate provides the [`Array`] type, a small
//! *n*-dimensional numerical container similar to numpy's ndarray.
//!
//! - Owned, row-major (C order) storage; every array owns its buffer.
//! - Construction from flat data with an optionally inferred axis, plus the
//!   usual generators: [`Array::zeros`], [`Array::ones`], [`Array::full`],
//!   [`Array::eye`], [`Array::arange`] and [`Array::linspace`].
//! - Checked element access by (possibly partial) multi-index, in-place
//!   [`reshape`](Array::reshape) and materializing
//!   [`transpose`](Array::transpose).
//! - There are no views: transposing and flattening always copy.
//!
//! ## Strides
//!
//! An array with `n` axes carries `n + 1` strides. `strides[n]` is always
//! `1`, `strides[i] = strides[i + 1] * shape[i]`, and so `strides[0]` is the
//! number of elements. Index `i` along axis `k` is found `i * strides[k + 1]`
//! elements into the data.
//!
//! ```
//! use ndarray_lite::prelude::*;
//!
//! let mut a = Arrf::new(Some(&[1., 2., 3., 4., 5., 6.][..]), &[-1, 3]).unwrap();
//! assert_eq!(a.shape(), &[2, 3]);
//! assert_eq!(a.strides(), &[6, 3, 1]);
//! assert_eq!(a.at(&[1, 2]), Ok(6.));
//!
//! a.reshape(&[3, 2]).unwrap();
//! assert_eq!(a.at(&[2, 0]), Ok(5.));
//!
//! let t = a.transpose(&[]).unwrap();
//! assert_eq!(t.shape(), &[2, 3]);
//! assert_eq!(t.values(), &[1., 3., 5., 2., 4., 6.]);
//! ```
//!
//! ## Crate feature flags
//!
//! - `approx`: implementations of the `approx` crate's comparison traits for
//!   arrays.

pub use crate::error::{ArrayError, ErrorKind};
pub use crate::free_functions::*;
pub use crate::indexes::{indices, Indices};
pub use crate::linspace::Linspace;

mod array_approx;
mod arrayformat;
mod arraytraits;
pub mod dimension;
mod error;
mod free_functions;
mod impl_constructors;
mod impl_methods;
mod indexes;
pub mod linspace;
pub mod prelude;

/// Array index type
pub type Ix = usize;

/// An *n*-dimensional array with owned, row-major storage.
///
/// The array holds a flat data buffer together with its shape and strides.
/// `data.len()` always equals the product of the shape; the canonical empty
/// array has shape `[0]` and strides `[0, 1]`.
///
/// See the [crate documentation](index.html) for the stride convention.
#[derive(Clone)]
pub struct Array<A> {
    data: Vec<A>,
    dim: Vec<Ix>,
    strides: Vec<Ix>,
}

/// An array of `f64`.
pub type Arrf = Array<f64>;

mod imp_prelude {
    pub(crate) use crate::error::{self, ArrayError};
    pub(crate) use crate::{Array, Ix};
}
