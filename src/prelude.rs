// Copyright 2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! ndarray-lite prelude.
//!
//! This module contains the most used types, type aliases and functions that
//! you can import easily as a group.
//!
//! ```
//! use ndarray_lite::prelude::*;
//!
//! let a = zeros(&[2, 2]).unwrap();
//! assert_eq!(a.ndim(), 2);
//! ```

#[doc(no_inline)]
pub use crate::{Array, Arrf, ArrayError, ErrorKind, Ix};

#[doc(no_inline)]
pub use crate::{arange, array, eye, full, identity, linspace, ones, ones_like, zeros, zeros_like};
