// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Shape and stride arithmetic.
//!
//! Strides use an "ndim + 1" convention: `strides[0]` is the number of
//! elements of the whole array and `strides[ndim]` is always `1`. Moving one
//! step along axis `i` moves `strides[i + 1]` elements in the data.

use num_integer::Integer;

use crate::error::{self, ArrayError};
use crate::Ix;

/// Return the number of elements of an array with `shape`.
///
/// The empty shape has one element.
#[inline]
pub fn size_of_shape(shape: &[Ix]) -> usize {
    shape.iter().product()
}

/// Return the number of elements of an array with `shape`, or `None` if it
/// would overflow `usize`.
pub fn size_of_shape_checked(shape: &[Ix]) -> Option<usize> {
    shape
        .iter()
        .try_fold(1usize, |acc, &d| acc.checked_mul(d))
}

/// Compute default (row-major) array strides.
///
/// Shape (a, b, c) => Give strides (a * b * c, b * c, c, 1)
pub fn default_strides(shape: &[Ix]) -> Vec<Ix> {
    let mut strides = vec![0; shape.len() + 1];
    let mut cum_prod = 1;
    strides[shape.len()] = cum_prod;
    for (rs, &dim) in strides.iter_mut().rev().skip(1).zip(shape.iter().rev()) {
        cum_prod *= dim;
        *rs = cum_prod;
    }
    strides
}

/// Resolve a shape that may contain one negative (inferred) axis against a
/// data length of `len`.
///
/// The inferred axis takes whatever size makes the shape hold exactly `len`
/// elements.
///
/// **Errors** if more than one axis is negative, if an axis is zero, or if
/// `len` does not fill the shape exactly.
pub fn infer_shape(len: usize, shape: &[isize]) -> Result<Vec<Ix>, ArrayError> {
    let mut wildcard = None;
    let mut dim = Vec::with_capacity(shape.len());
    for (axis, &s) in shape.iter().enumerate() {
        if s < 0 {
            if wildcard.is_some() {
                return Err(error::incompatible_shape(
                    "shape can only have one negative dimension",
                ));
            }
            wildcard = Some(axis);
            dim.push(1);
        } else {
            dim.push(s as Ix);
        }
    }

    let known = size_of_shape_checked(&dim).ok_or_else(|| {
        error::incompatible_shape("shape too large, number of elements overflows usize")
    })?;
    if known == 0 {
        return Err(error::incompatible_shape("shape has a zero-length axis"));
    }
    if len < known {
        return Err(error::incompatible_shape(
            "data length is shorter than shape length",
        ));
    }
    let (inferred, rem) = Integer::div_rem(&len, &known);
    if rem != 0 {
        return Err(error::incompatible_shape(
            "data length cannot be divided by shape length",
        ));
    }
    match wildcard {
        Some(axis) => dim[axis] = inferred,
        None if inferred != 1 => {
            return Err(error::incompatible_shape(
                "data length does not equal shape length",
            ));
        }
        None => {}
    }
    Ok(dim)
}

/// Advance `index` to the next multi-index of `shape` in row-major order.
///
/// The last axis is incremented first; an axis that reaches its bound is
/// reset to zero and carries into the axis before it, like an odometer.
/// Return `false` when the index wraps around past the last element, in
/// which case `index` is back to all zeros.
pub fn next_for(shape: &[Ix], index: &mut [Ix]) -> bool {
    debug_assert_eq!(shape.len(), index.len());
    for (&dim, ix) in shape.iter().rev().zip(index.iter_mut().rev()) {
        *ix += 1;
        if *ix == dim {
            *ix = 0;
        } else {
            return true;
        }
    }
    false
}

/// Return the offset of `index` into row-major data with `strides`.
///
/// Only the axes covered by `index` contribute.
#[inline]
pub fn stride_offset(index: &[Ix], strides: &[Ix]) -> usize {
    index
        .iter()
        .zip(&strides[1..])
        .map(|(&i, &s)| i * s)
        .sum()
}
