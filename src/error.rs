// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use std::error::Error;
use std::fmt;

/// An error from constructing, indexing, reshaping or transposing an array.
///
/// Every error is a violated precondition of the call that produced it; the
/// array the call was made on is left unchanged.
#[derive(Clone, Debug)]
pub struct ArrayError {
    // we want to be able to change this representation later
    repr: ErrorKind,
    detail: &'static str,
}

impl ArrayError {
    /// Return the `ErrorKind` of this error.
    #[inline]
    pub fn kind(&self) -> ErrorKind {
        self.repr
    }

    /// Return a short description of the violated condition.
    #[inline]
    pub fn detail(&self) -> &'static str {
        self.detail
    }
}

/// Error code for an error produced by this crate.
///
/// This enumeration is not exhaustive. The representation of the enum
/// is not guaranteed.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[non_exhaustive]
pub enum ErrorKind {
    /// shape does not agree with the data length, is not positive,
    /// or has more than one inferred axis
    IncompatibleShape,
    /// malformed arguments to a sequence generator
    InvalidParameter,
    /// index component out of bounds, or more components than axes
    OutOfBounds,
    /// axis list does not match the number of dimensions
    IncompatibleDimension,
}

impl ErrorKind {
    fn description(self) -> &'static str {
        match self {
            ErrorKind::IncompatibleShape => "incompatible shape",
            ErrorKind::InvalidParameter => "invalid parameter",
            ErrorKind::OutOfBounds => "index out of bounds",
            ErrorKind::IncompatibleDimension => "incompatible dimension",
        }
    }
}

#[inline(always)]
pub(crate) fn from_kind(k: ErrorKind, detail: &'static str) -> ArrayError {
    ArrayError { repr: k, detail }
}

#[inline]
pub(crate) fn incompatible_shape(detail: &'static str) -> ArrayError {
    from_kind(ErrorKind::IncompatibleShape, detail)
}

#[inline]
pub(crate) fn invalid_parameter(detail: &'static str) -> ArrayError {
    from_kind(ErrorKind::InvalidParameter, detail)
}

#[inline]
pub(crate) fn out_of_bounds(detail: &'static str) -> ArrayError {
    from_kind(ErrorKind::OutOfBounds, detail)
}

#[inline]
pub(crate) fn incompatible_dimension(detail: &'static str) -> ArrayError {
    from_kind(ErrorKind::IncompatibleDimension, detail)
}

impl PartialEq for ArrayError {
    #[inline(always)]
    fn eq(&self, rhs: &Self) -> bool {
        self.repr == rhs.repr
    }
}

impl Error for ArrayError {}

impl fmt::Display for ArrayError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}: {}", self.repr.description(), self.detail)
    }
}
