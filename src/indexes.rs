// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use std::iter::FusedIterator;

use crate::dimension;
use crate::Ix;

/// An iterator of the indexes of an array shape.
///
/// Indexes are produced in row-major order (the last axis varies fastest).
///
/// Iterator element type is `Vec<Ix>`.
#[derive(Clone, Debug)]
pub struct Indices {
    dim: Vec<Ix>,
    index: Option<Vec<Ix>>,
    remaining: usize,
}

/// Create an iterable of the array shape `shape`.
///
/// ```
/// use ndarray_lite::indices;
///
/// let ix: Vec<_> = indices(&[2, 2]).collect();
/// assert_eq!(ix, vec![vec![0, 0], vec![0, 1], vec![1, 0], vec![1, 1]]);
/// ```
pub fn indices(shape: &[Ix]) -> Indices {
    Indices::new(shape.to_vec())
}

impl Indices {
    /// Create an iterator over the array shape `dim`.
    pub fn new(dim: Vec<Ix>) -> Indices {
        let remaining = dimension::size_of_shape(&dim);
        let index = if remaining == 0 {
            None
        } else {
            Some(vec![0; dim.len()])
        };
        Indices {
            dim,
            index,
            remaining,
        }
    }
}

impl Iterator for Indices {
    type Item = Vec<Ix>;

    #[inline]
    fn next(&mut self) -> Option<Vec<Ix>> {
        let index = self.index.as_mut()?;
        let current = index.clone();
        self.remaining -= 1;
        if !dimension::next_for(&self.dim, index) {
            self.index = None;
        }
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Indices {}

impl FusedIterator for Indices {}
