// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use crate::imp_prelude::*;

/// Return `true` if the array shapes and all elements of `self` and
/// `other` are equal. Return `false` otherwise.
impl<A, B> PartialEq<Array<B>> for Array<A>
where
    A: PartialEq<B>,
{
    fn eq(&self, rhs: &Array<B>) -> bool {
        if self.shape() != rhs.shape() {
            return false;
        }
        self.values() == rhs.values()
    }
}

impl<A> Eq for Array<A> where A: Eq {}
