// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use std::fmt;

use crate::Array;

fn format_row<A, F>(row: &[A], f: &mut fmt::Formatter, format: &mut F) -> fmt::Result
where
    F: FnMut(&A, &mut fmt::Formatter) -> fmt::Result,
{
    f.write_str("[")?;
    for (i, elt) in row.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        format(elt, f)?;
    }
    f.write_str("]")
}

fn format_array<A, F>(array: &Array<A>, f: &mut fmt::Formatter, mut format: F) -> fmt::Result
where
    F: FnMut(&A, &mut fmt::Formatter) -> fmt::Result,
{
    let ndim = array.ndim();
    let data = array.values();
    if data.is_empty() {
        return f.write_str("[]");
    }
    if ndim == 0 {
        return format(&data[0], f);
    }

    // Each row is a run of the last axis. An outer axis opens (or closes) at
    // a row boundary when its stride divides the row's start (or end)
    // offset; strides[ndim - 1] divides every boundary and is the row itself.
    let outer = &array.strides()[..ndim - 1];
    let row_len = array.shape()[ndim - 1];
    for (k, row) in data.chunks(row_len).enumerate() {
        let start = k * row_len;
        let end = start + row_len;
        let opens = outer.iter().filter(|&&s| start % s == 0).count();
        let closes = outer.iter().filter(|&&s| end % s == 0).count();

        for _ in 0..ndim - 1 - opens {
            f.write_str(" ")?;
        }
        for _ in 0..opens {
            f.write_str("[")?;
        }
        format_row(row, f, &mut format)?;
        for _ in 0..closes {
            f.write_str("]")?;
        }
        if end != data.len() {
            f.write_str(",\n")?;
            if closes > 0 {
                f.write_str("\n")?;
            }
        }
    }
    Ok(())
}

/// Format the array using `Display` and apply the formatting parameters used
/// to each element.
///
/// The array is shown in multiline style.
impl<A: fmt::Display> fmt::Display for Array<A> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        format_array(self, f, <_>::fmt)
    }
}

/// Format the array using `Debug` and apply the formatting parameters used
/// to each element.
///
/// The array is shown in multiline style.
impl<A: fmt::Debug> fmt::Debug for Array<A> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        // Add extra information for Debug
        format_array(self, f, <_>::fmt)?;
        write!(f, " shape={:?}, strides={:?}", self.shape(), self.strides())
    }
}

/// Format the array using `LowerExp` and apply the formatting parameters used
/// to each element.
///
/// The array is shown in multiline style.
impl<A: fmt::LowerExp> fmt::LowerExp for Array<A> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        format_array(self, f, <_>::fmt)
    }
}
