// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use num_integer::Integer;
use num_traits::Float;

use crate::error::{self, ArrayError};

/// An iterator of a sequence of evenly spaced floats.
///
/// Iterator element type is `F`.
#[derive(Clone, Debug)]
pub struct Linspace<F> {
    start: F,
    step: F,
    index: usize,
    len: usize,
}

impl<F> Iterator for Linspace<F>
where
    F: Float,
{
    type Item = F;

    #[inline]
    fn next(&mut self) -> Option<F> {
        if self.index >= self.len {
            None
        } else {
            // Calculate the value just like numpy.linspace does
            let i = F::from(self.index)?;
            self.index += 1;
            Some(self.start + self.step * i)
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.len - self.index;
        (n, Some(n))
    }
}

impl<F> DoubleEndedIterator for Linspace<F>
where
    F: Float,
{
    #[inline]
    fn next_back(&mut self) -> Option<F> {
        if self.index >= self.len {
            None
        } else {
            // Calculate the value just like numpy.linspace does
            let i = F::from(self.len - 1)?;
            self.len -= 1;
            Some(self.start + self.step * i)
        }
    }
}

impl<F> ExactSizeIterator for Linspace<F> where Linspace<F>: Iterator {}

/// Return an iterator of evenly spaced floats.
///
/// The `Linspace` has `n` elements, where the first
/// element is `a` and the last element is `b`. The sequence
/// descends when `b < a`.
///
/// With `n == 1` the only element is `a`.
///
/// Iterator element type is `F`, where `F` must be
/// either `f32` or `f64`.
///
/// ```
/// use ndarray_lite::linspace::linspace;
///
/// let v: Vec<f64> = linspace(10., 0., 3).collect();
/// assert_eq!(v, vec![10., 5., 0.]);
/// ```
#[inline]
pub fn linspace<F>(a: F, b: F, n: usize) -> Linspace<F>
where
    F: Float,
{
    let step = match F::from(n) {
        Some(nf) if n > 1 => (b - a) / (nf - F::one()),
        _ => F::zero(),
    };
    Linspace {
        start: a,
        step,
        index: 0,
        len: n,
    }
}

/// Return an iterator of the integer-valued sequence described by the
/// `arange` arguments `vals`.
///
/// * `[stop]`: from `0` towards `stop` in unit steps, `stop` excluded. The
///   sequence counts down when `stop <= 0`.
/// * `[start, stop]`: from `start` towards `stop` in unit steps, `stop`
///   excluded.
/// * `[start, stop, step, ..]`: from `start` towards `stop` by `step`, `stop`
///   excluded. Arguments past the third are ignored.
///
/// **Errors** with `InvalidParameter` if `vals` is empty, if the sign of
/// `step` disagrees with the direction from `start` to `stop`, or if a value
/// cannot be represented by `F`.
pub fn arange<F>(vals: &[i64]) -> Result<Linspace<F>, ArrayError>
where
    F: Float,
{
    let (start, stop, step) = match *vals {
        [] => return Err(error::invalid_parameter("arange needs at least a stop value")),
        [n] if n <= 0 => (0, n, -1),
        [n] => (0, n, 1),
        [start, stop] if stop < start => (start, stop, -1),
        [start, stop] => (start, stop, 1),
        [start, stop, step, ..] => {
            if stop < start && step >= 0 {
                return Err(error::invalid_parameter("increment should be negative"));
            }
            if stop >= start && step <= 0 {
                return Err(error::invalid_parameter("increment should be positive"));
            }
            (start, stop, step)
        }
    };

    // pull `stop` one unit towards `start`, so that it is excluded
    let (start, stop, step) = (start as i128, stop as i128, step as i128);
    let stop = if step < 0 { stop + 1 } else { stop - 1 };
    let steps = Integer::div_floor(&(stop - start), &step);
    let len = if steps < 0 {
        0
    } else {
        usize::try_from(steps + 1)
            .map_err(|_| error::invalid_parameter("arange sequence is too long"))?
    };

    let cast = |v: i128| {
        F::from(v).ok_or_else(|| error::invalid_parameter("value does not fit the element type"))
    };
    Ok(Linspace {
        start: cast(start)?,
        step: cast(step)?,
        index: 0,
        len,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    use approx::assert_abs_diff_eq;

    fn ar(vals: &[i64]) -> Vec<f64> {
        arange(vals).unwrap().collect()
    }

    #[test]
    fn arange_one_argument() {
        assert_eq!(ar(&[5]), vec![0., 1., 2., 3., 4.]);
        assert_eq!(ar(&[1]), vec![0.]);
        assert_eq!(ar(&[-3]), vec![0., -1., -2.]);
        assert!(ar(&[0]).is_empty());
    }

    #[test]
    fn arange_two_arguments() {
        assert_eq!(ar(&[5, 1]), vec![5., 4., 3., 2.]);
        assert_eq!(ar(&[-2, 2]), vec![-2., -1., 0., 1.]);
        assert!(ar(&[5, 5]).is_empty());
    }

    #[test]
    fn arange_with_step() {
        assert_eq!(ar(&[0, 10, 3]), vec![0., 3., 6., 9.]);
        assert_eq!(ar(&[0, 9, 3]), vec![0., 3., 6.]);
        assert_eq!(ar(&[10, 0, -3]), vec![10., 7., 4., 1.]);
        assert_eq!(ar(&[1, 2, 5]), vec![1.]);
        // extra arguments are ignored
        assert_eq!(ar(&[0, 4, 2, 100, 7]), vec![0., 2.]);
    }

    #[test]
    fn arange_bad_step() {
        let kind = |vals: &[i64]| arange::<f64>(vals).unwrap_err().kind();
        assert_eq!(kind(&[]), ErrorKind::InvalidParameter);
        assert_eq!(kind(&[0, 10, -1]), ErrorKind::InvalidParameter);
        assert_eq!(kind(&[10, 0, 1]), ErrorKind::InvalidParameter);
        assert_eq!(kind(&[0, 10, 0]), ErrorKind::InvalidParameter);
        assert_eq!(kind(&[3, 3, 0]), ErrorKind::InvalidParameter);
    }

    #[test]
    fn linspace_endpoints() {
        let v: Vec<f64> = linspace(0., 10., 5).collect();
        assert_eq!(v, vec![0., 2.5, 5., 7.5, 10.]);
        let v: Vec<f64> = linspace(1., 0., 3).collect();
        assert_eq!(v, vec![1., 0.5, 0.]);
    }

    #[test]
    fn linspace_degenerate() {
        let v: Vec<f64> = linspace(3., 7., 1).collect();
        assert_eq!(v, vec![3.]);
        assert_eq!(linspace(3., 7., 0).count(), 0);
    }

    #[test]
    fn linspace_reversed_iteration() {
        let fwd: Vec<f32> = linspace(-1., 1., 9).collect();
        let mut back: Vec<f32> = linspace(-1., 1., 9).rev().collect();
        back.reverse();
        for (a, b) in fwd.iter().zip(&back) {
            assert_abs_diff_eq!(a, b, epsilon = 1e-6);
        }
        assert_abs_diff_eq!(fwd[4], 0., epsilon = 1e-6);
    }
}
