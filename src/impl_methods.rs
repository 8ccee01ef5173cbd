// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use num_traits::Zero;

use crate::dimension;
use crate::imp_prelude::*;
use crate::indexes::Indices;

impl<A> Array<A> {
    /// Return the total number of elements in the array.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Return `true` if the array has no elements.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Return the shape of the array as a slice.
    pub fn shape(&self) -> &[Ix] {
        &self.dim
    }

    /// Return the strides of the array.
    ///
    /// There is one more stride than there are axes; see the
    /// [crate documentation](index.html).
    pub fn strides(&self) -> &[Ix] {
        &self.strides
    }

    /// Return the number of dimensions (axes) in the array
    pub fn ndim(&self) -> usize {
        self.dim.len()
    }

    /// Return the number of elements spanned by `axes`.
    ///
    /// With no axes this is the number of elements in the array, otherwise it
    /// is the product of the lengths of the given axes.
    ///
    /// **Panics** if an axis is out of bounds.
    ///
    /// ```
    /// use ndarray_lite::Arrf;
    ///
    /// let a = Arrf::zeros(&[2, 3, 4]).unwrap();
    /// assert_eq!(a.count(&[]), 24);
    /// assert_eq!(a.count(&[0, 2]), 8);
    /// ```
    pub fn count(&self, axes: &[usize]) -> usize {
        if axes.is_empty() {
            return self.strides[0];
        }
        axes.iter().map(|&axis| self.dim[axis]).product()
    }

    /// Return the array's data as a slice, in row-major order.
    pub fn values(&self) -> &[A] {
        &self.data
    }

    /// Return the array's data as a mutable slice, in row-major order.
    pub fn values_mut(&mut self) -> &mut [A] {
        &mut self.data
    }

    /// Consume the array and return its data in row-major order.
    pub fn into_raw_vec(self) -> Vec<A> {
        self.data
    }

    /// Return an iterator of the indices of the array, in row-major order.
    pub fn indices(&self) -> Indices {
        Indices::new(self.dim.clone())
    }

    /// Return the offset into the data of the element at `index`.
    ///
    /// `index` may be shorter than the number of axes; the missing trailing
    /// components count as zero.
    fn index_offset(&self, index: &[Ix]) -> Result<usize, ArrayError> {
        if index.len() > self.dim.len() {
            return Err(error::out_of_bounds("index is longer than the shape"));
        }
        if index.iter().zip(&self.dim).any(|(&i, &d)| i >= d) {
            return Err(error::out_of_bounds("index value out of range"));
        }
        // a partial index into an array with a zero-length axis names no element
        let offset = dimension::stride_offset(index, &self.strides);
        if offset >= self.data.len() {
            return Err(error::out_of_bounds("index addresses no element"));
        }
        Ok(offset)
    }

    /// Return a mutable reference to the element at `index`.
    ///
    /// **Errors** like [`Array::at`].
    pub fn get_mut(&mut self, index: &[Ix]) -> Result<&mut A, ArrayError> {
        let offset = self.index_offset(index)?;
        Ok(&mut self.data[offset])
    }

    /// Set the element at `index` to `value`, returning the array again for
    /// chained calls.
    ///
    /// **Errors** like [`Array::at`]; the array is unchanged on error.
    ///
    /// ```
    /// use ndarray_lite::Arrf;
    ///
    /// let mut a = Arrf::zeros(&[2, 2]).unwrap();
    /// a.set(1., &[0, 1]).unwrap().set(2., &[1, 0]).unwrap();
    /// assert_eq!(a.values(), &[0., 1., 2., 0.]);
    /// ```
    pub fn set(&mut self, value: A, index: &[Ix]) -> Result<&mut Self, ArrayError> {
        *self.get_mut(index)? = value;
        Ok(self)
    }

    /// Transform the array into `shape`; any shape with the same number of
    /// elements is accepted.
    ///
    /// Only the shape and strides change: the data keeps its order and is
    /// not copied. Returns the array again for chained calls.
    ///
    /// **Errors** if the shapes don't have the same number of elements; the
    /// array is unchanged on error.
    ///
    /// ```
    /// use ndarray_lite::Arrf;
    ///
    /// let mut a = Arrf::arange(&[6]).unwrap();
    /// a.reshape(&[2, 3]).unwrap();
    /// assert_eq!(a.strides(), &[6, 3, 1]);
    /// assert_eq!(a.at(&[1, 0]), Ok(3.));
    /// ```
    pub fn reshape(&mut self, shape: &[Ix]) -> Result<&mut Self, ArrayError> {
        if dimension::size_of_shape_checked(shape) != Some(self.len()) {
            return Err(error::incompatible_shape(
                "new shape length does not equal the array length",
            ));
        }
        self.dim = shape.to_vec();
        self.strides = dimension::default_strides(&self.dim);
        Ok(self)
    }
}

impl<A> Array<A>
where
    A: Copy,
{
    /// Return the element at `index`.
    ///
    /// `index` may have fewer components than the array has axes. The
    /// missing trailing components are taken as zero, so a partial index
    /// gives the **first element** of the sub-array it names, not the
    /// sub-array itself.
    ///
    /// **Errors** with `OutOfBounds` if `index` is longer than the number of
    /// axes or any component is past the end of its axis.
    ///
    /// ```
    /// use ndarray_lite::Arrf;
    ///
    /// let a = Arrf::new(Some(&[1., 2., 3., 4., 5., 6.][..]), &[2, 3]).unwrap();
    /// assert_eq!(a.at(&[1, 2]), Ok(6.));
    /// assert_eq!(a.at(&[1]), Ok(4.));
    /// assert!(a.at(&[2, 0]).is_err());
    /// assert!(a.at(&[0, 0, 0]).is_err());
    /// ```
    pub fn at(&self, index: &[Ix]) -> Result<A, ArrayError> {
        let offset = self.index_offset(index)?;
        Ok(self.data[offset])
    }

    /// Another name for [`Array::at`].
    pub fn get(&self, index: &[Ix]) -> Result<A, ArrayError> {
        self.at(index)
    }
}

impl<A> Array<A>
where
    A: Clone,
{
    /// Return an independent copy of the array.
    pub fn copy(&self) -> Array<A> {
        self.clone()
    }

    /// Return a one-dimensional copy of the array's data.
    pub fn flatten(&self) -> Array<A> {
        Array::from_vec(self.data.clone())
    }

    /// Return a transposed copy of the array.
    ///
    /// With an empty `axes`, the order of the axes is reversed. Otherwise
    /// `axes` must name every axis exactly once, and axis `j` of the result
    /// is axis `axes[j]` of `self`.
    ///
    /// The result always owns new data, laid out in row-major order for its
    /// own shape.
    ///
    /// **Errors** with `IncompatibleDimension` if `axes` is neither empty nor
    /// a permutation of the array's axes.
    ///
    /// ```
    /// use ndarray_lite::Arrf;
    ///
    /// let a = Arrf::new(Some(&[1., 2., 3., 4., 5., 6.][..]), &[2, 3]).unwrap();
    /// let t = a.transpose(&[]).unwrap();
    /// assert_eq!(t.shape(), &[3, 2]);
    /// assert_eq!(t.values(), &[1., 4., 2., 5., 3., 6.]);
    /// ```
    pub fn transpose(&self, axes: &[usize]) -> Result<Array<A>, ArrayError>
    where
        A: Zero,
    {
        let n = self.ndim();
        let perm: Vec<usize> = if axes.is_empty() {
            (0..n).rev().collect()
        } else if axes.len() == n {
            let mut seen = vec![false; n];
            for &axis in axes {
                if axis >= n || seen[axis] {
                    return Err(error::incompatible_dimension(
                        "axes must name every axis exactly once",
                    ));
                }
                seen[axis] = true;
            }
            axes.to_vec()
        } else {
            return Err(error::incompatible_dimension(
                "axes length does not equal the number of dimensions",
            ));
        };

        let dim: Vec<Ix> = perm.iter().map(|&axis| self.dim[axis]).collect();
        let mut transposed = Array::from_shape_vec_unchecked(dim, vec![A::zero(); self.len()]);

        let mut dst_index = vec![0; n];
        for src_index in self.indices() {
            for (dst, &axis) in dst_index.iter_mut().zip(&perm) {
                *dst = src_index[axis];
            }
            let src = dimension::stride_offset(&src_index, &self.strides);
            let dst = dimension::stride_offset(&dst_index, &transposed.strides);
            transposed.data[dst] = self.data[src].clone();
        }
        Ok(transposed)
    }
}
