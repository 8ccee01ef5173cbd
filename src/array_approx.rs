// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

#[cfg(feature = "approx")]
mod approx_methods {
    use crate::Array;

    impl<A> Array<A> {
        /// A test for equality that uses the elementwise absolute difference to compute the
        /// approximate equality of two arrays.
        ///
        /// **Requires crate feature `"approx"`**
        pub fn abs_diff_eq<B>(&self, other: &Array<B>, epsilon: A::Epsilon) -> bool
        where
            A: ::approx::AbsDiffEq<B>,
            A::Epsilon: Clone,
        {
            <Self as ::approx::AbsDiffEq<_>>::abs_diff_eq(self, other, epsilon)
        }

        /// A test for equality that uses an elementwise relative comparison if the values are far
        /// apart; and the absolute difference otherwise.
        ///
        /// **Requires crate feature `"approx"`**
        pub fn relative_eq<B>(
            &self,
            other: &Array<B>,
            epsilon: A::Epsilon,
            max_relative: A::Epsilon,
        ) -> bool
        where
            A: ::approx::RelativeEq<B>,
            A::Epsilon: Clone,
        {
            <Self as ::approx::RelativeEq<_>>::relative_eq(self, other, epsilon, max_relative)
        }
    }
}

#[cfg(feature = "approx")]
mod approx_traits {
    use crate::Array;
    use approx::{AbsDiffEq, RelativeEq, UlpsEq};

    /// **Requires crate feature `"approx"`.**
    impl<A, B> AbsDiffEq<Array<B>> for Array<A>
    where
        A: AbsDiffEq<B>,
        A::Epsilon: Clone,
    {
        type Epsilon = A::Epsilon;

        fn default_epsilon() -> A::Epsilon {
            A::default_epsilon()
        }

        fn abs_diff_eq(&self, other: &Array<B>, epsilon: A::Epsilon) -> bool {
            if self.shape() != other.shape() {
                return false;
            }

            self.values()
                .iter()
                .zip(other.values())
                .all(move |(a, b)| A::abs_diff_eq(a, b, epsilon.clone()))
        }
    }

    /// **Requires crate feature `"approx"`.**
    impl<A, B> RelativeEq<Array<B>> for Array<A>
    where
        A: RelativeEq<B>,
        A::Epsilon: Clone,
    {
        fn default_max_relative() -> A::Epsilon {
            A::default_max_relative()
        }

        fn relative_eq(
            &self,
            other: &Array<B>,
            epsilon: A::Epsilon,
            max_relative: A::Epsilon,
        ) -> bool {
            if self.shape() != other.shape() {
                return false;
            }

            self.values().iter().zip(other.values()).all(move |(a, b)| {
                A::relative_eq(a, b, epsilon.clone(), max_relative.clone())
            })
        }
    }

    /// **Requires crate feature `"approx"`.**
    impl<A, B> UlpsEq<Array<B>> for Array<A>
    where
        A: UlpsEq<B>,
        A::Epsilon: Clone,
    {
        fn default_max_ulps() -> u32 {
            A::default_max_ulps()
        }

        fn ulps_eq(&self, other: &Array<B>, epsilon: A::Epsilon, max_ulps: u32) -> bool {
            if self.shape() != other.shape() {
                return false;
            }

            self.values()
                .iter()
                .zip(other.values())
                .all(move |(a, b)| A::ulps_eq(a, b, epsilon.clone(), max_ulps))
        }
    }

    #[cfg(test)]
    mod tests {
        use crate::Array;
        use approx::{
            assert_abs_diff_eq, assert_abs_diff_ne, assert_relative_eq, assert_relative_ne,
            assert_ulps_eq, assert_ulps_ne,
        };

        fn arr2(rows: [[f32; 2]; 2]) -> Array<f32> {
            Array::from_shape_vec(&[2, 2], rows.concat()).unwrap()
        }

        #[test]
        fn abs_diff_eq() {
            let a = arr2([[0., 2.], [-0.000010001, 100000000.]]);
            let mut b = arr2([[0., 1.], [-0.000010002, 100000001.]]);
            assert_abs_diff_ne!(a, b);
            b.set(2., &[0, 1]).unwrap();
            assert_abs_diff_eq!(a, b);

            // Check epsilon.
            assert_abs_diff_eq!(
                Array::from_vec(vec![0.0f32]),
                Array::from_vec(vec![1e-40f32]),
                epsilon = 1e-40f32
            );
            assert_abs_diff_ne!(
                Array::from_vec(vec![0.0f32]),
                Array::from_vec(vec![1e-40f32]),
                epsilon = 1e-41f32
            );

            // Make sure we can compare different shapes without failure.
            let c = Array::from_shape_vec(&[1, 2], vec![1.0f32, 2.]).unwrap();
            assert_abs_diff_ne!(a, c);
        }

        #[test]
        fn relative_eq() {
            let a = arr2([[1., 2.], [-0.000010001, 100000000.]]);
            let mut b = arr2([[1., 1.], [-0.000010002, 100000001.]]);
            assert_relative_ne!(a, b);
            b.set(2., &[0, 1]).unwrap();
            assert_relative_eq!(a, b);
            assert!(a.relative_eq(&b, 1e-6, 1e-6));
        }

        #[test]
        fn ulps_eq() {
            let a = arr2([[1., 2.], [-0.000010001, 100000000.]]);
            let mut b = arr2([[1., 1.], [-0.000010002, 100000001.]]);
            assert_ulps_ne!(a, b);
            b.set(2., &[0, 1]).unwrap();
            assert_ulps_eq!(a, b);
        }

        #[test]
        fn reshaped_arrays_differ() {
            let a = Array::linspace(0.0f64, 1., 4);
            let mut b = a.clone();
            b.reshape(&[2, 2]).unwrap();
            assert!(!a.abs_diff_eq(&b, 1e-12));
            assert!(a.abs_diff_eq(&b.flatten(), 1e-12));
        }
    }
}
