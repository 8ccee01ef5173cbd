use ndarray_lite::prelude::*;

use itertools::Itertools;
use quickcheck::{quickcheck, TestResult};

fn arange_shaped(shape: &[usize]) -> Arrf {
    let len: usize = shape.iter().product();
    let mut a = arange(&[1, len as i64 + 1]).unwrap();
    a.reshape(shape).unwrap();
    a
}

#[test]
fn transpose_matrix() {
    let a = array(Some(&[1., 2., 3., 4., 5., 6.][..]), &[2, 3]).unwrap();
    let t = a.transpose(&[]).unwrap();
    assert_eq!(t.shape(), &[3, 2]);
    assert_eq!(t.values(), &[1., 4., 2., 5., 3., 6.]);
    assert_eq!(t.at(&[2, 1]), Ok(6.));
    // source untouched
    assert_eq!(a.shape(), &[2, 3]);
}

#[test]
fn transpose_one_dimensional() {
    let a = arange(&[4]).unwrap();
    assert_eq!(a.transpose(&[]).unwrap(), a);
    assert_eq!(a.transpose(&[0]).unwrap(), a);
}

#[test]
fn transpose_permutes_every_index() {
    let a = arange_shaped(&[2, 3, 4]);
    let perm = [1, 2, 0];
    let t = a.transpose(&perm).unwrap();
    assert_eq!(t.shape(), &[3, 4, 2]);
    for ix in a.indices() {
        let tix: Vec<usize> = perm.iter().map(|&p| ix[p]).collect();
        assert_eq!(t.at(&tix), a.at(&ix));
    }
}

#[test]
fn transpose_reverse_default() {
    let a = arange_shaped(&[2, 3, 4]);
    assert_eq!(a.transpose(&[]).unwrap(), a.transpose(&[2, 1, 0]).unwrap());
}

#[test]
fn transpose_wrong_axis_count() {
    let a = arange_shaped(&[2, 3, 4]);
    for axes in [&[0][..], &[0, 1][..], &[0, 1, 2, 3][..]] {
        assert_eq!(
            a.transpose(axes).unwrap_err().kind(),
            ErrorKind::IncompatibleDimension
        );
    }
}

#[test]
fn transpose_owns_new_data() {
    let a = arange_shaped(&[2, 2]);
    let mut t = a.transpose(&[]).unwrap();
    t.set(0., &[0, 0]).unwrap();
    assert_eq!(a.at(&[0, 0]), Ok(1.));
}

fn inverse(perm: &[usize]) -> Vec<usize> {
    let mut inv = vec![0; perm.len()];
    for (j, &p) in perm.iter().enumerate() {
        inv[p] = j;
    }
    inv
}

quickcheck! {
    fn transpose_round_trip(shape: Vec<u8>, rotate: usize) -> TestResult {
        if shape.is_empty() || shape.len() > 4 {
            return TestResult::discard();
        }
        let shape: Vec<usize> = shape.iter().map(|&s| s as usize % 4 + 1).collect();
        let a = arange_shaped(&shape);
        let n = shape.len();

        // try every permutation of small arrays, offset by `rotate`
        let perms: Vec<Vec<usize>> = (0..n).permutations(n).collect();
        let perm = &perms[rotate % perms.len()];

        let t = a.transpose(perm).unwrap();
        let back = t.transpose(&inverse(perm)).unwrap();
        TestResult::from_bool(back == a)
    }

    fn at_equals_get(shape: Vec<u8>) -> TestResult {
        if shape.len() > 4 {
            return TestResult::discard();
        }
        let shape: Vec<usize> = shape.iter().map(|&s| s as usize % 4 + 1).collect();
        if shape.is_empty() {
            return TestResult::discard();
        }
        let a = arange_shaped(&shape);
        let all_equal = shape
            .iter()
            .map(|&n| 0..n)
            .multi_cartesian_product()
            .all(|ix| a.at(&ix).is_ok() && a.at(&ix) == a.get(&ix));
        TestResult::from_bool(all_equal)
    }
}
