use ndarray_lite::prelude::*;
use ndarray_lite::indices;

#[test]
fn full_and_partial_index() {
    let mut a = arange(&[24]).unwrap();
    a.reshape(&[2, 3, 4]).unwrap();
    assert_eq!(a.at(&[1, 2, 3]), Ok(23.));
    // a partial index is the first element of the sub-array it names
    assert_eq!(a.at(&[1, 2]), Ok(20.));
    assert_eq!(a.at(&[1]), Ok(12.));
    assert_eq!(a.at(&[]), Ok(0.));
}

#[test]
fn out_of_bounds() {
    let a = zeros(&[2, 3]).unwrap();
    for ix in [&[2, 0][..], &[0, 3][..], &[2][..], &[0, 0, 0][..]] {
        assert_eq!(a.at(ix).unwrap_err().kind(), ErrorKind::OutOfBounds);
        assert_eq!(a.get(ix).unwrap_err().kind(), ErrorKind::OutOfBounds);
    }
    assert!(array(None, &[]).unwrap().at(&[0]).is_err());
}

#[test]
fn no_element_to_index() {
    let e = array(None, &[]).unwrap();
    assert_eq!(e.at(&[]).unwrap_err().kind(), ErrorKind::OutOfBounds);
    assert_eq!(e.get(&[]).unwrap_err().kind(), ErrorKind::OutOfBounds);

    let mut z = array(None, &[]).unwrap();
    z.reshape(&[2, 0]).unwrap();
    assert_eq!(z.at(&[1]).unwrap_err().kind(), ErrorKind::OutOfBounds);
    assert_eq!(
        z.set(1., &[1]).unwrap_err().kind(),
        ErrorKind::OutOfBounds
    );
    assert!(z.get_mut(&[0]).is_err());
    assert!(z.values().is_empty());
}

#[test]
fn set_and_get_mut() {
    let mut a = zeros(&[2, 2]).unwrap();
    a.set(5., &[1, 1]).unwrap();
    *a.get_mut(&[0, 1]).unwrap() += 2.;
    assert_eq!(a.values(), &[0., 2., 0., 5.]);
    assert_eq!(
        a.set(1., &[0, 2]).unwrap_err().kind(),
        ErrorKind::OutOfBounds
    );
    assert_eq!(a.values(), &[0., 2., 0., 5.]);
}

#[test]
fn indices_follow_data_order() {
    let mut a = arange(&[6]).unwrap();
    a.reshape(&[3, 2]).unwrap();
    for (k, ix) in a.indices().enumerate() {
        assert_eq!(a.at(&ix), Ok(k as f64));
    }
    assert_eq!(indices(&[3, 2]).len(), 6);
}

#[test]
fn count_and_ndim() {
    let a = ones(&[2, 3, 4]).unwrap();
    assert_eq!(a.ndim(), 3);
    assert_eq!(a.len(), 24);
    assert_eq!(a.count(&[]), 24);
    assert_eq!(a.count(&[1]), 3);
    assert_eq!(a.count(&[0, 2]), 8);
}
