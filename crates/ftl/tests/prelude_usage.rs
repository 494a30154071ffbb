//! Integration test: the prelude covers an end-to-end workflow across the
//! sub-crates.

use ftl::prelude::*;

#[test]
fn matrix_to_list_round_trip() {
    let m = Matrix::from_rows(&[[3, 1], [2, 0]]).unwrap();
    let mut values = m.clone().into_vec();
    merge_sort(&mut values);
    let list: List<i32> = values.into_iter().collect();
    assert_eq!(list.iter().copied().collect::<Vec<_>>(), [0, 1, 2, 3]);
    assert_eq!(m.shape(), Shape::new(2, 2).unwrap());
}

#[test]
fn errors_are_reachable() {
    let err: MatrixError = Matrix::<u8>::new(usize::MAX, 2).unwrap_err();
    assert!(matches!(err, MatrixError::Overflow { .. }));

    let mut list: List<u8> = List::new();
    let end = list.end();
    assert_eq!(list.erase(end), Err(ListError::EndPosition));
}

#[test]
fn stack_and_search_together() {
    let text = "abracadabra";
    let mut stack: Stack<usize> = find_all(text, "a", CaseSensitivity::Sensitive)
        .into_iter()
        .collect();
    assert_eq!(stack.len(), 5);
    assert_eq!(stack.pop(), Some(10));
    assert_eq!(find_all("ABRA", "bra", CaseSensitivity::Insensitive), [1]);
}

#[test]
fn cursor_trait_from_prelude() {
    let m = Matrix::filled(2, 2, 0.5f32).unwrap();
    let mut it: ContiguousIter<'_, f32> = m.begin();
    advance(&mut it, 2);
    assert_eq!(it.distance_to(&m.end()), 2);
}
