//! Integration test: stack and list drop every element exactly once,
//! whether elements are popped, erased, cleared or dropped with the
//! container.

use ftl_collections::{List, Stack};
use ftl_test_utils::DropCounter;

#[test]
fn stack_drops_remaining_elements() {
    let drops = DropCounter::counter();
    {
        let mut stack = Stack::new();
        for i in 0..10 {
            stack.push(DropCounter::new(i, &drops));
        }
        let popped = stack.pop();
        assert_eq!(popped.as_ref().map(|d| d.value), Some(9));
        drop(popped);
        assert_eq!(DropCounter::drops(&drops), 1);
    }
    assert_eq!(DropCounter::drops(&drops), 10);
}

#[test]
fn list_erase_and_clear_drop_once() {
    let drops = DropCounter::counter();
    let mut list: List<DropCounter> = (0..8).map(|i| DropCounter::new(i, &drops)).collect();

    let second = list.next(list.begin()).unwrap();
    list.erase(second).unwrap();
    assert_eq!(DropCounter::drops(&drops), 1);

    let first = list.begin();
    let fourth = list.next(list.next(list.next(first).unwrap()).unwrap()).unwrap();
    list.erase_range(first, fourth).unwrap();
    assert_eq!(DropCounter::drops(&drops), 4);
    assert_eq!(list.front().map(|d| d.value), Some(4));

    list.clear();
    assert_eq!(DropCounter::drops(&drops), 8);
    drop(list);
    assert_eq!(DropCounter::drops(&drops), 8);
}

#[test]
fn list_clone_is_independent() {
    let drops = DropCounter::counter();
    let original: List<DropCounter> = (0..3).map(|i| DropCounter::new(i, &drops)).collect();
    let copy = original.clone();
    assert_eq!(copy, original);
    drop(original);
    assert_eq!(DropCounter::drops(&drops), 3);
    assert_eq!(copy.iter().map(|d| d.value).collect::<Vec<_>>(), [0, 1, 2]);
    drop(copy);
    assert_eq!(DropCounter::drops(&drops), 6);
}

#[test]
fn partially_consumed_into_iter_drops_rest() {
    let drops = DropCounter::counter();
    let list: List<DropCounter> = (0..5).map(|i| DropCounter::new(i, &drops)).collect();
    let mut it = list.into_iter();
    let first = it.next();
    drop(it);
    assert_eq!(DropCounter::drops(&drops), 4);
    drop(first);
    assert_eq!(DropCounter::drops(&drops), 5);
}
