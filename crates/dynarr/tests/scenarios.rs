//! Integration tests for the documented growth, insertion and shrink
//! scenarios, plus drop accounting across resizes.

use dynarr::{ArrayConfig, ArrayError, ConfigError, DynamicArray};
use dynarr_test_utils::{contents, filled, growth_sequence, DropTracker};

#[test]
fn append_five_grows_through_powers_of_two() {
    assert_eq!(growth_sequence(5), vec![1, 2, 4, 8]);

    let arr = filled(1..=5);
    assert_eq!(arr.len(), 5);
    assert_eq!(arr.capacity(), 8);
    assert_eq!(contents(&arr), vec![1, 2, 3, 4, 5]);
}

#[test]
fn insert_into_middle_of_five() {
    let mut arr = filled(1..=5);
    arr.insert(2, 99).unwrap();
    assert_eq!(contents(&arr), vec![1, 2, 99, 3, 4, 5]);
    assert_eq!(arr.len(), 6);
    assert_eq!(arr.capacity(), 8);
}

#[test]
fn pop_sequence_shrinks_only_below_quarter() {
    let mut arr = filled(1..=5);

    let mut trace = Vec::new();
    while arr.len() > 1 {
        let value = arr.pop().unwrap();
        trace.push((value, arr.len(), arr.capacity()));
    }

    assert_eq!(
        trace,
        vec![(5, 4, 8), (4, 3, 8), (3, 2, 8), (2, 1, 4)],
    );
    assert_eq!(contents(&arr), vec![1]);
}

#[test]
fn draining_to_empty_then_refilling() {
    let mut arr = filled(0..64);
    assert_eq!(arr.capacity(), 64);
    while arr.pop().is_ok() {}
    assert!(arr.is_empty());
    assert!(arr.capacity() >= 1);
    assert_eq!(arr.pop(), Err(ArrayError::EmptyContainer));

    for v in 0..3 {
        arr.append(v);
    }
    assert_eq!(contents(&arr), vec![0, 1, 2]);
}

#[test]
fn errors_leave_container_untouched() {
    let mut arr = filled(["a", "b"]);
    assert_eq!(
        arr.get(2),
        Err(ArrayError::IndexOutOfRange { index: 2, len: 2 })
    );
    assert!(arr.set(5, "z").is_err());
    assert!(arr.insert(3, "z").is_err());
    assert_eq!(arr.to_string(), "[a, b]");
    assert_eq!(arr.capacity(), 2);
}

#[test]
fn config_controls_initial_capacity() {
    let arr: DynamicArray<u32> = DynamicArray::with_config(ArrayConfig::new(16)).unwrap();
    assert_eq!(arr.capacity(), 16);
    assert!(arr.is_empty());

    let err = DynamicArray::<u32>::with_config(ArrayConfig::new(0)).unwrap_err();
    assert_eq!(err, ConfigError::ZeroCapacity);
}

#[test]
fn every_value_dropped_exactly_once_across_resizes() {
    let tracker = DropTracker::new();
    {
        let mut arr = DynamicArray::new();
        for v in 0..20 {
            arr.append(tracker.track(v));
        }
        arr.insert(3, tracker.track(100)).unwrap();
        arr.insert(0, tracker.track(200)).unwrap();
        assert_eq!(tracker.live(), 22);

        for _ in 0..15 {
            drop(arr.pop().unwrap());
        }
        assert_eq!(tracker.dropped(), 15);
        assert_eq!(tracker.live(), 7);
        assert_eq!(arr.len(), 7);
    }
    assert_eq!(tracker.dropped(), tracker.created());
}

#[test]
fn set_drops_the_replaced_value() {
    let tracker = DropTracker::new();
    let mut arr = DynamicArray::new();
    arr.append(tracker.track("old"));
    arr.set(0, tracker.track("new")).unwrap();
    assert_eq!(tracker.dropped(), 1);
    assert_eq!(*arr.get(0).unwrap().value(), "new");
}

#[test]
fn rejected_set_drops_the_offered_value() {
    let tracker = DropTracker::new();
    let mut arr = DynamicArray::new();
    arr.append(tracker.track(1));
    assert!(arr.set(4, tracker.track(2)).is_err());
    assert_eq!(tracker.live(), 1);
}

#[test]
fn popped_value_is_owned_by_caller() {
    let tracker = DropTracker::new();
    let mut arr = filled((0..4).map(|v| tracker.track(v)));
    let last = arr.pop().unwrap();
    assert_eq!(*last.value(), 3);
    assert_eq!(tracker.live(), 4);
    drop(last);
    assert_eq!(tracker.live(), 3);
}

#[test]
fn clone_then_drop_both() {
    let tracker = DropTracker::new();
    let original = filled((0..5).map(|v| tracker.track(v)));
    assert_eq!(tracker.live(), 5);
    let copy = original.clone();
    assert_eq!(tracker.live(), 10);
    assert_eq!(copy.to_string(), "[0, 1, 2, 3, 4]");
    assert_eq!(copy.capacity(), original.capacity());
    drop(original);
    assert_eq!(tracker.live(), 5);
    drop(copy);
    assert_eq!(tracker.live(), 0);
    assert_eq!(tracker.dropped(), tracker.created());
}

#[test]
fn zero_sized_elements() {
    let mut arr = DynamicArray::new();
    for _ in 0..10 {
        arr.append(());
    }
    assert_eq!(arr.len(), 10);
    assert_eq!(arr.capacity(), 16);
    assert_eq!(arr.pop(), Ok(()));
}

#[test]
fn container_moves_between_threads() {
    let arr = filled(vec![String::from("x"), String::from("y")]);
    let handle = std::thread::spawn(move || arr.to_string());
    assert_eq!(handle.join().unwrap(), "[x, y]");
}
