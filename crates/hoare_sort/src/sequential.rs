use crate::partition::{Partitioned, partition, partition_tracking};
use crate::segment::{Element, Segment};
use crate::stack::Stack;

/// Sorts `data` in place with an explicit segment stack and hands it back.
pub fn sort<T: Element>(data: &mut [T]) -> &mut [T] {
    drive(data, |data, segment, pivot| Partitioned {
        split: partition(data, segment.left, segment.right, pivot),
        ordered: false,
    })
}

/// Like [`sort`], but stops descending into any segment the partition scan
/// found already in order.
pub fn sort_order_aware<T: Element>(data: &mut [T]) -> &mut [T] {
    drive(data, |data, segment, pivot| {
        partition_tracking(data, segment.left, segment.right, pivot)
    })
}

fn drive<T, P>(data: &mut [T], mut partition_segment: P) -> &mut [T]
where
    T: Element,
    P: FnMut(&mut [T], Segment, &T) -> Partitioned,
{
    let Some(whole) = Segment::spanning(data.len()) else {
        return data;
    };

    let mut stack = Stack::new();
    stack.push(whole);

    while let Some(segment) = stack.pop() {
        if segment.is_degenerate() {
            continue;
        }

        let pivot = data[segment.midpoint()].clone();
        let Partitioned { split, ordered } = partition_segment(&mut *data, segment, &pivot);

        if ordered || segment.is_guaranteed_sorted() {
            continue;
        }

        // Right half goes on last so it is popped first.
        let (left, right) = segment.split_at(split);
        if !left.is_degenerate() {
            stack.push(left);
        }
        if !right.is_degenerate() {
            stack.push(right);
        }
    }

    data
}
