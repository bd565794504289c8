/// Result of [`partition_tracking`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Partitioned {
    /// Last index of the lower half: `data[left..=split]` holds values no
    /// greater than any value in `data[split + 1..=right]`.
    pub split: usize,
    /// `true` only when the whole segment was found in non-decreasing order.
    /// A `false` is always safe; it never claims order that isn't there.
    pub ordered: bool,
}

/// Hoare partition of `data[left..=right]` around `pivot`.
///
/// `pivot` must be a value present in the segment, which keeps both scans
/// inside it. Returns the split index.
#[inline]
pub fn partition<T: Ord>(data: &mut [T], left: usize, right: usize, pivot: &T) -> usize {
    debug_assert!(left <= right && right < data.len());

    let mut lo = left;
    let mut hi = right;

    loop {
        while data[lo] < *pivot {
            lo += 1;
        }

        while data[hi] > *pivot {
            hi -= 1;
        }

        if lo >= hi {
            return hi;
        }

        // Both cursors sit on the pivot value; swapping would change nothing.
        if data[lo] != data[hi] {
            data.swap(lo, hi);
        }
        lo += 1;
        hi -= 1;
    }
}

/// [`partition`] that also reports whether the segment ended up fully
/// ordered.
///
/// A position never changes once a cursor has moved past it, so each
/// adjacent pair is compared as soon as both of its values are final: the
/// left cursor checks the pair ending where it leaves, the right cursor the
/// pair starting where it leaves, and the pairs around the meeting point are
/// checked on exit.
pub fn partition_tracking<T: Ord>(
    data: &mut [T],
    left: usize,
    right: usize,
    pivot: &T,
) -> Partitioned {
    debug_assert!(left <= right && right < data.len());

    let mut ordered = true;
    let mut lo = left;
    let mut hi = right;

    loop {
        while data[lo] < *pivot {
            ordered = ordered && (lo == left || in_order(data, lo - 1));
            lo += 1;
        }

        while data[hi] > *pivot {
            ordered = ordered && (hi == right || in_order(data, hi));
            hi -= 1;
        }

        if lo >= hi {
            ordered = ordered
                && (lo == left || in_order(data, lo - 1))
                && (hi == right || in_order(data, hi));
            return Partitioned { split: hi, ordered };
        }

        if data[lo] != data[hi] {
            data.swap(lo, hi);
        }

        ordered = ordered
            && (lo == left || in_order(data, lo - 1))
            && (hi == right || in_order(data, hi));
        lo += 1;
        hi -= 1;
    }
}

#[inline]
fn in_order<T: Ord>(data: &[T], i: usize) -> bool {
    data[i] <= data[i + 1]
}
