/// Segments holding at most this many elements are already in order once
/// they have been partitioned around their midpoint value.
pub const MAX_GUARANTEED_SORTED_SEGMENT_SIZE: usize = 2;

/// Element types the engines can sort.
///
/// The pivot value is lifted out of the sequence before partitioning, so
/// elements must be cloneable as well as totally ordered.
pub trait Element: Ord + Clone {}

impl<T: Ord + Clone> Element for T {}

/// Inclusive index range `[left, right]` into the sequence being sorted.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct Segment {
    pub left: usize,
    pub right: usize,
}

impl Segment {
    #[inline]
    pub fn new(left: usize, right: usize) -> Self {
        Self { left, right }
    }

    /// The segment covering a whole sequence of `len` elements, or `None`
    /// when the sequence is empty.
    #[inline]
    pub fn spanning(len: usize) -> Option<Self> {
        len.checked_sub(1).map(|right| Self::new(0, right))
    }

    /// Empty and single-element segments need no partitioning.
    #[inline]
    pub fn is_degenerate(self) -> bool {
        self.right <= self.left
    }

    /// Number of elements covered; zero for inverted ranges.
    #[inline]
    pub fn len(self) -> usize {
        if self.right < self.left {
            0
        } else {
            self.right - self.left + 1
        }
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.len() == 0
    }

    /// Upper midpoint, the index the pivot value is read from.
    #[inline]
    pub fn midpoint(self) -> usize {
        debug_assert!(self.left <= self.right);
        self.right - (self.right - self.left) / 2
    }

    #[inline]
    pub fn is_guaranteed_sorted(self) -> bool {
        self.len() <= MAX_GUARANTEED_SORTED_SEGMENT_SIZE
    }

    /// Splits around a partition boundary into `[left, split]` and
    /// `[split + 1, right]`.
    #[inline]
    pub fn split_at(self, split: usize) -> (Self, Self) {
        debug_assert!(self.left <= split && split < self.right);
        (Self::new(self.left, split), Self::new(split + 1, self.right))
    }
}
