//! Values passed between pipeline stages.
//!
//! Every work message owns the exclusive sub-slice backing its segment, so
//! two stages can never touch the same element. Segment coordinates stay
//! absolute; slice indices are relative to `segment.left`.

use crate::segment::Segment;

/// Inbound traffic of the pivot stage.
pub(crate) enum Feed<'a, T> {
    Segment(SegmentMsg<'a, T>),
    /// Sent by the coordinator once every element is accounted for. The
    /// split stage also feeds this queue, so it can't close on its own.
    Close,
}

pub(crate) struct SegmentMsg<'a, T> {
    pub segment: Segment,
    pub data: &'a mut [T],
}

impl<'a, T> SegmentMsg<'a, T> {
    pub fn new(segment: Segment, data: &'a mut [T]) -> Self {
        debug_assert_eq!(data.len(), segment.len());
        Self { segment, data }
    }
}

pub(crate) struct PivotMsg<'a, T> {
    pub segment: Segment,
    pub pivot: T,
    pub data: &'a mut [T],
}

pub(crate) struct SplitMsg<'a, T> {
    pub segment: Segment,
    /// Absolute index of the last element of the lower half.
    pub split: usize,
    pub data: &'a mut [T],
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct DoneMsg {
    pub segment: Segment,
}
