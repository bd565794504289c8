//! Worker loops. Each one runs until its inbound queue is closed and
//! drained, or until a downstream queue disappears.

use std::thread;

use crossbeam_channel::{Receiver, Sender};
use log::trace;

use super::messages::{DoneMsg, Feed, PivotMsg, SegmentMsg, SplitMsg};
use crate::partition::{Partitioned, partition_tracking};
use crate::segment::Element;

/// Held by every stage thread. Unwinding drops it, which tells the
/// coordinator to stop waiting for segments that will never be reported.
pub(crate) struct AbortOnPanic(pub(crate) Sender<()>);

impl Drop for AbortOnPanic {
    fn drop(&mut self) {
        if thread::panicking() {
            let _ = self.0.try_send(());
        }
    }
}

pub(crate) fn pivot_stage<'a, T: Element>(
    feed: Receiver<Feed<'a, T>>,
    pivots: Sender<PivotMsg<'a, T>>,
) {
    while let Ok(Feed::Segment(SegmentMsg { segment, data })) = feed.recv() {
        // The seed and every fed child span at least two elements.
        debug_assert!(!segment.is_degenerate(), "{segment:?}");

        let pivot = data[segment.midpoint() - segment.left].clone();
        let msg = PivotMsg {
            segment,
            pivot,
            data,
        };
        if pivots.send(msg).is_err() {
            return;
        }
    }
}

pub(crate) fn partition_stage<'a, T: Element>(
    pivots: Receiver<PivotMsg<'a, T>>,
    splits: Sender<SplitMsg<'a, T>>,
    done: Sender<DoneMsg>,
) {
    while let Ok(PivotMsg {
        segment,
        pivot,
        data,
    }) = pivots.recv()
    {
        let last = data.len() - 1;
        let Partitioned { split, ordered } = partition_tracking(data, 0, last, &pivot);

        let sent = if ordered {
            trace!("segment {segment:?} already in order");
            done.send(DoneMsg { segment }).is_ok()
        } else {
            let msg = SplitMsg {
                segment,
                split: segment.left + split,
                data,
            };
            splits.send(msg).is_ok()
        };
        if !sent {
            return;
        }
    }
}

pub(crate) fn split_stage<'a, T>(
    splits: Receiver<SplitMsg<'a, T>>,
    feed: Sender<Feed<'a, T>>,
    done: Sender<DoneMsg>,
) {
    while let Ok(SplitMsg {
        segment,
        split,
        data,
    }) = splits.recv()
    {
        if segment.is_guaranteed_sorted() {
            if done.send(DoneMsg { segment }).is_err() {
                return;
            }
            continue;
        }

        let (left, right) = segment.split_at(split);
        let (left_data, right_data) = data.split_at_mut(left.len());

        for (child, child_data) in [(left, left_data), (right, right_data)] {
            let sent = if child.is_degenerate() {
                done.send(DoneMsg { segment: child }).is_ok()
            } else {
                let msg = SegmentMsg::new(child, child_data);
                feed.send(Feed::Segment(msg)).is_ok()
            };
            if !sent {
                return;
            }
        }
    }
}
