//! Quicksort as a message pipeline.
//!
//! ```text
//!            ┌────────────── SegmentMsg ──────────────┐
//!            ▼                                         │
//! seed ─> [pivot] ─ PivotMsg ─> [partition × N] ─ SplitMsg ─> [split]
//!            │                        │                        │
//!            └──────── DoneMsg ───────┴────────────────────────┴─> coordinator
//! ```
//!
//! The coordinator seeds the whole sequence and subtracts the size of every
//! resolved segment from the element count; zero means the sequence is
//! sorted. Every queue is bounded at `len + 1`: live segments are disjoint
//! and non-empty, so no queue can ever hold more than that and no send can
//! block while another stage still has work.
//!
//! A stage that panics signals the coordinator through a separate abort
//! queue. The coordinator then closes the feed, the remaining stages wind
//! down, and the panic resumes in the caller once the scope joins them.

mod messages;
mod stages;

use std::num::NonZeroUsize;
use std::thread;

use crossbeam_channel::{bounded, select};
use log::{debug, trace, warn};

use self::messages::{DoneMsg, Feed, SegmentMsg};
use self::stages::AbortOnPanic;
use crate::error::{PipelineError, Result};
use crate::segment::{Element, Segment};

/// Counters collected by the coordinator over one run.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct PipelineStats {
    pub len: usize,
    pub queue_capacity: usize,
    pub partition_workers: usize,
    /// Number of `DoneMsg`s it took to account for every element.
    pub sorted_segments: usize,
    /// Deepest segment queue seen when a `DoneMsg` arrived.
    pub max_segment_queue_len: usize,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Pipeline {
    partition_workers: usize,
}

impl Default for Pipeline {
    fn default() -> Self {
        let partition_workers = thread::available_parallelism().map_or(1, NonZeroUsize::get);
        Self { partition_workers }
    }
}

impl Pipeline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_partition_workers(partition_workers: usize) -> Result<Self> {
        if partition_workers == 0 {
            return Err(PipelineError::NoPartitionWorkers);
        }
        Ok(Self { partition_workers })
    }

    pub fn partition_workers(&self) -> usize {
        self.partition_workers
    }

    pub fn sort<'a, T: Element + Send>(&self, data: &'a mut [T]) -> &'a mut [T] {
        self.run(&mut *data);
        data
    }

    pub fn sort_with_stats<'a, T: Element + Send>(
        &self,
        data: &'a mut [T],
    ) -> (&'a mut [T], PipelineStats) {
        let stats = self.run(&mut *data);
        (data, stats)
    }

    fn run<T: Element + Send>(&self, data: &mut [T]) -> PipelineStats {
        let len = data.len();
        let queue_capacity = queue_capacity(len);
        let mut stats = PipelineStats {
            len,
            queue_capacity,
            partition_workers: self.partition_workers,
            ..PipelineStats::default()
        };

        let whole = match Segment::spanning(len) {
            Some(whole) if !whole.is_degenerate() => whole,
            _ => return stats,
        };

        thread::scope(|scope| {
            let (feed_tx, feed_rx) = bounded(queue_capacity);
            let (pivot_tx, pivot_rx) = bounded(queue_capacity);
            let (split_tx, split_rx) = bounded(queue_capacity);
            let (done_tx, done_rx) = bounded(queue_capacity);
            let (abort_tx, abort_rx) = bounded(1);

            let guard = AbortOnPanic(abort_tx.clone());
            scope.spawn(move || {
                let _guard = guard;
                stages::pivot_stage(feed_rx, pivot_tx)
            });

            for _ in 0..self.partition_workers {
                let guard = AbortOnPanic(abort_tx.clone());
                let pivots = pivot_rx.clone();
                let splits = split_tx.clone();
                let done = done_tx.clone();
                scope.spawn(move || {
                    let _guard = guard;
                    stages::partition_stage(pivots, splits, done)
                });
            }

            let guard = AbortOnPanic(abort_tx);
            let feed = feed_tx.clone();
            scope.spawn(move || {
                let _guard = guard;
                stages::split_stage(split_rx, feed, done_tx)
            });

            // Only the stages may hold these, so closure can cascade.
            drop(pivot_rx);
            drop(split_tx);

            if feed_tx
                .send(Feed::Segment(SegmentMsg::new(whole, data)))
                .is_err()
            {
                return;
            }

            let mut remaining = len;
            while remaining > 0 {
                // A panicked stage loses its segment, so the count would never
                // reach zero. Stop waiting and let the scope rethrow the panic.
                let segment = select! {
                    recv(done_rx) -> msg => match msg {
                        Ok(DoneMsg { segment }) => segment,
                        Err(_) => break,
                    },
                    recv(abort_rx) -> _ => {
                        warn!("a pipeline stage panicked with {remaining} elements unsorted");
                        break;
                    }
                };
                debug_assert!(segment.len() <= remaining);
                remaining -= segment.len();
                stats.sorted_segments += 1;
                stats.max_segment_queue_len = stats.max_segment_queue_len.max(feed_tx.len());
                trace!("segment {segment:?} sorted, {remaining} elements remaining");
            }

            let _ = feed_tx.send(Feed::Close);
        });

        debug!(
            "pipeline sorted {} elements in {} segments (workers={}, queue_capacity={}, max_segment_queue_len={})",
            stats.len,
            stats.sorted_segments,
            stats.partition_workers,
            stats.queue_capacity,
            stats.max_segment_queue_len,
        );
        stats
    }
}

/// Sorts `data` in place with a default [`Pipeline`] and hands it back.
pub fn sort<T: Element + Send>(data: &mut [T]) -> &mut [T] {
    Pipeline::new().sort(data)
}

#[inline]
fn queue_capacity(len: usize) -> usize {
    len.saturating_add(1)
}
