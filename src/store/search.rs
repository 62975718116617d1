/*!
 * Slot Search
 * Linear first-match search, fanned out across scoped threads for large stores
 *
 * The parallel path splits the slots into contiguous chunks, one per worker.
 * Workers publish matches into a shared atomic minimum and stop as soon as a
 * match below their own chunk is known, so the lowest index always wins.
 */

use crate::core::limits::{MAX_SEARCH_WORKERS, SEARCH_CANCEL_STRIDE};
use crate::monitoring::span_operation;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;

const NOT_FOUND: usize = usize::MAX;

/// Index of the first slot matching `predicate`
pub(crate) fn find_first<T, P>(slots: &[Option<T>], threshold: usize, predicate: P) -> Option<usize>
where
    T: Sync,
    P: Fn(Option<&T>) -> bool + Sync,
{
    let workers = worker_count(slots.len(), threshold);
    if workers <= 1 {
        return slots.iter().position(|slot| predicate(slot.as_ref()));
    }
    find_first_parallel(slots, workers, &predicate)
}

fn worker_count(len: usize, threshold: usize) -> usize {
    if len == 0 || len < threshold {
        return 1;
    }
    let available = thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1);
    available.min(MAX_SEARCH_WORKERS).min(len)
}

fn find_first_parallel<T, P>(slots: &[Option<T>], workers: usize, predicate: &P) -> Option<usize>
where
    T: Sync,
    P: Fn(Option<&T>) -> bool + Sync,
{
    let timer = span_operation("parallel_search", slots.len());
    let best = AtomicUsize::new(NOT_FOUND);
    let chunk_len = slots.len().div_ceil(workers);

    thread::scope(|scope| {
        for (chunk_index, chunk) in slots.chunks(chunk_len).enumerate() {
            let best = &best;
            let span = timer.span();
            let base = chunk_index * chunk_len;
            scope.spawn(move || {
                let _entered = span.enter();
                for (offset, slot) in chunk.iter().enumerate() {
                    if offset % SEARCH_CANCEL_STRIDE == 0 && best.load(Ordering::Acquire) < base {
                        return;
                    }
                    if predicate(slot.as_ref()) {
                        best.fetch_min(base + offset, Ordering::AcqRel);
                        return;
                    }
                }
            });
        }
    });

    timer.record_workers(workers);
    match best.into_inner() {
        NOT_FOUND => None,
        index => Some(index),
    }
}
