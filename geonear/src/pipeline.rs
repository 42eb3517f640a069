//! Concurrent task distribution over the spatial index.
//!
//! The pipeline's lifetime follows `Idle -> IndexBuilt -> Running ->
//! Draining -> Done`, enforced by sequencing rather than locking:
//!
//! - **IndexBuilt**: the caller hands in a fully constructed
//!   [`SpatialIndex`]; no query observes a partially built tree.
//! - **Running**: a single producer emits exactly one [`Task`] per indexed
//!   point into a bounded queue, and a fixed pool of stateless workers pulls
//!   tasks, resolves them, and pushes [`ResultPair`]s to a bounded result
//!   queue. The queues bound memory without serializing emission; the
//!   producer blocks on a full task queue, workers block on an empty one.
//! - **Draining**: the producer closes the task queue after the last task;
//!   each worker exits once the queue is drained and closed; a supervisor
//!   joins every worker and only then closes the result queue.
//! - **Done**: the aggregator observes the result queue drained and closed
//!   and finalizes the mapping.
//!
//! The open -> drain -> close ordering on both queues is what guarantees no
//! result is lost and no thread deadlocks.

use std::thread;

use crossbeam_channel::bounded;

use crate::aggregator::{AdjacencyMap, Aggregator};
use crate::index::SpatialIndex;
use crate::resolver::{resolve, ResultPair, Task};

/// Worker pool size multiplier over available hardware parallelism.
///
/// Resolution combines CPU-bound distance math with index traversal, so the
/// pool is oversized relative to core count. A tunable default, not a hard
/// requirement.
pub const WORKER_MULTIPLIER: usize = 4;

/// Returns the default worker pool size for this host.
pub fn default_worker_count() -> usize {
    num_cpus::get() * WORKER_MULTIPLIER
}

/// Resolves every indexed point with the default worker pool and returns the
/// complete adjacency mapping.
pub fn run(index: &SpatialIndex) -> AdjacencyMap {
    run_with_workers(index, default_worker_count())
}

/// Resolves every indexed point using `worker_count` workers.
///
/// The returned mapping has exactly one key per indexed point. Task
/// processing order across workers is unspecified and does not affect the
/// result.
pub fn run_with_workers(index: &SpatialIndex, worker_count: usize) -> AdjacencyMap {
    let worker_count = worker_count.max(1);
    // Headroom for a temporary imbalance between producer and workers
    let queue_capacity = worker_count * 2;

    let (task_tx, task_rx) = bounded::<Task>(queue_capacity);
    let (result_tx, result_rx) = bounded::<ResultPair>(queue_capacity);

    log::debug!(
        "pipeline running: {} points, {} workers, queue capacity {}",
        index.len(),
        worker_count,
        queue_capacity
    );

    thread::scope(|scope| {
        // Producer: one task per indexed point. Dropping the sender at the
        // end of the closure closes the task queue, signaling no-more-tasks.
        scope.spawn(move || {
            for point in index.iter() {
                if task_tx.send(Task::for_point(point)).is_err() {
                    // All workers are gone; nothing left to feed.
                    log::warn!("task queue disconnected before emission finished");
                    break;
                }
            }
        });

        // Workers: interchangeable and stateless; any worker may process any
        // task. Each exits once the task queue is drained and closed.
        let mut workers = Vec::with_capacity(worker_count);
        for _ in 0..worker_count {
            let task_rx = task_rx.clone();
            let result_tx = result_tx.clone();
            workers.push(scope.spawn(move || {
                for task in task_rx.iter() {
                    if result_tx.send(resolve(&task, index)).is_err() {
                        break;
                    }
                }
            }));
        }
        drop(task_rx);

        // Supervisor: waits for every worker to exit, then drops the last
        // result sender, closing the result queue.
        scope.spawn(move || {
            for worker in workers {
                if worker.join().is_err() {
                    log::error!("resolver worker panicked");
                }
            }
            drop(result_tx);
            log::debug!("pipeline draining complete, result queue closed");
        });

        // Aggregator: drains until the result queue is empty and closed.
        let map = Aggregator::with_capacity(index.len()).drain(&result_rx);
        log::debug!("pipeline done: {} results aggregated", map.len());
        map
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::PointRecord;

    fn record(id: &str, lat: f64, lon: f64) -> PointRecord {
        PointRecord::new(id, lat, lon, "Test City", "TS")
    }

    #[test]
    fn test_empty_index_yields_empty_map() {
        let index = SpatialIndex::build(&[]);
        let map = run_with_workers(&index, 2);
        assert!(map.is_empty());
    }

    #[test]
    fn test_single_worker_floor() {
        // worker_count of zero is clamped to one
        let index = SpatialIndex::build(&[record("A", 0.0, 0.0)]);
        let map = run_with_workers(&index, 0);
        assert_eq!(map.len(), 1);
        assert_eq!(map["A"], vec!["A"]);
    }

    #[test]
    fn test_one_key_per_point() {
        // More points than the queue capacity of a small pool, so the
        // producer actually blocks on backpressure at least once.
        let records: Vec<PointRecord> = (0..100)
            .map(|i| record(&format!("P{i:03}"), (i as f64) * 0.5 - 25.0, 0.0))
            .collect();
        let index = SpatialIndex::build(&records);

        let map = run_with_workers(&index, 2);
        assert_eq!(map.len(), records.len());
        for r in &records {
            assert!(map.contains_key(&r.id), "missing key {}", r.id);
        }
    }

    #[test]
    fn test_default_worker_count_positive() {
        assert!(default_worker_count() >= WORKER_MULTIPLIER);
    }
}
