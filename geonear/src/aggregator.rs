//! Assembly of per-point results into the final adjacency mapping.

use std::collections::HashMap;

use crossbeam_channel::Receiver;

use crate::resolver::ResultPair;

/// The complete proximity relation: point identifier to neighbor identifiers.
pub type AdjacencyMap = HashMap<String, Vec<String>>;

/// Single logical consumer of the result queue.
///
/// The aggregator is the sole writer of the [`AdjacencyMap`], so the map
/// itself needs no synchronization. It finalizes only once every result has
/// been consumed: the final key set equals exactly the set of input
/// identifiers.
#[derive(Debug, Default)]
pub struct Aggregator {
    map: AdjacencyMap,
}

impl Aggregator {
    /// Creates an empty aggregator.
    pub fn new() -> Aggregator {
        Aggregator::default()
    }

    /// Creates an aggregator preallocated for the expected number of points.
    pub fn with_capacity(capacity: usize) -> Aggregator {
        Aggregator {
            map: AdjacencyMap::with_capacity(capacity),
        }
    }

    /// Records one resolved result under its identifier.
    pub fn insert(&mut self, pair: ResultPair) {
        if let Some(previous) = self.map.insert(pair.id.clone(), pair.neighbors) {
            // One task exists per point, so a second result for the same
            // identifier means duplicate identifiers in the input.
            log::warn!(
                "duplicate result for {}: replaced {} earlier neighbors",
                pair.id,
                previous.len()
            );
        }
    }

    /// Returns the number of results recorded so far.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Checks if no results have been recorded yet.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Consumes the result queue until it is drained and closed, then
    /// returns the finished mapping.
    pub fn drain(mut self, results: &Receiver<ResultPair>) -> AdjacencyMap {
        for pair in results.iter() {
            self.insert(pair);
        }
        self.finish()
    }

    /// Hands the finished mapping to the caller.
    pub fn finish(self) -> AdjacencyMap {
        self.map
    }
}
