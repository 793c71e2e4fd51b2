//! Side-by-side algorithm comparison.
//!
//! Holds one [`ServiceSequence`] per algorithm for a single input and
//! ranks them by total seek distance.
//!
//! | Query | Result |
//! |-------|--------|
//! | `entries()` | One entry per algorithm, canonical order |
//! | `ranked()` | Entries sorted ascending by seek distance (stable) |
//! | `best()` | Minimum seek distance, earliest in canonical order on ties |

use serde::Serialize;

use crate::algorithms::Algorithm;
use crate::models::{SeekDistance, ServiceSequence};

/// One algorithm's result in a comparison.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComparisonEntry {
    /// Algorithm that produced the sequence.
    pub algorithm: Algorithm,
    /// Resulting service sequence.
    pub sequence: ServiceSequence,
}

impl ComparisonEntry {
    /// Seek distance of this entry's sequence.
    pub fn seek_distance(&self) -> SeekDistance {
        self.sequence.seek_distance()
    }
}

/// Results of all six algorithms on the same input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Comparison {
    entries: [ComparisonEntry; 6],
}

impl Comparison {
    /// Builds a comparison from per-algorithm sequences in canonical order.
    pub(crate) fn from_sequences(sequences: [(Algorithm, ServiceSequence); 6]) -> Self {
        Self {
            entries: sequences.map(|(algorithm, sequence)| ComparisonEntry {
                algorithm,
                sequence,
            }),
        }
    }

    /// Entries in canonical algorithm order.
    pub fn entries(&self) -> &[ComparisonEntry] {
        &self.entries
    }

    /// Entries sorted by ascending seek distance.
    ///
    /// Equal distances keep canonical order, so `ranked()[0]` is `best()`.
    pub fn ranked(&self) -> Vec<&ComparisonEntry> {
        let mut ranked: Vec<&ComparisonEntry> = self.entries.iter().collect();
        ranked.sort_by_key(|e| e.seek_distance());
        ranked
    }

    /// Entry with the smallest seek distance.
    pub fn best(&self) -> &ComparisonEntry {
        self.entries[1..].iter().fold(&self.entries[0], |best, e| {
            if e.seek_distance() < best.seek_distance() {
                e
            } else {
                best
            }
        })
    }

    /// Entry for a specific algorithm.
    pub fn get(&self, algorithm: Algorithm) -> &ComparisonEntry {
        &self.entries[algorithm as usize]
    }

    /// `(algorithm, seek_distance)` pairs in canonical order.
    pub fn distances(&self) -> Vec<(Algorithm, SeekDistance)> {
        self.entries
            .iter()
            .map(|e| (e.algorithm, e.seek_distance()))
            .collect()
    }
}
