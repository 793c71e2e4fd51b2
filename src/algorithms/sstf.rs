//! Shortest Seek Time First.
//!
//! # Algorithm
//! Greedy nearest neighbour: from the current position, service the
//! remaining request with the smallest absolute distance, move there,
//! repeat until no requests remain.
//!
//! # Complexity
//! O(n²) for n requests.

use serde::{Deserialize, Serialize};

use crate::models::{SequenceBuilder, ServiceSequence, Track};

/// How SSTF chooses between equally near requests.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TieBreaker {
    /// Earliest remaining request in caller order.
    #[default]
    FirstInQueue,
    /// The lower track number.
    LowerTrack,
    /// The higher track number.
    HigherTrack,
}

/// SSTF with [`TieBreaker::FirstInQueue`].
pub fn sstf(requests: &[Track], head: Track) -> ServiceSequence {
    sstf_with(requests, head, TieBreaker::FirstInQueue)
}

/// SSTF with an explicit tie-breaking rule.
///
/// Remaining requests keep caller order after each removal, so
/// `FirstInQueue` always refers to the original submission order.
///
/// # Example
/// ```
/// use u_disk_schedule::algorithms::{sstf_with, TieBreaker};
///
/// // 40 and 60 are both 10 away from 50
/// let first = sstf_with(&[60, 40], 50, TieBreaker::FirstInQueue);
/// assert_eq!(first.tracks(), &[50, 60, 40]);
///
/// let lower = sstf_with(&[60, 40], 50, TieBreaker::LowerTrack);
/// assert_eq!(lower.tracks(), &[50, 40, 60]);
/// ```
pub fn sstf_with(requests: &[Track], head: Track, tie_breaker: TieBreaker) -> ServiceSequence {
    let mut remaining = requests.to_vec();
    let mut builder = SequenceBuilder::starting_at(head, requests.len());
    let mut current = head;

    while let Some(idx) = nearest(&remaining, current, tie_breaker) {
        current = remaining.remove(idx);
        builder.push(current);
    }

    builder.finish()
}

/// Index of the request nearest to `current`, or `None` if empty.
fn nearest(remaining: &[Track], current: Track, tie_breaker: TieBreaker) -> Option<usize> {
    let mut best: Option<(usize, u32)> = None;

    for (idx, &track) in remaining.iter().enumerate() {
        let dist = track.abs_diff(current);
        let better = match best {
            None => true,
            Some((best_idx, best_dist)) => {
                if dist != best_dist {
                    dist < best_dist
                } else {
                    match tie_breaker {
                        TieBreaker::FirstInQueue => false,
                        TieBreaker::LowerTrack => track < remaining[best_idx],
                        TieBreaker::HigherTrack => track > remaining[best_idx],
                    }
                }
            }
        };
        if better {
            best = Some((idx, dist));
        }
    }

    best.map(|(idx, _)| idx)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::random_requests;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn test_sstf_reference() {
        let seq = sstf(&[98, 183, 37, 122, 14, 124, 65, 67], 53);
        assert_eq!(seq.tracks(), &[53, 65, 67, 37, 14, 98, 122, 124, 183]);
        assert_eq!(seq.seek_distance(), 236);
    }

    #[test]
    fn test_sstf_first_in_queue_tie() {
        let seq = sstf(&[40, 60], 50);
        assert_eq!(seq.tracks(), &[50, 40, 60]);
        let seq = sstf(&[60, 40], 50);
        assert_eq!(seq.tracks(), &[50, 60, 40]);
    }

    #[test]
    fn test_sstf_higher_track_tie() {
        let seq = sstf_with(&[40, 60], 50, TieBreaker::HigherTrack);
        assert_eq!(seq.tracks(), &[50, 60, 40]);
    }

    #[test]
    fn test_sstf_duplicates() {
        let seq = sstf(&[30, 10, 30], 25);
        assert_eq!(seq.tracks(), &[25, 30, 30, 10]);
    }

    #[test]
    fn test_sstf_greedy_property() {
        let mut rng = SmallRng::seed_from_u64(99);
        for _ in 0..30 {
            let reqs = random_requests(&mut rng, 40, 1000);
            let seq = sstf(&reqs, 500);
            let mut remaining = reqs.clone();
            let tracks = seq.tracks();
            for w in tracks.windows(2) {
                let (from, to) = (w[0], w[1]);
                let min = remaining.iter().map(|t| t.abs_diff(from)).min().unwrap();
                assert_eq!(to.abs_diff(from), min);
                let pos = remaining.iter().position(|&t| t == to).unwrap();
                remaining.remove(pos);
            }
            assert!(remaining.is_empty());
        }
    }

    #[test]
    fn test_tie_breaker_serde() {
        let tb: TieBreaker = serde_json::from_str("\"lower_track\"").unwrap();
        assert_eq!(tb, TieBreaker::LowerTrack);
    }
}
