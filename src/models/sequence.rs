//! Service sequence model.
//!
//! A service sequence is the ordered list of tracks the head visits,
//! starting at the initial head position. SCAN and C-SCAN insert
//! synthetic boundary visits that are not requests; their indices are
//! tracked so callers can tell them apart from serviced requests.

use serde::Serialize;

use super::{DeviceSize, SeekDistance, Track};

/// Total head travel across a sequence of positions.
///
/// `sum(|t[i] - t[i-1]|)` over consecutive pairs. Zero for fewer than
/// two positions. Every algorithm's distance goes through this function.
pub fn seek_distance(tracks: &[Track]) -> SeekDistance {
    tracks
        .windows(2)
        .map(|w| SeekDistance::from(w[0].abs_diff(w[1])))
        .sum()
}

/// The order in which the head visits tracks, and the resulting travel.
///
/// `tracks()[0]` is always the initial head position. Immutable once built;
/// the seek distance is derived from the tracks at construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServiceSequence {
    tracks: Vec<Track>,
    boundaries: Vec<usize>,
    seek_distance: SeekDistance,
}

impl ServiceSequence {
    /// Visited tracks, head first.
    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    /// Initial head position.
    pub fn head(&self) -> Track {
        self.tracks[0]
    }

    /// Total head travel in track units.
    pub fn seek_distance(&self) -> SeekDistance {
        self.seek_distance
    }

    /// Number of positions, including the head.
    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    /// Always false: a sequence contains at least the head.
    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    /// Whether the position at `index` is a synthetic boundary visit.
    pub fn is_boundary(&self, index: usize) -> bool {
        self.boundaries.contains(&index)
    }

    /// Synthetic boundary tracks, in visit order.
    pub fn boundary_visits(&self) -> Vec<Track> {
        self.boundaries.iter().map(|&i| self.tracks[i]).collect()
    }

    /// Requests in the order they were serviced (head and boundaries excluded).
    pub fn serviced(&self) -> Vec<Track> {
        self.tracks
            .iter()
            .enumerate()
            .skip(1)
            .filter(|(i, _)| !self.is_boundary(*i))
            .map(|(_, &t)| t)
            .collect()
    }

    /// Number of times the head changes direction.
    ///
    /// Zero-length moves do not count as a direction.
    pub fn reversals(&self) -> usize {
        let mut last: Option<bool> = None;
        let mut count = 0;
        for w in self.tracks.windows(2) {
            if w[0] == w[1] {
                continue;
            }
            let upward = w[1] > w[0];
            if last.is_some_and(|prev| prev != upward) {
                count += 1;
            }
            last = Some(upward);
        }
        count
    }

    /// Average travel per serviced request. `None` if nothing was serviced.
    pub fn mean_seek_per_request(&self) -> Option<f64> {
        let serviced = self.len() - 1 - self.boundaries.len();
        if serviced == 0 {
            return None;
        }
        Some(self.seek_distance as f64 / serviced as f64)
    }

    /// Consumes the sequence, returning `(tracks, seek_distance)`.
    pub fn into_parts(self) -> (Vec<Track>, SeekDistance) {
        (self.tracks, self.seek_distance)
    }
}

/// Incremental construction of a [`ServiceSequence`].
#[derive(Debug)]
pub(crate) struct SequenceBuilder {
    tracks: Vec<Track>,
    boundaries: Vec<usize>,
}

impl SequenceBuilder {
    /// Starts a sequence at the head position.
    pub(crate) fn starting_at(head: Track, capacity: usize) -> Self {
        let mut tracks = Vec::with_capacity(capacity + 1);
        tracks.push(head);
        Self {
            tracks,
            boundaries: Vec::new(),
        }
    }

    /// Appends serviced requests in order.
    pub(crate) fn service(mut self, requests: impl IntoIterator<Item = Track>) -> Self {
        self.tracks.extend(requests);
        self
    }

    /// Appends one serviced request.
    pub(crate) fn push(&mut self, track: Track) {
        self.tracks.push(track);
    }

    /// Appends a synthetic boundary visit.
    pub(crate) fn boundary(mut self, track: Track) -> Self {
        self.boundaries.push(self.tracks.len());
        self.tracks.push(track);
        self
    }

    pub(crate) fn finish(self) -> ServiceSequence {
        let seek_distance = seek_distance(&self.tracks);
        ServiceSequence {
            tracks: self.tracks,
            boundaries: self.boundaries,
            seek_distance,
        }
    }
}

/// Last addressable track of a device (`device_size - 1`, or 0 for an empty device).
pub(crate) fn last_track(device_size: DeviceSize) -> Track {
    device_size.saturating_sub(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seek_distance() {
        assert_eq!(seek_distance(&[53, 98, 183, 37]), 45 + 85 + 146);
        assert_eq!(seek_distance(&[10]), 0);
        assert_eq!(seek_distance(&[]), 0);
        assert_eq!(seek_distance(&[7, 7, 7]), 0);
    }

    #[test]
    fn test_builder_tracks_boundaries() {
        let seq = SequenceBuilder::starting_at(50, 3)
            .service([60, 70])
            .boundary(99)
            .boundary(0)
            .service([10])
            .finish();

        assert_eq!(seq.tracks(), &[50, 60, 70, 99, 0, 10]);
        assert_eq!(seq.head(), 50);
        assert_eq!(seq.boundary_visits(), vec![99, 0]);
        assert_eq!(seq.serviced(), vec![60, 70, 10]);
        assert!(seq.is_boundary(3));
        assert!(!seq.is_boundary(0));
        assert_eq!(seq.seek_distance(), 10 + 10 + 29 + 99 + 10);
    }

    #[test]
    fn test_head_only() {
        let seq = SequenceBuilder::starting_at(42, 0).finish();
        assert_eq!(seq.len(), 1);
        assert!(!seq.is_empty());
        assert_eq!(seq.seek_distance(), 0);
        assert!(seq.serviced().is_empty());
        assert_eq!(seq.mean_seek_per_request(), None);
    }

    #[test]
    fn test_reversals() {
        let seq = SequenceBuilder::starting_at(50, 4)
            .service([60, 60, 40, 30, 90])
            .finish();
        assert_eq!(seq.reversals(), 2);

        let monotone = SequenceBuilder::starting_at(0, 2).service([1, 2]).finish();
        assert_eq!(monotone.reversals(), 0);
    }

    #[test]
    fn test_mean_seek_excludes_boundaries() {
        let seq = SequenceBuilder::starting_at(0, 2)
            .service([10])
            .boundary(99)
            .finish();
        // 99 travel over one serviced request
        assert_eq!(seq.mean_seek_per_request(), Some(99.0));
    }

    #[test]
    fn test_into_parts() {
        let seq = SequenceBuilder::starting_at(5, 1).service([9]).finish();
        assert_eq!(seq.into_parts(), (vec![5, 9], 4));
    }

    #[test]
    fn test_last_track() {
        assert_eq!(last_track(200), 199);
        assert_eq!(last_track(1), 0);
        assert_eq!(last_track(0), 0);
    }

    #[test]
    fn test_serialize() {
        let seq = SequenceBuilder::starting_at(1, 1).boundary(9).finish();
        let json = serde_json::to_value(&seq).unwrap();
        assert_eq!(json["tracks"], serde_json::json!([1, 9]));
        assert_eq!(json["boundaries"], serde_json::json!([1]));
        assert_eq!(json["seek_distance"], 8);
    }
}
