//! Sweep (elevator) family: SCAN, C-SCAN, LOOK, C-LOOK.
//!
//! All four sweep upward from the head first, servicing requests
//! `>= head` in ascending order. They differ in what happens after the
//! last upward request:
//!
//! - SCAN continues to `device_size - 1`, then reverses.
//! - C-SCAN continues to `device_size - 1`, jumps to `0`, and keeps ascending.
//! - LOOK reverses at the last request.
//! - C-LOOK jumps to the lowest pending request and keeps ascending.
//!
//! # Complexity
//! O(n log n) for n requests.

use crate::models::{last_track, DeviceSize, SequenceBuilder, ServiceSequence, Track};

/// Requests split around the head: `(below, at_or_above)`, each ascending.
fn partition(requests: &[Track], head: Track) -> (Vec<Track>, Vec<Track>) {
    let (mut below, mut above): (Vec<Track>, Vec<Track>) =
        requests.iter().copied().partition(|&t| t < head);
    below.sort();
    above.sort();
    (below, above)
}

/// SCAN: ascending to the boundary, then descending.
///
/// `[head] + asc(>= head) + [device_size - 1] + desc(< head)`
pub fn scan(requests: &[Track], head: Track, device_size: DeviceSize) -> ServiceSequence {
    let (below, above) = partition(requests, head);
    SequenceBuilder::starting_at(head, requests.len() + 1)
        .service(above)
        .boundary(last_track(device_size))
        .service(below.into_iter().rev())
        .finish()
}

/// C-SCAN: ascending to the boundary, wrap to track 0, ascending again.
///
/// `[head] + asc(>= head) + [device_size - 1, 0] + asc(< head)`
pub fn c_scan(requests: &[Track], head: Track, device_size: DeviceSize) -> ServiceSequence {
    let (below, above) = partition(requests, head);
    SequenceBuilder::starting_at(head, requests.len() + 2)
        .service(above)
        .boundary(last_track(device_size))
        .boundary(0)
        .service(below)
        .finish()
}

/// LOOK: ascending, then descending, no boundary visit.
///
/// `[head] + asc(>= head) + desc(< head)`
pub fn look(requests: &[Track], head: Track) -> ServiceSequence {
    let (below, above) = partition(requests, head);
    SequenceBuilder::starting_at(head, requests.len())
        .service(above)
        .service(below.into_iter().rev())
        .finish()
}

/// C-LOOK: ascending, jump to the lowest pending request, ascending again.
///
/// `[head] + asc(>= head) + asc(< head)`
pub fn c_look(requests: &[Track], head: Track) -> ServiceSequence {
    let (below, above) = partition(requests, head);
    SequenceBuilder::starting_at(head, requests.len())
        .service(above)
        .service(below)
        .finish()
}
