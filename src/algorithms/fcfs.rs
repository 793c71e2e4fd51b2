use crate::models::{SequenceBuilder, ServiceSequence, Track};

/// First-Come-First-Served.
///
/// Services requests exactly in caller order: `[head] + requests`.
pub fn fcfs(requests: &[Track], head: Track) -> ServiceSequence {
    SequenceBuilder::starting_at(head, requests.len())
        .service(requests.iter().copied())
        .finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fcfs_preserves_order() {
        let reqs = [98, 183, 37, 122, 14, 124, 65, 67];
        let seq = fcfs(&reqs, 53);
        assert_eq!(&seq.tracks()[1..], &reqs);
        assert_eq!(seq.seek_distance(), 640);
    }

    #[test]
    fn test_fcfs_duplicates_visited_each_time() {
        let seq = fcfs(&[10, 10, 20], 0);
        assert_eq!(seq.tracks(), &[0, 10, 10, 20]);
        assert_eq!(seq.seek_distance(), 20);
    }
}
