//! Disk head scheduling algorithms.
//!
//! Each algorithm maps `(requests, head[, device_size])` to a
//! [`ServiceSequence`]. They are pure functions: the caller's request slice
//! is only read, and identical inputs always yield identical sequences.
//!
//! | Algorithm | Order |
//! |-----------|-------|
//! | FCFS | Caller order |
//! | SSTF | Nearest remaining request first |
//! | SCAN | Up through `>= head`, to `device_size - 1`, then down through `< head` |
//! | C-SCAN | Up through `>= head`, to `device_size - 1`, jump to `0`, up through `< head` |
//! | LOOK | Up through `>= head`, then down through `< head` |
//! | C-LOOK | Up through `>= head`, then up from the lowest `< head` |
//!
//! # Input trust
//! These functions perform no range checks. Tracks outside
//! `0..device_size` produce well-defined but meaningless sequences. Use
//! [`crate::scheduler::DiskScheduler`] for validated scheduling.
//!
//! # Usage
//!
//! ```
//! use u_disk_schedule::algorithms::Algorithm;
//!
//! let requests = [98, 183, 37, 122, 14, 124, 65, 67];
//! let seq = Algorithm::CScan.schedule(&requests, 53, 200);
//! assert_eq!(seq.seek_distance(), 382);
//! assert_eq!(seq.boundary_visits(), vec![199, 0]);
//! ```
//!
//! # References
//!
//! - Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 11.2
//! - Denning (1967), "Effects of Scheduling on File Memory Operations"

mod fcfs;
mod sstf;
mod sweep;

pub use fcfs::fcfs;
pub use sstf::{sstf, sstf_with, TieBreaker};
pub use sweep::{c_look, c_scan, look, scan};

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::models::{DeviceSize, ServiceSequence, Track};

/// The closed set of scheduling strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Algorithm {
    /// First-Come-First-Served.
    #[serde(rename = "FCFS")]
    Fcfs,
    /// Shortest Seek Time First.
    #[serde(rename = "SSTF")]
    Sstf,
    /// Elevator sweep with a boundary visit.
    #[serde(rename = "SCAN")]
    Scan,
    /// Circular SCAN.
    #[serde(rename = "C-SCAN")]
    CScan,
    /// Elevator sweep without boundary visits.
    #[serde(rename = "LOOK")]
    Look,
    /// Circular LOOK.
    #[serde(rename = "C-LOOK")]
    CLook,
}

impl Algorithm {
    /// All algorithms in canonical order.
    ///
    /// Comparisons iterate in this order and break ties by it.
    pub const ALL: [Algorithm; 6] = [
        Algorithm::Fcfs,
        Algorithm::Sstf,
        Algorithm::Scan,
        Algorithm::CScan,
        Algorithm::Look,
        Algorithm::CLook,
    ];

    /// Display label (e.g., "C-SCAN").
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Fcfs => "FCFS",
            Algorithm::Sstf => "SSTF",
            Algorithm::Scan => "SCAN",
            Algorithm::CScan => "C-SCAN",
            Algorithm::Look => "LOOK",
            Algorithm::CLook => "C-LOOK",
        }
    }

    /// Long-form description.
    pub fn description(self) -> &'static str {
        match self {
            Algorithm::Fcfs => "First-Come-First-Served",
            Algorithm::Sstf => "Shortest Seek Time First",
            Algorithm::Scan => "SCAN (elevator)",
            Algorithm::CScan => "Circular SCAN",
            Algorithm::Look => "LOOK",
            Algorithm::CLook => "Circular LOOK",
        }
    }

    /// Whether the algorithm visits the device boundary and so depends on `device_size`.
    pub fn uses_device_size(self) -> bool {
        matches!(self, Algorithm::Scan | Algorithm::CScan)
    }

    /// Computes the service sequence for this algorithm.
    ///
    /// `device_size` is ignored by algorithms that never visit a boundary.
    /// SSTF uses [`TieBreaker::FirstInQueue`].
    pub fn schedule(
        self,
        requests: &[Track],
        head: Track,
        device_size: DeviceSize,
    ) -> ServiceSequence {
        match self {
            Algorithm::Fcfs => fcfs(requests, head),
            Algorithm::Sstf => sstf(requests, head),
            Algorithm::Scan => scan(requests, head, device_size),
            Algorithm::CScan => c_scan(requests, head, device_size),
            Algorithm::Look => look(requests, head),
            Algorithm::CLook => c_look(requests, head),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = Error;

    /// Parses a label case-insensitively; hyphens and underscores are optional.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .map(|c| c.to_ascii_uppercase())
            .collect();

        match normalized.as_str() {
            "FCFS" => Ok(Algorithm::Fcfs),
            "SSTF" => Ok(Algorithm::Sstf),
            "SCAN" => Ok(Algorithm::Scan),
            "CSCAN" => Ok(Algorithm::CScan),
            "LOOK" => Ok(Algorithm::Look),
            "CLOOK" => Ok(Algorithm::CLook),
            _ => Err(Error::UnknownAlgorithm(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{random_requests, seek_distance};
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    const REQUESTS: [Track; 8] = [98, 183, 37, 122, 14, 124, 65, 67];
    const HEAD: Track = 53;
    const DEVICE: DeviceSize = 200;

    fn sorted(mut v: Vec<Track>) -> Vec<Track> {
        v.sort_unstable();
        v
    }

    #[test]
    fn test_reference_distances() {
        let expected = [
            (Algorithm::Fcfs, 640),
            (Algorithm::Sstf, 236),
            (Algorithm::Scan, 331),
            (Algorithm::CScan, 382),
            (Algorithm::Look, 299),
            (Algorithm::CLook, 322),
        ];
        for (alg, distance) in expected {
            assert_eq!(
                alg.schedule(&REQUESTS, HEAD, DEVICE).seek_distance(),
                distance,
                "{alg}"
            );
        }
    }

    #[test]
    fn test_name_roundtrip() {
        for alg in Algorithm::ALL {
            assert_eq!(alg.name().parse::<Algorithm>().unwrap(), alg);
            assert_eq!(alg.to_string(), alg.name());
        }
    }

    #[test]
    fn test_parse_lenient() {
        assert_eq!("cscan".parse::<Algorithm>().unwrap(), Algorithm::CScan);
        assert_eq!(" c_look ".parse::<Algorithm>().unwrap(), Algorithm::CLook);
        assert_eq!("Sstf".parse::<Algorithm>().unwrap(), Algorithm::Sstf);
    }

    #[test]
    fn test_parse_unknown() {
        let err = "elevator".parse::<Algorithm>().unwrap_err();
        assert!(matches!(err, Error::UnknownAlgorithm(ref s) if s == "elevator"));
    }

    #[test]
    fn test_uses_device_size() {
        let users: Vec<_> = Algorithm::ALL
            .into_iter()
            .filter(|a| a.uses_device_size())
            .collect();
        assert_eq!(users, vec![Algorithm::Scan, Algorithm::CScan]);
    }

    #[test]
    fn test_serde_labels() {
        let json = serde_json::to_string(&Algorithm::CLook).unwrap();
        assert_eq!(json, "\"C-LOOK\"");
        let back: Algorithm = serde_json::from_str("\"C-SCAN\"").unwrap();
        assert_eq!(back, Algorithm::CScan);
    }

    #[test]
    fn test_head_first_and_distance_consistent() {
        let mut rng = SmallRng::seed_from_u64(11);
        for _ in 0..50 {
            let reqs = random_requests(&mut rng, 25, 500);
            let head = random_requests(&mut rng, 1, 500)[0];
            for alg in Algorithm::ALL {
                let seq = alg.schedule(&reqs, head, 500);
                assert_eq!(seq.head(), head);
                assert_eq!(seq.seek_distance(), seek_distance(seq.tracks()));
            }
        }
    }

    #[test]
    fn test_serviced_multiset_matches_requests() {
        let mut rng = SmallRng::seed_from_u64(5);
        for _ in 0..50 {
            let reqs = random_requests(&mut rng, 30, 64);
            let head = random_requests(&mut rng, 1, 64)[0];
            for alg in Algorithm::ALL {
                let seq = alg.schedule(&reqs, head, 64);
                assert_eq!(sorted(seq.serviced()), sorted(reqs.clone()), "{alg}");
                let expected_boundaries = match alg {
                    Algorithm::Scan => vec![63],
                    Algorithm::CScan => vec![63, 0],
                    _ => vec![],
                };
                assert_eq!(seq.boundary_visits(), expected_boundaries, "{alg}");
            }
        }
    }

    #[test]
    fn test_deterministic() {
        for alg in Algorithm::ALL {
            let a = alg.schedule(&REQUESTS, HEAD, DEVICE);
            let b = alg.schedule(&REQUESTS, HEAD, DEVICE);
            assert_eq!(a, b);
        }
    }

    #[test]
    fn test_input_not_mutated() {
        let reqs = REQUESTS.to_vec();
        for alg in Algorithm::ALL {
            let _ = alg.schedule(&reqs, HEAD, DEVICE);
        }
        assert_eq!(reqs, REQUESTS.to_vec());
    }

    #[test]
    fn test_empty_requests() {
        for alg in [Algorithm::Fcfs, Algorithm::Sstf, Algorithm::Look, Algorithm::CLook] {
            let seq = alg.schedule(&[], HEAD, DEVICE);
            assert_eq!(seq.tracks(), &[HEAD]);
            assert_eq!(seq.seek_distance(), 0);
        }
        // Boundary visits are unconditional
        assert_eq!(Algorithm::Scan.schedule(&[], HEAD, DEVICE).tracks(), &[53, 199]);
        assert_eq!(Algorithm::CScan.schedule(&[], HEAD, DEVICE).seek_distance(), 146 + 199);
    }

    #[test]
    fn test_zero_distance_when_all_at_head() {
        let reqs = [7, 7, 7];
        for alg in [Algorithm::Fcfs, Algorithm::Sstf, Algorithm::Look, Algorithm::CLook] {
            assert_eq!(alg.schedule(&reqs, 7, 100).seek_distance(), 0);
        }
        assert!(Algorithm::Scan.schedule(&reqs, 7, 100).seek_distance() > 0);
        // Single-track device: boundaries coincide with the head
        assert_eq!(Algorithm::Scan.schedule(&[0], 0, 1).seek_distance(), 0);
        assert_eq!(Algorithm::CScan.schedule(&[0], 0, 1).seek_distance(), 0);
    }
}
