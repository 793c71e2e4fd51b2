//! Disk scheduling domain models.
//!
//! Positions on the medium are plain unsigned integers. A device of size
//! `n` addresses tracks `0..n`; the head starts on one of them and every
//! pending request names one of them.
//!
//! | Type | Meaning |
//! |------|---------|
//! | [`Track`] | Addressable position (track / cylinder) |
//! | [`DeviceSize`] | Number of tracks; valid tracks are `0..device_size` |
//! | [`SeekDistance`] | Total head travel in track units |
//! | [`ServiceSequence`] | Head-first visit order with its seek distance |

mod sequence;
mod workload;

pub(crate) use sequence::{last_track, SequenceBuilder};
pub use sequence::{seek_distance, ServiceSequence};
pub use workload::random_requests;

/// A position on the storage medium.
pub type Track = u32;

/// Number of addressable tracks on a device.
pub type DeviceSize = u32;

/// Sum of absolute track deltas across a service sequence.
pub type SeekDistance = u64;
