//! Step-through playback of a service sequence.
//!
//! Renderers that animate head movement need a cursor into the sequence.
//! `Playback` is that cursor as an explicit value owned by the caller:
//! load a sequence, then move forward and back one step at a time. The
//! index is clamped to the sequence bounds.
//!
//! # Example
//!
//! ```
//! use u_disk_schedule::algorithms::Algorithm;
//! use u_disk_schedule::playback::Playback;
//!
//! let seq = Algorithm::Look.schedule(&[60, 40], 50, 100);
//! let mut playback = Playback::new();
//! playback.load(&seq, 100);
//!
//! assert_eq!(playback.current(), Some(50));
//! playback.advance();
//! assert_eq!(playback.current(), Some(60));
//! playback.advance();
//! playback.advance(); // clamped
//! assert_eq!(playback.current(), Some(40));
//! assert_eq!(playback.travelled(), 30);
//! ```

use serde::Serialize;

use crate::models::{seek_distance, DeviceSize, SeekDistance, ServiceSequence, Track};

/// Snapshot of the playback state at one step.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Frame {
    /// Current step index (0 = initial head).
    pub index: usize,
    /// Last valid step index.
    pub last_index: usize,
    /// Head position at this step.
    pub track: Track,
    /// Whether this step is a synthetic boundary visit.
    pub boundary: bool,
    /// Travel from the start up to this step.
    pub travelled: SeekDistance,
    /// `track / device_size`, if the device size is known.
    pub normalized_position: Option<f64>,
}

/// Cursor over a loaded service sequence.
#[derive(Debug, Clone, Default)]
pub struct Playback {
    sequence: Option<ServiceSequence>,
    index: usize,
    device_size: DeviceSize,
}

impl Playback {
    /// Creates an empty playback.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads a sequence and rewinds to the first step.
    pub fn load(&mut self, sequence: &ServiceSequence, device_size: DeviceSize) {
        self.sequence = Some(sequence.clone());
        self.index = 0;
        self.device_size = device_size;
    }

    /// Moves one step forward. No-op at the last step or when empty.
    pub fn advance(&mut self) {
        if let Some(last) = self.last_index() {
            self.index = (self.index + 1).min(last);
        }
    }

    /// Moves one step back. No-op at the first step or when empty.
    pub fn retreat(&mut self) {
        if self.sequence.is_some() {
            self.index = self.index.saturating_sub(1);
        }
    }

    /// Rewinds to the first step.
    pub fn reset(&mut self) {
        self.index = 0;
    }

    /// Drops the loaded sequence.
    pub fn clear(&mut self) {
        self.sequence = None;
        self.index = 0;
        self.device_size = 0;
    }

    /// Loaded sequence, if any.
    pub fn sequence(&self) -> Option<&ServiceSequence> {
        self.sequence.as_ref()
    }

    /// Current step index.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Device size given at load time (0 when empty).
    pub fn device_size(&self) -> DeviceSize {
        self.device_size
    }

    /// Last valid step index, or `None` when empty.
    pub fn last_index(&self) -> Option<usize> {
        self.sequence.as_ref().map(|s| s.len().saturating_sub(1))
    }

    /// Head position at the current step.
    pub fn current(&self) -> Option<Track> {
        self.sequence
            .as_ref()
            .and_then(|s| s.tracks().get(self.index).copied())
    }

    /// Whether the cursor is at the first step.
    pub fn is_at_start(&self) -> bool {
        self.index == 0
    }

    /// Whether the cursor is at the last step (true when empty).
    pub fn is_at_end(&self) -> bool {
        self.last_index().map_or(true, |last| self.index >= last)
    }

    /// Travel from the start up to the current step.
    pub fn travelled(&self) -> SeekDistance {
        self.sequence
            .as_ref()
            .map(|s| seek_distance(&s.tracks()[..=self.index]))
            .unwrap_or(0)
    }

    /// Current track divided by the device size.
    pub fn normalized_position(&self) -> Option<f64> {
        if self.device_size == 0 {
            return None;
        }
        self.current()
            .map(|t| f64::from(t) / f64::from(self.device_size))
    }

    /// Snapshot for rendering. `None` when nothing is loaded.
    pub fn frame(&self) -> Option<Frame> {
        let sequence = self.sequence.as_ref()?;
        Some(Frame {
            index: self.index,
            last_index: sequence.len().saturating_sub(1),
            track: self.current()?,
            boundary: sequence.is_boundary(self.index),
            travelled: self.travelled(),
            normalized_position: self.normalized_position(),
        })
    }
}
