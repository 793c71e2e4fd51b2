//! Disk head scheduling for the U-Engine ecosystem.
//!
//! Computes the order in which a storage device's head services a batch
//! of pending track requests, and the total head travel (seek distance)
//! that order costs. Six classic strategies share one contract and can be
//! run individually or compared side by side.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Track`, `DeviceSize`, `SeekDistance`,
//!   `ServiceSequence`, and the shared `seek_distance` function
//! - **`algorithms`**: FCFS, SSTF, SCAN, C-SCAN, LOOK, C-LOOK and the
//!   `Algorithm` selector
//! - **`validation`**: Request text parsing and range checks
//! - **`scheduler`**: Validating `DiskScheduler` and all-algorithm `Comparison`
//! - **`playback`**: Step-through cursor for animating a sequence
//!
//! # Architecture
//!
//! The algorithms are pure functions over borrowed input with no shared
//! state, so they may be called concurrently without synchronization.
//! Range checking lives in `validation` and is applied by `scheduler`;
//! the algorithms themselves trust their input.
//!
//! # References
//!
//! - Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 11
//! - Teorey & Pinkerton (1972), "A Comparative Analysis of Disk Scheduling Policies"

pub mod algorithms;
pub mod error;
pub mod models;
pub mod playback;
pub mod scheduler;
pub mod validation;

pub use error::{Error, Result};
