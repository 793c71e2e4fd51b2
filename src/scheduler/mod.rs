//! Validated scheduling and algorithm comparison.
//!
//! `DiskScheduler` is the guarded entry point: it checks input against
//! the device bounds before handing it to an algorithm. `Comparison` runs
//! all six algorithms on the same input and ranks them by seek distance.
//!
//! # Example
//!
//! ```
//! use u_disk_schedule::algorithms::Algorithm;
//! use u_disk_schedule::scheduler::{DiskScheduler, SchedulerConfig};
//!
//! let scheduler = DiskScheduler::new(SchedulerConfig::default().with_device_size(200));
//! let requests = [98, 183, 37, 122, 14, 124, 65, 67];
//!
//! let comparison = scheduler.compare(&requests, 53).unwrap();
//! assert_eq!(comparison.best().algorithm, Algorithm::Sstf);
//! assert_eq!(comparison.best().seek_distance(), 236);
//! ```

mod comparison;
mod disk;

pub use comparison::{Comparison, ComparisonEntry};
pub use disk::{DiskScheduler, ScheduleRequest, SchedulerConfig};
