//! Guarded disk scheduler.
//!
//! # Algorithm
//!
//! 1. Resolve the device size (request override, else config).
//! 2. Validate requests and head against `0..device_size` (unless disabled).
//! 3. Dispatch to the selected algorithm.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::Comparison;
use crate::algorithms::{sstf_with, Algorithm, TieBreaker};
use crate::error::Result;
use crate::models::{DeviceSize, ServiceSequence, Track};
use crate::validation::validate_input;

/// Scheduler settings.
///
/// All fields have defaults, so partial JSON like `{"device_size": 5000}`
/// deserializes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SchedulerConfig {
    /// Number of tracks on the device.
    pub device_size: DeviceSize,
    /// SSTF tie-breaking rule.
    pub tie_breaker: TieBreaker,
    /// Reject out-of-range input before scheduling.
    ///
    /// When `false`, input goes straight to the algorithms unchecked.
    pub validate: bool,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            device_size: 200,
            tie_breaker: TieBreaker::FirstInQueue,
            validate: true,
        }
    }
}

impl SchedulerConfig {
    /// Sets the device size.
    pub fn with_device_size(mut self, device_size: DeviceSize) -> Self {
        self.device_size = device_size;
        self
    }

    /// Sets the SSTF tie-breaker.
    pub fn with_tie_breaker(mut self, tie_breaker: TieBreaker) -> Self {
        self.tie_breaker = tie_breaker;
        self
    }

    /// Enables or disables input validation.
    pub fn with_validation(mut self, validate: bool) -> Self {
        self.validate = validate;
        self
    }
}

/// Input container for scheduling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleRequest {
    /// Pending requests, in arrival order.
    pub requests: Vec<Track>,
    /// Initial head position.
    pub head: Track,
    /// Device size override. `None` = use the scheduler's config.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub device_size: Option<DeviceSize>,
}

impl ScheduleRequest {
    /// Creates a new schedule request.
    pub fn new(requests: Vec<Track>, head: Track) -> Self {
        Self {
            requests,
            head,
            device_size: None,
        }
    }

    /// Overrides the device size for this request.
    pub fn with_device_size(mut self, device_size: DeviceSize) -> Self {
        self.device_size = Some(device_size);
        self
    }
}

/// Validating front end to the scheduling algorithms.
///
/// # Example
///
/// ```
/// use u_disk_schedule::algorithms::Algorithm;
/// use u_disk_schedule::scheduler::{DiskScheduler, SchedulerConfig};
///
/// let scheduler = DiskScheduler::new(SchedulerConfig::default());
/// let seq = scheduler.schedule(Algorithm::Scan, &[98, 183, 37], 53).unwrap();
/// assert_eq!(seq.tracks(), &[53, 98, 183, 199, 37]);
///
/// assert!(scheduler.schedule(Algorithm::Scan, &[250], 53).is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct DiskScheduler {
    config: SchedulerConfig,
}

impl DiskScheduler {
    /// Creates a scheduler with the given config.
    pub fn new(config: SchedulerConfig) -> Self {
        Self { config }
    }

    /// Active configuration.
    pub fn config(&self) -> &SchedulerConfig {
        &self.config
    }

    /// Schedules requests with one algorithm on the configured device.
    pub fn schedule(
        &self,
        algorithm: Algorithm,
        requests: &[Track],
        head: Track,
    ) -> Result<ServiceSequence> {
        self.schedule_on(algorithm, requests, head, self.config.device_size)
    }

    /// Schedules a [`ScheduleRequest`] with one algorithm.
    pub fn schedule_request(
        &self,
        algorithm: Algorithm,
        request: &ScheduleRequest,
    ) -> Result<ServiceSequence> {
        let device_size = request.device_size.unwrap_or(self.config.device_size);
        self.schedule_on(algorithm, &request.requests, request.head, device_size)
    }

    /// Runs all six algorithms on the configured device.
    pub fn compare(&self, requests: &[Track], head: Track) -> Result<Comparison> {
        self.compare_on(requests, head, self.config.device_size)
    }

    /// Runs all six algorithms on a [`ScheduleRequest`].
    pub fn compare_request(&self, request: &ScheduleRequest) -> Result<Comparison> {
        let device_size = request.device_size.unwrap_or(self.config.device_size);
        self.compare_on(&request.requests, request.head, device_size)
    }

    fn schedule_on(
        &self,
        algorithm: Algorithm,
        requests: &[Track],
        head: Track,
        device_size: DeviceSize,
    ) -> Result<ServiceSequence> {
        self.check(requests, head, device_size)?;
        let sequence = self.dispatch(algorithm, requests, head, device_size);
        debug!(
            algorithm = algorithm.name(),
            requests = requests.len(),
            head,
            device_size,
            seek_distance = sequence.seek_distance(),
            "scheduled requests"
        );
        Ok(sequence)
    }

    fn compare_on(
        &self,
        requests: &[Track],
        head: Track,
        device_size: DeviceSize,
    ) -> Result<Comparison> {
        self.check(requests, head, device_size)?;
        let comparison = Comparison::from_sequences(
            Algorithm::ALL.map(|alg| (alg, self.dispatch(alg, requests, head, device_size))),
        );
        let best = comparison.best();
        debug!(
            requests = requests.len(),
            head,
            device_size,
            best = best.algorithm.name(),
            seek_distance = best.seek_distance(),
            "compared algorithms"
        );
        Ok(comparison)
    }

    fn check(&self, requests: &[Track], head: Track, device_size: DeviceSize) -> Result<()> {
        if !self.config.validate {
            trace!("input validation disabled");
            return Ok(());
        }
        validate_input(requests, head, device_size)?;
        Ok(())
    }

    fn dispatch(
        &self,
        algorithm: Algorithm,
        requests: &[Track],
        head: Track,
        device_size: DeviceSize,
    ) -> ServiceSequence {
        match algorithm {
            Algorithm::Sstf => sstf_with(requests, head, self.config.tie_breaker),
            other => other.schedule(requests, head, device_size),
        }
    }
}
