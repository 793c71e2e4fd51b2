//! Synthetic request workloads.

use rand::Rng;

use super::{DeviceSize, Track};

/// Generates `count` uniformly distributed requests in `[0, device_size)`.
///
/// Duplicates are allowed. Returns an empty list when `device_size` is zero.
///
/// # Example
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::SmallRng;
/// use u_disk_schedule::models::random_requests;
///
/// let mut rng = SmallRng::seed_from_u64(7);
/// let requests = random_requests(&mut rng, 16, 200);
/// assert_eq!(requests.len(), 16);
/// assert!(requests.iter().all(|&t| t < 200));
/// ```
pub fn random_requests<R: Rng>(rng: &mut R, count: usize, device_size: DeviceSize) -> Vec<Track> {
    if device_size == 0 {
        return Vec::new();
    }
    (0..count)
        .map(|_| rng.random_range(0..device_size))
        .collect()
}
