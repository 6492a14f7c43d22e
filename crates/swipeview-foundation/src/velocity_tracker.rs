//! Horizontal velocity estimation for release decisions.
//!
//! Keeps a short, time-bounded window of positions and fits a line through
//! it with weighted least squares, recent samples weighted most.

use crate::input::{GestureSample, PointerId};
use smallvec::SmallVec;

/// Maximum samples kept in the window.
const HISTORY_SIZE: usize = 20;

/// Only samples within the last 100ms contribute to the estimate.
const HORIZON_MS: i64 = 100;

/// A gap this long between consecutive samples means the pointer stopped.
const ASSUME_STOPPED_MS: i64 = 40;

/// Per-step weight decay, newest sample first.
const RECENCY_DECAY: f32 = 0.95;

#[derive(Clone, Copy, Debug, PartialEq)]
struct DataPointAtTime {
    time_ms: i64,
    position: f32,
}

/// Velocity estimator for a single pointer.
///
/// The window binds to the first pointer that feeds it after a reset;
/// samples and queries for any other pointer are ignored and read as 0.
#[derive(Clone, Debug, Default)]
pub struct VelocityEstimator {
    pointer: Option<PointerId>,
    /// Oldest first.
    samples: SmallVec<[DataPointAtTime; HISTORY_SIZE]>,
}

impl VelocityEstimator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears all tracked data.
    pub fn reset(&mut self) {
        self.pointer = None;
        self.samples.clear();
    }

    pub fn sample_count(&self) -> usize {
        self.samples.len()
    }

    /// Appends a sample and drops the ones that fell out of the horizon.
    ///
    /// A sample identical to the newest one is a re-delivery and is
    /// ignored, as is a sample older than the newest one. A sample with the
    /// newest timestamp but a new position replaces it.
    pub fn add_sample(&mut self, pointer: PointerId, sample: GestureSample) {
        match self.pointer {
            Some(bound) if bound != pointer => {
                log::trace!("velocity: ignoring sample from pointer {}", pointer);
                return;
            }
            _ => self.pointer = Some(pointer),
        }

        let point = DataPointAtTime {
            time_ms: sample.timestamp_millis,
            position: sample.raw_x,
        };

        if let Some(newest) = self.samples.last_mut() {
            if point.time_ms < newest.time_ms {
                log::trace!(
                    "velocity: ignoring sample at {}ms earlier than {}ms",
                    point.time_ms,
                    newest.time_ms
                );
                return;
            }
            if point.time_ms == newest.time_ms {
                *newest = point;
                return;
            }
        }

        self.samples.push(point);

        let horizon_start = point.time_ms.saturating_sub(HORIZON_MS);
        let stale = self
            .samples
            .iter()
            .take_while(|sample| sample.time_ms < horizon_start)
            .count();
        let overflow = self.samples.len().saturating_sub(HISTORY_SIZE);
        let drop = stale.max(overflow);
        if drop > 0 {
            self.samples.drain(..drop);
        }
    }

    /// Velocity of `pointer` in px/s; positive means moving right.
    ///
    /// Returns 0.0 with fewer than two usable samples, or when the pointer
    /// paused long enough to count as stopped before the newest sample.
    pub fn current_velocity(&self, pointer: PointerId) -> f32 {
        if self.pointer != Some(pointer) {
            return 0.0;
        }
        let Some(newest) = self.samples.last().copied() else {
            return 0.0;
        };

        let mut positions = [0.0f32; HISTORY_SIZE];
        let mut times = [0.0f32; HISTORY_SIZE];
        let mut count = 0;
        let mut previous_time = newest.time_ms;

        for sample in self.samples.iter().rev() {
            let age = newest.time_ms.saturating_sub(sample.time_ms);
            let gap = previous_time.saturating_sub(sample.time_ms);
            if age > HORIZON_MS || gap > ASSUME_STOPPED_MS {
                break;
            }
            positions[count] = sample.position;
            times[count] = -(age as f32);
            previous_time = sample.time_ms;
            count += 1;
        }

        if count < 2 {
            return 0.0;
        }

        weighted_slope(&positions[..count], &times[..count]) * 1000.0
    }
}

/// Slope of the weighted least-squares line through `(times, positions)`,
/// newest sample first. Units per millisecond.
fn weighted_slope(positions: &[f32], times: &[f32]) -> f32 {
    let mut sum_weight = 0.0f32;
    let mut sum_t = 0.0f32;
    let mut sum_x = 0.0f32;
    let mut sum_tt = 0.0f32;
    let mut sum_tx = 0.0f32;

    let mut weight = 1.0f32;
    for (&x, &t) in positions.iter().zip(times) {
        sum_weight += weight;
        sum_t += weight * t;
        sum_x += weight * x;
        sum_tt += weight * t * t;
        sum_tx += weight * t * x;
        weight *= RECENCY_DECAY;
    }

    let denom = sum_weight * sum_tt - sum_t * sum_t;
    if denom.abs() < f32::EPSILON {
        return 0.0;
    }

    (sum_weight * sum_tx - sum_t * sum_x) / denom
}

#[cfg(test)]
#[path = "tests/velocity_tracker_tests.rs"]
mod tests;
