// Copyright 2025 the Mapstory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;

/// How a [`crate::MapView`] quantizes resolutions when zooming by levels.
///
/// Both variants answer the same question: starting from `resolution`, which
/// resolution lies `delta` zoom levels away? `direction` picks how the start
/// resolution is matched to a level when it falls between two levels:
/// `> 0` rounds toward the coarser level, `< 0` toward the finer level and
/// `0` to the nearest one.
#[derive(Clone, Debug, PartialEq)]
pub enum ResolutionConstraint {
    /// Snap to an explicit, strictly descending list of resolutions.
    ///
    /// Fractional deltas interpolate geometrically between neighbours.
    SnapToResolutions(Vec<f64>),
    /// Snap to `max_resolution / power^level` for `level` in `0..=max_level`.
    SnapToPower {
        /// Ratio between consecutive levels, usually `2.0`.
        power: f64,
        /// Resolution at level zero.
        max_resolution: f64,
        /// Deepest level.
        max_level: u32,
    },
}

impl ResolutionConstraint {
    /// Returns the resolution `delta` levels away from `resolution`.
    #[must_use]
    pub fn constrain(&self, resolution: f64, delta: f64, direction: i32) -> f64 {
        match self {
            Self::SnapToResolutions(resolutions) => {
                if resolutions.is_empty() {
                    return resolution;
                }
                let last = resolutions.len() - 1;
                let z = linear_find_nearest(resolutions, resolution, direction) as f64;
                let new_z = (z + delta).clamp(0.0, last as f64);
                #[expect(
                    clippy::cast_possible_truncation,
                    reason = "new_z is clamped into the index range"
                )]
                let index = new_z.floor() as usize;
                if new_z != index as f64 && index < last {
                    let power = resolutions[index] / resolutions[index + 1];
                    resolutions[index] / power.powf(new_z - index as f64)
                } else {
                    resolutions[index]
                }
            }
            Self::SnapToPower {
                power,
                max_resolution,
                max_level,
            } => {
                let offset = -f64::from(direction.signum()) / 2.0 + 0.5;
                let old_level = ((max_resolution / resolution).ln() / power.ln() + offset).floor();
                let new_level = (old_level + delta).max(0.0).min(f64::from(*max_level));
                max_resolution / power.powf(new_level)
            }
        }
    }

    /// Finest resolution reachable through this constraint.
    #[must_use]
    pub fn min_resolution(&self) -> Option<f64> {
        match self {
            Self::SnapToResolutions(resolutions) => resolutions.last().copied(),
            Self::SnapToPower {
                power,
                max_resolution,
                max_level,
            } => Some(max_resolution / power.powf(f64::from(*max_level))),
        }
    }

    /// Coarsest resolution reachable through this constraint.
    #[must_use]
    pub fn max_resolution(&self) -> Option<f64> {
        match self {
            Self::SnapToResolutions(resolutions) => resolutions.first().copied(),
            Self::SnapToPower { max_resolution, .. } => Some(*max_resolution),
        }
    }
}

/// Finds the index of the entry in a descending `arr` closest to `target`.
///
/// Targets outside the array snap to the first or last index. For targets in
/// between two entries, `direction > 0` returns the coarser (lower) index,
/// `direction < 0` the finer (higher) index, and `0` whichever is closer.
#[must_use]
pub fn linear_find_nearest(arr: &[f64], target: f64, direction: i32) -> usize {
    let n = arr.len();
    if n == 0 || arr[0] <= target {
        return 0;
    }
    if target <= arr[n - 1] {
        return n - 1;
    }
    for i in 1..n {
        if direction > 0 {
            if arr[i] < target {
                return i - 1;
            }
        } else if direction < 0 {
            if arr[i] <= target {
                return i;
            }
        } else if arr[i] == target {
            return i;
        } else if arr[i] < target {
            return if arr[i - 1] - target < target - arr[i] {
                i - 1
            } else {
                i
            };
        }
    }
    n - 1
}
