// Copyright 2025 the Mapstory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Point;

/// Easing curve applied by the host when it plays an [`AnimationRequest`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Easing {
    /// Starts fast, decelerates toward the end.
    #[default]
    EaseOut,
    /// Starts slowly, accelerates toward the end.
    EaseIn,
    /// Accelerates, then decelerates.
    InAndOut,
    /// Constant rate.
    Linear,
}

impl Easing {
    /// Maps linear progress `t` in `[0, 1]` to eased progress.
    #[must_use]
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::EaseIn => t * t * t,
            Self::EaseOut => 1.0 - Self::EaseIn.apply(1.0 - t),
            Self::InAndOut => 3.0 * t * t - 2.0 * t * t * t,
            Self::Linear => t,
        }
    }
}

/// A request to animate the view toward a resolution.
///
/// The view records requests; playing them back frame by frame is the
/// host's job. When `anchor` is set, the map coordinate under it stays fixed
/// on screen for the whole animation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnimationRequest {
    /// Target resolution in map units per pixel.
    pub resolution: f64,
    /// Optional fixed point in map coordinates.
    pub anchor: Option<Point>,
    /// Duration in milliseconds.
    pub duration: u64,
    /// Easing curve.
    pub easing: Easing,
}

impl AnimationRequest {
    /// Creates an ease-out request without an anchor.
    #[must_use]
    pub fn new(resolution: f64, duration: u64) -> Self {
        Self {
            resolution,
            anchor: None,
            duration,
            easing: Easing::EaseOut,
        }
    }

    /// Sets the anchor.
    #[must_use]
    pub fn with_anchor(mut self, anchor: Option<Point>) -> Self {
        self.anchor = anchor;
        self
    }

    /// Sets the easing curve.
    #[must_use]
    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::Easing;

    #[test]
    fn easings_hit_endpoints() {
        for easing in [Easing::EaseOut, Easing::EaseIn, Easing::InAndOut, Easing::Linear] {
            assert!(easing.apply(0.0).abs() < 1e-12, "{easing:?} at 0");
            assert!((easing.apply(1.0) - 1.0).abs() < 1e-12, "{easing:?} at 1");
        }
    }

    #[test]
    fn ease_out_leads_linear() {
        assert!(Easing::EaseOut.apply(0.5) > Easing::Linear.apply(0.5));
        assert!(Easing::EaseIn.apply(0.5) < Easing::Linear.apply(0.5));
    }

    #[test]
    fn progress_is_clamped() {
        assert_eq!(Easing::Linear.apply(2.0), 1.0);
        assert_eq!(Easing::Linear.apply(-1.0), 0.0);
    }
}
