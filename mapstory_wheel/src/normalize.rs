// Copyright 2025 the Mapstory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Delta normalization and trackpad/wheel classification.
//!
//! The canonical delta is expressed in pixels with positive values meaning
//! "zoom out". One mechanical wheel detent normalizes to roughly `100..150`;
//! a trackpad emits many single-digit deltas.

use crate::input::{DeltaMode, WheelInput};
use crate::platform::{Engine, Platform};

/// Pixels per line (and per page) for line- and page-based deltas.
pub const PIXELS_PER_LINE: f64 = 40.0;

/// Factor between Safari's legacy detent (`±50`) and its canonical magnitude.
pub const SAFARI_LEGACY_DIVISOR: f64 = 3.0;

/// Pixel deltas with a magnitude below this are considered trackpad deltas.
pub const TRACKPAD_DELTA_THRESHOLD: f64 = 4.0;

/// How a burst of wheel input is interpreted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InteractionMode {
    /// Continuous, small pixel deltas: zoom immediately per event.
    Trackpad,
    /// Discrete detents: accumulate and zoom by whole levels.
    Wheel,
}

/// Converts `input` into the canonical delta, correcting engine quirks.
///
/// Returns `None` when the input carries no usable delta (a legacy event
/// without its field, or a non-finite value). A zero delta is returned as is.
#[must_use]
pub fn normalize_delta(input: &WheelInput, platform: &Platform) -> Option<f64> {
    let delta = match *input {
        WheelInput::Standard {
            delta_mode,
            delta_y,
        } => match delta_mode {
            DeltaMode::Pixel if platform.engine == Engine::Firefox => {
                delta_y / platform.device_pixel_ratio
            }
            DeltaMode::Pixel => delta_y,
            DeltaMode::Line | DeltaMode::Page => delta_y * PIXELS_PER_LINE,
        },
        WheelInput::Legacy { wheel_delta_y } => {
            let delta = -wheel_delta_y?;
            if platform.engine == Engine::Safari {
                delta / SAFARI_LEGACY_DIVISOR
            } else {
                delta
            }
        }
    };
    delta.is_finite().then_some(delta)
}

/// Classifies the canonical `delta` that `input` normalized to.
///
/// Only pixel-unit input can be trackpad input. Line, page and legacy deltas
/// are wheel detents whatever their magnitude.
#[must_use]
pub fn classify(input: &WheelInput, delta: f64) -> InteractionMode {
    match *input {
        WheelInput::Standard {
            delta_mode: DeltaMode::Pixel,
            ..
        } if delta.abs() < TRACKPAD_DELTA_THRESHOLD => InteractionMode::Trackpad,
        _ => InteractionMode::Wheel,
    }
}

#[cfg(test)]
mod tests {
    use super::{InteractionMode, classify, normalize_delta};
    use crate::input::{DeltaMode, WheelInput};
    use crate::platform::{Engine, Platform};

    const OTHER: Platform = Platform {
        engine: Engine::Other,
        device_pixel_ratio: 1.0,
    };

    #[test]
    fn line_deltas_scale_to_pixels() {
        let input = WheelInput::lines(3.714599609375);
        let delta = normalize_delta(&input, &OTHER).unwrap();
        assert!((delta - 148.583_984_375).abs() < 1e-9);
        assert_eq!(classify(&input, delta), InteractionMode::Wheel);
    }

    #[test]
    fn page_deltas_are_wheel_steps() {
        let input = WheelInput::Standard {
            delta_mode: DeltaMode::Page,
            delta_y: 1.0,
        };
        let delta = normalize_delta(&input, &OTHER).unwrap();
        assert_eq!(classify(&input, delta), InteractionMode::Wheel);
    }

    #[test]
    fn firefox_pixels_are_divided_by_pixel_ratio() {
        let firefox = Platform::new(Engine::Firefox, 2.0);
        assert_eq!(normalize_delta(&WheelInput::pixels(2.0), &firefox), Some(1.0));
        // Other engines already report CSS pixels.
        let chrome = Platform::new(Engine::Other, 2.0);
        assert_eq!(normalize_delta(&WheelInput::pixels(2.0), &chrome), Some(2.0));
    }

    #[test]
    fn legacy_deltas_invert_sign() {
        assert_eq!(normalize_delta(&WheelInput::legacy(-120.0), &OTHER), Some(120.0));
        assert_eq!(normalize_delta(&WheelInput::legacy(120.0), &OTHER), Some(-120.0));
    }

    #[test]
    fn safari_legacy_deltas_are_rescaled() {
        let safari = Platform::new(Engine::Safari, 2.0);
        let input = WheelInput::legacy(-50.0);
        let delta = normalize_delta(&input, &safari).unwrap();
        assert!((delta - 50.0 / 3.0).abs() < 1e-12);
        assert_eq!(classify(&input, delta), InteractionMode::Wheel);
    }

    #[test]
    fn missing_or_non_finite_deltas_are_none() {
        let missing = WheelInput::Legacy {
            wheel_delta_y: None,
        };
        assert_eq!(normalize_delta(&missing, &OTHER), None);
        assert_eq!(normalize_delta(&WheelInput::pixels(f64::NAN), &OTHER), None);
        assert_eq!(normalize_delta(&WheelInput::lines(f64::INFINITY), &OTHER), None);
    }

    #[test]
    fn pixel_classification_threshold() {
        let pixels = WheelInput::pixels(0.0);
        assert_eq!(classify(&pixels, 1.0), InteractionMode::Trackpad);
        assert_eq!(classify(&pixels, -3.9), InteractionMode::Trackpad);
        assert_eq!(classify(&pixels, 4.0), InteractionMode::Wheel);
        assert_eq!(classify(&pixels, -120.0), InteractionMode::Wheel);
    }

    #[test]
    fn small_line_and_page_deltas_are_still_wheel_steps() {
        for delta_mode in [DeltaMode::Line, DeltaMode::Page] {
            let input = WheelInput::Standard {
                delta_mode,
                delta_y: 0.05,
            };
            let delta = normalize_delta(&input, &OTHER).unwrap();
            assert!(delta.abs() < 4.0);
            assert_eq!(classify(&input, delta), InteractionMode::Wheel, "{delta_mode:?}");
        }
        let legacy = WheelInput::legacy(-1.0);
        assert_eq!(classify(&legacy, 1.0), InteractionMode::Wheel);
    }
}
