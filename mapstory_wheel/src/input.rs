// Copyright 2025 the Mapstory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Raw wheel input shapes as delivered by hosts.

/// Unit of a standard wheel delta.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum DeltaMode {
    /// Delta is in (CSS) pixels; typical of trackpads.
    #[default]
    Pixel,
    /// Delta is in lines; typical of mechanical wheels.
    Line,
    /// Delta is in pages.
    Page,
}

impl DeltaMode {
    /// Maps the numeric `deltaMode` of a DOM wheel event (`0`, `1`, `2`).
    ///
    /// Unknown values fall back to [`DeltaMode::Line`] so that they are
    /// treated as discrete wheel steps.
    #[must_use]
    pub fn from_dom(value: u32) -> Self {
        match value {
            0 => Self::Pixel,
            2 => Self::Page,
            _ => Self::Line,
        }
    }
}

/// One wheel-like input occurrence.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum WheelInput {
    /// Standard wheel event: positive `delta_y` scrolls down (zooms out).
    Standard {
        /// Unit of `delta_y`.
        delta_mode: DeltaMode,
        /// Vertical delta.
        delta_y: f64,
    },
    /// Deprecated mouse-wheel event: positive `wheel_delta_y` scrolls up.
    ///
    /// The field is optional because some engines dispatch the event without
    /// it.
    Legacy {
        /// Vertical wheel delta, `±120` per detent on most engines.
        wheel_delta_y: Option<f64>,
    },
}

impl WheelInput {
    /// Standard event in pixel units.
    #[must_use]
    pub fn pixels(delta_y: f64) -> Self {
        Self::Standard {
            delta_mode: DeltaMode::Pixel,
            delta_y,
        }
    }

    /// Standard event in line units.
    #[must_use]
    pub fn lines(delta_y: f64) -> Self {
        Self::Standard {
            delta_mode: DeltaMode::Line,
            delta_y,
        }
    }

    /// Legacy event carrying `wheel_delta_y`.
    #[must_use]
    pub fn legacy(wheel_delta_y: f64) -> Self {
        Self::Legacy {
            wheel_delta_y: Some(wheel_delta_y),
        }
    }
}
