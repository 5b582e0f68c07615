// Copyright 2025 the Mapstory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use mapstory_wheel::Platform;

use crate::interaction::{Condition, always};

/// Default quiet period before a wheel burst commits, in milliseconds.
pub const DEFAULT_TIMEOUT: u64 = 80;
/// Default zoom animation duration, in milliseconds.
pub const DEFAULT_DURATION: u64 = 250;
/// Default largest number of levels one wheel burst may zoom.
pub const DEFAULT_MAX_DELTA: f64 = 1.0;
/// Default gap that ends a trackpad gesture, in milliseconds.
pub const DEFAULT_TRACKPAD_EVENT_GAP: u64 = 400;
/// Default trackpad pixels per doubling of the resolution.
pub const DEFAULT_TRACKPAD_DELTA_PER_ZOOM: f64 = 300.0;
/// Default factor by which a trackpad may overshoot the resolution limits.
pub const DEFAULT_TRACKPAD_ZOOM_BUFFER: f64 = 1.5;
/// Default duration of the animation back inside the limits, in milliseconds.
pub const DEFAULT_REBOUND_DURATION: u64 = 500;

/// Configuration for [`crate::MouseWheelZoom`].
#[derive(Clone, Copy, Debug)]
pub struct WheelZoomOptions {
    /// Quiet period before a wheel burst commits.
    ///
    /// Every detent of a burst restarts it.
    pub timeout: u64,
    /// Longest a wheel burst may wait for its commit, counted from its first
    /// detent. `None` lets a steady stream of detents postpone the commit.
    pub max_wait: Option<u64>,
    /// Zoom animation duration; `0` applies zooms without animating.
    pub duration: u64,
    /// Largest number of levels one wheel burst may zoom.
    pub max_delta: f64,
    /// Zoom around the pointer instead of the view center.
    pub use_anchor: bool,
    /// Snap trackpad zooms to the view's zoom levels.
    pub constrain_resolution: bool,
    /// Filters the events the interaction looks at.
    pub condition: Condition,
    /// Engine quirks for delta normalization.
    pub platform: Platform,
    /// Gap that ends a trackpad gesture and allows re-classification.
    pub trackpad_event_gap: u64,
    /// Trackpad pixels per doubling of the resolution.
    pub trackpad_delta_per_zoom: f64,
    /// Factor by which a trackpad may overshoot the resolution limits.
    pub trackpad_zoom_buffer: f64,
    /// Duration of the animation back inside the limits.
    pub rebound_duration: u64,
}

impl Default for WheelZoomOptions {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            max_wait: None,
            duration: DEFAULT_DURATION,
            max_delta: DEFAULT_MAX_DELTA,
            use_anchor: true,
            constrain_resolution: false,
            condition: always,
            platform: Platform::default(),
            trackpad_event_gap: DEFAULT_TRACKPAD_EVENT_GAP,
            trackpad_delta_per_zoom: DEFAULT_TRACKPAD_DELTA_PER_ZOOM,
            trackpad_zoom_buffer: DEFAULT_TRACKPAD_ZOOM_BUFFER,
            rebound_duration: DEFAULT_REBOUND_DURATION,
        }
    }
}

impl WheelZoomOptions {
    /// Sets the quiet period before a wheel burst commits.
    #[must_use]
    pub fn with_timeout(mut self, timeout: u64) -> Self {
        self.timeout = timeout;
        self
    }

    /// Caps the time from the first detent of a burst to its commit.
    #[must_use]
    pub fn with_max_wait(mut self, max_wait: u64) -> Self {
        self.max_wait = Some(max_wait);
        self
    }

    /// Sets the zoom animation duration.
    #[must_use]
    pub fn with_duration(mut self, duration: u64) -> Self {
        self.duration = duration;
        self
    }

    /// Sets the largest number of levels one wheel burst may zoom.
    #[must_use]
    pub fn with_max_delta(mut self, max_delta: f64) -> Self {
        self.max_delta = max_delta;
        self
    }

    /// Chooses between zooming around the pointer and around the center.
    #[must_use]
    pub fn with_use_anchor(mut self, use_anchor: bool) -> Self {
        self.use_anchor = use_anchor;
        self
    }

    /// Snaps trackpad zooms to the view's zoom levels.
    #[must_use]
    pub fn with_constrain_resolution(mut self, constrain: bool) -> Self {
        self.constrain_resolution = constrain;
        self
    }

    /// Sets the event filter.
    #[must_use]
    pub fn with_condition(mut self, condition: Condition) -> Self {
        self.condition = condition;
        self
    }

    /// Sets the platform used for delta normalization.
    #[must_use]
    pub fn with_platform(mut self, platform: Platform) -> Self {
        self.platform = platform;
        self
    }

    /// Sets the trackpad pixels per doubling of the resolution.
    #[must_use]
    pub fn with_trackpad_delta_per_zoom(mut self, delta: f64) -> Self {
        self.trackpad_delta_per_zoom = delta;
        self
    }

    /// Replaces out-of-range numeric fields with their defaults.
    pub(crate) fn sanitized(mut self) -> Self {
        if !(self.max_delta.is_finite() && self.max_delta >= 0.0) {
            self.max_delta = DEFAULT_MAX_DELTA;
        }
        if !(self.trackpad_delta_per_zoom.is_finite() && self.trackpad_delta_per_zoom > 0.0) {
            self.trackpad_delta_per_zoom = DEFAULT_TRACKPAD_DELTA_PER_ZOOM;
        }
        if !(self.trackpad_zoom_buffer.is_finite() && self.trackpad_zoom_buffer >= 1.0) {
            self.trackpad_zoom_buffer = DEFAULT_TRACKPAD_ZOOM_BUFFER;
        }
        self
    }
}
