// Copyright 2025 the Mapstory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::{Affine, Point, Rect, Size};

use crate::animation::AnimationRequest;
use crate::constraint::{ResolutionConstraint, linear_find_nearest};
use crate::error::ViewError;

/// Resolution of zoom level zero for the Web Mercator extent with 256 px tiles.
pub const DEFAULT_MAX_RESOLUTION: f64 = 156_543.033_928_041;

/// Default ratio between consecutive zoom levels.
pub const DEFAULT_ZOOM_FACTOR: f64 = 2.0;

/// Default deepest zoom level.
pub const DEFAULT_MAX_ZOOM: u32 = 28;

/// Transient view states that hosts and interactions can raise.
///
/// Each hint is a counter so that overlapping producers can raise and lower
/// it independently.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ViewHint {
    /// One or more animations are pending.
    Animating,
    /// A user gesture is in progress.
    Interacting,
}

impl ViewHint {
    const fn index(self) -> usize {
        match self {
            Self::Animating => 0,
            Self::Interacting => 1,
        }
    }
}

/// Construction options for a [`MapView`].
///
/// Either `resolutions` describes an explicit list of zoom levels, or the
/// levels are derived from `max_resolution`, `zoom_factor` and `max_zoom`.
/// The initial resolution comes from `resolution`, else `zoom`, else zoom
/// level zero.
#[derive(Clone, Debug, PartialEq)]
pub struct ViewOptions {
    /// Initial center in map coordinates.
    pub center: Point,
    /// Initial resolution.
    pub resolution: Option<f64>,
    /// Initial zoom level, used when `resolution` is unset.
    pub zoom: Option<f64>,
    /// Explicit, strictly descending zoom level resolutions.
    pub resolutions: Option<Vec<f64>>,
    /// Coarsest resolution.
    pub max_resolution: Option<f64>,
    /// Finest resolution.
    pub min_resolution: Option<f64>,
    /// Ratio between derived zoom levels.
    pub zoom_factor: f64,
    /// Deepest derived zoom level.
    pub max_zoom: u32,
    /// Optional extent that constrains the center.
    pub extent: Option<Rect>,
}

impl Default for ViewOptions {
    fn default() -> Self {
        Self {
            center: Point::ORIGIN,
            resolution: None,
            zoom: None,
            resolutions: None,
            max_resolution: None,
            min_resolution: None,
            zoom_factor: DEFAULT_ZOOM_FACTOR,
            max_zoom: DEFAULT_MAX_ZOOM,
            extent: None,
        }
    }
}

impl ViewOptions {
    /// Sets the initial center.
    #[must_use]
    pub fn with_center(mut self, center: Point) -> Self {
        self.center = center;
        self
    }

    /// Sets the initial resolution.
    #[must_use]
    pub fn with_resolution(mut self, resolution: f64) -> Self {
        self.resolution = Some(resolution);
        self
    }

    /// Sets the initial zoom level.
    #[must_use]
    pub fn with_zoom(mut self, zoom: f64) -> Self {
        self.zoom = Some(zoom);
        self
    }

    /// Uses an explicit list of zoom level resolutions.
    #[must_use]
    pub fn with_resolutions(mut self, resolutions: impl Into<Vec<f64>>) -> Self {
        self.resolutions = Some(resolutions.into());
        self
    }

    /// Sets the coarsest resolution.
    #[must_use]
    pub fn with_max_resolution(mut self, resolution: f64) -> Self {
        self.max_resolution = Some(resolution);
        self
    }

    /// Sets the finest resolution.
    #[must_use]
    pub fn with_min_resolution(mut self, resolution: f64) -> Self {
        self.min_resolution = Some(resolution);
        self
    }

    /// Sets the ratio between derived zoom levels.
    #[must_use]
    pub fn with_zoom_factor(mut self, zoom_factor: f64) -> Self {
        self.zoom_factor = zoom_factor;
        self
    }

    /// Sets the deepest derived zoom level.
    #[must_use]
    pub fn with_max_zoom(mut self, max_zoom: u32) -> Self {
        self.max_zoom = max_zoom;
        self
    }

    /// Constrains the center to `extent`.
    #[must_use]
    pub fn with_extent(mut self, extent: Rect) -> Self {
        self.extent = Some(extent);
        self
    }
}

/// Headless 2D map view: a center and a resolution over map coordinates.
///
/// Map coordinates grow to the right and up; pixel coordinates grow to the
/// right and down with the center at the middle of the viewport.
///
/// The view does not run animations. [`MapView::animate`] records an
/// [`AnimationRequest`] that the host plays back (or jumps to with
/// [`MapView::complete_animations`]).
#[derive(Clone, Debug)]
pub struct MapView {
    center: Point,
    resolution: f64,
    constraint: ResolutionConstraint,
    min_resolution: f64,
    max_resolution: f64,
    extent: Option<Rect>,
    hints: [i32; 2],
    animations: Vec<AnimationRequest>,
}

impl MapView {
    /// Creates a view from `options`, validating them.
    pub fn new(options: ViewOptions) -> Result<Self, ViewError> {
        if !options.center.is_finite() {
            return Err(ViewError::InvalidCenter);
        }

        let (constraint, default_min, default_max) = match options.resolutions {
            Some(resolutions) => {
                validate_resolutions(&resolutions)?;
                let min = resolutions[resolutions.len() - 1];
                let max = resolutions[0];
                (ResolutionConstraint::SnapToResolutions(resolutions), min, max)
            }
            None => {
                let power = options.zoom_factor;
                if !power.is_finite() || power <= 1.0 {
                    return Err(ViewError::InvalidZoomFactor(power));
                }
                let max = validate_resolution(
                    options.max_resolution.unwrap_or(DEFAULT_MAX_RESOLUTION),
                )?;
                let min = max / power.powf(f64::from(options.max_zoom));
                let constraint = ResolutionConstraint::SnapToPower {
                    power,
                    max_resolution: max,
                    max_level: options.max_zoom,
                };
                (constraint, min, max)
            }
        };

        let max_resolution = validate_resolution(options.max_resolution.unwrap_or(default_max))?;
        let min_resolution = validate_resolution(options.min_resolution.unwrap_or(default_min))?;
        if min_resolution > max_resolution {
            return Err(ViewError::InvalidResolutionRange {
                min: min_resolution,
                max: max_resolution,
            });
        }

        let resolution = match (options.resolution, options.zoom) {
            (Some(resolution), _) => validate_resolution(resolution)?,
            (None, Some(zoom)) => constraint.constrain(max_resolution, zoom, 0),
            (None, None) => max_resolution,
        };

        Ok(Self {
            center: options.center,
            resolution,
            constraint,
            min_resolution,
            max_resolution,
            extent: options.extent,
            hints: [0; 2],
            animations: Vec::new(),
        })
    }

    /// Returns the current center in map coordinates.
    #[must_use]
    pub fn center(&self) -> Point {
        self.center
    }

    /// Sets the center. Non-finite centers are ignored.
    pub fn set_center(&mut self, center: Point) {
        if center.is_finite() {
            self.center = center;
        }
    }

    /// Returns the current resolution in map units per pixel.
    #[must_use]
    pub fn resolution(&self) -> f64 {
        self.resolution
    }

    /// Sets the resolution. Non-finite or non-positive values are ignored.
    ///
    /// The resolution is not clamped; interactions may overshoot the limits
    /// briefly and animate back.
    pub fn set_resolution(&mut self, resolution: f64) {
        if resolution.is_finite() && resolution > 0.0 {
            self.resolution = resolution;
        }
    }

    /// Returns the explicit zoom level resolutions, if configured.
    #[must_use]
    pub fn resolutions(&self) -> Option<&[f64]> {
        match &self.constraint {
            ResolutionConstraint::SnapToResolutions(resolutions) => Some(resolutions),
            ResolutionConstraint::SnapToPower { .. } => None,
        }
    }

    /// Returns the resolution constraint.
    #[must_use]
    pub fn constraint(&self) -> &ResolutionConstraint {
        &self.constraint
    }

    /// Finest allowed resolution.
    #[must_use]
    pub fn min_resolution(&self) -> f64 {
        self.min_resolution
    }

    /// Coarsest allowed resolution.
    #[must_use]
    pub fn max_resolution(&self) -> f64 {
        self.max_resolution
    }

    /// Returns the (possibly fractional) zoom level of the current resolution.
    #[must_use]
    pub fn zoom(&self) -> f64 {
        self.zoom_for_resolution(self.resolution)
    }

    /// Sets the resolution to the one of zoom level `zoom`.
    pub fn set_zoom(&mut self, zoom: f64) {
        let resolution = self.resolution_for_zoom(zoom);
        self.set_resolution(resolution);
    }

    /// Returns the resolution of zoom level `zoom`.
    #[must_use]
    pub fn resolution_for_zoom(&self, zoom: f64) -> f64 {
        self.constraint.constrain(self.max_resolution, zoom, 0)
    }

    /// Returns the (possibly fractional) zoom level of `resolution`.
    #[must_use]
    pub fn zoom_for_resolution(&self, resolution: f64) -> f64 {
        let (offset, max, zoom_factor) = match &self.constraint {
            ResolutionConstraint::SnapToResolutions(resolutions) => {
                let nearest = linear_find_nearest(resolutions, resolution, 1);
                let max = resolutions[nearest];
                let zoom_factor = if nearest + 1 >= resolutions.len() {
                    DEFAULT_ZOOM_FACTOR
                } else {
                    max / resolutions[nearest + 1]
                };
                (nearest as f64, max, zoom_factor)
            }
            ResolutionConstraint::SnapToPower { power, .. } => {
                (0.0, self.max_resolution, *power)
            }
        };
        offset + (max / resolution).ln() / zoom_factor.ln()
    }

    /// Returns the resolution `delta` levels away from `resolution`.
    ///
    /// See [`ResolutionConstraint::constrain`] for `direction`.
    #[must_use]
    pub fn constrain_resolution(&self, resolution: f64, delta: f64, direction: i32) -> f64 {
        self.constraint.constrain(resolution, delta, direction)
    }

    /// Clamps `center` into the configured extent, if any.
    #[must_use]
    pub fn constrain_center(&self, center: Point) -> Point {
        match self.extent {
            Some(extent) => Point::new(
                center.x.clamp(extent.min_x(), extent.max_x()),
                center.y.clamp(extent.min_y(), extent.max_y()),
            ),
            None => center,
        }
    }

    /// Returns the center that keeps `anchor` fixed on screen at `resolution`.
    #[must_use]
    pub fn calculate_center_zoom(&self, resolution: f64, anchor: Point) -> Point {
        let center = self.center;
        let current = self.resolution;
        Point::new(
            anchor.x - resolution * (anchor.x - center.x) / current,
            anchor.y - resolution * (anchor.y - center.y) / current,
        )
    }

    /// Records an animation request.
    pub fn animate(&mut self, request: AnimationRequest) {
        if self.animations.is_empty() {
            self.set_hint(ViewHint::Animating, 1);
        }
        self.animations.push(request);
    }

    /// Pending animation requests, oldest first.
    #[must_use]
    pub fn animations(&self) -> &[AnimationRequest] {
        &self.animations
    }

    /// Returns `true` while animation requests are pending.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.hint(ViewHint::Animating) > 0
    }

    /// Drops all pending animations without applying them.
    pub fn cancel_animations(&mut self) {
        if !self.animations.is_empty() {
            self.animations.clear();
            self.set_hint(ViewHint::Animating, -1);
        }
    }

    /// Hands pending animations to the host for playback.
    pub fn take_animations(&mut self) -> Vec<AnimationRequest> {
        if self.animations.is_empty() {
            return Vec::new();
        }
        self.set_hint(ViewHint::Animating, -1);
        core::mem::take(&mut self.animations)
    }

    /// Applies the end state of every pending animation, in order.
    pub fn complete_animations(&mut self) {
        for request in self.take_animations() {
            if let Some(anchor) = request.anchor {
                let center = self.calculate_center_zoom(request.resolution, anchor);
                self.set_center(center);
            }
            self.set_resolution(request.resolution);
        }
    }

    /// Adds `delta` to a hint counter and returns the new value.
    pub fn set_hint(&mut self, hint: ViewHint, delta: i32) -> i32 {
        let slot = &mut self.hints[hint.index()];
        *slot += delta;
        *slot
    }

    /// Returns the current value of a hint counter.
    #[must_use]
    pub fn hint(&self, hint: ViewHint) -> i32 {
        self.hints[hint.index()]
    }

    /// Returns `true` while a gesture holds the interacting hint.
    #[must_use]
    pub fn is_interacting(&self) -> bool {
        self.hint(ViewHint::Interacting) > 0
    }

    /// Transform from viewport pixels to map coordinates for a viewport of `size`.
    #[must_use]
    pub fn pixel_to_coordinate_transform(&self, size: Size) -> Affine {
        let r = self.resolution;
        // Pixel → centered pixel → flipped, scaled map offset → map coordinate.
        Affine::translate(self.center.to_vec2())
            * Affine::scale_non_uniform(r, -r)
            * Affine::translate(-(size.to_vec2() * 0.5))
    }

    /// Projects a viewport pixel into map coordinates.
    #[must_use]
    pub fn coordinate_from_pixel(&self, pixel: Point, size: Size) -> Point {
        self.pixel_to_coordinate_transform(size) * pixel
    }

    /// Projects a map coordinate into viewport pixels.
    #[must_use]
    pub fn pixel_from_coordinate(&self, coordinate: Point, size: Size) -> Point {
        self.pixel_to_coordinate_transform(size).inverse() * coordinate
    }

    /// Snapshot of the current view state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> MapViewDebugInfo {
        MapViewDebugInfo {
            center: self.center,
            resolution: self.resolution,
            zoom: self.zoom(),
            min_resolution: self.min_resolution,
            max_resolution: self.max_resolution,
            pending_animations: self.animations.len(),
            animating: self.hint(ViewHint::Animating),
            interacting: self.hint(ViewHint::Interacting),
        }
    }
}

/// Debug snapshot of a [`MapView`] state.
#[derive(Clone, Copy, Debug)]
pub struct MapViewDebugInfo {
    /// Current center in map coordinates.
    pub center: Point,
    /// Current resolution.
    pub resolution: f64,
    /// Zoom level of the current resolution.
    pub zoom: f64,
    /// Finest allowed resolution.
    pub min_resolution: f64,
    /// Coarsest allowed resolution.
    pub max_resolution: f64,
    /// Number of recorded animation requests.
    pub pending_animations: usize,
    /// Animating hint counter.
    pub animating: i32,
    /// Interacting hint counter.
    pub interacting: i32,
}

fn validate_resolution(resolution: f64) -> Result<f64, ViewError> {
    if resolution.is_finite() && resolution > 0.0 {
        Ok(resolution)
    } else {
        Err(ViewError::InvalidResolution(resolution))
    }
}

fn validate_resolutions(resolutions: &[f64]) -> Result<(), ViewError> {
    if resolutions.is_empty() {
        return Err(ViewError::EmptyResolutions);
    }
    for (index, &resolution) in resolutions.iter().enumerate() {
        validate_resolution(resolution)?;
        if index > 0 && resolution >= resolutions[index - 1] {
            return Err(ViewError::UnsortedResolutions { index });
        }
    }
    Ok(())
}
