// Copyright 2025 the Mapstory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=mapstory_view --heading-base-level=0

//! Mapstory View: a headless map view with quantized zoom levels.
//!
//! This crate models the camera of a 2D map: a center in map coordinates and
//! a resolution in map units per pixel. It focuses on:
//! - Resolution constraints (explicit level lists or power-of-N levels).
//! - Anchored zoom math (`calculate_center_zoom`).
//! - Projection between viewport pixels and map coordinates.
//! - Recording animation requests and transient view hints.
//!
//! It does **not** draw, load tiles or step animations frame by frame.
//! Callers are expected to:
//! - Feed input through an interaction layer (for example
//!   `mapstory_interaction`) that calls [`MapView::animate`].
//! - Drain [`MapView::take_animations`] and play them back with the easing
//!   curve of each [`AnimationRequest`], or jump to the end state with
//!   [`MapView::complete_animations`].
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Size};
//! use mapstory_view::{AnimationRequest, MapView, ViewOptions};
//!
//! let mut view = MapView::new(
//!     ViewOptions::default()
//!         .with_resolutions([2.0, 1.0, 0.5])
//!         .with_zoom(1.0),
//! )
//! .unwrap();
//! assert_eq!(view.resolution(), 1.0);
//!
//! // One level out, anchored at the pixel under the pointer.
//! let anchor = view.coordinate_from_pixel(Point::new(50.0, 50.0), Size::new(100.0, 100.0));
//! let target = view.constrain_resolution(view.resolution(), -1.0, 0);
//! view.animate(AnimationRequest::new(target, 250).with_anchor(Some(anchor)));
//!
//! view.complete_animations();
//! assert_eq!(view.resolution(), 2.0);
//! ```
//!
//! ## Playing animations back
//!
//! Hosts with a frame loop interpolate each request themselves. The zoom
//! interactions record ease-out requests; [`AnimationRequest::with_easing`]
//! picks another [`Easing`] curve and [`Easing::apply`] maps elapsed time to
//! progress:
//!
//! ```rust
//! use mapstory_view::{AnimationRequest, Easing, MapView, ViewOptions};
//!
//! let mut view = MapView::new(ViewOptions::default().with_resolutions([2.0, 1.0])).unwrap();
//! view.set_resolution(1.0);
//! view.animate(AnimationRequest::new(2.0, 200).with_easing(Easing::Linear));
//!
//! let start = view.resolution();
//! for request in view.take_animations() {
//!     // Halfway through the frame loop.
//!     let progress = request.easing.apply(100.0 / request.duration as f64);
//!     view.set_resolution(start + (request.resolution - start) * progress);
//! }
//! assert_eq!(view.resolution(), 1.5);
//! assert!(!view.is_animating());
//! ```
//!
//! This crate is `no_std` (with `alloc`).

#![no_std]

extern crate alloc;

mod animation;
mod constraint;
mod error;
mod view;

pub use animation::{AnimationRequest, Easing};
pub use constraint::{ResolutionConstraint, linear_find_nearest};
pub use error::ViewError;
pub use view::{
    DEFAULT_MAX_RESOLUTION, DEFAULT_MAX_ZOOM, DEFAULT_ZOOM_FACTOR, MapView, MapViewDebugInfo,
    ViewHint, ViewOptions,
};
