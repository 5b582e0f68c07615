// Copyright 2025 the Mapstory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=mapstory_interaction --heading-base-level=0

//! Mapstory Interaction: debounced mouse-wheel and trackpad zoom for a map view.
//!
//! This crate wires normalized wheel input (`mapstory_wheel`) to a headless
//! map view (`mapstory_view`):
//!
//! - [`MouseWheelZoom`]: classifies each burst as trackpad or wheel input.
//!   Wheel detents are coalesced for a quiet period (80 ms by default) and
//!   committed as one anchored zoom animation of at most one level; trackpad
//!   deltas zoom continuously.
//! - [`Map`]: a small host that projects event pixels to map coordinates,
//!   dispatches events to its [`Interaction`]s and drives their timers.
//! - [`zoom_by_delta`]: level-based zoom shared by interactions.
//!
//! There is no clock in here. Every event carries a millisecond timestamp and
//! scheduled work only runs when the host calls [`Map::advance_to`].
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Size};
//! use mapstory_interaction::{Map, MapBrowserEvent, MouseWheelZoom};
//! use mapstory_view::{MapView, ViewOptions};
//! use mapstory_wheel::WheelInput;
//!
//! let view = MapView::new(
//!     ViewOptions::default()
//!         .with_resolutions([2.0, 1.0, 0.5])
//!         .with_zoom(1.0),
//! )
//! .unwrap();
//! let mut map = Map::new(view, Size::new(100.0, 100.0)).with_interaction(MouseWheelZoom::default());
//!
//! // One wheel detent over the center of the viewport.
//! let mut event = MapBrowserEvent::wheel(WheelInput::lines(3.0), Point::new(50.0, 50.0), 0);
//! map.handle_map_browser_event(&mut event);
//! assert!(event.default_prevented());
//!
//! map.advance_to(50);
//! assert!(map.view().animations().is_empty());
//!
//! map.advance_to(80);
//! let animation = map.view().animations()[0];
//! assert_eq!(animation.resolution, 2.0);
//! assert_eq!(animation.anchor, Some(Point::new(0.0, 0.0)));
//! ```
//!
//! ## Logging
//!
//! Wheel events are traced at `TRACE` level and commits at `DEBUG` level
//! through `tracing`. The crate never installs a subscriber.
//!
//! This crate is `no_std` (with `alloc`).

#![no_std]

extern crate alloc;

mod event;
mod interaction;
mod map;
mod mouse_wheel_zoom;
mod options;
mod zoom;

pub use event::{MapBrowserEvent, MapEventKind};
pub use interaction::{Condition, Interaction, always};
pub use map::Map;
pub use mouse_wheel_zoom::MouseWheelZoom;
pub use options::{
    DEFAULT_DURATION, DEFAULT_MAX_DELTA, DEFAULT_REBOUND_DURATION, DEFAULT_TIMEOUT,
    DEFAULT_TRACKPAD_DELTA_PER_ZOOM, DEFAULT_TRACKPAD_EVENT_GAP, DEFAULT_TRACKPAD_ZOOM_BUFFER,
    WheelZoomOptions,
};
pub use zoom::{zoom_by_delta, zoom_without_constraints};
