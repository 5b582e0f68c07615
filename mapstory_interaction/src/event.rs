// Copyright 2025 the Mapstory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Point;
use mapstory_wheel::WheelInput;

/// What kind of input a [`MapBrowserEvent`] carries.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MapEventKind {
    /// Wheel or legacy mouse-wheel input.
    Wheel(WheelInput),
    /// Any other input; wheel interactions let it pass.
    Other,
}

/// An input event located on the map.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MapBrowserEvent {
    /// Event payload.
    pub kind: MapEventKind,
    /// Position in viewport pixels.
    pub pixel: Point,
    /// Position in map coordinates.
    ///
    /// [`crate::Map`] fills this from `pixel` when it is unset.
    pub coordinate: Option<Point>,
    /// Timestamp in milliseconds.
    pub time: u64,
    default_prevented: bool,
}

impl MapBrowserEvent {
    /// Creates an event at `pixel`.
    #[must_use]
    pub fn new(kind: MapEventKind, pixel: Point, time: u64) -> Self {
        Self {
            kind,
            pixel,
            coordinate: None,
            time,
            default_prevented: false,
        }
    }

    /// Creates a wheel event at `pixel`.
    #[must_use]
    pub fn wheel(input: WheelInput, pixel: Point, time: u64) -> Self {
        Self::new(MapEventKind::Wheel(input), pixel, time)
    }

    /// Sets the map coordinate explicitly.
    #[must_use]
    pub fn with_coordinate(mut self, coordinate: Point) -> Self {
        self.coordinate = Some(coordinate);
        self
    }

    /// Suppresses the host's native handling of this event.
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    /// Returns `true` once [`MapBrowserEvent::prevent_default`] was called.
    #[must_use]
    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}
