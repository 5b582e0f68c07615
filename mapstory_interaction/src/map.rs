// Copyright 2025 the Mapstory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::boxed::Box;
use alloc::vec::Vec;

use kurbo::{Point, Size};
use mapstory_view::MapView;

use crate::event::MapBrowserEvent;
use crate::interaction::Interaction;

/// Headless map host: a view, a viewport size and the interactions on top.
///
/// The map projects event pixels into map coordinates, dispatches events to
/// its interactions and drives their timers from the host clock.
#[derive(Debug)]
pub struct Map {
    view: MapView,
    size: Size,
    interactions: Vec<Box<dyn Interaction>>,
    disposed: bool,
}

impl Map {
    /// Creates a map over `view` with a viewport of `size` pixels.
    #[must_use]
    pub fn new(view: MapView, size: Size) -> Self {
        Self {
            view,
            size,
            interactions: Vec::new(),
            disposed: false,
        }
    }

    /// Adds an interaction on top of the existing ones.
    pub fn add_interaction(&mut self, interaction: Box<dyn Interaction>) {
        self.interactions.push(interaction);
    }

    /// Adds an interaction, builder style.
    #[must_use]
    pub fn with_interaction(mut self, interaction: impl Interaction + 'static) -> Self {
        self.add_interaction(Box::new(interaction));
        self
    }

    /// Number of attached interactions.
    #[must_use]
    pub fn interaction_count(&self) -> usize {
        self.interactions.len()
    }

    /// Returns the view.
    #[must_use]
    pub fn view(&self) -> &MapView {
        &self.view
    }

    /// Returns the view mutably.
    pub fn view_mut(&mut self) -> &mut MapView {
        &mut self.view
    }

    /// Returns the viewport size in pixels.
    #[must_use]
    pub fn size(&self) -> Size {
        self.size
    }

    /// Sets the viewport size in pixels.
    pub fn set_size(&mut self, size: Size) {
        self.size = size;
    }

    /// Projects a viewport pixel into map coordinates.
    #[must_use]
    pub fn coordinate_from_pixel(&self, pixel: Point) -> Point {
        self.view.coordinate_from_pixel(pixel, self.size)
    }

    /// Dispatches `event` to the interactions, topmost first.
    ///
    /// Tasks due by the event's timestamp run first. Dispatch stops at the
    /// first interaction that returns `false`. Events reaching a disposed map
    /// are dropped.
    pub fn handle_map_browser_event(&mut self, event: &mut MapBrowserEvent) {
        if self.disposed {
            return;
        }
        self.advance_to(event.time);
        if event.coordinate.is_none() {
            event.coordinate = Some(self.coordinate_from_pixel(event.pixel));
        }
        for interaction in self.interactions.iter_mut().rev() {
            if !interaction.handle_event(event, &mut self.view) {
                break;
            }
        }
    }

    /// Earliest deadline across all interactions.
    #[must_use]
    pub fn next_deadline(&self) -> Option<u64> {
        self.interactions
            .iter()
            .filter_map(|interaction| interaction.next_deadline())
            .min()
    }

    /// Advances the clock to `now`, running due interaction tasks.
    pub fn advance_to(&mut self, now: u64) {
        if self.disposed {
            return;
        }
        for interaction in &mut self.interactions {
            interaction.advance_to(now, &mut self.view);
        }
    }

    /// Disposes every interaction; the map ignores input afterwards.
    pub fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        for interaction in &mut self.interactions {
            interaction.dispose(&mut self.view);
        }
        self.disposed = true;
    }

    /// Returns `true` once [`Map::dispose`] was called.
    #[must_use]
    pub fn is_disposed(&self) -> bool {
        self.disposed
    }
}
