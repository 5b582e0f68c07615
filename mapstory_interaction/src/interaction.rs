// Copyright 2025 the Mapstory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt::Debug;

use mapstory_view::MapView;

use crate::event::MapBrowserEvent;

/// Predicate deciding whether an interaction looks at an event.
pub type Condition = fn(&MapBrowserEvent) -> bool;

/// A [`Condition`] that accepts every event.
#[must_use]
pub fn always(_event: &MapBrowserEvent) -> bool {
    true
}

/// A user interaction attached to a [`crate::Map`].
///
/// Interactions are driven entirely by their host: events arrive through
/// [`Interaction::handle_event`] and time only passes when the host calls
/// [`Interaction::advance_to`].
pub trait Interaction: Debug {
    /// Handles an event, returning `false` to stop propagation to the
    /// interactions behind this one.
    fn handle_event(&mut self, event: &mut MapBrowserEvent, view: &mut MapView) -> bool;

    /// Runs every scheduled task due at or before `now`.
    fn advance_to(&mut self, now: u64, view: &mut MapView) {
        let _ = (now, view);
    }

    /// Earliest time at which [`Interaction::advance_to`] has work to do.
    fn next_deadline(&self) -> Option<u64> {
        None
    }

    /// Detaches the interaction, dropping scheduled work without running it.
    fn dispose(&mut self, view: &mut MapView) {
        let _ = view;
    }
}
