// Copyright 2025 the Mapstory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Mouse-wheel and trackpad zoom.
//!
//! ## Usage
//!
//! 1) Create a [`MouseWheelZoom`] with [`WheelZoomOptions`], choosing the
//!    [`Platform`](mapstory_wheel::Platform) once for the host.
//! 2) Feed every map event to [`Interaction::handle_event`].
//! 3) Call [`Interaction::advance_to`] whenever time passes (at least when
//!    [`Interaction::next_deadline`] is reached) so that bursts commit.
//! 4) Call [`Interaction::dispose`] when the map goes away.
//!
//! Wheel detents are accumulated and committed once no detent arrived for
//! `timeout`, as a single zoom of at most `max_delta` levels. Trackpad deltas
//! zoom continuously on every event.
//!
//! Tasks that fell due before an event's timestamp run before the event is
//! handled, so a burst never absorbs detents that arrive after it expired.

use kurbo::Point;
#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use mapstory_timing::{TimerId, TimerQueue};
use mapstory_view::{AnimationRequest, MapView, ViewHint};
use mapstory_wheel::{InteractionMode, classify, normalize_delta};

use crate::event::{MapBrowserEvent, MapEventKind};
use crate::interaction::Interaction;
use crate::options::WheelZoomOptions;
use crate::zoom::zoom_by_delta;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum WheelTask {
    Commit,
    ReleaseInteracting,
}

/// Zooms the map with the mouse wheel or a trackpad.
#[derive(Clone, Debug)]
pub struct MouseWheelZoom {
    options: WheelZoomOptions,
    mode: Option<InteractionMode>,
    delta: f64,
    last_anchor: Option<Point>,
    start_time: Option<u64>,
    timers: TimerQueue<WheelTask>,
    commit_timer: Option<TimerId>,
    trackpad_timer: Option<TimerId>,
    disposed: bool,
}

impl Default for MouseWheelZoom {
    fn default() -> Self {
        Self::new(WheelZoomOptions::default())
    }
}

impl MouseWheelZoom {
    /// Creates the interaction.
    ///
    /// Out-of-range numeric options fall back to their defaults.
    #[must_use]
    pub fn new(options: WheelZoomOptions) -> Self {
        Self {
            options: options.sanitized(),
            mode: None,
            delta: 0.0,
            last_anchor: None,
            start_time: None,
            timers: TimerQueue::new(),
            commit_timer: None,
            trackpad_timer: None,
            disposed: false,
        }
    }

    /// Returns the effective options.
    #[must_use]
    pub fn options(&self) -> &WheelZoomOptions {
        &self.options
    }

    /// Mode of the current burst, if one is in progress.
    #[must_use]
    pub fn mode(&self) -> Option<InteractionMode> {
        self.mode
    }

    /// Canonical delta accumulated by the pending wheel burst.
    #[must_use]
    pub fn pending_delta(&self) -> f64 {
        self.delta
    }

    /// Anchor the next zoom will use.
    #[must_use]
    pub fn last_anchor(&self) -> Option<Point> {
        self.last_anchor
    }

    /// Returns `true` while a wheel burst waits for its commit.
    #[must_use]
    pub fn has_pending_commit(&self) -> bool {
        self.commit_timer.is_some()
    }

    /// Returns `true` once the interaction was disposed.
    #[must_use]
    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    /// Chooses between zooming around the pointer and around the center.
    pub fn set_mouse_anchor(&mut self, use_anchor: bool) {
        self.options.use_anchor = use_anchor;
        if !use_anchor {
            self.last_anchor = None;
        }
    }

    fn handle_trackpad(&mut self, delta: f64, now: u64, view: &mut MapView) {
        // One gesture holds the interacting hint until the events stop.
        match self.trackpad_timer.take() {
            Some(id) => {
                self.timers.cancel(id);
            }
            None => {
                view.set_hint(ViewHint::Interacting, 1);
            }
        }
        let release_at = now.saturating_add(self.options.trackpad_event_gap);
        self.trackpad_timer = Some(self.timers.schedule(release_at, WheelTask::ReleaseInteracting));

        let min = view.min_resolution();
        let max = view.max_resolution();
        let mut resolution =
            view.resolution() * 2.0_f64.powf(delta / self.options.trackpad_delta_per_zoom);
        let mut rebound = None;
        if resolution < min {
            resolution = resolution.max(min / self.options.trackpad_zoom_buffer);
            rebound = Some(min);
        } else if resolution > max {
            resolution = resolution.min(max * self.options.trackpad_zoom_buffer);
            rebound = Some(max);
        }

        if let Some(anchor) = self.last_anchor {
            let center = view.calculate_center_zoom(resolution, anchor);
            view.set_center(view.constrain_center(center));
        }
        view.set_resolution(resolution);

        match rebound {
            Some(limit) => view.animate(
                AnimationRequest::new(limit, self.options.rebound_duration)
                    .with_anchor(self.last_anchor),
            ),
            None if self.options.constrain_resolution => {
                let step = if delta > 0.0 { -1.0 } else { 1.0 };
                let target = view.constrain_resolution(resolution, step, 0);
                view.animate(
                    AnimationRequest::new(target, self.options.duration)
                        .with_anchor(self.last_anchor),
                );
            }
            None => {}
        }

        self.start_time = Some(now);
    }

    fn handle_wheel(&mut self, delta: f64, now: u64, start: u64) {
        self.delta += delta;

        let mut deadline = now.saturating_add(self.options.timeout);
        if let Some(max_wait) = self.options.max_wait {
            deadline = deadline.min(start.saturating_add(max_wait)).max(now);
        }
        if let Some(id) = self.commit_timer.take() {
            self.timers.cancel(id);
        }
        self.commit_timer = Some(self.timers.schedule(deadline, WheelTask::Commit));
    }

    fn commit(&mut self, view: &mut MapView) {
        if view.is_animating() {
            view.cancel_animations();
        }
        let max_delta = self.options.max_delta;
        let delta = self.delta.clamp(-max_delta, max_delta);
        tracing::debug!(
            accumulated = self.delta,
            levels = -delta,
            anchor = ?self.last_anchor,
            "committing wheel zoom"
        );
        zoom_by_delta(view, -delta, self.last_anchor, self.options.duration);

        self.mode = None;
        self.delta = 0.0;
        self.last_anchor = None;
        self.start_time = None;
    }
}

impl Interaction for MouseWheelZoom {
    fn handle_event(&mut self, event: &mut MapBrowserEvent, view: &mut MapView) -> bool {
        if self.disposed {
            return true;
        }
        self.advance_to(event.time, view);
        let MapEventKind::Wheel(input) = event.kind else {
            return true;
        };
        if !(self.options.condition)(event) {
            return true;
        }
        event.prevent_default();

        let Some(delta) = normalize_delta(&input, &self.options.platform) else {
            tracing::trace!(?input, "ignoring wheel event without a usable delta");
            return false;
        };
        if delta == 0.0 {
            return false;
        }

        if self.options.use_anchor {
            self.last_anchor = event.coordinate;
        }

        let now = event.time;
        let start = *self.start_time.get_or_insert(now);
        let mode = match self.mode {
            Some(mode) if now.saturating_sub(start) <= self.options.trackpad_event_gap => mode,
            _ => {
                let mode = classify(&input, delta);
                self.mode = Some(mode);
                mode
            }
        };
        tracing::trace!(delta, ?mode, time = now, "wheel event");

        match mode {
            InteractionMode::Trackpad => self.handle_trackpad(delta, now, view),
            InteractionMode::Wheel => self.handle_wheel(delta, now, start),
        }
        false
    }

    fn advance_to(&mut self, now: u64, view: &mut MapView) {
        while let Some((_, task)) = self.timers.pop_due(now) {
            match task {
                WheelTask::Commit => {
                    self.commit_timer = None;
                    self.commit(view);
                }
                WheelTask::ReleaseInteracting => {
                    self.trackpad_timer = None;
                    view.set_hint(ViewHint::Interacting, -1);
                }
            }
        }
    }

    fn next_deadline(&self) -> Option<u64> {
        self.timers.next_deadline()
    }

    fn dispose(&mut self, view: &mut MapView) {
        if self.disposed {
            return;
        }
        if self.commit_timer.is_some() {
            tracing::debug!(
                accumulated = self.delta,
                "dropping pending wheel zoom on dispose"
            );
        }
        if self.trackpad_timer.take().is_some() {
            view.set_hint(ViewHint::Interacting, -1);
        }
        self.timers.clear();
        self.commit_timer = None;
        self.mode = None;
        self.delta = 0.0;
        self.last_anchor = None;
        self.start_time = None;
        self.disposed = true;
    }
}
