// Copyright 2025 the Mapstory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Level-based zoom helpers shared by interactions.

use kurbo::Point;
use mapstory_view::{AnimationRequest, MapView};

/// Zooms `view` by `delta` levels (positive zooms in), optionally around `anchor`.
///
/// The target resolution goes through the view's resolution constraint and
/// limits. When the view constrains its center, the anchor is moved so that
/// the animation ends on the constrained center.
pub fn zoom_by_delta(view: &mut MapView, delta: f64, anchor: Option<Point>, duration: u64) {
    let current = view.resolution();
    let resolution = view
        .constrain_resolution(current, delta, 0)
        .clamp(view.min_resolution(), view.max_resolution());

    let anchor = match anchor {
        Some(anchor) if resolution != current => {
            let center = view.constrain_center(view.calculate_center_zoom(resolution, anchor));
            let c = view.center();
            let span = resolution - current;
            Some(Point::new(
                (resolution * c.x - current * center.x) / span,
                (resolution * c.y - current * center.y) / span,
            ))
        }
        other => other,
    };

    zoom_without_constraints(view, resolution, anchor, duration);
}

/// Moves `view` to `resolution`, animating when there is something to animate.
///
/// With a zero `duration` or an unchanged resolution the change is applied
/// immediately.
pub fn zoom_without_constraints(
    view: &mut MapView,
    resolution: f64,
    anchor: Option<Point>,
    duration: u64,
) {
    if !(resolution.is_finite() && resolution > 0.0) {
        return;
    }
    if resolution != view.resolution() && duration > 0 {
        view.animate(AnimationRequest::new(resolution, duration).with_anchor(anchor));
        return;
    }
    if let Some(anchor) = anchor {
        let center = view.calculate_center_zoom(resolution, anchor);
        view.set_center(center);
    }
    view.set_resolution(resolution);
}
