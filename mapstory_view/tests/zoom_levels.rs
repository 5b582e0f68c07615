// Copyright 2025 the Mapstory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for stepping a `MapView` through its zoom levels.

use kurbo::{Point, Size};
use mapstory_view::{AnimationRequest, Easing, MapView, ViewOptions};

fn view() -> MapView {
    MapView::new(
        ViewOptions::default()
            .with_resolutions([2.0, 1.0, 0.5])
            .with_zoom(1.0),
    )
    .unwrap()
}

#[test]
fn stepping_out_then_in_returns_to_start() {
    let mut view = view();
    let start = view.resolution();

    let out = view.constrain_resolution(start, -1.0, 0);
    view.set_resolution(out);
    assert_eq!(view.resolution(), 2.0);

    let back = view.constrain_resolution(view.resolution(), 1.0, 0);
    view.set_resolution(back);
    assert_eq!(view.resolution(), start);
}

#[test]
fn set_zoom_round_trips_through_levels() {
    let mut view = view();
    for level in [0.0, 1.0, 2.0] {
        view.set_zoom(level);
        assert!((view.zoom() - level).abs() < 1e-9, "level {level}");
    }
    view.set_zoom(7.0);
    assert_eq!(view.resolution(), 0.5);
}

#[test]
fn anchored_animation_keeps_anchor_under_the_same_pixel() {
    let mut view = view();
    let size = Size::new(100.0, 100.0);
    let pixel = Point::new(80.0, 20.0);
    let anchor = view.coordinate_from_pixel(pixel, size);

    view.animate(
        AnimationRequest::new(0.5, 250)
            .with_anchor(Some(anchor))
            .with_easing(Easing::Linear),
    );
    assert_eq!(view.animations()[0].easing, Easing::Linear);
    view.complete_animations();

    let after = view.pixel_from_coordinate(anchor, size);
    assert!((after.x - pixel.x).abs() < 1e-9);
    assert!((after.y - pixel.y).abs() < 1e-9);
    assert_eq!(view.resolution(), 0.5);
}

#[test]
fn take_animations_hands_over_requests() {
    let mut view = view();
    view.animate(AnimationRequest::new(2.0, 250));
    let taken = view.take_animations();
    assert_eq!(taken.len(), 1);
    assert!(!view.is_animating());
    assert!(view.take_animations().is_empty());
    // Taking does not apply anything.
    assert_eq!(view.resolution(), 1.0);
}
