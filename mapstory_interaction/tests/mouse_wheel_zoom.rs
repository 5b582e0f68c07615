// Copyright 2025 the Mapstory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Behavior of `MouseWheelZoom` attached to a `Map`.
//!
//! Every test uses a 100x100 viewport over a view centered at the origin with
//! resolutions `[2, 1, 0.5]` at zoom level 1.

use kurbo::{Point, Size};
use mapstory_interaction::{Map, MapBrowserEvent, MouseWheelZoom, WheelZoomOptions};
use mapstory_view::{MapView, ViewOptions};
use mapstory_wheel::{DeltaMode, Engine, Platform, WheelInput};
use proptest::prelude::*;

fn map_with(options: WheelZoomOptions) -> Map {
    let view = MapView::new(
        ViewOptions::default()
            .with_center(Point::ORIGIN)
            .with_resolutions([2.0, 1.0, 0.5])
            .with_zoom(1.0),
    )
    .unwrap();
    Map::new(view, Size::new(100.0, 100.0)).with_interaction(MouseWheelZoom::new(options))
}

fn map_on(engine: Engine) -> Map {
    map_with(WheelZoomOptions::default().with_platform(Platform::new(engine, 2.0)))
}

fn at_origin(input: WheelInput, time: u64) -> MapBrowserEvent {
    MapBrowserEvent::wheel(input, Point::new(50.0, 50.0), time).with_coordinate(Point::ORIGIN)
}

fn assert_single_level_out_at_origin(map: &Map) {
    let animations = map.view().animations();
    assert_eq!(animations.len(), 1, "exactly one animate request");
    assert_eq!(animations[0].resolution, 2.0);
    assert_eq!(animations[0].anchor, Some(Point::ORIGIN));
}

#[test]
fn default_timeout_commits_after_80ms() {
    let mut map = map_on(Engine::Other);
    map.handle_map_browser_event(&mut at_origin(WheelInput::legacy(-120.0), 0));

    map.advance_to(50);
    assert!(map.view().animations().is_empty(), "not committed at 50 ms");

    map.advance_to(80);
    assert_eq!(map.view().animations().len(), 1, "committed at 80 ms");
}

#[test]
fn custom_timeout_is_honored() {
    let mut map = map_with(WheelZoomOptions::default().with_timeout(200));
    map.handle_map_browser_event(&mut at_origin(WheelInput::lines(3.0), 0));

    map.advance_to(199);
    assert!(map.view().animations().is_empty());
    assert_eq!(map.next_deadline(), Some(200));
    map.advance_to(200);
    assert_eq!(map.view().animations().len(), 1);
}

#[test]
fn pixel_ratio_delta_is_trackpad_on_firefox() {
    let mut map = map_on(Engine::Firefox);
    let mut event = at_origin(WheelInput::pixels(2.0), 0);
    map.handle_map_browser_event(&mut event);

    assert!(event.default_prevented());
    // Trackpad input zooms right away and holds the interacting hint.
    assert!(map.view().is_interacting());
    assert!(map.view().resolution() > 1.0);
    assert!(map.view().animations().is_empty());
    assert_eq!(map.next_deadline(), Some(400));
}

#[test]
fn unit_pixel_delta_is_trackpad_elsewhere() {
    let mut map = map_on(Engine::Other);
    map.handle_map_browser_event(&mut at_origin(WheelInput::pixels(1.0), 0));

    assert!(map.view().is_interacting());
    let expected = 2.0_f64.powf(1.0 / 300.0);
    assert!((map.view().resolution() - expected).abs() < 1e-12);

    map.advance_to(400);
    assert!(!map.view().is_interacting());
}

#[test]
fn line_delta_steps_one_level() {
    let mut map = map_on(Engine::Other);
    let input = WheelInput::Standard {
        delta_mode: DeltaMode::Line,
        delta_y: 3.714599609375,
    };
    map.handle_map_browser_event(&mut at_origin(input, 0));
    map.advance_to(80);

    assert_single_level_out_at_origin(&map);
}

#[test]
fn legacy_delta_steps_one_level_on_safari() {
    let mut map = map_on(Engine::Safari);
    map.handle_map_browser_event(&mut at_origin(WheelInput::legacy(-50.0), 0));
    map.advance_to(80);

    assert_single_level_out_at_origin(&map);
}

#[test]
fn legacy_delta_steps_one_level_on_other_engines() {
    for engine in [Engine::Other, Engine::Firefox] {
        let mut map = map_on(engine);
        map.handle_map_browser_event(&mut at_origin(WheelInput::legacy(-120.0), 0));
        map.advance_to(80);

        assert_single_level_out_at_origin(&map);
    }
}

#[test]
fn burst_commits_once_with_last_anchor() {
    let mut map = map_on(Engine::Other);
    let pixels = [
        Point::new(10.0, 10.0),
        Point::new(20.0, 30.0),
        Point::new(70.0, 40.0),
    ];
    for (i, pixel) in pixels.iter().enumerate() {
        let mut event = MapBrowserEvent::wheel(WheelInput::lines(3.0), *pixel, 20 * i as u64);
        map.handle_map_browser_event(&mut event);
    }
    map.advance_to(79);
    assert!(map.view().animations().is_empty());
    map.advance_to(1_000);

    let last_anchor = map.coordinate_from_pixel(pixels[2]);
    let animations = map.view().animations();
    assert_eq!(animations.len(), 1);
    // Three detents are clamped to a single level.
    assert_eq!(animations[0].resolution, 2.0);
    assert_eq!(animations[0].anchor, Some(last_anchor));
}

#[test]
fn every_detent_restarts_the_timeout() {
    let mut map = map_on(Engine::Other);
    map.handle_map_browser_event(&mut at_origin(WheelInput::lines(3.0), 0));
    map.handle_map_browser_event(&mut at_origin(WheelInput::lines(3.0), 60));

    map.advance_to(80);
    assert!(map.view().animations().is_empty(), "quiet for only 20 ms");
    map.advance_to(140);
    assert_single_level_out_at_origin(&map);
}

#[test]
fn small_line_and_page_deltas_zoom_one_level() {
    for delta_mode in [DeltaMode::Line, DeltaMode::Page] {
        let mut map = map_on(Engine::Other);
        let input = WheelInput::Standard {
            delta_mode,
            delta_y: 0.05,
        };
        map.handle_map_browser_event(&mut at_origin(input, 0));

        assert!(!map.view().is_interacting(), "{delta_mode:?}");
        assert_eq!(map.view().resolution(), 1.0);
        assert!(map.view().animations().is_empty());

        map.advance_to(80);
        assert_single_level_out_at_origin(&map);
    }
}

#[test]
fn expired_burst_commits_before_the_next_event() {
    let mut map = map_on(Engine::Other);
    map.handle_map_browser_event(&mut at_origin(WheelInput::lines(3.0), 0));

    // The host never advanced the clock in between.
    map.handle_map_browser_event(&mut at_origin(WheelInput::lines(-3.0), 500));
    assert_single_level_out_at_origin(&map);
    assert_eq!(map.next_deadline(), Some(580));

    map.advance_to(1_000);
    let animations = map.view().animations();
    assert_eq!(animations.len(), 1, "the newer commit replaces the older one");
    assert_eq!(animations[0].resolution, 0.5);
}

#[test]
fn opposite_detents_cancel_out() {
    let mut map = map_on(Engine::Other);
    map.handle_map_browser_event(&mut at_origin(WheelInput::lines(3.0), 0));
    map.handle_map_browser_event(&mut at_origin(WheelInput::lines(-3.0), 10));
    map.advance_to(90);

    assert!(map.view().animations().is_empty());
    assert_eq!(map.view().resolution(), 1.0);
}

#[test]
fn zoom_in_detent_steps_to_finer_level() {
    let mut map = map_on(Engine::Other);
    map.handle_map_browser_event(&mut at_origin(WheelInput::legacy(120.0), 0));
    map.advance_to(80);

    let animations = map.view().animations();
    assert_eq!(animations[0].resolution, 0.5);

    map.view_mut().complete_animations();
    assert_eq!(map.view().resolution(), 0.5);
}

#[test]
fn dispose_while_pending_never_commits() {
    let mut map = map_on(Engine::Other);
    map.handle_map_browser_event(&mut at_origin(WheelInput::lines(3.0), 0));
    map.advance_to(50);

    map.dispose();
    map.advance_to(1_000);

    assert!(map.view().animations().is_empty());
    assert_eq!(map.view().resolution(), 1.0);
    assert_eq!(map.next_deadline(), None);
}

#[test]
fn coordinate_is_projected_when_missing() {
    let mut map = map_on(Engine::Other);
    let mut event = MapBrowserEvent::wheel(WheelInput::lines(3.0), Point::new(100.0, 0.0), 0);
    map.handle_map_browser_event(&mut event);
    map.advance_to(80);

    assert_eq!(event.coordinate, Some(Point::new(50.0, 50.0)));
    assert_eq!(map.view().animations()[0].anchor, Some(Point::new(50.0, 50.0)));
}

proptest! {
    #[test]
    fn any_wheel_burst_commits_exactly_once(gaps in proptest::collection::vec(0_u64..20, 1..12)) {
        let mut map = map_on(Engine::Other);
        let mut time = 0;
        for gap in &gaps {
            time += gap;
            map.handle_map_browser_event(&mut at_origin(WheelInput::lines(3.0), time));
        }
        map.advance_to(time + 80);
        prop_assert_eq!(map.view().animations().len(), 1);
        prop_assert_eq!(map.next_deadline(), None);
    }
}
