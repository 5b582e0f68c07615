// Copyright 2025 the Mapstory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=mapstory_wheel --heading-base-level=0

//! Mapstory Wheel: normalize wheel input across engines and classify it.
//!
//! Wheel input arrives in two shapes: the standard wheel event (a delta plus
//! its unit) and the deprecated mouse-wheel event (an inverted, engine
//! specific per-detent delta). Engines also disagree on scale: Gecko reports
//! pixel deltas in device pixels and WebKit uses `±50` legacy detents where
//! others use `±120`.
//!
//! This crate turns all of them into one canonical number (pixels, positive
//! means zoom out) and classifies it as a trackpad or wheel delta. Only small pixel deltas
//! count as trackpad input; line, page and legacy deltas are always detents:
//!
//! - [`input`]: the raw [`WheelInput`] shapes and [`DeltaMode`].
//! - [`platform`]: [`Engine`] / [`Platform`], detected once by the host.
//! - [`normalize`]: the pure [`normalize_delta`] and [`classify`] functions.
//!
//! ## Minimal example
//!
//! ```rust
//! use mapstory_wheel::{InteractionMode, Platform, WheelInput, classify, normalize_delta};
//!
//! let platform = Platform::detect("Mozilla/5.0 ... Firefox/131.0", 2.0);
//!
//! // A trackpad nudge: two device pixels are one CSS pixel.
//! let nudge = WheelInput::pixels(2.0);
//! let delta = normalize_delta(&nudge, &platform).unwrap();
//! assert_eq!(classify(&nudge, delta), InteractionMode::Trackpad);
//!
//! // A legacy wheel detent scrolling toward the user zooms out.
//! let detent = WheelInput::legacy(-120.0);
//! let delta = normalize_delta(&detent, &platform).unwrap();
//! assert!(delta > 0.0);
//! assert_eq!(classify(&detent, delta), InteractionMode::Wheel);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

pub mod input;
pub mod normalize;
pub mod platform;

pub use input::{DeltaMode, WheelInput};
pub use normalize::{InteractionMode, classify, normalize_delta};
pub use platform::{Engine, Platform};
