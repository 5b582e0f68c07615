// Copyright 2025 the Mapstory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Engine detection for wheel delta quirks.

/// Browser engine families whose wheel deltas need correction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Engine {
    /// Gecko: pixel deltas are reported in device pixels.
    Firefox,
    /// WebKit: legacy wheel deltas are `±50` per detent instead of `±120`.
    Safari,
    /// Everything else.
    #[default]
    Other,
}

impl Engine {
    /// Detects the engine from a user agent string.
    #[must_use]
    pub fn from_user_agent(user_agent: &str) -> Self {
        if user_agent.contains("Firefox") {
            Self::Firefox
        } else if user_agent.contains("Safari") && !user_agent.contains("Chrome") {
            Self::Safari
        } else {
            Self::Other
        }
    }
}

/// Host properties consulted when normalizing deltas.
///
/// Detect once when the interaction is constructed and keep it; normalization
/// never inspects the host again.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Platform {
    /// Engine family.
    pub engine: Engine,
    /// Ratio of device pixels to CSS pixels.
    pub device_pixel_ratio: f64,
}

impl Default for Platform {
    fn default() -> Self {
        Self {
            engine: Engine::Other,
            device_pixel_ratio: 1.0,
        }
    }
}

impl Platform {
    /// Creates a platform description.
    ///
    /// A non-finite or non-positive `device_pixel_ratio` is replaced with `1.0`.
    #[must_use]
    pub fn new(engine: Engine, device_pixel_ratio: f64) -> Self {
        let device_pixel_ratio = if device_pixel_ratio.is_finite() && device_pixel_ratio > 0.0 {
            device_pixel_ratio
        } else {
            1.0
        };
        Self {
            engine,
            device_pixel_ratio,
        }
    }

    /// Detects the platform from a user agent string and pixel ratio.
    #[must_use]
    pub fn detect(user_agent: &str, device_pixel_ratio: f64) -> Self {
        Self::new(Engine::from_user_agent(user_agent), device_pixel_ratio)
    }
}

#[cfg(test)]
mod tests {
    use super::{Engine, Platform};

    #[test]
    fn detects_engines_from_user_agents() {
        let firefox = "Mozilla/5.0 (X11; Linux x86_64; rv:131.0) Gecko/20100101 Firefox/131.0";
        let safari = "Mozilla/5.0 (Macintosh; Intel Mac OS X 14_5) AppleWebKit/605.1.15 \
                      (KHTML, like Gecko) Version/17.5 Safari/605.1.15";
        let chrome = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 \
                      (KHTML, like Gecko) Chrome/129.0.0.0 Safari/537.36";

        assert_eq!(Engine::from_user_agent(firefox), Engine::Firefox);
        assert_eq!(Engine::from_user_agent(safari), Engine::Safari);
        assert_eq!(Engine::from_user_agent(chrome), Engine::Other);
        assert_eq!(Engine::from_user_agent(""), Engine::Other);
    }

    #[test]
    fn bogus_pixel_ratio_falls_back_to_one() {
        assert_eq!(Platform::new(Engine::Other, 0.0).device_pixel_ratio, 1.0);
        assert_eq!(Platform::new(Engine::Other, f64::NAN).device_pixel_ratio, 1.0);
        assert_eq!(Platform::detect("Firefox", 2.0).device_pixel_ratio, 2.0);
    }
}
