// Copyright 2025 the Mapstory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

/// Error returned when [`crate::ViewOptions`] describe an unusable view.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ViewError {
    /// The center has a non-finite component.
    InvalidCenter,
    /// A resolution is non-finite or not strictly positive.
    InvalidResolution(f64),
    /// An explicit resolution list was given but is empty.
    EmptyResolutions,
    /// The resolution list is not strictly descending at `index`.
    UnsortedResolutions {
        /// Index of the first entry that is not smaller than its predecessor.
        index: usize,
    },
    /// The zoom factor must be finite and greater than one.
    InvalidZoomFactor(f64),
    /// The minimum resolution exceeds the maximum resolution.
    InvalidResolutionRange {
        /// Finest allowed resolution.
        min: f64,
        /// Coarsest allowed resolution.
        max: f64,
    },
}

impl fmt::Display for ViewError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidCenter => write!(f, "view center must be finite"),
            Self::InvalidResolution(r) => {
                write!(f, "resolution {r} must be finite and greater than zero")
            }
            Self::EmptyResolutions => write!(f, "resolution list must not be empty"),
            Self::UnsortedResolutions { index } => write!(
                f,
                "resolutions must be strictly descending, entry {index} is not"
            ),
            Self::InvalidZoomFactor(z) => {
                write!(f, "zoom factor {z} must be finite and greater than one")
            }
            Self::InvalidResolutionRange { min, max } => write!(
                f,
                "minimum resolution {min} exceeds maximum resolution {max}"
            ),
        }
    }
}

impl core::error::Error for ViewError {}
