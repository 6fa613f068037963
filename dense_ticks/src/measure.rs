// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tick label extents along the axis.
//!
//! A [`LabelSizer`] answers "how much axis length does this label take?".
//! Horizontal labels sit side by side, so their own width matters; one extra
//! `M` is added so neighbours never touch. Vertical labels stack, so every
//! label gets the same allowance of two font sizes.

use alloc::string::String;
use alloc::sync::Arc;

use dense_text::{TextMeasurer, TextStyle};

use crate::axis::{Axis, Orientation};

/// Measures the extent of a tick label along an axis.
#[derive(Clone)]
pub struct LabelSizer {
    measurer: Arc<dyn TextMeasurer>,
    style: TextStyle,
    orientation: Orientation,
}

impl core::fmt::Debug for LabelSizer {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("LabelSizer")
            .field("style", &self.style)
            .field("orientation", &self.orientation)
            .finish_non_exhaustive()
    }
}

impl LabelSizer {
    /// Captures the label font of `axis` for the given orientation.
    pub fn new(axis: &Axis, orientation: Orientation) -> Self {
        Self {
            measurer: Arc::clone(&axis.measurer),
            style: axis.label_style.clone(),
            orientation,
        }
    }

    /// Returns the orientation this sizer measures along.
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Pixel extent of `label` along the axis.
    pub fn measure(&self, label: &str) -> f64 {
        match self.orientation {
            Orientation::Horizontal => {
                let mut padded = String::with_capacity(label.len() + 1);
                padded.push_str(label);
                padded.push('M');
                self.measurer.measure(&padded, &self.style).advance_width
            }
            Orientation::Vertical => 2.0 * self.style.font_size,
        }
    }
}
