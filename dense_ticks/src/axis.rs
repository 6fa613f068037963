// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Axis layout context.
//!
//! The chart that owns an axis hands a ticker everything it needs once per
//! render pass via [`Ticker::set_axis`](crate::Ticker::set_axis): an [`Axis`]
//! (scale, label font and a text measurer), the axis length in pixels, and
//! its [`Orientation`].

use alloc::sync::Arc;

use dense_text::{TextMeasurer, TextStyle};
use kurbo::Rect;

use crate::error::TickError;
use crate::measure::LabelSizer;
use crate::scale::ScaleContinuous;

/// Direction along which tick labels are laid out.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Labels run side by side (an x axis).
    Horizontal,
    /// Labels stack on top of each other (a y axis).
    Vertical,
}

impl Orientation {
    /// Returns the pixel length of `plot` along this orientation.
    pub fn extent(self, plot: Rect) -> f64 {
        match self {
            Self::Horizontal => plot.width(),
            Self::Vertical => plot.height(),
        }
    }
}

/// The axis metrics a ticker needs: value placement and label fonts.
#[derive(Clone)]
pub struct Axis {
    /// Maps data values onto the axis.
    pub scale: ScaleContinuous,
    /// Font used for tick labels.
    pub label_style: TextStyle,
    /// Measures tick labels.
    pub measurer: Arc<dyn TextMeasurer>,
}

impl core::fmt::Debug for Axis {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Axis")
            .field("scale", &self.scale)
            .field("label_style", &self.label_style)
            .finish_non_exhaustive()
    }
}

impl Axis {
    /// Creates an axis with a 10px label font.
    pub fn new(scale: impl Into<ScaleContinuous>, measurer: impl TextMeasurer + 'static) -> Self {
        Self {
            scale: scale.into(),
            label_style: TextStyle::default(),
            measurer: Arc::new(measurer),
        }
    }

    /// Creates an axis sharing an existing measurer.
    pub fn with_shared_measurer(
        scale: impl Into<ScaleContinuous>,
        measurer: Arc<dyn TextMeasurer>,
    ) -> Self {
        Self {
            scale: scale.into(),
            label_style: TextStyle::default(),
            measurer,
        }
    }

    /// Set the tick label style.
    pub fn with_label_style(mut self, label_style: TextStyle) -> Self {
        self.label_style = label_style;
        self
    }

    /// Set the tick label font size, keeping the rest of the style.
    pub fn with_font_size(mut self, font_size: f64) -> Self {
        self.label_style.font_size = font_size;
        self
    }

    /// Position of `value` along the axis, `0` at the domain start and `1` at its end.
    pub fn normalize(&self, value: f64) -> f64 {
        self.scale.normalize(value)
    }
}

/// What a ticker caches from `set_axis`.
#[derive(Clone, Debug)]
pub(crate) struct AxisLayout {
    pub(crate) length: f64,
    pub(crate) sizer: LabelSizer,
    pub(crate) scale: ScaleContinuous,
}

impl AxisLayout {
    pub(crate) fn new(axis: &Axis, length: f64, orientation: Orientation) -> Self {
        Self {
            length,
            sizer: LabelSizer::new(axis, orientation),
            scale: axis.scale,
        }
    }

    /// Pixel distance between two values along the axis.
    pub(crate) fn pixels_between(&self, from: f64, to: f64) -> f64 {
        (self.scale.normalize(to) - self.scale.normalize(from)) * self.length
    }
}

/// Returns the cached layout if it has a usable length.
pub(crate) fn usable(layout: Option<&AxisLayout>) -> Result<&AxisLayout, TickError> {
    layout
        .filter(|l| valid_length(l.length))
        .ok_or(TickError::AxisNotSet)
}

/// Returns `true` when `length` is usable as an axis pixel length.
pub(crate) fn valid_length(length: f64) -> bool {
    length.is_finite() && length > 0.0
}
