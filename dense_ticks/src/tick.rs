// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use alloc::vec::Vec;

use crate::axis::{Axis, Orientation};
use crate::error::TickError;

/// A labeled position on an axis.
#[derive(Clone, Debug, PartialEq)]
pub struct Tick {
    /// Position in data coordinates.
    pub value: f64,
    /// Text drawn next to the tick.
    pub label: String,
}

impl Tick {
    /// Creates a tick.
    pub fn new(value: f64, label: impl Into<String>) -> Self {
        Self {
            value,
            label: label.into(),
        }
    }
}

/// A tick generator driven by an axis.
///
/// The owning axis calls [`Ticker::set_axis`] once per render pass and then
/// asks for ticks. Nothing but the cached axis context carries over between
/// calls, so the same ticker can be asked about unrelated ranges.
pub trait Ticker {
    /// Caches the axis metrics, its pixel length and label orientation.
    fn set_axis(&mut self, axis: &Axis, length: f64, orientation: Orientation);

    /// Computes the ticks covering `[min, max]`.
    fn try_ticks(&self, min: f64, max: f64) -> Result<Vec<Tick>, TickError>;

    /// Computes the ticks covering `[min, max]`.
    ///
    /// Invalid input yields no ticks; the reason is logged.
    fn ticks(&self, min: f64, max: f64) -> Vec<Tick> {
        self.try_ticks(min, max).unwrap_or_else(|e| {
            log::warn!("no ticks for [{min}, {max}]: {e}");
            Vec::new()
        })
    }
}

/// Checks the precondition shared by all tickers: a finite, non-empty range.
pub fn check_range(min: f64, max: f64) -> Result<(), TickError> {
    if !min.is_finite() || !max.is_finite() {
        return Err(TickError::NonFinite { min, max });
    }
    let delta = max - min;
    if delta <= 0.0 || !delta.is_finite() {
        return Err(TickError::EmptyRange { min, max });
    }
    Ok(())
}
