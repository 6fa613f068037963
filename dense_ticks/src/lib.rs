// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dense axis tick selection.
//!
//! Given an axis (its scale, label font and a text measurer) and its length
//! in pixels, a [`Ticker`] picks the densest set of "nice" tick positions
//! whose labels still fit side by side:
//! - [`DenseTicks`] steps through `1, 0.5, 0.25, 0.2` times a power of ten.
//! - [`DenseTimeTicks`] steps through calendar units from days to 20 years.
//!
//! Text shaping is not done here; labels are sized through a
//! [`TextMeasurer`], e.g. the heuristic one from `dense_text`.
//!
//! ```
//! use dense_text::HeuristicTextMeasurer;
//! use dense_ticks::{Axis, DenseTicks, Orientation, ScaleLinear, Ticker};
//!
//! let axis = Axis::new(ScaleLinear::new((0.0, 100.0)), HeuristicTextMeasurer::default());
//! let mut ticker = DenseTicks::new();
//! ticker.set_axis(&axis, 400.0, Orientation::Horizontal);
//!
//! let ticks = ticker.ticks(0.0, 100.0);
//! assert!(ticks.len() > 2);
//! assert_eq!(ticks[0].value, 0.0);
//! ```

#![no_std]

extern crate alloc;

mod axis;
mod calendar;
mod error;
#[cfg(not(feature = "std"))]
mod float;
mod measure;
mod numeric;
#[cfg(test)]
mod property_tests;
mod scale;
mod tick;
mod time;

pub use axis::{Axis, Orientation};
pub use calendar::{CalendarRule, Increment, LATTICE, Normalize};
pub use dense_text::{TextMeasurer, TextStyle};
pub use error::TickError;
pub use measure::LabelSizer;
pub use numeric::{DEFAULT_MAX_TICKS, DenseTicks, ResolvedStep};
pub use scale::{ScaleContinuous, ScaleLinear, ScaleLog};
pub use tick::{Tick, Ticker, check_range};
pub use time::{DEFAULT_FORMAT, DenseTimeTicks, FnConversion, TimeConversion, UnixSeconds};
