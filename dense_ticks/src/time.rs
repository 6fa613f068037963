// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dense ticks for time axes.
//!
//! Axis values are turned into calendar instants by a [`TimeConversion`]
//! (Unix seconds in UTC unless configured otherwise). The ticker measures one
//! formatted label, then walks [`LATTICE`] from daily to 20-yearly steps and
//! takes the first rule whose first bucket is wider on screen than that label.
//! If none is, the coarsest rule is used.

use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;
use core::fmt::Write as _;

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, FixedOffset, NaiveDateTime, Offset, Utc};

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

use crate::axis::{self, Axis, AxisLayout, Orientation};
use crate::calendar::{CalendarRule, LATTICE};
use crate::error::TickError;
use crate::numeric::DEFAULT_MAX_TICKS;
use crate::tick::{Tick, Ticker, check_range};

/// Default label pattern (ISO 8601 date).
pub const DEFAULT_FORMAT: &str = "%Y-%m-%d";

/// Converts between axis values and calendar instants.
///
/// The two directions must be inverses of each other, at least for the
/// midnight instants ticks are placed at.
pub trait TimeConversion {
    /// The instant at axis value `value`, if it exists.
    fn to_time(&self, value: f64) -> Option<NaiveDateTime>;

    /// The axis value of `time`, if it is representable.
    fn to_value(&self, time: NaiveDateTime) -> Option<f64>;

    /// UTC offset of the wall-clock instants, shown by `%z` and `%Z` in labels.
    fn offset(&self) -> FixedOffset {
        Utc.fix()
    }
}

/// Axis values are seconds since the Unix epoch.
///
/// Fractions of a second are truncated. Instants are wall-clock times at a
/// fixed UTC offset (UTC by default).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UnixSeconds {
    offset: FixedOffset,
}

impl UnixSeconds {
    /// Unix seconds read as UTC.
    pub fn utc() -> Self {
        Self { offset: Utc.fix() }
    }

    /// Unix seconds read as wall-clock time at `offset`.
    pub fn with_offset(offset: FixedOffset) -> Self {
        Self { offset }
    }
}

impl Default for UnixSeconds {
    fn default() -> Self {
        Self::utc()
    }
}

impl TimeConversion for UnixSeconds {
    fn to_time(&self, value: f64) -> Option<NaiveDateTime> {
        let secs = value.trunc();
        if !(secs >= i64::MIN as f64 && secs < i64::MAX as f64) {
            return None;
        }
        #[allow(clippy::cast_possible_truncation, reason = "range checked above")]
        let secs = secs as i64;
        let utc = DateTime::from_timestamp(secs, 0)?;
        Some(utc.with_timezone(&self.offset).naive_local())
    }

    fn to_value(&self, time: NaiveDateTime) -> Option<f64> {
        let local = time.and_local_timezone(self.offset).single()?;
        Some(local.timestamp() as f64)
    }

    fn offset(&self) -> FixedOffset {
        self.offset
    }
}

/// A [`TimeConversion`] built from two closures.
#[derive(Clone, Copy)]
pub struct FnConversion<F, G> {
    to_time: F,
    to_value: G,
    offset: FixedOffset,
}

impl<F, G> FnConversion<F, G>
where
    F: Fn(f64) -> Option<NaiveDateTime>,
    G: Fn(NaiveDateTime) -> Option<f64>,
{
    /// Pairs a value-to-time closure with its inverse. Labels show UTC.
    pub fn new(to_time: F, to_value: G) -> Self {
        Self {
            to_time,
            to_value,
            offset: Utc.fix(),
        }
    }

    /// Set the offset labels report for the closures' wall-clock instants.
    pub fn with_offset(mut self, offset: FixedOffset) -> Self {
        self.offset = offset;
        self
    }
}

impl<F, G> core::fmt::Debug for FnConversion<F, G> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("FnConversion")
            .field("offset", &self.offset)
            .finish_non_exhaustive()
    }
}

impl<F, G> TimeConversion for FnConversion<F, G>
where
    F: Fn(f64) -> Option<NaiveDateTime>,
    G: Fn(NaiveDateTime) -> Option<f64>,
{
    fn to_time(&self, value: f64) -> Option<NaiveDateTime> {
        (self.to_time)(value)
    }

    fn to_value(&self, time: NaiveDateTime) -> Option<f64> {
        (self.to_value)(time)
    }

    fn offset(&self) -> FixedOffset {
        self.offset
    }
}

/// Places calendar-aligned ticks as densely as their labels allow.
///
/// ```
/// use dense_text::FixedAdvanceMeasurer;
/// use dense_ticks::{Axis, DenseTimeTicks, Orientation, ScaleLinear, Ticker};
///
/// // 2024-01-15 to 2024-03-01, in Unix seconds.
/// let (min, max) = (1_705_276_800.0, 1_709_251_200.0);
/// let axis = Axis::new(ScaleLinear::new((min, max)), FixedAdvanceMeasurer::new(3.0));
/// let mut ticker = DenseTimeTicks::new("%Y-%m-%d");
/// ticker.set_axis(&axis, 100.0, Orientation::Horizontal);
///
/// let labels: Vec<_> = ticker.ticks(min, max).into_iter().map(|t| t.label).collect();
/// assert_eq!(labels, ["2024-02-01", "2024-03-01"]);
/// ```
#[derive(Clone)]
pub struct DenseTimeTicks {
    format: String,
    conversion: Arc<dyn TimeConversion>,
    layout: Option<AxisLayout>,
    max_ticks: usize,
}

impl core::fmt::Debug for DenseTimeTicks {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("DenseTimeTicks")
            .field("format", &self.format)
            .field("layout", &self.layout)
            .field("max_ticks", &self.max_ticks)
            .finish_non_exhaustive()
    }
}

impl Default for DenseTimeTicks {
    fn default() -> Self {
        Self::new(DEFAULT_FORMAT)
    }
}

impl DenseTimeTicks {
    /// Creates a ticker labelling ticks with the strftime-style `format`.
    ///
    /// An invalid pattern is reported by every [`Ticker::try_ticks`] call;
    /// use [`DenseTimeTicks::try_new`] to catch it up front.
    pub fn new(format: impl Into<String>) -> Self {
        Self {
            format: format.into(),
            conversion: Arc::new(UnixSeconds::utc()),
            layout: None,
            max_ticks: DEFAULT_MAX_TICKS,
        }
    }

    /// Creates a ticker, rejecting patterns with unknown specifiers.
    pub fn try_new(format: impl Into<String>) -> Result<Self, TickError> {
        let ticker = Self::new(format);
        if StrftimeItems::new(&ticker.format).any(|item| matches!(item, Item::Error)) {
            return Err(TickError::InvalidFormat(ticker.format));
        }
        Ok(ticker)
    }

    /// Set how axis values map to instants. Defaults to [`UnixSeconds::utc`].
    pub fn with_conversion(mut self, conversion: impl TimeConversion + 'static) -> Self {
        self.conversion = Arc::new(conversion);
        self
    }

    /// Set the maximum number of ticks a single call may emit.
    pub fn with_max_ticks(mut self, max_ticks: usize) -> Self {
        self.max_ticks = max_ticks;
        self
    }

    /// Returns the label pattern.
    pub fn format(&self) -> &str {
        &self.format
    }

    /// Index into [`LATTICE`] of the rule used for a range starting at `min`.
    pub fn selected_rule(&self, min: f64) -> Result<usize, TickError> {
        if !min.is_finite() {
            return Err(TickError::NonFinite { min, max: min });
        }
        let layout = axis::usable(self.layout.as_ref())?;
        let min_time = self.instant(min)?;
        Ok(self.select(min_time, layout, self.label_width(min, layout)?))
    }

    fn instant(&self, value: f64) -> Result<NaiveDateTime, TickError> {
        self.conversion
            .to_time(value)
            .ok_or(TickError::TimeOutOfRange(value))
    }

    /// Formats the instant at `value` with its offset attached.
    fn label(&self, value: f64) -> Result<String, TickError> {
        let local = self
            .instant(value)?
            .and_local_timezone(self.conversion.offset())
            .single()
            .ok_or(TickError::TimeOutOfRange(value))?;
        let mut out = String::new();
        write!(out, "{}", local.format(&self.format))
            .map_err(|_| TickError::InvalidFormat(self.format.clone()))?;
        Ok(out)
    }

    fn label_width(&self, value: f64, layout: &AxisLayout) -> Result<f64, TickError> {
        Ok(layout.sizer.measure(&self.label(value)?))
    }

    /// Pixel width of the first bucket of `rule`, if it is representable.
    fn bucket_pixels(&self, rule: &CalendarRule, min_time: NaiveDateTime, layout: &AxisLayout) -> Option<f64> {
        let (t0, t1) = rule.first_bucket(min_time)?;
        let v0 = self.conversion.to_value(t0)?;
        let v1 = self.conversion.to_value(t1)?;
        Some(layout.pixels_between(v0, v1))
    }

    fn select(&self, min_time: NaiveDateTime, layout: &AxisLayout, label_width: f64) -> usize {
        let last = LATTICE.len() - 1;
        LATTICE[..last]
            .iter()
            .position(|rule| {
                self.bucket_pixels(rule, min_time, layout)
                    .is_some_and(|space| space > label_width)
            })
            .unwrap_or(last)
    }
}

impl Ticker for DenseTimeTicks {
    fn set_axis(&mut self, axis: &Axis, length: f64, orientation: Orientation) {
        self.layout = Some(AxisLayout::new(axis, length, orientation));
    }

    fn try_ticks(&self, min: f64, max: f64) -> Result<Vec<Tick>, TickError> {
        check_range(min, max)?;
        let layout = axis::usable(self.layout.as_ref())?;

        let min_time = self.instant(min)?;
        let index = self.select(min_time, layout, self.label_width(min, layout)?);
        let rule = LATTICE[index];
        log::debug!("time ticks over [{min}, {max}]: {} (rule {index})", rule.increment);

        let mut ticks = Vec::new();
        let mut steps = 0;
        let mut next = rule.normalize.apply(min_time);
        while let Some(time) = next {
            let Some(value) = self.conversion.to_value(time) else {
                break;
            };
            if value > max {
                break;
            }
            if value >= min {
                if ticks.len() == self.max_ticks {
                    log::warn!("{} over [{min}, {max}] exceeds {} ticks", rule.increment, self.max_ticks);
                    return Err(TickError::TooManyTicks {
                        limit: self.max_ticks,
                    });
                }
                ticks.push(Tick::new(value, self.label(value)?));
            } else if steps > self.max_ticks {
                // Leading buckets never reached `min`.
                return Err(TickError::TooManyTicks {
                    limit: self.max_ticks,
                });
            }
            steps += 1;
            next = rule.increment.apply(time);
        }
        Ok(ticks)
    }
}
