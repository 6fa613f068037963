// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dense ticks for plain numeric axes.
//!
//! The step is searched on a fixed lattice: every decade is split by
//! `1, 0.5, 0.25, 0.2`. The search starts one decade coarser than the whole
//! range and keeps refining while a placeholder label (as many zeros as the
//! widest label needs) still fits between two ticks. It then backs off one
//! refinement, which leaves the densest step whose labels cannot overlap.

use alloc::string::String;
use alloc::vec::Vec;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

use crate::axis::{self, Axis, AxisLayout, Orientation};
use crate::error::TickError;
use crate::measure::LabelSizer;
use crate::tick::{Tick, Ticker, check_range};

/// Subdivisions applied within one decade, coarsest first.
const FINER: [f64; 4] = [1.0, 0.5, 0.25, 0.2];

/// Extra fractional digits each subdivision needs, in lockstep with [`FINER`].
const LOG_CORR: [i32; 4] = [0, 1, 2, 1];

/// Bound on refinements (24 decades) so a zero-width measurer cannot spin forever.
const MAX_REFINEMENTS: usize = FINER.len() * 24;

/// Default cap on the number of emitted ticks.
pub const DEFAULT_MAX_TICKS: usize = 10_000;

/// Places as many ticks as fit on a numeric axis without label overlap.
///
/// ```
/// use dense_text::FixedAdvanceMeasurer;
/// use dense_ticks::{Axis, DenseTicks, Orientation, ScaleLinear, Ticker};
///
/// let axis = Axis::new(ScaleLinear::new((0.0, 3.0)), FixedAdvanceMeasurer::new(3.0));
/// let mut ticker = DenseTicks::new();
/// ticker.set_axis(&axis, 30.0, Orientation::Horizontal);
///
/// let labels: Vec<_> = ticker.ticks(0.0, 3.0).into_iter().map(|t| t.label).collect();
/// assert_eq!(labels, ["0", "1", "2", "3"]);
/// ```
#[derive(Clone, Debug)]
pub struct DenseTicks {
    layout: Option<AxisLayout>,
    max_ticks: usize,
}

impl Default for DenseTicks {
    fn default() -> Self {
        Self::new()
    }
}

/// The step chosen for a range, see [`DenseTicks::resolve`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ResolvedStep {
    /// Distance between consecutive ticks.
    pub step: f64,
    /// Fractional digits in every label.
    pub decimals: usize,
    /// Pixels available to each label at this step.
    pub budget: f64,
    /// Pixel extent of the widest label at this step.
    pub label_width: f64,
}

impl DenseTicks {
    /// Creates a ticker; call [`Ticker::set_axis`] before asking for ticks.
    pub fn new() -> Self {
        Self {
            layout: None,
            max_ticks: DEFAULT_MAX_TICKS,
        }
    }

    /// Set the maximum number of ticks a single call may emit.
    ///
    /// Ranges needing more fail with [`TickError::TooManyTicks`].
    pub fn with_max_ticks(mut self, max_ticks: usize) -> Self {
        self.max_ticks = max_ticks;
        self
    }

    /// Resolves the tick step for `[min, max]` without emitting ticks.
    pub fn resolve(&self, min: f64, max: f64) -> Result<ResolvedStep, TickError> {
        check_range(min, max)?;
        let layout = axis::usable(self.layout.as_ref())?;
        let search = search_step(min, max, layout);
        Ok(ResolvedStep {
            step: search.step(),
            decimals: search.nks(),
            budget: search.budget(layout.length),
            label_width: search.probe_width(&layout.sizer),
        })
    }
}

impl Ticker for DenseTicks {
    fn set_axis(&mut self, axis: &Axis, length: f64, orientation: Orientation) {
        self.layout = Some(AxisLayout::new(axis, length, orientation));
    }

    fn try_ticks(&self, min: f64, max: f64) -> Result<Vec<Tick>, TickError> {
        let ResolvedStep { step, decimals, .. } = self.resolve(min, max)?;
        log::debug!("numeric ticks over [{min}, {max}]: step {step}, {decimals} decimals");

        let start = (min / step).ceil() * step;
        // Keeps the last tick when rounding lands it a hair above `max`.
        let end = max + step / 10_000.0;

        let mut ticks = Vec::new();
        for i in 0_usize.. {
            let value = snap_zero(start + step * i as f64, step);
            if value > end {
                break;
            }
            if ticks.len() == self.max_ticks {
                log::warn!("step {step} over [{min}, {max}] exceeds {} ticks", self.max_ticks);
                return Err(TickError::TooManyTicks {
                    limit: self.max_ticks,
                });
            }
            ticks.push(Tick::new(value, format_fixed(value, decimals)));
        }
        Ok(ticks)
    }
}

/// Runs the step search for `[min, max]` on the cached layout.
fn search_step(min: f64, max: f64, layout: &AxisLayout) -> StepSearch {
    let mut search = StepSearch::start(min, max);
    let mut refinements = 0;
    while search.fits(layout) {
        if refinements == MAX_REFINEMENTS {
            log::warn!("tick step search over [{min}, {max}] hit its refinement bound");
            return search;
        }
        search = search.inc();
        refinements += 1;
    }
    search.dec()
}

/// State of the step search. Each transition returns a new state.
#[derive(Clone, Copy, Debug, PartialEq)]
struct StepSearch {
    delta: f64,
    /// Decimal exponent of the current decade.
    log: i32,
    /// Index into [`FINER`].
    fine_step: usize,
    /// Integer digits of the widest label, sign included.
    vks: usize,
}

impl StepSearch {
    fn start(min: f64, max: f64) -> Self {
        let delta = max - min;
        let log = to_exponent(delta.log10()) + 1;
        Self {
            delta,
            log,
            fine_step: 0,
            vks: integer_digits(min, max),
        }
    }

    /// Fractional digits needed at the current step.
    fn nks(&self) -> usize {
        usize::try_from(LOG_CORR[self.fine_step] - self.log).unwrap_or(0)
    }

    fn step_width(&self) -> f64 {
        exp10(self.log)
    }

    fn step(&self) -> f64 {
        self.step_width() * FINER[self.fine_step]
    }

    /// Pixels between two ticks at the current step.
    fn budget(&self, length: f64) -> f64 {
        length * (self.step() / self.delta)
    }

    fn probe_width(&self, sizer: &LabelSizer) -> f64 {
        sizer.measure(&placeholder(self.vks, self.nks()))
    }

    fn fits(&self, layout: &AxisLayout) -> bool {
        let budget = self.budget(layout.length);
        let width = self.probe_width(&layout.sizer);
        log::trace!("probe step {}: budget {budget}px, label {width}px", self.step());
        budget > width
    }

    /// One refinement finer, moving to the next decade after the last subdivision.
    fn inc(mut self) -> Self {
        self.fine_step += 1;
        if self.fine_step == FINER.len() {
            self.log -= 1;
            self.fine_step = 0;
        }
        self
    }

    /// One refinement coarser; the inverse of [`StepSearch::inc`].
    fn dec(mut self) -> Self {
        if self.fine_step == 0 {
            self.log += 1;
            self.fine_step = FINER.len() - 1;
        } else {
            self.fine_step -= 1;
        }
        self
    }
}

/// Integer digits needed for the larger magnitude bound, plus one for a minus sign.
fn integer_digits(min: f64, max: f64) -> usize {
    let magnitude = min.abs().log10().max(max.abs().log10());
    let digits = usize::try_from(to_exponent(magnitude) + 1)
        .unwrap_or(0)
        .max(1);
    if min < 0.0 { digits + 1 } else { digits }
}

/// `floor(x)` as an exponent; infinities saturate.
fn to_exponent(x: f64) -> i32 {
    let x = x.floor().clamp(f64::from(i32::MIN / 2), f64::from(i32::MAX / 2));
    #[allow(clippy::cast_possible_truncation, reason = "clamped to the i32 range")]
    {
        x as i32
    }
}

/// `10^exp` by repeated multiplication, so whole powers stay exact.
fn exp10(exp: i32) -> f64 {
    let mut out = 1.0;
    if exp < 0 {
        for _ in 0..exp.unsigned_abs() {
            out /= 10.0;
        }
    } else {
        for _ in 0..exp {
            out *= 10.0;
        }
    }
    out
}

/// A label as wide as the widest real one: `vks` zeros, then `nks` decimals.
fn placeholder(vks: usize, nks: usize) -> String {
    let mut s = String::with_capacity(vks + nks + 1);
    s.extend(core::iter::repeat_n('0', vks));
    if nks > 0 {
        s.push('.');
        s.extend(core::iter::repeat_n('0', nks));
    }
    s
}

/// Snaps rounding residue around zero to `+0.0`, so no `-0` labels appear.
fn snap_zero(value: f64, step: f64) -> f64 {
    if value.abs() < step * 1e-9 { 0.0 } else { value }
}

fn format_fixed(value: f64, decimals: usize) -> String {
    alloc::format!("{value:.decimals$}")
}
