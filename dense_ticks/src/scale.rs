// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Continuous scales.
//!
//! Tickers only need one thing from a scale: where a value lands along the
//! axis, as a fraction of its length. [`ScaleContinuous::normalize`] answers
//! that.

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

/// A continuous scale instance.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ScaleContinuous {
    /// Linear scale.
    Linear(ScaleLinear),
    /// Log scale.
    Log(ScaleLog),
}

impl ScaleContinuous {
    /// Maps a value into `[0, 1]` along the domain.
    ///
    /// Values outside the domain map outside `[0, 1]`.
    pub fn normalize(&self, x: f64) -> f64 {
        match self {
            Self::Linear(s) => s.normalize(x),
            Self::Log(s) => s.normalize(x),
        }
    }
}

impl From<ScaleLinear> for ScaleContinuous {
    fn from(value: ScaleLinear) -> Self {
        Self::Linear(value)
    }
}

impl From<ScaleLog> for ScaleContinuous {
    fn from(value: ScaleLog) -> Self {
        Self::Log(value)
    }
}

/// A linear scale over a continuous domain.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleLinear {
    domain: (f64, f64),
}

impl ScaleLinear {
    /// Creates a scale over `domain`.
    pub fn new(domain: (f64, f64)) -> Self {
        Self { domain }
    }

    /// Position of `x` within the domain, `0` at the start and `1` at the end.
    ///
    /// A zero-width domain maps everything to `0`.
    pub fn normalize(&self, x: f64) -> f64 {
        let (d0, d1) = self.domain;
        let denom = d1 - d0;
        if denom == 0.0 {
            return 0.0;
        }
        (x - d0) / denom
    }
}

/// A log scale over a positive domain.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleLog {
    domain: (f64, f64),
    base: f64,
}

impl ScaleLog {
    /// Creates a base-10 log scale over `domain`.
    pub fn new(domain: (f64, f64)) -> Self {
        Self { domain, base: 10.0 }
    }

    /// Sets the log base. Invalid bases fall back to 10.
    pub fn with_base(mut self, base: f64) -> Self {
        self.base = if base.is_finite() && base > 0.0 && base != 1.0 {
            base
        } else {
            10.0
        };
        self
    }

    fn log_base(&self, x: f64) -> f64 {
        x.ln() / self.base.ln()
    }

    /// Position of `x` within the domain in log space.
    ///
    /// Non-positive inputs (or domains) map to `0`.
    pub fn normalize(&self, x: f64) -> f64 {
        let (d0, d1) = self.domain;
        if x <= 0.0 || d0 <= 0.0 || d1 <= 0.0 {
            return 0.0;
        }
        let ld0 = self.log_base(d0);
        let denom = self.log_base(d1) - ld0;
        if denom == 0.0 {
            return 0.0;
        }
        (self.log_base(x) - ld0) / denom
    }
}
