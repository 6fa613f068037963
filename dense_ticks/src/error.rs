// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use core::fmt;

/// Reasons a ticker refuses to produce ticks.
#[derive(Clone, Debug, PartialEq)]
pub enum TickError {
    /// `min` or `max` is NaN or infinite.
    NonFinite {
        /// Requested lower bound.
        min: f64,
        /// Requested upper bound.
        max: f64,
    },
    /// The range is empty or inverted (`max - min <= 0`).
    EmptyRange {
        /// Requested lower bound.
        min: f64,
        /// Requested upper bound.
        max: f64,
    },
    /// `Ticker::set_axis` was never called, or was given a bad length.
    AxisNotSet,
    /// The resolved step would produce more than `limit` ticks.
    TooManyTicks {
        /// The configured cap.
        limit: usize,
    },
    /// The date format pattern contains an unsupported specifier.
    InvalidFormat(String),
    /// The value cannot be represented as a calendar instant.
    TimeOutOfRange(f64),
}

impl fmt::Display for TickError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonFinite { min, max } => write!(f, "non-finite axis range [{min}, {max}]"),
            Self::EmptyRange { min, max } => write!(f, "empty axis range [{min}, {max}]"),
            Self::AxisNotSet => f.write_str("axis length and label metrics are not set"),
            Self::TooManyTicks { limit } => write!(f, "more than {limit} ticks requested"),
            Self::InvalidFormat(pattern) => write!(f, "invalid date format {pattern:?}"),
            Self::TimeOutOfRange(value) => write!(f, "value {value} is not a valid instant"),
        }
    }
}

impl core::error::Error for TickError {}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::string::ToString;

    use super::*;

    #[test]
    fn messages_name_the_offending_input() {
        let e = TickError::EmptyRange { min: 3.0, max: 3.0 };
        assert_eq!(e.to_string(), "empty axis range [3, 3]");
        let e = TickError::InvalidFormat("%Q".into());
        assert_eq!(e.to_string(), "invalid date format \"%Q\"");
    }
}
