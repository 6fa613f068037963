// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

extern crate std;

use alloc::vec::Vec;

use chrono::NaiveDate;
use dense_text::FixedAdvanceMeasurer;

use crate::{Axis, DenseTicks, DenseTimeTicks, LATTICE, Orientation, ScaleLinear, Tick, Ticker};

const RANGES: [(f64, f64); 8] = [
    (0.0, 1.0),
    (0.0, 3.0),
    (-5.0, 5.0),
    (0.3, 9.7),
    (1e-3, 2e-3),
    (1000.0, 1e6),
    (-1e4, -10.0),
    (12345.0, 12346.5),
];

const LENGTHS: [f64; 5] = [50.0, 120.0, 300.0, 800.0, 1500.0];

fn numeric(min: f64, max: f64, length: f64) -> DenseTicks {
    let axis = Axis::new(ScaleLinear::new((min, max)), FixedAdvanceMeasurer::new(3.0));
    let mut t = DenseTicks::new();
    t.set_axis(&axis, length, Orientation::Horizontal);
    t
}

fn secs(y: i32, m: u32, d: u32) -> f64 {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap()
        .and_utc()
        .timestamp() as f64
}

fn temporal(min: f64, max: f64, length: f64) -> DenseTimeTicks {
    let axis = Axis::new(ScaleLinear::new((min, max)), FixedAdvanceMeasurer::new(3.0));
    let mut t = DenseTimeTicks::default();
    t.set_axis(&axis, length, Orientation::Horizontal);
    t
}

fn time_ranges() -> [(f64, f64); 5] {
    [
        (secs(2024, 1, 15), secs(2024, 3, 1)),
        (secs(2024, 2, 27), secs(2024, 3, 5)),
        (secs(2020, 6, 1), secs(2024, 2, 10)),
        (secs(1990, 1, 1), secs(2030, 1, 1)),
        (secs(1969, 12, 1), secs(1970, 2, 1)),
    ]
}

fn values(ticks: &[Tick]) -> Vec<f64> {
    ticks.iter().map(|t| t.value).collect()
}

#[test]
fn numeric_ticks_are_evenly_spaced_inside_the_range() {
    for (min, max) in RANGES {
        for length in LENGTHS {
            let t = numeric(min, max, length);
            let step = t.resolve(min, max).unwrap().step;
            let ticks = t.try_ticks(min, max).unwrap();
            let eps = step * 1e-6;
            for v in values(&ticks) {
                assert!(v >= min - eps && v <= max + eps, "{v} outside [{min}, {max}]");
                let k = v / step;
                assert!((k - k.round()).abs() < 1e-6, "{v} is not a multiple of {step}");
            }
            for w in ticks.windows(2) {
                let gap = w[1].value - w[0].value;
                assert!((gap - step).abs() <= eps, "gap {gap} != step {step}");
            }
        }
    }
}

#[test]
fn numeric_labels_share_their_precision() {
    for (min, max) in RANGES {
        for length in LENGTHS {
            let t = numeric(min, max, length);
            let decimals = t.resolve(min, max).unwrap().decimals;
            for tick in t.try_ticks(min, max).unwrap() {
                let fraction = tick.label.split_once('.').map_or(0, |(_, f)| f.len());
                assert_eq!(fraction, decimals, "label {:?}", tick.label);
                assert_ne!(tick.label, "-0");
            }
        }
    }
}

#[test]
fn repeated_calls_agree() {
    for (min, max) in RANGES {
        let t = numeric(min, max, 300.0);
        assert_eq!(t.try_ticks(min, max), t.try_ticks(min, max));
    }
    for (min, max) in time_ranges() {
        let t = temporal(min, max, 300.0);
        assert_eq!(t.try_ticks(min, max), t.try_ticks(min, max));
    }
}

#[test]
fn longer_axes_never_get_sparser() {
    for (min, max) in RANGES {
        let mut previous = (f64::INFINITY, 0);
        for length in LENGTHS {
            let t = numeric(min, max, length);
            let step = t.resolve(min, max).unwrap().step;
            let count = t.try_ticks(min, max).unwrap().len();
            assert!(step <= previous.0, "[{min}, {max}] at {length}px: {step} > {}", previous.0);
            assert!(count >= previous.1, "[{min}, {max}] at {length}px: {count} ticks");
            previous = (step, count);
        }
    }
}

#[test]
fn resolved_step_leaves_room_for_labels() {
    for (min, max) in RANGES {
        for length in LENGTHS {
            let resolved = numeric(min, max, length).resolve(min, max).unwrap();
            assert!(
                resolved.budget > resolved.label_width,
                "[{min}, {max}] at {length}px: {resolved:?}"
            );
        }
    }
}

#[test]
fn calendar_rule_gets_finer_with_length() {
    for (min, max) in time_ranges() {
        let mut previous = LATTICE.len();
        for length in [20.0, 100.0, 400.0, 1500.0, 6000.0] {
            let index = temporal(min, max, length).selected_rule(min).unwrap();
            assert!(index <= previous, "rule {index} after {previous} at {length}px");
            previous = index;
        }
    }
}

#[test]
fn time_ticks_are_increasing_midnights_in_range() {
    for (min, max) in time_ranges() {
        for length in [20.0, 100.0, 400.0, 1500.0] {
            let ticks = temporal(min, max, length).try_ticks(min, max).unwrap();
            for tick in &ticks {
                assert!(tick.value >= min && tick.value <= max);
                assert_eq!(tick.value.rem_euclid(86_400.0), 0.0);
                assert_eq!(tick.label.len(), 10);
            }
            for w in ticks.windows(2) {
                assert!(w[0].value < w[1].value);
                assert_ne!(w[0].label, w[1].label);
            }
        }
    }
}
