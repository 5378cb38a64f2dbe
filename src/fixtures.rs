//! Canonical argument sets for driving every exported function through a loader.
//!
//! `run_fixtures` evaluates each case with the safe kernels and returns
//! serializable records, so a host harness can diff its own results against
//! `fixtures_json` output.

use serde::Serialize;
use serde_json::{json, Value};

use crate::config::SamplesConfig;
use crate::error::Result;
use crate::kernels::{self, sub_filter};
use crate::log_metric;

pub const ADD_I32_CASES: [(i32, i32); 3] = [(42, 3), (-10, 89), (0x7fff_ffff, 1)];
pub const ADD_I64_CASES: [(i64, i64); 1] = [(42, 3)];
pub const ADD_F32_CASES: [(f32, f32); 1] = [(42.1, 3.2)];
pub const ADD_F64_CASES: [(f64, f64); 1] = [(42.1, 3.2)];
pub const MANDELBROT_SEEDS: [(f64, f64); 4] = [(0.0, 0.0), (-2.0, -2.0), (2.0, 2.0), (-1.5, -1.0)];
pub const FILTER_ROW: [u8; 16] = [
    20, 30, 39, 47, 53, 58, 62, 65, 67, 68, 68, 67, 65, 62, 58, 53,
];
pub const PALETTE_INDICES: [i32; 5] = [0, 1, 2, 15, 16];
pub const FUNC_TABLE_ARGS: (i32, i32) = (30, 77);

/// One evaluated call.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct FixtureRecord {
    pub function: &'static str,
    pub args: Value,
    pub result: Value,
}

impl FixtureRecord {
    fn new(function: &'static str, args: Value, result: Value) -> Self {
        Self {
            function,
            args,
            result,
        }
    }
}

/// Evaluates every fixture case in a fixed order.
pub fn run_fixtures(config: &SamplesConfig) -> Result<Vec<FixtureRecord>> {
    config.validate()?;
    let mut records = Vec::new();

    for (a, b) in ADD_I32_CASES {
        let sum = kernels::sample_add_i32(a, b);
        records.push(FixtureRecord::new("sample_add_i32", json!([a, b]), json!(sum)));
    }
    for (a, b) in ADD_I64_CASES {
        let sum = kernels::sample_add_i64(a, b);
        records.push(FixtureRecord::new("sample_add_i64", json!([a, b]), json!(sum)));
    }
    for (a, b) in ADD_F32_CASES {
        let sum = kernels::sample_add_f32(a, b);
        records.push(FixtureRecord::new("sample_add_f32", json!([a, b]), json!(sum)));
    }
    for (a, b) in ADD_F64_CASES {
        let sum = kernels::sample_add_f64(a, b);
        records.push(FixtureRecord::new("sample_add_f64", json!([a, b]), json!(sum)));
    }

    let max_iters = config.mandelbrot_max_iters;
    for (cx, cy) in MANDELBROT_SEEDS {
        let n = kernels::mandelbrot(max_iters, cx, cy);
        log_metric!("event" = "mandelbrot", "cx" = cx, "cy" = cy, "iters" = n);
        records.push(FixtureRecord::new(
            "mandelbrot",
            json!([max_iters, cx, cy]),
            json!(n),
        ));
    }

    let mut filtered = [0u8; FILTER_ROW.len()];
    sub_filter::filter_line(&mut filtered, &FILTER_ROW, FILTER_ROW.len())?;
    records.push(FixtureRecord::new(
        "filter_line",
        json!(FILTER_ROW.to_vec()),
        json!(filtered.to_vec()),
    ));

    for index in PALETTE_INDICES {
        let rgb = kernels::palette_16color(index);
        records.push(FixtureRecord::new("palette_16color", json!([index]), json!(rgb)));
    }

    let (a, b) = FUNC_TABLE_ARGS;
    for index in 0..2 {
        let result = kernels::func_fetch(index).map(|f| kernels::func_invoke(f, a, b));
        records.push(FixtureRecord::new(
            "func_invoke",
            json!([index, a, b]),
            json!(result),
        ));
    }

    log::info!("evaluated {} fixture cases", records.len());
    Ok(records)
}

/// Runs all fixtures and renders them as a pretty-printed JSON array.
pub fn fixtures_json(config: &SamplesConfig) -> Result<String> {
    let records = run_fixtures(config)?;
    Ok(serde_json::to_string_pretty(&records)?)
}
