pub mod config;
pub mod error;
pub mod grid;
pub mod output;
pub mod render;
pub mod rule;
pub mod simulate;

use std::time::Instant;

use tracing::debug;

use config::{BoundaryPolicy, Params};
pub use error::{Error, Result};
use grid::Grid;
use render::Image;
use rule::Rule;

/// One fully processed rule: the space-time grid and its rendering.
pub struct Frame {
    pub rule: Rule,
    pub boundary: BoundaryPolicy,
    pub grid: Grid<bool>,
    pub image: Image,
}

pub struct Timing {
    pub name: &'static str,
    pub ms: f64,
}

fn record(timings: &mut Vec<Timing>, name: &'static str, t: Instant) {
    let ms = t.elapsed().as_secs_f64() * 1000.0;
    debug!(stage = name, ms, "stage done");
    timings.push(Timing { name, ms });
}

/// Decode, simulate and render one rule.
pub fn generate(rule_number: i64, params: &Params) -> Result<(Frame, Vec<Timing>)> {
    params.validate()?;

    let mut timings = Vec::new();
    let total_start = Instant::now();

    // 1. Decode
    let t = Instant::now();
    let rule = Rule::decode(rule_number)?;
    record(&mut timings, "decode", t);

    // 2. Simulate
    let t = Instant::now();
    let grid = simulate::simulate(rule, params.boundary, params.height, params.width);
    record(&mut timings, "simulate", t);

    // 3. Render
    let t = Instant::now();
    let image = render::render(&grid, params.offset)?;
    record(&mut timings, "render", t);

    record(&mut timings, "TOTAL", total_start);

    let frame = Frame {
        rule,
        boundary: params.boundary,
        grid,
        image,
    };

    Ok((frame, timings))
}
