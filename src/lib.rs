//! Randomized test-input generator.
//!
//! Writes `count` cases to a text file, each as a block of the form
//!
//! ```text
//! <inputs>
//! ---
//! <expected>
//! ===
//! ```
//!
//! In [`Mode::Echo`] the input is one value and the expected output repeats
//! it; in [`Mode::Sum`] the input is two space-separated values and the
//! expected output is their sum. Values are drawn uniformly from `[min, max]`
//! by a [`rand::rngs::StdRng`] seeded from the clock unless a seed is given.
//!
//! ```rust
//! use casegen::{Mode, create_rng, generate};
//!
//! let mut buf = Vec::new();
//! generate(&mut buf, create_rng(7), 2, 5, 5, Mode::Sum).unwrap();
//! assert_eq!(String::from_utf8(buf).unwrap(), "5 5\n---\n10\n===\n5 5\n---\n10\n===\n");
//! ```

pub mod config;
pub mod generator;
pub mod output;
pub mod report;

use std::time::Instant;

use anyhow::Result;
use chrono::Local;

pub use config::{GenConfig, Settings, load_settings};
pub use generator::{Generator, Mode, TestCase, check_range, clock_seed, create_rng, generate};
pub use output::write_atomically;
pub use report::RunReport;

/// Generate the file described by `config`, replacing any previous one.
pub fn run(config: &GenConfig) -> Result<RunReport> {
    let seed = config.seed.unwrap_or_else(clock_seed);
    let started_at = Local::now();
    let start = Instant::now();

    let mut count = 0usize;
    write_atomically(&config.output, |w| {
        count = generate(
            w,
            create_rng(seed),
            config.count,
            config.min,
            config.max,
            config.mode,
        )?;
        Ok(())
    })?;

    Ok(RunReport {
        mode: config.mode,
        count,
        min: config.min,
        max: config.max,
        seed,
        output: config.output.clone(),
        started_at,
        finished_at: Local::now(),
        duration_ms: start.elapsed().as_millis(),
    })
}
