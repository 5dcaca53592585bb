use std::io::Write;

use anyhow::{Context, Result, bail};
use chrono::Utc;
use clap::ValueEnum;
use rand::{
    Rng, SeedableRng,
    distributions::{Distribution, Uniform},
    rngs::StdRng,
};
use serde::{Deserialize, Serialize};

/// Which kind of case the generator emits.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// One value; the expected output is the value itself.
    Echo,
    /// Two values; the expected output is their sum.
    #[default]
    Sum,
}

impl Mode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Echo => "echo",
            Mode::Sum => "sum",
        }
    }

    /// Range used when neither bound is configured.
    pub fn preset_range(&self) -> (i64, i64) {
        match self {
            Mode::Echo => (0, 1_000),
            Mode::Sum => (0, 1_000_100_000),
        }
    }
}

/// A single generated case.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TestCase {
    Echo(i64),
    Sum(i64, i64),
}

impl TestCase {
    pub fn expected(&self) -> i64 {
        match *self {
            TestCase::Echo(a) => a,
            TestCase::Sum(a, b) => a + b,
        }
    }

    /// Write the case as `<inputs>\n---\n<expected>\n===\n`.
    pub fn write_block<W: Write + ?Sized>(&self, w: &mut W) -> std::io::Result<()> {
        match *self {
            TestCase::Echo(a) => write!(w, "{a}")?,
            TestCase::Sum(a, b) => write!(w, "{a} {b}")?,
        }
        write!(w, "\n---\n{}\n===\n", self.expected())
    }
}

/// Reject ranges that are empty or whose sums would not fit in an `i64`.
pub fn check_range(mode: Mode, min: i64, max: i64) -> Result<()> {
    if min > max {
        bail!("invalid range: min {min} is greater than max {max}");
    }
    if mode == Mode::Sum && (min.checked_add(min).is_none() || max.checked_add(max).is_none()) {
        bail!("range [{min}, {max}] is too wide for sum mode: the sum of two values overflows i64");
    }
    Ok(())
}

/// Seed derived from the wall clock, in whole seconds.
pub fn clock_seed() -> u64 {
    u64::try_from(Utc::now().timestamp()).unwrap_or(0)
}

pub fn create_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Endless stream of cases drawn uniformly from `[min, max]`.
#[derive(Debug)]
pub struct Generator<R> {
    rng: R,
    dist: Uniform<i64>,
    mode: Mode,
}

impl<R: Rng> Generator<R> {
    pub fn new(rng: R, mode: Mode, min: i64, max: i64) -> Result<Self> {
        check_range(mode, min, max)?;
        Ok(Self {
            rng,
            dist: Uniform::new_inclusive(min, max),
            mode,
        })
    }

    fn sample(&mut self) -> i64 {
        self.dist.sample(&mut self.rng)
    }
}

impl<R: Rng> Iterator for Generator<R> {
    type Item = TestCase;

    fn next(&mut self) -> Option<TestCase> {
        let case = match self.mode {
            Mode::Echo => TestCase::Echo(self.sample()),
            Mode::Sum => {
                let a = self.sample();
                let b = self.sample();
                TestCase::Sum(a, b)
            }
        };
        Some(case)
    }
}

/// Write `count` blocks drawn from `rng` into `w`, returning the number written.
pub fn generate<W: Write + ?Sized, R: Rng>(
    w: &mut W,
    rng: R,
    count: usize,
    min: i64,
    max: i64,
    mode: Mode,
) -> Result<usize> {
    let generator = Generator::new(rng, mode, min, max)?;
    let mut written = 0usize;
    for case in generator.take(count) {
        case.write_block(w)
            .with_context(|| format!("failed to write case {}", written + 1))?;
        written += 1;
    }
    Ok(written)
}
