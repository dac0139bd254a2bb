use std::io::{self, Write};
use std::time::Instant;

use tracing::info;

use crate::closest_pair::ClosestPair;
use crate::error::GeneratorError;
use crate::generator::{PointGenerator, DEFAULT_BOUND, DEFAULT_SEED};
use crate::point::Point;
use crate::select::{FirstElement, MedianOfThree, PivotStrategy};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExperimentMode {
    /// Uniform points, median-of-three pivot.
    Random,
    /// Points sorted by `(y, x)`, first-element pivot.
    WorstCase,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Sample {
    pub n: usize,
    pub nanos: u128,
}

pub struct Experiment {
    pub max_n: usize,
    pub trials: usize,
    pub mode: ExperimentMode,
    pub seed: u64,
    pub bound: f64,
}

impl Experiment {
    pub fn new(max_n: usize, mode: ExperimentMode) -> Self {
        Self {
            max_n,
            trials: 10,
            mode,
            seed: DEFAULT_SEED,
            bound: DEFAULT_BOUND,
        }
    }

    /// Times one solve per trial for every `n` in `2..=max_n`, writing an
    /// `n,nanos` row per sample to `out`.
    pub fn run<W: Write>(&self, out: &mut W) -> io::Result<Vec<Sample>> {
        let generator = PointGenerator::new(self.bound, self.seed)
            .map_err(|e: GeneratorError| io::Error::new(io::ErrorKind::InvalidInput, e))?;
        let mut samples = Vec::with_capacity(self.max_n.saturating_sub(1) * self.trials);
        for n in 2..=self.max_n {
            if n % 100 == 0 {
                info!(n, max_n = self.max_n, "experiment progress");
            }
            for _ in 0..self.trials {
                let nanos = match self.mode {
                    ExperimentMode::Random => {
                        time_solve(&ClosestPair::new(MedianOfThree), &generator.generate(n))
                    }
                    ExperimentMode::WorstCase => time_solve(
                        &ClosestPair::new(FirstElement),
                        &generator.generate_worst_case(n),
                    ),
                };
                writeln!(out, "{n},{nanos}")?;
                samples.push(Sample { n, nanos });
            }
        }
        Ok(samples)
    }
}

fn time_solve<P: PivotStrategy>(solver: &ClosestPair<P>, points: &[Point]) -> u128 {
    let timer = Instant::now();
    std::hint::black_box(solver.solve(std::hint::black_box(points)));
    timer.elapsed().as_nanos()
}
