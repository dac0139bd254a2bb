use ordered_float::OrderedFloat;
use rand::distr::Uniform;
use rand::prelude::*;
use std::cell::RefCell;

use crate::error::GeneratorError;
use crate::point::Point;

pub const DEFAULT_SEED: u64 = 42;
/// Largest coordinate produced by default, matching a signed 64-bit index range.
pub const DEFAULT_BOUND: f64 = i64::MAX as f64;

pub struct PointGenerator {
    pub bound: f64,
    dist: Uniform<f64>,
    rng: RefCell<StdRng>,
}

fn generate_point(dist: &Uniform<f64>, rng: &mut impl Rng) -> Point {
    let x = rng.sample(dist);
    let y = rng.sample(dist);
    Point { x, y }
}

impl PointGenerator {
    pub fn new(bound: f64, seed: u64) -> Result<Self, GeneratorError> {
        if !bound.is_finite() || bound <= 0.0 {
            return Err(GeneratorError::InvalidBound(bound));
        }
        let dist = Uniform::new(0.0, bound).map_err(|_| GeneratorError::InvalidBound(bound))?;
        Ok(Self {
            bound,
            dist,
            rng: RefCell::new(StdRng::seed_from_u64(seed)),
        })
    }

    /// `n` points uniform in `[0, bound)²`.
    pub fn generate(&self, n: usize) -> Vec<Point> {
        let mut rng = self.rng.borrow_mut();
        (0..n).map(|_| generate_point(&self.dist, &mut *rng)).collect()
    }

    /// `n` uniform points sorted by `(y, x)`, the input order used to stress
    /// the first-element pivot.
    pub fn generate_worst_case(&self, n: usize) -> Vec<Point> {
        let mut points = self.generate(n);
        points.sort_by_key(|p| (OrderedFloat(p.y), OrderedFloat(p.x)));
        points
    }
}
