use itertools::Itertools;
use ordered_float::OrderedFloat;
use tracing::{debug, trace};

use crate::point::{Distance, Point};
use crate::select::{quickselect, MedianOfThree, PivotStrategy};

/// Subproblems of at most this many points are solved by brute force.
pub const BRUTE_FORCE_THRESHOLD: usize = 3;
/// Forward neighbours checked per point in the y-sorted strip.
pub const STRIP_NEIGHBORS: usize = 6;

/// Minimum pairwise distance by checking every unordered pair.
/// `f64::INFINITY` when there are fewer than two points.
pub fn closest_pair_brute_force(points: &[Point]) -> f64 {
    points
        .iter()
        .tuple_combinations()
        .map(|(a, b)| a.distance(b))
        .fold(f64::INFINITY, f64::min)
}

/// Minimum pairwise distance using a median-of-three quickselect split.
pub fn closest_pair(points: &[Point]) -> f64 {
    ClosestPair::<MedianOfThree>::default().solve(points)
}

/// Divide-and-conquer closest pair, parameterised by the pivot rule used when
/// selecting the median x-coordinate.
#[derive(Clone, Copy, Debug, Default)]
pub struct ClosestPair<P: PivotStrategy = MedianOfThree> {
    pivot: P,
}

impl<P: PivotStrategy> ClosestPair<P> {
    pub fn new(pivot: P) -> Self {
        Self { pivot }
    }

    pub fn solve(&self, points: &[Point]) -> f64 {
        let d = self.solve_recursive(points, 0);
        debug!(num_points = points.len(), distance = d, "closest pair solved");
        d
    }

    fn solve_recursive(&self, points: &[Point], depth: usize) -> f64 {
        let n = points.len();
        if n <= BRUTE_FORCE_THRESHOLD {
            return closest_pair_brute_force(points);
        }
        let k = n / 2;
        let mut xs: Vec<OrderedFloat<f64>> = points.iter().map(|p| OrderedFloat(p.x)).collect();
        let median = quickselect(&mut xs, 0, n - 1, k, &self.pivot);
        let (left, right) = split_by_rank(points, median, k + 1);
        trace!(depth, n, median = median.0, left = left.len(), right = right.len(), "split");

        let dl = self.solve_recursive(&left, depth + 1);
        let dr = self.solve_recursive(&right, depth + 1);
        let d = dl.min(dr);
        strip_scan(points, median.0, d)
    }
}

/// Splits `points` into the `left_len` points of lowest x-rank and the rest.
///
/// `median` must be the value of rank `left_len - 1`, so every point below it
/// goes left, every point above it goes right, and ties fill the left half
/// up to `left_len`.
fn split_by_rank(
    points: &[Point],
    median: OrderedFloat<f64>,
    left_len: usize,
) -> (Vec<Point>, Vec<Point>) {
    let below = points.iter().filter(|p| OrderedFloat(p.x) < median).count();
    let mut ties_for_left = left_len - below;
    let mut left = Vec::with_capacity(left_len);
    let mut right = Vec::with_capacity(points.len() - left_len);
    for p in points {
        let x = OrderedFloat(p.x);
        if x < median {
            left.push(*p);
        } else if x == median && ties_for_left > 0 {
            left.push(*p);
            ties_for_left -= 1;
        } else {
            right.push(*p);
        }
    }
    (left, right)
}

/// Improves `d` using pairs that straddle the vertical line `x = median`.
fn strip_scan(points: &[Point], median: f64, mut d: f64) -> f64 {
    let mut strip: Vec<Point> = points
        .iter()
        .filter(|p| median - d < p.x && p.x < median + d)
        .copied()
        .collect();
    strip.sort_unstable_by_key(|p| OrderedFloat(p.y));

    for i in 0..strip.len() {
        let end = strip.len().min(i + 1 + STRIP_NEIGHBORS);
        for j in (i + 1)..end {
            if strip[j].y - strip[i].y < d {
                let candidate = strip[i].distance(&strip[j]);
                if candidate < d {
                    d = candidate;
                }
            } else {
                break;
            }
        }
    }
    d
}
