/// Chooses the pivot position for one partitioning step over `values[left..=right]`.
pub trait PivotStrategy {
    fn choose<T: PartialOrd>(&self, values: &[T], left: usize, right: usize) -> usize;
}

/// Median of the first, middle and last candidates.
#[derive(Clone, Copy, Debug, Default)]
pub struct MedianOfThree;

/// Always the leftmost element. Degrades to quadratic time on sorted input,
/// which is what the worst-case experiment wants to measure.
#[derive(Clone, Copy, Debug, Default)]
pub struct FirstElement;

impl PivotStrategy for MedianOfThree {
    fn choose<T: PartialOrd>(&self, values: &[T], left: usize, right: usize) -> usize {
        median_of_three(values, left, right)
    }
}

impl PivotStrategy for FirstElement {
    fn choose<T: PartialOrd>(&self, _values: &[T], left: usize, _right: usize) -> usize {
        left
    }
}

/// Returns whichever of `left`, the midpoint and `right` holds the median of
/// the three values.
pub fn median_of_three<T: PartialOrd>(values: &[T], left: usize, right: usize) -> usize {
    let middle = left + (right - left) / 2;
    let a = &values[left];
    let b = &values[middle];
    let c = &values[right];
    if (b <= a && a <= c) || (c <= a && a <= b) {
        left
    } else if (a <= b && b <= c) || (c <= b && b <= a) {
        middle
    } else {
        // a <= c <= b or b <= c <= a, or an unordered value slipped in
        right
    }
}

/// Lomuto partition of `values[left..=right]` around `values[pivot_index]`.
///
/// Returns the pivot's final index `p`. Afterwards everything in `left..p` is
/// strictly less than `values[p]` and everything in `p + 1..=right` is not.
pub fn partition<T: PartialOrd>(
    values: &mut [T],
    left: usize,
    right: usize,
    pivot_index: usize,
) -> usize {
    values.swap(pivot_index, right);
    let mut partition_index = left;
    for i in left..right {
        if values[i] < values[right] {
            values.swap(partition_index, i);
            partition_index += 1;
        }
    }
    values.swap(right, partition_index);
    partition_index
}

/// Returns the value that would sit at index `k` if `values[left..=right]`
/// were sorted, reordering that range in place.
///
/// # Panics
///
/// Panics unless `left <= k <= right < values.len()`.
pub fn quickselect<T, P>(values: &mut [T], left: usize, right: usize, k: usize, pivot: &P) -> T
where
    T: PartialOrd + Copy,
    P: PivotStrategy,
{
    assert!(
        left <= k && k <= right && right < values.len(),
        "quickselect out of range: left={left}, k={k}, right={right}, len={}",
        values.len()
    );
    let (mut left, mut right) = (left, right);
    loop {
        if left == right {
            return values[left];
        }
        let pivot_index = pivot.choose(values, left, right);
        let partition_index = partition(values, left, right, pivot_index);
        match k.cmp(&partition_index) {
            std::cmp::Ordering::Equal => return values[partition_index],
            std::cmp::Ordering::Less => right = partition_index - 1,
            std::cmp::Ordering::Greater => left = partition_index + 1,
        }
    }
}
