//! Searches over monotone arrays.
//!
//! Arrays may be increasing or decreasing; the direction is taken from the
//! first and last elements.

/// Linear searches which would need to move further than this fraction of
/// the array's span fall back to a binary search.
pub const LINEAR_SEARCH_LIMIT: f64 = 0.05;

/// The position of a value within a monotone array.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Bracket {
    /// The value lies before the first element.
    Before,
    /// The value lies between element `i` (inclusive) and element `i + 1`.
    /// The final element brackets only a value equal to itself.
    At(usize),
    /// The value lies beyond the last element.
    After,
}

impl Bracket {
    /// Clamps the bracket to the start of a segment of an array of `len` elements,
    /// i.e. an index in `0..=len - 2`.
    pub fn segment(self, len: usize) -> usize {
        let last = len.saturating_sub(2);
        match self {
            Bracket::Before => 0,
            Bracket::At(i) => usize::min(i, last),
            Bracket::After => last,
        }
    }
}

/// Returns a predicate which is true for elements at or before `x` in array order.
fn at_or_before(arr: &[f64], x: f64) -> impl Fn(f64) -> bool {
    let increasing = arr[0] <= arr[arr.len() - 1];
    move |a| if increasing { a <= x } else { a >= x }
}

/// Checks whether `x` lies outside the range of the array.
fn out_of_range(arr: &[f64], x: f64) -> Option<Bracket> {
    let before = at_or_before(arr, x);
    if !before(arr[0]) {
        Some(Bracket::Before)
    } else if arr[arr.len() - 1] != x && before(arr[arr.len() - 1]) {
        Some(Bracket::After)
    } else {
        None
    }
}

/// Finds the element of a monotone array which brackets `x`.
///
/// # Panics
/// If the array is empty.
pub fn binary_search(arr: &[f64], x: f64) -> Bracket {
    if let Some(bracket) = out_of_range(arr, x) {
        return bracket;
    }
    let before = at_or_before(arr, x);
    match arr.partition_point(|&a| before(a)).checked_sub(1) {
        Some(i) => Bracket::At(i),
        None => Bracket::Before,
    }
}

/// Finds the element of a monotone array which brackets `x`, by walking
/// one element at a time from the index `start`.
///
/// This is cheaper than [binary_search] when `start` is known to be close,
/// such as when tracking a point that moves a little each frame. When `x` is
/// far from `arr[start]`, or `start` is not a valid index, this falls back to
/// a binary search.
pub fn linear_search(arr: &[f64], x: f64, start: usize) -> Bracket {
    let n = arr.len();
    let span = (arr[n - 1] - arr[0]).abs();
    if start >= n || !((x - arr[start]).abs() <= LINEAR_SEARCH_LIMIT * span) {
        return binary_search(arr, x);
    }
    if let Some(bracket) = out_of_range(arr, x) {
        return bracket;
    }
    let before = at_or_before(arr, x);
    let mut i = start;
    if before(arr[i]) {
        while i + 1 < n && before(arr[i + 1]) {
            i += 1;
        }
    } else {
        while i > 0 && !before(arr[i]) {
            i -= 1;
        }
    }
    Bracket::At(i)
}

#[cfg(test)]
mod test {
    use super::*;
    use rand::{Rng, SeedableRng};

    #[test]
    fn binary_search_increasing() {
        let arr = [0.0, 1.0, 2.5, 4.0, 10.0];
        assert_eq!(binary_search(&arr, -0.1), Bracket::Before);
        assert_eq!(binary_search(&arr, 0.0), Bracket::At(0));
        assert_eq!(binary_search(&arr, 0.5), Bracket::At(0));
        assert_eq!(binary_search(&arr, 2.5), Bracket::At(2));
        assert_eq!(binary_search(&arr, 9.9), Bracket::At(3));
        assert_eq!(binary_search(&arr, 10.0), Bracket::At(4));
        assert_eq!(binary_search(&arr, 10.1), Bracket::After);
    }

    #[test]
    fn binary_search_decreasing() {
        let arr = [5.0, 3.0, 1.0, -2.0];
        assert_eq!(binary_search(&arr, 6.0), Bracket::Before);
        assert_eq!(binary_search(&arr, 5.0), Bracket::At(0));
        assert_eq!(binary_search(&arr, 2.0), Bracket::At(1));
        assert_eq!(binary_search(&arr, -2.0), Bracket::At(3));
        assert_eq!(binary_search(&arr, -3.0), Bracket::After);
    }

    #[test]
    fn nan_is_never_bracketed() {
        let arr = [0.0, 1.0, 2.0];
        assert_eq!(binary_search(&arr, f64::NAN), Bracket::Before);
        assert_eq!(linear_search(&arr, f64::NAN, 1), Bracket::Before);
    }

    #[test]
    fn segment_clamps_to_valid_range() {
        assert_eq!(Bracket::Before.segment(10), 0);
        assert_eq!(Bracket::At(3).segment(10), 3);
        assert_eq!(Bracket::At(9).segment(10), 8);
        assert_eq!(Bracket::After.segment(10), 8);
    }

    #[test]
    fn linear_search_agrees_with_binary_search() {
        let mut rng = rand::rngs::StdRng::from_seed(*b"Vegemite sandwhich is not fun...");
        let mut arr = vec![0.0];
        for _ in 1..1000 {
            let last = *arr.last().unwrap();
            arr.push(last + rng.gen_range(0.01..1.0));
        }
        let span = arr[999] - arr[0];
        for _ in 0..1000 {
            let x = rng.gen_range(-1.0..span + 1.0);
            let start = rng.gen_range(0..1000);
            assert_eq!(linear_search(&arr, x, start), binary_search(&arr, x));
        }
        // Exact sample values, starting from both sides
        for i in [0usize, 1, 500, 998, 999] {
            for start in [i.saturating_sub(3), usize::min(i + 3, 999)] {
                assert_eq!(linear_search(&arr, arr[i], start), Bracket::At(i));
            }
        }
    }

    #[test]
    fn linear_search_with_invalid_start() {
        let arr = [0.0, 1.0, 2.0, 3.0];
        assert_eq!(linear_search(&arr, 2.5, 17), Bracket::At(2));
    }
}
