//! Generic reducers over ordered sequences
//!
//! Standalone helpers with no dependency on the store: extremum and median
//! lookup under a caller-supplied three-way comparator, and the arithmetic
//! mean of a projected numeric field.
//!
//! Ties on extrema break toward the first occurrence. For even-length
//! input the median is the LOWER median, the element at position
//! `(len - 1) / 2` of the comparator's ordering.

use std::cmp::Ordering;

/// Index of the maximum element; `None` on empty input.
pub fn max_index<T>(input: &[T], mut compare: impl FnMut(&T, &T) -> Ordering) -> Option<usize> {
    let mut best = 0usize;
    if input.is_empty() {
        return None;
    }
    for idx in 1..input.len() {
        // Strictly greater, so the first occurrence wins ties
        if compare(&input[idx], &input[best]) == Ordering::Greater {
            best = idx;
        }
    }
    Some(best)
}

/// The maximum element itself; `None` on empty input.
pub fn max_element<T>(input: &[T], compare: impl FnMut(&T, &T) -> Ordering) -> Option<&T> {
    max_index(input, compare).map(|idx| &input[idx])
}

/// Index of the minimum element; `None` on empty input.
pub fn min_index<T>(input: &[T], mut compare: impl FnMut(&T, &T) -> Ordering) -> Option<usize> {
    let mut best = 0usize;
    if input.is_empty() {
        return None;
    }
    for idx in 1..input.len() {
        if compare(&input[idx], &input[best]) == Ordering::Less {
            best = idx;
        }
    }
    Some(best)
}

/// The minimum element itself; `None` on empty input.
pub fn min_element<T>(input: &[T], compare: impl FnMut(&T, &T) -> Ordering) -> Option<&T> {
    min_index(input, compare).map(|idx| &input[idx])
}

/// Index (into the original sequence) of the median element under the
/// comparator's ordering; lower median for even-length input.
pub fn median_index<T>(input: &[T], mut compare: impl FnMut(&T, &T) -> Ordering) -> Option<usize> {
    if input.is_empty() {
        return None;
    }
    let mut order: Vec<usize> = (0..input.len()).collect();
    // Stable sort keeps equal elements in original order
    order.sort_by(|&a, &b| compare(&input[a], &input[b]));
    Some(order[(input.len() - 1) / 2])
}

/// The median element itself; `None` on empty input.
pub fn median_element<T>(input: &[T], compare: impl FnMut(&T, &T) -> Ordering) -> Option<&T> {
    median_index(input, compare).map(|idx| &input[idx])
}

/// Arithmetic mean of a projected numeric field; `None` on empty input.
pub fn average_value<T>(input: &[T], mut get_value: impl FnMut(&T) -> f64) -> Option<f64> {
    if input.is_empty() {
        return None;
    }
    let sum: f64 = input.iter().map(&mut get_value).sum();
    Some(sum / input.len() as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn by_value(a: &i32, b: &i32) -> Ordering {
        a.cmp(b)
    }

    #[test]
    fn test_max_and_min() {
        let input = [3, 9, 1, 9, 2];
        assert_eq!(max_index(&input, by_value), Some(1)); // first 9 wins the tie
        assert_eq!(max_element(&input, by_value), Some(&9));
        assert_eq!(min_index(&input, by_value), Some(2));
        assert_eq!(min_element(&input, by_value), Some(&1));
    }

    #[test]
    fn test_empty_input() {
        let input: [i32; 0] = [];
        assert_eq!(max_index(&input, by_value), None);
        assert_eq!(min_element(&input, by_value), None);
        assert_eq!(median_index(&input, by_value), None);
        assert_eq!(average_value(&input, |&v| v as f64), None);
    }

    #[test]
    fn test_median_odd_length() {
        let input = [5, 1, 3];
        assert_eq!(median_element(&input, by_value), Some(&3));
        assert_eq!(median_index(&input, by_value), Some(2));
    }

    #[test]
    fn test_median_even_length_is_lower() {
        let input = [4, 1, 3, 2];
        // Sorted order 1,2,3,4; lower median is 2
        assert_eq!(median_element(&input, by_value), Some(&2));
        assert_eq!(median_index(&input, by_value), Some(3));
    }

    #[test]
    fn test_median_single_element() {
        let input = [42];
        assert_eq!(median_element(&input, by_value), Some(&42));
    }

    #[test]
    fn test_average_value() {
        struct Person {
            age: f64,
        }
        let people = [Person { age: 10.0 }, Person { age: 20.0 }, Person { age: 33.0 }];
        assert_eq!(average_value(&people, |p| p.age), Some(21.0));
    }

    #[test]
    fn test_reverse_comparator() {
        let input = [3, 9, 1];
        assert_eq!(max_element(&input, |a, b| b.cmp(a)), Some(&1));
        assert_eq!(min_element(&input, |a, b| b.cmp(a)), Some(&9));
    }
}
