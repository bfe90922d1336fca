//! Top-down merge sort.

/// Sort a slice into a new vector by recursive halving and two-way merge.
///
/// Stable: equal elements keep their input order. The input is untouched.
pub fn merge_sort<T: Ord + Clone>(items: &[T]) -> Vec<T> {
    if items.len() <= 1 {
        return items.to_vec();
    }
    let mid = items.len() / 2;
    let left = merge_sort(&items[..mid]);
    let right = merge_sort(&items[mid..]);
    merge(left, right)
}

fn merge<T: Ord>(left: Vec<T>, right: Vec<T>) -> Vec<T> {
    let mut merged = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();
    while let (Some(l), Some(r)) = (left.peek(), right.peek()) {
        // `<=` keeps the left run's element first on ties (stability).
        if l <= r {
            merged.extend(left.next());
        } else {
            merged.extend(right.next());
        }
    }
    merged.extend(left);
    merged.extend(right);
    merged
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sorts_unordered_input() {
        assert_eq!(
            merge_sort(&[105, 79, 100, 110]),
            vec![79, 100, 105, 110]
        );
    }

    #[test]
    fn test_empty_and_single_roundtrip() {
        assert_eq!(merge_sort(&Vec::<i32>::new()), Vec::<i32>::new());
        assert_eq!(merge_sort(&[42]), vec![42]);
    }

    #[test]
    fn test_keeps_duplicates() {
        assert_eq!(merge_sort(&[3, 1, 3, 2, 1]), vec![1, 1, 2, 3, 3]);
    }

    #[test]
    fn test_input_untouched() {
        let input = [2, 1];
        let _ = merge_sort(&input);
        assert_eq!(input, [2, 1]);
    }
}
