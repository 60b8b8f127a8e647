//! Mathematical primitives for the TTC estimators.
//!
//! Functions for robust scalar statistics over measurement collections.

/// Arithmetic mean of a slice, or `None` for an empty slice.
///
/// # Example
/// ```
/// use drishti_fusion::core::math::mean;
///
/// assert_eq!(mean(&[1.0, 2.0, 3.0]), Some(2.0));
/// assert_eq!(mean(&[]), None);
/// ```
#[inline]
pub fn mean(values: &[f32]) -> Option<f32> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f32>() / values.len() as f32)
}

/// Sample median of a slice, or `None` for an empty slice.
///
/// Sorts the slice in place. An even-length slice yields the average of
/// the two central values, an odd-length slice the single central value.
///
/// # Example
/// ```
/// use drishti_fusion::core::math::median;
///
/// assert_eq!(median(&mut [3.0, 1.0, 2.0]), Some(2.0));
/// assert_eq!(median(&mut [4.0, 1.0, 3.0, 2.0]), Some(2.5));
/// assert_eq!(median(&mut []), None);
/// ```
pub fn median(values: &mut [f32]) -> Option<f32> {
    if values.is_empty() {
        return None;
    }

    values.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let mid = values.len() / 2;
    if values.len() % 2 == 0 {
        Some((values[mid - 1] + values[mid]) / 2.0)
    } else {
        Some(values[mid])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_mean_single_value() {
        assert_eq!(mean(&[5.0]), Some(5.0));
    }

    #[test]
    fn test_mean_empty() {
        assert_eq!(mean(&[]), None);
    }

    #[test]
    fn test_mean_mixed_signs() {
        assert_relative_eq!(mean(&[-2.0, 2.0, 6.0]).unwrap(), 2.0);
    }

    #[test]
    fn test_median_odd_count() {
        assert_eq!(median(&mut [9.0, 1.0, 5.0]), Some(5.0));
    }

    #[test]
    fn test_median_even_count_averages_central_pair() {
        assert_relative_eq!(median(&mut [1.0, 2.0, 3.0, 100.0]).unwrap(), 2.5);
    }

    #[test]
    fn test_median_single_value() {
        assert_eq!(median(&mut [7.0]), Some(7.0));
    }

    #[test]
    fn test_median_two_values() {
        assert_relative_eq!(median(&mut [1.0, 2.0]).unwrap(), 1.5);
    }

    #[test]
    fn test_median_robust_to_outlier() {
        // The outlier shifts the mean but not the median
        let mut values = [1.0, 1.1, 0.9, 1.0, 50.0];
        assert_relative_eq!(median(&mut values).unwrap(), 1.0);
    }

    #[test]
    fn test_median_unsorted_input() {
        assert_eq!(median(&mut [2.0, 1.0, 4.0, 3.0, 5.0]), Some(3.0));
    }
}
