use num_traits::Float;

/// Returns the arithmetic mean of a slice
///
/// # Arguments
///
/// * `values` - The values to average
///
/// # Returns
///
/// * `T` - The mean, `NaN` if the slice is empty
#[inline]
pub fn mean_of_slice<T: Float>(values: &[T]) -> T {
    let n = T::from(values.len()).unwrap_or_else(T::nan);
    let sum = values.iter().fold(T::zero(), |acc, &x| acc + x);
    sum / n
}

/// Returns the population standard deviation of a slice
///
/// Two passes over the data: the mean first, then the squared deviations from it.
///
/// # Arguments
///
/// * `values` - The values to measure
///
/// # Returns
///
/// * `T` - The standard deviation, `NaN` if the slice is empty
#[inline]
pub fn population_std_of_slice<T: Float>(values: &[T]) -> T {
    let n = T::from(values.len()).unwrap_or_else(T::nan);
    let mean = mean_of_slice(values);
    let accum = values.iter().fold(T::zero(), |acc, &x| {
        let d = x - mean;
        acc + d * d
    });
    (accum / n).sqrt()
}

#[cfg(test)]
mod tests {
    use assert_approx_eq::assert_approx_eq;

    use super::*;

    #[test]
    fn mean_of_slice_works() {
        assert_eq!(mean_of_slice(&[3.0, 1.0, 4.0, 1.0, 5.0]), 2.8);
        assert!(mean_of_slice::<f64>(&[]).is_nan());
    }

    #[test]
    fn population_std_of_slice_works() {
        assert_approx_eq!(population_std_of_slice(&[3.0, 1.0, 4.0, 1.0, 5.0]), 1.6);
        assert_eq!(population_std_of_slice(&[7.0]), 0.0);
        assert!(population_std_of_slice::<f32>(&[]).is_nan());
    }
}
