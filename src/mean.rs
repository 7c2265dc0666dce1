use num_traits::Float;

use crate::Statistic;

/// # Running Arithmetic Mean
///
/// Keeps a plain running sum and an observation count; the mean is computed on
/// demand as `sum / count`. With no observations this is `0 / 0`, so
/// [`Statistic::evaluate`] returns `NaN`.
///
/// # Examples
///
/// ```
/// # use running_statistics::{Mean, Statistic};
/// let mut mean = Mean::new();
/// mean.consume_all([1.0, 2.0, 3.0, 4.0]);
/// assert_eq!(mean.evaluate(), 2.5);
/// assert_eq!(mean.count(), 4);
/// ```
#[derive(Debug, Clone)]
pub struct Mean<T> {
    /// Sum of inputs
    sum: T,
    /// Number of inputs
    count: usize,
}

impl<T: Float> Mean<T> {
    /// Creates a new Mean instance with a zero sum and count
    ///
    /// # Returns
    ///
    /// A new Mean instance
    pub fn new() -> Self {
        Self {
            sum: T::zero(),
            count: 0,
        }
    }

    /// Returns the number of observations consumed
    ///
    /// # Returns
    ///
    /// * `usize` - The observation count
    #[inline]
    pub const fn count(&self) -> usize {
        self.count
    }

    /// Returns the running sum of all observations
    ///
    /// # Returns
    ///
    /// * `T` - The running sum
    #[inline]
    pub fn sum(&self) -> T {
        self.sum
    }

    /// Resets the sum and the count
    ///
    /// # Returns
    ///
    /// * `&mut Self` - The mean object
    pub fn reset(&mut self) -> &mut Self {
        self.sum = T::zero();
        self.count = 0;
        self
    }
}

impl<T: Float> Default for Mean<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> Statistic<T> for Mean<T> {
    #[inline]
    fn consume(&mut self, value: T) {
        self.sum = self.sum + value;
        self.count += 1;
    }

    #[inline]
    fn evaluate(&self) -> T {
        let n = T::from(self.count).unwrap_or_else(T::nan);
        self.sum / n
    }

    fn describe(&self) -> &'static str {
        "average value"
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;
    use assert_approx_eq::assert_approx_eq;

    use super::*;

    #[test]
    fn mean_works() {
        let mut mean = Mean::new();
        let inputs = [3.0, 1.0, 4.0, 1.0, 5.0];
        let mut results = vec![];

        inputs.iter().for_each(|i| {
            mean.consume(*i);
            results.push(mean.evaluate());
        });

        let expected = [3.0, 2.0, 8.0 / 3.0, 2.25, 2.8];
        assert_eq!(&results, &expected);
    }

    #[test]
    fn large_values_work() {
        let mut mean = Mean::new();
        mean.consume_all([1_000_000.1, 1_000_000.2, 1_000_000.3]);
        assert_approx_eq!(mean.evaluate(), 1_000_000.2, 1e-6);
    }

    #[test]
    fn empty_mean_is_nan() {
        let mean = Mean::<f64>::new();
        assert!(mean.evaluate().is_nan());
        assert_eq!(mean.count(), 0);
    }

    #[test]
    fn nan_poisons_mean() {
        let mut mean = Mean::new();
        mean.consume_all([1.0, f64::NAN, 3.0]);
        assert!(mean.evaluate().is_nan());
    }

    #[test]
    fn evaluate_is_idempotent() {
        let mut mean = Mean::new();
        mean.consume_all([0.1, 0.2, 0.3]);
        let first = mean.evaluate();
        assert_eq!(first, mean.evaluate());
        assert_eq!(mean.sum(), 0.1 + 0.2 + 0.3);
    }

    #[test]
    fn reset_works() {
        let mut mean = Mean::new();
        mean.consume_all([1.0, 2.0]);
        assert!(mean.reset().evaluate().is_nan());
        mean.consume(7.0);
        assert_eq!(mean.evaluate(), 7.0);
    }
}
