use num_traits::Float;

use crate::Statistic;

/// # Online Population Standard Deviation
///
/// Welford's single-pass algorithm: keeps the observation count, the running
/// mean and the sum of squared differences from it (`m2`), so memory stays
/// constant however long the stream is.
///
/// ```text
/// For each new value x:
///   count += 1
///   delta = x - mean
///   mean += delta / count
///   m2 += delta * (x - mean)
///
/// StdDev = sqrt(m2 / count)
/// ```
///
/// Results agree with [`StdDev`](crate::StdDev) up to floating point rounding;
/// they are not guaranteed to be bit-identical.
///
/// # Examples
///
/// ```
/// # use running_statistics::{OnlineStdDev, Statistic};
/// let mut std = OnlineStdDev::<f64>::new();
/// std.consume_all([2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]);
/// assert!((std.evaluate() - 2.0).abs() < 1e-12);
/// assert!((std.mean() - 5.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct OnlineStdDev<T> {
    count: usize,
    mean: T,
    m2: T, // sum of squared differences from the mean
}

impl<T: Float> OnlineStdDev<T> {
    /// Creates a new empty OnlineStdDev instance
    ///
    /// # Returns
    ///
    /// A new OnlineStdDev instance
    pub fn new() -> Self {
        Self {
            count: 0,
            mean: T::zero(),
            m2: T::zero(),
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

    /// Returns the running mean
    ///
    /// # Returns
    ///
    /// * `T` - The mean, `NaN` with no observations
    pub fn mean(&self) -> T {
        if self.count == 0 {
            T::nan()
        } else {
            self.mean
        }
    }

    /// Returns the population variance
    ///
    /// # Returns
    ///
    /// * `T` - The variance, `NaN` with no observations
    pub fn variance(&self) -> T {
        let n = T::from(self.count).unwrap_or_else(T::nan);
        self.m2 / n
    }

    /// Resets the accumulator
    ///
    /// # Returns
    ///
    /// * `&mut Self` - The online standard deviation object
    pub fn reset(&mut self) -> &mut Self {
        *self = Self::new();
        self
    }
}

impl<T: Float> Default for OnlineStdDev<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> Statistic<T> for OnlineStdDev<T> {
    fn consume(&mut self, value: T) {
        self.count += 1;
        let n = T::from(self.count).unwrap_or_else(T::nan);
        let delta = value - self.mean;
        self.mean = self.mean + delta / n;
        self.m2 = self.m2 + delta * (value - self.mean);
    }

    #[inline]
    fn evaluate(&self) -> T {
        self.variance().sqrt()
    }

    fn describe(&self) -> &'static str {
        "standard deviation (online)"
    }
}

#[cfg(test)]
mod tests {
    use assert_approx_eq::assert_approx_eq;

    use super::*;
    use crate::StdDev;

    #[test]
    fn online_std_works() {
        let mut std = OnlineStdDev::new();
        std.consume_all([3.0, 1.0, 4.0, 1.0, 5.0]);
        assert_approx_eq!(std.evaluate(), 1.6);
        assert_approx_eq!(std.variance(), 2.56);
        assert_eq!(std.count(), 5);
    }

    #[test]
    fn agrees_with_two_pass() {
        let inputs = [
            100_000.1, 100_000.2, 100_000.3, 100_000.4, 100_000.5, 100_000.6, 100_000.7,
        ];
        let mut online = OnlineStdDev::new();
        let mut two_pass = StdDev::new();
        for x in inputs {
            online.consume(x);
            two_pass.consume(x);
            assert_approx_eq!(online.evaluate(), two_pass.evaluate(), 1e-6);
        }
    }

    #[test]
    fn single_observation_is_zero() {
        let mut std = OnlineStdDev::new();
        std.consume(7.0);
        assert_eq!(std.evaluate(), 0.0);
        assert_eq!(std.mean(), 7.0);
    }

    #[test]
    fn empty_is_nan() {
        let std = OnlineStdDev::<f64>::new();
        assert!(std.evaluate().is_nan());
        assert!(std.mean().is_nan());
    }

    #[test]
    fn nan_poisons_std() {
        let mut std = OnlineStdDev::new();
        std.consume_all([1.0, f64::NAN, 2.0]);
        assert!(std.evaluate().is_nan());
    }

    #[test]
    fn reset_works() {
        let mut std = OnlineStdDev::new();
        std.consume_all([1.0, 5.0]);
        std.reset();
        assert_eq!(std.count(), 0);
        assert!(std.evaluate().is_nan());
    }
}
