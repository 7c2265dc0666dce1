use alloc::vec::Vec;

use num_traits::Float;

use crate::{
    Statistic,
    helper::{mean_of_slice, population_std_of_slice},
};

/// # Population Standard Deviation
///
/// Retains every observation and recomputes the deviation from scratch on each
/// [`Statistic::evaluate`]: a first pass for the mean, a second pass for the
/// squared deviations from it, divided by the full count `N`.
///
/// Memory grows linearly with the number of observations. For constant memory
/// use [`OnlineStdDev`](crate::OnlineStdDev), which may differ in the last bits.
///
/// # Examples
///
/// ```
/// # use running_statistics::{StdDev, Statistic};
/// let mut std = StdDev::new();
/// std.consume_all([2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]);
/// assert_eq!(std.evaluate(), 2.0);
/// assert_eq!(std.count(), 8);
/// ```
#[derive(Debug, Clone)]
pub struct StdDev<T> {
    /// Every observation consumed so far
    values: Vec<T>,
}

impl<T: Float> StdDev<T> {
    /// Creates a new StdDev instance with no retained observations
    ///
    /// # Returns
    ///
    /// A new StdDev instance
    pub fn new() -> Self {
        Self { values: Vec::new() }
    }

    /// Creates a new StdDev instance with room for `capacity` observations
    ///
    /// # Arguments
    ///
    /// * `capacity` - Number of observations to reserve space for
    ///
    /// # Returns
    ///
    /// A new StdDev instance
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            values: Vec::with_capacity(capacity),
        }
    }

    /// Returns the number of observations consumed
    ///
    /// # Returns
    ///
    /// * `usize` - The observation count
    #[inline]
    pub fn count(&self) -> usize {
        self.values.len()
    }

    /// Returns the retained observations in arrival order
    ///
    /// # Returns
    ///
    /// * `&[T]` - The observations
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.values
    }

    /// Returns the mean of the retained observations
    ///
    /// # Returns
    ///
    /// * `T` - The mean, `NaN` with no observations
    pub fn mean(&self) -> T {
        mean_of_slice(&self.values)
    }

    /// Drops the retained observations
    ///
    /// # Returns
    ///
    /// * `&mut Self` - The standard deviation object
    pub fn reset(&mut self) -> &mut Self {
        self.values.clear();
        self
    }
}

impl<T: Float> Default for StdDev<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> Statistic<T> for StdDev<T> {
    #[inline]
    fn consume(&mut self, value: T) {
        self.values.push(value);
    }

    fn evaluate(&self) -> T {
        population_std_of_slice(&self.values)
    }

    fn describe(&self) -> &'static str {
        "standard deviation"
    }
}
