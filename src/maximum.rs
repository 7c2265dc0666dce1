use num_traits::Float;

use crate::{
    Statistic,
    utils::{Extreme, Max},
};

/// Starting value of a [`Maximum`] before any observation arrives
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MaximumSentinel {
    /// The most negative representable value, so any observation replaces it
    #[default]
    Lowest,
    /// The smallest positive representable value
    ///
    /// Reproduces the legacy behaviour: a stream made only of negative values
    /// (or zeros) never moves the maximum away from this sentinel.
    SmallestPositive,
}

impl MaximumSentinel {
    /// Returns the sentinel as a concrete value
    ///
    /// # Returns
    ///
    /// * `T` - The starting value of the running maximum
    pub fn value<T: Float>(self) -> T {
        match self {
            Self::Lowest => T::min_value(),
            Self::SmallestPositive => T::min_positive_value(),
        }
    }
}

/// # Running Maximum
///
/// Tracks the largest observation seen over an unbounded stream in constant
/// time and memory.
///
/// By default the running value starts at the most negative representable
/// value, which makes the result correct for streams of negative numbers.
/// The legacy sentinel, the smallest positive value, is still available
/// through [`MaximumSentinel::SmallestPositive`] for callers that need to
/// reproduce older results.
///
/// # Examples
///
/// ```
/// # use running_statistics::{Maximum, MaximumSentinel, Statistic};
/// let mut max = Maximum::new();
/// max.consume_all([-5.0, -2.0, -9.0]);
/// assert_eq!(max.evaluate(), -2.0);
///
/// let mut legacy = Maximum::with_sentinel(MaximumSentinel::SmallestPositive);
/// legacy.consume_all([-5.0, -2.0, -9.0]);
/// assert_eq!(legacy.evaluate(), f64::MIN_POSITIVE);
/// ```
#[derive(Debug, Clone)]
pub struct Maximum<T>(Extreme<T, Max>);

impl<T: Float> Maximum<T> {
    /// Creates a new Maximum instance starting from the most negative representable value
    ///
    /// # Returns
    ///
    /// A new Maximum instance
    pub fn new() -> Self {
        Self::with_sentinel(MaximumSentinel::default())
    }

    /// Creates a new Maximum instance with the specified starting value
    ///
    /// # Arguments
    ///
    /// * `sentinel` - The value reported before any observation
    ///
    /// # Returns
    ///
    /// A new Maximum instance
    pub fn with_sentinel(sentinel: MaximumSentinel) -> Self {
        Self(Extreme::starting_at(sentinel.value()))
    }

    /// Returns the value reported before any observation
    ///
    /// # Returns
    ///
    /// * `T` - The starting value of the running maximum
    pub fn sentinel(&self) -> T {
        self.0.sentinel()
    }

    /// Resets the running maximum back to its sentinel
    ///
    /// # Returns
    ///
    /// * `&mut Self` - The maximum object
    pub fn reset(&mut self) -> &mut Self {
        self.0.reset();
        self
    }
}

impl<T: Float> Default for Maximum<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> Statistic<T> for Maximum<T> {
    #[inline]
    fn consume(&mut self, value: T) {
        self.0.push(value)
    }

    #[inline]
    fn evaluate(&self) -> T {
        self.0.get()
    }

    fn describe(&self) -> &'static str {
        "max value"
    }
}
