use num_traits::Float;

use crate::{
    Statistic,
    utils::{Extreme, Min},
};

/// # Running Minimum
///
/// Tracks the smallest observation seen over an unbounded stream in constant
/// time and memory.
///
/// The running value starts at the largest representable value, so the first
/// real observation always replaces it. Before any observation has been
/// consumed, [`Statistic::evaluate`] returns that sentinel.
///
/// # Examples
///
/// ```
/// # use running_statistics::{Minimum, Statistic};
/// let mut min = Minimum::new();
/// assert_eq!(min.evaluate(), f64::MAX);
///
/// min.consume_all([3.0, 1.0, 4.0, 1.0, 5.0]);
/// assert_eq!(min.evaluate(), 1.0);
/// assert_eq!(min.describe(), "min value");
/// ```
#[derive(Debug, Clone)]
pub struct Minimum<T>(Extreme<T, Min>);

impl<T: Float> Minimum<T> {
    /// Creates a new Minimum instance starting from the largest representable value
    ///
    /// # Returns
    ///
    /// A new Minimum instance
    pub fn new() -> Self {
        Self(Extreme::starting_at(T::max_value()))
    }

    /// Resets the running minimum back to its sentinel
    ///
    /// # Returns
    ///
    /// * `&mut Self` - The minimum object
    pub fn reset(&mut self) -> &mut Self {
        self.0.reset();
        self
    }
}

impl<T: Float> Default for Minimum<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> Statistic<T> for Minimum<T> {
    #[inline]
    fn consume(&mut self, value: T) {
        self.0.push(value)
    }

    #[inline]
    fn evaluate(&self) -> T {
        self.0.get()
    }

    fn describe(&self) -> &'static str {
        "min value"
    }
}
