use alloc::{boxed::Box, vec::Vec};
use core::fmt;

use num_traits::Float;

use crate::{Maximum, Mean, Minimum, StdDev, Statistic};

/// An ordered set of accumulators fed from a single observation stream
///
/// `Report` forwards every observation to each registered [`Statistic`] and
/// collects `(name, value)` pairs on demand, in registration order. It does
/// no parsing and no formatting of its own.
///
/// # Examples
///
/// ```
/// # use running_statistics::Report;
/// let mut report = Report::<f64>::standard();
/// report.consume_all([3.0, 1.0, 4.0, 1.0, 5.0]);
///
/// let results = report.results();
/// assert_eq!(results[0], ("min value", 1.0));
/// assert_eq!(results[1], ("max value", 5.0));
/// assert_eq!(results[2], ("average value", 2.8));
/// assert_eq!(results[3].0, "standard deviation");
/// assert!((results[3].1 - 1.6).abs() < 1e-12);
/// ```
pub struct Report<T> {
    statistics: Vec<Box<dyn Statistic<T>>>,
    observations: usize,
}

impl<T: Float + 'static> Report<T> {
    /// Creates an empty report
    ///
    /// # Returns
    ///
    /// A new Report with no statistics registered
    pub fn new() -> Self {
        Self {
            statistics: Vec::new(),
            observations: 0,
        }
    }

    /// Creates a report with minimum, maximum, mean and standard deviation, in that order
    ///
    /// # Returns
    ///
    /// A new Report with the four standard statistics
    pub fn standard() -> Self {
        Self::new()
            .with(Minimum::new())
            .with(Maximum::new())
            .with(Mean::new())
            .with(StdDev::new())
    }

    /// Registers a statistic and returns the report
    ///
    /// # Arguments
    ///
    /// * `statistic` - The accumulator to register
    ///
    /// # Returns
    ///
    /// * `Self` - The report with the statistic appended
    pub fn with<S: Statistic<T> + 'static>(mut self, statistic: S) -> Self {
        self.push(statistic);
        self
    }

    /// Registers a statistic
    ///
    /// A statistic registered after observations were consumed only sees the
    /// observations that follow.
    ///
    /// # Arguments
    ///
    /// * `statistic` - The accumulator to register
    ///
    /// # Returns
    ///
    /// * `&mut Self` - The report object
    pub fn push<S: Statistic<T> + 'static>(&mut self, statistic: S) -> &mut Self {
        log::debug!(
            "registered {:?} after {} observations",
            statistic.describe(),
            self.observations
        );
        self.statistics.push(Box::new(statistic));
        self
    }

    /// Returns the number of registered statistics
    pub fn len(&self) -> usize {
        self.statistics.len()
    }

    /// Returns true if no statistic is registered
    pub fn is_empty(&self) -> bool {
        self.statistics.is_empty()
    }

    /// Returns the number of observations fed through the report
    pub const fn observations(&self) -> usize {
        self.observations
    }

    /// Forwards an observation to every registered statistic
    ///
    /// # Arguments
    ///
    /// * `value` - The new observation
    ///
    /// # Returns
    ///
    /// * `&mut Self` - The report object
    pub fn consume(&mut self, value: T) -> &mut Self {
        self.statistics.iter_mut().for_each(|s| s.consume(value));
        self.observations += 1;
        log::trace!("observation #{} consumed", self.observations);
        self
    }

    /// Forwards every value of `values` in order
    ///
    /// # Arguments
    ///
    /// * `values` - The observations to consume
    ///
    /// # Returns
    ///
    /// * `&mut Self` - The report object
    pub fn consume_all<I: IntoIterator<Item = T>>(&mut self, values: I) -> &mut Self {
        values.into_iter().for_each(|value| {
            self.consume(value);
        });
        self
    }

    /// Evaluates every registered statistic
    ///
    /// # Returns
    ///
    /// * `Vec<(&'static str, T)>` - Name and current value of each statistic, in registration order
    pub fn results(&self) -> Vec<(&'static str, T)> {
        log::debug!(
            "evaluating {} statistics over {} observations",
            self.statistics.len(),
            self.observations
        );
        self.statistics
            .iter()
            .map(|s| (s.describe(), s.evaluate()))
            .collect()
    }

    /// Iterates over the registered statistics
    pub fn iter(&self) -> impl Iterator<Item = &(dyn Statistic<T> + 'static)> {
        self.statistics.iter().map(|s| &**s)
    }
}

impl<T: Float + 'static> Default for Report<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for Report<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Report")
            .field(
                "statistics",
                &self
                    .statistics
                    .iter()
                    .map(|s| s.describe())
                    .collect::<Vec<_>>(),
            )
            .field("observations", &self.observations)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use alloc::format;
    use assert_approx_eq::assert_approx_eq;

    use super::*;
    use crate::{MaximumSentinel, OnlineStdDev};

    #[test]
    fn standard_report_works() {
        let mut report = Report::standard();
        report.consume_all([3.0, 1.0, 4.0, 1.0, 5.0]);

        let names: Vec<_> = report.iter().map(|s| s.describe()).collect();
        assert_eq!(
            names,
            ["min value", "max value", "average value", "standard deviation"]
        );

        let results = report.results();
        assert_eq!(results[0].1, 1.0);
        assert_eq!(results[1].1, 5.0);
        assert_eq!(results[2].1, 2.8);
        assert_approx_eq!(results[3].1, 1.6);
        assert_eq!(report.observations(), 5);
    }

    #[test]
    fn empty_report_has_no_results() {
        let mut report = Report::<f64>::new();
        report.consume(1.0);
        assert!(report.is_empty());
        assert!(report.results().is_empty());
        assert_eq!(report.observations(), 1);
    }

    #[test]
    fn custom_statistics() {
        let mut report = Report::new()
            .with(Maximum::with_sentinel(MaximumSentinel::SmallestPositive))
            .with(OnlineStdDev::new());
        report.consume_all([-5.0, -2.0, -9.0]);

        let results = report.results();
        assert_eq!(report.len(), 2);
        assert_eq!(results[0], ("max value", f64::MIN_POSITIVE));
        assert_eq!(results[1].0, "standard deviation (online)");
    }

    #[test]
    fn late_registration_sees_later_values_only() {
        let mut report = Report::new().with(Mean::new());
        report.consume(10.0);
        report.push(Mean::new());
        report.consume(20.0);

        let results = report.results();
        assert_eq!(results[0].1, 15.0);
        assert_eq!(results[1].1, 20.0);
    }

    #[test]
    fn debug_lists_names() {
        let report = Report::<f64>::standard();
        let dbg = format!("{report:?}");
        assert!(dbg.contains("min value"));
        assert!(dbg.contains("observations: 0"));
    }
}
