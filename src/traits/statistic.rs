/// Common contract shared by every streaming accumulator
///
/// An accumulator consumes observations one at a time and can be queried for its
/// running result at any point. The trait is object safe, so heterogeneous
/// accumulators can be driven together through `Box<dyn Statistic<T>>`.
///
/// Every operation is total. Querying an accumulator before it has seen any data
/// is allowed and yields a degenerate value instead of an error: the sentinel
/// extreme for [`Minimum`](crate::Minimum) and [`Maximum`](crate::Maximum),
/// `NaN` for [`Mean`](crate::Mean) and [`StdDev`](crate::StdDev).
pub trait Statistic<T> {
    /// Incorporates a new observation into the running state
    ///
    /// Non-finite values are accepted and follow ordinary floating point rules:
    /// a `NaN` never wins a comparison and poisons any running sum.
    ///
    /// # Arguments
    ///
    /// * `value` - The new observation
    fn consume(&mut self, value: T);

    /// Returns the statistic over all observations consumed so far
    ///
    /// Calling it repeatedly without an intervening [`Statistic::consume`]
    /// returns the same value every time.
    ///
    /// # Returns
    ///
    /// * `T` - The current value of the statistic
    ///
    /// # Examples
    ///
    /// ```
    /// # use running_statistics::{Mean, Statistic};
    /// let mut mean = Mean::new();
    /// mean.consume_all([3.0, 1.0, 4.0, 1.0, 5.0]);
    /// assert_eq!(mean.evaluate(), 2.8);
    /// assert!(Mean::<f64>::new().evaluate().is_nan());
    /// ```
    fn evaluate(&self) -> T;

    /// Returns the display name of the statistic
    ///
    /// # Returns
    ///
    /// * `&'static str` - A fixed, non-empty name
    fn describe(&self) -> &'static str;

    /// Feeds every value of `values` in order
    ///
    /// # Arguments
    ///
    /// * `values` - The observations to consume
    fn consume_all<I>(&mut self, values: I)
    where
        I: IntoIterator<Item = T>,
        Self: Sized,
    {
        values.into_iter().for_each(|value| self.consume(value));
    }
}

impl<T, S> Statistic<T> for &mut S
where
    S: Statistic<T> + ?Sized,
{
    #[inline]
    fn consume(&mut self, value: T) {
        (**self).consume(value)
    }

    #[inline]
    fn evaluate(&self) -> T {
        (**self).evaluate()
    }

    #[inline]
    fn describe(&self) -> &'static str {
        (**self).describe()
    }
}

impl<T, S> Statistic<T> for alloc::boxed::Box<S>
where
    S: Statistic<T> + ?Sized,
{
    #[inline]
    fn consume(&mut self, value: T) {
        (**self).consume(value)
    }

    #[inline]
    fn evaluate(&self) -> T {
        (**self).evaluate()
    }

    #[inline]
    fn describe(&self) -> &'static str {
        (**self).describe()
    }
}
