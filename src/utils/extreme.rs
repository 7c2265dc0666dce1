use core::marker::PhantomData;

/// Trait for defining order policies for a running extreme
///
/// # Type Parameters
///
/// * `T` - The type of the tracked values
///
/// # Methods
///
/// * `replaces(current: &T, new: &T) -> bool` - Returns true if the new value should replace the current extreme
///
pub trait OrderPolicy<T> {
    fn replaces(current: &T, new: &T) -> bool;
}

/// Order policy for minimum
#[derive(Debug, Clone)]
pub struct Min;

/// Order policy for maximum
#[derive(Debug, Clone)]
pub struct Max;

impl<T: PartialOrd> OrderPolicy<T> for Min {
    #[inline]
    fn replaces(current: &T, new: &T) -> bool {
        new < current
    }
}

impl<T: PartialOrd> OrderPolicy<T> for Max {
    #[inline]
    fn replaces(current: &T, new: &T) -> bool {
        new > current
    }
}

/// Running extreme over an unbounded stream
///
/// Starts from a sentinel and only moves when a strictly better value arrives,
/// so incomparable values (`NaN`) leave it untouched.
///
/// # Type Parameters
///
/// * `T` - The type of the tracked values
/// * `O` - The order policy
#[derive(Debug, Clone)]
pub struct Extreme<T, O> {
    sentinel: T,
    value: T,
    _order: PhantomData<O>,
}

impl<T, O> Extreme<T, O>
where
    T: PartialOrd + Copy,
    O: OrderPolicy<T>,
{
    pub fn starting_at(sentinel: T) -> Self {
        Self {
            sentinel,
            value: sentinel,
            _order: PhantomData,
        }
    }

    #[inline]
    pub fn push(&mut self, value: T) {
        if O::replaces(&self.value, &value) {
            self.value = value;
        }
    }

    #[inline]
    pub fn get(&self) -> T {
        self.value
    }

    #[inline]
    pub fn sentinel(&self) -> T {
        self.sentinel
    }

    pub fn reset(&mut self) {
        self.value = self.sentinel;
    }
}
