use crate::error::FunctionError;
use crate::misc::FloatingPoint;
use crate::range::{HasDomain, Range};

use super::out_of_domain;

/// A linear function `slope * x + intercept` on a declared domain.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearFunction<T: FloatingPoint> {
    slope: T,
    intercept: T,
    domain: Range<T>,
}

impl<T: FloatingPoint> LinearFunction<T> {
    pub fn new(slope: T, intercept: T, domain: Range<T>) -> Self {
        Self {
            slope,
            intercept,
            domain,
        }
    }

    /// Linear function on the whole real line.
    pub fn unbounded(slope: T, intercept: T) -> Self {
        Self::new(slope, intercept, Range::all())
    }

    /// The function whose graph lies on the x-axis: zero everywhere.
    pub fn x_axis() -> Self {
        Self::unbounded(T::zero(), T::zero())
    }

    /// Constant function on the given domain.
    pub fn constant(value: T, domain: Range<T>) -> Self {
        Self::new(T::zero(), value, domain)
    }

    pub fn value(&self, x: T) -> Result<T, FunctionError> {
        if !self.domain.contains(x) {
            return Err(out_of_domain(x));
        }
        Ok(self.value_unchecked(x))
    }

    pub fn value_fuzzy(&self, x: T, tolerance: T) -> Result<T, FunctionError> {
        if !self.domain.fuzzy_contains(x, tolerance) {
            return Err(out_of_domain(x));
        }
        Ok(self.value_unchecked(x))
    }

    pub fn slope(&self, x: T) -> Result<T, FunctionError> {
        if !self.domain.contains(x) {
            return Err(out_of_domain(x));
        }
        Ok(self.slope)
    }

    pub(crate) fn value_unchecked(&self, x: T) -> T {
        self.slope * x + self.intercept
    }
}

impl<T: FloatingPoint> HasDomain<T> for LinearFunction<T> {
    fn domain(&self) -> Range<T> {
        self.domain
    }
}
