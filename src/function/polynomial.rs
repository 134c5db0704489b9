use crate::error::FunctionError;
use crate::misc::FloatingPoint;
use crate::range::{HasDomain, Range};

use super::out_of_domain;

/// A polynomial `sum(coefficients[i] * x^i)` on a declared domain.
///
/// Piecewise records evaluate their polynomials in the local coordinate of the
/// piece, so the default domain starts at zero.
#[derive(Debug, Clone, PartialEq)]
pub struct PolynomialFunction<T: FloatingPoint> {
    coefficients: Vec<T>,
    domain: Range<T>,
}

impl<T: FloatingPoint> PolynomialFunction<T> {
    /// Polynomial on `[0, length)`.
    pub fn new(coefficients: Vec<T>, length: T) -> Self {
        Self::with_domain(coefficients, Range::closed_open(T::zero(), length))
    }

    pub fn with_domain(coefficients: Vec<T>, domain: Range<T>) -> Self {
        Self {
            coefficients,
            domain,
        }
    }

    pub fn coefficients(&self) -> &[T] {
        &self.coefficients
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
        Ok(self.slope_unchecked(x))
    }

    pub(crate) fn value_unchecked(&self, x: T) -> T {
        self.coefficients
            .iter()
            .rev()
            .fold(T::zero(), |acc, c| acc * x + *c)
    }

    pub(crate) fn slope_unchecked(&self, x: T) -> T {
        self.coefficients
            .iter()
            .enumerate()
            .skip(1)
            .rev()
            .fold(T::zero(), |acc, (i, c)| {
                acc * x + *c * T::from_usize(i).unwrap()
            })
    }
}

impl<T: FloatingPoint> HasDomain<T> for PolynomialFunction<T> {
    fn domain(&self) -> Range<T> {
        self.domain
    }
}
