pub mod concatenated;
pub mod concatenation;
pub mod linear;
pub mod polynomial;
pub mod sectioned;
pub mod shape;
pub mod stacked;

pub use concatenated::*;
pub use concatenation::*;
pub use linear::*;
pub use polynomial::*;
pub use sectioned::*;
pub use shape::*;
pub use stacked::*;

#[cfg(test)]
mod tests;

use crate::error::FunctionError;
use crate::misc::FloatingPoint;
use crate::range::{HasDomain, Range};

/// A partial function from real to real with a declared domain.
///
/// Concrete shapes are a small set of tagged variants composed via combinator
/// structs rather than a class hierarchy: piecewise descriptions concatenate,
/// restrict and stack the two pure shapes.
#[derive(Debug, Clone, PartialEq)]
pub enum UnivariateFunction<T: FloatingPoint> {
    Linear(LinearFunction<T>),
    Polynomial(PolynomialFunction<T>),
    Concatenated(ConcatenatedFunction<T>),
    Sectioned(SectionedUnivariateFunction<T>),
    Stacked(StackedFunction<T>),
}

impl<T: FloatingPoint> UnivariateFunction<T> {
    /// Evaluates the function at `x`; fails with `OutOfDomain` outside the domain.
    pub fn value(&self, x: T) -> Result<T, FunctionError> {
        match self {
            Self::Linear(f) => f.value(x),
            Self::Polynomial(f) => f.value(x),
            Self::Concatenated(f) => f.value(x),
            Self::Sectioned(f) => f.value(x),
            Self::Stacked(f) => f.value(x),
        }
    }

    /// Evaluates the function at `x`, additionally accepting values within
    /// `tolerance` of the domain endpoints.
    pub fn value_fuzzy(&self, x: T, tolerance: T) -> Result<T, FunctionError> {
        match self {
            Self::Linear(f) => f.value_fuzzy(x, tolerance),
            Self::Polynomial(f) => f.value_fuzzy(x, tolerance),
            Self::Concatenated(f) => f.value_fuzzy(x, tolerance),
            Self::Sectioned(f) => f.value_fuzzy(x, tolerance),
            Self::Stacked(f) => f.value_fuzzy(x, tolerance),
        }
    }

    /// Evaluates the derivative at `x`.
    pub fn slope(&self, x: T) -> Result<T, FunctionError> {
        match self {
            Self::Linear(f) => f.slope(x),
            Self::Polynomial(f) => f.slope(x),
            Self::Concatenated(f) => f.slope(x),
            Self::Sectioned(f) => f.slope(x),
            Self::Stacked(f) => f.slope(x),
        }
    }
}

impl<T: FloatingPoint> HasDomain<T> for UnivariateFunction<T> {
    fn domain(&self) -> Range<T> {
        match self {
            Self::Linear(f) => f.domain(),
            Self::Polynomial(f) => f.domain(),
            Self::Concatenated(f) => f.domain(),
            Self::Sectioned(f) => f.domain(),
            Self::Stacked(f) => f.domain(),
        }
    }
}

impl<T: FloatingPoint> From<LinearFunction<T>> for UnivariateFunction<T> {
    fn from(f: LinearFunction<T>) -> Self {
        Self::Linear(f)
    }
}

impl<T: FloatingPoint> From<PolynomialFunction<T>> for UnivariateFunction<T> {
    fn from(f: PolynomialFunction<T>) -> Self {
        Self::Polynomial(f)
    }
}

impl<T: FloatingPoint> From<ConcatenatedFunction<T>> for UnivariateFunction<T> {
    fn from(f: ConcatenatedFunction<T>) -> Self {
        Self::Concatenated(f)
    }
}

impl<T: FloatingPoint> From<SectionedUnivariateFunction<T>> for UnivariateFunction<T> {
    fn from(f: SectionedUnivariateFunction<T>) -> Self {
        Self::Sectioned(f)
    }
}

impl<T: FloatingPoint> From<StackedFunction<T>> for UnivariateFunction<T> {
    fn from(f: StackedFunction<T>) -> Self {
        Self::Stacked(f)
    }
}

pub(crate) fn out_of_domain<T: FloatingPoint>(x: T) -> FunctionError {
    FunctionError::OutOfDomain {
        value: x.to_f64().unwrap_or(f64::NAN),
    }
}
