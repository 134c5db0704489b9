use crate::error::FunctionError;
use crate::misc::{FloatingPoint, Reported};
use crate::range::{HasDomain, Range};

use super::{ConcatenationContainer, LinearFunction, PolynomialFunction, UnivariateFunction};

/// A univariate function backed by a concatenation of member functions.
///
/// Evaluation translates the global coordinate into the local coordinate of the
/// selected member and delegates to it.
#[derive(Debug, Clone, PartialEq)]
pub struct ConcatenatedFunction<T: FloatingPoint> {
    container: ConcatenationContainer<T, UnivariateFunction<T>>,
}

impl<T: FloatingPoint> ConcatenatedFunction<T> {
    pub fn try_new(
        members: Vec<UnivariateFunction<T>>,
        origin: T,
    ) -> Result<Self, FunctionError> {
        Ok(Self {
            container: ConcatenationContainer::try_new(members, origin)?,
        })
    }

    /// Builds a concatenated function from piecewise polynomial entries given as
    /// ascending start positions with one coefficient set each. The length of a
    /// piece is the distance to its successor; the last piece is unbounded.
    ///
    /// Entries sharing a start position contribute a zero-length piece; such a
    /// piece is dropped (the first entry of the group wins) and a context
    /// message records the repair.
    ///
    /// With `prepend_constant`, a constant piece on `(-inf, starts[0])` is
    /// prepended. Piecewise records frequently begin at a positive start while
    /// their function must already be defined at zero.
    pub fn of_polynomial_functions(
        starts: &[T],
        coefficients: &[Vec<T>],
        prepend_constant: Option<T>,
    ) -> Result<Reported<Self>, FunctionError> {
        if starts.len() != coefficients.len() {
            return Err(FunctionError::IllegalConstruction(
                "the number of start positions and coefficient sets differ".into(),
            ));
        }
        let kept = filter_to_strictly_ascending(starts)?;
        let mut messages = Vec::new();
        for dropped in kept.dropped_indices() {
            let message = format!(
                "Removing piecewise polynomial entry at start position {}: \
                 zero length against its predecessor",
                to_f64(starts[dropped])
            );
            log::warn!("{}", message);
            messages.push(message);
        }

        let mut members: Vec<UnivariateFunction<T>> = Vec::with_capacity(kept.indices.len() + 1);
        if let Some(value) = prepend_constant {
            members.push(LinearFunction::constant(value, Range::less_than(T::zero())).into());
        }
        let count = kept.indices.len();
        for (position, &index) in kept.indices.iter().enumerate() {
            let domain = if position + 1 < count {
                let length = starts[kept.indices[position + 1]] - starts[index];
                Range::closed_open(T::zero(), length)
            } else {
                Range::at_least(T::zero())
            };
            members
                .push(PolynomialFunction::with_domain(coefficients[index].clone(), domain).into());
        }
        let function = Self::try_new(members, starts[kept.indices[0]])?;
        Ok(Reported::new(function, messages))
    }

    /// Builds a concatenated function from piecewise linear entries. Slopes
    /// default to zero, yielding a step function over the intercepts.
    pub fn of_linear_functions(
        starts: &[T],
        intercepts: &[T],
        slopes: Option<&[T]>,
    ) -> Result<Reported<Self>, FunctionError> {
        if starts.len() != intercepts.len() {
            return Err(FunctionError::IllegalConstruction(
                "the number of start positions and intercepts differ".into(),
            ));
        }
        if let Some(slopes) = slopes {
            if slopes.len() != starts.len() {
                return Err(FunctionError::IllegalConstruction(
                    "the number of start positions and slopes differ".into(),
                ));
            }
        }
        let kept = filter_to_strictly_ascending(starts)?;
        let mut messages = Vec::new();
        for dropped in kept.dropped_indices() {
            let message = format!(
                "Removing piecewise linear entry at start position {}: \
                 zero length against its predecessor",
                to_f64(starts[dropped])
            );
            log::warn!("{}", message);
            messages.push(message);
        }

        let count = kept.indices.len();
        let mut members: Vec<UnivariateFunction<T>> = Vec::with_capacity(count);
        for (position, &index) in kept.indices.iter().enumerate() {
            let domain = if position + 1 < count {
                let length = starts[kept.indices[position + 1]] - starts[index];
                Range::closed_open(T::zero(), length)
            } else {
                Range::at_least(T::zero())
            };
            let slope = slopes.map(|s| s[index]).unwrap_or_else(T::zero);
            members.push(LinearFunction::new(slope, intercepts[index], domain).into());
        }
        let function = Self::try_new(members, starts[kept.indices[0]])?;
        Ok(Reported::new(function, messages))
    }

    pub fn container(&self) -> &ConcatenationContainer<T, UnivariateFunction<T>> {
        &self.container
    }

    pub fn value(&self, x: T) -> Result<T, FunctionError> {
        let (member, local) = self.container.strict_select_member(x)?;
        member.value(local)
    }

    pub fn value_fuzzy(&self, x: T, tolerance: T) -> Result<T, FunctionError> {
        let (member, local) = self.container.fuzzy_select_member(x, tolerance)?;
        member.value_fuzzy(local, tolerance)
    }

    pub fn slope(&self, x: T) -> Result<T, FunctionError> {
        let (member, local) = self.container.strict_select_member(x)?;
        member.slope(local)
    }
}

impl<T: FloatingPoint> HasDomain<T> for ConcatenatedFunction<T> {
    fn domain(&self) -> Range<T> {
        self.container.domain()
    }
}

struct StrictlyAscending {
    indices: Vec<usize>,
    total: usize,
}

impl StrictlyAscending {
    fn dropped_indices(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.total).filter(|i| !self.indices.contains(i))
    }
}

/// Keeps the indices forming a strictly ascending start sequence; of a group of
/// equal start positions the first entry survives. Descending input is refused.
fn filter_to_strictly_ascending<T: FloatingPoint>(
    starts: &[T],
) -> Result<StrictlyAscending, FunctionError> {
    if starts.is_empty() {
        return Err(FunctionError::IllegalConstruction(
            "at least one piecewise entry is required".into(),
        ));
    }
    if starts.windows(2).any(|pair| pair[1] < pair[0]) {
        return Err(FunctionError::IllegalConstruction(
            "piecewise start positions must be ascending".into(),
        ));
    }
    let mut indices = vec![0];
    for (i, start) in starts.iter().enumerate().skip(1) {
        if *start > starts[*indices.last().unwrap()] {
            indices.push(i);
        }
    }
    Ok(StrictlyAscending {
        indices,
        total: starts.len(),
    })
}

fn to_f64<T: FloatingPoint>(value: T) -> f64 {
    value.to_f64().unwrap_or(f64::NAN)
}
