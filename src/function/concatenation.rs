use std::ops::Bound;

use crate::error::FunctionError;
use crate::misc::{fuzzy_equals, FloatingPoint};
use crate::range::{HasDomain, Range};

use super::out_of_domain;

/// An ordered sequence of members arranged end-to-end on the real line.
///
/// Each member is defined on its own local domain; the container assigns every
/// member an absolute start so that the member domains tile a contiguous whole
/// domain without gaps. Only the first member may be unbounded below and only
/// the last member may be unbounded above.
#[derive(Debug, Clone, PartialEq)]
pub struct ConcatenationContainer<T: FloatingPoint, M> {
    members: Vec<M>,
    absolute_starts: Vec<T>,
    domain: Range<T>,
}

impl<T: FloatingPoint, M: HasDomain<T>> ConcatenationContainer<T, M> {
    /// Arranges the members end-to-end starting at the given absolute origin.
    ///
    /// Every member but the first must have a closed local lower bound at zero,
    /// and every member but the last an open, bounded local upper bound.
    pub fn try_new(members: Vec<M>, origin: T) -> Result<Self, FunctionError> {
        if members.is_empty() {
            return Err(FunctionError::IllegalConstruction(
                "a concatenation requires at least one member".into(),
            ));
        }
        let count = members.len();
        let mut absolute_starts = Vec::with_capacity(count);
        let mut anchor = origin;
        for (i, member) in members.iter().enumerate() {
            let domain = member.domain();
            if i > 0 && !matches!(domain.lower_bound(), Bound::Included(l) if l == T::zero()) {
                return Err(FunctionError::IllegalConstruction(
                    "inner members must have a closed local domain starting at zero".into(),
                ));
            }
            absolute_starts.push(anchor);
            if i + 1 < count {
                match domain.upper_bound() {
                    Bound::Excluded(upper) => anchor += upper,
                    _ => {
                        return Err(FunctionError::IllegalConstruction(
                            "inner members must have an open bounded upper domain \
                             to tile against their successor"
                                .into(),
                        ));
                    }
                }
            }
        }

        let first = members.first().unwrap().domain();
        let last = members.last().unwrap().domain();
        let domain = Range::new(
            first.shift(absolute_starts[0]).lower_bound(),
            last.shift(*absolute_starts.last().unwrap()).upper_bound(),
        );
        Ok(Self {
            members,
            absolute_starts,
            domain,
        })
    }

    pub fn members(&self) -> &[M] {
        &self.members
    }

    pub fn absolute_starts(&self) -> &[T] {
        &self.absolute_starts
    }

    pub fn domain(&self) -> Range<T> {
        self.domain
    }

    /// Selects the unique member whose absolute domain contains `x` and returns
    /// it with the local coordinate of `x`.
    pub fn strict_select_member(&self, x: T) -> Result<(&M, T), FunctionError> {
        let index = self
            .absolute_starts
            .iter()
            .rposition(|start| *start <= x)
            .unwrap_or(0);
        let local = x - self.absolute_starts[index];
        if self.members[index].domain().contains(local) {
            Ok((&self.members[index], local))
        } else {
            Err(out_of_domain(x))
        }
    }

    /// Member selection with fuzzy boundary handling: values within `tolerance`
    /// of an internal boundary select the member containing that boundary, and
    /// values within `tolerance` of the outer endpoints select the respective
    /// boundary member. The returned local coordinate keeps the original `x`,
    /// so it may lie up to `tolerance` outside the member's local domain.
    pub fn fuzzy_select_member(&self, x: T, tolerance: T) -> Result<(&M, T), FunctionError> {
        if !self.domain.fuzzy_contains(x, tolerance) {
            return Err(out_of_domain(x));
        }
        let snapped = self
            .absolute_starts
            .iter()
            .skip(1)
            .find(|start| fuzzy_equals(x, **start, tolerance))
            .copied();
        let selector = self.domain.clamp_value(snapped.unwrap_or(x));
        let index = self
            .absolute_starts
            .iter()
            .rposition(|start| *start <= selector)
            .unwrap_or(0);
        Ok((&self.members[index], x - self.absolute_starts[index]))
    }
}
