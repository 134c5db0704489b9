use std::sync::Arc;

use crate::error::FunctionError;
use crate::misc::FloatingPoint;
use crate::range::{HasDomain, Range};

use super::{out_of_domain, UnivariateFunction};

/// Restriction of a source function to a sub-range of its domain.
///
/// The sectioned domain starts at zero: `value(x) = source.value(start + x)`.
/// The source is shared, so many sections can view the same function.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionedUnivariateFunction<T: FloatingPoint> {
    source: Arc<UnivariateFunction<T>>,
    section_start: T,
    domain: Range<T>,
}

impl<T: FloatingPoint> SectionedUnivariateFunction<T> {
    pub fn try_new(
        source: Arc<UnivariateFunction<T>>,
        section: Range<T>,
    ) -> Result<Self, FunctionError> {
        let section_start = section.lower_endpoint().ok_or_else(|| {
            FunctionError::IllegalConstruction(
                "a section must be bounded below".into(),
            )
        })?;
        if !source.domain().encloses(&section) {
            return Err(FunctionError::IllegalConstruction(
                "the section is not contained in the source domain".into(),
            ));
        }
        let domain = section.shift_to_origin();
        Ok(Self {
            source,
            section_start,
            domain,
        })
    }

    pub fn value(&self, x: T) -> Result<T, FunctionError> {
        if !self.domain.contains(x) {
            return Err(out_of_domain(x));
        }
        self.source.value(self.section_start + x)
    }

    pub fn value_fuzzy(&self, x: T, tolerance: T) -> Result<T, FunctionError> {
        if !self.domain.fuzzy_contains(x, tolerance) {
            return Err(out_of_domain(x));
        }
        self.source.value_fuzzy(self.section_start + x, tolerance)
    }

    pub fn slope(&self, x: T) -> Result<T, FunctionError> {
        if !self.domain.contains(x) {
            return Err(out_of_domain(x));
        }
        self.source.slope(self.section_start + x)
    }
}

impl<T: FloatingPoint> HasDomain<T> for SectionedUnivariateFunction<T> {
    fn domain(&self) -> Range<T> {
        self.domain
    }
}
