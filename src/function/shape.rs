use crate::error::FunctionError;
use crate::misc::{fuzzy_less_than_or_equals, FloatingPoint};
use crate::range::HasDomain;

use super::UnivariateFunction;

/// The lateral shape of a road: one height profile over the lateral offset `t`
/// per curve position `s`, evaluated with step semantics between the cuts.
#[derive(Debug, Clone, PartialEq)]
pub struct ShapeFunction<T: FloatingPoint> {
    cuts: Vec<(T, UnivariateFunction<T>)>,
}

impl<T: FloatingPoint> ShapeFunction<T> {
    pub fn try_new(cuts: Vec<(T, UnivariateFunction<T>)>) -> Result<Self, FunctionError> {
        if cuts.is_empty() {
            return Err(FunctionError::IllegalConstruction(
                "a shape function requires at least one lateral cut".into(),
            ));
        }
        if cuts.windows(2).any(|pair| pair[1].0 <= pair[0].0) {
            return Err(FunctionError::IllegalConstruction(
                "lateral cuts must be placed at strictly ascending curve positions".into(),
            ));
        }
        Ok(Self { cuts })
    }

    pub fn cuts(&self) -> &[(T, UnivariateFunction<T>)] {
        &self.cuts
    }

    /// Evaluates the shape height at `(s, t)`: the cut with the greatest curve
    /// position at or fuzzily before `s` applies. Beyond the outermost lateral
    /// entries of a cut the height continues constantly.
    pub fn value_fuzzy(&self, s: T, t: T, tolerance: T) -> Result<T, FunctionError> {
        let index = self
            .cuts
            .iter()
            .rposition(|(station, _)| fuzzy_less_than_or_equals(*station, s, tolerance))
            .unwrap_or(0);
        let cut = &self.cuts[index].1;
        let lateral = cut.domain().clamp_value(t);
        cut.value_fuzzy(lateral, tolerance)
    }
}
