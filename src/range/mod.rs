use std::ops::Bound;

use crate::misc::{fuzzy_equals, FloatingPoint};


/// An interval of the real line whose endpoints are independently open, closed or unbounded.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Range<T: FloatingPoint> {
    lower: Bound<T>,
    upper: Bound<T>,
}

impl<T: FloatingPoint> Range<T> {
    pub fn new(lower: Bound<T>, upper: Bound<T>) -> Self {
        Self { lower, upper }
    }

    /// The whole real line.
    pub fn all() -> Self {
        Self::new(Bound::Unbounded, Bound::Unbounded)
    }

    /// `[lower, upper]`
    pub fn closed(lower: T, upper: T) -> Self {
        Self::new(Bound::Included(lower), Bound::Included(upper))
    }

    /// `[lower, upper)`
    pub fn closed_open(lower: T, upper: T) -> Self {
        Self::new(Bound::Included(lower), Bound::Excluded(upper))
    }

    /// `(lower, upper]`
    pub fn open_closed(lower: T, upper: T) -> Self {
        Self::new(Bound::Excluded(lower), Bound::Included(upper))
    }

    /// `(lower, upper)`
    pub fn open(lower: T, upper: T) -> Self {
        Self::new(Bound::Excluded(lower), Bound::Excluded(upper))
    }

    /// `[lower, +inf)`
    pub fn at_least(lower: T) -> Self {
        Self::new(Bound::Included(lower), Bound::Unbounded)
    }

    /// `(lower, +inf)`
    pub fn greater_than(lower: T) -> Self {
        Self::new(Bound::Excluded(lower), Bound::Unbounded)
    }

    /// `(-inf, upper]`
    pub fn at_most(upper: T) -> Self {
        Self::new(Bound::Unbounded, Bound::Included(upper))
    }

    /// `(-inf, upper)`
    pub fn less_than(upper: T) -> Self {
        Self::new(Bound::Unbounded, Bound::Excluded(upper))
    }

    pub fn lower_bound(&self) -> Bound<T> {
        self.lower
    }

    pub fn upper_bound(&self) -> Bound<T> {
        self.upper
    }

    pub fn lower_endpoint(&self) -> Option<T> {
        match self.lower {
            Bound::Included(v) | Bound::Excluded(v) => Some(v),
            Bound::Unbounded => None,
        }
    }

    pub fn upper_endpoint(&self) -> Option<T> {
        match self.upper {
            Bound::Included(v) | Bound::Excluded(v) => Some(v),
            Bound::Unbounded => None,
        }
    }

    pub fn has_lower_bound(&self) -> bool {
        !matches!(self.lower, Bound::Unbounded)
    }

    pub fn has_upper_bound(&self) -> bool {
        !matches!(self.upper, Bound::Unbounded)
    }

    /// Returns true if both endpoints are bounded.
    pub fn is_bounded(&self) -> bool {
        self.has_lower_bound() && self.has_upper_bound()
    }

    /// The distance between the two endpoints, if both are bounded.
    pub fn length(&self) -> Option<T> {
        match (self.lower_endpoint(), self.upper_endpoint()) {
            (Some(l), Some(u)) => Some(u - l),
            _ => None,
        }
    }

    pub fn contains(&self, value: T) -> bool {
        let lower_ok = match self.lower {
            Bound::Included(l) => value >= l,
            Bound::Excluded(l) => value > l,
            Bound::Unbounded => true,
        };
        let upper_ok = match self.upper {
            Bound::Included(u) => value <= u,
            Bound::Excluded(u) => value < u,
            Bound::Unbounded => true,
        };
        lower_ok && upper_ok
    }

    /// Containment extended by `tolerance` around bounded endpoints.
    pub fn fuzzy_contains(&self, value: T, tolerance: T) -> bool {
        if self.contains(value) {
            return true;
        }
        if let Some(l) = self.lower_endpoint() {
            if fuzzy_equals(value, l, tolerance) {
                return true;
            }
        }
        if let Some(u) = self.upper_endpoint() {
            if fuzzy_equals(value, u, tolerance) {
                return true;
            }
        }
        false
    }

    /// Returns true if `other` lies completely within this range.
    pub fn encloses(&self, other: &Self) -> bool {
        let lower_ok = match (self.lower, other.lower) {
            (Bound::Unbounded, _) => true,
            (_, Bound::Unbounded) => false,
            (Bound::Included(a), Bound::Included(b) | Bound::Excluded(b)) => b >= a,
            (Bound::Excluded(a), Bound::Excluded(b)) => b >= a,
            (Bound::Excluded(a), Bound::Included(b)) => b > a,
        };
        let upper_ok = match (self.upper, other.upper) {
            (Bound::Unbounded, _) => true,
            (_, Bound::Unbounded) => false,
            (Bound::Included(a), Bound::Included(b) | Bound::Excluded(b)) => b <= a,
            (Bound::Excluded(a), Bound::Excluded(b)) => b <= a,
            (Bound::Excluded(a), Bound::Included(b)) => b < a,
        };
        lower_ok && upper_ok
    }

    /// Intersection of two ranges; `None` if they do not overlap.
    pub fn intersection(&self, other: &Self) -> Option<Self> {
        let lower = max_lower_bound(self.lower, other.lower);
        let upper = min_upper_bound(self.upper, other.upper);
        let candidate = Self::new(lower, upper);
        match (candidate.lower_endpoint(), candidate.upper_endpoint()) {
            (Some(l), Some(u)) => {
                if l < u {
                    Some(candidate)
                } else if l == u
                    && matches!(lower, Bound::Included(_))
                    && matches!(upper, Bound::Included(_))
                {
                    Some(candidate)
                } else {
                    None
                }
            }
            _ => Some(candidate),
        }
    }

    /// Translates both endpoints by `offset`.
    pub fn shift(&self, offset: T) -> Self {
        Self::new(
            shift_bound(self.lower, offset),
            shift_bound(self.upper, offset),
        )
    }

    /// Translates the range so that its lower endpoint becomes zero.
    /// A range without a lower bound is returned unchanged.
    pub fn shift_to_origin(&self) -> Self {
        match self.lower_endpoint() {
            Some(l) => self.shift(-l),
            None => *self,
        }
    }

    /// Clamps `value` onto the bounded endpoints of this range.
    pub fn clamp_value(&self, value: T) -> T {
        let mut clamped = value;
        if let Some(l) = self.lower_endpoint() {
            if clamped < l {
                clamped = l;
            }
        }
        if let Some(u) = self.upper_endpoint() {
            if clamped > u {
                clamped = u;
            }
        }
        clamped
    }

    /// Samples the range uniformly with the given step size, always including both
    /// endpoint values. The last sample is snapped onto the upper endpoint.
    /// Returns `None` for unbounded ranges or a non-positive step.
    pub fn discretize(&self, step: T) -> Option<Vec<T>> {
        let lower = self.lower_endpoint()?;
        let upper = self.upper_endpoint()?;
        if step <= T::zero() {
            return None;
        }
        let length = upper - lower;
        if length <= T::zero() {
            return Some(vec![lower]);
        }
        let count = (length / step).floor().to_usize().unwrap_or(0);
        let mut values = Vec::with_capacity(count + 2);
        for k in 0..=count {
            values.push(lower + step * T::from_usize(k).unwrap());
        }
        let snap = step * T::from_f64(1e-6).unwrap();
        let last = *values.last().unwrap();
        if upper - last > snap {
            values.push(upper);
        } else {
            *values.last_mut().unwrap() = upper;
        }
        Some(values)
    }
}

/// Capability of types that are defined on a contiguous range, such as univariate
/// functions and parametric curves.
pub trait HasDomain<T: FloatingPoint> {
    fn domain(&self) -> Range<T>;
}

fn shift_bound<T: FloatingPoint>(bound: Bound<T>, offset: T) -> Bound<T> {
    match bound {
        Bound::Included(v) => Bound::Included(v + offset),
        Bound::Excluded(v) => Bound::Excluded(v + offset),
        Bound::Unbounded => Bound::Unbounded,
    }
}

fn max_lower_bound<T: FloatingPoint>(a: Bound<T>, b: Bound<T>) -> Bound<T> {
    match (a, b) {
        (Bound::Unbounded, other) | (other, Bound::Unbounded) => other,
        (Bound::Included(x), Bound::Included(y)) => Bound::Included(x.max(y)),
        (Bound::Excluded(x), Bound::Excluded(y)) => Bound::Excluded(x.max(y)),
        (Bound::Included(i), Bound::Excluded(e)) | (Bound::Excluded(e), Bound::Included(i)) => {
            if e >= i {
                Bound::Excluded(e)
            } else {
                Bound::Included(i)
            }
        }
    }
}

fn min_upper_bound<T: FloatingPoint>(a: Bound<T>, b: Bound<T>) -> Bound<T> {
    match (a, b) {
        (Bound::Unbounded, other) | (other, Bound::Unbounded) => other,
        (Bound::Included(x), Bound::Included(y)) => Bound::Included(x.min(y)),
        (Bound::Excluded(x), Bound::Excluded(y)) => Bound::Excluded(x.min(y)),
        (Bound::Included(i), Bound::Excluded(e)) | (Bound::Excluded(e), Bound::Included(i)) => {
            if e <= i {
                Bound::Excluded(e)
            } else {
                Bound::Included(i)
            }
        }
    }
}
