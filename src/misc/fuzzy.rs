use super::FloatingPoint;

/// Returns true if `a` and `b` are equal within `tolerance`.
pub fn fuzzy_equals<T: FloatingPoint>(a: T, b: T, tolerance: T) -> bool {
    (a - b).abs() <= tolerance
}

/// Returns true if `a` is less than `b` and the two are not fuzzily equal.
pub fn fuzzy_less_than<T: FloatingPoint>(a: T, b: T, tolerance: T) -> bool {
    a < b && !fuzzy_equals(a, b, tolerance)
}

/// Returns true if `a` is less than `b` or the two are fuzzily equal.
pub fn fuzzy_less_than_or_equals<T: FloatingPoint>(a: T, b: T, tolerance: T) -> bool {
    a < b || fuzzy_equals(a, b, tolerance)
}

/// Returns true if `a` is greater than `b` and the two are not fuzzily equal.
pub fn fuzzy_more_than<T: FloatingPoint>(a: T, b: T, tolerance: T) -> bool {
    a > b && !fuzzy_equals(a, b, tolerance)
}

/// Returns true if `a` is greater than `b` or the two are fuzzily equal.
pub fn fuzzy_more_than_or_equals<T: FloatingPoint>(a: T, b: T, tolerance: T) -> bool {
    a > b || fuzzy_equals(a, b, tolerance)
}
