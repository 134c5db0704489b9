use nalgebra::RealField;
use num_traits::ToPrimitive;

/// Default tolerance for fuzzy comparisons.
pub const DEFAULT_TOLERANCE: f64 = 1e-7;

/// Trait for floating point types (f32, f64)
/// Mainly used to identify the type of the scalar field in nalgebra
pub trait FloatingPoint: RealField + ToPrimitive + Copy {
    /// The default fuzzy comparison tolerance expressed in this scalar type.
    fn default_tolerance() -> Self {
        Self::from_f64(DEFAULT_TOLERANCE).unwrap()
    }
}

impl FloatingPoint for f32 {}
impl FloatingPoint for f64 {}
