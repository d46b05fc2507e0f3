use crate::math::Complex;

pub type Float = f64;

/// Floating-point complex number
pub type ComplexNumber = Complex<Float>;
