use std::ops::{Add, Div, Mul, Neg, Sub};

use approx::{AbsDiffEq, RelativeEq, UlpsEq};
use serde::{Deserialize, Serialize};

use crate::error::{MathError, MathResult};

use super::{Abs, Atan2, Cos, Hypot, NoNeg, One, Sin, Sqr, Zero};

/// Point in the complex plane. Never changes after construction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Complex<T> {
    real: T,
    imag: T,
}

impl<T> From<(T, T)> for Complex<T> {
    fn from(value: (T, T)) -> Self {
        Self {
            real: value.0,
            imag: value.1,
        }
    }
}

impl<T> Complex<T> {
    pub const fn new(real: T, imag: T) -> Self {
        Self { real, imag }
    }

    pub fn real(self) -> T {
        self.real
    }

    pub fn imag(self) -> T {
        self.imag
    }

    pub fn from_polar(r: T, theta: T) -> Self
    where
        T: Clone + Mul<Output = T> + Sin<Output = T> + Cos<Output = T>,
    {
        Self {
            real: r.clone() * theta.clone().cos(),
            imag: r * theta.sin(),
        }
    }

    pub fn conjugate(self) -> Self
    where
        T: Neg<Output = T>,
    {
        Self {
            real: self.real,
            imag: -self.imag,
        }
    }

    pub fn norm_sqr(self) -> T
    where
        T: Sqr<Output = T> + Add<Output = T>,
    {
        self.real.sqr() + self.imag.sqr()
    }

    /// Euclidean distance from the origin
    pub fn abs(self) -> NoNeg<<T as Hypot>::Output>
    where
        T: Hypot,
    {
        NoNeg::hypot(self.real, self.imag)
    }

    /// Angle from the positive real axis, in range -PI..=PI
    pub fn arg(self) -> <T as Atan2>::Output
    where
        T: Atan2,
    {
        self.imag.atan2(self.real)
    }

    /// `conjugate / |self|^2`. Fails only for `0+0i`.
    pub fn reciprocal(self) -> MathResult<Self>
    where
        T: Clone
            + PartialOrd
            + Zero
            + One
            + Abs<Output = T>
            + Add<Output = T>
            + Mul<Output = T>
            + Neg<Output = T>
            + Div<Output = T>,
    {
        let Self { real, imag } = self;
        if real == T::zero() && imag == T::zero() {
            tracing::debug!("reciprocal of zero requested");
            return Err(MathError::DivisionByZero);
        }
        // Smith's method: scale by the larger part so |self|^2 is never formed
        if real.clone().abs() >= imag.clone().abs() {
            let ratio = imag.clone() / real.clone();
            let denominator = real + imag * ratio.clone();
            Ok(Self {
                real: T::one() / denominator.clone(),
                imag: -ratio / denominator,
            })
        } else {
            let ratio = real.clone() / imag.clone();
            let denominator = real * ratio.clone() + imag;
            Ok(Self {
                real: ratio / denominator.clone(),
                imag: -(T::one() / denominator),
            })
        }
    }

    pub fn checked_div(self, rhs: Self) -> MathResult<Self>
    where
        T: Clone
            + PartialOrd
            + Zero
            + One
            + Abs<Output = T>
            + Add<Output = T>
            + Sub<Output = T>
            + Mul<Output = T>
            + Neg<Output = T>
            + Div<Output = T>,
    {
        Ok(self * rhs.reciprocal()?)
    }
}

impl<T> Add for Complex<T>
where
    T: Add<Output = T>,
{
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            real: self.real + rhs.real,
            imag: self.imag + rhs.imag,
        }
    }
}

impl<T> Sub for Complex<T>
where
    T: Sub<Output = T>,
{
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self {
            real: self.real - rhs.real,
            imag: self.imag - rhs.imag,
        }
    }
}

impl<T> Neg for Complex<T>
where
    T: Neg<Output = T>,
{
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self {
            real: -self.real,
            imag: -self.imag,
        }
    }
}

impl<T> Mul for Complex<T>
where
    T: Clone + Mul<Output = T> + Add<Output = T> + Sub<Output = T>,
{
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        // (a + bi)(c + di) = (ac - bd) + (ad + bc)i
        Self {
            real: self.real.clone() * rhs.real.clone() - self.imag.clone() * rhs.imag.clone(),
            imag: self.real * rhs.imag + self.imag * rhs.real,
        }
    }
}

impl<T> AbsDiffEq for Complex<T>
where
    T: AbsDiffEq,
    T::Epsilon: Clone,
{
    type Epsilon = T::Epsilon;

    fn default_epsilon() -> Self::Epsilon {
        T::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.real.abs_diff_eq(&other.real, epsilon.clone())
            && self.imag.abs_diff_eq(&other.imag, epsilon)
    }
}

impl<T> RelativeEq for Complex<T>
where
    T: RelativeEq,
    T::Epsilon: Clone,
{
    fn default_max_relative() -> Self::Epsilon {
        T::default_max_relative()
    }

    fn relative_eq(
        &self,
        other: &Self,
        epsilon: Self::Epsilon,
        max_relative: Self::Epsilon,
    ) -> bool {
        self.real
            .relative_eq(&other.real, epsilon.clone(), max_relative.clone())
            && self.imag.relative_eq(&other.imag, epsilon, max_relative)
    }
}

impl<T> UlpsEq for Complex<T>
where
    T: UlpsEq,
    T::Epsilon: Clone,
{
    fn default_max_ulps() -> u32 {
        T::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Self, epsilon: Self::Epsilon, max_ulps: u32) -> bool {
        self.real.ulps_eq(&other.real, epsilon.clone(), max_ulps)
            && self.imag.ulps_eq(&other.imag, epsilon, max_ulps)
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::{FRAC_PI_2, PI, SQRT_2};

    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use rand::Rng as _;
    use rand_pcg::Pcg64;
    use rand_seeder::Seeder;

    use super::Complex;
    use crate::{error::MathError, utils::ComplexNumber};

    const ZERO: ComplexNumber = Complex::new(0., 0.);
    const ONE: ComplexNumber = Complex::new(1., 1.);

    fn random_complex(rng: &mut Pcg64) -> ComplexNumber {
        Complex::new(
            rng.random_range(-1000. ..1000.),
            rng.random_range(-1000. ..1000.),
        )
    }

    #[test]
    fn zero_has_zero_parts() {
        assert_eq!(ZERO.real(), 0.);
        assert_eq!(ZERO.imag(), 0.);
    }

    #[test]
    fn zero_plus_one_is_one() {
        assert_eq!(ZERO + ONE, Complex::new(1., 1.));
    }

    #[test]
    fn one_plus_zero_is_one() {
        assert_eq!(ONE + ZERO, Complex::new(1., 1.));
    }

    #[test]
    fn from_tuple() {
        let z: ComplexNumber = (3., -4.).into();
        assert_eq!(z, Complex::new(3., -4.));
    }

    #[test]
    fn equality_has_no_tolerance() {
        assert_ne!(Complex::new(1., 1.), Complex::new(1., 1. + f64::EPSILON));
        assert_ne!(Complex::new(1., 2.), Complex::new(2., 1.));
    }

    #[test]
    fn add_is_commutative_and_has_identity() {
        let mut rng: Pcg64 = Seeder::from("add").into_rng();
        for _ in 0..1000 {
            let a = random_complex(&mut rng);
            let b = random_complex(&mut rng);
            assert_eq!(a + b, b + a);
            assert_eq!(a + ZERO, a);
        }
    }

    #[test]
    fn add_is_associative_up_to_rounding() {
        let mut rng: Pcg64 = Seeder::from("assoc").into_rng();
        for _ in 0..1000 {
            let a = random_complex(&mut rng);
            let b = random_complex(&mut rng);
            let c = random_complex(&mut rng);
            assert_abs_diff_eq!((a + b) + c, a + (b + c), epsilon = 1e-9);
        }
    }

    #[test]
    fn abs_table() {
        let cases = [
            ((0., 0.), 0.),
            ((1., 1.), 1.41421),
            ((2., 2.), 2.82843),
            ((5., 5.), 7.07107),
            ((10., 10.), 14.1421),
            ((10., 1.), 10.0498),
            ((20., 2.), 20.099),
        ];
        for (value, expected) in cases {
            let z: ComplexNumber = value.into();
            assert_abs_diff_eq!(z.abs().get(), expected, epsilon = 0.001);
        }
    }

    #[test]
    fn abs_is_non_negative_and_zero_only_at_origin() {
        let mut rng: Pcg64 = Seeder::from("abs").into_rng();
        for _ in 0..1000 {
            let z = random_complex(&mut rng);
            assert!(z.abs().get() >= 0.);
            assert!((-z).abs().get() >= 0.);
        }
        assert_eq!(ZERO.abs().get(), 0.);
        assert!(Complex::new(0., 1e-3).abs().get() > 0.);
        assert_relative_eq!(ONE.abs().get(), SQRT_2, max_relative = 1e-15);
    }

    #[test]
    fn reciprocal_of_zero_is_division_by_zero() {
        let err = ZERO.reciprocal().unwrap_err();
        assert_eq!(err, MathError::DivisionByZero);
        assert_eq!(err.to_string(), "division by zero");

        let err = Complex::new(-0., 0.).reciprocal().unwrap_err();
        assert_eq!(err.to_string(), "division by zero");
    }

    #[test]
    fn tiny_values_have_nonzero_abs_and_a_reciprocal() {
        let z = Complex::new(1e-170, 0.);
        assert_eq!(z.abs().get(), 1e-170);
        assert!(z.abs().get() > 0.);
        assert_relative_eq!(
            z.reciprocal().unwrap(),
            Complex::new(1e170, 0.),
            max_relative = 1e-12
        );

        let z = Complex::new(1e-200, 1e-200);
        assert_relative_eq!(z.abs().get(), SQRT_2 * 1e-200, max_relative = 1e-12);
        assert_relative_eq!(
            z.reciprocal().unwrap(),
            Complex::new(5e199, -5e199),
            max_relative = 1e-12
        );
    }

    #[test]
    fn huge_values_do_not_overflow() {
        let z = Complex::new(1e200, 1e200);
        assert_relative_eq!(z.abs().get(), SQRT_2 * 1e200, max_relative = 1e-12);
        assert_relative_eq!(
            z.reciprocal().unwrap(),
            Complex::new(5e-201, -5e-201),
            max_relative = 1e-12
        );

        let z = Complex::new(-1e300, 1e-300);
        assert_relative_eq!(
            z.reciprocal().unwrap(),
            Complex::new(-1e-300, 0.),
            max_relative = 1e-12
        );
    }

    #[test]
    fn reciprocal_values() {
        assert_eq!(ONE.reciprocal(), Ok(Complex::new(0.5, -0.5)));
        assert_eq!(Complex::new(0., 2.).reciprocal(), Ok(Complex::new(0., -0.5)));
        assert_eq!(Complex::new(4., 0.).reciprocal(), Ok(Complex::new(0.25, 0.)));
    }

    #[test]
    fn value_times_reciprocal_is_one() {
        let mut rng: Pcg64 = Seeder::from("reciprocal").into_rng();
        for _ in 0..1000 {
            let z = random_complex(&mut rng);
            if z == ZERO {
                continue;
            }
            let product = z * z.reciprocal().unwrap();
            assert_abs_diff_eq!(product, Complex::new(1., 0.), epsilon = 1e-12);
        }
    }

    #[test]
    fn checked_div() {
        let a = Complex::new(3., 4.);
        let b = Complex::new(1., 2.);
        // (3 + 4i) / (1 + 2i) = 2.2 - 0.4i
        assert_abs_diff_eq!(
            a.checked_div(b).unwrap(),
            Complex::new(2.2, -0.4),
            epsilon = 1e-12
        );
        assert_eq!(a.checked_div(ZERO), Err(MathError::DivisionByZero));
    }

    #[test]
    fn conjugate_sub_neg_mul() {
        let a = Complex::new(3., 4.);
        let b = Complex::new(1., -2.);
        assert_eq!(a.conjugate(), Complex::new(3., -4.));
        assert_eq!(a - b, Complex::new(2., 6.));
        assert_eq!(-a, Complex::new(-3., -4.));
        assert_eq!(a * b, Complex::new(11., -2.));
        assert_eq!(a * a.conjugate(), Complex::new(a.norm_sqr(), 0.));
    }

    #[test]
    fn polar() {
        assert_eq!(Complex::new(0., 1.).arg(), FRAC_PI_2);
        assert_eq!(Complex::new(-1., 0.).arg(), PI);
        assert_abs_diff_eq!(
            Complex::from_polar(2., FRAC_PI_2),
            Complex::new(0., 2.),
            epsilon = 1e-12
        );

        let z = Complex::new(-3., 4.);
        assert_relative_eq!(
            Complex::from_polar(z.abs().get(), z.arg()),
            z,
            max_relative = 1e-12
        );
    }

    #[test]
    fn single_precision() {
        let z = Complex::new(3_f32, 4.);
        assert_relative_eq!(z.abs().get(), 5., max_relative = 1e-6);
        assert_relative_eq!(
            z.reciprocal().unwrap(),
            Complex::new(0.12, -0.16),
            max_relative = 1e-6
        );
        assert_eq!(
            Complex::new(0_f32, 0.).reciprocal(),
            Err(MathError::DivisionByZero)
        );
    }

    #[test]
    fn serde_representation() {
        let z = Complex::new(1., -2.5);
        let json = serde_json::to_string(&z).unwrap();
        assert_eq!(json, r#"{"real":1.0,"imag":-2.5}"#);
        let back: ComplexNumber = serde_json::from_str(&json).unwrap();
        assert_eq!(back, z);
    }
}
