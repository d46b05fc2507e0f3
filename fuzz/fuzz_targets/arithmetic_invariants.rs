#![no_main]

use approx::relative_eq;
use complex_lib::{error::MathError, math::Complex, utils::ComplexNumber};
use libfuzzer_sys::fuzz_target;
use rand::Rng as _;
use rand_pcg::Pcg64;
use rand_seeder::Seeder;

const ZERO: ComplexNumber = Complex::new(0., 0.);

fn random_complex(rng: &mut Pcg64) -> ComplexNumber {
    Complex::new(rng.random_range(-1e6..1e6), rng.random_range(-1e6..1e6))
}

/// Magnitudes spread over 1e-300..1e301 so squaring a part would under- or overflow
fn random_extreme_part(rng: &mut Pcg64) -> f64 {
    let sign = if rng.random_bool(0.5) { -1. } else { 1. };
    sign * rng.random_range(1. ..10.) * 10_f64.powi(rng.random_range(-300..=300))
}

fn check(a: ComplexNumber) {
    let abs = a.abs().get();
    assert!(abs >= 0.);
    assert!(abs.is_finite());
    assert_eq!(abs == 0., a == ZERO);

    match a.reciprocal() {
        Ok(reciprocal) => assert!(relative_eq!(
            a * reciprocal,
            Complex::new(1., 0.),
            epsilon = 1e-9,
            max_relative = 1e-9
        )),
        Err(err) => {
            assert_eq!(a, ZERO);
            assert_eq!(err, MathError::DivisionByZero);
            assert_eq!(err.to_string(), "division by zero");
        }
    }
}

// Checks the arithmetic laws on values generated from input data used as seed.
fuzz_target!(|data: &[u8]| {
    let mut rng: Pcg64 = Seeder::from(data).into_rng();

    for _ in 0..64 {
        let a = random_complex(&mut rng);
        let b = random_complex(&mut rng);

        assert_eq!(a + b, b + a);
        assert_eq!(a + ZERO, a);
        check(a);

        let real = random_extreme_part(&mut rng);
        let imag = random_extreme_part(&mut rng);
        check(Complex::new(real, imag));
    }

    assert_eq!(ZERO.reciprocal(), Err(MathError::DivisionByZero));
});
