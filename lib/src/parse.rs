//! Text form of complex numbers: `a`, `bi`, `a+bi`, `a-bi`.

use std::{
    fmt::{self, Display},
    ops::Neg,
    str::FromStr,
};

use crate::{
    error::MathError,
    math::{Complex, One, Zero},
};

impl<T> Display for Complex<T>
where
    T: Copy + Display + PartialOrd + Zero + Neg<Output = T>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (real, imag) = (self.real(), self.imag());
        // -0 is printed as +0
        let (sign, imag) = if imag < T::zero() {
            ('-', -imag)
        } else if imag == T::zero() {
            ('+', T::zero())
        } else {
            ('+', imag)
        };
        match f.precision() {
            Some(precision) => write!(f, "{real:.precision$}{sign}{imag:.precision$}i"),
            None => write!(f, "{real}{sign}{imag}i"),
        }
    }
}

impl<T> FromStr for Complex<T>
where
    T: FromStr + Zero + One + Neg<Output = T>,
{
    type Err = MathError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let s = input.trim();
        if s.is_empty() {
            return Err(MathError::parse(input, "empty input"));
        }

        let Some(body) = s.strip_suffix('i') else {
            let real = parse_part(input, s, "real")?;
            return Ok(Complex::new(real, T::zero()));
        };

        match find_imag_sign(body) {
            Some(index) => {
                let real = parse_part(input, body[..index].trim(), "real")?;
                let imag = parse_imag(input, &body[index..])?;
                Ok(Complex::new(real, imag))
            }
            None => Ok(Complex::new(T::zero(), parse_imag(input, body.trim())?)),
        }
    }
}

/// Position of the sign separating the real part from the imaginary one.
/// Leading signs and exponent signs (`1e-5`) are skipped.
fn find_imag_sign(body: &str) -> Option<usize> {
    let bytes = body.as_bytes();
    (1..bytes.len())
        .rev()
        .find(|&i| matches!(bytes[i], b'+' | b'-') && !matches!(bytes[i - 1], b'e' | b'E'))
}

fn parse_part<T: FromStr>(input: &str, part: &str, name: &str) -> Result<T, MathError> {
    part.parse()
        .map_err(|_| MathError::parse(input, format!("invalid {name} part `{part}`")))
}

/// Imaginary coefficient with an optional sign; a missing coefficient means one
fn parse_imag<T>(input: &str, part: &str) -> Result<T, MathError>
where
    T: FromStr + One + Neg<Output = T>,
{
    let (negative, magnitude) = match part.as_bytes().first() {
        Some(b'-') => (true, part[1..].trim_start()),
        Some(b'+') => (false, part[1..].trim_start()),
        _ => (false, part),
    };
    if magnitude.starts_with(['+', '-']) {
        return Err(MathError::parse(input, format!("invalid imaginary part `{part}`")));
    }
    let value = if magnitude.is_empty() {
        T::one()
    } else {
        parse_part(input, magnitude, "imaginary")?
    };
    Ok(if negative { -value } else { value })
}
