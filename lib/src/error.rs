//! Errors produced by complex arithmetic and parsing.

use thiserror::Error;

pub type MathResult<T> = Result<T, MathError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MathError {
    /// Reciprocal (or division) of a value whose norm is zero
    #[error("division by zero")]
    DivisionByZero,

    /// Text that is not a complex number in `a+bi` form
    #[error("can not parse `{input}` as a complex number: {reason}")]
    Parse { input: String, reason: String },
}

impl MathError {
    pub(crate) fn parse(input: &str, reason: impl Into<String>) -> Self {
        Self::Parse {
            input: input.to_owned(),
            reason: reason.into(),
        }
    }
}
