use std::{fmt::Display, ops::Add};

use thiserror::Error;

use super::{Hypot, IsNeg, Sqrt};

/// Can not store negative numbers
#[derive(Clone, Copy, Debug)]
pub struct NoNeg<T> {
    value: T,
}

impl<T> Display for NoNeg<T>
where
    T: Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self.value, f)
    }
}

#[derive(Debug, Error)]
#[error("expected a non-negative value, got {original_value:?}")]
pub struct NegError<T> {
    original_value: T,
}

impl<T> NegError<T> {
    pub fn original_value(self) -> T {
        self.original_value
    }
}

impl<T> NoNeg<T> {
    pub fn wrap(value: T) -> Result<Self, NegError<T>>
    where
        T: IsNeg,
    {
        if value.is_neg() {
            Err(NegError {
                original_value: value,
            })
        } else {
            Ok(Self { value })
        }
    }

    /// `sqrt(a^2 + b^2)` without intermediate overflow or underflow
    pub(crate) fn hypot(a: T, b: T) -> NoNeg<<T as Hypot>::Output>
    where
        T: Hypot,
    {
        NoNeg { value: a.hypot(b) }
    }

    pub fn get(self) -> T {
        self.value
    }

    pub fn sqrt(self) -> NoNeg<<T as Sqrt>::Output>
    where
        T: Sqrt,
    {
        NoNeg {
            value: self.value.sqrt(),
        }
    }
}

impl<T, U> PartialEq<NoNeg<U>> for NoNeg<T>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &NoNeg<U>) -> bool {
        self.value.eq(&other.value)
    }
}

impl<T, U> PartialOrd<NoNeg<U>> for NoNeg<T>
where
    T: PartialOrd<U>,
{
    fn partial_cmp(&self, other: &NoNeg<U>) -> Option<std::cmp::Ordering> {
        self.value.partial_cmp(&other.value)
    }
}

impl<T, U> Add<NoNeg<U>> for NoNeg<T>
where
    T: Add<U>,
{
    type Output = NoNeg<<T as Add<U>>::Output>;

    fn add(self, rhs: NoNeg<U>) -> Self::Output {
        Self::Output {
            value: self.value + rhs.value,
        }
    }
}
