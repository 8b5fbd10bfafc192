use crate::types::errors::AmountError;
use serde::{Serialize, Serializer};
use std::fmt;
use std::fmt::{Display, Formatter};
use std::ops::{Add, AddAssign};

/// A strictly positive, finite transaction amount.
///
/// Amounts are plain `f64` values. No rounding or currency precision is applied, so sums over
/// amounts that are not exactly representable should be compared with a tolerance.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Amount(f64);

impl Amount {
    pub fn new(value: f64) -> Result<Self, AmountError> {
        if !value.is_finite() {
            return Err(AmountError::NotFinite);
        }

        if value <= 0.0 {
            return Err(AmountError::NotPositive);
        }

        Ok(Amount(value))
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

impl Add<Amount> for f64 {
    type Output = f64;

    fn add(self, rhs: Amount) -> f64 {
        self + rhs.0
    }
}

impl AddAssign<Amount> for f64 {
    fn add_assign(&mut self, rhs: Amount) {
        *self += rhs.0;
    }
}

impl Display for Amount {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.0)
    }
}

impl Serialize for Amount {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_f64(self.0)
    }
}
