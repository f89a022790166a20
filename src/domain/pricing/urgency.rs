//! Urgency value object (0-100 "rush" percentage).

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::ValidationError;

/// How much of a rush the project is, from 0 (no rush) to 100 (maximum).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct Urgency(u8);

impl Urgency {
    pub const NONE: Self = Self(0);

    pub const MAX: Self = Self(100);

    /// Creates an Urgency, returning error if out of range.
    pub fn try_new(value: i64) -> Result<Self, ValidationError> {
        if !(0..=100).contains(&value) {
            return Err(ValidationError::out_of_range("urgency", 0, 100, value));
        }
        Ok(Self(value as u8))
    }

    /// Creates an Urgency, clamping to the valid range.
    pub fn saturating(value: u8) -> Self {
        Self(value.min(100))
    }

    pub fn value(&self) -> u8 {
        self.0
    }

    pub fn is_rush(&self) -> bool {
        self.0 > 0
    }
}

impl Default for Urgency {
    fn default() -> Self {
        Self::NONE
    }
}

impl TryFrom<i64> for Urgency {
    type Error = ValidationError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::try_new(value)
    }
}

impl From<Urgency> for u8 {
    fn from(urgency: Urgency) -> Self {
        urgency.0
    }
}

impl fmt::Display for Urgency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}% rush", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn try_new_accepts_bounds() {
        assert_eq!(Urgency::try_new(0).unwrap(), Urgency::NONE);
        assert_eq!(Urgency::try_new(100).unwrap(), Urgency::MAX);
    }

    #[test]
    fn try_new_rejects_out_of_range() {
        assert!(Urgency::try_new(-1).is_err());
        assert!(Urgency::try_new(101).is_err());
    }

    #[test]
    fn saturating_clamps() {
        assert_eq!(Urgency::saturating(250).value(), 100);
    }

    #[test]
    fn serializes_as_plain_integer() {
        assert_eq!(serde_json::to_string(&Urgency::try_new(35).unwrap()).unwrap(), "35");
        assert!(serde_json::from_str::<Urgency>("150").is_err());
    }

    #[test]
    fn display_shows_rush() {
        assert_eq!(Urgency::try_new(20).unwrap().to_string(), "20% rush");
        assert!(!Urgency::NONE.is_rush());
    }
}
