//! OrderKey value object - sibling ordering
//!
//! Persistence layers send integers most of the time, but fractional keys
//! show up when a node is slotted between two siblings. Both are accepted;
//! keys compare with `f64::total_cmp` so sorting is total.

use std::cmp::Ordering;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Sortable sibling position
#[derive(Debug, Clone, Copy, Default)]
pub struct OrderKey(f64);

impl OrderKey {
    pub fn value(&self) -> f64 {
        self.0
    }

    /// The key as an integer, when it has no fractional part
    fn as_integer(&self) -> Option<i64> {
        let value = self.0;
        let integral = value.is_finite()
            && value.fract() == 0.0
            && value >= i64::MIN as f64
            && value <= i64::MAX as f64;
        integral.then_some(value as i64)
    }
}

impl PartialEq for OrderKey {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for OrderKey {}

impl PartialOrd for OrderKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for OrderKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl From<i32> for OrderKey {
    fn from(value: i32) -> Self {
        Self(f64::from(value))
    }
}

impl From<i64> for OrderKey {
    fn from(value: i64) -> Self {
        Self(value as f64)
    }
}

impl From<f64> for OrderKey {
    fn from(value: f64) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for OrderKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.as_integer() {
            Some(int) => write!(f, "{}", int),
            None => write!(f, "{}", self.0),
        }
    }
}

/// Integral keys go back out as integers so files round-trip unchanged
impl Serialize for OrderKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.as_integer() {
            Some(int) => serializer.serialize_i64(int),
            None => serializer.serialize_f64(self.0),
        }
    }
}

impl<'de> Deserialize<'de> for OrderKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        f64::deserialize(deserializer).map(Self)
    }
}
