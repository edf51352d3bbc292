//! Closed id intervals for range queries

use super::UserId;

/// The ids `start..=start + length - 1`
///
/// Bounds are computed in 128-bit arithmetic and clamped to the `i64`
/// domain, so extreme inputs never overflow. A non-positive `length`
/// describes an empty interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdRange {
    pub start: UserId,
    pub length: i64,
}

impl IdRange {
    pub fn new(start: UserId, length: i64) -> Self {
        Self { start, length }
    }

    /// Inclusive `(first, last)` ids, or `None` when the interval is empty
    pub fn bounds(&self) -> Option<(UserId, UserId)> {
        if self.length <= 0 {
            return None;
        }

        let end = i128::from(self.start) + i128::from(self.length) - 1;
        let end = end.clamp(i128::from(i64::MIN), i128::from(i64::MAX)) as i64;
        Some((self.start, end))
    }
}
