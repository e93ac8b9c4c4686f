//! Recurrence encoding for the tracker's `(type, info)` schedule pair.
//!
//! # Design
//! The tracker models a repeat schedule as two integers: a `RepeatType`
//! discriminant and a `RepeatInfo` value whose meaning depends on the type.
//! For `SpecifiedDays` the info value is a positional digit sequence naming
//! active weekdays (1–7, Monday first), read as decimal digits rather than a
//! bitmask: `1234567` is every day, `12345` is weekdays only. For
//! `WithInterval` it is a plain day interval (7 = weekly, 14 = biweekly).

use crate::error::TranslateError;

/// Auxiliary integer paired with a [`RepeatType`]; its interpretation depends
/// on the type.
pub type RepeatInfo = u32;

/// Schedule kind understood by the tracker. Discriminants are fixed by the
/// wire contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepeatType {
    NoRepeat = 0,
    Monthly = 1,
    MonthlyDay = 2,
    SpecifiedDays = 3,
    WithInterval = 4,
}

impl RepeatType {
    /// The integer sent in the `taskRepeatType` payload field.
    pub fn code(self) -> u8 {
        self as u8
    }
}

/// Map a user-facing recurrence keyword to the tracker's `(type, info)` pair.
///
/// Exact, case-sensitive matching; anything outside the fixed vocabulary is
/// rejected. `NoRepeat`, `Monthly` and `MonthlyDay` are never produced here —
/// the form does not offer them — but remain valid values of the downstream
/// contract.
pub fn encode(keyword: &str) -> Result<(RepeatType, RepeatInfo), TranslateError> {
    match keyword {
        "daily" => Ok((RepeatType::SpecifiedDays, 1_234_567)),
        "weekly" => Ok((RepeatType::WithInterval, 7)),
        "weekdays" => Ok((RepeatType::SpecifiedDays, 12_345)),
        "biweekly" => Ok((RepeatType::WithInterval, 14)),
        _ => Err(TranslateError::InvalidRecurrenceKeyword),
    }
}
