// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use chrono::{NaiveDate, NaiveTime, Weekday};
use serde::{Deserialize, Serialize};

/// A weekly timetable slot before any notation override is applied.
///
/// One slot is produced per spreadsheet cell by the upstream ETL step and
/// consumed once by [`materialize`](crate::materialize).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseSlot {
    /// Weekday the slot repeats on.
    pub weekday: Weekday,

    /// Wall-clock start time.
    pub start_time: NaiveTime,

    /// Wall-clock end time, strictly after `start_time`.
    pub end_time: NaiveTime,

    /// First day of the validity window, inclusive.
    pub range_start: NaiveDate,

    /// Last day of the validity window, inclusive.
    pub range_end: NaiveDate,

    /// Location used when the notation carries none.
    pub fallback_location: Option<String>,
}

impl BaseSlot {
    /// Creates a slot, validating the time and date ordering invariants.
    pub fn new(
        weekday: Weekday,
        start_time: NaiveTime,
        end_time: NaiveTime,
        range_start: NaiveDate,
        range_end: NaiveDate,
        fallback_location: Option<String>,
    ) -> Result<Self, SlotError> {
        if start_time >= end_time {
            return Err(SlotError::TimeOrder {
                start: start_time,
                end: end_time,
            });
        }
        if range_start > range_end {
            return Err(SlotError::DateOrder {
                start: range_start,
                end: range_end,
            });
        }

        Ok(Self {
            weekday,
            start_time,
            end_time,
            range_start,
            range_end,
            fallback_location,
        })
    }
}

/// Invariant violations when constructing a [`BaseSlot`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SlotError {
    /// The start time is not strictly before the end time.
    #[error("slot start time {start} is not before end time {end}")]
    TimeOrder {
        /// Offending start time.
        start: NaiveTime,
        /// Offending end time.
        end: NaiveTime,
    },

    /// The validity window starts after it ends.
    #[error("slot range start {start} is after range end {end}")]
    DateOrder {
        /// Offending range start.
        start: NaiveDate,
        /// Offending range end.
        end: NaiveDate,
    },
}
