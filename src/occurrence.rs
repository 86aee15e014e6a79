// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// One materialized occurrence, the semantic equivalent of a single calendar
/// recurrence unit.
///
/// `Weekly` maps to a weekly recurrence rule bounded by an end date,
/// `ExplicitDates` to an enumerated recurrence-date set, `exceptions` to
/// dates excluded from a weekly rule, and `override_of` to a single-instance
/// override of one date within a parent weekly series. Serializing these into
/// calendar bytes is the consumer's job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Occurrence {
    /// Resolved location, if any.
    pub location: Option<String>,

    /// Wall-clock start time.
    pub start_time: NaiveTime,

    /// Wall-clock end time.
    pub end_time: NaiveTime,

    /// First concrete date of the occurrence.
    pub start_date: NaiveDate,

    /// How the occurrence repeats.
    pub recurrence: Recurrence,

    /// Dates excluded from a weekly pattern. Empty unless `recurrence` is
    /// [`Recurrence::Weekly`].
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub exceptions: Vec<NaiveDate>,

    /// Marks this occurrence as a per-date override of another occurrence's
    /// weekly series.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub override_of: Option<OverrideRef>,
}

/// Repetition pattern of an [`Occurrence`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Recurrence {
    /// Repeats every 7 days from the start date until `until`, inclusive.
    Weekly {
        /// Last date of the series.
        until: NaiveDate,
    },

    /// Happens exactly on the enumerated dates.
    ExplicitDates {
        /// Concrete dates, ascending.
        dates: Vec<NaiveDate>,
    },
}

/// Back-reference from an override occurrence to the series instance it
/// replaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverrideRef {
    /// Date of the replaced instance within the parent weekly series.
    pub recurrence_id: NaiveDate,

    /// Monotonically increasing revision counter, starting at 1 and reset
    /// per materialization call.
    pub sequence: u32,
}
