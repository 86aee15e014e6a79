// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Compile human timetable notation into calendar recurrence descriptors.
//!
//! Spreadsheet timetables carry a free-text "location" cell that may encode
//! rooms, online delivery, start/end overrides, week ranges, explicit dates,
//! and exceptions (`"313 (WEEK 1-3) / ONLINE"`). This crate turns one such
//! string into a structured override tree ([`Item`]) and combines it with the
//! weekly timetable slot it belongs to ([`BaseSlot`]) to produce concrete
//! occurrence descriptors ([`Occurrence`]), each the semantic equivalent of
//! one calendar recurrence unit (weekly rule, explicit date set, exception
//! date, or single-instance override).
//!
//! Both steps are pure: parsing failures and out-of-range dates degrade to
//! "no information produced" and are reported through `tracing`, never as
//! errors. Reading spreadsheets and emitting calendar bytes are left to the
//! callers on either side.

mod datetime;
mod materialize;
mod notation;
mod occurrence;
mod slot;

pub use crate::datetime::{nearest_weekday, nth_week_date};
pub use crate::materialize::materialize;
pub use crate::notation::{Item, NotationParser};
pub use crate::occurrence::{Occurrence, OverrideRef, Recurrence};
pub use crate::slot::{BaseSlot, SlotError};
