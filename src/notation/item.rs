// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// Parsed override tree of one notation string.
///
/// Every field is optional; the parser never returns an item with all fields
/// unset. Nesting is at most one level deep: items inside `nested` never
/// carry their own `nested`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Room id, an online marker, `"?"`, or a slash-joined list of such
    /// tokens.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,

    /// Overrides the slot's range start.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub starts_from: Option<NaiveDate>,

    /// Overrides the slot's start time, preserving the slot duration unless
    /// `till` is also set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub starts_at: Option<NaiveTime>,

    /// Overrides the slot's end time directly.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub till: Option<NaiveTime>,

    /// 1-based week indices relative to the first occurrence of the slot's
    /// weekday, ascending.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub on_weeks: Option<Vec<u32>>,

    /// Explicit dates the occurrence happens on.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub on: Option<Vec<NaiveDate>>,

    /// Explicit dates excluded from a weekly pattern.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub except: Option<Vec<NaiveDate>>,

    /// Child override items, one level at most.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nested: Option<Vec<Item>>,
}

impl Item {
    /// Creates an item carrying only a location.
    pub fn at_location(location: impl Into<String>) -> Self {
        Self {
            location: Some(location.into()),
            ..Self::default()
        }
    }

    /// Whether no field is set.
    pub fn is_empty(&self) -> bool {
        self.location.is_none()
            && self.starts_from.is_none()
            && self.starts_at.is_none()
            && self.till.is_none()
            && self.on_weeks.is_none()
            && self.on.is_none()
            && self.except.is_none()
            && self.nested.is_none()
    }

    /// Merges `other` into `self`; fields set in `other` win.
    ///
    /// Combined-modifier clauses are merged left to right, so the
    /// last-parsed modifier takes precedence when both set the same field.
    pub(crate) fn merged(self, other: Item) -> Item {
        Item {
            location: other.location.or(self.location),
            starts_from: other.starts_from.or(self.starts_from),
            starts_at: other.starts_at.or(self.starts_at),
            till: other.till.or(self.till),
            on_weeks: other.on_weeks.or(self.on_weeks),
            on: other.on.or(self.on),
            except: other.except.or(self.except),
            nested: other.nested.or(self.nested),
        }
    }
}
