// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use chrono::{NaiveDate, NaiveTime, TimeDelta};

use crate::datetime::{nearest_weekday, nth_week_date};
use crate::notation::Item;
use crate::occurrence::{Occurrence, OverrideRef, Recurrence};
use crate::slot::BaseSlot;

/// Combines a weekly timetable slot with a parsed override tree into
/// concrete occurrence descriptors.
///
/// Total and pure: any valid input maps to a descriptor list without errors.
/// The list is empty only when every explicit date falls outside the slot's
/// validity window, which is reported as a warning. Nested clauses that
/// carry no dates after week normalization are dropped with a warning
/// rather than merged into the root.
pub fn materialize(slot: &BaseSlot, tree: Option<&Item>) -> Vec<Occurrence> {
    let Some(item) = tree else {
        return vec![Occurrence {
            location: slot.fallback_location.clone(),
            start_time: slot.start_time,
            end_time: slot.end_time,
            start_date: nearest_weekday(slot.range_start, slot.weekday),
            recurrence: Recurrence::Weekly {
                until: slot.range_end,
            },
            exceptions: Vec::new(),
            override_of: None,
        }];
    };

    // Effective values for the root: notation fields override the slot,
    // a bare `starts_at` shifts both times keeping the slot duration, and
    // `till` then overrides the end time directly.
    let location = item
        .location
        .clone()
        .or_else(|| slot.fallback_location.clone());
    let start_anchor = item.starts_from.unwrap_or(slot.range_start);
    let (start_time, end_time) = resolve_times(slot.start_time, slot.end_time, item);
    let duration = end_time.signed_duration_since(start_time);

    let dates = normalized_dates(item, start_anchor, slot);

    // Nested clauses without any date after week normalization cannot be
    // attached to either recurrence shape and are dropped.
    let mut dated = Vec::new();
    let mut undated = 0usize;
    for nested in item.nested.as_deref().unwrap_or_default() {
        let anchor = nested.starts_from.unwrap_or(start_anchor);
        let nested_dates = normalized_dates(nested, anchor, slot);
        if nested_dates.is_empty() {
            undated += 1;
        } else {
            dated.push((nested, nested_dates));
        }
    }
    if undated > 0 {
        tracing::warn!(
            count = undated,
            "nested clauses without explicit dates are not supported, dropping them"
        );
    }

    if dates.is_empty() {
        let root = Occurrence {
            location,
            start_time,
            end_time,
            start_date: nearest_weekday(start_anchor, slot.weekday),
            recurrence: Recurrence::Weekly {
                until: slot.range_end,
            },
            exceptions: item.except.clone().unwrap_or_default(),
            override_of: None,
        };
        weekly_root(slot, root, duration, &dated)
    } else {
        let in_range_dates: Vec<NaiveDate> =
            dates.into_iter().filter(|d| in_range(slot, d)).collect();
        let Some(&first) = in_range_dates.first() else {
            tracing::warn!(
                range_start = %slot.range_start,
                range_end = %slot.range_end,
                "all explicit dates fall outside the slot range, producing no occurrences"
            );
            return Vec::new();
        };
        let root = Occurrence {
            location,
            start_time,
            end_time,
            start_date: first,
            recurrence: Recurrence::ExplicitDates {
                dates: in_range_dates,
            },
            exceptions: Vec::new(),
            override_of: None,
        };
        explicit_root(slot, root, duration, &dated)
    }
}

/// The root repeats weekly; dated nested items override single instances of
/// the series. Overrides come first, the root series last, with sequence
/// numbers increasing monotonically per materialization call.
fn weekly_root(
    slot: &BaseSlot,
    root: Occurrence,
    duration: TimeDelta,
    dated: &[(&Item, Vec<NaiveDate>)],
) -> Vec<Occurrence> {
    let mut occurrences = Vec::new();
    let mut sequence = 0;

    for (nested, nested_dates) in dated {
        for date in nested_dates.iter().copied().filter(|d| in_range(slot, d)) {
            sequence += 1;
            let (location, start_time, end_time) = resolve_nested(nested, &root, duration);
            occurrences.push(Occurrence {
                location,
                start_time,
                end_time,
                start_date: date,
                recurrence: Recurrence::ExplicitDates { dates: vec![date] },
                exceptions: Vec::new(),
                override_of: Some(OverrideRef {
                    recurrence_id: date,
                    sequence,
                }),
            });
        }
    }

    occurrences.push(root);
    occurrences
}

/// The root happens on explicit dates; dated nested items become
/// independent explicit-date occurrences after the root. Nested items with
/// no date left inside the range are skipped.
fn explicit_root(
    slot: &BaseSlot,
    root: Occurrence,
    duration: TimeDelta,
    dated: &[(&Item, Vec<NaiveDate>)],
) -> Vec<Occurrence> {
    let mut occurrences = vec![root];

    for (nested, nested_dates) in dated {
        let nested_in_range: Vec<NaiveDate> = nested_dates
            .iter()
            .copied()
            .filter(|d| in_range(slot, d))
            .collect();
        let Some(&nested_first) = nested_in_range.first() else {
            continue;
        };
        let (location, start_time, end_time) = resolve_nested(nested, &occurrences[0], duration);
        occurrences.push(Occurrence {
            location,
            start_time,
            end_time,
            start_date: nested_first,
            recurrence: Recurrence::ExplicitDates {
                dates: nested_in_range,
            },
            exceptions: Vec::new(),
            override_of: None,
        });
    }
    occurrences
}

fn in_range(slot: &BaseSlot, date: &NaiveDate) -> bool {
    (slot.range_start..=slot.range_end).contains(date)
}

/// Applies an item's `starts_at`/`till` to a pair of times. A bare
/// `starts_at` shifts both ends keeping the duration; `till` then sets the
/// end directly.
fn resolve_times(start: NaiveTime, end: NaiveTime, item: &Item) -> (NaiveTime, NaiveTime) {
    let mut start_time = start;
    let mut end_time = end;
    if let Some(at) = item.starts_at {
        let duration = end_time.signed_duration_since(start_time);
        start_time = at;
        end_time = at.overflowing_add_signed(duration).0;
    }
    if let Some(till) = item.till {
        end_time = till;
    }
    (start_time, end_time)
}

/// Resolves a nested item's location and times, inheriting from the root
/// where the item sets nothing. `duration` is the root's effective duration.
fn resolve_nested(
    nested: &Item,
    root: &Occurrence,
    duration: TimeDelta,
) -> (Option<String>, NaiveTime, NaiveTime) {
    let location = nested.location.clone().or_else(|| root.location.clone());
    let mut start_time = root.start_time;
    let mut end_time = root.end_time;
    if let Some(at) = nested.starts_at {
        start_time = at;
        end_time = at.overflowing_add_signed(duration).0;
    }
    if let Some(till) = nested.till {
        end_time = till;
    }
    (location, start_time, end_time)
}

/// Absorbs `on_weeks` into `on`: each 1-based week index becomes the date of
/// that week's occurrence of the slot weekday, counted from `anchor`. The
/// result is deduplicated and ascending.
fn normalized_dates(item: &Item, anchor: NaiveDate, slot: &BaseSlot) -> Vec<NaiveDate> {
    let mut dates: Vec<NaiveDate> = item.on.clone().unwrap_or_default();
    for &week in item.on_weeks.as_deref().unwrap_or_default() {
        if let Some(date) = nth_week_date(anchor, slot.weekday, week) {
            dates.push(date);
        }
    }
    dates.sort_unstable();
    dates.dedup();
    dates
}
