// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::sync::OnceLock;

use chrono::{NaiveDate, NaiveTime};
use regex::{Captures, Regex};

use crate::notation::Item;

/// Day-first date token: `D{1,2}[/.]D{1,2}`.
const DATE: &str = r"\d{1,2}[/.]\d{1,2}";

/// Time token: `D{1,2}[:.]D{1,2}`.
const TIME: &str = r"\d{1,2}[:.]\d{1,2}";

/// Parser for free-text location/modifier notation.
///
/// The notation writes dates without a year, so the parser is constructed
/// with the year of the timetable cycle it belongs to. Parsing is pure:
/// the same input always yields the same tree, and malformed input yields
/// `None` rather than an error.
#[derive(Debug, Clone, Copy)]
pub struct NotationParser {
    year: i32,
}

impl NotationParser {
    /// Creates a parser resolving year-less date tokens against `year`.
    pub fn new(year: i32) -> Self {
        Self { year }
    }

    /// Parses one notation string into an override tree.
    ///
    /// Pattern families are tried in a fixed precedence order and the first
    /// structural match wins; reordering them would let general patterns
    /// swallow specific ones. Returns `None` when no family matches.
    pub fn parse(&self, text: &str) -> Option<Item> {
        self.parse_clause(text, false)
    }

    fn parse_clause(&self, text: &str, from_parent: bool) -> Option<Item> {
        let x = normalize(text);
        let x = x.as_str();

        if let Some(location) = self.location(x) {
            return Some(Item::at_location(location));
        }
        if let Some(item) = self.modifier(x) {
            return Some(item);
        }
        if let Some(item) = self.location_with_modifier(x) {
            return Some(item);
        }
        if let Some(item) = self.two_modifiers(x) {
            return Some(item);
        }
        if let Some(item) = self.location_with_two_modifiers(x) {
            return Some(item);
        }
        if let Some(item) = self.three_modifiers(x) {
            return Some(item);
        }
        if let Some(item) = self.location_with_three_modifiers(x) {
            return Some(item);
        }

        // Only one nesting level.
        if from_parent {
            return None;
        }

        if let Some(item) = self.nested_plain(x) {
            return Some(item);
        }
        if let Some(item) = self.nested_slash(x) {
            return Some(item);
        }
        if let Some(item) = self.nested_clause_list(x) {
            return Some(item);
        }
        if let Some(item) = self.nested_common_modifier(x) {
            return Some(item);
        }
        if let Some(item) = self.nested_wrapped(x) {
            return Some(item);
        }
        if let Some(item) = self.nested_paren_pair(x) {
            return Some(item);
        }
        if let Some(item) = self.nested_tail(x) {
            return Some(item);
        }

        None
    }

    /// Matches one location atom, returning its canonical form.
    fn location(&self, y: &str) -> Option<String> {
        let g = grammar();

        if let Some(c) = g.bare_number.captures(y) {
            return Some(c[1].to_string());
        }
        if y == "?" {
            return Some("?".to_string());
        }
        if let Some(c) = g.room.captures(y) {
            return Some(c[1].to_string());
        }
        if g.online.is_match(y) || g.online_tba.is_match(y) {
            return Some(y.to_string());
        }
        if let Some(c) = g.location_list.captures(y) {
            let atoms: Vec<&str> = c[1].split('/').map(str::trim).collect();
            return Some(atoms.join("/"));
        }

        None
    }

    /// Matches exactly one modifier atom.
    fn modifier(&self, y: &str) -> Option<Item> {
        self.starts_from(y)
            .or_else(|| self.starts_at(y))
            .or_else(|| self.week(y))
            .or_else(|| self.on(y))
            .or_else(|| self.till(y))
            .or_else(|| self.except(y))
    }

    fn starts_from(&self, y: &str) -> Option<Item> {
        let c = grammar().starts_from.captures(y)?;
        Some(Item {
            starts_from: Some(self.parse_date(&c[1])?),
            ..Item::default()
        })
    }

    fn starts_at(&self, y: &str) -> Option<Item> {
        let c = grammar().starts_at.captures(y)?;
        Some(Item {
            starts_at: Some(parse_time(&c[1])?),
            ..Item::default()
        })
    }

    fn week(&self, y: &str) -> Option<Item> {
        let c = grammar().week.captures(y)?;
        let mut weeks = Vec::new();
        for part in c[1].split(',') {
            let part = part.trim();
            match part.split_once('-') {
                Some((from, to)) => {
                    let from: u32 = from.parse().ok()?;
                    let to: u32 = to.parse().ok()?;
                    weeks.extend(from..=to);
                }
                None => weeks.push(part.parse().ok()?),
            }
        }
        // A reversed range expands to nothing but the token still matched,
        // so the rest of the clause (the location in particular) survives.
        Some(Item {
            on_weeks: Some(weeks),
            ..Item::default()
        })
    }

    fn on(&self, y: &str) -> Option<Item> {
        let c = grammar().on.captures(y)?;
        Some(Item {
            on: Some(self.date_list(&c[1])?),
            ..Item::default()
        })
    }

    fn till(&self, y: &str) -> Option<Item> {
        let c = grammar().till.captures(y)?;
        Some(Item {
            till: Some(parse_time(&c[1])?),
            ..Item::default()
        })
    }

    fn except(&self, y: &str) -> Option<Item> {
        let c = grammar().except.captures(y)?;
        Some(Item {
            except: Some(self.date_list(&c[1])?),
            ..Item::default()
        })
    }

    /// Family 3: location atom followed by exactly one modifier.
    fn location_with_modifier(&self, x: &str) -> Option<Item> {
        let c = grammar().location_modifier.captures(x)?;
        let location = self.location(&c["location"])?;
        let item = self.modifier(&c["rest"])?;
        Some(Item {
            location: Some(location),
            ..item
        })
    }

    /// Family 4: exactly two modifier atoms back to back.
    fn two_modifiers(&self, x: &str) -> Option<Item> {
        let c = grammar().two_modifiers.captures(x)?;
        let first = self.modifier(&c["first"])?;
        let second = self.modifier(&c["second"])?;
        Some(first.merged(second))
    }

    /// Family 5: location atom plus two combined modifiers.
    fn location_with_two_modifiers(&self, x: &str) -> Option<Item> {
        let c = grammar().location_two_modifiers.captures(x)?;
        let location = self.location(&c["location"])?;
        let item = self.two_modifiers(&c["rest"])?;
        Some(Item {
            location: Some(location),
            ..item
        })
    }

    /// Family 6: exactly three modifier atoms combined.
    fn three_modifiers(&self, x: &str) -> Option<Item> {
        let c = grammar().three_modifiers.captures(x)?;
        let first = self.modifier(&c["first"])?;
        let second = self.modifier(&c["second"])?;
        let third = self.modifier(&c["third"])?;
        Some(first.merged(second).merged(third))
    }

    /// Family 6, location-prefixed form.
    fn location_with_three_modifiers(&self, x: &str) -> Option<Item> {
        let c = grammar().location_three_modifiers.captures(x)?;
        let location = self.location(&c["location"])?;
        let item = self.three_modifiers(&c["rest"])?;
        Some(Item {
            location: Some(location),
            ..item
        })
    }

    /// Family 7a: `location (free text)` where the free text parses on its
    /// own, e.g. `317 (421 ON 11/10)`.
    fn nested_plain(&self, x: &str) -> Option<Item> {
        let c = grammar().nest_plain.captures(x)?;
        let location = self.location(&c["location"])?;
        let inner = self.parse_clause(&c["rest"], true)?;
        Some(Item {
            location: Some(location),
            nested: Some(vec![inner]),
            ..Item::default()
        })
    }

    /// Family 7b: `location (modifier) / another-clause`, e.g.
    /// `313 (WEEK 1-3) / ONLINE`.
    fn nested_slash(&self, x: &str) -> Option<Item> {
        let c = grammar().nest_slash.captures(x)?;
        let location = self.location(&c["location"])?;
        let mut item = self.modifier(&c["modifier"])?;
        let inner = self.parse_clause(&c["rest"], true)?;
        item.location = Some(location);
        item.nested = Some(vec![inner]);
        Some(item)
    }

    /// Family 7c: two or three `location modifier` clauses joined by
    /// commas, e.g. `105 ON 15/10, 106 ON 29/10, ONLINE ON 05/11`. The
    /// first clause becomes the root, the rest its nested siblings.
    fn nested_clause_list(&self, x: &str) -> Option<Item> {
        let g = grammar();

        if let Some(c) = g.nest_pair.captures(x)
            && let Some(mut root) = self.located_modifier(&c, "l1", "m1")
            && let Some(second) = self.located_modifier(&c, "l2", "m2")
        {
            root.nested = Some(vec![second]);
            return Some(root);
        }

        if let Some(c) = g.nest_triple.captures(x)
            && let Some(mut root) = self.located_modifier(&c, "l1", "m1")
            && let Some(second) = self.located_modifier(&c, "l2", "m2")
            && let Some(third) = self.located_modifier(&c, "l3", "m3")
        {
            root.nested = Some(vec![second, third]);
            return Some(root);
        }

        None
    }

    /// Family 7d: `location (modifier), another-clause (common-modifier)`,
    /// e.g. `ONLINE ON 13/09, 108 ON 01/11 (STARTS AT 9:00)`. The trailing
    /// common modifier becomes the root; its time fields propagate into the
    /// nested clause unless the clause set them itself, and the leading
    /// clause's dates become the root's dates.
    fn nested_common_modifier(&self, x: &str) -> Option<Item> {
        let c = grammar().nest_common.captures(x)?;
        let location = self.location(&c["location"])?;
        let modifier = self.modifier(&c["modifier"])?;
        let mut inner = self.parse_clause(&c["rest"], true)?;
        let mut root = self.modifier(&c["common"])?;

        root.location = Some(location);
        if root.starts_at.is_some() && inner.starts_at.is_none() {
            inner.starts_at = root.starts_at;
        }
        if root.till.is_some() && inner.till.is_none() {
            inner.till = root.till;
        }
        root.on = modifier.on;
        root.nested = Some(vec![inner]);
        Some(root)
    }

    /// Family 7e: `location1 (location2 modifier) another-clause`, e.g.
    /// `314 (312 ON 12/09,19/09,26/09) 301 ON 03/10`. The outer location
    /// wraps two nested items.
    fn nested_wrapped(&self, x: &str) -> Option<Item> {
        let c = grammar().nest_wrap.captures(x)?;
        let outer = self.location(&c["outer"])?;
        let inner_location = self.location(&c["inner"])?;
        let mut first = self.modifier(&c["modifier"])?;
        let second = self.parse_clause(&c["rest"], true)?;
        first.location = Some(inner_location);
        Some(Item {
            location: Some(outer),
            nested: Some(vec![first, second]),
            ..Item::default()
        })
    }

    /// Family 7f: `location (location1 modifier1, location2 modifier2)`,
    /// e.g. `107 (106 НА 16.09, 105 НА 07.10)`.
    fn nested_paren_pair(&self, x: &str) -> Option<Item> {
        let c = grammar().nest_paren_pair.captures(x)?;
        let outer = self.location(&c["outer"])?;
        let first = self.located_modifier(&c, "l1", "m1")?;
        let second = self.located_modifier(&c, "l2", "m2")?;
        Some(Item {
            location: Some(outer),
            nested: Some(vec![first, second]),
            ..Item::default()
        })
    }

    /// Family 7g: `location modifier (location2 modifier2)`, e.g.
    /// `317 ON 15/02, 22/02 (ONLINE ON 26/04)`. The root carries its own
    /// modifier plus one nested item.
    fn nested_tail(&self, x: &str) -> Option<Item> {
        let c = grammar().nest_tail.captures(x)?;
        let mut root = self.located_modifier(&c, "location", "modifier")?;
        let inner = self.located_modifier(&c, "l2", "m2")?;
        root.nested = Some(vec![inner]);
        Some(root)
    }

    /// Builds a modifier item with its location set, from two named groups.
    fn located_modifier(&self, c: &Captures<'_>, loc: &str, modifier: &str) -> Option<Item> {
        let location = self.location(c.name(loc)?.as_str())?;
        let mut item = self.modifier(c.name(modifier)?.as_str())?;
        item.location = Some(location);
        Some(item)
    }

    /// Parses a day-first `D/D` or `D.D` token against the parser's year.
    /// Invalid calendar dates make the token fail to match.
    fn parse_date(&self, token: &str) -> Option<NaiveDate> {
        let token = token.replace('.', "/");
        let (day, month) = token.split_once('/')?;
        NaiveDate::from_ymd_opt(self.year, month.parse().ok()?, day.parse().ok()?)
    }

    fn date_list(&self, text: &str) -> Option<Vec<NaiveDate>> {
        text.split(',').map(|d| self.parse_date(d.trim())).collect()
    }
}

/// Parses an `H:M` or `H.M` token.
fn parse_time(token: &str) -> Option<NaiveTime> {
    let token = token.replace('.', ":");
    let (hour, minute) = token.split_once(':')?;
    NaiveTime::from_hms_opt(hour.parse().ok()?, minute.parse().ok()?, 0)
}

/// Uppercases, strips the parenthesized online markers, and rewrites the
/// `AND`/`И` conjunction to a comma so downstream patterns only need to
/// recognize comma-separated clauses.
fn normalize(text: &str) -> String {
    let x = text.to_uppercase();
    let x = x.replace("(ONLINE)", "ONLINE").replace("(ОНЛАЙН)", "ОНЛАЙН");
    grammar().and_separator.replace_all(x.trim(), ", ").into_owned()
}

struct Grammar {
    and_separator: Regex,

    // Location atoms, anchored.
    bare_number: Regex,
    room: Regex,
    online: Regex,
    online_tba: Regex,
    location_list: Regex,

    // Modifier atoms, anchored.
    starts_from: Regex,
    starts_at: Regex,
    week: Regex,
    on: Regex,
    till: Regex,
    except: Regex,

    // Combined families, anchored.
    location_modifier: Regex,
    two_modifiers: Regex,
    location_two_modifiers: Regex,
    three_modifiers: Regex,
    location_three_modifiers: Regex,

    // Nested families, anchored, in precedence order.
    nest_plain: Regex,
    nest_slash: Regex,
    nest_pair: Regex,
    nest_triple: Regex,
    nest_common: Regex,
    nest_wrap: Regex,
    nest_paren_pair: Regex,
    nest_tail: Regex,
}

fn grammar() -> &'static Grammar {
    static GRAMMAR: OnceLock<Grammar> = OnceLock::new();
    GRAMMAR.get_or_init(Grammar::compile)
}

impl Grammar {
    fn compile() -> Self {
        let online = "(?:ONLINE|ОНЛАЙН)";

        // Unnamed fragments for composition; order of alternatives is
        // load-bearing, the specific atoms come before the general ones.
        let loc = format!(
            r"(?:\d+|\?|ROOM\s*#?\s*\d+|{online}|{online}\s*\(TBA\)|(?:\d|ONLINE|ОНЛАЙН)+(?:\s*/\s*(?:\d|ONLINE|ОНЛАЙН)+)+)"
        );
        let starts_from = format!(r"\(?(?:STARTS ON|STARTS FROM|FROM|С)\s*{DATE}\)?");
        let starts_at = format!(r"\(?(?:STARTS|STARTS AT|НАЧАЛО В)\s*{TIME}\)?");
        let week = r"\(?WEEK\s*\d+(?:-\d+)?(?:,\s*\d+(?:-\d+)?)*(?:\s+ONLY)?\)?".to_string();
        let on = format!(r"\(?(?:ON|ONLY ON|НА|ТОЛЬКО НА|ТОЛЬКО)\s*{DATE}(?:,\s*{DATE})*\)?");
        let till = format!(r"\(?TILL\s*{TIME}\)?");
        let except = format!(r"\(?(?:EXCEPT|КРОМЕ)\s*{DATE}(?:,\s*{DATE})*\)?");
        let modifier = format!(r"(?:{starts_from}|{starts_at}|{week}|{on}|{till}|{except})");
        let two = format!(r"\(?{modifier}\)?\s*\(?{modifier}\)?");
        let three = format!(r"\(?{modifier}\)?\s*\(?{modifier}\)?\s*\(?{modifier}\)?");

        let re = |pattern: &str| Regex::new(pattern).unwrap();

        Self {
            and_separator: re(r"\s+(?:AND|И)\s+"),

            bare_number: re(r"^(\d+)$"),
            room: re(r"^ROOM\s*#?\s*(\d+)$"),
            online: re(&format!("^{online}$")),
            online_tba: re(&format!(r"^{online}\s*\(TBA\)$")),
            location_list: re(
                r"^((?:\d|ONLINE|ОНЛАЙН)+(?:\s*/\s*(?:\d|ONLINE|ОНЛАЙН)+)+)$",
            ),

            starts_from: re(&format!(
                r"^\(?(?:STARTS ON|STARTS FROM|FROM|С)\s*({DATE})\)?$"
            )),
            starts_at: re(&format!(
                r"^\(?(?:STARTS|STARTS AT|НАЧАЛО В)\s*({TIME})\)?$"
            )),
            week: re(r"^\(?WEEK\s*(\d+(?:-\d+)?(?:,\s*\d+(?:-\d+)?)*)(?:\s+ONLY)?\)?$"),
            on: re(&format!(
                r"^\(?(?:ON|ONLY ON|НА|ТОЛЬКО НА|ТОЛЬКО)\s*({DATE}(?:,\s*{DATE})*)\)?$"
            )),
            till: re(&format!(r"^\(?TILL\s*({TIME})\)?$")),
            except: re(&format!(r"^\(?(?:EXCEPT|КРОМЕ)\s*({DATE}(?:,\s*{DATE})*)\)?$")),

            location_modifier: re(&format!(
                r"^(?P<location>{loc}) \(?(?P<rest>{modifier})\)?$"
            )),
            two_modifiers: re(&format!(
                r"^\(?(?P<first>{modifier})\)?\s*\(?(?P<second>{modifier})\)?$"
            )),
            location_two_modifiers: re(&format!(r"^(?P<location>{loc}) \(?(?P<rest>{two})\)?$")),
            three_modifiers: re(&format!(
                r"^\(?(?P<first>{modifier})\)?\s*\(?(?P<second>{modifier})\)?\s*\(?(?P<third>{modifier})\)?$"
            )),
            location_three_modifiers: re(&format!(
                r"^(?P<location>{loc}) \(?(?P<rest>{three})\)?$"
            )),

            nest_plain: re(&format!(r"^(?P<location>{loc})\s*\(?(?P<rest>.+)\)?$")),
            nest_slash: re(&format!(
                r"^(?P<location>{loc})\s*\(?(?P<modifier>{modifier})\)?\s*/\s*(?P<rest>.+)$"
            )),
            nest_pair: re(&format!(
                r"^(?P<l1>{loc})\s*(?P<m1>{modifier})\s*,\s*(?P<l2>{loc})\s*(?P<m2>{modifier})$"
            )),
            nest_triple: re(&format!(
                r"^(?P<l1>{loc})\s*(?P<m1>{modifier})\s*,\s*(?P<l2>{loc})\s*(?P<m2>{modifier})\s*,\s*(?P<l3>{loc})\s*(?P<m3>{modifier})$"
            )),
            nest_common: re(&format!(
                r"^(?P<location>{loc})\s*\(?(?P<modifier>{modifier})\)?\s*,\s*(?P<rest>.+?)\s*\(?(?P<common>{modifier})\)?$"
            )),
            nest_wrap: re(&format!(
                r"^(?P<outer>{loc})\s*\(?(?P<inner>{loc})\s*(?P<modifier>{modifier})\)?\s*(?P<rest>.+)$"
            )),
            nest_paren_pair: re(&format!(
                r"^(?P<outer>{loc})\s*\((?P<l1>{loc})\s*(?P<m1>{modifier}),\s*(?P<l2>{loc})\s*(?P<m2>{modifier})\)$"
            )),
            nest_tail: re(&format!(
                r"^(?P<location>{loc})\s*(?P<modifier>{modifier})\s*\((?P<l2>{loc})\s*(?P<m2>{modifier})\)$"
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parser() -> NotationParser {
        NotationParser::new(2024)
    }

    fn date(m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, m, d).unwrap()
    }

    fn time(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn test_normalize() {
        assert_eq!(normalize("  online  "), "ONLINE");
        assert_eq!(normalize("105/ (online)"), "105/ ONLINE");
        assert_eq!(normalize("only on 31/08 and 14/09"), "ONLY ON 31/08, 14/09");
        assert_eq!(normalize("на 13/09 и 20/09"), "НА 13/09, 20/09");
    }

    #[test]
    fn test_simple_location() {
        assert_eq!(parser().parse("303"), Some(Item::at_location("303")));
        assert_eq!(parser().parse("?"), Some(Item::at_location("?")));
        assert_eq!(parser().parse("room #107"), Some(Item::at_location("107")));
        assert_eq!(parser().parse("online"), Some(Item::at_location("ONLINE")));
    }

    #[test]
    fn test_slash_location_list_keeps_order() {
        assert_eq!(
            parser().parse("106/313/314"),
            Some(Item::at_location("106/313/314"))
        );
        assert_eq!(
            parser().parse("105/ (ONLINE)"),
            Some(Item::at_location("105/ONLINE"))
        );
    }

    #[test]
    fn test_single_modifier() {
        assert_eq!(
            parser().parse("STARTS FROM 21/09"),
            Some(Item {
                starts_from: Some(date(9, 21)),
                ..Item::default()
            })
        );
        assert_eq!(
            parser().parse("TILL 18:00"),
            Some(Item {
                till: Some(time(18, 0)),
                ..Item::default()
            })
        );
    }

    #[test]
    fn test_week_ranges_expand() {
        assert_eq!(
            parser().parse("WEEK 2-4 ONLY"),
            Some(Item {
                on_weeks: Some(vec![2, 3, 4]),
                ..Item::default()
            })
        );
        assert_eq!(
            parser().parse("105 (WEEK 2, 4 ONLY)"),
            Some(Item {
                location: Some("105".into()),
                on_weeks: Some(vec![2, 4]),
                ..Item::default()
            })
        );
    }

    #[test]
    fn test_reversed_week_range_expands_to_nothing_but_keeps_location() {
        assert_eq!(
            parser().parse("105 (WEEK 4-2)"),
            Some(Item {
                location: Some("105".into()),
                on_weeks: Some(vec![]),
                ..Item::default()
            })
        );
    }

    #[test]
    fn test_two_modifiers_merge_left_to_right() {
        let expected = Some(Item {
            starts_at: Some(time(18, 0)),
            till: Some(time(21, 0)),
            ..Item::default()
        });
        assert_eq!(parser().parse("STARTS AT 18:00 TILL 21:00"), expected);
        assert_eq!(parser().parse("TILL 21:00 STARTS AT 18:00"), expected);
    }

    #[test]
    fn test_specific_family_wins_over_general() {
        // A lone location must not be eaten by the slash-list or nested
        // families.
        assert_eq!(parser().parse("ONLINE"), Some(Item::at_location("ONLINE")));
        // A location plus one modifier must not parse as a nested tree.
        let item = parser().parse("313 (STARTS FROM 21/09)").unwrap();
        assert_eq!(item.nested, None);
        assert_eq!(item.starts_from, Some(date(9, 21)));
    }

    #[test]
    fn test_nesting_depth_is_bounded() {
        let item = parser().parse("313 (WEEK 1-3) / ONLINE").unwrap();
        let nested = item.nested.unwrap();
        assert_eq!(nested.len(), 1);
        assert!(nested.iter().all(|n| n.nested.is_none()));
    }

    #[test]
    fn test_parse_is_idempotent() {
        for text in ["303", "105 (WEEK 2-3 ONLY)", "460 EXCEPT 28/11", "???"] {
            assert_eq!(parser().parse(text), parser().parse(text));
        }
    }

    #[test]
    fn test_unparsed_returns_none() {
        assert_eq!(parser().parse("ELECTIVE COURSES ON PHYSICAL EDUCATION"), None);
        assert_eq!(parser().parse(""), None);
        assert_eq!(parser().parse("???"), None);
    }

    #[test]
    fn test_invalid_calendar_date_fails_token() {
        assert_eq!(parser().parse("ON 31/02"), None);
        assert_eq!(parser().parse("ON 29/02"), {
            // 2024 is a leap year
            Some(Item {
                on: Some(vec![date(2, 29)]),
                ..Item::default()
            })
        });
    }

    #[test]
    fn test_invalid_time_fails_token() {
        assert_eq!(parser().parse("TILL 25:00"), None);
    }

    #[test]
    fn test_except_dates() {
        assert_eq!(
            parser().parse("460 EXCEPT 28/11"),
            Some(Item {
                location: Some("460".into()),
                except: Some(vec![date(11, 28)]),
                ..Item::default()
            })
        );
    }

    #[test]
    fn test_cyrillic_keywords() {
        assert_eq!(
            parser().parse("ОНЛАЙН (С 25.09)"),
            Some(Item {
                location: Some("ОНЛАЙН".into()),
                starts_from: Some(date(9, 25)),
                ..Item::default()
            })
        );
    }
}
