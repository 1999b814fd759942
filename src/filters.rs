//! List-page filtering: text search, enumerated-field choices and date
//! ranges. Every filter is a pure function of the list and its criteria.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};

use crate::models::{AttendanceRecord, Membership, Payment, User};

/// Records that can be matched by the search box.
pub trait Searchable {
    fn search_fields(&self) -> Vec<&str>;
}

impl Searchable for User {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.email.as_str()]
    }
}

impl Searchable for Membership {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.user_name.as_str(), self.user_email.as_str()]
    }
}

impl Searchable for AttendanceRecord {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.user_name.as_str(), self.user_email.as_str()]
    }
}

impl Searchable for Payment {
    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.user_name.as_str(),
            self.user_email.as_str(),
            self.id.as_str(),
        ]
    }
}

/// Case-insensitive substring match on any searchable field. An empty term
/// matches everything.
pub fn matches_search<T: Searchable>(item: &T, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    let needle = term.to_lowercase();
    item.search_fields()
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
}

pub fn search<T: Searchable + Clone>(items: &[T], term: &str) -> Vec<T> {
    items
        .iter()
        .filter(|item| matches_search(*item, term))
        .cloned()
        .collect()
}

/// Exact-match filter on an enumerated field, or no filter at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice<T> {
    All,
    Only(T),
}

impl<T> Default for Choice<T> {
    fn default() -> Self {
        Choice::All
    }
}

impl<T: PartialEq> Choice<T> {
    pub fn allows(&self, value: &T) -> bool {
        match self {
            Choice::All => true,
            Choice::Only(wanted) => wanted == value,
        }
    }

    /// `"all"` (or empty) means no filter; anything else goes through `parse`.
    pub fn parse_with(raw: &str, parse: impl Fn(&str) -> Option<T>) -> Option<Self> {
        if raw.is_empty() || raw.eq_ignore_ascii_case("all") {
            Some(Choice::All)
        } else {
            parse(raw).map(Choice::Only)
        }
    }
}

/// Calendar-day range. Both ends are optional and both are inclusive; the
/// upper bound covers its whole day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DateRange {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl DateRange {
    pub fn new(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        Self { start, end }
    }

    pub fn contains(&self, at: DateTime<Utc>) -> bool {
        if let Some(start) = self.start {
            if at < start.and_time(NaiveTime::MIN).and_utc() {
                return false;
            }
        }
        // no day after the last representable date, so nothing lies past it
        if let Some(next_day) = self.end.and_then(|end| end.succ_opt()) {
            if at >= next_day.and_time(NaiveTime::MIN).and_utc() {
                return false;
            }
        }
        true
    }

    pub fn contains_date(&self, date: NaiveDate) -> bool {
        self.start.map_or(true, |start| start <= date) && self.end.map_or(true, |end| date <= end)
    }
}
