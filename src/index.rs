//! Lookup structures over the blocked dates of one bookable room.

use std::collections::HashSet;

use crate::date::CalendarDate;

/// Read-only view over a room's blocked dates.
///
/// Built once from the list the backend returned and replaced wholesale when
/// that list changes; there is no incremental update.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlockedDateIndex {
    membership: HashSet<CalendarDate>,
    sorted:     Vec<CalendarDate>,
}

impl BlockedDateIndex {
    /// Builds the index from `YYYY-MM-DD` strings in any order.
    ///
    /// Entries that do not parse are skipped and logged, so a bad value from
    /// upstream never blocks (or unblocks) a real calendar day.
    pub fn from_strings<I, S>(dates: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let parsed = dates.into_iter().filter_map(|raw| {
            let raw = raw.as_ref();
            match raw.parse::<CalendarDate>() {
                Ok(date) => Some(date),
                Err(err) => {
                    tracing::warn!(raw, %err, "skipping malformed blocked date");
                    None
                },
            }
        });
        Self::from_dates(parsed)
    }

    /// Builds the index from already-parsed dates.
    pub fn from_dates<I>(dates: I) -> Self
    where
        I: IntoIterator<Item = CalendarDate>,
    {
        let membership: HashSet<CalendarDate> = dates.into_iter().collect();
        let mut sorted: Vec<CalendarDate> = membership.iter().copied().collect();
        sorted.sort_unstable();
        tracing::debug!(blocked = sorted.len(), "built blocked-date index");
        Self { membership, sorted }
    }

    #[inline]
    pub fn is_blocked(&self, date: CalendarDate) -> bool {
        self.membership.contains(&date)
    }

    /// The nearest blocked date strictly after `from`, if any.
    pub fn next_blocked_after(&self, from: CalendarDate) -> Option<CalendarDate> {
        let pos = self.sorted.partition_point(|d| *d <= from);
        self.sorted.get(pos).copied()
    }

    /// Number of distinct blocked dates
    pub fn len(&self) -> usize {
        self.sorted.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sorted.is_empty()
    }

    /// Blocked dates in ascending order
    pub fn iter(&self) -> impl Iterator<Item = CalendarDate> + '_ {
        self.sorted.iter().copied()
    }
}

impl FromIterator<CalendarDate> for BlockedDateIndex {
    fn from_iter<T: IntoIterator<Item = CalendarDate>>(iter: T) -> Self {
        Self::from_dates(iter)
    }
}
