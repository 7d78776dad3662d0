//! The availability window calculator behind the reservation date picker.
//!
//! Once a check-in is picked, check-out is limited to the run of free nights
//! that follows it: the latest legal check-out is the day before the next
//! blocked date. Every entry point leaves the selection valid against the
//! index currently held, so the picker never sees a stale window.

use crate::date::CalendarDate;
use crate::index::BlockedDateIndex;
use crate::pricing::{StayQuote, derive_nights_and_total};
use crate::range::{Selection, StayRange};

/// Which half of the selection the next click fills in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No check-in yet, or a complete stay that the next click replaces
    Choosing,
    /// Check-in picked, waiting for check-out
    AwaitingCheckOut,
}

/// What a picker click did to the selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    /// The date became the check-in of a fresh selection
    CheckInSet,
    /// The date completed the stay as its check-out
    CheckOutSet,
    /// The date is blocked; nothing changed
    Ignored,
}

#[derive(Debug, Clone, Default)]
pub struct AvailabilityCalculator {
    index:       BlockedDateIndex,
    selection:   Selection,
    upper_bound: Option<CalendarDate>,
}

impl AvailabilityCalculator {
    pub fn new(index: BlockedDateIndex) -> Self {
        Self {
            index,
            selection: Selection::Empty,
            upper_bound: None,
        }
    }

    pub const fn selection(&self) -> Selection {
        self.selection
    }

    /// Latest legal check-out for the current check-in. `None` when nothing
    /// is picked or when no blocked date follows the check-in.
    pub const fn upper_bound(&self) -> Option<CalendarDate> {
        self.upper_bound
    }

    pub const fn index(&self) -> &BlockedDateIndex {
        &self.index
    }

    pub const fn phase(&self) -> Phase {
        match self.selection {
            Selection::CheckIn(_) => Phase::AwaitingCheckOut,
            Selection::Empty | Selection::Complete(_) => Phase::Choosing,
        }
    }

    /// Whether the picker should let the user click `date`.
    ///
    /// Called for every visible cell on every render, so it only does set
    /// lookups and comparisons.
    pub fn is_selectable(&self, date: CalendarDate) -> bool {
        if self.index.is_blocked(date) {
            return false;
        }
        match self.selection {
            Selection::CheckIn(check_in) => {
                date > check_in && self.upper_bound.is_none_or(|bound| date <= bound)
            },
            Selection::Empty | Selection::Complete(_) => true,
        }
    }

    /// Replaces the blocked dates (room switch or refresh) and re-checks the
    /// current selection against them.
    ///
    /// A check-in that is now blocked drops the whole selection. A check-out
    /// past the new bound is pulled back to it; if that leaves no night at
    /// all, only the check-in is kept.
    pub fn on_blocked_index_changed(&mut self, index: BlockedDateIndex) {
        self.index = index;

        let Some(check_in) = self.selection.check_in() else {
            self.upper_bound = None;
            return;
        };
        if self.index.is_blocked(check_in) {
            tracing::debug!(%check_in, "check-in is now blocked, clearing selection");
            self.reset();
            return;
        }

        self.upper_bound = self.bound_after(check_in);
        if let Selection::Complete(stay) = self.selection {
            self.selection = self.clamped(check_in, stay.check_out());
            if self.selection != Selection::Complete(stay) {
                tracing::debug!(
                    previous = %stay,
                    current = %self.selection,
                    "blocked dates shrank the selected stay"
                );
            }
        }
    }

    /// Builds an index from `YYYY-MM-DD` strings and applies it.
    pub fn set_blocked_dates<I, S>(&mut self, dates: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.on_blocked_index_changed(BlockedDateIndex::from_strings(dates));
    }

    /// Applies a range reported by the picker.
    ///
    /// A missing start clears the selection and a blocked start is refused.
    /// An end past the bound is clamped rather than rejected, and an end that
    /// is not after the start leaves only the check-in.
    pub fn on_range_selected(&mut self, start: Option<CalendarDate>, end: Option<CalendarDate>) {
        let Some(start) = start else {
            self.reset();
            return;
        };
        if self.index.is_blocked(start) {
            tracing::debug!(%start, "refusing blocked check-in");
            self.reset();
            return;
        }

        self.upper_bound = self.bound_after(start);
        self.selection = match end {
            None => Selection::CheckIn(start),
            Some(end) => self.clamped(start, end),
        };
    }

    /// Handles a click on a picker cell.
    ///
    /// While a check-in waits for its check-out, a selectable date completes
    /// the stay and any other free date starts over from that date.
    pub fn click(&mut self, date: CalendarDate) -> ClickOutcome {
        if self.index.is_blocked(date) {
            return ClickOutcome::Ignored;
        }
        match self.selection {
            Selection::CheckIn(check_in) if self.is_selectable(date) => {
                self.on_range_selected(Some(check_in), Some(date));
                ClickOutcome::CheckOutSet
            },
            _ => {
                self.on_range_selected(Some(date), None);
                ClickOutcome::CheckInSet
            },
        }
    }

    /// The picker was dismissed without confirming.
    pub fn on_outside_interaction(&mut self) {
        self.reset();
    }

    /// Hands back the selected stay, if complete, and clears the picker.
    pub fn on_confirm(&mut self) -> Option<StayRange> {
        let stay = self.selection.stay();
        self.reset();
        stay
    }

    pub fn quote(&self, nightly_price: u64) -> StayQuote {
        derive_nights_and_total(&self.selection, nightly_price)
    }

    fn reset(&mut self) {
        self.selection = Selection::Empty;
        self.upper_bound = None;
    }

    fn bound_after(&self, check_in: CalendarDate) -> Option<CalendarDate> {
        self.index.next_blocked_after(check_in).and_then(CalendarDate::pred)
    }

    /// `check_in` must be unblocked and `self.upper_bound` already computed for it.
    fn clamped(&self, check_in: CalendarDate, check_out: CalendarDate) -> Selection {
        let check_out = match self.upper_bound {
            Some(bound) if check_out > bound => {
                tracing::debug!(%check_in, requested = %check_out, %bound, "clamping check-out");
                bound
            },
            _ => check_out,
        };
        StayRange::new(check_in, check_out).map_or(Selection::CheckIn(check_in), Selection::Complete)
    }
}
