use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{CalendarDate, DateError, RANGE_SEPARATOR, prelude::*};

/// A complete stay: check-in night through the departure day.
/// Check-out is exclusive and always strictly after check-in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{check_in}/{check_out}")]
pub struct StayRange {
    check_in:  CalendarDate,
    check_out: CalendarDate,
}

/// Error type for stay range operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RangeError {
    /// Check-out is on or before check-in.
    #[error("Invalid stay: check-out ({check_out}) must be after check-in ({check_in})")]
    NotAfterCheckIn {
        check_in:  CalendarDate,
        check_out: CalendarDate,
    },

    /// Error parsing one of the dates.
    #[error(transparent)]
    Date(#[from] DateError),

    /// Invalid range format.
    #[error("Invalid stay format: {0}")]
    InvalidFormat(String),
}

impl StayRange {
    /// Creates a stay of at least one night.
    ///
    /// # Errors
    /// Returns `RangeError::NotAfterCheckIn` if `check_out <= check_in`.
    pub fn new(check_in: CalendarDate, check_out: CalendarDate) -> Result<Self, RangeError> {
        if check_out <= check_in {
            return Err(RangeError::NotAfterCheckIn { check_in, check_out });
        }
        Ok(Self { check_in, check_out })
    }

    pub const fn check_in(&self) -> CalendarDate {
        self.check_in
    }

    pub const fn check_out(&self) -> CalendarDate {
        self.check_out
    }

    /// Number of nights stayed (always at least one)
    pub fn nights(&self) -> u32 {
        u32::try_from(self.check_in.days_until(self.check_out)).unwrap_or(u32::MAX)
    }

    /// Whether `date` is one of the nights stayed. The departure day is not.
    pub fn contains(&self, date: CalendarDate) -> bool {
        self.check_in <= date && date < self.check_out
    }

    /// Whether two stays share at least one night. Back-to-back stays, where
    /// one departs the day the other arrives, do not overlap.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.check_in < other.check_out && other.check_in < self.check_out
    }

    /// Every night of the stay, in order
    pub fn nights_iter(&self) -> impl Iterator<Item = CalendarDate> {
        let check_out = self.check_out;
        std::iter::successors(Some(self.check_in), |d| d.succ()).take_while(move |d| *d < check_out)
    }
}

impl FromStr for StayRange {
    type Err = RangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let Some((check_in, check_out)) = trimmed.split_once(RANGE_SEPARATOR) else {
            return Err(RangeError::InvalidFormat(format!(
                "No range separator found (expected '{RANGE_SEPARATOR}'): {s}"
            )));
        };
        if check_out.contains(RANGE_SEPARATOR) {
            return Err(RangeError::InvalidFormat(format!(
                "Too many '{RANGE_SEPARATOR}' separators: {s}"
            )));
        }

        let check_in = check_in.trim().parse::<CalendarDate>()?;
        let check_out = check_out.trim().parse::<CalendarDate>()?;
        Self::new(check_in, check_out)
    }
}

impl Serialize for StayRange {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for StayRange {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// What the guest has picked so far.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Selection {
    /// Nothing picked
    #[default]
    Empty,
    /// Check-in picked, check-out pending
    CheckIn(CalendarDate),
    /// Both ends picked
    Complete(StayRange),
}

impl Selection {
    pub const fn check_in(&self) -> Option<CalendarDate> {
        match self {
            Self::Empty => None,
            Self::CheckIn(check_in) => Some(*check_in),
            Self::Complete(stay) => Some(stay.check_in),
        }
    }

    pub const fn check_out(&self) -> Option<CalendarDate> {
        match self {
            Self::Complete(stay) => Some(stay.check_out),
            Self::Empty | Self::CheckIn(_) => None,
        }
    }

    pub const fn stay(&self) -> Option<StayRange> {
        match self {
            Self::Complete(stay) => Some(*stay),
            Self::Empty | Self::CheckIn(_) => None,
        }
    }

    pub const fn is_complete(&self) -> bool {
        matches!(self, Self::Complete(_))
    }

    /// Nights of a complete selection, zero otherwise
    pub fn nights(&self) -> u32 {
        self.stay().map_or(0, |stay| stay.nights())
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("-"),
            Self::CheckIn(check_in) => write!(f, "{check_in}{RANGE_SEPARATOR}-"),
            Self::Complete(stay) => write!(f, "{stay}"),
        }
    }
}
