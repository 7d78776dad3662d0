//! Booking-panel logic for accommodation reservations.
//!
//! The heart of the crate is [`AvailabilityCalculator`]: given the dates a
//! room is already blocked on, it lets the guest pick a check-in and then
//! only the check-outs reachable without crossing a blocked night. Around it
//! sit the [`CalendarDate`] value type, the [`BlockedDateIndex`], pricing,
//! guest limits and the [`BookingPanel`] that ties them to a room.
//!
//! ```
//! use stay_window::{AvailabilityCalculator, BlockedDateIndex, CalendarDate};
//!
//! let blocked = BlockedDateIndex::from_strings(["2025-11-10"]);
//! let mut calc = AvailabilityCalculator::new(blocked);
//!
//! let check_in: CalendarDate = "2025-11-05".parse()?;
//! calc.click(check_in);
//! assert_eq!(calc.upper_bound(), Some("2025-11-09".parse()?));
//! assert!(!calc.is_selectable("2025-11-12".parse()?));
//! # Ok::<(), stay_window::DateError>(())
//! ```

mod booking;
mod calculator;
mod config;
mod consts;
mod date;
mod guests;
mod index;
mod prelude;
mod pricing;
mod range;

pub use booking::{AvailabilityQuery, BookingError, BookingPanel, ReservationRequest, Room};
pub use calculator::{AvailabilityCalculator, ClickOutcome, Phase};
pub use config::PanelConfig;
pub use consts::*;
pub use date::{CalendarDate, DateError, format_local_date, parse_local_date};
pub use guests::{GuestCounts, GuestError, GuestKind};
pub use index::BlockedDateIndex;
pub use pricing::{StayQuote, derive_nights_and_total};
pub use range::{RangeError, Selection, StayRange};
