//! The booking panel: one room, its date picker state and the guest counts,
//! plus the payloads exchanged with the backend.

use serde::{Deserialize, Serialize};

use crate::calculator::AvailabilityCalculator;
use crate::config::PanelConfig;
use crate::date::CalendarDate;
use crate::guests::{GuestCounts, GuestError, GuestKind};
use crate::pricing::StayQuote;

/// A bookable room as the backend describes it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    pub id:            u64,
    pub name:          String,
    pub nightly_price: u64,
    pub max_occupancy: u8,
}

/// The date window to fetch blocked dates for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityQuery {
    pub room_id: u64,
    pub from:    CalendarDate,
    pub to:      CalendarDate,
}

impl AvailabilityQuery {
    /// `today` through the same day `lookahead_months` later.
    /// `None` if that runs past the last supported year.
    pub fn new(room_id: u64, today: CalendarDate, lookahead_months: u32) -> Option<Self> {
        Some(Self {
            room_id,
            from: today,
            to: today.add_months(lookahead_months)?,
        })
    }
}

/// Body of the reservation-creation call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationRequest {
    pub room_id:     u64,
    pub check_in:    CalendarDate,
    pub check_out:   CalendarDate,
    #[serde(flatten)]
    pub guests:      GuestCounts,
    pub nights:      u32,
    pub total_price: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BookingError {
    #[error("No room selected")]
    NoRoomSelected,

    #[error("Select both check-in and check-out dates")]
    IncompleteSelection,

    #[error("Availability window starting {0} runs past the supported calendar")]
    WindowOutOfRange(CalendarDate),

    #[error(transparent)]
    Guests(#[from] GuestError),
}

#[derive(Debug, Clone, Default)]
pub struct BookingPanel {
    config:     PanelConfig,
    room:       Option<Room>,
    calculator: AvailabilityCalculator,
    guests:     GuestCounts,
}

impl BookingPanel {
    pub fn new(config: PanelConfig) -> Self {
        let guests = GuestCounts::new(config.default_adults, 0, 0, u8::MAX).unwrap_or_default();
        Self {
            config,
            room: None,
            calculator: AvailabilityCalculator::default(),
            guests,
        }
    }

    /// Switches to `room` with the blocked dates fetched for it.
    ///
    /// The current dates are kept where the new room allows them (see
    /// [`AvailabilityCalculator::on_blocked_index_changed`]) and the guests
    /// are trimmed to the new occupancy.
    pub fn select_room<I, S>(&mut self, room: Room, blocked_dates: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        tracing::debug!(room_id = room.id, "room selected");
        self.calculator.set_blocked_dates(blocked_dates);
        if self.guests.clamp_to(room.max_occupancy) {
            tracing::debug!(
                room_id = room.id,
                max_occupancy = room.max_occupancy,
                "guest counts trimmed to room occupancy"
            );
        }
        self.room = Some(room);
    }

    pub const fn room(&self) -> Option<&Room> {
        self.room.as_ref()
    }

    pub const fn calculator(&self) -> &AvailabilityCalculator {
        &self.calculator
    }

    pub const fn calculator_mut(&mut self) -> &mut AvailabilityCalculator {
        &mut self.calculator
    }

    pub const fn guests(&self) -> GuestCounts {
        self.guests
    }

    /// # Errors
    /// `NoRoomSelected` before a room is picked; `Guests` when the room is full.
    pub fn add_guest(&mut self, kind: GuestKind) -> Result<(), BookingError> {
        let room = self.room.as_ref().ok_or(BookingError::NoRoomSelected)?;
        self.guests.increment(kind, room.max_occupancy)?;
        Ok(())
    }

    pub fn remove_guest(&mut self, kind: GuestKind) -> bool {
        self.guests.decrement(kind)
    }

    /// Nights and total for the selected room, zero without one.
    pub fn quote(&self) -> StayQuote {
        self.room
            .as_ref()
            .map_or_else(StayQuote::default, |room| self.calculator.quote(room.nightly_price))
    }

    /// # Errors
    /// `NoRoomSelected` before a room is picked; `WindowOutOfRange` when the
    /// lookahead runs past year 9999.
    pub fn availability_query(&self, today: CalendarDate) -> Result<AvailabilityQuery, BookingError> {
        let room = self.room.as_ref().ok_or(BookingError::NoRoomSelected)?;
        AvailabilityQuery::new(room.id, today, self.config.lookahead_months)
            .ok_or(BookingError::WindowOutOfRange(today))
    }

    /// The payload for the current selection, leaving the panel as is.
    ///
    /// # Errors
    /// `NoRoomSelected` or `IncompleteSelection`.
    pub fn reservation_request(&self) -> Result<ReservationRequest, BookingError> {
        let room = self.room.as_ref().ok_or(BookingError::NoRoomSelected)?;
        let stay = self
            .calculator
            .selection()
            .stay()
            .ok_or(BookingError::IncompleteSelection)?;
        let quote = self.calculator.quote(room.nightly_price);
        Ok(ReservationRequest {
            room_id:     room.id,
            check_in:    stay.check_in(),
            check_out:   stay.check_out(),
            guests:      self.guests,
            nights:      quote.nights,
            total_price: quote.total_price,
        })
    }

    /// Builds the payload and clears the date picker.
    /// On error nothing is cleared.
    ///
    /// # Errors
    /// Same as [`BookingPanel::reservation_request`].
    pub fn confirm(&mut self) -> Result<ReservationRequest, BookingError> {
        let request = self.reservation_request()?;
        self.calculator.on_confirm();
        tracing::debug!(
            room_id = request.room_id,
            check_in = %request.check_in,
            check_out = %request.check_out,
            total_price = request.total_price,
            "reservation confirmed"
        );
        Ok(request)
    }
}
