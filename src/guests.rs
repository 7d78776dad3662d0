//! Guest counts for a reservation, bounded by the room's occupancy.
//!
//! Adults and children together fill the room's places. Infants do not take
//! a place but are capped separately at the same occupancy.

use serde::Serialize;

use crate::consts::MIN_ADULTS;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GuestKind {
    Adult,
    Child,
    Infant,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GuestError {
    /// Shown to the guest as-is when an increment is declined.
    #[error("This room allows up to {max} guests")]
    OccupancyExceeded { max: u8 },

    #[error("At least one adult is required")]
    NoAdult,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GuestCounts {
    adults:   u8,
    children: u8,
    infants:  u8,
}

impl Default for GuestCounts {
    fn default() -> Self {
        Self {
            adults:   MIN_ADULTS,
            children: 0,
            infants:  0,
        }
    }
}

impl GuestCounts {
    /// # Errors
    /// `NoAdult` without an adult, `OccupancyExceeded` when adults and
    /// children together, or infants alone, exceed `max_occupancy`.
    pub fn new(adults: u8, children: u8, infants: u8, max_occupancy: u8) -> Result<Self, GuestError> {
        if adults < MIN_ADULTS {
            return Err(GuestError::NoAdult);
        }
        let counts = Self {
            adults,
            children,
            infants,
        };
        if counts.occupied() > u16::from(max_occupancy) || infants > max_occupancy {
            return Err(GuestError::OccupancyExceeded { max: max_occupancy });
        }
        Ok(counts)
    }

    pub const fn adults(&self) -> u8 {
        self.adults
    }

    pub const fn children(&self) -> u8 {
        self.children
    }

    pub const fn infants(&self) -> u8 {
        self.infants
    }

    pub const fn get(&self, kind: GuestKind) -> u8 {
        match kind {
            GuestKind::Adult => self.adults,
            GuestKind::Child => self.children,
            GuestKind::Infant => self.infants,
        }
    }

    /// Guests that take up a place in the room
    pub fn occupied(&self) -> u16 {
        u16::from(self.adults) + u16::from(self.children)
    }

    /// Adds one guest of `kind`.
    ///
    /// # Errors
    /// Returns `GuestError::OccupancyExceeded` and leaves the counts unchanged
    /// when the guest would not fit.
    pub fn increment(&mut self, kind: GuestKind, max_occupancy: u8) -> Result<(), GuestError> {
        let full = match kind {
            GuestKind::Adult | GuestKind::Child => self.occupied() >= u16::from(max_occupancy),
            GuestKind::Infant => self.get(GuestKind::Infant) >= max_occupancy,
        };
        if full {
            tracing::debug!(?kind, max_occupancy, "declining guest increment");
            return Err(GuestError::OccupancyExceeded { max: max_occupancy });
        }
        *self.slot(kind) += 1;
        Ok(())
    }

    /// Removes one guest of `kind`; returns whether anything changed.
    /// The last adult stays.
    pub fn decrement(&mut self, kind: GuestKind) -> bool {
        let floor = if kind == GuestKind::Adult { MIN_ADULTS } else { 0 };
        if self.get(kind) <= floor {
            return false;
        }
        *self.slot(kind) -= 1;
        true
    }

    /// Fits the counts into a smaller room, dropping children before adults
    /// and trimming infants to the cap. Returns whether anything changed.
    pub fn clamp_to(&mut self, max_occupancy: u8) -> bool {
        let before = *self;
        self.infants = self.infants.min(max_occupancy);
        while self.occupied() > u16::from(max_occupancy) {
            if !self.decrement(GuestKind::Child) && !self.decrement(GuestKind::Adult) {
                break;
            }
        }
        *self != before
    }

    fn slot(&mut self, kind: GuestKind) -> &mut u8 {
        match kind {
            GuestKind::Adult => &mut self.adults,
            GuestKind::Child => &mut self.children,
            GuestKind::Infant => &mut self.infants,
        }
    }
}
