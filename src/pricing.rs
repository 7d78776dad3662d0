//! Nights and total price for the current selection.
//!
//! Prices are whole currency units, so the total is exact. Nothing here is
//! cached; call it again whenever the selection or the room changes.

use serde::{Deserialize, Serialize};

use crate::range::Selection;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StayQuote {
    pub nights:      u32,
    pub total_price: u64,
}

/// Nights of a complete selection times the nightly price.
/// Anything short of a complete selection quotes zero nights and zero total.
pub fn derive_nights_and_total(selection: &Selection, nightly_price: u64) -> StayQuote {
    let nights = selection.nights();
    if nights == 0 {
        return StayQuote::default();
    }
    StayQuote {
        nights,
        total_price: nightly_price.saturating_mul(u64::from(nights)),
    }
}
