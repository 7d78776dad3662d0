use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_LOOKAHEAD_MONTHS, MIN_ADULTS};

/// Booking panel settings, deserialized by the host from its own config.
/// Missing keys fall back to the defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PanelConfig {
    /// How far ahead blocked dates are fetched
    pub lookahead_months: u32,
    /// Adults pre-filled when a room is picked
    pub default_adults:   u8,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            lookahead_months: DEFAULT_LOOKAHEAD_MONTHS,
            default_adults:   MIN_ADULTS,
        }
    }
}
