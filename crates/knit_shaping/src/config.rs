//! Shaping thresholds.

use serde::{Deserialize, Serialize};

/// Limits beyond which a shaping request is suspicious but still computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShapingLimits {
    /// Row budgets above this produce an `ImplausibleRowCount` warning.
    pub max_plausible_rows: u32,
}

impl Default for ShapingLimits {
    fn default() -> Self {
        Self {
            max_plausible_rows: 500,
        }
    }
}

impl ShapingLimits {
    pub fn max_plausible_rows(mut self, rows: u32) -> Self {
        self.max_plausible_rows = rows;
        self
    }
}
