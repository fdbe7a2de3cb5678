//! Hammer-sleeve measurements.

use std::fmt;
use std::str::FromStr;

use knit_gauge::{Gauge, GaugeSpec, Length};
use serde::{Deserialize, Serialize};

use crate::error::SleeveError;

/// Which piece of the garment the caller is about to knit.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum HammerComponent {
    Front,
    Back,
    #[default]
    Sleeve,
}

impl HammerComponent {
    pub fn as_str(&self) -> &'static str {
        match self {
            HammerComponent::Front => "front",
            HammerComponent::Back => "back",
            HammerComponent::Sleeve => "sleeve",
        }
    }

    /// Front and back share the same body-panel cutout.
    pub fn is_body_panel(&self) -> bool {
        matches!(self, HammerComponent::Front | HammerComponent::Back)
    }
}

impl fmt::Display for HammerComponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for HammerComponent {
    type Err = SleeveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "front" => Ok(HammerComponent::Front),
            "back" => Ok(HammerComponent::Back),
            "sleeve" => Ok(HammerComponent::Sleeve),
            _ => Err(SleeveError::UnknownComponent(s.to_string())),
        }
    }
}

/// Body measurements for a hammer-sleeve garment.
///
/// Each length may use its own unit; everything is converted to the gauge's
/// unit before counting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HammerSleeveInput {
    pub total_shoulder_width: Length,
    pub upper_arm_width: Length,
    pub armhole_depth: Length,
    pub neckline_width: Length,
    pub gauge: GaugeSpec,
    #[serde(default)]
    pub component: HammerComponent,
}

impl HammerSleeveInput {
    pub fn new(
        total_shoulder_width: Length,
        upper_arm_width: Length,
        armhole_depth: Length,
        neckline_width: Length,
        gauge: Gauge,
    ) -> Self {
        Self {
            total_shoulder_width,
            upper_arm_width,
            armhole_depth,
            neckline_width,
            gauge: gauge.into(),
            component: HammerComponent::default(),
        }
    }

    pub fn with_component(mut self, component: HammerComponent) -> Self {
        self.component = component;
        self
    }
}
