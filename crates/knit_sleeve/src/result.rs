//! Hammer-sleeve layout.

use knit_gauge::{Length, Warning};
use serde::{Deserialize, Serialize};

use crate::input::HammerComponent;

/// Horizontal part of the sleeve cap that continues over the shoulder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SleeveCapExtension {
    pub width_stitches: u32,
    pub length_rows: u32,
}

/// Vertical part of the sleeve cap, sewn into the body cutout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SleeveCapVerticalPart {
    pub width_stitches: u32,
    pub height_rows: u32,
}

/// Front/back panel counts. Stitch widths are per side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BodyPanelShaping {
    pub shoulder_strap_width: u32,
    pub armhole_cutout_width: u32,
    pub armhole_depth_rows: u32,
    pub bind_off_stitches: u32,
    pub total_body_width_at_chest: u32,
}

/// Dimensions the rounded counts actually produce, in the gauge's unit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AchievedDimensions {
    pub shoulder_width: Length,
    pub extension_width: Length,
    pub upper_arm_width: Length,
    pub armhole_depth: Length,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HammerSleeveResult {
    pub component: HammerComponent,
    pub sleeve_cap_extension: SleeveCapExtension,
    pub sleeve_cap_vertical_part: SleeveCapVerticalPart,
    pub body_panel_shaping: BodyPanelShaping,
    pub achieved: AchievedDimensions,
    pub warnings: Vec<Warning>,
}

impl HammerSleeveResult {
    /// Knitting directions for the requested component.
    pub fn instructions(&self) -> Vec<String> {
        let ext = &self.sleeve_cap_extension;
        let vertical = &self.sleeve_cap_vertical_part;
        let body = &self.body_panel_shaping;

        if self.component.is_body_panel() {
            vec![
                format!(
                    "Work the {} panel {} stitches wide at the chest",
                    self.component, body.total_body_width_at_chest
                ),
                format!(
                    "Armhole: bind off {} stitches at each side, then work {} rows",
                    body.bind_off_stitches, body.armhole_depth_rows
                ),
                format!(
                    "Shoulder straps: {} stitches each, joined to the sleeve cap extension",
                    body.shoulder_strap_width
                ),
            ]
        } else {
            vec![
                format!(
                    "Sleeve cap: work {} stitches for {} rows to fit the armhole cutout",
                    vertical.width_stitches, vertical.height_rows
                ),
                format!(
                    "Extension: continue the center {} stitches for {} rows over the shoulder",
                    ext.width_stitches, ext.length_rows
                ),
            ]
        }
    }

    pub fn has_warning(&self, kind: &str) -> bool {
        self.warnings.iter().any(|w| w.kind() == kind)
    }
}
