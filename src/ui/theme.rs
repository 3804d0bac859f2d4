//! Color palette and drop-zone affordance colors.

use egui::Color32;

/// Drag-hover state of a drop zone, as seen from the current frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropAffordance {
    /// No compatible payload in flight.
    Idle,
    /// A compatible payload is being dragged, pointer elsewhere.
    CanDrop,
    /// A compatible payload is being dragged over this zone.
    Hovered,
}

/// Zone background is a pure function of the hover state.
pub fn zone_fill(affordance: DropAffordance) -> Color32 {
    match affordance {
        DropAffordance::Idle => Color32::from_rgb(249, 250, 251),
        DropAffordance::CanDrop => Color32::from_rgb(239, 246, 255),
        DropAffordance::Hovered => Color32::from_rgb(219, 234, 254),
    }
}

pub fn zone_stroke(affordance: DropAffordance) -> Color32 {
    match affordance {
        DropAffordance::Idle => Color32::from_rgb(209, 213, 219),
        DropAffordance::CanDrop => Color32::from_rgb(147, 197, 253),
        DropAffordance::Hovered => Color32::from_rgb(96, 165, 250),
    }
}

pub const ACCENT: Color32 = Color32::from_rgb(99, 102, 241);
pub const HEADER_BG: Color32 = Color32::from_rgb(31, 41, 55);
pub const CARD_BG: Color32 = Color32::from_rgb(249, 250, 251);
pub const MUTED_TEXT: Color32 = Color32::from_rgb(156, 163, 175);
pub const BODY_TEXT: Color32 = Color32::from_rgb(55, 65, 81);

pub const PHRASE_BG: Color32 = Color32::from_rgb(219, 234, 254);
pub const PHRASE_TEXT: Color32 = Color32::from_rgb(30, 64, 175);
pub const HIGHLIGHT_BG: Color32 = Color32::from_rgb(254, 240, 138);
pub const HIGHLIGHT_TEXT: Color32 = Color32::from_rgb(113, 63, 18);
pub const SELECTION_BG: Color32 = Color32::from_rgb(254, 249, 195);
pub const SELECTION_BORDER: Color32 = Color32::from_rgb(253, 224, 71);

pub const CONFIRM_BG: Color32 = Color32::from_rgb(220, 252, 231);
pub const CONFIRM_TEXT: Color32 = Color32::from_rgb(21, 128, 61);
pub const DANGER: Color32 = Color32::from_rgb(239, 68, 68);
pub const OK: Color32 = Color32::from_rgb(34, 197, 94);
pub const WARN_BG: Color32 = Color32::from_rgb(255, 247, 237);
pub const WARN_TEXT: Color32 = Color32::from_rgb(234, 88, 12);
pub const INFO_BG: Color32 = Color32::from_rgb(239, 246, 255);
pub const INFO_TEXT: Color32 = Color32::from_rgb(37, 99, 235);

/// Fill colors for the word-distribution bars, one per bucket.
pub const DISTRIBUTION_COLORS: [Color32; 4] = [
    Color32::from_rgb(59, 130, 246),
    Color32::from_rgb(16, 185, 129),
    Color32::from_rgb(245, 158, 11),
    Color32::from_rgb(239, 68, 68),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zone_colors_differ_per_affordance() {
        let fills = [
            zone_fill(DropAffordance::Idle),
            zone_fill(DropAffordance::CanDrop),
            zone_fill(DropAffordance::Hovered),
        ];
        assert_ne!(fills[0], fills[1]);
        assert_ne!(fills[1], fills[2]);
    }
}
