//! Colors - Gallery Theme Colors

use gpui::{rgb, Hsla, Rgba};

/// Gallery palette, accessed via associated functions
pub struct GalleryColors;

impl GalleryColors {
    // Primary colors
    /// Header background - Deep museum red
    pub fn header_bg() -> Rgba { rgb(0x7a1f2b) }
    /// Primary accent - Saga blue (checkboxes, active page)
    pub fn accent() -> Rgba { rgb(0x2563eb) }
    pub fn accent_soft() -> Rgba { rgb(0xdbeafe) }

    // Background colors
    pub fn background() -> Rgba { rgb(0xf4f1ec) }
    pub fn content_bg() -> Rgba { rgb(0xffffff) }
    /// Selected records panel
    pub fn panel_bg() -> Rgba { rgb(0xfaf8f5) }
    pub fn log_panel_bg() -> Rgba { rgb(0x1c1f26) }
    /// Popover shadow layer
    pub fn overlay() -> Rgba { rgb(0x111827) }

    // Text colors
    pub fn text_primary() -> Rgba { rgb(0x1f2937) }
    pub fn text_secondary() -> Rgba { rgb(0x6b7280) }
    pub fn text_muted() -> Rgba { rgb(0x9ca3af) }
    /// Light text (on dark backgrounds)
    pub fn text_light() -> Rgba { rgb(0xffffff) }
    pub fn text_header() -> Rgba { rgb(0xfdf2f4) }

    // Status colors
    pub fn success() -> Rgba { rgb(0x16a34a) }
    pub fn warning() -> Rgba { rgb(0xd97706) }
    pub fn danger() -> Rgba { rgb(0xdc2626) }
    pub fn danger_soft() -> Rgba { rgb(0xfee2e2) }
    pub fn info() -> Rgba { rgb(0x2563eb) }

    // Border colors
    pub fn border() -> Rgba { rgb(0xe7e2da) }
    pub fn border_focus() -> Rgba { rgb(0x2563eb) }

    // Button colors
    pub fn button_primary_bg() -> Rgba { rgb(0x2563eb) }
    pub fn button_primary_text() -> Rgba { rgb(0xffffff) }
    pub fn button_danger_bg() -> Rgba { rgb(0xdc2626) }
    pub fn button_danger_text() -> Rgba { rgb(0xffffff) }
    pub fn button_ghost_text() -> Rgba { rgb(0x4b5563) }

    // Table colors
    pub fn table_header_bg() -> Rgba { rgb(0xf8f6f2) }
    pub fn table_row_hover() -> Rgba { rgb(0xf1ede6) }
    pub fn table_row_alt() -> Rgba { rgb(0xfcfbf9) }
    /// Background of a selected row
    pub fn table_row_selected() -> Rgba { rgb(0xeff6ff) }

    // Input colors
    pub fn input_bg() -> Rgba { rgb(0xffffff) }
    pub fn input_border() -> Rgba { rgb(0xd1d5db) }
    pub fn input_placeholder() -> Rgba { rgb(0x9ca3af) }
}

impl GalleryColors {
    /// Translucent overlay behind the bulk select popover
    pub fn overlay_hsla() -> Hsla {
        let mut color = Hsla::from(Self::overlay());
        color.a = 0.12;
        color
    }
}
