//! Default values for theme options.

use crate::color::Color;

/// Macro to generate default functions for theme option fields
macro_rules! default_fn {
    ($name:ident, $type:ty, $value:expr) => {
        pub(crate) fn $name() -> $type {
            $value
        }
    };
}

// =========================================================================
// CLASSIC THEME
// =========================================================================

default_fn!(default_primary_color, Color, Color::rgb(0, 0, 255)); // blue
default_fn!(default_page_margin, String, "1.35cm".to_string());
default_fn!(default_section_title_margin, String, "0.13cm".to_string());
default_fn!(
    default_vertical_margin_between_bullet_points,
    String,
    "0.07cm".to_string()
);
default_fn!(default_bullet_point_left_margin, String, "0.7cm".to_string());
default_fn!(
    default_vertical_margin_between_entries,
    String,
    "0.12cm".to_string()
);
default_fn!(
    default_vertical_margin_between_entries_and_highlights,
    String,
    "0.12cm".to_string()
);
default_fn!(default_date_and_location_width, String, "3.7cm".to_string());
