//! Options of the `classic` theme.

use serde::Serialize;

use super::defaults::*;
use crate::color::Color;
use crate::context::Context;
use crate::raw::RawClassicThemeOptions;
use crate::validators::dimension;

/// Visual parameters of the classic theme. Lengths are TeX-style (`1.35cm`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassicThemeOptions {
    pub primary_color: Color,

    pub page_top_margin: String,
    pub page_bottom_margin: String,
    pub page_left_margin: String,
    pub page_right_margin: String,

    pub section_title_top_margin: String,
    pub section_title_bottom_margin: String,

    pub vertical_margin_between_bullet_points: String,
    pub bullet_point_left_margin: String,

    pub vertical_margin_between_entries: String,
    pub vertical_margin_between_entries_and_highlights: String,

    pub date_and_location_width: String,
}

impl Default for ClassicThemeOptions {
    fn default() -> Self {
        Self {
            primary_color: default_primary_color(),
            page_top_margin: default_page_margin(),
            page_bottom_margin: default_page_margin(),
            page_left_margin: default_page_margin(),
            page_right_margin: default_page_margin(),
            section_title_top_margin: default_section_title_margin(),
            section_title_bottom_margin: default_section_title_margin(),
            vertical_margin_between_bullet_points: default_vertical_margin_between_bullet_points(),
            bullet_point_left_margin: default_bullet_point_left_margin(),
            vertical_margin_between_entries: default_vertical_margin_between_entries(),
            vertical_margin_between_entries_and_highlights:
                default_vertical_margin_between_entries_and_highlights(),
            date_and_location_width: default_date_and_location_width(),
        }
    }
}

impl ClassicThemeOptions {
    /// Validate the given options; absent ones keep their default, invalid ones are reported.
    pub(crate) fn from_raw(raw: RawClassicThemeOptions, ctx: &mut Context) -> Self {
        let mut options = Self::default();

        if let Some(color) = ctx.check_optional("primary_color", raw.primary_color, |v| {
            Color::parse(&v)
        }) {
            options.primary_color = color;
        }

        let lengths = [
            ("page_top_margin", raw.page_top_margin, &mut options.page_top_margin),
            ("page_bottom_margin", raw.page_bottom_margin, &mut options.page_bottom_margin),
            ("page_left_margin", raw.page_left_margin, &mut options.page_left_margin),
            ("page_right_margin", raw.page_right_margin, &mut options.page_right_margin),
            (
                "section_title_top_margin",
                raw.section_title_top_margin,
                &mut options.section_title_top_margin,
            ),
            (
                "section_title_bottom_margin",
                raw.section_title_bottom_margin,
                &mut options.section_title_bottom_margin,
            ),
            (
                "vertical_margin_between_bullet_points",
                raw.vertical_margin_between_bullet_points,
                &mut options.vertical_margin_between_bullet_points,
            ),
            (
                "bullet_point_left_margin",
                raw.bullet_point_left_margin,
                &mut options.bullet_point_left_margin,
            ),
            (
                "vertical_margin_between_entries",
                raw.vertical_margin_between_entries,
                &mut options.vertical_margin_between_entries,
            ),
            (
                "vertical_margin_between_entries_and_highlights",
                raw.vertical_margin_between_entries_and_highlights,
                &mut options.vertical_margin_between_entries_and_highlights,
            ),
            (
                "date_and_location_width",
                raw.date_and_location_width,
                &mut options.date_and_location_width,
            ),
        ];

        for (field, raw, slot) in lengths {
            if let Some(value) = ctx.check_optional(field, raw, |v| dimension(&v)) {
                *slot = value;
            }
        }

        options
    }
}
