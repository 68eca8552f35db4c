//! Color values for theme options.
//!
//! Accepts CSS color names, hex notation (`#rgb`, `#rgba`, `#rrggbb`,
//! `#rrggbbaa`, with or without `#`) and `rgb()`/`rgba()` functions. The
//! canonical form is the CSS name when one exists, otherwise lowercase hex.

use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::error::ConstraintError;

/// CSS named colors (CSS Color Module Level 4).
const NAMED_COLORS: &[(&str, u32)] = &[
    ("aliceblue", 0xf0f8ff),
    ("antiquewhite", 0xfaebd7),
    ("aqua", 0x00ffff),
    ("aquamarine", 0x7fffd4),
    ("azure", 0xf0ffff),
    ("beige", 0xf5f5dc),
    ("bisque", 0xffe4c4),
    ("black", 0x000000),
    ("blanchedalmond", 0xffebcd),
    ("blue", 0x0000ff),
    ("blueviolet", 0x8a2be2),
    ("brown", 0xa52a2a),
    ("burlywood", 0xdeb887),
    ("cadetblue", 0x5f9ea0),
    ("chartreuse", 0x7fff00),
    ("chocolate", 0xd2691e),
    ("coral", 0xff7f50),
    ("cornflowerblue", 0x6495ed),
    ("cornsilk", 0xfff8dc),
    ("crimson", 0xdc143c),
    ("cyan", 0x00ffff),
    ("darkblue", 0x00008b),
    ("darkcyan", 0x008b8b),
    ("darkgoldenrod", 0xb8860b),
    ("darkgray", 0xa9a9a9),
    ("darkgreen", 0x006400),
    ("darkgrey", 0xa9a9a9),
    ("darkkhaki", 0xbdb76b),
    ("darkmagenta", 0x8b008b),
    ("darkolivegreen", 0x556b2f),
    ("darkorange", 0xff8c00),
    ("darkorchid", 0x9932cc),
    ("darkred", 0x8b0000),
    ("darksalmon", 0xe9967a),
    ("darkseagreen", 0x8fbc8f),
    ("darkslateblue", 0x483d8b),
    ("darkslategray", 0x2f4f4f),
    ("darkslategrey", 0x2f4f4f),
    ("darkturquoise", 0x00ced1),
    ("darkviolet", 0x9400d3),
    ("deeppink", 0xff1493),
    ("deepskyblue", 0x00bfff),
    ("dimgray", 0x696969),
    ("dimgrey", 0x696969),
    ("dodgerblue", 0x1e90ff),
    ("firebrick", 0xb22222),
    ("floralwhite", 0xfffaf0),
    ("forestgreen", 0x228b22),
    ("fuchsia", 0xff00ff),
    ("gainsboro", 0xdcdcdc),
    ("ghostwhite", 0xf8f8ff),
    ("gold", 0xffd700),
    ("goldenrod", 0xdaa520),
    ("gray", 0x808080),
    ("grey", 0x808080),
    ("green", 0x008000),
    ("greenyellow", 0xadff2f),
    ("honeydew", 0xf0fff0),
    ("hotpink", 0xff69b4),
    ("indianred", 0xcd5c5c),
    ("indigo", 0x4b0082),
    ("ivory", 0xfffff0),
    ("khaki", 0xf0e68c),
    ("lavender", 0xe6e6fa),
    ("lavenderblush", 0xfff0f5),
    ("lawngreen", 0x7cfc00),
    ("lemonchiffon", 0xfffacd),
    ("lightblue", 0xadd8e6),
    ("lightcoral", 0xf08080),
    ("lightcyan", 0xe0ffff),
    ("lightgoldenrodyellow", 0xfafad2),
    ("lightgray", 0xd3d3d3),
    ("lightgreen", 0x90ee90),
    ("lightgrey", 0xd3d3d3),
    ("lightpink", 0xffb6c1),
    ("lightsalmon", 0xffa07a),
    ("lightseagreen", 0x20b2aa),
    ("lightskyblue", 0x87cefa),
    ("lightslategray", 0x778899),
    ("lightslategrey", 0x778899),
    ("lightsteelblue", 0xb0c4de),
    ("lightyellow", 0xffffe0),
    ("lime", 0x00ff00),
    ("limegreen", 0x32cd32),
    ("linen", 0xfaf0e6),
    ("magenta", 0xff00ff),
    ("maroon", 0x800000),
    ("mediumaquamarine", 0x66cdaa),
    ("mediumblue", 0x0000cd),
    ("mediumorchid", 0xba55d3),
    ("mediumpurple", 0x9370db),
    ("mediumseagreen", 0x3cb371),
    ("mediumslateblue", 0x7b68ee),
    ("mediumspringgreen", 0x00fa9a),
    ("mediumturquoise", 0x48d1cc),
    ("mediumvioletred", 0xc71585),
    ("midnightblue", 0x191970),
    ("mintcream", 0xf5fffa),
    ("mistyrose", 0xffe4e1),
    ("moccasin", 0xffe4b5),
    ("navajowhite", 0xffdead),
    ("navy", 0x000080),
    ("oldlace", 0xfdf5e6),
    ("olive", 0x808000),
    ("olivedrab", 0x6b8e23),
    ("orange", 0xffa500),
    ("orangered", 0xff4500),
    ("orchid", 0xda70d6),
    ("palegoldenrod", 0xeee8aa),
    ("palegreen", 0x98fb98),
    ("paleturquoise", 0xafeeee),
    ("palevioletred", 0xdb7093),
    ("papayawhip", 0xffefd5),
    ("peachpuff", 0xffdab9),
    ("peru", 0xcd853f),
    ("pink", 0xffc0cb),
    ("plum", 0xdda0dd),
    ("powderblue", 0xb0e0e6),
    ("purple", 0x800080),
    ("rebeccapurple", 0x663399),
    ("red", 0xff0000),
    ("rosybrown", 0xbc8f8f),
    ("royalblue", 0x4169e1),
    ("saddlebrown", 0x8b4513),
    ("salmon", 0xfa8072),
    ("sandybrown", 0xf4a460),
    ("seagreen", 0x2e8b57),
    ("seashell", 0xfff5ee),
    ("sienna", 0xa0522d),
    ("silver", 0xc0c0c0),
    ("skyblue", 0x87ceeb),
    ("slateblue", 0x6a5acd),
    ("slategray", 0x708090),
    ("slategrey", 0x708090),
    ("snow", 0xfffafa),
    ("springgreen", 0x00ff7f),
    ("steelblue", 0x4682b4),
    ("tan", 0xd2b48c),
    ("teal", 0x008080),
    ("thistle", 0xd8bfd8),
    ("tomato", 0xff6347),
    ("turquoise", 0x40e0d0),
    ("violet", 0xee82ee),
    ("wheat", 0xf5deb3),
    ("white", 0xffffff),
    ("whitesmoke", 0xf5f5f5),
    ("yellow", 0xffff00),
    ("yellowgreen", 0x9acd32),
];

/// An sRGB color with 8-bit channels. `alpha` is `None` for opaque colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    pub alpha: Option<u8>,
}

impl Color {
    pub const fn rgb(red: u8, green: u8, blue: u8) -> Self {
        Self {
            red,
            green,
            blue,
            alpha: None,
        }
    }

    fn from_packed(value: u32) -> Self {
        Self::rgb((value >> 16) as u8, (value >> 8) as u8, value as u8)
    }

    fn packed(&self) -> u32 {
        (u32::from(self.red) << 16) | (u32::from(self.green) << 8) | u32::from(self.blue)
    }

    pub fn parse(raw: &str) -> Result<Self, ConstraintError> {
        let invalid = || ConstraintError::InvalidColor(raw.to_string());
        let value = raw.trim().to_lowercase();

        if let Some((_, packed)) = NAMED_COLORS.iter().find(|(name, _)| *name == value) {
            return Ok(Self::from_packed(*packed));
        }

        if let Some(args) = function_args(&value, "rgba").or_else(|| function_args(&value, "rgb")) {
            return parse_rgb_function(args).ok_or_else(invalid);
        }

        let hex = value.strip_prefix('#').unwrap_or(&value);
        parse_hex(hex).ok_or_else(invalid)
    }

    /// The CSS name of this color, if it is opaque and has one.
    pub fn name(&self) -> Option<&'static str> {
        if self.alpha.is_some() {
            return None;
        }
        let packed = self.packed();
        NAMED_COLORS
            .iter()
            .find(|(_, value)| *value == packed)
            .map(|(name, _)| *name)
    }

    /// Lowercase hex: `#rrggbb`, or `#rrggbbaa` when translucent.
    pub fn to_hex(&self) -> String {
        match self.alpha {
            Some(alpha) => format!(
                "#{:02x}{:02x}{:02x}{:02x}",
                self.red, self.green, self.blue, alpha
            ),
            None => format!("#{:02x}{:02x}{:02x}", self.red, self.green, self.blue),
        }
    }
}

fn function_args<'a>(value: &'a str, name: &str) -> Option<&'a str> {
    value
        .strip_prefix(name)?
        .trim_start()
        .strip_prefix('(')?
        .strip_suffix(')')
}

fn parse_rgb_function(args: &str) -> Option<Color> {
    let parts: Vec<&str> = args.split(',').map(str::trim).collect();
    if parts.len() != 3 && parts.len() != 4 {
        return None;
    }

    let red = parts[0].parse::<u8>().ok()?;
    let green = parts[1].parse::<u8>().ok()?;
    let blue = parts[2].parse::<u8>().ok()?;

    let alpha = match parts.get(3) {
        Some(alpha) => {
            let alpha = alpha.parse::<f64>().ok()?;
            if !(0.0..=1.0).contains(&alpha) {
                return None;
            }
            opaque_as_none((alpha * 255.0).round() as u8)
        }
        None => None,
    };

    Some(Color {
        red,
        green,
        blue,
        alpha,
    })
}

fn parse_hex(hex: &str) -> Option<Color> {
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }

    let channel = |s: &str| u8::from_str_radix(s, 16).ok();
    let short = |s: &str| channel(&s.repeat(2));

    let (red, green, blue, alpha) = match hex.len() {
        3 | 4 => (
            short(&hex[0..1])?,
            short(&hex[1..2])?,
            short(&hex[2..3])?,
            if hex.len() == 4 {
                Some(short(&hex[3..4])?)
            } else {
                None
            },
        ),
        6 | 8 => (
            channel(&hex[0..2])?,
            channel(&hex[2..4])?,
            channel(&hex[4..6])?,
            if hex.len() == 8 {
                Some(channel(&hex[6..8])?)
            } else {
                None
            },
        ),
        _ => return None,
    };

    Some(Color {
        red,
        green,
        blue,
        alpha: alpha.and_then(opaque_as_none),
    })
}

fn opaque_as_none(alpha: u8) -> Option<u8> {
    if alpha == u8::MAX {
        None
    } else {
        Some(alpha)
    }
}

impl FromStr for Color {
    type Err = ConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => f.write_str(name),
            None => f.write_str(&self.to_hex()),
        }
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_named_color() {
        let color = Color::parse("Blue").unwrap();
        assert_eq!(color, Color::rgb(0, 0, 255));
        assert_eq!(color.to_string(), "blue");
    }

    #[test]
    fn test_parse_hex_forms() {
        assert_eq!(Color::parse("#00f").unwrap(), Color::rgb(0, 0, 255));
        assert_eq!(Color::parse("0000FF").unwrap(), Color::rgb(0, 0, 255));
        assert_eq!(Color::parse("#123456").unwrap().to_string(), "#123456");
        assert_eq!(
            Color::parse("#12345680").unwrap().to_string(),
            "#12345680"
        );
        assert_eq!(Color::parse("#123456ff").unwrap().alpha, None);
    }

    #[test]
    fn test_parse_rgb_functions() {
        assert_eq!(
            Color::parse("rgb(0, 79, 144)").unwrap(),
            Color::rgb(0, 79, 144)
        );
        let translucent = Color::parse("rgba(255, 0, 0, 0.5)").unwrap();
        assert_eq!(translucent.alpha, Some(128));
        assert_eq!(translucent.to_string(), "#ff000080");
        assert_eq!(translucent.name(), None);
    }

    #[test]
    fn test_canonical_form_reparses_to_same_color() {
        for raw in ["teal", "#abc", "rgb(1, 2, 3)", "rgba(10, 20, 30, 0.25)"] {
            let color = Color::parse(raw).unwrap();
            assert_eq!(Color::parse(&color.to_string()).unwrap(), color);
        }
    }

    #[test]
    fn test_invalid_colors() {
        for raw in ["blurple", "#12", "#ggg", "rgb(256, 0, 0)", "rgb(1, 2)", "rgba(1, 2, 3, 2)"] {
            assert!(
                matches!(Color::parse(raw), Err(ConstraintError::InvalidColor(_))),
                "{} should be rejected",
                raw
            );
        }
    }
}
