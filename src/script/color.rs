use std::{fmt::Display, sync::LazyLock};

use regex::Regex;

use crate::{error::ScriptError, script::ScriptResult};

/// Every accepted color name, lowercase and sorted.
pub const NAMED_COLORS: &[&str] = &[
    "aliceblue", "antiquewhite", "aqua", "aquamarine", "azure", "beige", "bisque", "black",
    "blanchedalmond", "blue", "blueviolet", "brown", "burlywood", "cadetblue", "chartreuse",
    "chocolate", "coral", "cornflowerblue", "cornsilk", "crimson", "cyan", "darkblue", "darkcyan",
    "darkgoldenrod", "darkgray", "darkgreen", "darkgrey", "darkkhaki", "darkmagenta",
    "darkolivegreen", "darkorange", "darkorchid", "darkred", "darksalmon", "darkseagreen",
    "darkslateblue", "darkslategray", "darkslategrey", "darkturquoise", "darkviolet", "deeppink",
    "deepskyblue", "dimgray", "dimgrey", "dodgerblue", "firebrick", "floralwhite", "forestgreen",
    "fuchsia", "gainsboro", "ghostwhite", "gold", "goldenrod", "gray", "green", "greenyellow",
    "grey", "honeydew", "hotpink", "indianred", "indigo", "ivory", "khaki", "lavender",
    "lavenderblush", "lawngreen", "lemonchiffon", "lightblue", "lightcoral", "lightcyan",
    "lightgoldenrodyellow", "lightgray", "lightgreen", "lightgrey", "lightpink", "lightsalmon",
    "lightseagreen", "lightskyblue", "lightslategray", "lightslategrey", "lightsteelblue",
    "lightyellow", "lime", "limegreen", "linen", "magenta", "maroon", "mediumaquamarine",
    "mediumblue", "mediumorchid", "mediumpurple", "mediumseagreen", "mediumslateblue",
    "mediumspringgreen", "mediumturquoise", "mediumvioletred", "midnightblue", "mintcream",
    "mistyrose", "moccasin", "navajowhite", "navy", "oldlace", "olive", "olivedrab", "orange",
    "orangered", "orchid", "palegoldenrod", "palegreen", "paleturquoise", "palevioletred",
    "papayawhip", "peachpuff", "peru", "pink", "plum", "powderblue", "purple", "red", "rosybrown",
    "royalblue", "saddlebrown", "salmon", "sandybrown", "seagreen", "seashell", "sienna",
    "silver", "skyblue", "slateblue", "slategray", "slategrey", "snow", "springgreen",
    "steelblue", "tan", "teal", "thistle", "tomato", "turquoise", "violet", "wheat", "white",
    "whitesmoke", "yellow", "yellowgreen",
];

/// A validated color: a lowercase name from [`NAMED_COLORS`] or a `#rrggbb`
/// hex code.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Color(String);

impl Color {
    /// Validates and lowercases a color token.
    ///
    /// # Errors
    /// Returns [`ScriptError::InvalidColor`] for anything that is neither a
    /// known name nor a hex code.
    ///
    /// # Example
    /// ```
    /// use graph_gen::script::color::Color;
    ///
    /// assert_eq!(Color::new("Red").unwrap().as_str(), "red");
    /// assert_eq!(Color::new("#00FF00").unwrap().as_str(), "#00ff00");
    /// assert!(Color::new("reddish").is_err());
    /// ```
    pub fn new(color: &str) -> ScriptResult<Self> {
        let color = color.to_lowercase();
        validate_color(Some(&color))?;
        Ok(Self(color))
    }

    /// The color as written in the script, lowercased.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The color text annotations fall back to.
    #[must_use]
    pub fn black() -> Self {
        Self("black".to_string())
    }
}

impl Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Checks a color against the named set and the hex pattern.
///
/// `None` means "use the default color" and is always valid. Matching is
/// case-insensitive.
///
/// # Errors
/// Returns [`ScriptError::InvalidColor`] carrying the lowercased color.
///
/// # Example
/// ```
/// use graph_gen::script::color::validate_color;
///
/// assert!(validate_color(None).is_ok());
/// assert!(validate_color(Some("AliceBlue")).is_ok());
/// assert!(validate_color(Some("#1a2b3c")).is_ok());
/// assert!(validate_color(Some("#1a2b3")).is_err());
/// assert!(validate_color(Some("#1a2b3g")).is_err());
/// ```
pub fn validate_color(color: Option<&str>) -> ScriptResult<()> {
    let Some(color) = color else {
        return Ok(());
    };
    let color = color.to_lowercase();

    if NAMED_COLORS.binary_search(&color.as_str()).is_ok() || is_hex_color(&color) {
        Ok(())
    } else {
        Err(ScriptError::InvalidColor { color })
    }
}

/// `#` followed by exactly six hex digits, matched after lowercasing.
static HEX_COLOR: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"^#[0-9a-f]{6}$").ok());

fn is_hex_color(color: &str) -> bool {
    HEX_COLOR.as_ref().is_some_and(|re| re.is_match(color))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_colors_are_sorted_and_unique() {
        assert!(NAMED_COLORS.windows(2).all(|pair| pair[0] < pair[1]));
        assert_eq!(NAMED_COLORS.len(), 147);
    }

    #[test]
    fn every_hex_code_is_accepted() {
        for digits in ["000000", "ffffff", "0a1b2c", "abcdef", "123456", "FfEeDd"] {
            assert!(validate_color(Some(&format!("#{digits}"))).is_ok(), "{digits}");
        }
    }

    #[test]
    fn near_misses_are_rejected() {
        for color in ["#fff", "#fffffff", "ffffff", "#gggggg", "##fffff", "#ff ff0", "", "rojo"] {
            assert_eq!(validate_color(Some(color)),
                       Err(ScriptError::InvalidColor { color: color.to_lowercase() }),
                       "{color}");
        }
    }

    #[test]
    fn hex_pattern_is_anchored_at_both_ends() {
        assert!(HEX_COLOR.is_some());
        assert!(is_hex_color("#0a1b2c"));
        assert!(!is_hex_color("#0a1b2c3"));
        assert!(!is_hex_color("x#0a1b2c"));
        assert!(!is_hex_color("#0A1B2C"));
    }

    #[test]
    fn named_colors_ignore_case() {
        assert!(validate_color(Some("DarkSlateGrey")).is_ok());
        assert!(validate_color(Some("WHITE")).is_ok());
    }

    #[test]
    fn invalid_color_message_points_to_the_reference() {
        let message = Color::new("blurple").unwrap_err().to_string();
        assert!(message.starts_with("\"blurple\" is not a valid color."));
        assert!(message.contains("hex"));
    }
}
