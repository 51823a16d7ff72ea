//! Terminal styling and color utilities.
//!
//! ANSI escape code definitions and color detection for text output.

/// ANSI escape codes for text styling and colors.
pub mod colors {
    /// Reset all styling.
    pub const RESET: &str = "\x1b[0m";
    /// Bright bold white for node names.
    pub const WHITE_BOLD: &str = "\x1b[1;97m";
    /// Gray for secondary elements (tree lines, edge ids).
    pub const GRAY: &str = "\x1b[90m";
    /// Cyan for travel times.
    pub const CYAN: &str = "\x1b[36m";
    /// Green for calm roads (tension below 0.3).
    pub const GREEN: &str = "\x1b[32m";
    /// Orange (256-color) for busy roads.
    pub const ORANGE: &str = "\x1b[38;5;208m";
    /// Red for tense roads (tension 0.7 and above).
    pub const RED: &str = "\x1b[31m";
}

/// Resolved color codes, either ANSI sequences or empty strings when color
/// is disabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorPalette {
    pub reset: &'static str,
    pub white_bold: &'static str,
    pub gray: &'static str,
    pub cyan: &'static str,
    pub green: &'static str,
    pub orange: &'static str,
    pub red: &'static str,
}

impl ColorPalette {
    #[must_use]
    pub const fn colored() -> Self {
        Self {
            reset: colors::RESET,
            white_bold: colors::WHITE_BOLD,
            gray: colors::GRAY,
            cyan: colors::CYAN,
            green: colors::GREEN,
            orange: colors::ORANGE,
            red: colors::RED,
        }
    }

    #[must_use]
    pub const fn plain() -> Self {
        Self {
            reset: "",
            white_bold: "",
            gray: "",
            cyan: "",
            green: "",
            orange: "",
            red: "",
        }
    }

    /// `colored()` if the terminal supports ANSI colors, otherwise `plain()`.
    #[must_use]
    pub fn detect() -> Self {
        if supports_color() {
            Self::colored()
        } else {
            Self::plain()
        }
    }

    /// Color for a road tension value in `[0, 1]`.
    #[must_use]
    pub fn tension(&self, tension: f64) -> &'static str {
        if tension >= 0.7 {
            self.red
        } else if tension >= 0.3 {
            self.orange
        } else {
            self.green
        }
    }
}

impl Default for ColorPalette {
    fn default() -> Self {
        Self::detect()
    }
}

/// Check if the terminal supports ANSI color codes.
///
/// Respects `NO_COLOR` (<https://no-color.org/>) and `TERM=dumb`.
#[must_use]
pub fn supports_color() -> bool {
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    if let Ok(term) = std::env::var("TERM") {
        if term.eq_ignore_ascii_case("dumb") {
            return false;
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_palette_is_empty() {
        let palette = ColorPalette::plain();
        assert!(palette.reset.is_empty());
        assert!(palette.tension(0.9).is_empty());
    }

    #[test]
    fn test_tension_colors() {
        let palette = ColorPalette::colored();
        assert_eq!(palette.tension(0.1), colors::GREEN);
        assert_eq!(palette.tension(0.3), colors::ORANGE);
        assert_eq!(palette.tension(0.8), colors::RED);
    }
}
