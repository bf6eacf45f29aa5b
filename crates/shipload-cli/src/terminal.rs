//! Terminal styling and number formatting.
//!
//! Color output honours the `NO_COLOR` convention and `TERM=dumb`.

/// ANSI escape codes used by the renderers.
pub mod colors {
    /// Reset all styling.
    pub const RESET: &str = "\x1b[0m";
    /// Bright bold white for vessel names.
    pub const WHITE_BOLD: &str = "\x1b[1;97m";
    /// Gray for secondary columns.
    pub const GRAY: &str = "\x1b[90m";
    /// Cyan for serial numbers.
    pub const CYAN: &str = "\x1b[36m";
    /// Green for accepted operations.
    pub const GREEN: &str = "\x1b[32m";
    /// Yellow for refused operations.
    pub const YELLOW: &str = "\x1b[33m";
}

/// Resolved color codes, or empty strings when color is disabled.
#[derive(Debug, Clone, Copy)]
pub struct ColorPalette {
    pub reset: &'static str,
    pub white_bold: &'static str,
    pub gray: &'static str,
    pub cyan: &'static str,
    pub green: &'static str,
    pub yellow: &'static str,
}

impl ColorPalette {
    /// Create a palette with actual ANSI color codes.
    #[must_use]
    pub const fn colored() -> Self {
        Self {
            reset: colors::RESET,
            white_bold: colors::WHITE_BOLD,
            gray: colors::GRAY,
            cyan: colors::CYAN,
            green: colors::GREEN,
            yellow: colors::YELLOW,
        }
    }

    /// Create a palette with no colors (empty strings).
    #[must_use]
    pub const fn plain() -> Self {
        Self {
            reset: "",
            white_bold: "",
            gray: "",
            cyan: "",
            green: "",
            yellow: "",
        }
    }

    /// `colored()` when the terminal supports ANSI colors, `plain()` otherwise.
    #[must_use]
    pub fn detect() -> Self {
        if supports_color() {
            Self::colored()
        } else {
            Self::plain()
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
/// Returns `false` when `NO_COLOR` is set (https://no-color.org/) or when
/// `TERM` is `dumb`.
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

/// Format a number with thousand separators (commas).
///
/// ```
/// # use shipload_cli::terminal::format_with_separators;
/// assert_eq!(format_with_separators(999), "999");
/// assert_eq!(format_with_separators(1000), "1,000");
/// assert_eq!(format_with_separators(1234567), "1,234,567");
/// ```
#[must_use]
pub fn format_with_separators(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::with_capacity(s.len() + s.len() / 3);
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result.chars().rev().collect()
}

/// Format a mass in kilograms, rounded to two decimals with trailing zeros
/// dropped, e.g. `2,450 kg` or `4.5 kg`.
#[must_use]
pub fn format_kg(kg: f64) -> String {
    let cents = (kg.abs() * 100.0).round() as u64;
    let mut out = format_with_separators(cents / 100);
    let fraction = cents % 100;
    if fraction > 0 {
        let digits = format!("{fraction:02}");
        out.push('.');
        out.push_str(digits.trim_end_matches('0'));
    }
    if kg < 0.0 && cents > 0 {
        out.insert(0, '-');
    }
    out.push_str(" kg");
    out
}
