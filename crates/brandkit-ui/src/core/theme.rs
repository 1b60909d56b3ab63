//! Runtime theme injection driven by the branding accent color.
//!
//! # Design
//! - Only six-digit hex (optional `#`, any case) is accepted; anything else is skipped.
//! - The generated block is installed into one well-known style element, replaced wholesale.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::core::ports::StyleHost;
use crate::core::setting::DEFAULT_PRIMARY_COLOR;

static HEX_COLOR: Lazy<Option<Regex>> =
    Lazy::new(|| Regex::new(r"(?i)^#?([0-9a-f]{2})([0-9a-f]{2})([0-9a-f]{2})$").ok());

/// Red/green/blue channels of an accent color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb {
    /// Comma-separated channels, suitable for `rgba(var(--primary-color-rgb), a)`.
    #[must_use]
    pub fn channels(self) -> String {
        format!("{}, {}, {}", self.r, self.g, self.b)
    }
}

/// Parse `#RRGGBB` (case-insensitive, `#` optional).
#[must_use]
pub fn parse_hex(color: &str) -> Option<Rgb> {
    let captures = HEX_COLOR.as_ref()?.captures(color)?;
    let channel = |idx: usize| {
        captures
            .get(idx)
            .and_then(|m| u8::from_str_radix(m.as_str(), 16).ok())
    };
    Some(Rgb {
        r: channel(1)?,
        g: channel(2)?,
        b: channel(3)?,
    })
}

/// Style block for `color` with channels `rgb`.
#[must_use]
pub fn theme_css(color: &str, rgb: Rgb) -> String {
    let channels = rgb.channels();
    format!(
        r":root {{
  --primary-color: {color};
  --primary-color-rgb: {channels};
}}
.mat-toolbar.mat-primary {{
  background-color: {color} !important;
}}
.mat-button.mat-primary,
.mat-icon-button.mat-primary,
.mat-stroked-button.mat-primary {{
  color: {color} !important;
}}
.mat-flat-button.mat-primary,
.mat-raised-button.mat-primary,
.mat-fab.mat-primary,
.mat-mini-fab.mat-primary {{
  background-color: {color} !important;
}}
.mat-stroked-button.mat-primary {{
  border-color: {color} !important;
}}
.mat-form-field.mat-focused .mat-form-field-label {{
  color: {color} !important;
}}
.mat-form-field.mat-focused .mat-form-field-ripple {{
  background-color: {color} !important;
}}
.mat-checkbox-checked .mat-checkbox-background {{
  background-color: {color} !important;
}}
.mat-button-toggle-checked {{
  background-color: {color} !important;
  color: #fff !important;
}}
"
    )
}

/// Install the theme for `color` into the style element `style_id`.
///
/// An empty color falls back to [`DEFAULT_PRIMARY_COLOR`]. Returns the parsed
/// channels, or `None` when the color is not six-digit hex and the existing
/// style element was left untouched.
#[must_use]
pub fn apply_primary_color(styles: &dyn StyleHost, style_id: &str, color: &str) -> Option<Rgb> {
    let color = if color.is_empty() {
        DEFAULT_PRIMARY_COLOR
    } else {
        color
    };
    let rgb = parse_hex(color)?;
    styles.install_style(style_id, &theme_css(color, rgb));
    Some(rgb)
}

#[cfg(test)]
mod tests {
    use super::{Rgb, apply_primary_color, parse_hex};
    use crate::core::ports::memory::MemoryDocument;

    const STYLE_ID: &str = "dynamic-theme-styles";

    #[test]
    fn parses_six_digit_hex_in_any_case() {
        assert_eq!(parse_hex("#3366CC"), Some(Rgb { r: 51, g: 102, b: 204 }));
        assert_eq!(parse_hex("3366cc"), Some(Rgb { r: 51, g: 102, b: 204 }));
        assert_eq!(parse_hex("#000000"), Some(Rgb { r: 0, g: 0, b: 0 }));
    }

    #[test]
    fn rejects_short_named_and_padded_colors() {
        assert_eq!(parse_hex("#36c"), None);
        assert_eq!(parse_hex("red"), None);
        assert_eq!(parse_hex("not-a-color"), None);
        assert_eq!(parse_hex(" #3366cc"), None);
        assert_eq!(parse_hex("##3366cc"), None);
        assert_eq!(parse_hex("#3366cc00"), None);
    }

    #[test]
    fn injects_custom_properties() {
        let document = MemoryDocument::new();
        let rgb = apply_primary_color(&document, STYLE_ID, "#3366CC");
        assert_eq!(rgb, Some(Rgb { r: 51, g: 102, b: 204 }));
        let css = document.style(STYLE_ID).expect("style installed");
        assert!(css.contains("--primary-color: #3366CC;"));
        assert!(css.contains("--primary-color-rgb: 51, 102, 204;"));
        assert!(css.contains(".mat-button-toggle-checked"));
    }

    #[test]
    fn invalid_color_leaves_existing_style_untouched() {
        let document = MemoryDocument::new();
        assert!(apply_primary_color(&document, STYLE_ID, "#ff0000").is_some());
        let before = document.style(STYLE_ID);
        assert_eq!(apply_primary_color(&document, STYLE_ID, "not-a-color"), None);
        assert_eq!(document.style(STYLE_ID), before);
        assert_eq!(document.style_count(), 1);
    }

    #[test]
    fn invalid_color_on_fresh_document_creates_nothing() {
        let document = MemoryDocument::new();
        assert_eq!(apply_primary_color(&document, STYLE_ID, "blue"), None);
        assert_eq!(document.style_count(), 0);
    }

    #[test]
    fn repeated_injection_replaces_instead_of_accumulating() {
        let document = MemoryDocument::new();
        assert!(apply_primary_color(&document, STYLE_ID, "#ff0000").is_some());
        assert!(apply_primary_color(&document, STYLE_ID, "#00ff00").is_some());
        assert_eq!(document.style_count(), 1);
        let css = document.style(STYLE_ID).expect("style installed");
        assert!(css.contains("#00ff00"));
        assert!(!css.contains("#ff0000"));
    }

    #[test]
    fn empty_color_uses_default() {
        let document = MemoryDocument::new();
        let rgb = apply_primary_color(&document, STYLE_ID, "");
        assert_eq!(rgb, Some(Rgb { r: 63, g: 81, b: 181 }));
    }
}
