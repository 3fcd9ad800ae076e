//! Theme system for consistent UI colors across dark and light modes.
//!
//! Provides a centralized color palette that can follow the OS theme
//! (via the `dark-light` crate) or be pinned by configuration.

use ratatui::style::Color;

use crate::config::ThemeMode;
use crate::models::component::ComponentStyle;

/// Semantic color theme for the TUI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    /// Primary color for borders, titles, and emphasis
    pub primary: Color,
    /// Accent color for highlights, selections, and focus states
    pub accent: Color,
    /// Success state color for confirmations and passing results
    pub success: Color,
    /// Error state color for rejected placements and failing results
    pub error: Color,
    /// Warning state color for locked levels and partial results
    pub warning: Color,

    /// Primary text content color
    pub text: Color,
    /// Muted text color for help hints and placeholders
    pub text_muted: Color,

    /// Main background color
    pub background: Color,
    /// Highlight/selection background color
    pub highlight_bg: Color,

    /// Phase wire color
    pub wire_red: Color,
    /// Neutral wire color
    pub wire_blue: Color,
    /// Earth wire color
    pub wire_green: Color,
}

impl Theme {
    /// Detects the OS theme and returns the appropriate Theme.
    #[must_use]
    pub fn detect() -> Self {
        match dark_light::detect() {
            Ok(dark_light::Mode::Light) => Self::light(),
            // Fall back to dark theme for dark mode, unspecified, or errors
            Ok(dark_light::Mode::Dark | dark_light::Mode::Unspecified) | Err(_) => Self::dark(),
        }
    }

    /// Resolves the configured theme mode into a concrete theme.
    #[must_use]
    pub fn from_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Auto => Self::detect(),
            ThemeMode::Dark => Self::dark(),
            ThemeMode::Light => Self::light(),
        }
    }

    /// Dark theme optimized for dark terminal backgrounds.
    #[must_use]
    pub const fn dark() -> Self {
        Self {
            primary: Color::Cyan,
            accent: Color::Yellow,
            success: Color::Green,
            error: Color::Red,
            warning: Color::Yellow,

            text: Color::White,
            text_muted: Color::DarkGray,

            background: Color::Black,
            highlight_bg: Color::DarkGray,

            wire_red: Color::Red,
            wire_blue: Color::Blue,
            wire_green: Color::Green,
        }
    }

    /// Light theme optimized for light terminal backgrounds.
    #[must_use]
    pub const fn light() -> Self {
        Self {
            primary: Color::Blue,
            accent: Color::Rgb(180, 100, 0), // Dark orange for visibility
            success: Color::Rgb(0, 128, 0),  // Dark green
            error: Color::Red,
            warning: Color::Rgb(200, 100, 0), // Orange-brown for warnings

            text: Color::Black,
            text_muted: Color::Gray,

            background: Color::White,
            highlight_bg: Color::Rgb(230, 230, 230),

            wire_red: Color::Rgb(180, 0, 0),
            wire_blue: Color::Rgb(0, 0, 160),
            wire_green: Color::Rgb(0, 120, 0),
        }
    }

    /// Color for a component's semantic style group.
    #[must_use]
    pub const fn component_color(&self, style: ComponentStyle) -> Color {
        match style {
            ComponentStyle::Protection => self.primary,
            ComponentStyle::WireRed => self.wire_red,
            ComponentStyle::WireBlue => self.wire_blue,
            ComponentStyle::WireGreen => self.wire_green,
            ComponentStyle::Fixture => self.accent,
            ComponentStyle::Unknown => self.text_muted,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::detect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dark_theme_uses_high_contrast_text() {
        let theme = Theme::dark();
        assert_eq!(theme.text, Color::White);
        assert_eq!(theme.background, Color::Black);
    }

    #[test]
    fn light_theme_avoids_bright_accents() {
        let theme = Theme::light();
        assert_eq!(theme.text, Color::Black);
        assert_ne!(theme.accent, Color::Yellow);
    }

    #[test]
    fn pinned_modes_ignore_os_detection() {
        assert_eq!(Theme::from_mode(ThemeMode::Dark), Theme::dark());
        assert_eq!(Theme::from_mode(ThemeMode::Light), Theme::light());
    }
}
