//! Color theme system for mindcare.
//!
//! A `Theme` holds named `ratatui::style::Color` fields covering every surface
//! the three screens render. Two built-in themes are provided:
//!
//! - `dark`: ANSI 16 colors only, so it works on any terminal.
//! - `catppuccin_mocha`: Catppuccin Mocha palette in RGB; needs truecolor.

use mindcare_core::types::EmotionalIntensity;
use ratatui::style::Color;

#[derive(Debug, Clone)]
pub struct Theme {
    // Panel borders
    pub border_active: Color,
    pub border_inactive: Color,

    // Text
    /// Headings and the "MindCare AI" badge.
    pub accent: Color,
    pub text: Color,
    /// Placeholders, hints, footers.
    pub muted: Color,

    // Input screen
    pub mood_selected: Color,
    pub error: Color,
    pub button_enabled: Color,
    pub button_disabled: Color,

    // Insight screen
    pub keyword: Color,
    pub intensity_low: Color,
    pub intensity_medium: Color,
    pub intensity_high: Color,
    /// Crisis banner and emergency lifeline.
    pub support: Color,

    // Status bar
    pub status_bar_bg: Color,
    pub status_bar_fg: Color,
    pub status_screen: Color,
    pub status_busy: Color,
}

impl Theme {
    /// Built-in theme using ANSI 16 colors. Safe default for any terminal.
    pub fn dark() -> Self {
        Self {
            border_active: Color::Cyan,
            border_inactive: Color::DarkGray,

            accent: Color::Magenta,
            text: Color::Reset,
            muted: Color::DarkGray,

            mood_selected: Color::Magenta,
            error: Color::Red,
            button_enabled: Color::Cyan,
            button_disabled: Color::DarkGray,

            keyword: Color::Magenta,
            intensity_low: Color::Green,
            intensity_medium: Color::Yellow,
            intensity_high: Color::Red,
            support: Color::Cyan,

            status_bar_bg: Color::DarkGray,
            status_bar_fg: Color::White,
            status_screen: Color::Cyan,
            status_busy: Color::Yellow,
        }
    }

    /// Catppuccin Mocha theme using RGB truecolor values.
    ///
    /// Palette source: <https://github.com/catppuccin/catppuccin> Mocha variant.
    pub fn catppuccin_mocha() -> Self {
        let green = Color::Rgb(166, 227, 161);    // #a6e3a1
        let red = Color::Rgb(243, 139, 168);      // #f38ba8
        let yellow = Color::Rgb(249, 226, 175);   // #f9e2af
        let teal = Color::Rgb(148, 226, 213);     // #94e2d5
        let mauve = Color::Rgb(203, 166, 247);    // #cba6f7
        let lavender = Color::Rgb(180, 190, 254); // #b4befe
        let pink = Color::Rgb(245, 194, 231);     // #f5c2e7
        let overlay1 = Color::Rgb(127, 132, 156); // #7f849c
        let surface1 = Color::Rgb(69, 71, 90);    // #45475a
        let text = Color::Rgb(205, 214, 244);     // #cdd6f4
        let peach = Color::Rgb(250, 179, 135);    // #fab387

        Self {
            border_active: lavender,
            border_inactive: overlay1,

            accent: mauve,
            text,
            muted: overlay1,

            mood_selected: mauve,
            error: red,
            button_enabled: lavender,
            button_disabled: surface1,

            keyword: pink,
            intensity_low: green,
            intensity_medium: yellow,
            intensity_high: peach,
            support: teal,

            status_bar_bg: surface1,
            status_bar_fg: text,
            status_screen: lavender,
            status_busy: yellow,
        }
    }

    /// Resolves a theme name from config. Unknown names fall back to `dark()`
    /// with a warning so a typo never prevents startup.
    pub fn from_name(name: &str) -> Self {
        match name {
            "catppuccin-mocha" | "catppuccin_mocha" => Self::catppuccin_mocha(),
            "dark" => Self::dark(),
            other => {
                tracing::warn!(theme = other, "unknown theme, falling back to 'dark'");
                Self::dark()
            }
        }
    }

    /// Badge color for an intensity. Unrecognised values get the muted color.
    pub fn intensity(&self, intensity: &EmotionalIntensity) -> Color {
        match intensity {
            EmotionalIntensity::Low => self.intensity_low,
            EmotionalIntensity::Medium => self.intensity_medium,
            EmotionalIntensity::High => self.intensity_high,
            EmotionalIntensity::Other(_) => self.muted,
        }
    }
}
