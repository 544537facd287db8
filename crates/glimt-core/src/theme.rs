//! Theme and palette types.

use ratatui::style::Color;
use serde::{Deserialize, Serialize};

/// The active visual theme.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Dark backgrounds with bright accents.
    #[default]
    Dark,
    /// Light backgrounds with deepened accents.
    Light,
}

impl Theme {
    /// Toggle between dark and light.
    pub fn toggle(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    /// Whether this is the dark theme.
    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }
}

/// Semantic color roles resolved through the active [`Palette`].
///
/// Particles and passes reference roles rather than concrete colors so a
/// palette swap re-themes everything without touching particle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorRole {
    /// Backdrop fill behind everything.
    Background,
    /// Main node/particle color.
    Primary,
    /// Alternate node color.
    Secondary,
    /// Accent used for icons and shapes.
    Accent,
    /// Bright glow for heads and highlights.
    Glow,
    /// Connection line color.
    Line,
    /// Faint background grid.
    Grid,
    /// Near-white inner highlight.
    Highlight,
    /// Dimmed filler (dust, faint glyphs).
    Dim,
}

/// A resolved mapping from [`ColorRole`] to concrete colors, plus the
/// theme-dependent opacity boosts the light theme needs for visibility.
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    theme: Theme,
    background: Color,
    primary: Color,
    secondary: Color,
    accent: Color,
    glow: Color,
    line: Color,
    grid: Color,
    highlight: Color,
    dim: Color,
    /// Opacity multiplier for floating shapes and icons.
    pub shape_boost: f32,
    /// Opacity multiplier for connection lines.
    pub line_boost: f32,
}

impl Palette {
    /// The palette for the given theme.
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Dark => Self::dark(),
            Theme::Light => Self::light(),
        }
    }

    /// Dark theme palette: deep navy backdrop, teal and cyan accents.
    pub fn dark() -> Self {
        Self {
            theme: Theme::Dark,
            background: Color::Rgb(21, 29, 42),
            primary: Color::Rgb(45, 212, 191),
            secondary: Color::Rgb(14, 165, 233),
            accent: Color::Rgb(6, 182, 212),
            glow: Color::Rgb(200, 255, 240),
            line: Color::Rgb(34, 211, 238),
            grid: Color::Rgb(35, 52, 66),
            highlight: Color::Rgb(220, 230, 240),
            dim: Color::Rgb(70, 90, 110),
            shape_boost: 1.0,
            line_boost: 1.0,
        }
    }

    /// Light theme palette: pale backdrop with darkened accents so shapes
    /// stay visible, mirroring the boosted opacities of the dark palette.
    pub fn light() -> Self {
        Self {
            theme: Theme::Light,
            background: Color::Rgb(240, 247, 250),
            primary: Color::Rgb(4, 120, 87),
            secondary: Color::Rgb(3, 105, 161),
            accent: Color::Rgb(15, 118, 110),
            glow: Color::Rgb(10, 80, 90),
            line: Color::Rgb(14, 116, 144),
            grid: Color::Rgb(205, 220, 228),
            highlight: Color::Rgb(40, 60, 70),
            dim: Color::Rgb(150, 170, 180),
            shape_boost: 2.5,
            line_boost: 2.0,
        }
    }

    /// The theme this palette belongs to.
    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Resolve a semantic role to its concrete color.
    pub fn color(&self, role: ColorRole) -> Color {
        match role {
            ColorRole::Background => self.background,
            ColorRole::Primary => self.primary,
            ColorRole::Secondary => self.secondary,
            ColorRole::Accent => self.accent,
            ColorRole::Glow => self.glow,
            ColorRole::Line => self.line,
            ColorRole::Grid => self.grid,
            ColorRole::Highlight => self.highlight,
            ColorRole::Dim => self.dim,
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::dark()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_toggle() {
        assert_eq!(Theme::Dark.toggle(), Theme::Light);
        assert_eq!(Theme::Light.toggle(), Theme::Dark);
        assert_eq!(Theme::Dark.toggle().toggle(), Theme::Dark);
    }

    #[test]
    fn test_palette_roles_differ_between_themes() {
        let dark = Palette::for_theme(Theme::Dark);
        let light = Palette::for_theme(Theme::Light);
        assert_ne!(
            dark.color(ColorRole::Background),
            light.color(ColorRole::Background)
        );
        assert_ne!(dark.color(ColorRole::Primary), light.color(ColorRole::Primary));
    }

    #[test]
    fn test_light_theme_boosts_visibility() {
        let light = Palette::light();
        assert!(light.shape_boost > 1.0);
        assert!(light.line_boost > 1.0);
    }
}
