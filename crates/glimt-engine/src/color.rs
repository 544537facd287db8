//! Color utility functions for backdrop rendering.

use ratatui::style::Color;

/// Scale an RGB color toward black by `factor` (0.0 = black, 1.0 = unchanged).
///
/// Terminal cells have no alpha channel, so opacity is emulated by dimming
/// the foreground toward the backdrop.
pub fn dim(color: Color, factor: f32) -> Color {
    let factor = factor.clamp(0.0, 1.0);
    match color {
        Color::Rgb(r, g, b) => Color::Rgb(
            (r as f32 * factor) as u8,
            (g as f32 * factor) as u8,
            (b as f32 * factor) as u8,
        ),
        other => other,
    }
}

/// Convert HSL to RGB color.
pub fn hsl_to_rgb(h: f32, s: f32, l: f32) -> Color {
    if s == 0.0 {
        let v = (l * 255.0) as u8;
        return Color::Rgb(v, v, v);
    }

    let q = if l < 0.5 {
        l * (1.0 + s)
    } else {
        l + s - l * s
    };
    let p = 2.0 * l - q;

    let h = h / 360.0;

    let r = hue_to_rgb(p, q, h + 1.0 / 3.0);
    let g = hue_to_rgb(p, q, h);
    let b = hue_to_rgb(p, q, h - 1.0 / 3.0);

    Color::Rgb((r * 255.0) as u8, (g * 255.0) as u8, (b * 255.0) as u8)
}

fn hue_to_rgb(p: f32, q: f32, mut t: f32) -> f32 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }

    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dim_scales_rgb() {
        assert_eq!(dim(Color::Rgb(200, 100, 50), 0.5), Color::Rgb(100, 50, 25));
        assert_eq!(dim(Color::Rgb(200, 100, 50), 0.0), Color::Rgb(0, 0, 0));
        assert_eq!(dim(Color::Rgb(200, 100, 50), 1.0), Color::Rgb(200, 100, 50));
    }

    #[test]
    fn test_dim_clamps_factor() {
        assert_eq!(dim(Color::Rgb(100, 100, 100), 2.0), Color::Rgb(100, 100, 100));
    }

    #[test]
    fn test_hsl_grayscale() {
        assert_eq!(hsl_to_rgb(0.0, 0.0, 0.5), Color::Rgb(127, 127, 127));
    }

    #[test]
    fn test_hsl_primary_hues() {
        // Pure red at hue 0, full saturation, half lightness.
        assert_eq!(hsl_to_rgb(0.0, 1.0, 0.5), Color::Rgb(255, 0, 0));
        assert_eq!(hsl_to_rgb(120.0, 1.0, 0.5), Color::Rgb(0, 255, 0));
        assert_eq!(hsl_to_rgb(240.0, 1.0, 0.5), Color::Rgb(0, 0, 255));
    }
}
