//! Soft ambient backdrops: bokeh, floating icons, glow orbs.

use glimt_core::ColorRole;

use crate::chars::{BOKEH_CHARS, ICON_CHARS};
use crate::field::{FieldConfig, OscillationSpread, ParticleKind, Spread};
use crate::pass::{FillPass, ParticlePass, RenderPass};

use super::{scaled, EffectSpec, FieldDef};

/// Out-of-focus circles swaying gently, pulsing in brightness.
pub fn bokeh(width: u16, height: u16, density: f32) -> EffectSpec {
    let circles = FieldConfig {
        speed: Spread::new(0.1, 0.5),
        radius: Spread::new(0.2, 2.0),
        opacity: Spread::new(0.2, 0.7),
        sway: Some(OscillationSpread {
            amplitude: Spread::new(0.5, 2.0),
            frequency: Spread::new(0.2, 0.7),
        }),
        bob: Some(OscillationSpread {
            amplitude: Spread::new(0.3, 1.2),
            frequency: Spread::new(0.15, 0.5),
        }),
        pulse: Some(OscillationSpread {
            amplitude: Spread::new(0.1, 0.4),
            frequency: Spread::new(0.4, 1.2),
        }),
        color_roles: &[
            ColorRole::Primary,
            ColorRole::Secondary,
            ColorRole::Accent,
            ColorRole::Glow,
        ],
        ..FieldConfig::new(ParticleKind::Bokeh, scaled(20, width, height, density, 60))
    };

    EffectSpec {
        fields: vec![FieldDef::unlinked(circles)],
        passes: vec![
            Box::new(FillPass) as Box<dyn RenderPass>,
            Box::new(ParticlePass { field: 0, glyphs: BOKEH_CHARS }),
        ],
    }
}

/// Icon glyphs drifting with pointer parallax.
pub fn floating_icons(width: u16, height: u16, density: f32) -> EffectSpec {
    let icons = FieldConfig {
        speed: Spread::new(0.2, 0.8),
        opacity: Spread::new(0.3, 0.8),
        sway: Some(OscillationSpread {
            amplitude: Spread::new(0.8, 2.5),
            frequency: Spread::new(0.2, 0.6),
        }),
        bob: Some(OscillationSpread {
            amplitude: Spread::new(0.5, 1.5),
            frequency: Spread::new(0.15, 0.45),
        }),
        color_roles: &[ColorRole::Primary, ColorRole::Secondary, ColorRole::Accent],
        parallax: 0.06,
        ..FieldConfig::new(ParticleKind::Icon, scaled(10, width, height, density, 24))
    };

    EffectSpec {
        fields: vec![FieldDef::unlinked(icons)],
        passes: vec![
            Box::new(FillPass) as Box<dyn RenderPass>,
            Box::new(ParticlePass { field: 0, glyphs: ICON_CHARS }),
        ],
    }
}

/// A few large radial glows drifting slowly.
pub fn orbs(width: u16, height: u16, density: f32) -> EffectSpec {
    let glows = FieldConfig {
        speed: Spread::new(0.1, 0.4),
        radius: Spread::new(3.0, 7.0),
        opacity: Spread::new(0.3, 0.6),
        pulse: Some(OscillationSpread {
            amplitude: Spread::new(0.05, 0.15),
            frequency: Spread::new(0.2, 0.5),
        }),
        color_roles: &[ColorRole::Glow, ColorRole::Accent],
        parallax: 0.03,
        ..FieldConfig::new(ParticleKind::Orb, scaled(4, width, height, density, 8))
    };

    EffectSpec {
        fields: vec![FieldDef::unlinked(glows)],
        passes: vec![
            Box::new(FillPass) as Box<dyn RenderPass>,
            Box::new(ParticlePass { field: 0, glyphs: &[] }),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bokeh_oscillates_on_both_axes() {
        let spec = bokeh(80, 24, 1.0);
        let config = &spec.fields[0].config;
        assert!(config.sway.is_some());
        assert!(config.bob.is_some());
        assert!(config.pulse.is_some());
    }

    #[test]
    fn test_icons_respond_to_pointer() {
        let spec = floating_icons(80, 24, 1.0);
        assert!(spec.fields[0].config.parallax > 0.0);
    }

    #[test]
    fn test_orbs_stay_sparse() {
        let spec = orbs(300, 100, 3.0);
        assert!(spec.fields[0].config.count <= 8);
    }
}
