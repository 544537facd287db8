//! Falling and rising glyph backdrops.

use glimt_core::ColorRole;

use crate::chars::{BIT_CHARS, RAIN_CHARS};
use crate::field::{DriftDirection, FieldConfig, OscillationSpread, ParticleKind, Spread};
use crate::pass::{FillPass, ParticlePass, RenderPass};

use super::{scaled, EffectSpec, FieldDef};

/// Katakana rain: glyph trails falling at varied speeds, bright heads.
pub fn digital_rain(width: u16, height: u16, density: f32) -> EffectSpec {
    let drops = FieldConfig {
        direction: DriftDirection::Down,
        speed: Spread::new(5.0, 14.0),
        radius: Spread::new(0.5, 1.0),
        opacity: Spread::new(0.4, 0.9),
        trail: Some((4, 12)),
        color_roles: &[ColorRole::Primary],
        ..FieldConfig::new(ParticleKind::Drop, scaled(24, width, height, density, 120))
    };

    EffectSpec {
        fields: vec![FieldDef::unlinked(drops)],
        passes: vec![
            Box::new(FillPass) as Box<dyn RenderPass>,
            Box::new(ParticlePass { field: 0, glyphs: RAIN_CHARS }),
        ],
    }
}

/// Binary digits drifting upward, flickering as they go.
pub fn binary(width: u16, height: u16, density: f32) -> EffectSpec {
    let bits = FieldConfig {
        direction: DriftDirection::Up,
        speed: Spread::new(1.0, 3.5),
        opacity: Spread::new(0.2, 0.7),
        pulse: Some(OscillationSpread {
            amplitude: Spread::new(0.3, 0.8),
            frequency: Spread::new(2.0, 6.0),
        }),
        color_roles: &[ColorRole::Primary, ColorRole::Secondary],
        ..FieldConfig::new(ParticleKind::Bit, scaled(40, width, height, density, 160))
    };

    EffectSpec {
        fields: vec![FieldDef::unlinked(bits)],
        passes: vec![
            Box::new(FillPass) as Box<dyn RenderPass>,
            Box::new(ParticlePass { field: 0, glyphs: BIT_CHARS }),
        ],
    }
}
