//! Backdrop definitions: which fields and passes make up each effect.
//!
//! An [`EffectSpec`] is a pure description; the driver instantiates the
//! fields from it. Particle counts scale with the surface area relative
//! to a reference terminal, multiplied by the configured density.

mod ambient;
mod network;
mod rain;

use glimt_core::EffectKind;

use crate::field::FieldConfig;
use crate::graph::LinkStrategy;
use crate::pass::{FillPass, PlasmaPass, RenderPass};

/// One field plus its per-frame link strategy.
pub struct FieldDef {
    pub config: FieldConfig,
    pub links: LinkStrategy,
}

impl FieldDef {
    pub fn unlinked(config: FieldConfig) -> Self {
        Self {
            config,
            links: LinkStrategy::None,
        }
    }
}

/// Everything the driver needs to assemble one backdrop.
pub struct EffectSpec {
    pub fields: Vec<FieldDef>,
    pub passes: Vec<Box<dyn RenderPass>>,
}

/// Build the spec for an effect at the given surface size and density.
pub fn build(kind: EffectKind, width: u16, height: u16, density: f32) -> EffectSpec {
    match kind {
        EffectKind::DataFlow => network::data_flow(width, height, density),
        EffectKind::Circuit => network::circuit(width, height, density),
        EffectKind::DigitalRain => rain::digital_rain(width, height, density),
        EffectKind::Binary => rain::binary(width, height, density),
        EffectKind::Bokeh => ambient::bokeh(width, height, density),
        EffectKind::FloatingIcons => ambient::floating_icons(width, height, density),
        EffectKind::Orbs => ambient::orbs(width, height, density),
        EffectKind::Plasma => plasma(),
    }
}

fn plasma() -> EffectSpec {
    EffectSpec {
        fields: Vec::new(),
        passes: vec![Box::new(FillPass), Box::new(PlasmaPass)],
    }
}

/// Reference surface the base counts were tuned at.
const REF_AREA: f32 = 80.0 * 24.0;

/// Scale a base count by surface area and density, capped at `max`.
pub(crate) fn scaled(base: usize, width: u16, height: u16, density: f32, max: usize) -> usize {
    let area = width as f32 * height as f32;
    if area <= 0.0 {
        return 0;
    }
    let count = (base as f32 * (area / REF_AREA) * density).round() as usize;
    count.min(max)
}

#[cfg(test)]
mod tests {
    use super::*;
    use glimt_core::EffectKind;

    #[test]
    fn test_every_effect_builds() {
        for kind in EffectKind::ALL {
            let spec = build(kind, 80, 24, 1.0);
            assert!(!spec.passes.is_empty(), "{kind:?} has no passes");
        }
    }

    #[test]
    fn test_counts_scale_with_area() {
        let small = build(EffectKind::Bokeh, 40, 12, 1.0);
        let large = build(EffectKind::Bokeh, 160, 48, 1.0);
        assert!(small.fields[0].config.count < large.fields[0].config.count);
    }

    #[test]
    fn test_node_count_is_capped() {
        let spec = build(EffectKind::DataFlow, 400, 120, 3.0);
        for def in &spec.fields {
            if !matches!(def.links, LinkStrategy::None) {
                assert!(def.config.count <= 30, "linked field too dense");
            }
        }
    }

    #[test]
    fn test_zero_density_spawns_nothing() {
        let spec = build(EffectKind::DataFlow, 80, 24, 0.0);
        for def in &spec.fields {
            assert_eq!(def.config.count, 0);
        }
    }

    #[test]
    fn test_zero_area_spawns_nothing() {
        assert_eq!(scaled(20, 0, 24, 1.0, 100), 0);
        assert_eq!(scaled(20, 80, 0, 1.0, 100), 0);
    }

    #[test]
    fn test_plasma_has_no_fields() {
        let spec = build(EffectKind::Plasma, 80, 24, 1.0);
        assert!(spec.fields.is_empty());
        assert_eq!(spec.passes.len(), 2);
    }
}
