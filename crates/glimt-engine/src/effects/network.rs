//! Network-style backdrops: linked node meshes over a faint grid.

use glimt_core::ColorRole;

use crate::chars::{DUST_CHARS, INFRA_CHARS};
use crate::field::{DriftDirection, FieldConfig, OscillationSpread, ParticleKind, Spread};
use crate::graph::LinkStrategy;
use crate::pass::{FillPass, GridPass, LinkPass, ParticlePass};

use super::{scaled, EffectSpec, FieldDef};

/// Drifting nodes joined by proximity links, with infrastructure icons
/// floating between them.
pub fn data_flow(width: u16, height: u16, density: f32) -> EffectSpec {
    let nodes = FieldConfig {
        speed: Spread::new(0.5, 1.5),
        radius: Spread::new(1.0, 2.5),
        opacity: Spread::new(0.4, 0.9),
        pulse: Some(OscillationSpread {
            amplitude: Spread::new(0.1, 0.3),
            frequency: Spread::new(0.8, 2.0),
        }),
        color_roles: &[ColorRole::Primary, ColorRole::Secondary, ColorRole::Accent],
        ..FieldConfig::new(ParticleKind::Node, scaled(16, width, height, density, 30))
    };

    let icons = FieldConfig {
        speed: Spread::new(0.2, 0.6),
        opacity: Spread::new(0.3, 0.6),
        sway: Some(OscillationSpread {
            amplitude: Spread::new(0.5, 1.5),
            frequency: Spread::new(0.3, 0.8),
        }),
        bob: Some(OscillationSpread {
            amplitude: Spread::new(0.3, 1.0),
            frequency: Spread::new(0.2, 0.6),
        }),
        color_roles: &[ColorRole::Secondary, ColorRole::Accent],
        ..FieldConfig::new(ParticleKind::Icon, scaled(5, width, height, density, 12))
    };

    let dust = FieldConfig {
        speed: Spread::new(0.3, 1.0),
        opacity: Spread::new(0.15, 0.4),
        ..FieldConfig::new(ParticleKind::Dust, scaled(30, width, height, density, 80))
    };

    EffectSpec {
        fields: vec![
            FieldDef {
                config: nodes,
                links: LinkStrategy::AllPairs { max_distance: 22.0 },
            },
            FieldDef::unlinked(icons),
            FieldDef::unlinked(dust),
        ],
        passes: vec![
            Box::new(FillPass),
            Box::new(GridPass { x_step: 8, y_step: 4 }),
            Box::new(ParticlePass { field: 2, glyphs: DUST_CHARS }),
            Box::new(LinkPass { field: 0 }),
            Box::new(ParticlePass { field: 1, glyphs: INFRA_CHARS }),
            Box::new(ParticlePass { field: 0, glyphs: &[] }),
        ],
    }
}

/// Sparse circuit mesh: each node links to its nearest neighbors only,
/// skipping pairs that sit on top of each other.
pub fn circuit(width: u16, height: u16, density: f32) -> EffectSpec {
    let nodes = FieldConfig {
        speed: Spread::new(0.3, 0.9),
        radius: Spread::new(0.5, 1.5),
        opacity: Spread::new(0.5, 1.0),
        pulse: Some(OscillationSpread {
            amplitude: Spread::new(0.2, 0.5),
            frequency: Spread::new(1.0, 3.0),
        }),
        color_roles: &[ColorRole::Accent, ColorRole::Line],
        ..FieldConfig::new(ParticleKind::Node, scaled(22, width, height, density, 30))
    };

    let sparks = FieldConfig {
        direction: DriftDirection::Up,
        speed: Spread::new(1.0, 3.0),
        opacity: Spread::new(0.1, 0.3),
        ..FieldConfig::new(ParticleKind::Dust, scaled(15, width, height, density, 40))
    };

    EffectSpec {
        fields: vec![
            FieldDef {
                config: nodes,
                links: LinkStrategy::Nearest {
                    max_distance: 25.0,
                    min_distance: 2.5,
                    max_per_node: 2,
                },
            },
            FieldDef::unlinked(sparks),
        ],
        passes: vec![
            Box::new(FillPass),
            Box::new(ParticlePass { field: 1, glyphs: DUST_CHARS }),
            Box::new(LinkPass { field: 0 }),
            Box::new(ParticlePass { field: 0, glyphs: &[] }),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_flow_links_only_nodes() {
        let spec = data_flow(80, 24, 1.0);
        assert!(matches!(
            spec.fields[0].links,
            LinkStrategy::AllPairs { .. }
        ));
        assert!(matches!(spec.fields[1].links, LinkStrategy::None));
        assert!(matches!(spec.fields[2].links, LinkStrategy::None));
    }

    #[test]
    fn test_circuit_uses_nearest_links() {
        let spec = circuit(80, 24, 1.0);
        match spec.fields[0].links {
            LinkStrategy::Nearest {
                max_per_node,
                min_distance,
                ..
            } => {
                assert!(max_per_node <= 2);
                assert!(min_distance > 0.0);
            }
            other => panic!("unexpected strategy {other:?}"),
        }
    }
}
