//! Backdrop effect selection.

use serde::{Deserialize, Serialize};

/// The available backdrop effects.
///
/// Each variant selects a data-driven preset in the engine; the engine
/// itself contains no per-effect animation logic.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EffectKind {
    /// Drifting pulse nodes with proximity connections, floating
    /// infrastructure icons and a dust layer.
    #[default]
    DataFlow,
    /// Sparse circuit nodes linked to their nearest neighbors.
    Circuit,
    /// Falling glyph columns with bright heads and fading trails.
    DigitalRain,
    /// Soft out-of-focus circles bobbing across the view.
    Bokeh,
    /// Icon glyphs drifting with a gentle bob and opacity pulse.
    FloatingIcons,
    /// A few large glow orbs with radial falloff.
    Orbs,
    /// Rising binary digits with flicker.
    Binary,
    /// Stateless plasma interference pattern.
    Plasma,
}

impl EffectKind {
    /// Every effect, in cycling order.
    pub const ALL: [EffectKind; 8] = [
        EffectKind::DataFlow,
        EffectKind::Circuit,
        EffectKind::DigitalRain,
        EffectKind::Bokeh,
        EffectKind::FloatingIcons,
        EffectKind::Orbs,
        EffectKind::Binary,
        EffectKind::Plasma,
    ];

    /// Cycle to the next effect.
    pub fn next(self) -> Self {
        let idx = Self::ALL.iter().position(|e| *e == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    /// Display name for the help line.
    pub fn name(self) -> &'static str {
        match self {
            EffectKind::DataFlow => "data flow",
            EffectKind::Circuit => "circuit",
            EffectKind::DigitalRain => "digital rain",
            EffectKind::Bokeh => "bokeh",
            EffectKind::FloatingIcons => "floating icons",
            EffectKind::Orbs => "orbs",
            EffectKind::Binary => "binary",
            EffectKind::Plasma => "plasma",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_effect_cycle_covers_all() {
        let mut seen = Vec::new();
        let mut kind = EffectKind::DataFlow;
        for _ in 0..EffectKind::ALL.len() {
            seen.push(kind);
            kind = kind.next();
        }
        assert_eq!(kind, EffectKind::DataFlow);
        assert_eq!(seen.len(), EffectKind::ALL.len());
        for e in EffectKind::ALL {
            assert!(seen.contains(&e));
        }
    }
}
