//! Particle fields: fixed-cardinality collections of animated entities.
//!
//! A field owns `count` particles of a single [`ParticleKind`] and advances
//! them with two deterministic motion laws: linear drift with edge wrap,
//! and time-based sinusoidal displacement. Particles are recycled in place
//! when they leave the visible bounds; the field never allocates in the
//! per-frame path and its cardinality only changes on explicit recreation.

use glimt_core::{AnimationSpeed, ColorRole, Palette};
use ratatui::style::Color;

use crate::seed;

/// Which draw routine applies to a field's particles.
///
/// A field holds exactly one kind; kinds are never mixed within a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParticleKind {
    /// Pulsing network node with an optional glow ring.
    Node,
    /// Icon glyph (infrastructure shapes, social icons).
    Icon,
    /// Falling glyph trail with a bright head.
    Drop,
    /// Soft out-of-focus circle.
    Bokeh,
    /// Large radial-falloff glow.
    Orb,
    /// Single binary digit.
    Bit,
    /// Faint filler dot.
    Dust,
}

/// Half-open value range for randomized spawn parameters.
#[derive(Debug, Clone, Copy)]
pub struct Spread {
    pub min: f32,
    pub max: f32,
}

impl Spread {
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    fn sample(&self, hash: u64) -> f32 {
        seed::in_range(hash, self.min, self.max)
    }
}

/// Sinusoidal displacement parameters.
///
/// The displacement is a pure function of elapsed time; no per-frame state
/// accumulates, so a given `(amplitude, frequency, phase, time)` always
/// reproduces the same value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Oscillation {
    /// Peak displacement in cells.
    pub amplitude: f32,
    /// Angular frequency in radians per second.
    pub frequency: f32,
    /// Phase offset in radians.
    pub phase: f32,
}

impl Oscillation {
    /// Displacement at `time_s` seconds.
    pub fn displacement(&self, time_s: f32) -> f32 {
        self.amplitude * (time_s * self.frequency + self.phase).sin()
    }
}

/// Spawn ranges for an [`Oscillation`]; phase is always rolled over a full
/// turn so particles never move in lockstep.
#[derive(Debug, Clone, Copy)]
pub struct OscillationSpread {
    pub amplitude: Spread,
    pub frequency: Spread,
}

/// Drift heading assigned at spawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriftDirection {
    /// Random heading per particle.
    Any,
    /// Straight down (rain, snow).
    Down,
    /// Straight up (rising bits).
    Up,
}

/// Static description of one particle field.
#[derive(Debug, Clone)]
pub struct FieldConfig {
    pub kind: ParticleKind,
    pub count: usize,
    /// Drift speed magnitude in cells per second.
    pub speed: Spread,
    /// Visual radius in cells; also the wrap overscan margin.
    pub radius: Spread,
    /// Base brightness in `[0, 1]`.
    pub opacity: Spread,
    pub direction: DriftDirection,
    /// Horizontal sinusoidal displacement.
    pub sway: Option<OscillationSpread>,
    /// Vertical sinusoidal displacement.
    pub bob: Option<OscillationSpread>,
    /// Size/brightness pulse.
    pub pulse: Option<OscillationSpread>,
    /// Trail length range for [`ParticleKind::Drop`] fields.
    pub trail: Option<(u16, u16)>,
    /// Roles to roll per-particle cached colors from; empty means the draw
    /// routine resolves a role against the palette each frame instead.
    pub color_roles: &'static [ColorRole],
    /// Pointer parallax factor; 0 disables pointer response.
    pub parallax: f32,
}

impl FieldConfig {
    /// A config with neutral defaults for the given kind and count.
    pub fn new(kind: ParticleKind, count: usize) -> Self {
        Self {
            kind,
            count,
            speed: Spread::new(0.3, 1.2),
            radius: Spread::new(0.5, 1.5),
            opacity: Spread::new(0.3, 0.8),
            direction: DriftDirection::Any,
            sway: None,
            bob: None,
            pulse: None,
            trail: None,
            color_roles: &[],
            parallax: 0.0,
        }
    }
}

/// One visual entity.
#[derive(Debug, Clone)]
pub struct Particle {
    /// Base position, advanced by the drift law.
    pub x: f32,
    pub y: f32,
    /// Drift velocity in cells per second.
    pub vx: f32,
    pub vy: f32,
    pub radius: f32,
    pub opacity: f32,
    pub sway: Option<Oscillation>,
    pub bob: Option<Oscillation>,
    pub pulse: Option<Oscillation>,
    /// Trail length in cells (drops only).
    pub trail: u16,
    /// Cached concrete color, filled by [`ParticleField::refresh_theme`]
    /// for fields that declare `color_roles`.
    pub color: Option<Color>,
    /// Seed for glyph selection.
    pub seed: u64,
}

impl Particle {
    /// Wrap overscan margin: the particle is recycled only once fully out
    /// of view, including its trail.
    pub fn margin(&self) -> f32 {
        self.radius.max(self.trail as f32)
    }

    /// Size/brightness pulse factor at `time_s`, centered on 1.0.
    pub fn pulse_factor(&self, time_s: f32) -> f32 {
        match self.pulse {
            Some(osc) => 1.0 + osc.displacement(time_s),
            None => 1.0,
        }
    }
}

/// A fixed-size collection of particles of one kind.
#[derive(Debug, Clone)]
pub struct ParticleField {
    config: FieldConfig,
    particles: Vec<Particle>,
    width: f32,
    height: f32,
    seed: u64,
}

impl ParticleField {
    /// Populate a field with `config.count` particles at deterministic
    /// pseudo-random positions inside the bounds.
    ///
    /// Zero-sized bounds yield an empty field (decorative code degrades,
    /// never fails the host).
    pub fn new(config: FieldConfig, width: u16, height: u16, init_seed: u64) -> Self {
        let mut field = Self {
            config,
            particles: Vec::new(),
            width: width as f32,
            height: height as f32,
            seed: init_seed,
        };
        field.populate();
        field
    }

    fn populate(&mut self) {
        if self.width <= 0.0 || self.height <= 0.0 {
            if self.config.count > 0 {
                log::warn!(
                    "particle field created with zero-sized bounds, spawning no particles"
                );
            }
            self.particles = Vec::new();
            return;
        }
        self.particles = (0..self.config.count).map(|i| self.spawn(i)).collect();
    }

    fn spawn(&self, index: usize) -> Particle {
        let h = |salt: u64| seed::mix(self.seed, index, salt);
        let cfg = &self.config;

        let speed = cfg.speed.sample(h(3));
        let (vx, vy) = match cfg.direction {
            DriftDirection::Any => {
                let angle = seed::unit(h(4)) * std::f32::consts::TAU;
                (speed * angle.cos(), speed * angle.sin())
            }
            DriftDirection::Down => (0.0, speed),
            DriftDirection::Up => (0.0, -speed),
        };

        let roll_osc = |spread: &OscillationSpread, salt: u64| Oscillation {
            amplitude: spread.amplitude.sample(h(salt)),
            frequency: spread.frequency.sample(h(salt + 1)),
            phase: seed::unit(h(salt + 2)) * std::f32::consts::TAU,
        };

        let trail = match cfg.trail {
            Some((min, max)) => min + (h(15) % (max.saturating_sub(min) as u64 + 1)) as u16,
            None => 0,
        };

        Particle {
            x: seed::unit(h(1)) * self.width,
            y: seed::unit(h(2)) * self.height,
            vx,
            vy,
            radius: cfg.radius.sample(h(5)),
            opacity: cfg.opacity.sample(h(6)),
            sway: cfg.sway.as_ref().map(|s| roll_osc(s, 7)),
            bob: cfg.bob.as_ref().map(|s| roll_osc(s, 10)),
            pulse: cfg.pulse.as_ref().map(|s| roll_osc(s, 18)),
            trail,
            color: None,
            seed: h(21),
        }
    }

    /// Advance every particle by the drift law.
    ///
    /// Positions crossing a bound (with the particle's overscan margin)
    /// wrap to the opposite edge; no particle ever leaves the field.
    pub fn step(&mut self, dt_ms: u64, speed: AnimationSpeed) {
        let k = speed.multiplier() * dt_ms as f32 / 1000.0;
        let (w, h) = (self.width, self.height);
        for p in &mut self.particles {
            p.x += p.vx * k;
            p.y += p.vy * k;
            let m = p.margin();
            if p.x < -m {
                p.x = w + m;
            } else if p.x > w + m {
                p.x = -m;
            }
            if p.y < -m {
                p.y = h + m;
            } else if p.y > h + m {
                p.y = -m;
            }
        }
    }

    /// Full reinitialization for new bounds, discarding prior positions.
    pub fn recreate(&mut self, width: u16, height: u16) {
        self.width = width as f32;
        self.height = height as f32;
        self.seed = self.seed.wrapping_add(1);
        self.populate();
    }

    /// Re-roll cached particle colors from the given palette.
    ///
    /// Each particle's role is derived from its spawn seed, so calling this
    /// twice with the same palette is a no-op after the first call.
    pub fn refresh_theme(&mut self, palette: &Palette) {
        let roles = self.config.color_roles;
        if roles.is_empty() {
            return;
        }
        for p in &mut self.particles {
            let role = roles[(p.seed % roles.len() as u64) as usize];
            p.color = Some(palette.color(role));
        }
    }

    /// Display position at `elapsed_ms`: base position plus oscillation
    /// displacement plus pointer parallax.
    pub fn display_position(
        &self,
        p: &Particle,
        elapsed_ms: u64,
        speed: AnimationSpeed,
        pointer: Option<(f32, f32)>,
    ) -> (f32, f32) {
        let t = elapsed_ms as f32 / 1000.0 * speed.multiplier();
        let mut x = p.x;
        let mut y = p.y;
        if let Some(osc) = p.sway {
            x += osc.displacement(t);
        }
        if let Some(osc) = p.bob {
            y += osc.displacement(t);
        }
        if self.config.parallax != 0.0
            && let Some((px, py)) = pointer
        {
            x += (px - self.width / 2.0) * self.config.parallax;
            y += (py - self.height / 2.0) * self.config.parallax;
        }
        (x, y)
    }

    pub fn kind(&self) -> ParticleKind {
        self.config.kind
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Field bounds in cells.
    pub fn bounds(&self) -> (f32, f32) {
        (self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glimt_core::Theme;

    fn drift_config(count: usize) -> FieldConfig {
        FieldConfig {
            speed: Spread::new(2.0, 8.0),
            ..FieldConfig::new(ParticleKind::Dust, count)
        }
    }

    #[test]
    fn test_cardinality_matches_count() {
        for count in [0, 1, 7, 40] {
            let field = ParticleField::new(drift_config(count), 80, 24, 1234);
            assert_eq!(field.len(), count);
        }
    }

    #[test]
    fn test_cardinality_survives_stepping() {
        let mut field = ParticleField::new(drift_config(25), 80, 24, 99);
        for _ in 0..500 {
            field.step(33, AnimationSpeed::Fast);
        }
        assert_eq!(field.len(), 25);
    }

    #[test]
    fn test_cardinality_after_recreate() {
        let mut field = ParticleField::new(drift_config(12), 80, 24, 7);
        field.recreate(120, 40);
        assert_eq!(field.len(), 12);
        assert_eq!(field.bounds(), (120.0, 40.0));
    }

    #[test]
    fn test_zero_bounds_spawn_nothing() {
        let field = ParticleField::new(drift_config(30), 0, 24, 7);
        assert!(field.is_empty());
        let field = ParticleField::new(drift_config(30), 80, 0, 7);
        assert!(field.is_empty());
    }

    #[test]
    fn test_drift_stays_within_margin() {
        let mut field = ParticleField::new(drift_config(30), 60, 20, 4242);
        for _ in 0..2000 {
            field.step(33, AnimationSpeed::Fast);
            for p in field.particles() {
                let m = p.margin();
                assert!(p.x >= -m && p.x <= 60.0 + m, "x out of bounds: {}", p.x);
                assert!(p.y >= -m && p.y <= 20.0 + m, "y out of bounds: {}", p.y);
            }
        }
    }

    #[test]
    fn test_spawn_is_deterministic() {
        let a = ParticleField::new(drift_config(10), 80, 24, 555);
        let b = ParticleField::new(drift_config(10), 80, 24, 555);
        for (pa, pb) in a.particles().iter().zip(b.particles()) {
            assert_eq!(pa.x, pb.x);
            assert_eq!(pa.y, pb.y);
            assert_eq!(pa.vx, pb.vx);
            assert_eq!(pa.seed, pb.seed);
        }
    }

    #[test]
    fn test_oscillation_is_pure() {
        let osc = Oscillation {
            amplitude: 30.0,
            frequency: 1.5,
            phase: 0.0,
        };
        assert_eq!(osc.displacement(0.0), 0.0);
        // Sine peak at t = pi / (2 * frequency).
        let peak_t = std::f32::consts::PI / (2.0 * 1.5);
        assert!((osc.displacement(peak_t) - 30.0).abs() < 1e-3);
        assert_eq!(osc.displacement(peak_t), osc.displacement(peak_t));
    }

    #[test]
    fn test_refresh_theme_is_idempotent() {
        let config = FieldConfig {
            color_roles: &[ColorRole::Primary, ColorRole::Secondary],
            ..FieldConfig::new(ParticleKind::Node, 20)
        };
        let mut field = ParticleField::new(config, 80, 24, 31);
        let palette = Palette::for_theme(Theme::Light);

        field.refresh_theme(&palette);
        let first: Vec<_> = field.particles().iter().map(|p| p.color).collect();
        field.refresh_theme(&palette);
        let second: Vec<_> = field.particles().iter().map(|p| p.color).collect();

        assert_eq!(first, second);
        assert!(first.iter().all(|c| c.is_some()));
    }

    #[test]
    fn test_theme_swap_preserves_positions() {
        let config = FieldConfig {
            color_roles: &[ColorRole::Primary],
            ..FieldConfig::new(ParticleKind::Node, 15)
        };
        let mut field = ParticleField::new(config, 80, 24, 8);
        field.refresh_theme(&Palette::for_theme(Theme::Dark));
        let before: Vec<_> = field.particles().iter().map(|p| (p.x, p.y)).collect();
        field.refresh_theme(&Palette::for_theme(Theme::Light));
        let after: Vec<_> = field.particles().iter().map(|p| (p.x, p.y)).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn test_display_position_applies_bob() {
        let config = FieldConfig {
            bob: Some(OscillationSpread {
                amplitude: Spread::new(2.0, 2.0),
                frequency: Spread::new(1.0, 1.0),
            }),
            speed: Spread::new(0.0, 0.0),
            ..FieldConfig::new(ParticleKind::Bokeh, 1)
        };
        let field = ParticleField::new(config, 40, 12, 77);
        let p = &field.particles()[0];
        let (_, y0) = field.display_position(p, 0, AnimationSpeed::Medium, None);
        let (_, y1) = field.display_position(p, 400, AnimationSpeed::Medium, None);
        // Base position is untouched; only the displayed position moves.
        assert_ne!(y0, y1);
        assert_eq!(field.particles()[0].y, p.y);
    }

    #[test]
    fn test_parallax_shifts_display_only() {
        let config = FieldConfig {
            parallax: 0.1,
            speed: Spread::new(0.0, 0.0),
            ..FieldConfig::new(ParticleKind::Icon, 1)
        };
        let field = ParticleField::new(config, 40, 12, 3);
        let p = &field.particles()[0];
        let (x0, _) = field.display_position(p, 0, AnimationSpeed::Medium, None);
        let (x1, _) = field.display_position(p, 0, AnimationSpeed::Medium, Some((40.0, 6.0)));
        assert!((x1 - (x0 + 2.0)).abs() < 1e-5);
    }
}
