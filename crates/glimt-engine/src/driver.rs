//! Surface lifecycle and per-tick orchestration.
//!
//! The driver owns the particle fields, the connection graphs, the render
//! pipeline, and the canvas. The host event loop feeds it ticks, resizes,
//! theme changes, and pointer positions; the driver hands back a finished
//! frame. Backdrops are decorative, so every malformed input degrades to
//! an empty frame instead of an error.

use glimt_core::{AnimationSpeed, ColorRole, EffectKind, Palette, Theme};

use crate::canvas::Canvas;
use crate::effects;
use crate::field::ParticleField;
use crate::graph::{compute_connections, Connection, LinkStrategy};
use crate::pass::{PassContext, Pipeline};

/// Lifecycle of a backdrop surface.
///
/// `Destroyed` is terminal; a destroyed driver ignores every call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriverState {
    Uninitialized,
    Running,
    Destroyed,
}

/// Owns one backdrop and advances it frame by frame.
pub struct AnimationDriver {
    state: DriverState,
    effect: EffectKind,
    speed: AnimationSpeed,
    palette: Palette,
    density: f32,
    seed: u64,
    width: u16,
    height: u16,
    fields: Vec<ParticleField>,
    strategies: Vec<LinkStrategy>,
    links: Vec<Vec<Connection>>,
    pipeline: Pipeline,
    canvas: Canvas,
    last_ms: u64,
    elapsed_ms: u64,
    pointer: Option<(f32, f32)>,
}

impl AnimationDriver {
    pub fn new(
        effect: EffectKind,
        theme: Theme,
        speed: AnimationSpeed,
        width: u16,
        height: u16,
        seed: u64,
        density: f32,
    ) -> Self {
        let palette = Palette::for_theme(theme);
        if width == 0 || height == 0 {
            log::warn!("backdrop surface has zero size, rendering empty frames");
        }
        let bg = palette.color(ColorRole::Background);
        let mut driver = Self {
            state: DriverState::Uninitialized,
            effect,
            speed,
            palette,
            density,
            seed,
            width,
            height,
            fields: Vec::new(),
            strategies: Vec::new(),
            links: Vec::new(),
            pipeline: Pipeline::new(Vec::new()),
            canvas: Canvas::new(width, height, bg),
            last_ms: 0,
            elapsed_ms: 0,
            pointer: None,
        };
        driver.rebuild();
        driver
    }

    /// Instantiate fields and pipeline for the current effect and size.
    fn rebuild(&mut self) {
        let spec = effects::build(self.effect, self.width, self.height, self.density);
        self.strategies = spec.fields.iter().map(|def| def.links).collect();
        self.fields = spec
            .fields
            .into_iter()
            .enumerate()
            .map(|(i, def)| {
                let mut field = ParticleField::new(
                    def.config,
                    self.width,
                    self.height,
                    self.seed.wrapping_add(i as u64),
                );
                field.refresh_theme(&self.palette);
                field
            })
            .collect();
        self.links = vec![Vec::new(); self.fields.len()];
        self.pipeline = Pipeline::new(spec.passes);
        self.canvas.resize(self.width, self.height);
        self.canvas
            .set_background(self.palette.color(ColorRole::Background));
    }

    /// Begin animating. Has no effect once destroyed.
    pub fn start(&mut self) {
        if self.state == DriverState::Uninitialized {
            self.state = DriverState::Running;
        }
    }

    /// Advance to `now_ms` and render one frame.
    ///
    /// Returns `None` unless the driver is running. A `now_ms` earlier
    /// than the previous tick counts as zero elapsed time.
    pub fn tick(&mut self, now_ms: u64) -> Option<&Canvas> {
        if self.state != DriverState::Running {
            return None;
        }
        let dt = now_ms.saturating_sub(self.last_ms);
        self.last_ms = now_ms;
        self.elapsed_ms += dt;

        for field in &mut self.fields {
            field.step(dt, self.speed);
        }

        for (i, field) in self.fields.iter().enumerate() {
            let strategy = self.strategies[i];
            if matches!(strategy, LinkStrategy::None) {
                self.links[i].clear();
                continue;
            }
            let points: Vec<(f32, f32)> = field
                .particles()
                .iter()
                .map(|p| field.display_position(p, self.elapsed_ms, self.speed, self.pointer))
                .collect();
            self.links[i] = compute_connections(&points, strategy);
        }

        self.canvas.clear();
        let ctx = PassContext {
            palette: &self.palette,
            elapsed_ms: self.elapsed_ms,
            speed: self.speed,
            fields: &self.fields,
            links: &self.links,
            pointer: self.pointer,
        };
        self.pipeline.render(&ctx, &mut self.canvas);
        Some(&self.canvas)
    }

    /// Adopt a new surface size, reinitializing all fields.
    ///
    /// Safe to call in bursts; each call fully replaces the previous
    /// field set, so only the last size matters.
    pub fn resize(&mut self, width: u16, height: u16) {
        if self.state == DriverState::Destroyed {
            return;
        }
        self.width = width;
        self.height = height;
        self.seed = self.seed.wrapping_add(1);
        self.rebuild();
    }

    /// Swap palettes, keeping every particle where it is.
    pub fn set_theme(&mut self, theme: Theme) {
        if self.state == DriverState::Destroyed {
            return;
        }
        self.palette = Palette::for_theme(theme);
        self.canvas
            .set_background(self.palette.color(ColorRole::Background));
        for field in &mut self.fields {
            field.refresh_theme(&self.palette);
        }
    }

    /// Switch to a different backdrop, rebuilding fields and pipeline.
    pub fn set_effect(&mut self, effect: EffectKind) {
        if self.state == DriverState::Destroyed {
            return;
        }
        self.effect = effect;
        self.rebuild();
    }

    pub fn set_speed(&mut self, speed: AnimationSpeed) {
        self.speed = speed;
    }

    /// Record the pointer position for parallax-enabled fields.
    pub fn pointer_moved(&mut self, x: u16, y: u16) {
        self.pointer = Some((x as f32, y as f32));
    }

    /// Tear the backdrop down. After this, ticks render nothing and
    /// every other call is ignored.
    pub fn destroy(&mut self) {
        self.state = DriverState::Destroyed;
        self.fields.clear();
        self.strategies.clear();
        self.links.clear();
        self.pipeline = Pipeline::new(Vec::new());
        self.canvas.clear();
    }

    pub fn state(&self) -> DriverState {
        self.state
    }

    pub fn effect(&self) -> EffectKind {
        self.effect
    }

    pub fn speed(&self) -> AnimationSpeed {
        self.speed
    }

    pub fn theme(&self) -> Theme {
        self.palette.theme()
    }

    pub fn fields(&self) -> &[ParticleField] {
        &self.fields
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn driver() -> AnimationDriver {
        AnimationDriver::new(
            EffectKind::DataFlow,
            Theme::Dark,
            AnimationSpeed::Medium,
            80,
            24,
            42,
            1.0,
        )
    }

    #[test]
    fn test_tick_before_start_renders_nothing() {
        let mut d = driver();
        assert_eq!(d.state(), DriverState::Uninitialized);
        assert!(d.tick(100).is_none());
    }

    #[test]
    fn test_running_tick_produces_frame() {
        let mut d = driver();
        d.start();
        let canvas = d.tick(33).unwrap();
        assert!(canvas.drawn_cells() > 0);
    }

    #[test]
    fn test_links_follow_fields() {
        let mut d = driver();
        d.start();
        d.tick(33);
        assert_eq!(d.links.len(), d.fields().len());
        // Only the node field carries a strategy.
        assert!(d.links[1].is_empty());
        assert!(d.links[2].is_empty());
    }

    #[test]
    fn test_destroy_is_terminal() {
        let mut d = driver();
        d.start();
        d.tick(33);
        d.destroy();
        assert_eq!(d.state(), DriverState::Destroyed);
        assert!(d.tick(66).is_none());
        assert!(d.fields().is_empty());
        assert_eq!(d.canvas.drawn_cells(), 0);
        d.start();
        assert_eq!(d.state(), DriverState::Destroyed);
        assert!(d.tick(99).is_none());
    }

    #[test]
    fn test_resize_burst_settles_on_final_size() {
        let mut d = driver();
        d.start();
        d.tick(33);
        for w in 50..60 {
            d.resize(w, 20);
        }
        for field in d.fields() {
            assert_eq!(field.bounds(), (59.0, 20.0));
        }
        assert!(d.tick(66).is_some());
    }

    #[test]
    fn test_resize_to_zero_degrades_gracefully() {
        let mut d = driver();
        d.start();
        d.resize(0, 0);
        let canvas = d.tick(33).unwrap();
        assert_eq!(canvas.drawn_cells(), 0);
        for field in d.fields() {
            assert!(field.is_empty());
        }
    }

    #[test]
    fn test_theme_swap_preserves_positions() {
        let mut d = driver();
        d.start();
        d.tick(33);
        let before: Vec<Vec<(f32, f32)>> = d
            .fields()
            .iter()
            .map(|f| f.particles().iter().map(|p| (p.x, p.y)).collect())
            .collect();
        d.set_theme(Theme::Light);
        let after: Vec<Vec<(f32, f32)>> = d
            .fields()
            .iter()
            .map(|f| f.particles().iter().map(|p| (p.x, p.y)).collect())
            .collect();
        assert_eq!(before, after);
        assert_eq!(d.theme(), Theme::Light);
    }

    #[test]
    fn test_set_effect_rebuilds_fields() {
        let mut d = driver();
        d.start();
        d.set_effect(EffectKind::Plasma);
        assert!(d.fields().is_empty());
        assert!(d.tick(33).unwrap().drawn_cells() > 0);
        d.set_effect(EffectKind::DigitalRain);
        assert_eq!(d.fields().len(), 1);
    }

    #[test]
    fn test_backwards_clock_is_harmless() {
        let mut d = driver();
        d.start();
        d.tick(1000);
        let before: Vec<(f32, f32)> = d.fields()[0]
            .particles()
            .iter()
            .map(|p| (p.x, p.y))
            .collect();
        d.tick(500);
        let after: Vec<(f32, f32)> = d.fields()[0]
            .particles()
            .iter()
            .map(|p| (p.x, p.y))
            .collect();
        assert_eq!(before, after);
    }
}
