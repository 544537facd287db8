//! Render passes and the pipeline that orders them.
//!
//! Each pass reads the frame context and draws onto the canvas; passes
//! never mutate animation state. A [`Pipeline`] runs its passes in
//! insertion order, so later passes paint over earlier ones.

use std::fmt::Debug;

use glimt_core::{AnimationSpeed, ColorRole, Palette};

use crate::canvas::Canvas;
use crate::chars::GLOW_RAMP;
use crate::color::{dim, hsl_to_rgb};
use crate::field::{Particle, ParticleField, ParticleKind};
use crate::graph::Connection;

/// Immutable per-frame inputs shared by all passes.
pub struct PassContext<'a> {
    pub palette: &'a Palette,
    pub elapsed_ms: u64,
    pub speed: AnimationSpeed,
    pub fields: &'a [ParticleField],
    /// Connection sets, indexed like `fields`.
    pub links: &'a [Vec<Connection>],
    pub pointer: Option<(f32, f32)>,
}

impl PassContext<'_> {
    fn time_s(&self) -> f32 {
        self.elapsed_ms as f32 / 1000.0 * self.speed.multiplier()
    }
}

/// One drawing stage of a backdrop.
pub trait RenderPass: Debug {
    fn render(&self, ctx: &PassContext<'_>, canvas: &mut Canvas);
}

/// Fills the frame background from the palette.
#[derive(Debug)]
pub struct FillPass;

impl RenderPass for FillPass {
    fn render(&self, ctx: &PassContext<'_>, canvas: &mut Canvas) {
        canvas.set_background(ctx.palette.color(ColorRole::Background));
    }
}

/// Faint dot grid behind the particles.
#[derive(Debug)]
pub struct GridPass {
    pub x_step: u16,
    pub y_step: u16,
}

impl RenderPass for GridPass {
    fn render(&self, ctx: &PassContext<'_>, canvas: &mut Canvas) {
        if self.x_step == 0 || self.y_step == 0 {
            return;
        }
        let color = ctx.palette.color(ColorRole::Grid);
        for y in (0..canvas.height()).step_by(self.y_step as usize) {
            for x in (0..canvas.width()).step_by(self.x_step as usize) {
                canvas.put(x as i32, y as i32, '·', color);
            }
        }
    }
}

/// Draws the connection graph of one field.
#[derive(Debug)]
pub struct LinkPass {
    pub field: usize,
}

impl RenderPass for LinkPass {
    fn render(&self, ctx: &PassContext<'_>, canvas: &mut Canvas) {
        let Some(field) = ctx.fields.get(self.field) else {
            return;
        };
        let Some(links) = ctx.links.get(self.field) else {
            return;
        };
        let base = ctx.palette.color(ColorRole::Line);
        let boost = ctx.palette.line_boost;
        let particles = field.particles();
        for link in links {
            let (Some(pa), Some(pb)) = (particles.get(link.a), particles.get(link.b)) else {
                continue;
            };
            let (x0, y0) = field.display_position(pa, ctx.elapsed_ms, ctx.speed, ctx.pointer);
            let (x1, y1) = field.display_position(pb, ctx.elapsed_ms, ctx.speed, ctx.pointer);
            let strength = ((0.25 + 0.75 * link.weight) * boost).min(1.0);
            canvas.line(x0, y0, x1, y1, '·', dim(base, strength));
        }
    }
}

/// Draws one field's particles with the routine for its kind.
#[derive(Debug)]
pub struct ParticlePass {
    pub field: usize,
    /// Glyph table for kinds that pick glyphs per particle.
    pub glyphs: &'static [char],
}

impl RenderPass for ParticlePass {
    fn render(&self, ctx: &PassContext<'_>, canvas: &mut Canvas) {
        let Some(field) = ctx.fields.get(self.field) else {
            return;
        };
        let t = ctx.time_s();
        for p in field.particles() {
            let (x, y) = field.display_position(p, ctx.elapsed_ms, ctx.speed, ctx.pointer);
            let cx = x.round() as i32;
            let cy = y.round() as i32;
            match field.kind() {
                ParticleKind::Node => self.draw_node(ctx, canvas, p, cx, cy, t),
                ParticleKind::Icon => self.draw_icon(ctx, canvas, p, cx, cy),
                ParticleKind::Drop => self.draw_drop(ctx, canvas, p, cx, cy),
                ParticleKind::Bokeh => self.draw_bokeh(ctx, canvas, p, cx, cy, t),
                ParticleKind::Orb => self.draw_orb(ctx, canvas, p, cx, cy, t),
                ParticleKind::Bit => self.draw_bit(ctx, canvas, p, cx, cy, t),
                ParticleKind::Dust => self.draw_dust(ctx, canvas, p, cx, cy),
            }
        }
    }
}

impl ParticlePass {
    fn draw_node(
        &self,
        ctx: &PassContext<'_>,
        canvas: &mut Canvas,
        p: &Particle,
        cx: i32,
        cy: i32,
        t: f32,
    ) {
        let base = p.color.unwrap_or(ctx.palette.color(ColorRole::Primary));
        let pulse = p.pulse_factor(t);
        let brightness = (p.opacity * pulse * ctx.palette.shape_boost).clamp(0.0, 1.0);
        if p.radius * pulse >= 2.0 {
            let ring = dim(base, brightness * 0.35);
            for (dx, dy) in [(-1, 0), (1, 0), (0, -1), (0, 1)] {
                canvas.put(cx + dx, cy + dy, '·', ring);
            }
        }
        let glyph = if p.radius * pulse >= 1.5 { '●' } else { '•' };
        // At the top of the pulse the core flashes to the highlight color.
        let core = if brightness >= 0.95 {
            ctx.palette.color(ColorRole::Highlight)
        } else {
            dim(base, brightness)
        };
        canvas.put(cx, cy, glyph, core);
    }

    fn draw_icon(
        &self,
        ctx: &PassContext<'_>,
        canvas: &mut Canvas,
        p: &Particle,
        cx: i32,
        cy: i32,
    ) {
        if self.glyphs.is_empty() {
            return;
        }
        let glyph = self.glyphs[(p.seed % self.glyphs.len() as u64) as usize];
        let base = p.color.unwrap_or(ctx.palette.color(ColorRole::Secondary));
        let brightness = (p.opacity * ctx.palette.shape_boost).min(1.0);
        canvas.put(cx, cy, glyph, dim(base, brightness));
    }

    fn draw_drop(
        &self,
        ctx: &PassContext<'_>,
        canvas: &mut Canvas,
        p: &Particle,
        cx: i32,
        cy: i32,
    ) {
        if self.glyphs.is_empty() {
            return;
        }
        let head = ctx.palette.color(ColorRole::Glow);
        let tail = p.color.unwrap_or(ctx.palette.color(ColorRole::Primary));
        for k in 0..=p.trail {
            let yy = cy - k as i32;
            let glyph = self.glyphs[((p.seed + yy.unsigned_abs() as u64) % self.glyphs.len() as u64) as usize];
            if k == 0 {
                canvas.put(cx, yy, glyph, head);
            } else {
                let intensity = p.opacity * (1.0 - k as f32 / (p.trail as f32 + 1.0));
                canvas.put(cx, yy, glyph, dim(tail, intensity));
            }
        }
    }

    fn draw_bokeh(
        &self,
        ctx: &PassContext<'_>,
        canvas: &mut Canvas,
        p: &Particle,
        cx: i32,
        cy: i32,
        t: f32,
    ) {
        if self.glyphs.is_empty() {
            return;
        }
        let bucket = ((p.radius / 2.0) * self.glyphs.len() as f32) as usize;
        let glyph = self.glyphs[bucket.min(self.glyphs.len() - 1)];
        let base = p.color.unwrap_or(ctx.palette.color(ColorRole::Accent));
        let brightness = (p.opacity * p.pulse_factor(t)).clamp(0.0, 1.0);
        canvas.put(cx, cy, glyph, dim(base, brightness));
    }

    fn draw_orb(
        &self,
        ctx: &PassContext<'_>,
        canvas: &mut Canvas,
        p: &Particle,
        cx: i32,
        cy: i32,
        t: f32,
    ) {
        let base = p.color.unwrap_or(ctx.palette.color(ColorRole::Glow));
        let r = p.radius * p.pulse_factor(t);
        if r < 0.5 {
            return;
        }
        let ry = r.ceil() as i32;
        let rx = (r * 2.0).ceil() as i32;
        for dy in -ry..=ry {
            for dx in -rx..=rx {
                // Cells are roughly twice as tall as wide.
                let d = ((dx as f32 * 0.5).powi(2) + (dy as f32).powi(2)).sqrt();
                let intensity = (1.0 - d / r) * p.opacity;
                if intensity <= 0.05 {
                    continue;
                }
                let glyph = if intensity > 0.6 {
                    GLOW_RAMP[1]
                } else if intensity > 0.4 {
                    GLOW_RAMP[2]
                } else if intensity > 0.2 {
                    GLOW_RAMP[3]
                } else {
                    GLOW_RAMP[4]
                };
                canvas.put(cx + dx, cy + dy, glyph, dim(base, intensity));
            }
        }
    }

    fn draw_bit(
        &self,
        ctx: &PassContext<'_>,
        canvas: &mut Canvas,
        p: &Particle,
        cx: i32,
        cy: i32,
        t: f32,
    ) {
        if self.glyphs.is_empty() {
            return;
        }
        let glyph = self.glyphs[(p.seed % self.glyphs.len() as u64) as usize];
        let base = p.color.unwrap_or(ctx.palette.color(ColorRole::Primary));
        let brightness = (p.opacity * p.pulse_factor(t)).clamp(0.05, 1.0);
        canvas.put(cx, cy, glyph, dim(base, brightness));
    }

    fn draw_dust(
        &self,
        ctx: &PassContext<'_>,
        canvas: &mut Canvas,
        p: &Particle,
        cx: i32,
        cy: i32,
    ) {
        if self.glyphs.is_empty() {
            return;
        }
        let glyph = self.glyphs[(p.seed % self.glyphs.len() as u64) as usize];
        let color = dim(ctx.palette.color(ColorRole::Dim), p.opacity);
        canvas.put(cx, cy, glyph, color);
    }
}

/// Full-frame sine interference field, no particles involved.
#[derive(Debug)]
pub struct PlasmaPass;

impl RenderPass for PlasmaPass {
    fn render(&self, ctx: &PassContext<'_>, canvas: &mut Canvas) {
        let period = ctx.speed.plasma_period_ms() as f32;
        let t = ctx.elapsed_ms as f32 / period * std::f32::consts::TAU;
        for y in 0..canvas.height() {
            for x in 0..canvas.width() {
                let fx = x as f32;
                let fy = y as f32;
                let v = (fx * 0.18 + t).sin()
                    + (fy * 0.35 - t * 0.7).sin()
                    + ((fx * 0.5 + fy) * 0.15 + t * 0.4).sin();
                let intensity = (v / 3.0 + 1.0) / 2.0;
                if intensity < 0.4 {
                    continue;
                }
                let hue = 160.0 + intensity * 60.0;
                let lightness = if ctx.palette.theme().is_dark() {
                    0.15 + intensity * 0.35
                } else {
                    0.75 - intensity * 0.3
                };
                let color = hsl_to_rgb(hue, 0.7, lightness);
                let glyph = if intensity > 0.85 {
                    GLOW_RAMP[2]
                } else if intensity > 0.65 {
                    GLOW_RAMP[3]
                } else {
                    GLOW_RAMP[4]
                };
                canvas.put(x as i32, y as i32, glyph, color);
            }
        }
    }
}

/// Ordered list of passes making up one backdrop's frame.
#[derive(Debug)]
pub struct Pipeline {
    passes: Vec<Box<dyn RenderPass>>,
}

impl Pipeline {
    pub fn new(passes: Vec<Box<dyn RenderPass>>) -> Self {
        Self { passes }
    }

    pub fn render(&self, ctx: &PassContext<'_>, canvas: &mut Canvas) {
        for pass in &self.passes {
            pass.render(ctx, canvas);
        }
    }

    pub fn len(&self) -> usize {
        self.passes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.passes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chars::{BOKEH_CHARS, DUST_CHARS, RAIN_CHARS};
    use crate::field::{FieldConfig, Spread};
    use glimt_core::Theme;
    use ratatui::style::Color;

    fn field_of(kind: ParticleKind, count: usize) -> ParticleField {
        let config = FieldConfig {
            radius: Spread::new(1.0, 2.0),
            opacity: Spread::new(0.5, 0.9),
            ..FieldConfig::new(kind, count)
        };
        ParticleField::new(config, 40, 16, 2024)
    }

    fn ctx<'a>(
        palette: &'a Palette,
        fields: &'a [ParticleField],
        links: &'a [Vec<Connection>],
    ) -> PassContext<'a> {
        PassContext {
            palette,
            elapsed_ms: 500,
            speed: AnimationSpeed::Medium,
            fields,
            links,
            pointer: None,
        }
    }

    #[test]
    fn test_fill_pass_sets_background() {
        let palette = Palette::for_theme(Theme::Dark);
        let mut canvas = Canvas::new(10, 4, Color::Black);
        FillPass.render(&ctx(&palette, &[], &[]), &mut canvas);
        assert_eq!(canvas.background(), palette.color(ColorRole::Background));
        assert_eq!(canvas.drawn_cells(), 0);
    }

    #[test]
    fn test_grid_pass_draws_dots_at_steps() {
        let palette = Palette::for_theme(Theme::Dark);
        let mut canvas = Canvas::new(20, 10, Color::Black);
        let pass = GridPass { x_step: 5, y_step: 5 };
        pass.render(&ctx(&palette, &[], &[]), &mut canvas);
        assert!(canvas.glyph_at(0, 0).is_some());
        assert!(canvas.glyph_at(5, 5).is_some());
        assert!(canvas.glyph_at(1, 0).is_none());
        assert_eq!(canvas.drawn_cells(), 8);
    }

    #[test]
    fn test_particle_pass_draws_each_kind() {
        let palette = Palette::for_theme(Theme::Dark);
        for (kind, glyphs) in [
            (ParticleKind::Node, &[][..]),
            (ParticleKind::Drop, RAIN_CHARS),
            (ParticleKind::Bokeh, BOKEH_CHARS),
            (ParticleKind::Dust, DUST_CHARS),
        ] {
            let fields = vec![field_of(kind, 10)];
            let links = vec![Vec::new()];
            let mut canvas = Canvas::new(40, 16, Color::Black);
            let pass = ParticlePass { field: 0, glyphs };
            pass.render(&ctx(&palette, &fields, &links), &mut canvas);
            assert!(canvas.drawn_cells() > 0, "{kind:?} drew nothing");
        }
    }

    #[test]
    fn test_particle_pass_missing_field_is_noop() {
        let palette = Palette::for_theme(Theme::Dark);
        let mut canvas = Canvas::new(40, 16, Color::Black);
        let pass = ParticlePass { field: 3, glyphs: DUST_CHARS };
        pass.render(&ctx(&palette, &[], &[]), &mut canvas);
        assert_eq!(canvas.drawn_cells(), 0);
    }

    #[test]
    fn test_link_pass_draws_between_particles() {
        let palette = Palette::for_theme(Theme::Dark);
        let fields = vec![field_of(ParticleKind::Node, 8)];
        let links = vec![vec![Connection {
            a: 0,
            b: 1,
            distance: 5.0,
            weight: 0.8,
        }]];
        let mut canvas = Canvas::new(40, 16, Color::Black);
        let pass = LinkPass { field: 0 };
        pass.render(&ctx(&palette, &fields, &links), &mut canvas);
        assert!(canvas.drawn_cells() > 0);
    }

    #[test]
    fn test_plasma_pass_fills_some_cells() {
        let palette = Palette::for_theme(Theme::Dark);
        let mut canvas = Canvas::new(40, 16, Color::Black);
        PlasmaPass.render(&ctx(&palette, &[], &[]), &mut canvas);
        assert!(canvas.drawn_cells() > 0);
        assert!(canvas.drawn_cells() < 40 * 16);
    }

    #[test]
    fn test_pipeline_runs_in_order() {
        let palette = Palette::for_theme(Theme::Dark);
        let pipeline = Pipeline::new(vec![
            Box::new(FillPass),
            Box::new(GridPass { x_step: 4, y_step: 4 }),
        ]);
        let mut canvas = Canvas::new(16, 8, Color::Black);
        pipeline.render(&ctx(&palette, &[], &[]), &mut canvas);
        assert_eq!(pipeline.len(), 2);
        assert_eq!(canvas.background(), palette.color(ColorRole::Background));
        assert!(canvas.drawn_cells() > 0);
    }
}
