//! Animated particle-field backdrops for terminal applications.
//!
//! Every backdrop is an instance of the same engine: one or more
//! [`ParticleField`]s of randomly parameterized entities advanced by
//! deterministic motion laws, an optional per-frame connection graph
//! (see [`compute_connections`]), and an ordered [`Pipeline`] of
//! render passes drawing onto a cell [`Canvas`]. The [`AnimationDriver`]
//! owns the fields, the pipeline, and the surface lifecycle; the host
//! event loop supplies ticks, resize events, theme changes, and pointer
//! positions.
//!
//! The engine never fails the host: missing or zero-sized surfaces,
//! malformed counts, and unsupported sizes degrade to an empty backdrop
//! with a logged warning.

mod canvas;
mod chars;
mod color;
mod driver;
mod effects;
mod field;
mod graph;
mod pass;
mod seed;

pub use canvas::Canvas;
pub use color::{dim, hsl_to_rgb};
pub use driver::{AnimationDriver, DriverState};
pub use field::{
    DriftDirection, FieldConfig, Oscillation, OscillationSpread, Particle, ParticleField,
    ParticleKind, Spread,
};
pub use graph::{compute_connections, Connection, LinkStrategy};
pub use pass::{
    FillPass, GridPass, LinkPass, ParticlePass, PassContext, Pipeline, PlasmaPass, RenderPass,
};
