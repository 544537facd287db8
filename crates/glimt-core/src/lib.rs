//! Core types shared across the glimt workspace.
//!
//! This crate holds the leaf vocabulary of the backdrop engine: the active
//! [`Theme`], the semantic [`ColorRole`]s and their resolved [`Palette`],
//! the global [`AnimationSpeed`], and the [`EffectKind`] selecting which
//! backdrop preset is running.

mod effect;
mod speed;
mod theme;

pub use effect::EffectKind;
pub use speed::AnimationSpeed;
pub use theme::{ColorRole, Palette, Theme};
