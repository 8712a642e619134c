//! Animated particle background.
//!
//! A fixed set of particles drifts across a viewport-sized canvas, bouncing off
//! the edges. Every frame, pairs closer than the link distance are joined by a
//! line that fades as they move apart.
//!
//! The simulation ([`ParticleField`]) is independent of the browser: it draws
//! through the [`Surface`] trait and can be stepped synchronously. [`start`] and
//! [`attach`] run it on a real canvas, returning a [`LoopHandle`] to stop it.
//!
//! # Example
//!
//! ```ignore
//! use smis_landing::components::particle_field::{attach, FieldStyle, PARTICLE_CANVAS_ID};
//!
//! // No-op when the page has no background canvas.
//! let handle = attach(PARTICLE_CANVAS_ID, FieldStyle::default());
//! ```

mod component;
mod frame_loop;
mod particles;
mod render;
#[cfg(test)]
mod tests;
pub mod theme;

pub use component::ParticleBackground;
pub use frame_loop::{LoopHandle, PARTICLE_CANVAS_ID, attach, start};
pub use particles::{Connection, Particle, ParticleField};
pub use render::{Surface, render};
pub use theme::{Color, FieldStyle};
