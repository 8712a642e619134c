//! Particle simulation for the hero background.
//!
//! Particles drift at constant velocity and bounce off the surface edges.
//! Nearby pairs are linked by faint lines whose opacity falls off with distance.

use log::warn;
use rand::Rng;

use super::render::{self, Surface};
use super::theme::FieldStyle;

/// Above this count the per-frame pair scan gets too expensive to run at 60 Hz.
const PAIRWISE_BUDGET: usize = 200;

/// A single floating particle.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
	/// Horizontal position in CSS pixels.
	pub x: f64,
	/// Vertical position in CSS pixels.
	pub y: f64,
	/// Horizontal velocity, pixels per frame.
	pub vx: f64,
	/// Vertical velocity, pixels per frame.
	pub vy: f64,
	/// Radius.
	pub size: f64,
	/// Fill opacity.
	pub alpha: f64,
}

impl Particle {
	/// Random particle somewhere inside a `width` x `height` surface.
	pub fn random<R: Rng + ?Sized>(rng: &mut R, style: &FieldStyle, width: f64, height: f64) -> Self {
		Self {
			x: rng.r#gen::<f64>() * width,
			y: rng.r#gen::<f64>() * height,
			vx: (rng.r#gen::<f64>() - 0.5) * style.speed,
			vy: (rng.r#gen::<f64>() - 0.5) * style.speed,
			size: style.size_min + rng.r#gen::<f64>() * (style.size_max - style.size_min),
			alpha: style.opacity_min + rng.r#gen::<f64>() * (style.opacity_max - style.opacity_min),
		}
	}

	/// Move by one step and bounce off the edges of a `width` x `height` surface.
	///
	/// Only the heading flips; the position is left where it landed, so a particle
	/// can sit just outside the bounds until the next step carries it back.
	pub fn advance(&mut self, width: f64, height: f64) {
		self.x += self.vx;
		self.y += self.vy;

		if self.x < 0.0 || self.x > width {
			self.vx = -self.vx;
		}
		if self.y < 0.0 || self.y > height {
			self.vy = -self.vy;
		}
	}

	/// Straight-line distance to `other`.
	pub fn distance_to(&self, other: &Particle) -> f64 {
		let (dx, dy) = (self.x - other.x, self.y - other.y);
		(dx * dx + dy * dy).sqrt()
	}
}

/// A link between two particles that are close enough to be connected.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Connection {
	/// Index of the first particle (always lower than `b`)
	pub a: usize,
	/// Index of the second particle
	pub b: usize,
	/// Distance between the two particles
	pub distance: f64,
	/// Stroke opacity, in `(0, link_alpha]`
	pub alpha: f64,
}

/// Owns the background particles and the surface bounds they bounce within.
///
/// Created once when the canvas mounts, then stepped once per animation frame.
pub struct ParticleField {
	particles: Vec<Particle>,
	style: FieldStyle,
	width: f64,
	height: f64,
}

impl ParticleField {
	/// Field of `style.count` random particles on a `width` x `height` surface.
	pub fn new<R: Rng + ?Sized>(style: FieldStyle, width: f64, height: f64, rng: &mut R) -> Self {
		let particles = (0..style.count)
			.map(|_| Particle::random(rng, &style, width, height))
			.collect();
		Self::from_particles(particles, width, height, style)
	}

	/// Build a field from an explicit set of particles.
	pub fn from_particles(
		particles: Vec<Particle>,
		width: f64,
		height: f64,
		style: FieldStyle,
	) -> Self {
		if particles.len() > PAIRWISE_BUDGET {
			warn!(
				"particle field: {} particles exceeds the pairwise link budget of {}",
				particles.len(),
				PAIRWISE_BUDGET
			);
		}
		Self {
			particles,
			style,
			width,
			height,
		}
	}

	/// Current particles, in creation order.
	pub fn particles(&self) -> &[Particle] {
		&self.particles
	}

	/// Look of the field.
	pub fn style(&self) -> &FieldStyle {
		&self.style
	}

	/// Surface width the particles bounce within.
	pub fn width(&self) -> f64 {
		self.width
	}

	/// Surface height the particles bounce within.
	pub fn height(&self) -> f64 {
		self.height
	}

	/// Update the surface bounds. Particles keep their positions and velocities.
	pub fn resize(&mut self, width: f64, height: f64) {
		self.width = width;
		self.height = height;
	}

	/// Step every particle once.
	pub fn advance(&mut self) {
		let (w, h) = (self.width, self.height);
		for p in &mut self.particles {
			p.advance(w, h);
		}
	}

	/// All particle pairs closer than the link distance.
	///
	/// Checks every unordered pair, so this is quadratic in the particle count.
	pub fn connections(&self) -> impl Iterator<Item = Connection> + '_ {
		let ps = &self.particles;
		(0..ps.len()).flat_map(move |a| {
			(a + 1..ps.len()).filter_map(move |b| {
				let distance = ps[a].distance_to(&ps[b]);
				self.style.link_opacity(distance).map(|alpha| Connection {
					a,
					b,
					distance,
					alpha,
				})
			})
		})
	}

	/// Run one animation frame: clear, step, then draw particles and links.
	pub fn frame<S: Surface + ?Sized>(&mut self, surface: &mut S) {
		surface.clear(self.width, self.height);
		self.advance();
		render::render(self, surface);
	}

	/// Run `frames` animation frames back to back.
	pub fn run_frames<S: Surface + ?Sized>(&mut self, surface: &mut S, frames: usize) {
		for _ in 0..frames {
			self.frame(surface);
		}
	}
}
