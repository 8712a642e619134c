//! Drawing for the particle field.
//!
//! Rendering goes through the [`Surface`] trait so the field can be drawn to a
//! canvas in the browser or to a recording surface in tests.
//! Draw order per frame:
//! 1. Particles (filled circles)
//! 2. Links between nearby pairs (line segments)

use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::particles::ParticleField;
use super::theme::Color;

/// A 2D drawing target.
pub trait Surface {
	/// Clear the `width` x `height` area starting at the origin.
	fn clear(&mut self, width: f64, height: f64);
	/// Fill a circle centred on `(x, y)`.
	fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: Color);
	/// Stroke a straight segment from `(x1, y1)` to `(x2, y2)`.
	fn stroke_line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, color: Color, width: f64);
}

impl Surface for CanvasRenderingContext2d {
	fn clear(&mut self, width: f64, height: f64) {
		self.clear_rect(0.0, 0.0, width, height);
	}

	fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: Color) {
		self.begin_path();
		let _ = self.arc(x, y, radius, 0.0, PI * 2.0);
		self.set_fill_style_str(&color.to_css());
		self.fill();
	}

	fn stroke_line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, color: Color, width: f64) {
		self.begin_path();
		self.move_to(x1, y1);
		self.line_to(x2, y2);
		self.set_stroke_style_str(&color.to_css());
		self.set_line_width(width);
		self.stroke();
	}
}

/// Draws the current state of the field. Does not clear or step it.
pub fn render<S: Surface + ?Sized>(field: &ParticleField, surface: &mut S) {
	draw_particles(field, surface);
	draw_links(field, surface);
}

fn draw_particles<S: Surface + ?Sized>(field: &ParticleField, surface: &mut S) {
	let color = field.style().color;
	for p in field.particles() {
		surface.fill_circle(p.x, p.y, p.size, color.with_alpha(p.alpha));
	}
}

fn draw_links<S: Surface + ?Sized>(field: &ParticleField, surface: &mut S) {
	let style = field.style();
	let ps = field.particles();
	for link in field.connections() {
		let (from, to) = (&ps[link.a], &ps[link.b]);
		surface.stroke_line(
			from.x,
			from.y,
			to.x,
			to.y,
			style.color.with_alpha(link.alpha),
			style.link_width,
		);
	}
}
