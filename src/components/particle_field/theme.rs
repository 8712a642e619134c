//! Visual style for the particle background.
//!
//! Holds the particle count, motion and size ranges, and link styling. The
//! default matches the hero section of the landing page.

/// RGBA color representation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
	/// Red channel.
	pub r: u8,
	/// Green channel.
	pub g: u8,
	/// Blue channel.
	pub b: u8,
	/// Opacity, 0 to 1.
	pub a: f64,
}

impl Color {
	/// Opaque color.
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	/// Color with explicit opacity.
	pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
		Self { r, g, b, a }
	}

	/// Same color at opacity `a`.
	pub fn with_alpha(self, a: f64) -> Self {
		Self { a, ..self }
	}

	/// CSS `rgba()` string. Always carries alpha since particle fills rely on it.
	pub fn to_css(self) -> String {
		format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
	}
}

/// Particle field configuration.
#[derive(Clone, Debug)]
pub struct FieldStyle {
	/// Number of particles, fixed for the lifetime of the field.
	pub count: usize,
	/// Particle and link color. Alpha is replaced per particle/link.
	pub color: Color,
	/// Velocity components are drawn from `[-speed / 2, speed / 2)`.
	pub speed: f64,
	/// Minimum particle radius
	pub size_min: f64,
	/// Maximum particle radius (exclusive)
	pub size_max: f64,
	/// Minimum particle opacity
	pub opacity_min: f64,
	/// Maximum particle opacity (exclusive)
	pub opacity_max: f64,
	/// Pairs closer than this are linked. Exclusive bound.
	pub link_distance: f64,
	/// Link opacity at zero distance; fades linearly to 0 at `link_distance`.
	pub link_alpha: f64,
	/// Link stroke width in pixels.
	pub link_width: f64,
}

impl FieldStyle {
	/// Soft white particles on a dark hero gradient.
	pub fn hero() -> Self {
		Self {
			count: 50,
			color: Color::rgb(255, 255, 255),
			speed: 0.5,
			size_min: 1.0,
			size_max: 3.0,
			opacity_min: 0.1,
			opacity_max: 0.4,
			link_distance: 100.0,
			link_alpha: 0.1,
			link_width: 1.0,
		}
	}

	/// Link opacity for a pair at `distance`, or `None` if the pair is too far apart.
	pub fn link_opacity(&self, distance: f64) -> Option<f64> {
		if distance < self.link_distance {
			Some(self.link_alpha * (1.0 - distance / self.link_distance))
		} else {
			None
		}
	}
}

impl Default for FieldStyle {
	fn default() -> Self {
		Self::hero()
	}
}
