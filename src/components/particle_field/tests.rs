use rand::SeedableRng;
use rand::rngs::StdRng;

use super::*;

/// Draw calls captured in order.
#[derive(Clone, Debug, PartialEq)]
enum DrawOp {
	Clear { width: f64, height: f64 },
	Circle { x: f64, y: f64, radius: f64, color: Color },
	Line { from: (f64, f64), to: (f64, f64), color: Color, width: f64 },
}

#[derive(Default)]
struct RecordingSurface {
	ops: Vec<DrawOp>,
}

impl RecordingSurface {
	fn lines(&self) -> Vec<&DrawOp> {
		self.ops
			.iter()
			.filter(|op| matches!(op, DrawOp::Line { .. }))
			.collect()
	}

	fn circles(&self) -> usize {
		self.ops
			.iter()
			.filter(|op| matches!(op, DrawOp::Circle { .. }))
			.count()
	}
}

impl Surface for RecordingSurface {
	fn clear(&mut self, width: f64, height: f64) {
		self.ops.push(DrawOp::Clear { width, height });
	}

	fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: Color) {
		self.ops.push(DrawOp::Circle {
			x,
			y,
			radius,
			color,
		});
	}

	fn stroke_line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, color: Color, width: f64) {
		self.ops.push(DrawOp::Line {
			from: (x1, y1),
			to: (x2, y2),
			color,
			width,
		});
	}
}

fn still(x: f64, y: f64) -> Particle {
	Particle {
		x,
		y,
		vx: 0.0,
		vy: 0.0,
		size: 2.0,
		alpha: 0.2,
	}
}

fn seeded_field(width: f64, height: f64) -> ParticleField {
	let mut rng = StdRng::seed_from_u64(42);
	ParticleField::new(FieldStyle::default(), width, height, &mut rng)
}

#[test]
fn new_field_matches_hero_ranges() {
	let field = seeded_field(800.0, 600.0);
	assert_eq!(field.particles().len(), 50);
	for p in field.particles() {
		assert!((0.0..=800.0).contains(&p.x));
		assert!((0.0..=600.0).contains(&p.y));
		assert!((-0.25..0.25).contains(&p.vx));
		assert!((-0.25..0.25).contains(&p.vy));
		assert!((1.0..3.0).contains(&p.size));
		assert!((0.1..0.4).contains(&p.alpha));
	}
}

#[test]
fn count_is_stable_across_frames_and_resizes() {
	let mut field = seeded_field(800.0, 600.0);
	let mut surface = RecordingSurface::default();
	for (w, h) in [(400.0, 300.0), (1920.0, 1080.0), (10.0, 10.0)] {
		field.run_frames(&mut surface, 25);
		field.resize(w, h);
	}
	assert_eq!(field.particles().len(), 50);
}

#[test]
fn particles_stay_within_one_step_of_bounds() {
	let mut field = seeded_field(320.0, 240.0);
	let mut surface = RecordingSurface::default();
	let margin = field.style().speed / 2.0 + 1e-9;
	for _ in 0..2000 {
		field.frame(&mut surface);
		surface.ops.clear();
		for p in field.particles() {
			assert!(p.x >= -margin && p.x <= 320.0 + margin, "x out of range: {}", p.x);
			assert!(p.y >= -margin && p.y <= 240.0 + margin, "y out of range: {}", p.y);
		}
	}
}

#[test]
fn crossing_an_edge_flips_heading_once() {
	let mut p = Particle {
		vx: -0.25,
		vy: 0.1,
		..still(0.1, 50.0)
	};
	p.advance(100.0, 100.0);
	assert!((p.x - -0.15).abs() < 1e-12);
	assert_eq!(p.vx, 0.25);
	assert_eq!(p.vy, 0.1);

	// Back inside: heading is kept.
	p.advance(100.0, 100.0);
	assert!((p.x - 0.1).abs() < 1e-12);
	assert_eq!(p.vx, 0.25);
}

#[test]
fn reflection_leaves_position_unclamped() {
	let mut p = Particle {
		vx: 0.2,
		vy: 0.2,
		..still(99.9, 99.9)
	};
	p.advance(100.0, 100.0);
	assert!(p.x > 100.0 && p.y > 100.0);
	assert_eq!((p.vx, p.vy), (-0.2, -0.2));
}

#[test]
fn axes_reflect_independently() {
	let mut p = Particle {
		vx: 0.2,
		vy: 0.1,
		..still(99.9, 50.0)
	};
	p.advance(100.0, 100.0);
	assert_eq!(p.vx, -0.2);
	assert_eq!(p.vy, 0.1);
}

#[test]
fn resize_does_not_touch_particles() {
	let mut field = seeded_field(800.0, 600.0);
	let before = field.particles().to_vec();
	field.resize(400.0, 300.0);
	assert_eq!(field.particles(), before.as_slice());
	assert_eq!((field.width(), field.height()), (400.0, 300.0));
}

#[test]
fn particle_stranded_by_shrink_flips_in_place() {
	let mut field = ParticleField::from_particles(
		vec![Particle {
			vx: 0.2,
			..still(700.0, 50.0)
		}],
		800.0,
		100.0,
		FieldStyle::default(),
	);
	field.resize(400.0, 100.0);
	let mut surface = RecordingSurface::default();
	field.run_frames(&mut surface, 1000);

	let p = &field.particles()[0];
	assert!((p.x - 700.0).abs() < 0.25, "stranded particle drifted to {}", p.x);
	assert_eq!(p.vx.abs(), 0.2);
}

#[test]
fn pairs_at_link_distance_are_not_linked() {
	let field = ParticleField::from_particles(
		vec![still(0.0, 0.0), still(100.0, 0.0)],
		200.0,
		200.0,
		FieldStyle::default(),
	);
	assert_eq!(field.connections().count(), 0);
}

#[test]
fn pairs_just_inside_link_distance_are_faint() {
	let field = ParticleField::from_particles(
		vec![still(0.0, 0.0), still(99.999, 0.0)],
		200.0,
		200.0,
		FieldStyle::default(),
	);
	let links: Vec<_> = field.connections().collect();
	assert_eq!(links.len(), 1);
	assert!((links[0].alpha - 1e-6).abs() < 1e-10);
}

#[test]
fn coincident_pairs_get_full_link_alpha() {
	let field = ParticleField::from_particles(
		vec![still(40.0, 40.0), still(40.0, 40.0)],
		100.0,
		100.0,
		FieldStyle::default(),
	);
	let link = field.connections().next().expect("coincident particles are linked");
	assert_eq!(link.distance, 0.0);
	assert!((link.alpha - 0.1).abs() < 1e-12);
}

#[test]
fn connections_visit_each_unordered_pair_once() {
	let field = ParticleField::from_particles(
		vec![still(0.0, 0.0), still(10.0, 0.0), still(20.0, 0.0), still(500.0, 500.0)],
		600.0,
		600.0,
		FieldStyle::default(),
	);
	let pairs: Vec<_> = field.connections().map(|c| (c.a, c.b)).collect();
	assert_eq!(pairs, vec![(0, 1), (0, 2), (1, 2)]);
}

#[test]
fn two_particle_frame_draws_one_link() {
	let mut field = ParticleField::from_particles(
		vec![still(10.0, 10.0), still(20.0, 20.0)],
		100.0,
		100.0,
		FieldStyle::default(),
	);
	let mut surface = RecordingSurface::default();
	field.frame(&mut surface);

	assert_eq!(
		surface.ops[0],
		DrawOp::Clear {
			width: 100.0,
			height: 100.0
		}
	);
	assert_eq!(surface.circles(), 2);

	let lines = surface.lines();
	assert_eq!(lines.len(), 1);
	let DrawOp::Line {
		from,
		to,
		color,
		width,
	} = lines[0]
	else {
		unreachable!();
	};
	let expected = 0.1 * (1.0 - 200f64.sqrt() / 100.0);
	assert_eq!((*from, *to), ((10.0, 10.0), (20.0, 20.0)));
	assert!((color.a - expected).abs() < 1e-12);
	assert!((color.a - 0.08586).abs() < 1e-5);
	assert_eq!(*width, 1.0);
}

#[test]
fn particles_are_drawn_with_their_own_size_and_alpha() {
	let mut field = ParticleField::from_particles(
		vec![Particle {
			size: 2.5,
			alpha: 0.35,
			..still(5.0, 5.0)
		}],
		100.0,
		100.0,
		FieldStyle::default(),
	);
	let mut surface = RecordingSurface::default();
	field.frame(&mut surface);
	assert_eq!(
		surface.ops[1],
		DrawOp::Circle {
			x: 5.0,
			y: 5.0,
			radius: 2.5,
			color: Color::rgba(255, 255, 255, 0.35),
		}
	);
}

#[test]
fn link_opacity_is_linear_in_distance() {
	let style = FieldStyle::default();
	assert_eq!(style.link_opacity(50.0), Some(0.05));
	assert_eq!(style.link_opacity(100.0), None);
	assert_eq!(style.link_opacity(150.0), None);
}

#[test]
fn color_css_always_carries_alpha() {
	assert_eq!(Color::rgb(255, 255, 255).to_css(), "rgba(255, 255, 255, 1)");
	assert_eq!(
		Color::rgb(255, 255, 255).with_alpha(0.25).to_css(),
		"rgba(255, 255, 255, 0.25)"
	);
}
