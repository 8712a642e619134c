//! Browser animation loop for the particle field.
//!
//! [`start`] sizes a canvas to the viewport, keeps it sized on window resize, and
//! steps the field once per `requestAnimationFrame` until the returned
//! [`LoopHandle`] is stopped.

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use log::{debug, info, warn};
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, Window};

use super::particles::ParticleField;
use super::theme::FieldStyle;

/// Element id of the background canvas on static pages.
pub const PARTICLE_CANVAS_ID: &str = "particleCanvas";

/// Stop switch for a running frame loop.
///
/// Clones share the same switch. Once stopped, the next scheduled frame draws
/// nothing, detaches the resize listener, and schedules no further frames.
#[derive(Clone, Debug)]
pub struct LoopHandle {
	running: Arc<AtomicBool>,
}

impl LoopHandle {
	/// A switch in the running position.
	pub fn new() -> Self {
		Self {
			running: Arc::new(AtomicBool::new(true)),
		}
	}

	/// Ask the loop to stop after its next frame.
	pub fn stop(&self) {
		self.running.store(false, Ordering::Relaxed);
	}

	/// Whether `stop` has not been called on any clone yet.
	pub fn is_running(&self) -> bool {
		self.running.load(Ordering::Relaxed)
	}
}

impl Default for LoopHandle {
	fn default() -> Self {
		Self::new()
	}
}

fn viewport_size(window: &Window) -> Option<(f64, f64)> {
	Some((
		window.inner_width().ok()?.as_f64()?,
		window.inner_height().ok()?.as_f64()?,
	))
}

/// Start the particle background on the canvas with the given element id.
///
/// Returns `None` without touching the page when no such canvas exists.
pub fn attach(id: &str, style: FieldStyle) -> Option<LoopHandle> {
	let document = web_sys::window()?.document()?;
	let canvas: HtmlCanvasElement = document.get_element_by_id(id)?.dyn_into().ok()?;
	start(canvas, style)
}

/// Start the particle background on `canvas`.
pub fn start(canvas: HtmlCanvasElement, style: FieldStyle) -> Option<LoopHandle> {
	let window = web_sys::window()?;
	let (w, h) = viewport_size(&window)?;
	canvas.set_width(w as u32);
	canvas.set_height(h as u32);

	let Some(mut ctx) = canvas
		.get_context("2d")
		.ok()
		.flatten()
		.and_then(|c| c.dyn_into::<CanvasRenderingContext2d>().ok())
	else {
		warn!("particle background: 2d context unavailable");
		return None;
	};

	let field = Rc::new(RefCell::new(ParticleField::new(
		style,
		w,
		h,
		&mut rand::thread_rng(),
	)));
	let handle = LoopHandle::new();
	let resize_cb: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let animate: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));

	let (field_resize, canvas_resize) = (field.clone(), canvas.clone());
	*resize_cb.borrow_mut() = Some(Closure::new(move || {
		let Some((nw, nh)) = web_sys::window().as_ref().and_then(viewport_size) else {
			return;
		};
		canvas_resize.set_width(nw as u32);
		canvas_resize.set_height(nh as u32);
		field_resize.borrow_mut().resize(nw, nh);
		debug!("particle background: resized to {}x{}", nw, nh);
	}));
	if let Some(ref cb) = *resize_cb.borrow() {
		let _ = window.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
	}

	let (handle_anim, animate_inner, resize_detach) =
		(handle.clone(), animate.clone(), resize_cb.clone());
	*animate.borrow_mut() = Some(Closure::new(move || {
		let Some(win) = web_sys::window() else {
			return;
		};
		if !handle_anim.is_running() {
			if let Some(ref cb) = *resize_detach.borrow() {
				let _ =
					win.remove_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
			}
			debug!("particle background: stopped");
			return;
		}
		field.borrow_mut().frame(&mut ctx);
		if let Some(ref cb) = *animate_inner.borrow() {
			let _ = win.request_animation_frame(cb.as_ref().unchecked_ref());
		}
	}));
	if let Some(ref cb) = *animate.borrow() {
		let _ = window.request_animation_frame(cb.as_ref().unchecked_ref());
	}

	info!("particle background: started at {}x{}", w, h);
	Some(handle)
}
