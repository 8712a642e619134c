//! Leptos component wrapping the particle background canvas.

use leptos::prelude::*;
use web_sys::HtmlCanvasElement;

use super::frame_loop::{self, LoopHandle};
use super::theme::FieldStyle;

/// Full-viewport canvas with drifting, linked particles.
///
/// The canvas sits behind page content and ignores pointer events. The frame
/// loop stops when the component is unmounted.
#[component]
pub fn ParticleBackground(
	/// Look of the field; the hero style when omitted.
	#[prop(optional)]
	style: Option<FieldStyle>,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let handle = StoredValue::new(None::<LoopHandle>);
	let style = style.unwrap_or_default();

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		if handle.with_value(|h| h.is_some()) {
			return;
		}
		let canvas: HtmlCanvasElement = canvas.into();
		handle.set_value(frame_loop::start(canvas, style.clone()));
	});

	on_cleanup(move || {
		if let Some(h) = handle.try_get_value().flatten() {
			h.stop();
		}
	});

	view! {
		<canvas
			node_ref=canvas_ref
			id=frame_loop::PARTICLE_CANVAS_ID
			class="particle-canvas"
			style="position: fixed; inset: 0; display: block; pointer-events: none; z-index: 0;"
		/>
	}
}
