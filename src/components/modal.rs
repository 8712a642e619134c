//! Modal dialog with a scale-in panel and click-outside-to-close backdrop.

use std::time::Duration;

use leptos::prelude::*;

const SCALE_IN_DELAY: Duration = Duration::from_millis(10);
const HIDE_DELAY: Duration = Duration::from_millis(200);

/// A dialog shown while `open` is true.
///
/// Clicking the close button or the backdrop around the panel sets `open` to
/// false. The panel scales in on open and shrinks slightly before hiding.
#[component]
pub fn Modal(
	/// Whether the dialog is showing.
	open: RwSignal<bool>,
	/// Heading shown next to the close button.
	title: &'static str,
	/// Dialog body.
	children: Children,
) -> impl IntoView {
	let visible = RwSignal::new(false);
	let expanded = RwSignal::new(false);

	Effect::new(move |_| {
		if open.get() {
			visible.set(true);
			set_timeout(
				move || {
					let _ = expanded.try_set(true);
				},
				SCALE_IN_DELAY,
			);
		} else {
			expanded.set(false);
			set_timeout(
				move || {
					if open.try_get_untracked() == Some(false) {
						let _ = visible.try_set(false);
					}
				},
				HIDE_DELAY,
			);
		}
	});

	let on_backdrop = move |ev: leptos::ev::MouseEvent| {
		if ev.target() == ev.current_target() {
			open.set(false);
		}
	};

	view! {
		<div class="modal-backdrop" class:hidden=move || !visible.get() on:click=on_backdrop>
			<div
				class="modal-panel"
				style:transform=move || if expanded.get() { "scale(1)" } else { "scale(0.95)" }
			>
				<div class="modal-header">
					<h2>{title}</h2>
					<button class="modal-close" on:click=move |_| open.set(false)>
						"×"
					</button>
				</div>
				{children()}
			</div>
		</div>
	}
}
