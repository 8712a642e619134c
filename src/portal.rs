//! Portal selection and the transition into a portal page.

use std::fmt;
use std::time::Duration;

use leptos::prelude::*;
use log::{info, warn};

/// How long the loading overlay shows before the page changes.
pub const TRANSITION_DELAY: Duration = Duration::from_millis(500);

/// Page used for unknown portal labels.
pub const FALLBACK_PAGE: &str = "index.html";

/// The portals a visitor can enter from the landing page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Portal {
	/// Grades, attendance and assignments.
	Student,
	/// Classes and grading.
	Teacher,
	/// Institution administration.
	Admin,
}

impl Portal {
	/// Every portal, in display order.
	pub const ALL: [Portal; 3] = [Portal::Student, Portal::Teacher, Portal::Admin];

	/// Card and button label, e.g. "Student Portal".
	pub fn label(self) -> &'static str {
		match self {
			Portal::Student => "Student Portal",
			Portal::Teacher => "Teacher Portal",
			Portal::Admin => "Admin Portal",
		}
	}

	/// Page the portal lives on.
	pub fn page(self) -> &'static str {
		match self {
			Portal::Student => "student-portal.html",
			Portal::Teacher => "teacher-portal.html",
			Portal::Admin => "admin-portal.html",
		}
	}

	/// Match a portal against label text, ignoring surrounding whitespace.
	pub fn from_label(label: &str) -> Option<Self> {
		let label = label.trim();
		Self::ALL.into_iter().find(|p| p.label() == label)
	}
}

impl fmt::Display for Portal {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.label())
	}
}

/// Target page for a portal label; unknown labels go back to the landing page.
pub fn page_for_label(label: &str) -> &'static str {
	Portal::from_label(label).map_or(FALLBACK_PAGE, Portal::page)
}

/// Show the loading overlay, then send the browser to `page`.
pub fn navigate_to(page: &'static str, overlay: RwSignal<bool>) {
	info!("portal: opening {page}");
	overlay.set(true);
	set_timeout(
		move || {
			let Some(window) = web_sys::window() else {
				return;
			};
			if let Err(e) = window.location().set_href(page) {
				warn!("portal: navigation to {page} failed: {e:?}");
			}
		},
		TRANSITION_DELAY,
	);
}

/// Full-screen "Loading Portal..." overlay shown during a portal transition.
#[component]
pub fn PortalOverlay(
	/// Whether the overlay is showing.
	visible: RwSignal<bool>,
) -> impl IntoView {
	let faded_in = RwSignal::new(false);

	Effect::new(move |_| {
		if visible.get() {
			set_timeout(move || faded_in.set(true), Duration::from_millis(10));
		} else {
			faded_in.set(false);
		}
	});

	view! {
		<Show when=move || visible.get()>
			<div
				class="portal-overlay"
				style:opacity=move || if faded_in.get() { "1" } else { "0" }
			>
				<div class="portal-overlay__content">
					<div class="portal-overlay__spinner"></div>
					<p>"Loading Portal..."</p>
				</div>
			</div>
		</Show>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn labels_map_to_pages() {
		assert_eq!(page_for_label("Student Portal"), "student-portal.html");
		assert_eq!(page_for_label("Teacher Portal"), "teacher-portal.html");
		assert_eq!(page_for_label(" Admin Portal\n"), "admin-portal.html");
	}

	#[test]
	fn unknown_labels_fall_back_to_index() {
		assert_eq!(page_for_label("Parent Portal"), FALLBACK_PAGE);
		assert_eq!(page_for_label(""), FALLBACK_PAGE);
	}

	#[test]
	fn labels_round_trip() {
		for portal in Portal::ALL {
			assert_eq!(Portal::from_label(&portal.to_string()), Some(portal));
		}
	}
}
