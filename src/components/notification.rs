//! Corner toast notifications that slide in, linger, and slide away.

use std::time::Duration;

use leptos::prelude::*;
use log::debug;

/// Severity of a toast; picks its colors.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NotificationKind {
	/// Neutral information (blue).
	#[default]
	Info,
	/// Completed action (green).
	Success,
	/// Needs attention (yellow, dark text).
	Warning,
	/// Failed action (red).
	Error,
}

impl NotificationKind {
	/// CSS classes for this kind of toast.
	pub fn classes(self) -> &'static str {
		match self {
			NotificationKind::Info => "toast toast--info",
			NotificationKind::Success => "toast toast--success",
			NotificationKind::Warning => "toast toast--warning",
			NotificationKind::Error => "toast toast--error",
		}
	}
}

/// Where a toast is in its on-screen life.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastPhase {
	/// Mounted off-screen to the right.
	Entering,
	/// Slid into view.
	Shown,
	/// Sliding back out.
	Leaving,
	/// Gone from the page.
	Removed,
}

impl ToastPhase {
	/// Offsets from creation at which each later phase begins.
	pub const TIMELINE: [(Duration, ToastPhase); 3] = [
		(Duration::from_millis(10), ToastPhase::Shown),
		(Duration::from_millis(3000), ToastPhase::Leaving),
		(Duration::from_millis(3300), ToastPhase::Removed),
	];

	/// Phase of a toast `elapsed` after it was created.
	pub fn at(elapsed: Duration) -> Self {
		Self::TIMELINE
			.iter()
			.rev()
			.find(|(start, _)| elapsed >= *start)
			.map_or(ToastPhase::Entering, |(_, phase)| *phase)
	}

	/// CSS transform for this phase.
	pub fn transform(self) -> &'static str {
		match self {
			ToastPhase::Shown => "translateX(0)",
			_ => "translateX(100%)",
		}
	}
}

/// A toast currently on the page.
#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
	/// Unique within the page session.
	pub id: u64,
	/// Text shown in the toast.
	pub message: String,
	/// Style of the toast.
	pub kind: NotificationKind,
	/// Current lifecycle phase.
	pub phase: ToastPhase,
}

/// Handle for raising toasts, shared through context.
#[derive(Clone, Copy)]
pub struct Notifier {
	toasts: RwSignal<Vec<Toast>>,
	next_id: StoredValue<u64>,
}

impl Notifier {
	/// Empty notifier.
	pub fn new() -> Self {
		Self {
			toasts: RwSignal::new(Vec::new()),
			next_id: StoredValue::new(0),
		}
	}

	/// Show `message` and walk it through its lifecycle.
	pub fn notify(self, message: impl Into<String>, kind: NotificationKind) {
		let Some(id) = self.next_id.try_update_value(|n| {
			*n += 1;
			*n
		}) else {
			return;
		};
		let message = message.into();
		debug!("notification: {:?} {}", kind, message);
		self.toasts.try_update(|ts| {
			ts.push(Toast {
				id,
				message,
				kind,
				phase: ToastPhase::Entering,
			})
		});

		for (at, phase) in ToastPhase::TIMELINE {
			let toasts = self.toasts;
			set_timeout(
				move || {
					toasts.try_update(|ts| {
						if phase == ToastPhase::Removed {
							ts.retain(|t| t.id != id);
						} else if let Some(t) = ts.iter_mut().find(|t| t.id == id) {
							t.phase = phase;
						}
					});
				},
				at,
			);
		}
	}
}

impl Default for Notifier {
	fn default() -> Self {
		Self::new()
	}
}

/// The notifier provided by an ancestor, if any.
pub fn use_notifier() -> Option<Notifier> {
	use_context::<Notifier>()
}

/// Renders the toasts raised through `notifier` in the top-right corner.
#[component]
pub fn NotificationStack(notifier: Notifier) -> impl IntoView {
	let toasts = notifier.toasts;

	view! {
		<div class="toast-stack">
			<For each=move || toasts.get() key=|t| t.id let:toast>
				{
					let id = toast.id;
					let transform = move || {
						toasts
							.with(|ts| ts.iter().find(|t| t.id == id).map(|t| t.phase))
							.unwrap_or(ToastPhase::Removed)
							.transform()
					};
					view! {
						<div class=toast.kind.classes() style:transform=transform>
							{toast.message}
						</div>
					}
				}
			</For>
		</div>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn kinds_have_distinct_styles() {
		assert_eq!(NotificationKind::default(), NotificationKind::Info);
		assert_eq!(NotificationKind::Info.classes(), "toast toast--info");
		assert_eq!(NotificationKind::Success.classes(), "toast toast--success");
		assert_eq!(NotificationKind::Warning.classes(), "toast toast--warning");
		assert_eq!(NotificationKind::Error.classes(), "toast toast--error");
	}

	#[test]
	fn slides_in_almost_immediately() {
		assert_eq!(ToastPhase::at(Duration::ZERO), ToastPhase::Entering);
		assert_eq!(ToastPhase::at(Duration::from_millis(9)), ToastPhase::Entering);
		assert_eq!(ToastPhase::at(Duration::from_millis(10)), ToastPhase::Shown);
	}

	#[test]
	fn dismisses_after_three_seconds_then_removes() {
		assert_eq!(ToastPhase::at(Duration::from_millis(2999)), ToastPhase::Shown);
		assert_eq!(ToastPhase::at(Duration::from_millis(3000)), ToastPhase::Leaving);
		assert_eq!(ToastPhase::at(Duration::from_millis(3299)), ToastPhase::Leaving);
		assert_eq!(ToastPhase::at(Duration::from_millis(3300)), ToastPhase::Removed);
		assert_eq!(ToastPhase::at(Duration::from_secs(60)), ToastPhase::Removed);
	}

	#[test]
	fn only_shown_toasts_are_on_screen() {
		assert_eq!(ToastPhase::Shown.transform(), "translateX(0)");
		assert_eq!(ToastPhase::Entering.transform(), "translateX(100%)");
		assert_eq!(ToastPhase::Leaving.transform(), "translateX(100%)");
	}
}
