//! Statistic counters that count up from zero to their target.

use std::time::Duration;

use leptos::prelude::*;
use log::debug;
use wasm_bindgen::prelude::*;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::format::format_thousands;

/// Timing for a counter run.
#[derive(Clone, Debug)]
pub struct CounterConfig {
	/// Total time from zero to the target.
	pub duration: Duration,
	/// Expected time between animation frames.
	pub frame_interval: Duration,
	/// Share of the counter that must be on screen before it starts.
	pub visible_threshold: f64,
}

impl Default for CounterConfig {
	fn default() -> Self {
		Self {
			duration: Duration::from_millis(2000),
			frame_interval: Duration::from_millis(16),
			visible_threshold: 0.5,
		}
	}
}

/// Count-up progress for a single counter.
#[derive(Clone, Debug)]
pub struct CounterAnimation {
	target: i64,
	current: f64,
	increment: f64,
	started: bool,
	done: bool,
}

impl CounterAnimation {
	/// Counter at zero, sized to reach `target` over `config.duration`.
	pub fn new(target: i64, config: &CounterConfig) -> Self {
		let frames = (config.duration.as_millis() as f64
			/ config.frame_interval.as_millis().max(1) as f64)
			.max(1.0);
		Self {
			target,
			current: 0.0,
			increment: target as f64 / frames,
			started: false,
			done: false,
		}
	}

	/// Mark the run as started. Only the first call returns `true`.
	pub fn start(&mut self) -> bool {
		!std::mem::replace(&mut self.started, true)
	}

	/// Advance one frame. Returns `true` once the target has been reached.
	pub fn step(&mut self) -> bool {
		if !self.done {
			self.current += self.increment;
			self.done = self.current >= self.target as f64;
		}
		self.done
	}

	/// Whether the target has been reached.
	pub fn is_done(&self) -> bool {
		self.done
	}

	/// Text to show for the current frame, with thousands separators.
	pub fn display(&self) -> String {
		if self.done {
			format_thousands(self.target)
		} else {
			format_thousands(self.current.floor() as i64)
		}
	}
}

fn run(anim: StoredValue<CounterAnimation>, text: RwSignal<String>) {
	request_animation_frame(move || {
		let Some((done, shown)) = anim.try_update_value(|a| (a.step(), a.display())) else {
			return;
		};
		text.set(shown);
		if !done {
			run(anim, text);
		}
	});
}

/// Call `on_visible` once, the first time `target` is at least `threshold`
/// on screen. Returns `None` if the browser has no intersection observer.
fn watch_visibility(
	target: &Element,
	threshold: f64,
	mut on_visible: impl FnMut() + 'static,
) -> Option<()> {
	let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
		move |entries: js_sys::Array, observer: IntersectionObserver| {
			let visible = entries
				.iter()
				.filter_map(|e| e.dyn_into::<IntersectionObserverEntry>().ok())
				.any(|e| e.is_intersecting());
			if visible {
				observer.disconnect();
				on_visible();
			}
		},
	);
	let options = IntersectionObserverInit::new();
	options.set_threshold(&JsValue::from_f64(threshold));
	let observer =
		IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options).ok()?;
	observer.observe(target);
	// Lives until the observer fires and disconnects.
	callback.forget();
	Some(())
}

/// A number that counts up to `target` once it scrolls into view.
#[component]
pub fn StatsCounter(
	/// Final value shown.
	target: i64,
	/// Caption under the number.
	#[prop(into)]
	label: String,
	/// Text after the number, e.g. `+` or `%`.
	#[prop(optional, into)]
	suffix: Option<String>,
) -> impl IntoView {
	let config = CounterConfig::default();
	let threshold = config.visible_threshold;
	let anim = StoredValue::new(CounterAnimation::new(target, &config));
	let text = RwSignal::new(String::from("0"));
	let counter_ref = NodeRef::<leptos::html::Span>::new();

	let begin = move || {
		if anim.try_update_value(|a| a.start()) == Some(true) {
			run(anim, text);
		}
	};

	Effect::new(move |_| {
		let Some(span) = counter_ref.get() else {
			return;
		};
		if watch_visibility(&span, threshold, begin).is_none() {
			debug!("counter: no intersection observer, starting immediately");
			begin();
		}
	});

	view! {
		<div class="stat">
			<span class="stats-counter" node_ref=counter_ref>
				{move || text.get()}
			</span>
			{suffix.map(|s| view! { <span class="stats-suffix">{s}</span> })}
			<p class="stat-label">{label}</p>
		</div>
	}
}
