//! Typewriter headline that types, holds, and erases a rotating set of phrases.

use std::time::Duration;

use leptos::prelude::*;

/// Typing rhythm and phrase list.
#[derive(Clone, Debug)]
pub struct TypedTextConfig {
	/// Phrases typed in order.
	pub phrases: Vec<String>,
	/// Delay between typed characters.
	pub type_speed: Duration,
	/// Delay between erased characters.
	pub back_speed: Duration,
	/// How long a fully typed phrase stays before erasing starts.
	pub back_delay: Duration,
	/// Start over from the first phrase after the last one.
	pub looped: bool,
	/// Character blinking after the text.
	pub cursor: char,
}

impl Default for TypedTextConfig {
	fn default() -> Self {
		Self {
			phrases: [
				"Transform Your Institution",
				"Empower Your Students",
				"Streamline Your Operations",
				"Enhance Communication",
			]
			.into_iter()
			.map(String::from)
			.collect(),
			type_speed: Duration::from_millis(80),
			back_speed: Duration::from_millis(50),
			back_delay: Duration::from_millis(2000),
			looped: true,
			cursor: '|',
		}
	}
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
	Typing,
	Holding,
	Deleting,
	Done,
}

/// Typewriter state: which phrase is showing and how much of it.
#[derive(Clone, Debug)]
pub struct Typewriter {
	config: TypedTextConfig,
	phrase: usize,
	/// Visible prefix length, in chars.
	shown: usize,
	phase: Phase,
}

impl Typewriter {
	/// Typewriter at the start of the first phrase.
	pub fn new(config: TypedTextConfig) -> Self {
		let phase = if config.phrases.is_empty() {
			Phase::Done
		} else {
			Phase::Typing
		};
		Self {
			config,
			phrase: 0,
			shown: 0,
			phase,
		}
	}

	/// Delay before the first tick.
	pub fn start_delay(&self) -> Option<Duration> {
		(self.phase != Phase::Done).then_some(self.config.type_speed)
	}

	/// Text currently visible.
	pub fn text(&self) -> String {
		self.config
			.phrases
			.get(self.phrase)
			.map(|p| p.chars().take(self.shown).collect())
			.unwrap_or_default()
	}

	/// Whether the last phrase is typed and nothing more will change.
	pub fn is_done(&self) -> bool {
		self.phase == Phase::Done
	}

	/// Advance by one character (or out of a hold) and return the delay until the
	/// next tick. `None` once the last phrase is typed and looping is off.
	pub fn tick(&mut self) -> Option<Duration> {
		match self.phase {
			Phase::Typing => {
				let len = self.current_len();
				if self.shown < len {
					self.shown += 1;
				}
				if self.shown < len {
					return Some(self.config.type_speed);
				}
				if self.phrase + 1 == self.config.phrases.len() && !self.config.looped {
					self.phase = Phase::Done;
					return None;
				}
				self.phase = Phase::Holding;
				Some(self.config.back_delay)
			}
			Phase::Holding => {
				self.phase = Phase::Deleting;
				self.erase()
			}
			Phase::Deleting => self.erase(),
			Phase::Done => None,
		}
	}

	fn erase(&mut self) -> Option<Duration> {
		self.shown = self.shown.saturating_sub(1);
		if self.shown > 0 {
			return Some(self.config.back_speed);
		}
		self.phrase = (self.phrase + 1) % self.config.phrases.len();
		self.phase = Phase::Typing;
		Some(self.config.type_speed)
	}

	fn current_len(&self) -> usize {
		self.config
			.phrases
			.get(self.phrase)
			.map_or(0, |p| p.chars().count())
	}
}

fn schedule(machine: StoredValue<Typewriter>, text: RwSignal<String>, delay: Duration) {
	set_timeout(
		move || {
			let Some((next, shown)) = machine.try_update_value(|m| (m.tick(), m.text())) else {
				return;
			};
			text.set(shown);
			if let Some(delay) = next {
				schedule(machine, text, delay);
			}
		},
		delay,
	);
}

/// Headline text typed out character by character, followed by a blinking cursor.
#[component]
pub fn TypedText(
	/// Phrases and timing; the landing-page headline when omitted.
	#[prop(optional)]
	config: Option<TypedTextConfig>,
) -> impl IntoView {
	let config = config.unwrap_or_default();
	let cursor = config.cursor;
	let machine = Typewriter::new(config);
	let first = machine.start_delay();
	let machine = StoredValue::new(machine);
	let text = RwSignal::new(String::new());

	if let Some(delay) = first {
		schedule(machine, text, delay);
	}

	view! {
		<span class="typed-text">{move || text.get()}</span>
		<span class="typed-cursor">{cursor}</span>
	}
}
