//! smis-landing: interactive landing page for the SMIS student management system.
//!
//! This crate provides the WASM front end of the landing page: an animated
//! particle background, a typed headline, count-up statistics, login and
//! registration dialogs, and the transition into the portal pages.

// Enables the `js` backend so `rand::thread_rng` works on wasm32.
use getrandom as _;

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info, warn};

pub mod api;
pub mod components;
pub mod format;
pub mod portal;
pub mod storage;
pub mod validate;

use components::counter::StatsCounter;
use components::modal::Modal;
use components::notification::{NotificationStack, Notifier};
use components::particle_field::ParticleBackground;
use components::register::RegisterForm;
use components::typed_text::TypedText;
use portal::{Portal, PortalOverlay, navigate_to};
use storage::{BrowserStorage, seed_demo_profile};

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("smis-landing: logging initialized");
}

/// Store the demo profile in local storage on a first visit.
pub fn seed_demo_storage() {
	match BrowserStorage::local() {
		Ok(store) => {
			if seed_demo_profile(&store) {
				info!("smis-landing: seeded demo profile");
			}
		}
		Err(e) => warn!("smis-landing: demo profile not seeded: {}", e),
	}
}

/// Main application component.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let login_open = RwSignal::new(false);
	let register_open = RwSignal::new(false);
	let menu_open = RwSignal::new(false);
	let overlay = RwSignal::new(false);
	let notifier = Notifier::new();
	provide_context(notifier);
	let open_portal = move |portal: Portal| navigate_to(portal.page(), overlay);
	let year = js_sys::Date::new_0().get_full_year();

	view! {
		<Html attr:lang="en" attr:dir="ltr" />
		<Title text="SMIS - Student Management Information System" />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<ParticleBackground />

		<nav class="site-nav">
			<span class="brand">"SMIS"</span>
			<button class="menu-toggle" on:click=move |_| menu_open.update(|o| *o = !*o)>
				"☰"
			</button>
			<div class="nav-links" class:open=move || menu_open.get()>
				<a href="#portals">"Portals"</a>
				<a href="#stats">"Impact"</a>
				<button on:click=move |_| login_open.set(true)>"Login"</button>
				<button on:click=move |_| register_open.set(true)>"Register"</button>
			</div>
		</nav>

		<header class="hero">
			<h1>
				<TypedText />
			</h1>
			<p class="subtitle">
				"Attendance, grades, and communication for your whole institution in one place."
			</p>
		</header>

		<section id="stats" class="stats">
			<StatsCounter target=12500 label="Students enrolled" suffix="+" />
			<StatsCounter target=850 label="Teachers" />
			<StatsCounter target=45 label="Institutions" />
			<StatsCounter target=98 label="Satisfaction" suffix="%" />
		</section>

		<section id="portals" class="portals">
			{Portal::ALL
				.into_iter()
				.map(|portal| {
					view! {
						<div class="portal-card">
							<h3>{portal.label()}</h3>
							<button on:click=move |_| open_portal(portal)>"Access Portal"</button>
						</div>
					}
				})
				.collect_view()}
		</section>

		<Modal open=login_open title="Choose Your Portal">
			{Portal::ALL
				.into_iter()
				.map(|portal| {
					view! {
						<button
							class="portal-choice"
							on:click=move |_| {
								login_open.set(false);
								open_portal(portal);
							}
						>
							{portal.label()}
						</button>
					}
				})
				.collect_view()}
		</Modal>

		<Modal open=register_open title="Create an Account">
			<RegisterForm />
		</Modal>

		<PortalOverlay visible=overlay />
		<NotificationStack notifier=notifier />

		<footer class="site-footer">
			<p>{format!("© {year} SMIS. All rights reserved.")}</p>
		</footer>
	}
}
