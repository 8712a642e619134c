//! Demo registration form.

use leptos::prelude::*;
use log::info;
use serde_json::json;

use crate::api::{DEFAULT_DELAY, simulate_api_call};
use crate::components::notification::{NotificationKind, use_notifier};
use crate::validate::{Validation, validate_form};

/// Name/email/password form. Checks that every field is filled in, then sends
/// it to the simulated backend and raises a toast when that replies.
#[component]
pub fn RegisterForm() -> impl IntoView {
	let name = RwSignal::new(String::new());
	let email = RwSignal::new(String::new());
	let password = RwSignal::new(String::new());
	let result = RwSignal::new(None::<Validation>);
	let notifier = use_notifier();

	let on_submit = move |ev: leptos::ev::SubmitEvent| {
		ev.prevent_default();
		let (n, e, p) = (name.get(), email.get(), password.get());
		let validation = validate_form([
			("name", n.as_str()),
			("email", e.as_str()),
			("password", p.as_str()),
		]);
		if validation.is_valid {
			simulate_api_call(
				"/register",
				Some(json!({ "name": n, "email": e })),
				DEFAULT_DELAY,
				move |reply| {
					info!("register: demo registration accepted at {}", reply.timestamp);
					if let Some(notifier) = notifier {
						notifier.notify(
							"Registration successful! Welcome to SMIS.",
							NotificationKind::Success,
						);
					}
				},
			);
		}
		result.set(Some(validation));
	};

	view! {
		<form class="register-form" on:submit=on_submit>
			<input
				type="text"
				placeholder="Full name"
				prop:value=move || name.get()
				on:input=move |ev| name.set(event_target_value(&ev))
			/>
			<input
				type="email"
				placeholder="Email"
				prop:value=move || email.get()
				on:input=move |ev| email.set(event_target_value(&ev))
			/>
			<input
				type="password"
				placeholder="Password"
				prop:value=move || password.get()
				on:input=move |ev| password.set(event_target_value(&ev))
			/>
			<button type="submit">"Register"</button>
			{move || {
				result
					.get()
					.map(|v| {
						if v.is_valid {
							view! { <p class="form-ok">"Thanks! Registration is in demo mode."</p> }
								.into_any()
						} else {
							view! {
								<ul class="form-errors">
									{v.errors.into_iter().map(|e| view! { <li>{e}</li> }).collect_view()}
								</ul>
							}
								.into_any()
						}
					})
			}}
		</form>
	}
}
