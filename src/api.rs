//! Simulated backend calls for the demo page.
//!
//! Nothing leaves the browser: a call waits `delay` and then always succeeds.

use std::time::Duration;

use leptos::prelude::set_timeout;
use log::debug;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

/// Delay used when a caller has no preference.
pub const DEFAULT_DELAY: Duration = Duration::from_millis(1000);

/// Reply from a simulated call.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse {
	/// Always `true` for simulated calls.
	pub success: bool,
	/// Echo of the request payload, or a generic message.
	pub data: Value,
	/// ISO-8601 time the call completed.
	pub timestamp: String,
}

impl ApiResponse {
	/// Successful reply echoing `data`, or a generic message when there is none.
	pub fn completed(data: Option<Value>, timestamp: impl Into<String>) -> Self {
		Self {
			success: true,
			data: data.unwrap_or_else(|| json!({ "message": "Operation completed successfully" })),
			timestamp: timestamp.into(),
		}
	}
}

/// Pretend to call `endpoint` and hand the reply to `on_done` after `delay`.
pub fn simulate_api_call(
	endpoint: &str,
	data: Option<Value>,
	delay: Duration,
	on_done: impl FnOnce(ApiResponse) + 'static,
) {
	debug!("api: simulated call to {} ({} ms)", endpoint, delay.as_millis());
	set_timeout(
		move || {
			let now: String = js_sys::Date::new_0().to_iso_string().into();
			on_done(ApiResponse::completed(data, now));
		},
		delay,
	);
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn echoes_payload() {
		let payload = json!({ "name": "Ada", "email": "ada@example.com" });
		let reply = ApiResponse::completed(Some(payload.clone()), "2024-01-15T10:00:00.000Z");
		assert!(reply.success);
		assert_eq!(reply.data, payload);
		assert_eq!(reply.timestamp, "2024-01-15T10:00:00.000Z");
	}

	#[test]
	fn missing_payload_gets_generic_message() {
		let reply = ApiResponse::completed(None, "t");
		assert_eq!(reply.data["message"], "Operation completed successfully");
	}

	#[test]
	fn serializes_with_plain_field_names() {
		let reply = ApiResponse::completed(None, "2024-01-15T10:00:00.000Z");
		let v = serde_json::to_value(&reply).unwrap();
		assert_eq!(v["success"], true);
		assert_eq!(v["timestamp"], "2024-01-15T10:00:00.000Z");
		assert!(v["data"].is_object());
	}

	#[test]
	fn default_delay_is_one_second() {
		assert_eq!(DEFAULT_DELAY, Duration::from_secs(1));
	}
}
