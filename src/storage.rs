//! JSON values in browser local storage, plus the demo profile seeded on first visit.

use std::cell::RefCell;
use std::collections::HashMap;

use log::warn;
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use thiserror::Error;
use web_sys::Storage;

/// Key under which the demo profile is stored.
pub const DEMO_PROFILE_KEY: &str = "smis_user";

/// Failures reading or writing stored values.
#[derive(Debug, Error)]
pub enum StorageError {
	/// No window or no `localStorage` (private mode, sandboxed frame).
	#[error("local storage is unavailable")]
	Unavailable,
	/// The browser refused the read or write, e.g. quota exceeded.
	#[error("storage backend rejected the operation: {0}")]
	Backend(String),
	/// Stored value is not the expected JSON.
	#[error("invalid JSON: {0}")]
	Json(#[from] serde_json::Error),
}

/// String key-value store.
pub trait KeyValueStore {
	/// Value under `key`, if any.
	fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;
	/// Store `value` under `key`, replacing what was there.
	fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// The window's `localStorage`.
pub struct BrowserStorage {
	inner: Storage,
}

impl BrowserStorage {
	/// The current window's `localStorage`.
	pub fn local() -> Result<Self, StorageError> {
		let inner = web_sys::window()
			.ok_or(StorageError::Unavailable)?
			.local_storage()
			.map_err(|e| StorageError::Backend(format!("{e:?}")))?
			.ok_or(StorageError::Unavailable)?;
		Ok(Self { inner })
	}
}

impl KeyValueStore for BrowserStorage {
	fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
		self.inner
			.get_item(key)
			.map_err(|e| StorageError::Backend(format!("{e:?}")))
	}

	fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
		self.inner
			.set_item(key, value)
			.map_err(|e| StorageError::Backend(format!("{e:?}")))
	}
}

/// In-memory store for previews and tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
	items: RefCell<HashMap<String, String>>,
}

impl KeyValueStore for MemoryStore {
	fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
		Ok(self.items.borrow().get(key).cloned())
	}

	fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
		self.items
			.borrow_mut()
			.insert(key.to_string(), value.to_string());
		Ok(())
	}
}

fn try_save<S, T>(store: &S, key: &str, value: &T) -> Result<(), StorageError>
where
	S: KeyValueStore + ?Sized,
	T: Serialize + ?Sized,
{
	let json = serde_json::to_string(value)?;
	store.set_item(key, &json)
}

fn try_load<S, T>(store: &S, key: &str) -> Result<Option<T>, StorageError>
where
	S: KeyValueStore + ?Sized,
	T: DeserializeOwned,
{
	match store.get_item(key)? {
		Some(json) => Ok(Some(serde_json::from_str(&json)?)),
		None => Ok(None),
	}
}

/// Store `value` as JSON under `key`. Returns `false` if it could not be written.
pub fn save_json<S, T>(store: &S, key: &str, value: &T) -> bool
where
	S: KeyValueStore + ?Sized,
	T: Serialize + ?Sized,
{
	match try_save(store, key, value) {
		Ok(()) => true,
		Err(e) => {
			warn!("storage: failed to save {key}: {e}");
			false
		}
	}
}

/// Read the JSON value under `key`. Missing and unreadable values both give `None`.
pub fn load_json<S, T>(store: &S, key: &str) -> Option<T>
where
	S: KeyValueStore + ?Sized,
	T: DeserializeOwned,
{
	try_load(store, key).unwrap_or_else(|e| {
		warn!("storage: failed to load {key}: {e}");
		None
	})
}

/// Demo user shown by the portals.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DemoUser {
	/// Numeric user id.
	pub id: u32,
	/// Display name.
	pub name: String,
	/// Contact address.
	pub email: String,
	/// Account type, e.g. `student`. Stored as `type`.
	#[serde(rename = "type")]
	pub kind: String,
}

/// Display preferences stored with the demo user.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Preferences {
	/// Color theme name.
	pub theme: String,
	/// Language code.
	pub language: String,
}

/// The record stored under [`DEMO_PROFILE_KEY`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DemoProfile {
	/// Who is signed in.
	pub user: DemoUser,
	/// Their settings.
	pub preferences: Preferences,
}

impl Default for DemoProfile {
	fn default() -> Self {
		Self {
			user: DemoUser {
				id: 1,
				name: "John Doe".into(),
				email: "john@smis.edu".into(),
				kind: "student".into(),
			},
			preferences: Preferences {
				theme: "light".into(),
				language: "en".into(),
			},
		}
	}
}

/// Write the demo profile unless one is already stored.
///
/// Returns `true` if a profile was written.
pub fn seed_demo_profile<S: KeyValueStore + ?Sized>(store: &S) -> bool {
	if load_json::<S, serde_json::Value>(store, DEMO_PROFILE_KEY).is_some() {
		return false;
	}
	save_json(store, DEMO_PROFILE_KEY, &DemoProfile::default())
}
