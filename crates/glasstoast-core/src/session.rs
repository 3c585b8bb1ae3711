//! Host session boundary.
//!
//! The queue core never reaches into ambient session state; everything
//! session-shaped goes through [`SessionBackend`]. A host application
//! adapts its own session mechanism to this trait. Without one, a
//! process-wide in-memory store is started lazily on first use, so
//! callers never manage session lifecycle themselves.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use once_cell::sync::Lazy;
use serde_json::Value;

/// Minimal key/value surface a host session must provide.
///
/// Consistency across concurrent requests in the same session is whatever
/// the host store gives (typically last-writer-wins at save time); this
/// crate does not add locking or versioning on top.
pub trait SessionBackend: Send + Sync {
	/// Value stored under `key`, or `None` when absent.
	fn load(&self, key: &str) -> Option<Value>;

	/// Store `value` under `key`, replacing any previous value.
	fn store(&self, key: &str, value: Value);

	/// Remove `key` entirely.
	fn delete(&self, key: &str);
}

/// In-memory session store used when no host backend is injected.
///
/// # Examples
///
/// ```
/// use glasstoast_core::session::{InProcessSessionStore, SessionBackend};
/// use serde_json::json;
///
/// let store = InProcessSessionStore::new();
/// store.store("greeting", json!("hello"));
/// assert_eq!(store.load("greeting"), Some(json!("hello")));
/// store.delete("greeting");
/// assert_eq!(store.load("greeting"), None);
/// ```
#[derive(Debug, Default)]
pub struct InProcessSessionStore {
	values: RwLock<HashMap<String, Value>>,
}

impl InProcessSessionStore {
	pub fn new() -> Self {
		Self::default()
	}
}

impl SessionBackend for InProcessSessionStore {
	fn load(&self, key: &str) -> Option<Value> {
		self.values
			.read()
			.unwrap_or_else(|e| e.into_inner())
			.get(key)
			.cloned()
	}

	fn store(&self, key: &str, value: Value) {
		self.values
			.write()
			.unwrap_or_else(|e| e.into_inner())
			.insert(key.to_string(), value);
	}

	fn delete(&self, key: &str) {
		self.values
			.write()
			.unwrap_or_else(|e| e.into_inner())
			.remove(key);
	}
}

static PROCESS_SESSION: Lazy<Arc<InProcessSessionStore>> =
	Lazy::new(|| Arc::new(InProcessSessionStore::new()));

/// The process-wide fallback store, started on first use.
pub(crate) fn process_session() -> Arc<dyn SessionBackend> {
	PROCESS_SESSION.clone()
}
