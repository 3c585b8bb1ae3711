//! Storage backends for queued notifications.

use std::sync::{Arc, RwLock};

use serde_json::Value;

use crate::notification::Notification;
use crate::session::{process_session, SessionBackend};

/// Session key holding the serialized notification collection.
pub const SESSION_KEY: &str = "glasstoast.notifications";

/// Durability seam between the queue and its backing store.
///
/// Implementations must preserve insertion order in [`Storage::get`] and
/// must never fail: unknown ids are reported through boolean returns, and
/// no capacity bound is enforced here (the visible-notification cap is a
/// renderer concern).
pub trait Storage: Send + Sync {
	/// Insert a record, replacing any record with the same id in place.
	fn add(&self, notification: Notification);

	/// All records in insertion order.
	fn get(&self) -> Vec<Notification>;

	/// Drop every record.
	fn clear(&self);

	/// Whether a record with this id is present.
	fn has(&self, id: &str) -> bool;

	/// Remove by id; `false` when absent.
	fn remove(&self, id: &str) -> bool;

	/// Number of stored records.
	fn count(&self) -> usize {
		self.get().len()
	}

	fn is_empty(&self) -> bool {
		self.count() == 0
	}
}

/// In-process storage living as long as the owning queue.
#[derive(Debug, Default)]
pub struct MemoryStorage {
	notifications: RwLock<Vec<Notification>>,
}

impl MemoryStorage {
	pub fn new() -> Self {
		Self::default()
	}
}

impl Storage for MemoryStorage {
	fn add(&self, notification: Notification) {
		let mut notifications = self
			.notifications
			.write()
			.unwrap_or_else(|e| e.into_inner());
		match notifications
			.iter_mut()
			.find(|existing| existing.id() == notification.id())
		{
			Some(slot) => *slot = notification,
			None => notifications.push(notification),
		}
	}

	fn get(&self) -> Vec<Notification> {
		self.notifications
			.read()
			.unwrap_or_else(|e| e.into_inner())
			.clone()
	}

	fn clear(&self) {
		self.notifications
			.write()
			.unwrap_or_else(|e| e.into_inner())
			.clear();
	}

	fn has(&self, id: &str) -> bool {
		self.notifications
			.read()
			.unwrap_or_else(|e| e.into_inner())
			.iter()
			.any(|notification| notification.id() == id)
	}

	fn remove(&self, id: &str) -> bool {
		let mut notifications = self
			.notifications
			.write()
			.unwrap_or_else(|e| e.into_inner());
		let before = notifications.len();
		notifications.retain(|notification| notification.id() != id);
		notifications.len() != before
	}

	fn count(&self) -> usize {
		self.notifications
			.read()
			.unwrap_or_else(|e| e.into_inner())
			.len()
	}
}

/// Session-backed storage surviving across requests.
///
/// Records round-trip through [`SESSION_KEY`] as a JSON array in insertion
/// order (object key order through a host store is not trustworthy). An
/// absent or foreign-typed value under the key reads as an empty
/// collection, never an error, and entries that no longer decode are
/// skipped with a warning so one stale blob cannot poison a render.
///
/// Concurrent requests in the same session inherit the host store's
/// consistency, typically last-writer-wins; see [`SessionBackend`].
pub struct SessionStorage {
	backend: Arc<dyn SessionBackend>,
}

impl SessionStorage {
	/// Attach to the process-wide fallback session store, starting it on
	/// first use.
	pub fn new() -> Self {
		Self {
			backend: process_session(),
		}
	}

	/// Attach to a host-provided session backend.
	pub fn with_backend(backend: Arc<dyn SessionBackend>) -> Self {
		Self { backend }
	}

	fn load_records(&self) -> Vec<Notification> {
		let Some(value) = self.backend.load(SESSION_KEY) else {
			return Vec::new();
		};
		let Value::Array(entries) = value else {
			tracing::warn!(
				key = SESSION_KEY,
				"session value is not an array, treating as empty"
			);
			return Vec::new();
		};
		let mut records = Vec::with_capacity(entries.len());
		for entry in entries {
			match serde_json::from_value::<Notification>(entry) {
				Ok(record) => records.push(record),
				Err(error) => {
					tracing::warn!(%error, "skipping undecodable session notification");
				}
			}
		}
		records
	}

	fn store_records(&self, records: &[Notification]) {
		let entries: Vec<Value> = records
			.iter()
			.filter_map(|record| match serde_json::to_value(record) {
				Ok(value) => Some(value),
				Err(error) => {
					tracing::warn!(%error, "dropping unserializable notification");
					None
				}
			})
			.collect();
		self.backend.store(SESSION_KEY, Value::Array(entries));
	}
}

impl Default for SessionStorage {
	fn default() -> Self {
		Self::new()
	}
}

impl Storage for SessionStorage {
	fn add(&self, notification: Notification) {
		let mut records = self.load_records();
		match records
			.iter_mut()
			.find(|existing| existing.id() == notification.id())
		{
			Some(slot) => *slot = notification,
			None => records.push(notification),
		}
		self.store_records(&records);
	}

	fn get(&self) -> Vec<Notification> {
		self.load_records()
	}

	fn clear(&self) {
		self.backend.delete(SESSION_KEY);
	}

	fn has(&self, id: &str) -> bool {
		self.load_records()
			.iter()
			.any(|notification| notification.id() == id)
	}

	fn remove(&self, id: &str) -> bool {
		let mut records = self.load_records();
		let before = records.len();
		records.retain(|notification| notification.id() != id);
		let removed = records.len() != before;
		if removed {
			self.store_records(&records);
		}
		removed
	}
}
