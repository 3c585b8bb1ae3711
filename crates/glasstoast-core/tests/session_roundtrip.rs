//! Serialization round trips through the session boundary.

use std::collections::BTreeMap;
use std::sync::Arc;

use glasstoast_core::session::InProcessSessionStore;
use glasstoast_core::{Level, Notification, SessionBackend, SessionStorage, Storage, SESSION_KEY};
use rstest::rstest;
use serde_json::json;
use serial_test::serial;

fn nested_options() -> BTreeMap<String, serde_json::Value> {
	let mut options = BTreeMap::new();
	options.insert("duration".to_string(), json!(3000));
	options.insert("tags".to_string(), json!(["disk", "ops", 3]));
	options.insert(
		"custom_data".to_string(),
		json!({ "user_id": 123, "flags": { "sticky": true } }),
	);
	options
}

#[rstest]
fn serialize_deserialize_reserialize_is_byte_identical() {
	let record = Notification::new(Level::Warning, "Low disk", "1% remaining", nested_options());

	let first = serde_json::to_string(&record).unwrap();
	let revived: Notification = serde_json::from_str(&first).unwrap();

	assert_eq!(revived, record);
	assert_eq!(revived.id(), record.id());
	assert_eq!(revived.level(), record.level());
	assert_eq!(revived.title(), record.title());
	assert_eq!(revived.body(), record.body());
	assert_eq!(revived.options(), record.options());
	assert_eq!(revived.created_at(), record.created_at());

	let second = serde_json::to_string(&revived).unwrap();
	assert_eq!(second, first);
}

#[rstest]
fn storage_round_trip_preserves_every_field() {
	let storage = SessionStorage::with_backend(Arc::new(InProcessSessionStore::new()));
	let record = Notification::new(Level::Error, "Failed", "Disk write failed", nested_options());
	let original = record.clone();
	storage.add(record);

	let revived = storage.get();
	assert_eq!(revived.len(), 1);
	assert_eq!(revived[0], original);
}

#[rstest]
fn stored_blob_uses_the_documented_layout() {
	let backend = Arc::new(InProcessSessionStore::new());
	let storage = SessionStorage::with_backend(backend.clone());
	storage.add(Notification::new(
		Level::Success,
		"Saved",
		"",
		BTreeMap::new(),
	));

	let blob = backend.load(SESSION_KEY).expect("key must exist after add");
	let entries = blob.as_array().expect("collection is a JSON array");
	assert_eq!(entries.len(), 1);
	let entry = entries[0].as_object().expect("record is a JSON object");
	assert_eq!(entry["level"], json!("success"));
	assert_eq!(entry["title"], json!("Saved"));
	assert_eq!(entry["body"], json!(""));
	assert!(entry["id"].as_str().unwrap().starts_with("glasstoast-"));
	assert!(entry["created_at"].is_i64());
	assert!(entry["options"].is_object());
}

/// The zero-configuration constructor shares one process-wide fallback
/// store, so tests touching it cannot interleave.
#[rstest]
#[serial]
fn fallback_store_starts_lazily_and_persists_across_instances() {
	let writer = SessionStorage::new();
	writer.clear();
	writer.add(Notification::new(
		Level::Info,
		"Sticky",
		"Survives the adapter",
		BTreeMap::new(),
	));

	// a second adapter sees the same session-backed collection
	let reader = SessionStorage::new();
	let records = reader.get();
	assert_eq!(records.len(), 1);
	assert_eq!(records[0].title(), "Sticky");

	reader.clear();
	assert!(writer.get().is_empty());
}
