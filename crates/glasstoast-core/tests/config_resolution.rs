//! Config layering behavior observed through the queue, the way a host
//! application sees it.

use std::collections::BTreeMap;

use glasstoast_core::{Config, MemoryStorage, Notification, NotificationQueue, Position, Renderer};
use rstest::rstest;
use serde_json::json;

struct Discard;

impl Renderer for Discard {
	fn render(&self, _notifications: &[Notification], _config: &Config) -> String {
		String::new()
	}
}

fn queue_with(config: Config) -> NotificationQueue {
	NotificationQueue::new(Box::new(MemoryStorage::new()), config, Box::new(Discard))
}

#[rstest]
fn structured_closable_false_reaches_records_as_show_close_button() {
	let config = Config::from_value(json!({
		"defaults": { "closable": false }
	}));
	let queue = queue_with(config);
	queue.success("Saved", "", BTreeMap::new());

	let record = &queue.notifications()[0];
	assert_eq!(record.bool_option("show_close_button"), Some(false));
	// the external spelling travels along for renderer-side consumers
	assert_eq!(record.bool_option("closable"), Some(false));
}

#[rstest]
fn unknown_position_string_falls_back_to_top_right() {
	let config = Config::from_value(json!({ "position": "northwest" }));
	assert_eq!(config.position(), Position::TopRight);

	let queue = queue_with(config);
	queue.info("hello", "", BTreeMap::new());
	assert_eq!(
		queue.notifications()[0].str_option("position"),
		Some("top-right")
	);
}

#[rstest]
fn effective_value_prefers_override_then_instance_then_default() {
	// defaults D, instance I, override O sharing the key `duration`
	let instance = Config::from_value(json!({ "duration": 2000 }));
	let queue = queue_with(instance);

	let mut overrides = BTreeMap::new();
	overrides.insert("duration".to_string(), json!(3000));
	queue.info("o wins", "", overrides);
	queue.info("i wins", "", BTreeMap::new());

	let records = queue.notifications();
	assert_eq!(records[0].option("duration"), Some(&json!(3000)));
	assert_eq!(records[1].option("duration"), Some(&json!(2000)));

	// no instance value, no override: the built-in default
	let plain = queue_with(Config::new());
	plain.info("d wins", "", BTreeMap::new());
	assert_eq!(plain.notifications()[0].option("duration"), Some(&json!(5000)));
}

#[rstest]
fn both_call_shapes_coexist() {
	// title+body form and the body-less form both produce full records
	let queue = queue_with(Config::new());
	queue.success("Saved", "Your changes were saved", BTreeMap::new());
	queue.error("Failed", "", BTreeMap::new());

	let records = queue.notifications();
	assert_eq!(records[0].body(), "Your changes were saved");
	assert_eq!(records[1].body(), "");
	assert_eq!(records[1].title(), "Failed");
}

#[rstest]
fn nested_override_structures_survive_the_merge() {
	let queue = queue_with(Config::new());
	let mut overrides = BTreeMap::new();
	overrides.insert("custom_data".to_string(), json!({ "user_id": 123 }));
	overrides.insert("tags".to_string(), json!(["deploy", "ops"]));
	queue.info("rich", "", overrides);

	let record = &queue.notifications()[0];
	assert_eq!(record.option("custom_data"), Some(&json!({ "user_id": 123 })));
	assert_eq!(record.option("tags"), Some(&json!(["deploy", "ops"])));
}
