//! End-to-end lifecycle behavior of the queue against both storage
//! backends.

use std::collections::BTreeMap;
use std::sync::Arc;

use glasstoast_core::session::InProcessSessionStore;
use glasstoast_core::{
	Config, Level, MemoryStorage, Notification, NotificationQueue, Renderer, SessionStorage,
};
use rstest::rstest;

/// Minimal renderer: titles joined with a space, so containment checks
/// stay readable.
struct TitleList;

impl Renderer for TitleList {
	fn render(&self, notifications: &[Notification], _config: &Config) -> String {
		notifications
			.iter()
			.map(Notification::title)
			.collect::<Vec<_>>()
			.join(" ")
	}
}

fn memory_queue() -> NotificationQueue {
	NotificationQueue::new(
		Box::new(MemoryStorage::new()),
		Config::new(),
		Box::new(TitleList),
	)
}

fn session_queue() -> NotificationQueue {
	NotificationQueue::new(
		Box::new(SessionStorage::with_backend(Arc::new(
			InProcessSessionStore::new(),
		))),
		Config::new(),
		Box::new(TitleList),
	)
}

#[rstest]
#[case::memory(memory_queue())]
#[case::session(session_queue())]
fn insertion_order_and_count_track_adds(#[case] queue: NotificationQueue) {
	for title in ["one", "two", "three", "four"] {
		queue.info(title, "", BTreeMap::new());
	}

	let titles: Vec<_> = queue
		.notifications()
		.iter()
		.map(|n| n.title().to_string())
		.collect();
	assert_eq!(titles, ["one", "two", "three", "four"]);
	assert_eq!(queue.count(), 4);
}

#[rstest]
#[case::memory(memory_queue())]
#[case::session(session_queue())]
fn render_returns_markup_then_drains(#[case] queue: NotificationQueue) {
	queue.success("Saved", "Your changes were saved", BTreeMap::new());
	queue.error("Failed", "", BTreeMap::new());
	assert_eq!(queue.count(), 2);

	let markup = queue.render();
	assert!(!markup.is_empty());
	assert!(markup.contains("Saved"));
	assert!(markup.contains("Failed"));
	assert_eq!(queue.count(), 0);

	// idempotent on the now-empty queue
	assert_eq!(queue.render(), "");
	assert_eq!(queue.count(), 0);
}

#[rstest]
fn empty_render_generates_nothing() {
	let queue = memory_queue();
	assert_eq!(queue.render(), "");
	assert!(queue.notifications().is_empty());
}

#[rstest]
#[case::memory(memory_queue())]
#[case::session(session_queue())]
fn ids_stay_unique_across_identical_adds(#[case] queue: NotificationQueue) {
	queue.warning("Same", "Same body", BTreeMap::new());
	queue.warning("Same", "Same body", BTreeMap::new());

	let records = queue.notifications();
	assert_eq!(records.len(), 2);
	assert_ne!(records[0].id(), records[1].id());
}

#[rstest]
fn chaining_reads_like_the_sugar_api() {
	let queue = memory_queue();
	queue
		.success("First Success", "First success message", BTreeMap::new())
		.error("First Error", "First error message", BTreeMap::new())
		.warning("First Warning", "First warning message", BTreeMap::new())
		.info("First Info", "First info message", BTreeMap::new());
	assert_eq!(queue.count(), 4);

	queue.clear();
	assert!(!queue.has_notifications());
}

#[rstest]
fn override_options_land_on_the_record() {
	let queue = memory_queue();
	let mut options = BTreeMap::new();
	options.insert("duration".to_string(), serde_json::json!(3000));
	queue.add(Level::Warning, "Low disk", "", options);

	let records = queue.notifications();
	assert_eq!(records[0].option("duration"), Some(&serde_json::json!(3000)));
	assert_eq!(
		records[0].option("position"),
		Some(&serde_json::json!("top-right"))
	);
}
