//! The notification queue facade.

use std::collections::BTreeMap;

use serde_json::Value;

use crate::config::Config;
use crate::levels::Level;
use crate::notification::Notification;
use crate::storage::Storage;

/// Renders queued notifications into response-ready markup.
///
/// The queue assumes nothing about the string's structure beyond it being
/// safe to embed in a response body as-is; escaping user-supplied titles
/// and bodies is the implementor's contract, not the queue's.
pub trait Renderer: Send + Sync {
	fn render(&self, notifications: &[Notification], config: &Config) -> String;
}

/// Accumulates leveled notifications and renders them at most once.
///
/// Storage and rendering are injected seams: any [`Storage`] can stand in
/// for the in-memory or session-backed defaults, and any [`Renderer`] can
/// consume the drained records. All operations run synchronously within
/// one request cycle and none of them fail.
///
/// # Examples
///
/// ```
/// use glasstoast_core::{Config, MemoryStorage, Notification, NotificationQueue, Renderer};
///
/// struct TitleList;
///
/// impl Renderer for TitleList {
///     fn render(&self, notifications: &[Notification], _config: &Config) -> String {
///         notifications
///             .iter()
///             .map(Notification::title)
///             .collect::<Vec<_>>()
///             .join(", ")
///     }
/// }
///
/// let queue = NotificationQueue::new(
///     Box::new(MemoryStorage::new()),
///     Config::new(),
///     Box::new(TitleList),
/// );
/// queue.success("Saved", "Your changes were saved", Default::default());
/// queue.error("Failed", "", Default::default());
/// assert_eq!(queue.count(), 2);
///
/// let markup = queue.render();
/// assert_eq!(markup, "Saved, Failed");
/// assert_eq!(queue.count(), 0);
/// ```
pub struct NotificationQueue {
	storage: Box<dyn Storage>,
	config: Config,
	renderer: Box<dyn Renderer>,
}

impl NotificationQueue {
	pub fn new(storage: Box<dyn Storage>, config: Config, renderer: Box<dyn Renderer>) -> Self {
		Self {
			storage,
			config,
			renderer,
		}
	}

	/// The instance configuration records snapshot from.
	pub fn config(&self) -> &Config {
		&self.config
	}

	pub fn success(
		&self,
		title: impl Into<String>,
		body: impl Into<String>,
		options: BTreeMap<String, Value>,
	) -> &Self {
		self.add(Level::Success, title, body, options)
	}

	pub fn error(
		&self,
		title: impl Into<String>,
		body: impl Into<String>,
		options: BTreeMap<String, Value>,
	) -> &Self {
		self.add(Level::Error, title, body, options)
	}

	pub fn warning(
		&self,
		title: impl Into<String>,
		body: impl Into<String>,
		options: BTreeMap<String, Value>,
	) -> &Self {
		self.add(Level::Warning, title, body, options)
	}

	pub fn info(
		&self,
		title: impl Into<String>,
		body: impl Into<String>,
		options: BTreeMap<String, Value>,
	) -> &Self {
		self.add(Level::Info, title, body, options)
	}

	/// Queue a notification whose option snapshot is the instance config
	/// with `options` layered on top, later wins key-by-key.
	pub fn add(
		&self,
		level: Level,
		title: impl Into<String>,
		body: impl Into<String>,
		options: BTreeMap<String, Value>,
	) -> &Self {
		let effective = self.config.merged_with(&options);
		let notification = Notification::new(level, title, body, effective);
		tracing::debug!(
			id = notification.id(),
			level = level.as_str(),
			"queueing notification"
		);
		self.storage.add(notification);
		self
	}

	/// All queued records in insertion order; storage is untouched.
	pub fn notifications(&self) -> Vec<Notification> {
		self.storage.get()
	}

	pub fn clear(&self) -> &Self {
		self.storage.clear();
		self
	}

	pub fn has_notifications(&self) -> bool {
		!self.storage.is_empty()
	}

	pub fn count(&self) -> usize {
		self.storage.count()
	}

	/// Render every queued notification and drain the queue.
	///
	/// An empty queue short-circuits to an empty string with no side
	/// effect. Otherwise the queue is cleared unconditionally after the
	/// renderer runs: delivery is at most once, with no retry if the
	/// caller drops the returned markup.
	pub fn render(&self) -> String {
		let notifications = self.storage.get();
		if notifications.is_empty() {
			return String::new();
		}
		let markup = self.renderer.render(&notifications, &self.config);
		self.storage.clear();
		tracing::debug!(count = notifications.len(), "rendered and drained queue");
		markup
	}
}
