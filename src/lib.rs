//! # glasstoast
//!
//! Liquid-glass toast notifications for server-rendered web applications.
//!
//! A request handler enqueues leveled notifications; a storage backend
//! keeps them until the page renders; rendering emits the markup, inline
//! styles, and behavior script in one string and drains the queue, so
//! every notification is delivered at most once.
//!
//! ```
//! use glasstoast::Config;
//!
//! let toasts = glasstoast::queue(Config::new());
//! toasts.success("Saved", "Your changes were saved", Default::default());
//! toasts.error("Failed", "", Default::default());
//! assert_eq!(toasts.count(), 2);
//!
//! let markup = toasts.render();
//! assert!(markup.contains("Saved"));
//! assert!(markup.contains("Failed"));
//! assert_eq!(toasts.count(), 0);
//! ```
//!
//! Configuration accepts either a flat option map or a framework-style
//! document with a nested `defaults` section:
//!
//! ```
//! use glasstoast::{Config, Position};
//! use serde_json::json;
//!
//! let config = Config::from_value(json!({
//!     "defaults": {
//!         "position": "bottom-right",
//!         "closable": false,
//!         "duration": 3000,
//!     }
//! }));
//! assert_eq!(config.position(), Position::BottomRight);
//! ```
//!
//! Durability and rendering are seams: implement
//! [`Storage`] to swap the backing store, or [`Renderer`]
//! to replace the emitted markup wholesale.

pub use glasstoast_core::{
	Config, Error, InProcessSessionStore, Level, MemoryStorage, Notification, NotificationQueue,
	Position, Renderer, SessionBackend, SessionStorage, Storage, SESSION_KEY,
};
pub use glasstoast_render::{escape_html, presentation, HtmlRenderer};

/// Queue backed by in-process storage, scoped to one request cycle.
pub fn queue(config: Config) -> NotificationQueue {
	NotificationQueue::new(
		Box::new(MemoryStorage::new()),
		config,
		Box::new(HtmlRenderer::new()),
	)
}

/// Queue persisting through the session boundary, so notifications added
/// while handling one request can render on the next response.
///
/// Uses the process-wide fallback session store; hand a real host session
/// to [`SessionStorage::with_backend`] and [`NotificationQueue::new`]
/// instead when the application has one.
pub fn session_queue(config: Config) -> NotificationQueue {
	NotificationQueue::new(
		Box::new(SessionStorage::new()),
		config,
		Box::new(HtmlRenderer::new()),
	)
}

/// Re-export of the commonly used surface.
pub mod prelude {
	pub use glasstoast_core::{
		Config, Level, MemoryStorage, Notification, NotificationQueue, Position, Renderer,
		SessionBackend, SessionStorage, Storage,
	};
	pub use glasstoast_render::HtmlRenderer;
}
