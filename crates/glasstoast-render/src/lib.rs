//! HTML rendering for glasstoast notifications.
//!
//! [`HtmlRenderer`] consumes the records and effective config handed over
//! by the queue and emits one container of notification cards followed by
//! an inline stylesheet and behavior script. It holds no state; the queue
//! owns the lifecycle.

mod escape;
mod markup;
pub mod presentation;
mod script;
mod styles;

pub use escape::escape_html;

use glasstoast_core::{Config, Notification, Renderer};

/// Renders notifications as a container div plus inline styles and
/// behavior script, in the liquid-glass look.
///
/// # Examples
///
/// ```
/// use glasstoast_core::{Config, MemoryStorage, NotificationQueue};
/// use glasstoast_render::HtmlRenderer;
///
/// let queue = NotificationQueue::new(
///     Box::new(MemoryStorage::new()),
///     Config::new(),
///     Box::new(HtmlRenderer::new()),
/// );
/// queue.success("Saved", "Your changes were saved", Default::default());
///
/// let markup = queue.render();
/// assert!(markup.contains("Saved"));
/// assert!(markup.contains("<style"));
/// assert!(markup.contains("<script"));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlRenderer;

impl HtmlRenderer {
	pub fn new() -> Self {
		Self
	}
}

impl Renderer for HtmlRenderer {
	fn render(&self, notifications: &[Notification], config: &Config) -> String {
		let mut out = markup::container(notifications, config);
		out.push_str(&styles::stylesheet(config));
		out.push_str(&script::behavior(config));
		out
	}
}
