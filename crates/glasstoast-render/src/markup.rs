//! Container and per-notification markup.

use chrono::{DateTime, Local};
use glasstoast_core::{Config, Notification};

use crate::escape::escape_html;
use crate::presentation;

pub(crate) fn container(notifications: &[Notification], config: &Config) -> String {
	let prefix = config.css_prefix();
	let container_id = config.container_id();
	let position = config.position().as_str();
	let z_index = config.z_index();
	let direction = if config.rtl() { "rtl" } else { "ltr" };
	let items: String = notifications
		.iter()
		.map(|notification| render_notification(notification, config))
		.collect();
	format!(
		"<div id=\"{container_id}\" class=\"{prefix}-container {prefix}-position-{position}\" \
		 style=\"z-index: {z_index}; direction: {direction};\">{items}</div>"
	)
}

/// One notification card. Title and body are the only user-supplied
/// strings in the whole output and both pass through [`escape_html`].
fn render_notification(notification: &Notification, config: &Config) -> String {
	let prefix = config.css_prefix();
	let id = notification.id();
	let level = notification.level().as_str();
	let icon = presentation::icon(notification.level());
	let title = escape_html(notification.title());

	let body = if notification.body().is_empty() {
		String::new()
	} else {
		format!(
			"<div class=\"{prefix}-message\">{}</div>",
			escape_html(notification.body())
		)
	};

	// per-record options win over the instance config, as snapshotted at
	// enqueue time
	let show_time = notification
		.bool_option("show_time")
		.unwrap_or_else(|| config.show_time());
	let time = if show_time {
		let time_format = notification
			.str_option("time_format")
			.unwrap_or_else(|| config.time_format());
		format!(
			"<div class=\"{prefix}-time\">{}</div>",
			clock_display(notification.created_at(), time_format)
		)
	} else {
		String::new()
	};

	let show_close = notification
		.bool_option("show_close_button")
		.unwrap_or_else(|| config.show_close_button());
	let close = if show_close {
		close_button(config)
	} else {
		String::new()
	};

	format!(
		"<div id=\"{id}\" class=\"{prefix}-notification {prefix}-{level}\" data-level=\"{level}\" \
		 data-id=\"{id}\"><div class=\"{prefix}-icon\">{icon}</div><div class=\"{prefix}-content\">\
		 <div class=\"{prefix}-title\">{title}</div>{body}</div>{time}{close}</div>"
	)
}

fn close_button(config: &Config) -> String {
	let prefix = config.css_prefix();
	let style = config.close_button_style();
	format!(
		"<button class=\"{prefix}-close {prefix}-close-{style}\" type=\"button\" \
		 aria-label=\"Close notification\">×</button>"
	)
}

/// Wall-clock display of the record's creation time in the server's local
/// zone, `"12"` or `"24"` hour form.
fn clock_display(created_at: i64, time_format: &str) -> String {
	let Some(utc) = DateTime::from_timestamp(created_at, 0) else {
		return String::new();
	};
	let local = utc.with_timezone(&Local);
	if time_format == "24" {
		local.format("%H:%M").to_string()
	} else {
		local.format("%-I:%M %p").to_string()
	}
}
