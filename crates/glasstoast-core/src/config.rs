//! Layered option resolution.
//!
//! Configuration arrives in one of two shapes: a flat map of option keys
//! (direct programmatic use), or a framework-style document whose options
//! sit under a nested `defaults` map using external snake_case names. Both
//! collapse into one flat effective map layered over the built-in
//! defaults. Per-call overrides are applied key-by-key on top when a
//! record is created.

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::{json, Map, Value};

use crate::position::Position;

/// External config keys mirrored onto their internal counterparts when the
/// structured `defaults` form is resolved. The external value wins if both
/// names are independently supplied; both names stay present afterwards.
const KEY_ALIASES: &[(&str, &str)] = &[
	("max_notifications", "max_notifications"),
	("animation_duration", "animation_duration"),
	("closable", "show_close_button"),
	("pause_on_hover", "pause_on_hover"),
	("blur_strength", "background_blur"),
	("border_radius", "border_radius"),
	("backdrop_opacity", "background_opacity"),
];

/// Flat effective option map for a queue instance.
///
/// Typed getters tolerate a missing or mistyped entry by substituting the
/// built-in default; nothing in here raises. Unrecognized keys are kept
/// verbatim so they travel with each record for renderer-level
/// extensions.
///
/// # Examples
///
/// ```
/// use glasstoast_core::{Config, Position};
/// use serde_json::json;
///
/// let config = Config::from_value(json!({
///     "defaults": { "position": "bottom-left", "closable": false }
/// }));
/// assert_eq!(config.position(), Position::BottomLeft);
/// assert!(!config.show_close_button());
/// assert_eq!(config.duration_ms(), 5000);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Config {
	options: BTreeMap<String, Value>,
}

impl Config {
	/// Pure built-in defaults.
	pub fn new() -> Self {
		Self {
			options: default_options(),
		}
	}

	/// Resolve a raw configuration value into an effective config.
	///
	/// If `raw` is an object containing a `defaults` key whose value is
	/// itself an object, that nested map is the source and key aliasing
	/// applies; otherwise an object is taken as the already-flat form.
	/// Anything else behaves as an empty config. A string `position` is
	/// validated in both forms, unknown values coercing to `top-right`.
	pub fn from_value(raw: Value) -> Self {
		let resolved = match raw {
			Value::Object(map) => resolve_map(map),
			_ => BTreeMap::new(),
		};
		let mut options = default_options();
		options.extend(resolved);
		Self { options }
	}

	/// The full effective option map.
	pub fn options(&self) -> &BTreeMap<String, Value> {
		&self.options
	}

	pub fn get(&self, key: &str) -> Option<&Value> {
		self.options.get(key)
	}

	/// Layer per-call overrides over this config, later wins key-by-key.
	/// The result is the option snapshot a new record carries.
	pub fn merged_with(&self, overrides: &BTreeMap<String, Value>) -> BTreeMap<String, Value> {
		let mut merged = self.options.clone();
		for (key, value) in overrides {
			merged.insert(key.clone(), value.clone());
		}
		merged
	}

	/// Validated layout anchor; this is the value the queue and renderer
	/// consume, never the raw string.
	pub fn position(&self) -> Position {
		self.str_key("position")
			.map(Position::from_config_str)
			.unwrap_or_default()
	}

	/// Auto-dismiss delay in milliseconds; `0` disables auto-dismiss.
	pub fn duration_ms(&self) -> u64 {
		self.u64_key("duration", 5000)
	}

	pub fn animation_duration_ms(&self) -> u64 {
		self.u64_key("animation_duration", 300)
	}

	/// Cap on simultaneously displayed notifications (a renderer concern;
	/// storage never enforces it).
	pub fn max_notifications(&self) -> u64 {
		self.u64_key("max_notifications", 5)
	}

	/// `"auto"`, `"light"`, or `"dark"`.
	pub fn theme(&self) -> &str {
		self.str_key("theme").unwrap_or("auto")
	}

	pub fn sound(&self) -> bool {
		self.bool_key("sound", true)
	}

	pub fn show_close_button(&self) -> bool {
		self.bool_key("show_close_button", true)
	}

	pub fn auto_dismiss(&self) -> bool {
		self.bool_key("auto_dismiss", true)
	}

	pub fn pause_on_hover(&self) -> bool {
		self.bool_key("pause_on_hover", true)
	}

	pub fn rtl(&self) -> bool {
		self.bool_key("rtl", false)
	}

	pub fn show_time(&self) -> bool {
		self.bool_key("show_time", true)
	}

	/// `"12"` or `"24"`.
	pub fn time_format(&self) -> &str {
		self.str_key("time_format").unwrap_or("12")
	}

	pub fn background_opacity(&self) -> f64 {
		self.f64_key("background_opacity", 0.85)
	}

	/// Backdrop blur strength in pixels.
	pub fn background_blur(&self) -> u64 {
		self.u64_key("background_blur", 25)
	}

	pub fn border_radius(&self) -> u64 {
		self.u64_key("border_radius", 16)
	}

	pub fn min_width(&self) -> u64 {
		self.u64_key("min_width", 320)
	}

	pub fn max_width(&self) -> u64 {
		self.u64_key("max_width", 480)
	}

	pub fn z_index(&self) -> u64 {
		self.u64_key("z_index", 999_999_999)
	}

	pub fn container_id(&self) -> &str {
		self.str_key("container_id").unwrap_or("glasstoast-container")
	}

	pub fn css_prefix(&self) -> &str {
		self.str_key("css_prefix").unwrap_or("glasstoast")
	}

	/// `"circle"` or `"minimal"`.
	pub fn close_button_style(&self) -> &str {
		self.str_key("close_button_style").unwrap_or("circle")
	}

	fn str_key(&self, key: &str) -> Option<&str> {
		self.options.get(key).and_then(Value::as_str)
	}

	fn bool_key(&self, key: &str, default: bool) -> bool {
		self.options
			.get(key)
			.and_then(Value::as_bool)
			.unwrap_or(default)
	}

	fn u64_key(&self, key: &str, default: u64) -> u64 {
		self.options
			.get(key)
			.and_then(Value::as_u64)
			.unwrap_or(default)
	}

	fn f64_key(&self, key: &str, default: f64) -> f64 {
		self.options
			.get(key)
			.and_then(Value::as_f64)
			.unwrap_or(default)
	}
}

impl Default for Config {
	fn default() -> Self {
		Self::new()
	}
}

fn resolve_map(mut map: Map<String, Value>) -> BTreeMap<String, Value> {
	let mut flat: BTreeMap<String, Value> = match map.remove("defaults") {
		Some(Value::Object(defaults)) => {
			let mut flat: BTreeMap<String, Value> = defaults.into_iter().collect();
			for (external, internal) in KEY_ALIASES {
				if let Some(value) = flat.get(*external).cloned() {
					flat.insert((*internal).to_string(), value);
				}
			}
			flat
		}
		other => {
			// A non-map `defaults` value is not the structured form; it
			// passes through like any unknown key.
			if let Some(value) = other {
				map.insert("defaults".to_string(), value);
			}
			map.into_iter().collect()
		}
	};

	if let Some(position) = flat.get("position").and_then(Value::as_str) {
		let canonical = Position::from_config_str(position);
		flat.insert(
			"position".to_string(),
			Value::String(canonical.as_str().to_string()),
		);
	}

	flat
}

fn default_options() -> BTreeMap<String, Value> {
	let defaults = [
		("position", json!(Position::TopRight.as_str())),
		("duration", json!(5000)),
		("animation_duration", json!(300)),
		("max_notifications", json!(5)),
		("sound", json!(true)),
		("show_close_button", json!(true)),
		("auto_dismiss", json!(true)),
		("pause_on_hover", json!(true)),
		("rtl", json!(false)),
		("theme", json!("auto")),
		("show_time", json!(true)),
		("time_format", json!("12")),
		("background_opacity", json!(0.85)),
		("background_blur", json!(25)),
		("border_radius", json!(16)),
		("min_width", json!(320)),
		("max_width", json!(480)),
		("z_index", json!(999_999_999u64)),
		("container_id", json!("glasstoast-container")),
		("css_prefix", json!("glasstoast")),
		("close_button_style", json!("circle")),
	];
	defaults
		.into_iter()
		.map(|(key, value)| (key.to_string(), value))
		.collect()
}
