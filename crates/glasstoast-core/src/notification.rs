//! The queued notification record.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::levels::Level;

/// One queued notification awaiting render.
///
/// `id`, `level`, `title`, and `created_at` are fixed at construction;
/// `body` and individual option entries may still be adjusted before the
/// record is committed to storage.
///
/// The serialized form is `{id, level, title, body, options, created_at}`
/// with `level` as its lowercase tag and `created_at` in Unix seconds.
/// Options use a `BTreeMap`, so re-serializing a deserialized record is
/// byte-for-byte identical to the first serialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
	id: String,
	level: Level,
	title: String,
	#[serde(default)]
	body: String,
	#[serde(default)]
	options: BTreeMap<String, Value>,
	created_at: i64,
}

impl Notification {
	/// Create a record with a fresh id and the current timestamp.
	///
	/// `options` is the effective configuration snapshot for this record;
	/// the queue builds it by layering per-call overrides on the instance
	/// config.
	pub fn new(
		level: Level,
		title: impl Into<String>,
		body: impl Into<String>,
		options: BTreeMap<String, Value>,
	) -> Self {
		Self {
			id: generate_id(),
			level,
			title: title.into(),
			body: body.into(),
			options,
			created_at: chrono::Utc::now().timestamp(),
		}
	}

	/// Opaque unique token; storage key and DOM anchor id.
	pub fn id(&self) -> &str {
		&self.id
	}

	pub fn level(&self) -> Level {
		self.level
	}

	pub fn title(&self) -> &str {
		&self.title
	}

	pub fn body(&self) -> &str {
		&self.body
	}

	pub fn set_body(&mut self, body: impl Into<String>) -> &mut Self {
		self.body = body.into();
		self
	}

	/// The effective option snapshot carried by this record.
	pub fn options(&self) -> &BTreeMap<String, Value> {
		&self.options
	}

	pub fn option(&self, key: &str) -> Option<&Value> {
		self.options.get(key)
	}

	/// Boolean option, `None` when absent or not a boolean.
	pub fn bool_option(&self, key: &str) -> Option<bool> {
		self.options.get(key).and_then(Value::as_bool)
	}

	/// String option, `None` when absent or not a string.
	pub fn str_option(&self, key: &str) -> Option<&str> {
		self.options.get(key).and_then(Value::as_str)
	}

	pub fn set_option(&mut self, key: impl Into<String>, value: Value) -> &mut Self {
		self.options.insert(key.into(), value);
		self
	}

	pub fn has_option(&self, key: &str) -> bool {
		self.options.contains_key(key)
	}

	/// Creation time in Unix seconds.
	pub fn created_at(&self) -> i64 {
		self.created_at
	}
}

fn generate_id() -> String {
	format!("glasstoast-{}", Uuid::new_v4().simple())
}
