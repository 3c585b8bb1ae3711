//! Notification severity levels.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Severity of a queued notification.
///
/// The set is closed: the enqueue API takes the enum itself, so a level
/// outside it is unrepresentable rather than a runtime condition. Icon and
/// color lookups are presentation data and live in the render crate, not
/// here.
///
/// # Examples
///
/// ```
/// use glasstoast_core::Level;
///
/// assert_eq!(Level::Success.as_str(), "success");
/// assert_eq!("warning".parse::<Level>(), Ok(Level::Warning));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
	Success,
	Error,
	Warning,
	Info,
}

impl Level {
	/// String tag used in serialized records and CSS class names.
	pub fn as_str(&self) -> &'static str {
		match self {
			Level::Success => "success",
			Level::Error => "error",
			Level::Warning => "warning",
			Level::Info => "info",
		}
	}
}

impl fmt::Display for Level {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for Level {
	type Err = Error;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"success" => Ok(Level::Success),
			"error" => Ok(Level::Error),
			"warning" => Ok(Level::Warning),
			"info" => Ok(Level::Info),
			other => Err(Error::UnknownLevel(other.to_string())),
		}
	}
}

#[cfg(test)]
mod tests {
	use rstest::rstest;

	use super::*;

	#[rstest]
	#[case(Level::Success, "success")]
	#[case(Level::Error, "error")]
	#[case(Level::Warning, "warning")]
	#[case(Level::Info, "info")]
	fn tag_round_trip(#[case] level: Level, #[case] tag: &str) {
		assert_eq!(level.as_str(), tag);
		assert_eq!(tag.parse::<Level>(), Ok(level));
	}

	#[rstest]
	fn serde_uses_lowercase_tags() {
		let json = serde_json::to_string(&Level::Warning).unwrap();
		assert_eq!(json, "\"warning\"");
		let level: Level = serde_json::from_str("\"error\"").unwrap();
		assert_eq!(level, Level::Error);
	}

	#[rstest]
	fn unknown_tag_is_rejected() {
		let err = "fatal".parse::<Level>().unwrap_err();
		assert_eq!(err, Error::UnknownLevel("fatal".to_string()));
	}
}
