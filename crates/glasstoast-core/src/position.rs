//! Screen anchor positions for the notification container.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Where the notification container is anchored on screen.
///
/// Configuration supplies positions as kebab-case strings; anything outside
/// the closed set silently falls back to [`Position::TopRight`] via
/// [`Position::from_config_str`]. That leniency is policy, not an error
/// path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Position {
	TopRight,
	TopLeft,
	TopCenter,
	BottomRight,
	BottomLeft,
	BottomCenter,
}

impl Position {
	/// Canonical kebab-case tag, as used in config maps and CSS classes.
	pub fn as_str(&self) -> &'static str {
		match self {
			Position::TopRight => "top-right",
			Position::TopLeft => "top-left",
			Position::TopCenter => "top-center",
			Position::BottomRight => "bottom-right",
			Position::BottomLeft => "bottom-left",
			Position::BottomCenter => "bottom-center",
		}
	}

	/// Parse a configuration string, coercing unknown values to the
	/// default anchor instead of failing.
	///
	/// # Examples
	///
	/// ```
	/// use glasstoast_core::Position;
	///
	/// assert_eq!(Position::from_config_str("bottom-left"), Position::BottomLeft);
	/// assert_eq!(Position::from_config_str("northwest"), Position::TopRight);
	/// ```
	pub fn from_config_str(s: &str) -> Self {
		s.parse().unwrap_or_default()
	}

	pub fn is_top(&self) -> bool {
		matches!(
			self,
			Position::TopRight | Position::TopLeft | Position::TopCenter
		)
	}

	pub fn is_bottom(&self) -> bool {
		!self.is_top()
	}

	pub fn is_left(&self) -> bool {
		matches!(self, Position::TopLeft | Position::BottomLeft)
	}

	pub fn is_right(&self) -> bool {
		matches!(self, Position::TopRight | Position::BottomRight)
	}

	pub fn is_center(&self) -> bool {
		matches!(self, Position::TopCenter | Position::BottomCenter)
	}
}

impl Default for Position {
	fn default() -> Self {
		Position::TopRight
	}
}

impl fmt::Display for Position {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for Position {
	type Err = Error;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"top-right" => Ok(Position::TopRight),
			"top-left" => Ok(Position::TopLeft),
			"top-center" => Ok(Position::TopCenter),
			"bottom-right" => Ok(Position::BottomRight),
			"bottom-left" => Ok(Position::BottomLeft),
			"bottom-center" => Ok(Position::BottomCenter),
			other => Err(Error::UnknownPosition(other.to_string())),
		}
	}
}

#[cfg(test)]
mod tests {
	use rstest::rstest;

	use super::*;

	#[rstest]
	#[case(Position::TopRight, "top-right")]
	#[case(Position::TopLeft, "top-left")]
	#[case(Position::TopCenter, "top-center")]
	#[case(Position::BottomRight, "bottom-right")]
	#[case(Position::BottomLeft, "bottom-left")]
	#[case(Position::BottomCenter, "bottom-center")]
	fn tag_round_trip(#[case] position: Position, #[case] tag: &str) {
		assert_eq!(position.as_str(), tag);
		assert_eq!(tag.parse::<Position>(), Ok(position));
		assert_eq!(
			serde_json::to_string(&position).unwrap(),
			format!("\"{tag}\"")
		);
	}

	#[rstest]
	#[case(Position::TopRight, true, false, false, true, false)]
	#[case(Position::TopLeft, true, false, true, false, false)]
	#[case(Position::TopCenter, true, false, false, false, true)]
	#[case(Position::BottomRight, false, true, false, true, false)]
	#[case(Position::BottomLeft, false, true, true, false, false)]
	#[case(Position::BottomCenter, false, true, false, false, true)]
	fn predicates(
		#[case] position: Position,
		#[case] top: bool,
		#[case] bottom: bool,
		#[case] left: bool,
		#[case] right: bool,
		#[case] center: bool,
	) {
		assert_eq!(position.is_top(), top);
		assert_eq!(position.is_bottom(), bottom);
		assert_eq!(position.is_left(), left);
		assert_eq!(position.is_right(), right);
		assert_eq!(position.is_center(), center);
	}

	#[rstest]
	#[case("northwest")]
	#[case("TOP-RIGHT")]
	#[case("")]
	fn unknown_config_string_falls_back_to_top_right(#[case] raw: &str) {
		assert_eq!(Position::from_config_str(raw), Position::TopRight);
	}
}
