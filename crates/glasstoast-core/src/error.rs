//! Error types for the notification core.

use thiserror::Error;

/// Errors produced at the string-parsing boundaries of the crate.
///
/// Queue, storage, and config operations never fail; parsing a level or
/// position tag out of serialized data is the only fallible surface.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
	/// A level tag outside the closed set was encountered.
	#[error("unknown notification level: {0}")]
	UnknownLevel(String),

	/// A position tag outside the closed set was encountered.
	#[error("unknown notification position: {0}")]
	UnknownPosition(String),
}
