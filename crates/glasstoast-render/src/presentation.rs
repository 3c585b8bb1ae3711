//! Level presentation tables.
//!
//! Display data only; queue identity logic never reads these.

use glasstoast_core::Level;

/// Glyph shown in the notification's icon badge.
pub fn icon(level: Level) -> &'static str {
	match level {
		Level::Success => "✓",
		Level::Error => "✕",
		Level::Warning => "⚠",
		Level::Info => "ℹ",
	}
}

/// Accent color behind the icon badge.
pub fn color(level: Level) -> &'static str {
	match level {
		Level::Success => "#22c55e",
		Level::Error => "#ef4444",
		Level::Warning => "#f59e0b",
		Level::Info => "#3b82f6",
	}
}

/// Oscillator frequency for the audio chirp, in hertz.
pub fn sound_frequency(level: Level) -> u32 {
	match level {
		Level::Success => 800,
		Level::Error => 400,
		Level::Warning => 600,
		Level::Info => 700,
	}
}
