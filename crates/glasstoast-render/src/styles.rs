//! Inline stylesheet generation.
//!
//! The sheet is a template instantiated per render: sizing, blur,
//! radius, and theme come from the effective config, and only the active
//! anchor's placement block is emitted since a render produces exactly
//! one container.

use glasstoast_core::{Config, Level, Position};

use crate::presentation;

const STYLESHEET: &str = r#"
.__P__-container {
	position: fixed;
	pointer-events: none;
	font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, Oxygen, Ubuntu, Cantarell, sans-serif;
	font-size: 14px;
	line-height: 1.4;
__PLACEMENT__
}

.__P__-notification {
	position: relative;
	display: flex;
	align-items: flex-start;
	gap: 12px;
	min-width: __MIN_WIDTH__px;
	max-width: __MAX_WIDTH__px;
	padding: 16px 20px;
	margin-bottom: 12px;
	border-radius: __RADIUS__px;
	backdrop-filter: blur(__BLUR__px);
	-webkit-backdrop-filter: blur(__BLUR__px);
	box-shadow:
		0 8px 32px rgba(0, 0, 0, 0.12),
		0 2px 8px rgba(0, 0, 0, 0.08),
		inset 0 1px 0 rgba(255, 255, 255, 0.1);
	pointer-events: auto;
	cursor: default;
	transition: all __ANIM__ms cubic-bezier(0.4, 0, 0.2, 1);
	transform: __SLIDE__ scale(0.95);
	opacity: 0;
	overflow: hidden;
__SURFACE__
}

.__P__-notification.__P__-show {
	transform: translate(0, 0) scale(1);
	opacity: 1;
}

.__P__-notification.__P__-hide {
	transform: __SLIDE__ scale(0.95);
	opacity: 0;
	margin-bottom: 0;
	max-height: 0;
	padding: 0;
}

.__P__-notification:hover {
	transform: translateY(-2px) scale(1.02);
	box-shadow:
		0 12px 40px rgba(0, 0, 0, 0.15),
		0 4px 12px rgba(0, 0, 0, 0.1),
		inset 0 1px 0 rgba(255, 255, 255, 0.15);
}

.__P__-icon {
	display: flex;
	align-items: center;
	justify-content: center;
	width: 20px;
	height: 20px;
	border-radius: 50%;
	font-size: 12px;
	font-weight: 600;
	flex-shrink: 0;
	margin-top: 2px;
	color: white;
}

.__P__-content {
	flex: 1;
	min-width: 0;
}

.__P__-title {
	margin: 0 0 4px 0;
	font-size: 14px;
	font-weight: 600;
	line-height: 1.2;
	__TEXT__
}

.__P__-message {
	margin: 0;
	font-size: 13px;
	opacity: 0.8;
	line-height: 1.3;
	__TEXT__
}

.__P__-time {
	position: absolute;
	top: 12px;
	right: 24px;
	font-size: 11px;
	opacity: 0.6;
	font-weight: 500;
	font-variant-numeric: tabular-nums;
	__TEXT__
}

.__P__-close {
	position: absolute;
	top: 12px;
	right: 12px;
	border: none;
	color: inherit;
	font-size: 12px;
	cursor: pointer;
	opacity: 0.7;
	transition: all 0.2s ease;
	width: 20px;
	height: 20px;
	display: flex;
	align-items: center;
	justify-content: center;
	border-radius: 50%;
	background: rgba(128, 128, 128, 0.2);
	backdrop-filter: blur(10px);
	-webkit-backdrop-filter: blur(10px);
}

.__P__-close:hover {
	opacity: 1;
	background: rgba(128, 128, 128, 0.3);
	transform: scale(1.1);
}

.__P__-close:active {
	transform: scale(0.95);
}

__LEVEL_RULES__
@media (max-width: 640px) {
	.__P__-container {
		left: 10px;
		right: 10px;
		transform: none;
	}

	.__P__-notification {
		min-width: auto;
		max-width: none;
		margin-bottom: 8px;
	}
}

@media (prefers-reduced-motion: reduce) {
	.__P__-notification {
		transition: none;
	}
}
__THEME_MEDIA__"#;

pub(crate) fn stylesheet(config: &Config) -> String {
	let prefix = config.css_prefix();
	let theme = ThemeStyles::for_config(config);
	let sheet = STYLESHEET
		.replace("__PLACEMENT__", &placement(config.position()))
		.replace("__MIN_WIDTH__", &config.min_width().to_string())
		.replace("__MAX_WIDTH__", &config.max_width().to_string())
		.replace("__RADIUS__", &config.border_radius().to_string())
		.replace("__BLUR__", &config.background_blur().to_string())
		.replace("__ANIM__", &config.animation_duration_ms().to_string())
		.replace("__SLIDE__", slide_transform(config.position()))
		.replace("__SURFACE__", &theme.surface)
		.replace("__TEXT__", theme.text)
		.replace("__LEVEL_RULES__", &level_rules(prefix))
		.replace("__THEME_MEDIA__", &theme.media_query)
		.replace("__P__", prefix);
	format!("<style id=\"{prefix}-styles\">{sheet}</style>")
}

/// Placement block for the active anchor only.
fn placement(position: Position) -> String {
	let vertical = if position.is_top() {
		"	top: 20px;"
	} else {
		"	bottom: 20px;"
	};
	let horizontal = if position.is_left() {
		"	left: 20px;"
	} else if position.is_right() {
		"	right: 20px;"
	} else {
		"	left: 50%;\n	transform: translateX(-50%);"
	};
	format!("{vertical}\n{horizontal}")
}

/// Off-screen transform cards slide in from, chosen by anchor side.
fn slide_transform(position: Position) -> &'static str {
	if position.is_left() {
		"translateX(-100%)"
	} else if position.is_center() {
		"translateY(-100%)"
	} else {
		"translateX(100%)"
	}
}

fn level_rules(prefix: &str) -> String {
	[Level::Success, Level::Error, Level::Warning, Level::Info]
		.into_iter()
		.map(|level| {
			format!(
				".{prefix}-{tag} .{prefix}-icon {{\n\tbackground: {color};\n}}\n\n",
				tag = level.as_str(),
				color = presentation::color(level),
			)
		})
		.collect()
}

struct ThemeStyles {
	surface: String,
	text: &'static str,
	media_query: String,
}

impl ThemeStyles {
	fn for_config(config: &Config) -> Self {
		let opacity = config.background_opacity();
		match config.theme() {
			"light" => Self::light(opacity),
			"dark" => Self::dark(opacity),
			// auto renders light and lets the user agent flip it
			_ => {
				let mut styles = Self::light(opacity);
				styles.media_query = format!(
					"\n@media (prefers-color-scheme: dark) {{\n\
					 \t.__P__-notification {{\n\
					 \t\tbackground: rgba(30, 30, 30, {opacity});\n\
					 \t\tborder-color: rgba(255, 255, 255, 0.1);\n\
					 \t}}\n\n\
					 \t.__P__-title,\n\
					 \t.__P__-message,\n\
					 \t.__P__-time,\n\
					 \t.__P__-close {{\n\
					 \t\tcolor: rgba(255, 255, 255, 0.9);\n\
					 \t}}\n\
					 }}\n"
				);
				styles
			}
		}
	}

	fn light(opacity: f64) -> Self {
		Self {
			surface: format!(
				"	background: rgba(255, 255, 255, {opacity});\n\tborder: 1px solid rgba(0, 0, 0, 0.1);"
			),
			text: "color: rgba(0, 0, 0, 0.9);",
			media_query: String::new(),
		}
	}

	fn dark(opacity: f64) -> Self {
		Self {
			surface: format!(
				"	background: rgba(30, 30, 30, {opacity});\n\tborder: 1px solid rgba(255, 255, 255, 0.1);"
			),
			text: "color: rgba(255, 255, 255, 0.9);",
			media_query: String::new(),
		}
	}
}
