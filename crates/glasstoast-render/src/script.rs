//! Inline behavior script generation.
//!
//! The emitted timers and animations are purely cosmetic: by the time the
//! browser runs this, the rendered records are already gone from storage.

use glasstoast_core::{Config, Level};
use serde_json::json;

use crate::presentation;

const BEHAVIOR_JS: &str = r#"
(function() {
	'use strict';

	const config = __CONFIG__;

	class ToastController {
		constructor() {
			this.container = document.getElementById(config.containerId);
			this.timers = new Map();
			if (!this.container) {
				return;
			}
			this.listen();
			this.enter();
			this.capOverflow();
		}

		listen() {
			this.container.addEventListener('click', (event) => {
				const closer = event.target.closest('.' + config.prefix + '-close');
				if (closer) {
					const card = closer.closest('.' + config.prefix + '-notification');
					if (card) {
						this.hide(card);
					}
				}
			});

			if (config.pauseOnHover) {
				this.container.addEventListener('mouseenter', (event) => {
					const card = event.target.closest('.' + config.prefix + '-notification');
					if (card && this.timers.has(card.id)) {
						clearTimeout(this.timers.get(card.id));
					}
				}, true);

				this.container.addEventListener('mouseleave', (event) => {
					const card = event.target.closest('.' + config.prefix + '-notification');
					if (card && config.autoDismiss) {
						this.scheduleHide(card);
					}
				}, true);
			}
		}

		enter() {
			const cards = this.container.querySelectorAll('.' + config.prefix + '-notification');
			cards.forEach((card, index) => {
				setTimeout(() => this.show(card), index * 100);
			});
		}

		show(card) {
			requestAnimationFrame(() => {
				card.classList.add(config.prefix + '-show');
				if (config.sound) {
					this.chirp(card.dataset.level);
				}
				if (config.autoDismiss && config.duration > 0) {
					this.scheduleHide(card);
				}
			});
		}

		hide(card) {
			if (this.timers.has(card.id)) {
				clearTimeout(this.timers.get(card.id));
				this.timers.delete(card.id);
			}
			card.classList.add(config.prefix + '-hide');
			setTimeout(() => {
				if (card.parentNode) {
					card.parentNode.removeChild(card);
				}
			}, config.animationDuration);
		}

		scheduleHide(card) {
			const timer = setTimeout(() => this.hide(card), config.duration);
			this.timers.set(card.id, timer);
		}

		capOverflow() {
			const cards = this.container.querySelectorAll('.' + config.prefix + '-notification');
			for (let i = 0; i < cards.length - config.maxNotifications; i++) {
				this.hide(cards[i]);
			}
		}

		chirp(level) {
			try {
				const AudioContext = window.AudioContext || window.webkitAudioContext;
				if (!AudioContext) {
					return;
				}
				const context = new AudioContext();
				const oscillator = context.createOscillator();
				const gain = context.createGain();
				oscillator.connect(gain);
				gain.connect(context.destination);
				oscillator.frequency.setValueAtTime(
					config.frequencies[level] || config.frequencies.info,
					context.currentTime
				);
				oscillator.type = 'sine';
				gain.gain.setValueAtTime(0.1, context.currentTime);
				gain.gain.exponentialRampToValueAtTime(0.01, context.currentTime + 0.1);
				oscillator.start(context.currentTime);
				oscillator.stop(context.currentTime + 0.1);
			} catch (error) {
				// no sound is better than a broken page
			}
		}
	}

	if (document.readyState === 'loading') {
		document.addEventListener('DOMContentLoaded', () => new ToastController());
	} else {
		new ToastController();
	}
})();
"#;

pub(crate) fn behavior(config: &Config) -> String {
	let settings = json!({
		"prefix": config.css_prefix(),
		"containerId": config.container_id(),
		"duration": config.duration_ms(),
		"animationDuration": config.animation_duration_ms(),
		"autoDismiss": config.auto_dismiss(),
		"pauseOnHover": config.pause_on_hover(),
		"sound": config.sound(),
		"maxNotifications": config.max_notifications(),
		"frequencies": {
			"success": presentation::sound_frequency(Level::Success),
			"error": presentation::sound_frequency(Level::Error),
			"warning": presentation::sound_frequency(Level::Warning),
			"info": presentation::sound_frequency(Level::Info),
		},
	});
	format!(
		"<script id=\"{prefix}-script\">{body}</script>",
		prefix = config.css_prefix(),
		body = BEHAVIOR_JS.replace("__CONFIG__", &settings.to_string()),
	)
}
