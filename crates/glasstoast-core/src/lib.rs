//! Core queue, configuration, and storage for glasstoast notifications.
//!
//! A caller enqueues leveled notifications through [`NotificationQueue`],
//! each record snapshotting its effective options ([`Config`] layering:
//! built-in defaults, then instance config, then per-call overrides). A
//! [`Storage`] backend keeps records between the accumulation phase and
//! the render phase, and [`queue::Renderer`] is the outbound seam a markup
//! producer implements. Rendering drains the queue: delivery is at most
//! once.
//!
//! Everything here is synchronous and request-scoped. No operation fails
//! under normal inputs; lenient defaults substitute for invalid option
//! values, and unknown ids surface as boolean returns.

pub mod config;
pub mod error;
pub mod levels;
pub mod notification;
pub mod position;
pub mod queue;
pub mod session;
pub mod storage;

pub use config::Config;
pub use error::Error;
pub use levels::Level;
pub use notification::Notification;
pub use position::Position;
pub use queue::{NotificationQueue, Renderer};
pub use session::{InProcessSessionStore, SessionBackend};
pub use storage::{MemoryStorage, SessionStorage, Storage, SESSION_KEY};
