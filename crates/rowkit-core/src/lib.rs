//! Core systems for Rowkit.
//!
//! This crate provides the foundational components of the Rowkit list-view
//! library:
//!
//! - **Signal/Slot System**: Type-safe change notification
//! - **Color**: RGBA color for cell label styling
//! - **Logging**: `tracing` targets and helpers for per-subsystem filtering
//!
//! # Signal/Slot Example
//!
//! ```
//! use rowkit_core::Signal;
//!
//! // Create a signal that notifies when a value changes
//! let value_changed = Signal::<i32>::new();
//!
//! // Connect a slot to handle the signal
//! let conn_id = value_changed.connect(|value| {
//!     println!("Value changed to: {}", value);
//! });
//!
//! // Emit the signal
//! value_changed.emit(42);
//!
//! // Disconnect when done
//! value_changed.disconnect(conn_id);
//! ```

mod color;
pub mod logging;
pub mod signal;

pub use color::Color;
pub use logging::PerfSpan;
pub use signal::{ConnectionGuard, ConnectionId, Signal};
