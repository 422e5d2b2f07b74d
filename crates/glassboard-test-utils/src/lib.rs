//! Test utilities for Glassboard.
//!
//! - [`ScriptedGestureSource`] - a [`GestureSource`](glassboard_core::input::GestureSource)
//!   that replays a prepared gesture one frame at a time
//! - [`RecordingSink`] - records events delivered through callbacks
//!
//! # Example
//!
//! ```rust
//! use glassboard_core::input::{GesturePhase, GestureSource};
//! use glassboard_test_utils::ScriptedGestureSource;
//!
//! let mut source = ScriptedGestureSource::new().press().drag_to(30.0, 0.0, 3).release();
//! assert_eq!(source.frame_count(), 5);
//!
//! assert!(source.advance());
//! assert_eq!(source.poll_sample().unwrap().phase, GesturePhase::Start);
//! assert!(source.poll_sample().is_none());
//! ```

pub mod recorder;
pub mod scripted;

pub use recorder::RecordingSink;
pub use scripted::ScriptedGestureSource;
