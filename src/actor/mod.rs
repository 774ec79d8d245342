//! Actor System for Live Reload
//!
//! Message-passing concurrency for watch mode:
//!
//! ```text
//! Watcher (notify thread) --Changed--> Coordinator --spawn_blocking--> Loader
//!                                          ^                             |
//!                                          +----------LoadDone-----------+
//! ```
//!
//! # Module Structure
//!
//! - `messages` - Message types for the coordinator inbox
//! - `fs` - Single-file watcher
//! - `coordinator` - Owns the display state and serializes reloads

pub mod coordinator;
pub mod fs;
pub mod messages;

pub use coordinator::Coordinator;
