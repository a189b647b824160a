//! Host-facing capabilities for Munadi
//!
//! The hosting forum owns topics, replies, users and the creation hook
//! bus. This crate defines those capabilities as traits the host
//! implements over its own stores, plus an in-memory reference
//! implementation backing the test suites and the CLI.

pub mod hooks;
pub mod memory;
pub mod traits;

pub use hooks::{CreationHook, HookBus};
pub use memory::InMemoryForum;
pub use traits::ForumRepository;
