//! Core type definitions for Estate Chat.
//!
//! Broken down into submodules for conversation messages and tool plumbing.

pub mod message;
pub mod tool;

pub use message::*;
pub use tool::*;
