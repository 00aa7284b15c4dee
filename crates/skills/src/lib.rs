#![deny(unused)]
//! Skills for Estate Chat.
//!
//! This crate provides:
//! - The four data lookup functions over the static store
//! - Their `Tool` wrappers, as bound to the domain agents
//! - A tool registry for managing the tools of one agent

pub mod builtin;
pub mod registry;

pub use builtin::*;
pub use registry::DefaultToolRegistry;
