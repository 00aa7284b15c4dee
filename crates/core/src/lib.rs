#![deny(unused)]
//! Core types, traits, and error definitions for Estate Chat.
//!
//! This crate provides the foundational building blocks shared across all layers
//! of the chat gateway: the error type, layered configuration, the model and
//! tool contracts, and instruction templates.

pub mod config;
pub mod error;
pub mod mocks;
pub mod template;
pub mod traits;
pub mod types;

pub use error::{Error, Result};
pub use traits::*;
pub use types::*;
