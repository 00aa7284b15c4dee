#![deny(unused)]
//! HTTP gateway for Estate Chat.
//!
//! This crate provides the public entry point of the service: the chat
//! endpoint, health and metrics endpoints, CORS for the website front-ends, and
//! request tracing.

pub mod server;

pub use server::{ChatRequest, ChatResponse, GatewayConfig, GatewayServer};
