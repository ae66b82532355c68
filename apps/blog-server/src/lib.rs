//! # Quill blog server
//!
//! Actix-web application serving the public blog pages and the admin area.
//! The binary in `main.rs` wires configuration and telemetry around it.

pub mod config;
pub mod handlers;
pub mod middleware;
pub mod state;
pub mod telemetry;
