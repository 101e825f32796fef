//! Mergington High School activities backend.
//!
//! A small web backend letting students view and sign up for extracurricular
//! activities. The `server` module holds the backend implementation; `model`
//! holds the wire-level DTO types shared by handlers and API consumers.

pub mod model;
pub mod server;
