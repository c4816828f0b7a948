//! Framework-agnostic seam between the middleware adapter and an OAuth2 engine.
//!
//! This crate is intended to be implemented by host applications (or by
//! bindings to an existing OAuth2 library) without pulling in actix-web.
//! The `actix` feature only adds an error-response mapping for `EngineError`.

pub mod engine;
pub mod models;

pub use engine::*;
pub use models::*;
