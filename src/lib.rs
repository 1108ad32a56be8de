//! HTTP backend for Chinese character lookup.
//!
//! Accepts Chinese text, asks an OpenAI-style completion API for the pinyin
//! and a per-part-of-speech breakdown of definitions, and reshapes the
//! model's JSON reply into a fixed response schema.
//!
//! # Endpoints
//!
//! | Endpoint | Method | Description |
//! |----------|--------|-------------|
//! | `/health` | GET | Liveness check (always 200) |
//! | `/translate` | POST | Look up pinyin + definitions for `characters` |
//!
//! Every response carries permissive CORS headers so browser-based clients
//! (e.g. an extension) on another origin can call the API directly.

pub mod config;
pub mod cors;
pub mod error;
pub mod openai;
pub mod routes;
pub mod state;
pub mod translate;

pub use config::Config;
pub use routes::create_routes;
pub use state::AppState;
