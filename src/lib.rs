//! TextLens library crate.
//!
//! Components, leaves first:
//! - [`fetch`]: retrieve a URL and reduce it to plain, whitespace-normalized text
//! - [`nlp`]: language model handle plus entity and POS adapters
//! - [`cloud`]: word-frequency cloud rendered to an inline base64 PNG
//! - [`server`]: axum request handlers mapping form input onto the above

pub mod cli;
pub mod cloud;
pub mod config;
pub mod fetch;
pub mod nlp;
pub mod server;
pub mod utils;
