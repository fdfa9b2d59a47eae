//! HTTP surface for the booklayer stores.
//!
//! Two route sets exist, one per backend, and exactly one is served at a time:
//!
//! - [`routes::memory`] - `/book` routes over the in-memory store
//! - [`routes::document`] - `/books` routes over any repository keyed by [`DocumentId`](booklayer::id::DocumentId)
//!
//! The store is built once at startup and handed to the router as state.

pub mod config;
pub mod error;
pub mod routes;
pub mod server;
