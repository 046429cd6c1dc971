//! # Taskmaster Analytics Backend
//!
//! Analytics over a static dataset of Taskmaster UK contestant statistics,
//! with a chat assistant grounded on a digest of the data.
//!
//! ## Architecture
//!
//! - [`api`]: Public types served over HTTP
//! - [`models`]: Immutable contestant, season and task-category model
//! - [`config`]: TOML and environment configuration
//! - [`db`]: Dataset Store: loading, validation, repository pattern
//! - [`services`]: Aggregation engine, summary formatter, chat gateway
//! - [`routes`]: Per-view response types and route name constants
//! - [`http`]: Axum-based HTTP server and request handlers
//!
//! The dataset is loaded once and never mutated. Derived views are pure
//! functions of it and are recomputed per request.

// Allow large error types - RepositoryError contains rich context for debugging
#![allow(clippy::result_large_err)]

pub mod api;
pub mod config;
pub mod db;
pub mod models;
pub mod routes;
pub mod services;

#[cfg(feature = "http-server")]
pub mod http;
