//! Orders API - Minimal order-management backend
//!
//! Thin handler → service → repository layering over a SQLite store.
//!
//! # Modules
//!
//! - [`config`] - YAML-driven application configuration
//! - [`logging`] - tracing subscriber setup
//! - [`db`] - SQLite connection pool and schema bootstrap
//! - [`orders`] - domain records, repository, and service
//! - [`gateway`] - axum HTTP surface

pub mod config;
pub mod db;
pub mod gateway;
pub mod logging;
pub mod orders;
