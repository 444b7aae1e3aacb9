//! Storekeeper server library.
//!
//! This crate provides the record-keeping service as a library, allowing it
//! to be tested and reused. The binary in `main.rs` only wires configuration,
//! logging and shutdown around [`app`].
//!
//! # Layers
//!
//! - [`routes`] and [`extract`] - the entity gateway: request shaping and
//!   response payloads
//! - [`db`] - the storage engine: one repository per table
//! - [`models`] - typed records passed between the two

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod app;
pub mod config;
pub mod db;
pub mod error;
pub mod extract;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod state;
