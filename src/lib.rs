//! album-catalog - a small HTTP API over an in-memory album catalog
//!
//! Routes:
//! - `GET /` liveness check
//! - `GET /albums` list every album in insertion order
//! - `GET /albums/:id` fetch the first album with a given id
//! - `POST /albums` append a new album

pub mod api;
pub mod catalog;
pub mod config;
pub mod error;
pub mod types;

pub use error::{Error, Result};
