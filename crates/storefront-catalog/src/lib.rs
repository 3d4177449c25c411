//! Product catalog domain types and the read-only REST catalog client.
//!
//! The catalog is served by a fixed third-party REST API: plain GET requests,
//! JSON bodies, no auth, no pagination. Everything here is read-only; products
//! are never mutated locally.

pub mod client;
pub mod config;
pub mod error;
pub mod product;

pub use client::{CatalogClient, HttpCatalogClient};
pub use config::CatalogConfig;
pub use error::CatalogError;
pub use product::{Product, Rating};
