//! Core types and the lifecycle service for the developer catalog.
//!
//! This crate is deliberately free of HTTP and database dependencies.
//! Storage backends implement [`store::DeveloperStore`]; the transport layer
//! drives [`service::DeveloperService`].

// We intentionally use native `async fn` in traits (stabilised in Rust 1.75).
// Suppress the advisory lint about `Send` bounds on the returned futures.
#![allow(async_fn_in_trait)]

pub mod developer;
pub mod error;
pub mod service;
pub mod store;

pub use developer::{Developer, DeveloperId, Status};
pub use error::{Lookup, ServiceError};
pub use service::DeveloperService;
pub use store::{DeveloperStore, StoreError};
