//! Shared building blocks of the product manager.
//!
//! Everything in here is plain Rust so it can be exercised natively; the Yew
//! frontend only adds rendering and the browser HTTP transport on top.

pub mod api;
pub mod error;
pub mod form;
pub mod manager;
pub mod model;
