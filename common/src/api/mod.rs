//! The seam between the component and the REST backend.
//!
//! `ProductApi` is implemented over `gloo-net` in the frontend and by in-memory
//! doubles in tests. The free functions in [`dispatch`] are what the component
//! actually calls; they pick the request for a submission and tag failures
//! with the operation that produced them.

mod config;
pub mod dispatch;

pub use config::{ApiConfig, DEFAULT_API_BASE, Endpoints};

use crate::error::ApiError;
use crate::model::{Id, Product, ProductPayload, Supplier};

/// One method per collection endpoint.
///
/// Futures are not required to be `Send`: in the browser everything runs on
/// the single UI thread.
#[allow(async_fn_in_trait)]
pub trait ProductApi {
    /// `GET /products`
    async fn list_products(&self) -> Result<Vec<Product>, ApiError>;

    /// `GET /suppliers`
    async fn list_suppliers(&self) -> Result<Vec<Supplier>, ApiError>;

    /// `POST /products`
    async fn create_product(&self, payload: &ProductPayload) -> Result<(), ApiError>;

    /// `PUT /products/{id}`
    async fn update_product(&self, id: &Id, payload: &ProductPayload) -> Result<(), ApiError>;

    /// `DELETE /products/{id}`
    async fn delete_product(&self, id: &Id) -> Result<(), ApiError>;
}
