//! `ProductApi` over the browser's `fetch`, via `gloo-net`.
//!
//! All requests of one component share its abort signal, so tearing the
//! component down aborts whatever is still in flight. Aborted requests come
//! back as `ApiError::Cancelled`.

use common::api::{ApiConfig, ProductApi};
use common::error::ApiError;
use common::model::{Id, Product, ProductPayload, Supplier};
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use web_sys::AbortSignal;

#[derive(Clone)]
pub struct HttpProductApi {
    config: ApiConfig,
    signal: Option<AbortSignal>,
}

impl HttpProductApi {
    pub fn new(config: ApiConfig, signal: Option<AbortSignal>) -> Self {
        Self { config, signal }
    }

    async fn send(
        &self,
        builder: RequestBuilder,
        body: Option<&ProductPayload>,
    ) -> Result<Response, ApiError> {
        let builder = builder.abort_signal(self.signal.as_ref());
        let response = match body {
            Some(payload) => builder
                .json(payload)
                .map_err(request_error)?
                .send()
                .await
                .map_err(request_error)?,
            None => builder.send().await.map_err(request_error)?,
        };

        if response.ok() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        Err(ApiError::from_status(response.status(), &response.url(), body))
    }

    async fn fetch_list<T: DeserializeOwned>(&self, url: &str) -> Result<Vec<T>, ApiError> {
        let response = self.send(Request::get(url), None).await?;
        response.json::<Vec<T>>().await.map_err(|err| match err {
            gloo_net::Error::SerdeError(e) => ApiError::Decode(e.to_string()),
            other => request_error(other),
        })
    }
}

impl ProductApi for HttpProductApi {
    async fn list_products(&self) -> Result<Vec<Product>, ApiError> {
        self.fetch_list(&self.config.endpoints().products()).await
    }

    async fn list_suppliers(&self) -> Result<Vec<Supplier>, ApiError> {
        self.fetch_list(&self.config.endpoints().suppliers()).await
    }

    async fn create_product(&self, payload: &ProductPayload) -> Result<(), ApiError> {
        let url = self.config.endpoints().products();
        self.send(Request::post(&url), Some(payload)).await?;
        Ok(())
    }

    async fn update_product(&self, id: &Id, payload: &ProductPayload) -> Result<(), ApiError> {
        let url = self.config.endpoints().product(id);
        self.send(Request::put(&url), Some(payload)).await?;
        Ok(())
    }

    async fn delete_product(&self, id: &Id) -> Result<(), ApiError> {
        let url = self.config.endpoints().product(id);
        self.send(Request::delete(&url), None).await?;
        Ok(())
    }
}

fn request_error(err: gloo_net::Error) -> ApiError {
    match err {
        gloo_net::Error::JsError(js) if js.name == "AbortError" => ApiError::Cancelled,
        other => ApiError::Transport(other.to_string()),
    }
}
