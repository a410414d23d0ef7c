//! In-memory `ProductApi` that records every call and answers from a script.
//!
//! Each endpoint has a queue of canned responses; once a queue is empty the
//! endpoint answers with its default (the current fixture data, or `Ok(())`).

use std::cell::RefCell;
use std::collections::VecDeque;

use common::api::{ApiConfig, ProductApi};
use common::error::ApiError;
use common::model::{Id, Product, ProductPayload, Supplier, SupplierRef};

/// A request as it would have gone over the wire.
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Get(String),
    Post(String, ProductPayload),
    Put(String, ProductPayload),
    Delete(String),
}

#[derive(Default)]
pub struct RecordingApi {
    config: ApiConfig,
    calls: RefCell<Vec<Call>>,
    pub products: RefCell<Vec<Product>>,
    pub suppliers: RefCell<Vec<Supplier>>,
    product_failures: RefCell<VecDeque<ApiError>>,
    supplier_failures: RefCell<VecDeque<ApiError>>,
    mutation_failures: RefCell<VecDeque<ApiError>>,
}

impl RecordingApi {
    pub fn with_fixtures(products: Vec<Product>, suppliers: Vec<Supplier>) -> Self {
        let api = Self::default();
        *api.products.borrow_mut() = products;
        *api.suppliers.borrow_mut() = suppliers;
        api
    }

    pub fn fail_products(&self, err: ApiError) {
        self.product_failures.borrow_mut().push_back(err);
    }

    pub fn fail_suppliers(&self, err: ApiError) {
        self.supplier_failures.borrow_mut().push_back(err);
    }

    /// The next create, update or delete answers with `err`.
    pub fn fail_next_mutation(&self, err: ApiError) {
        self.mutation_failures.borrow_mut().push_back(err);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub fn clear_calls(&self) {
        self.calls.borrow_mut().clear();
    }

    fn record(&self, call: Call) {
        self.calls.borrow_mut().push(call);
    }

    fn next_mutation(&self) -> Result<(), ApiError> {
        match self.mutation_failures.borrow_mut().pop_front() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

impl ProductApi for RecordingApi {
    async fn list_products(&self) -> Result<Vec<Product>, ApiError> {
        self.record(Call::Get(self.config.endpoints().products()));
        if let Some(err) = self.product_failures.borrow_mut().pop_front() {
            return Err(err);
        }
        Ok(self.products.borrow().clone())
    }

    async fn list_suppliers(&self) -> Result<Vec<Supplier>, ApiError> {
        self.record(Call::Get(self.config.endpoints().suppliers()));
        if let Some(err) = self.supplier_failures.borrow_mut().pop_front() {
            return Err(err);
        }
        Ok(self.suppliers.borrow().clone())
    }

    async fn create_product(&self, payload: &ProductPayload) -> Result<(), ApiError> {
        self.record(Call::Post(self.config.endpoints().products(), payload.clone()));
        self.next_mutation()
    }

    async fn update_product(&self, id: &Id, payload: &ProductPayload) -> Result<(), ApiError> {
        self.record(Call::Put(self.config.endpoints().product(id), payload.clone()));
        self.next_mutation()
    }

    async fn delete_product(&self, id: &Id) -> Result<(), ApiError> {
        self.record(Call::Delete(self.config.endpoints().product(id)));
        self.next_mutation()
    }
}

pub fn url(path: &str) -> String {
    format!("{}{}", ApiConfig::default().base_url(), path)
}

pub fn product(id: i64, name: &str, price: f64, quantity: i64, supplier: i64) -> Product {
    product_with_ids(Id::Number(id), name, price, quantity, Id::Number(supplier))
}

pub fn product_with_ids(id: Id, name: &str, price: f64, quantity: i64, supplier: Id) -> Product {
    Product {
        id,
        name: name.to_string(),
        price,
        quantity,
        supplier: SupplierRef { id: supplier },
    }
}

pub fn supplier(id: i64, name: &str) -> Supplier {
    supplier_with_id(Id::Number(id), name)
}

pub fn supplier_with_id(id: Id, name: &str) -> Supplier {
    Supplier {
        id,
        name: name.to_string(),
    }
}
