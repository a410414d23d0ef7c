use crate::api::ProductApi;
use crate::error::{Operation, OperationError};
use crate::form::Submission;
use crate::model::{Id, Product, Supplier};

pub async fn load_products<A: ProductApi>(api: &A) -> Result<Vec<Product>, OperationError> {
    api.list_products()
        .await
        .map_err(|e| OperationError::new(Operation::FetchProducts, e))
}

pub async fn load_suppliers<A: ProductApi>(api: &A) -> Result<Vec<Supplier>, OperationError> {
    api.list_suppliers()
        .await
        .map_err(|e| OperationError::new(Operation::FetchSuppliers, e))
}

/// Sends a submission as a create or an update.
pub async fn submit<A: ProductApi>(api: &A, submission: &Submission) -> Result<(), OperationError> {
    match submission {
        Submission::Create(payload) => api
            .create_product(payload)
            .await
            .map_err(|e| OperationError::new(Operation::Create, e)),
        Submission::Update { id, payload } => api
            .update_product(id, payload)
            .await
            .map_err(|e| OperationError::new(Operation::Update, e)),
    }
}

pub async fn delete<A: ProductApi>(api: &A, id: &Id) -> Result<(), OperationError> {
    api.delete_product(id)
        .await
        .map_err(|e| OperationError::new(Operation::Delete, e))
}
