use common::error::OperationError;
use common::form::DraftChange;
use common::manager::LoadTicket;
use common::model::{Id, Product, Supplier};

#[derive(Clone)]
pub enum Msg {
    ProductsLoaded(LoadTicket, Result<Vec<Product>, OperationError>),
    SuppliersLoaded(LoadTicket, Result<Vec<Supplier>, OperationError>),
    FieldChanged(DraftChange),
    SupplierSelected(String),
    Edit(Product),
    Submit,
    SubmitFinished(Result<(), OperationError>),
    Delete(Id),
    DeleteFinished(Result<(), OperationError>),
}
