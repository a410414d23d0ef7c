pub mod id;
pub mod product;
pub mod supplier;

pub use id::Id;
pub use product::{Product, ProductPayload, SupplierRef};
pub use supplier::Supplier;
