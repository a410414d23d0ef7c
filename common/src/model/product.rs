use serde::{Deserialize, Serialize};

use crate::model::Id;

/// A product as returned by `GET /products`.
///
/// Every product points at exactly one supplier. The reference is trusted as
/// sent; nothing checks that the supplier exists in the loaded collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: Id,
    pub name: String,
    pub price: f64,
    pub quantity: i64,
    pub supplier: SupplierRef,
}

/// The `{ "id": ... }` object products use to point at their supplier.
///
/// The backend may embed the whole supplier here; extra fields are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SupplierRef {
    pub id: Id,
}

/// Request body for `POST /products` and `PUT /products/{id}`.
///
/// Carries no product identifier: on update the id only travels in the path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductPayload {
    pub name: String,
    pub price: f64,
    pub quantity: i64,
    pub supplier: SupplierRef,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn product_ignores_embedded_supplier_fields() {
        let product: Product = serde_json::from_value(json!({
            "id": 7,
            "name": "Widget",
            "price": 9.99,
            "quantity": 3,
            "supplier": { "id": 2, "name": "Acme" }
        }))
        .unwrap();

        assert_eq!(product.id, Id::Number(7));
        assert_eq!(product.supplier.id, Id::Number(2));
    }

    #[test]
    fn payload_has_nested_supplier_and_no_id() {
        let payload = ProductPayload {
            name: "Widget".to_string(),
            price: 9.99,
            quantity: 3,
            supplier: SupplierRef { id: Id::Number(2) },
        };

        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            json!({
                "name": "Widget",
                "price": 9.99,
                "quantity": 3,
                "supplier": { "id": 2 }
            })
        );
    }
}
