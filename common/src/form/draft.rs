use std::fmt;

use crate::error::DraftError;
use crate::model::{Id, Product, ProductPayload, SupplierRef};

/// One input of the product form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DraftField {
    Name,
    Price,
    Quantity,
    SupplierId,
}

impl DraftField {
    /// The `name` attribute of the bound input element.
    pub fn input_name(self) -> &'static str {
        match self {
            DraftField::Name => "name",
            DraftField::Price => "price",
            DraftField::Quantity => "quantity",
            DraftField::SupplierId => "supplierId",
        }
    }
}

impl fmt::Display for DraftField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            DraftField::Name => "Name",
            DraftField::Price => "Price",
            DraftField::Quantity => "Quantity",
            DraftField::SupplierId => "Supplier",
        })
    }
}

/// A new value for exactly one draft field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DraftChange {
    Name(String),
    Price(String),
    Quantity(String),
    /// `None` is the placeholder option.
    Supplier(Option<Id>),
}

impl DraftChange {
    pub fn field(&self) -> DraftField {
        match self {
            DraftChange::Name(_) => DraftField::Name,
            DraftChange::Price(_) => DraftField::Price,
            DraftChange::Quantity(_) => DraftField::Quantity,
            DraftChange::Supplier(_) => DraftField::SupplierId,
        }
    }
}

/// The unsaved content of the form.
///
/// Text inputs stay as typed until submission so that half-typed numbers
/// (`"9."`) survive re-renders. The supplier is held as the `Id` the server
/// sent, never rebuilt from its rendered form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    pub name: String,
    pub price: String,
    pub quantity: String,
    pub supplier_id: Option<Id>,
}

impl Draft {
    /// Fills every field from an existing product.
    pub fn from_product(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            price: product.price.to_string(),
            quantity: product.quantity.to_string(),
            supplier_id: Some(product.supplier.id.clone()),
        }
    }

    /// Overwrites one field and leaves the others alone.
    pub fn apply(&mut self, change: DraftChange) {
        match change {
            DraftChange::Name(value) => self.name = value,
            DraftChange::Price(value) => self.price = value,
            DraftChange::Quantity(value) => self.quantity = value,
            DraftChange::Supplier(id) => self.supplier_id = id,
        }
    }

    /// Builds the request body, checking what the browser's `required` and
    /// `type="number"` attributes would have enforced.
    pub fn to_payload(&self) -> Result<ProductPayload, DraftError> {
        for (field, value) in [
            (DraftField::Name, &self.name),
            (DraftField::Price, &self.price),
            (DraftField::Quantity, &self.quantity),
        ] {
            if value.trim().is_empty() {
                return Err(DraftError::Missing(field));
            }
        }
        let supplier_id = self
            .supplier_id
            .clone()
            .ok_or(DraftError::Missing(DraftField::SupplierId))?;

        let price = self
            .price
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|p| p.is_finite())
            .ok_or_else(|| invalid(DraftField::Price, &self.price))?;
        let quantity = self
            .quantity
            .trim()
            .parse::<i64>()
            .map_err(|_| invalid(DraftField::Quantity, &self.quantity))?;

        Ok(ProductPayload {
            name: self.name.clone(),
            price,
            quantity,
            supplier: SupplierRef { id: supplier_id },
        })
    }
}

fn invalid(field: DraftField, value: &str) -> DraftError {
    DraftError::Invalid {
        field,
        value: value.to_string(),
    }
}
