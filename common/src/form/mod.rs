//! The product form: a typed draft plus the create/edit mode.

mod draft;
mod mode;

pub use draft::{Draft, DraftChange, DraftField};
pub use mode::FormMode;

use crate::error::DraftError;
use crate::model::{Id, Product, ProductPayload};

/// What a submission turns into on the wire.
#[derive(Debug, Clone, PartialEq)]
pub enum Submission {
    Create(ProductPayload),
    Update { id: Id, payload: ProductPayload },
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductForm {
    pub draft: Draft,
    pub mode: FormMode,
}

impl ProductForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update_field(&mut self, change: DraftChange) {
        self.draft.apply(change);
    }

    /// Switches to edit mode for `product`, replacing the whole draft.
    /// Anything typed before is dropped.
    pub fn begin_edit(&mut self, product: &Product) {
        self.draft = Draft::from_product(product);
        self.mode = FormMode::Editing {
            id: product.id.clone(),
        };
    }

    /// Back to an empty draft in create mode.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn submission(&self) -> Result<Submission, DraftError> {
        let payload = self.draft.to_payload()?;
        Ok(match &self.mode {
            FormMode::Create => Submission::Create(payload),
            FormMode::Editing { id } => Submission::Update {
                id: id.clone(),
                payload,
            },
        })
    }
}
