//! State of the product manager and the rules for applying remote results.
//!
//! The component owns one `ManagerState`. Requests run elsewhere (spawned
//! futures in the browser, plain `.await` in tests) and hand their results back
//! through the `finish_*` methods, which decide what changes.
//!
//! Loads are stamped with a [`LoadTicket`]. Only the newest ticket of each
//! collection may write to it, so a slow reload cannot overwrite the result of
//! a later one, and [`ManagerState::cancel_pending`] turns everything in flight
//! into a no-op.

use crate::error::{DraftError, OperationError};
use crate::form::{DraftChange, ProductForm, Submission};
use crate::model::{Product, Supplier};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collection {
    Products,
    Suppliers,
}

/// Proof that a load was started; required to apply its result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket {
    collection: Collection,
    generation: u64,
}

/// What happened to a finished load.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadOutcome {
    /// The collection now holds this many records.
    Loaded(usize),
    /// A newer load was started (or everything was cancelled); nothing changed.
    Stale,
    /// The request failed; the collection keeps its previous content.
    Failed(OperationError),
}

#[derive(Debug, Default)]
pub struct ManagerState {
    pub products: Vec<Product>,
    pub suppliers: Vec<Supplier>,
    pub form: ProductForm,
    products_generation: u64,
    suppliers_generation: u64,
}

impl ManagerState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin_load(&mut self, collection: Collection) -> LoadTicket {
        let generation = match collection {
            Collection::Products => &mut self.products_generation,
            Collection::Suppliers => &mut self.suppliers_generation,
        };
        *generation += 1;
        LoadTicket {
            collection,
            generation: *generation,
        }
    }

    fn is_current(&self, ticket: LoadTicket) -> bool {
        let generation = match ticket.collection {
            Collection::Products => self.products_generation,
            Collection::Suppliers => self.suppliers_generation,
        };
        generation == ticket.generation
    }

    pub fn finish_products_load(
        &mut self,
        ticket: LoadTicket,
        result: Result<Vec<Product>, OperationError>,
    ) -> LoadOutcome {
        debug_assert_eq!(ticket.collection, Collection::Products);
        if !self.is_current(ticket) {
            return LoadOutcome::Stale;
        }
        match result {
            Ok(products) => {
                self.products = products;
                LoadOutcome::Loaded(self.products.len())
            }
            Err(err) => LoadOutcome::Failed(err),
        }
    }

    pub fn finish_suppliers_load(
        &mut self,
        ticket: LoadTicket,
        result: Result<Vec<Supplier>, OperationError>,
    ) -> LoadOutcome {
        debug_assert_eq!(ticket.collection, Collection::Suppliers);
        if !self.is_current(ticket) {
            return LoadOutcome::Stale;
        }
        match result {
            Ok(suppliers) => {
                self.suppliers = suppliers;
                LoadOutcome::Loaded(self.suppliers.len())
            }
            Err(err) => LoadOutcome::Failed(err),
        }
    }

    /// Invalidates every ticket handed out so far.
    pub fn cancel_pending(&mut self) {
        self.products_generation += 1;
        self.suppliers_generation += 1;
    }

    pub fn update_field(&mut self, change: DraftChange) {
        self.form.update_field(change);
    }

    /// Applies the value of the supplier `<select>`.
    ///
    /// Options are rendered from the loaded suppliers, so the value is matched
    /// back against them and the supplier's own `Id` is stored. The placeholder
    /// (or a value no loaded supplier renders to) clears the selection.
    pub fn select_supplier(&mut self, option_value: &str) {
        let id = self
            .suppliers
            .iter()
            .find(|s| s.id.to_string() == option_value)
            .map(|s| s.id.clone());
        self.form.update_field(DraftChange::Supplier(id));
    }

    pub fn begin_edit(&mut self, product: &Product) {
        self.form.begin_edit(product);
    }

    pub fn prepare_submit(&self) -> Result<Submission, DraftError> {
        self.form.submission()
    }

    /// Applies the result of a create or update.
    ///
    /// On success the form goes back to an empty create draft and a products
    /// reload is started; the caller must fetch with the returned ticket. On
    /// failure nothing changes.
    pub fn finish_submit(
        &mut self,
        result: Result<(), OperationError>,
    ) -> Result<LoadTicket, OperationError> {
        result?;
        self.form.reset();
        Ok(self.begin_load(Collection::Products))
    }

    /// Applies the result of a delete; same reload contract as `finish_submit`.
    pub fn finish_delete(
        &mut self,
        result: Result<(), OperationError>,
    ) -> Result<LoadTicket, OperationError> {
        result?;
        Ok(self.begin_load(Collection::Products))
    }

    pub fn supplier_name(&self, id: &crate::model::Id) -> Option<&str> {
        self.suppliers
            .iter()
            .find(|s| &s.id == id)
            .map(|s| s.name.as_str())
    }
}
