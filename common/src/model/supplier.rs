use serde::{Deserialize, Serialize};

use crate::model::Id;

/// Reference data for the supplier dropdown. Never written by this app.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Supplier {
    pub id: Id,
    pub name: String,
}
