//! Properties of the `ProductManagerComponent`.

use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ProductManagerProps {
    /// Base URL of the products/suppliers backend.
    ///
    /// `None` (the default) uses the build-time default, `http://localhost:8080`
    /// unless `PRODUCT_API_BASE` was set when compiling. Read once, when the
    /// component is created.
    #[prop_or_default]
    pub api_base: Option<String>,
}
