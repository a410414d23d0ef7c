/// Used when neither `PRODUCT_API_BASE` (at build time) nor a component
/// property says otherwise.
pub const DEFAULT_API_BASE: &str = "http://localhost:8080";

/// Where the product and supplier collections live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Build-time default, overridable through the `api_base` property.
    pub fn from_override(base_url: Option<&str>) -> Self {
        match base_url {
            Some(base) if !base.trim().is_empty() => Self::new(base),
            _ => Self::default(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn endpoints(&self) -> Endpoints<'_> {
        Endpoints { base: &self.base_url }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(option_env!("PRODUCT_API_BASE").unwrap_or(DEFAULT_API_BASE))
    }
}

/// URL layout of the collection endpoints.
#[derive(Debug, Clone, Copy)]
pub struct Endpoints<'a> {
    base: &'a str,
}

impl Endpoints<'_> {
    pub fn products(&self) -> String {
        format!("{}/products", self.base)
    }

    pub fn product(&self, id: &crate::model::Id) -> String {
        format!("{}/products/{}", self.base, id)
    }

    pub fn suppliers(&self) -> String {
        format!("{}/suppliers", self.base)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Id;

    #[test]
    fn paths_hang_off_the_base() {
        let config = ApiConfig::new("http://api.local:9000/");
        let endpoints = config.endpoints();

        assert_eq!(config.base_url(), "http://api.local:9000");
        assert_eq!(endpoints.products(), "http://api.local:9000/products");
        assert_eq!(endpoints.product(&Id::Number(7)), "http://api.local:9000/products/7");
        assert_eq!(endpoints.suppliers(), "http://api.local:9000/suppliers");
    }

    #[test]
    fn blank_override_falls_back() {
        assert_eq!(ApiConfig::from_override(Some("  ")), ApiConfig::default());
        assert_eq!(
            ApiConfig::from_override(Some("http://x")).base_url(),
            "http://x"
        );
    }
}
