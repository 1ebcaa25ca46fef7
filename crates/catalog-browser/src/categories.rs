use catalog_client::ClientError;
use catalog_core::ALL_CATEGORIES;

/// Category options offered to the user, `"All"` first once loaded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryList {
    options: Vec<String>,
}

impl CategoryList {
    #[must_use]
    pub fn options(&self) -> &[String] {
        &self.options
    }

    #[must_use]
    pub fn is_loaded(&self) -> bool {
        !self.options.is_empty()
    }

    /// Whether `category` may be selected. Anything goes before the list loads.
    #[must_use]
    pub fn accepts(&self, category: &str) -> bool {
        !self.is_loaded() || self.options.iter().any(|c| c == category)
    }

    /// Stores the startup fetch result. Failures leave the list untouched.
    pub fn load(&mut self, result: Result<Vec<String>, ClientError>) {
        match result {
            Ok(fetched) => {
                tracing::debug!(count = fetched.len(), "categories loaded");
                self.options = std::iter::once(ALL_CATEGORIES.to_string())
                    .chain(fetched)
                    .collect();
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to fetch categories");
            }
        }
    }
}
