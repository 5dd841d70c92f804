//! Remote store configuration.

use crate::models::TodoId;

const DEFAULT_BASE_URL: &str = "https://jsonplaceholder.typicode.com";
const DEFAULT_COLLECTION: &str = "todos";

/// Where the todo collection lives
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    pub base_url: String,
    pub collection: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            collection: DEFAULT_COLLECTION.to_string(),
        }
    }
}

impl StoreConfig {
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_collection(mut self, collection: impl Into<String>) -> Self {
        self.collection = collection.into();
        self
    }

    /// `{base}/{collection}`
    pub fn collection_url(&self) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            self.collection.trim_matches('/')
        )
    }

    /// `{base}/{collection}/{id}`
    pub fn item_url(&self, id: TodoId) -> String {
        format!("{}/{}", self.collection_url(), id)
    }
}
