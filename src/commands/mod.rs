//! Remote Store Commands
//!
//! Bindings to the remote todo collection, behind the `RemoteStore` trait
//! so the list logic can be driven by any backend.

mod config;
mod error;
mod todo;

use async_trait::async_trait;

use crate::models::{Todo, TodoId};

pub use config::StoreConfig;
pub use error::{NetworkError, StoreResult};
pub use todo::HttpTodoStore;

/// Remote todo collection
///
/// Every call is a single request/response exchange. Nothing is retried.
/// Futures are `?Send` because browser fetch futures are not thread-safe.
#[async_trait(?Send)]
pub trait RemoteStore {
    /// List the whole collection in server order
    async fn fetch_all(&self) -> StoreResult<Vec<Todo>>;

    /// Create a new, not completed todo and return it with its server id
    async fn create(&self, title: &str) -> StoreResult<Todo>;

    /// Replace the title of a todo. The response body is ignored.
    async fn update(&self, id: TodoId, title: &str) -> StoreResult<()>;

    /// Delete a todo. The response body is ignored.
    async fn remove(&self, id: TodoId) -> StoreResult<()>;
}
