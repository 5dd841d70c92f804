//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::actions::{perform, Request, UserAction};
use crate::commands::HttpTodoStore;
use crate::store::TodoList;

/// App-wide state and the remote store, provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Collection and edit cursor
    pub state: RwSignal<TodoList>,
    store: StoredValue<HttpTodoStore>,
}

impl AppContext {
    pub fn new(state: RwSignal<TodoList>, store: HttpTodoStore) -> Self {
        Self {
            state,
            store: StoredValue::new(store),
        }
    }

    /// Apply a user action and dispatch the remote call it produces
    pub fn send(&self, action: UserAction) {
        let mut request = None;
        self.state.update(|list| request = list.handle(action));
        if let Some(request) = request {
            self.dispatch(request);
        }
    }

    /// Run a request in the background and settle it when the response arrives.
    /// Completions are applied in arrival order.
    pub fn dispatch(&self, request: Request) {
        let state = self.state;
        let store = self.store.get_value();
        spawn_local(async move {
            let outcome = perform(&store, request.clone()).await;
            state.update(|list| list.settle(&request, outcome));
        });
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
