//! Todo CRUD Frontend App
//!
//! Main application component.

use leptos::prelude::*;

use crate::actions::Request;
use crate::commands::{HttpTodoStore, StoreConfig};
use crate::components::{TodoForm, TodoListView};
use crate::context::AppContext;
use crate::store::TodoList;
use crate::view::render;

#[component]
pub fn App() -> impl IntoView {
    // State
    let state = RwSignal::new(TodoList::new());
    let store = HttpTodoStore::new(StoreConfig::default());
    log::info!("[APP] Remote collection at {}", store.config().collection_url());

    let ctx = AppContext::new(state, store);
    provide_context(ctx);

    // Load todos once on mount
    Effect::new(move |_| {
        log::debug!("[APP] Loading todos");
        ctx.dispatch(Request::Load);
    });

    let view_model = Memo::new(move |_| state.with(render));

    view! {
        <main class="crud-app">
            <h1>{move || view_model.with(|v| v.heading)}</h1>

            <TodoForm model=view_model />

            <TodoListView model=view_model />
        </main>
    }
}
