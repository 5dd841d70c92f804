//! Todo List View Component
//!
//! Displays the collection in server order.

use leptos::prelude::*;

use crate::components::TodoRow;
use crate::view::TodoView;

#[component]
pub fn TodoListView(model: Memo<TodoView>) -> impl IntoView {
    view! {
        <ul class="todo-list">
            <For
                each=move || model.with(|v| v.rows.clone())
                // Position is part of the key: the demo API hands out duplicate ids
                key=|row| (row.position, row.id, row.title.clone(), row.completed, row.actions)
                children=move |row| view! { <TodoRow row=row /> }
            />
        </ul>
    }
}
