//! Todo Row Component
//!
//! Individual todo in the list.

use leptos::prelude::*;

use crate::actions::UserAction;
use crate::context::use_app_context;
use crate::view::{RowActions, RowView};

/// A single todo row. The row being edited shows its title only.
#[component]
pub fn TodoRow(row: RowView) -> impl IntoView {
    let ctx = use_app_context();
    let id = row.id;
    let class = if row.completed { "todo-row completed" } else { "todo-row" };

    view! {
        <li class=class>
            <span class="todo-title">{row.title}</span>
            {(row.actions == RowActions::EditDelete).then(|| view! {
                <button class="edit-btn" on:click=move |_| ctx.send(UserAction::Edit(id))>"Edit"</button>
                <button class="delete-btn" on:click=move |_| ctx.send(UserAction::Delete(id))>"Delete"</button>
            })}
        </li>
    }
}
