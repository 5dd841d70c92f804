//! Todo Form Component
//!
//! Text input with Add, or Save/Cancel while an edit session is open.

use leptos::prelude::*;

use crate::actions::UserAction;
use crate::context::use_app_context;
use crate::view::{FormControls, TodoView};

/// Form for creating a todo or retitling the one being edited
#[component]
pub fn TodoForm(model: Memo<TodoView>) -> impl IntoView {
    let ctx = use_app_context();
    let busy = move || model.with(|v| v.busy);

    // Enter submits whichever control is showing
    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        match model.with(|v| v.form) {
            FormControls::Add => ctx.send(UserAction::Add),
            FormControls::SaveCancel { .. } => ctx.send(UserAction::Save),
        }
    };

    view! {
        <form class="todo-form" on:submit=submit>
            <input
                type="text"
                placeholder=move || model.with(|v| v.placeholder.clone())
                prop:value=move || model.with(|v| v.input.clone())
                on:input=move |ev| ctx.send(UserAction::Input(event_target_value(&ev)))
            />
            {move || match model.with(|v| v.form) {
                FormControls::Add => view! {
                    <button type="submit" disabled=busy>"Add Item"</button>
                }.into_any(),
                FormControls::SaveCancel { .. } => view! {
                    <div class="edit-controls">
                        <button type="submit" disabled=busy>"Save"</button>
                        <button type="button" on:click=move |_| ctx.send(UserAction::Cancel)>"Cancel"</button>
                    </div>
                }.into_any(),
            }}
        </form>
    }
}
