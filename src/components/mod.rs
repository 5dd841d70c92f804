//! UI Components
//!
//! Leptos components drawing a `TodoView`.

mod todo_form;
mod todo_row;
mod todo_list_view;

pub use todo_form::TodoForm;
pub use todo_row::TodoRow;
pub use todo_list_view::TodoListView;
