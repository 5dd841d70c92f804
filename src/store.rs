//! Todo List State
//!
//! The local mirror of the remote collection plus the edit cursor.
//! Every mutation of the collection happens only after the remote store
//! confirmed the matching write.

use crate::models::{Todo, TodoId};

/// Which todo is being edited, and the text input contents.
///
/// With `editing` unset the buffer is the "new item" input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditCursor {
    pub editing: Option<TodoId>,
    pub buffer: String,
}

impl EditCursor {
    pub fn is_editing(&self, id: TodoId) -> bool {
        self.editing == Some(id)
    }

    pub fn clear(&mut self) {
        self.editing = None;
        self.buffer.clear();
    }
}

/// Application state: the ordered collection and the edit cursor
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoList {
    todos: Vec<Todo>,
    cursor: EditCursor,
    /// An Add or Save is in flight
    submitting: bool,
}

impl TodoList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn todos(&self) -> &[Todo] {
        &self.todos
    }

    pub fn cursor(&self) -> &EditCursor {
        &self.cursor
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub(crate) fn set_submitting(&mut self, submitting: bool) {
        self.submitting = submitting;
    }

    pub fn get(&self, id: TodoId) -> Option<&Todo> {
        self.todos.iter().find(|todo| todo.id == id)
    }

    // ========================
    // Local Edits
    // ========================

    /// Bind the text input
    pub fn set_buffer(&mut self, text: impl Into<String>) {
        self.cursor.buffer = text.into();
    }

    /// Start editing `id`, seeding the buffer with its title.
    /// Unknown ids are ignored.
    pub fn begin_edit(&mut self, id: TodoId) {
        let Some(title) = self.get(id).map(|todo| todo.title.clone()) else {
            log::debug!("[STORE] begin_edit: no todo #{}", id);
            return;
        };
        self.cursor.editing = Some(id);
        self.cursor.buffer = title;
    }

    pub fn cancel_edit(&mut self) {
        self.cursor.clear();
    }

    // ========================
    // Confirmed Remote Writes
    // ========================

    /// Replace the whole collection, keeping server order
    pub fn replace_all(&mut self, todos: Vec<Todo>) {
        self.todos = todos;
    }

    /// Append a created todo and empty the new-item input
    pub fn append(&mut self, todo: Todo) {
        self.todos.push(todo);
        if self.cursor.editing.is_none() {
            self.cursor.buffer.clear();
        }
    }

    /// Retitle every todo with `id`, leaving other fields alone, and end
    /// the edit session. A stale id (already removed) changes nothing.
    pub fn rename(&mut self, id: TodoId, title: &str) {
        let mut found = false;
        for todo in self.todos.iter_mut().filter(|todo| todo.id == id) {
            todo.title = title.to_string();
            found = true;
        }
        if found {
            self.cursor.clear();
        }
    }

    /// Drop every todo with `id`, ending the edit session if it was on `id`
    pub fn remove(&mut self, id: TodoId) {
        self.todos.retain(|todo| todo.id != id);
        if self.cursor.is_editing(id) {
            self.cursor.clear();
        }
    }
}
