//! View Description
//!
//! Pure derivation of what the page shows from the current `TodoList`.
//! Components only draw this; they never inspect the state directly.

use crate::models::TodoId;
use crate::store::TodoList;

pub const HEADING: &str = "CRUD App - Edit Selected Item";

/// Controls next to the text input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormControls {
    /// No edit session: the input is the new-item title
    Add,
    /// Editing `id`: the input is its replacement title
    SaveCancel { id: TodoId },
}

/// Controls on a list row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RowActions {
    /// The row being edited shows its title only
    ReadOnly,
    EditDelete,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowView {
    pub position: usize,
    pub id: TodoId,
    pub title: String,
    pub completed: bool,
    pub actions: RowActions,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoView {
    pub heading: &'static str,
    pub input: String,
    pub placeholder: String,
    pub form: FormControls,
    /// A submission is in flight; Add/Save are disabled
    pub busy: bool,
    pub rows: Vec<RowView>,
}

pub fn render(list: &TodoList) -> TodoView {
    let cursor = list.cursor();
    let (form, placeholder) = match cursor.editing {
        Some(id) => (FormControls::SaveCancel { id }, format!("Rename #{}...", id)),
        None => (FormControls::Add, "New todo...".to_string()),
    };

    let rows: Vec<RowView> = list
        .todos()
        .iter()
        .enumerate()
        .map(|(position, todo)| RowView {
            position,
            id: todo.id,
            title: todo.title.clone(),
            completed: todo.completed,
            actions: if cursor.is_editing(todo.id) {
                RowActions::ReadOnly
            } else {
                RowActions::EditDelete
            },
        })
        .collect();

    TodoView {
        heading: HEADING,
        input: cursor.buffer.clone(),
        placeholder,
        form,
        busy: list.is_submitting(),
        rows,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::UserAction;
    use crate::store::tests::list_of;

    #[test]
    fn test_browsing_shows_add_and_row_actions() {
        let list = list_of(&[(1, "A"), (2, "B")]);

        let view = render(&list);

        assert_eq!(view.heading, HEADING);
        assert_eq!(view.form, FormControls::Add);
        assert_eq!(view.input, "");
        assert_eq!(view.placeholder, "New todo...");
        assert!(!view.busy);
        assert!(view.rows.iter().all(|row| row.actions == RowActions::EditDelete));
        assert_eq!(view.rows.iter().map(|row| row.title.as_str()).collect::<Vec<_>>(), ["A", "B"]);
    }

    #[test]
    fn test_edited_row_is_read_only() {
        let mut list = list_of(&[(1, "A"), (2, "B"), (3, "C")]);
        list.begin_edit(TodoId(2));

        let view = render(&list);

        assert_eq!(view.form, FormControls::SaveCancel { id: TodoId(2) });
        assert_eq!(view.input, "B");
        assert_eq!(view.placeholder, "Rename #2...");
        let actions: Vec<_> = view.rows.iter().map(|row| row.actions).collect();
        assert_eq!(actions, [RowActions::EditDelete, RowActions::ReadOnly, RowActions::EditDelete]);
    }

    #[test]
    fn test_busy_while_submitting() {
        let mut list = list_of(&[]);
        list.handle(UserAction::Add);

        assert!(render(&list).busy);
    }

    #[test]
    fn test_rows_keep_position_for_duplicate_ids() {
        let list = list_of(&[(201, "x"), (201, "y")]);

        let view = render(&list);

        assert_eq!(view.rows[0].position, 0);
        assert_eq!(view.rows[1].position, 1);
        assert_eq!(view.rows[1].id, TodoId(201));
    }
}
