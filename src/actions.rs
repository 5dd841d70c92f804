//! User Actions and Remote Requests
//!
//! `UserAction` -> `TodoList::handle` -> `Request` -> `perform` -> `Completion`
//! -> `TodoList::settle`. Each completion carries the id it targets, so
//! responses can arrive in any order.

use crate::commands::{RemoteStore, StoreResult};
use crate::models::{Todo, TodoId};
use crate::store::TodoList;

/// Something the user did in the view
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserAction {
    Input(String),
    Add,
    Edit(TodoId),
    Save,
    Cancel,
    Delete(TodoId),
}

/// A remote call to dispatch
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    Load,
    Create { title: String },
    Update { id: TodoId, title: String },
    Remove { id: TodoId },
}

impl Request {
    /// Add and Save hold the submit lock until they settle
    fn is_submit(&self) -> bool {
        matches!(self, Request::Create { .. } | Request::Update { .. })
    }

    fn describe(&self) -> String {
        match self {
            Request::Load => "load".to_string(),
            Request::Create { .. } => "create".to_string(),
            Request::Update { id, .. } => format!("update #{}", id),
            Request::Remove { id } => format!("remove #{}", id),
        }
    }
}

/// A confirmed remote write, carrying what reconciliation needs
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Completion {
    Loaded(Vec<Todo>),
    Created(Todo),
    Updated { id: TodoId, title: String },
    Removed { id: TodoId },
}

/// Run a request against the remote store
pub async fn perform<S: RemoteStore + ?Sized>(store: &S, request: Request) -> StoreResult<Completion> {
    match request {
        Request::Load => store.fetch_all().await.map(Completion::Loaded),
        Request::Create { title } => store.create(&title).await.map(Completion::Created),
        Request::Update { id, title } => {
            store.update(id, &title).await?;
            Ok(Completion::Updated { id, title })
        }
        Request::Remove { id } => {
            store.remove(id).await?;
            Ok(Completion::Removed { id })
        }
    }
}

impl TodoList {
    /// Apply a user action locally and return the remote call it needs, if any
    pub fn handle(&mut self, action: UserAction) -> Option<Request> {
        match action {
            UserAction::Input(text) => {
                self.set_buffer(text);
                None
            }
            UserAction::Edit(id) => {
                self.begin_edit(id);
                None
            }
            UserAction::Cancel => {
                self.cancel_edit();
                None
            }
            UserAction::Delete(id) => Some(Request::Remove { id }),
            UserAction::Add => {
                if self.is_submitting() || self.cursor().editing.is_some() {
                    return None;
                }
                self.set_submitting(true);
                Some(Request::Create { title: self.cursor().buffer.clone() })
            }
            UserAction::Save => {
                if self.is_submitting() {
                    return None;
                }
                let id = self.cursor().editing?;
                self.set_submitting(true);
                Some(Request::Update { id, title: self.cursor().buffer.clone() })
            }
        }
    }

    /// Reconcile after a confirmed remote write
    pub fn apply(&mut self, completion: Completion) {
        match completion {
            Completion::Loaded(todos) => self.replace_all(todos),
            Completion::Created(todo) => self.append(todo),
            Completion::Updated { id, title } => self.rename(id, &title),
            Completion::Removed { id } => self.remove(id),
        }
    }

    /// Finish a dispatched request. Failures are logged and change nothing.
    pub fn settle(&mut self, request: &Request, outcome: StoreResult<Completion>) {
        if request.is_submit() {
            self.set_submitting(false);
        }
        match outcome {
            Ok(completion) => {
                log::debug!("[STORE] {} done", request.describe());
                self.apply(completion);
            }
            Err(err) => log::error!("[STORE] {} failed: {}", request.describe(), err),
        }
    }
}
