//! Frontend Models
//!
//! Data structures matching the remote todo resource.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Server-assigned todo identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoId(pub u64);

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Todo record (matches remote)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: TodoId,
    pub title: String,
    #[serde(default)]
    pub completed: bool,
}

impl Todo {
    pub fn new(id: u64, title: impl Into<String>) -> Self {
        Self {
            id: TodoId(id),
            title: title.into(),
            completed: false,
        }
    }
}

// ========================
// Request Bodies
// ========================

/// Body for `POST /todos`
#[derive(Debug, Serialize)]
pub struct NewTodo<'a> {
    pub title: &'a str,
    pub completed: bool,
}

/// Body for `PUT /todos/{id}`
#[derive(Debug, Serialize)]
pub struct TitlePatch<'a> {
    pub title: &'a str,
}
