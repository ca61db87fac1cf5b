//! In-memory todo store.
//!
//! # Design
//! Records live in a single `Vec` behind one `RwLock`. Every lookup is a
//! linear scan; the `Vec` keeps insertion order, which is the order `find_all`
//! returns. Ownership is checked on every access: a record whose `user_id`
//! does not match the caller's tag behaves exactly as if it did not exist.

use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::model::{CreateTodo, Todo, UpdateTodo};

#[derive(Debug, Default)]
pub struct TodoStore {
    todos: RwLock<Vec<Todo>>,
}

impl TodoStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// All records owned by `owner`, oldest first.
    pub async fn find_all(&self, owner: &str) -> Vec<Todo> {
        let todos = self.todos.read().await;
        todos
            .iter()
            .filter(|todo| todo.is_owned_by(owner))
            .cloned()
            .collect()
    }

    pub async fn find_one(&self, id: Uuid, owner: &str) -> Option<Todo> {
        let todos = self.todos.read().await;
        todos
            .iter()
            .find(|todo| todo.id == id && todo.is_owned_by(owner))
            .cloned()
    }

    pub async fn create(&self, input: CreateTodo, owner: &str) -> Todo {
        let todo = Todo {
            id: Uuid::new_v4(),
            title: input.title,
            completed: false,
            created_at: Utc::now(),
            notes: input.notes,
            user_id: owner.to_string(),
        };
        let mut todos = self.todos.write().await;
        todos.push(todo.clone());
        tracing::debug!(todo_id = %todo.id, owner, total = todos.len(), "todo created");
        todo
    }

    /// Merges `patch` into the matching record. `None` when no record with
    /// this id belongs to `owner`.
    pub async fn update(&self, id: Uuid, patch: UpdateTodo, owner: &str) -> Option<Todo> {
        let mut todos = self.todos.write().await;
        let todo = todos
            .iter_mut()
            .find(|todo| todo.id == id && todo.is_owned_by(owner))?;
        todo.apply(patch);
        tracing::debug!(todo_id = %id, owner, "todo updated");
        Some(todo.clone())
    }

    pub async fn delete(&self, id: Uuid, owner: &str) -> bool {
        let mut todos = self.todos.write().await;
        let Some(index) = todos
            .iter()
            .position(|todo| todo.id == id && todo.is_owned_by(owner))
        else {
            return false;
        };
        todos.remove(index);
        tracing::debug!(todo_id = %id, owner, total = todos.len(), "todo deleted");
        true
    }
}
