//! Todo record and the partial inputs accepted at the HTTP boundary.
//!
//! # Design
//! One `Todo` shape serves both storage and the wire. Inputs are separate,
//! narrower types: `CreateTodo` carries only what a caller may supply at
//! creation, `UpdateTodo` only the mutable fields. `id`, `userId` and
//! `createdAt` are absent from both, so a client that echoes them back in a
//! body has them silently ignored.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

use crate::error::AppError;

/// A single todo item owned by one caller.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub id: Uuid,
    pub title: String,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub user_id: String,
}

impl Todo {
    /// Whether `owner` is allowed to see and modify this record.
    pub fn is_owned_by(&self, owner: &str) -> bool {
        self.user_id == owner
    }

    /// Shallow merge: every field present in `patch` overwrites the stored one.
    pub fn apply(&mut self, patch: UpdateTodo) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(notes) = patch.notes {
            self.notes = notes;
        }
        if let Some(completed) = patch.completed {
            self.completed = completed;
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct CreateTodo {
    pub title: String,
    #[serde(default)]
    pub notes: Option<String>,
}

impl CreateTodo {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.title.trim().is_empty() {
            return Err(AppError::BadRequest("title must not be blank".to_string()));
        }
        Ok(())
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct UpdateTodo {
    pub title: Option<String>,
    /// Absent keeps the stored notes, `null` clears them.
    #[serde(default, deserialize_with = "present")]
    pub notes: Option<Option<String>>,
    pub completed: Option<bool>,
}

/// Wraps whatever is present, `null` included, in `Some`. Combined with
/// `#[serde(default)]` this tells an absent field apart from an explicit null.
fn present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

impl UpdateTodo {
    pub fn validate(&self) -> Result<(), AppError> {
        match &self.title {
            Some(title) if title.trim().is_empty() => {
                Err(AppError::BadRequest("title must not be blank".to_string()))
            }
            _ => Ok(()),
        }
    }
}

/// `?userRole=` query parameter. Despite the name it identifies the owner,
/// not a role.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct OwnerQuery {
    #[serde(rename = "userRole")]
    pub user_role: Option<String>,
}

impl OwnerQuery {
    /// The owner tag, treating an empty value the same as an absent one.
    pub fn owner(&self) -> Option<&str> {
        self.user_role.as_deref().filter(|tag| !tag.is_empty())
    }
}
