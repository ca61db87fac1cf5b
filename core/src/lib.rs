//! Client core for the multi-user todo service.
//!
//! Builds `HttpRequest` values and parses `HttpResponse` values without
//! touching the network. A `TodoClient` is bound to one owner tag and every
//! request it builds carries that tag as `?userRole=`.

pub mod client;
pub mod error;
pub mod http;
pub mod types;

pub use client::TodoClient;
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use types::{CreateTodo, Todo, UpdateTodo};
