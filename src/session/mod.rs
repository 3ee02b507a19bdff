//! Per-browser sessions and one-shot notices.
//!
//! The session middleware resolves the `sid` cookie to a [`Session`] handle,
//! puts it in the request extensions for handlers to extract, and refreshes
//! the cookie on the response.

mod middleware;
mod store;

pub use middleware::{session_middleware, Session, SESSION_COOKIE};
pub use store::{SessionId, SessionStore};
