//! Contact Book - a small server-rendered contact manager.
//!
//! Contacts (name, email, mobile number) are listed, added, edited, viewed,
//! and deleted through HTML pages. Names are unique across the book, and
//! email addresses and mobile numbers are format-checked before anything is
//! written.
//!
//! # Architecture
//!
//! - **domain**: Validated value objects (contact id, email, phone, region)
//! - **models**: The persisted contact record
//! - **repositories**: Contact store trait with in-memory and JSON file backends
//! - **services**: Submission validation and the contact service
//! - **session**: Per-browser sessions carrying one-shot notices
//! - **server**: axum routes, handlers, and HTML views
//! - **config**: Configuration from environment variables
//! - **error**: Custom error types for precise error handling

pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod repositories;
pub mod server;
pub mod services;
pub mod session;

pub use config::Config;
pub use error::{ConfigError, ServiceError, StoreError};
pub use models::{Contact, ContactFields};
pub use repositories::{ContactRepository, InMemoryContactRepository, JsonFileContactRepository};
pub use server::{build_app, AppState};
pub use services::{ContactService, ContactServiceImpl, FieldError, ValidationErrors};
pub use session::SessionStore;
