//! Application service layer.
//!
//! Services contain business logic and orchestrate interactions between
//! the validator and the repositories. They provide a clean boundary
//! between the HTTP handlers and the data access layer.

mod contact_service;
mod validator;

pub use contact_service::{ContactService, ContactServiceImpl};
pub use validator::{ContactValidator, FieldError, NameRule, ValidationErrors};
