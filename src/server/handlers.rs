//! Route handlers for the contact book pages.
//!
//! Each handler validates its input through the contact service, performs
//! one store operation, and renders a page or redirects to the list.

use crate::domain::ContactId;
use crate::error::ServiceError;
use crate::models::ContactFields;
use crate::server::error::AppError;
use crate::server::views;
use crate::services::{ContactService, ValidationErrors};
use crate::session::{Session, SessionStore};
use axum::extract::{Path, State};
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::{Extension, Form};
use serde::Deserialize;
use std::sync::Arc;

/// Session key the one-shot notices are stored under.
pub const NOTICE_KEY: &str = "msg";

const CONTACT_LIST_PATH: &str = "/contact";

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub contacts: Arc<dyn ContactService>,
    pub sessions: SessionStore,
}

impl AppState {
    pub fn new(contacts: Arc<dyn ContactService>, sessions: SessionStore) -> Self {
        Self { contacts, sessions }
    }
}

/// Body of `POST /contact`.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CreateContactForm {
    name: String,
    email: String,
    phone: String,
}

impl From<CreateContactForm> for ContactFields {
    fn from(form: CreateContactForm) -> Self {
        ContactFields::new(form.name, form.email, form.phone)
    }
}

/// Body of `PUT /contact`.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UpdateContactForm {
    id: String,
    #[serde(rename = "oldName")]
    old_name: String,
    name: String,
    email: String,
    phone: String,
}

/// Body of `DELETE /contact`.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DeleteContactForm {
    name: String,
}

pub async fn home() -> Html<String> {
    Html(views::home())
}

pub async fn about() -> Html<String> {
    Html(views::about())
}

pub async fn list_contacts(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
) -> Result<Html<String>, AppError> {
    let contacts = state.contacts.list_contacts().await?;
    let notices = session.take_flash(NOTICE_KEY);
    Ok(Html(views::contact_list(&contacts, &notices)))
}

pub async fn add_contact_form() -> Html<String> {
    Html(views::add_contact_form(
        &ContactFields::default(),
        &ValidationErrors::new(),
    ))
}

pub async fn create_contact(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
    Form(form): Form<CreateContactForm>,
) -> Result<Response, AppError> {
    let fields = ContactFields::from(form);

    match state.contacts.create_contact(fields.clone()).await {
        Ok(_) => {
            session.flash(NOTICE_KEY, "Contact added!");
            Ok(Redirect::to(CONTACT_LIST_PATH).into_response())
        }
        Err(ServiceError::Validation(errors)) => {
            Ok(Html(views::add_contact_form(&fields, &errors)).into_response())
        }
        Err(ServiceError::Store(e)) => Err(e.into()),
    }
}

pub async fn delete_contact(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
    Form(form): Form<DeleteContactForm>,
) -> Result<Redirect, AppError> {
    state.contacts.delete_contact(&form.name).await?;
    session.flash(NOTICE_KEY, "Contact deleted!");
    Ok(Redirect::to(CONTACT_LIST_PATH))
}

pub async fn edit_contact_form(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Html<String>, AppError> {
    let contact = state
        .contacts
        .find_contact(&name)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("No contact named {}", name)))?;

    Ok(Html(views::edit_contact_form(
        &contact.id.to_string(),
        &contact.name,
        &contact.fields(),
        &ValidationErrors::new(),
    )))
}

pub async fn update_contact(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
    Form(form): Form<UpdateContactForm>,
) -> Result<Response, AppError> {
    let id = ContactId::parse(&form.id)
        .map_err(|_| AppError::NotFound(format!("No contact with id {}", form.id)))?;
    let fields = ContactFields::new(form.name, form.email, form.phone);

    match state
        .contacts
        .update_contact(id, &form.old_name, fields.clone())
        .await
    {
        Ok(_) => {
            session.flash(NOTICE_KEY, "Contact updated!");
            Ok(Redirect::to(CONTACT_LIST_PATH).into_response())
        }
        Err(ServiceError::Validation(errors)) => Ok(Html(views::edit_contact_form(
            &form.id,
            &form.old_name,
            &fields,
            &errors,
        ))
        .into_response()),
        Err(ServiceError::Store(e)) => Err(e.into()),
    }
}

pub async fn contact_detail(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Html<String>, AppError> {
    let contact = state
        .contacts
        .find_contact(&name)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("No contact named {}", name)))?;

    Ok(Html(views::contact_detail(&contact)))
}

pub async fn not_found() -> AppError {
    AppError::NotFound("The page you requested does not exist.".to_string())
}
