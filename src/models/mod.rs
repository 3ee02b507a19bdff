//! Data models for the contact book.
//!
//! This module contains the persisted contact record and the field set
//! used to create or replace one.

pub mod contact;

pub use contact::{Contact, ContactFields};
