//! Data models for address book entities.
//!
//! This module contains the contact [`Record`], which groups a name with
//! its phone numbers.

pub mod record;

pub use record::Record;
