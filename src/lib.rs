//! Address Book - an in-memory contact book with validated phone numbers.
//!
//! Contacts are stored as [`Record`]s, each holding a name and an ordered list
//! of [`Phone`](domain::Phone) numbers. Records live in an [`AddressBook`]
//! keyed by name.
//!
//! # Architecture
//!
//! - **domain**: Field value objects (`Name`, `Phone`) and their validation errors
//! - **models**: The contact `Record`
//! - **book**: The `AddressBook` collection
//! - **error**: Crate-level error types
//! - **config**: Configuration for the demo binary, loaded from environment variables

pub mod book;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;

pub use book::AddressBook;
pub use config::{Config, OutputFormat};
pub use domain::{Field, Name, Phone, ValidationError};
pub use error::{AddressBookError, AddressBookResult, ConfigError, ConfigResult};
pub use models::Record;
