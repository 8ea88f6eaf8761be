//! Domain value objects and types.
//!
//! This module contains the field types that make up a contact: the
//! [`Field`] contract, the contact [`Name`], and the validated [`Phone`].
//! Phones are validated at construction time so an invalid number can never
//! be stored in a record.

pub mod errors;
pub mod field;
pub mod name;
pub mod phone;

pub use errors::ValidationError;
pub use field::Field;
pub use name::Name;
pub use phone::Phone;
