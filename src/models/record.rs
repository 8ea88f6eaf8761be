//! Record model representing a single contact in the address book.

use crate::domain::{Name, Phone, ValidationError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A contact: one name plus an ordered list of phone numbers.
///
/// Phones keep their insertion order, which is also the order they are
/// displayed in. The same number may appear more than once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Display name; set once at construction
    name: Name,

    /// Phone numbers in insertion order
    #[serde(default)]
    phones: Vec<Phone>,
}

impl Record {
    /// Create a new record with no phone numbers.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Name::new(name),
            phones: Vec::new(),
        }
    }

    /// The contact's name.
    pub fn name(&self) -> &Name {
        &self.name
    }

    /// The contact's phones, in insertion order.
    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    /// Validate `phone` and append it to the end of the phone list.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` if `phone` is not ten digits.
    /// The record is left unchanged in that case.
    pub fn add_phone(&mut self, phone: &str) -> Result<(), ValidationError> {
        let phone = Phone::new(phone)?;
        tracing::debug!(name = %self.name, phone = %phone, "Phone added");
        self.phones.push(phone);
        Ok(())
    }

    /// Remove every phone equal to `phone`.
    ///
    /// Removing a number the record does not have is a no-op.
    pub fn delete_phone(&mut self, phone: &str) {
        let before = self.phones.len();
        self.phones.retain(|p| p.as_str() != phone);

        tracing::debug!(
            name = %self.name,
            phone = %phone,
            removed = before - self.phones.len(),
            "Phone deleted"
        );
    }

    /// Replace the first phone equal to `old` with `new`, keeping its position.
    ///
    /// Returns `Ok(false)` without touching the record when `old` is not
    /// present. `new` is only validated once a match has been found, so an
    /// invalid `new` paired with an absent `old` also yields `Ok(false)`.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` if `old` is present but `new`
    /// is not a valid phone. The record is left unchanged.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> Result<bool, ValidationError> {
        let Some(slot) = self.phones.iter_mut().find(|p| p.as_str() == old) else {
            tracing::trace!(name = %self.name, phone = %old, "Phone to edit not found");
            return Ok(false);
        };

        *slot = Phone::new(new)?;
        tracing::debug!(name = %self.name, old = %old, new = %new, "Phone replaced");
        Ok(true)
    }

    /// Find the first phone equal to `phone`.
    pub fn find_phone(&self, phone: &str) -> Option<&Phone> {
        self.phones.iter().find(|p| p.as_str() == phone)
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Contact name: {}, phones: ", self.name)?;
        for (i, phone) in self.phones.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", phone)?;
        }
        Ok(())
    }
}
