//! Name field.

use super::field::Field;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The display name of a contact.
///
/// Names are not validated; any string, including an empty one, is accepted.
///
/// # Example
///
/// ```
/// use address_book::domain::Name;
///
/// let name = Name::new("John");
/// assert_eq!(name.as_str(), "John");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Name(String);

impl Name {
    /// Create a new Name.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Get the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Field for Name {
    fn value(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_accepts_anything() {
        assert_eq!(Name::new("").as_str(), "");
        assert_eq!(Name::new("Jane Doe").as_str(), "Jane Doe");
    }

    #[test]
    fn test_name_serializes_as_string() {
        let json = serde_json::to_string(&Name::new("Jane")).unwrap();
        assert_eq!(json, "\"Jane\"");

        let name: Name = serde_json::from_str("\"Jane\"").unwrap();
        assert_eq!(name, Name::new("Jane"));
    }
}
