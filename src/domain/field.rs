//! The `Field` contract shared by every value stored on a record.

use std::fmt;

/// A single value that can be rendered as text.
///
/// Every field holds exactly one value. The only behavior a field promises is
/// access to that value and its textual rendering through [`fmt::Display`].
pub trait Field: fmt::Display {
    /// Get the underlying value.
    fn value(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Name, Phone};

    fn render<F: Field>(field: &F) -> String {
        format!("[{}]", field)
    }

    #[test]
    fn test_fields_render_their_value() {
        let name = Name::new("John");
        let phone = Phone::new("1234567890").unwrap();

        assert_eq!(render(&name), "[John]");
        assert_eq!(render(&phone), "[1234567890]");
    }

    #[test]
    fn test_value_matches_display() {
        let phone = Phone::new("5555555555").unwrap();
        assert_eq!(phone.value(), phone.to_string());
    }
}
