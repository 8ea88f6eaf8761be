//! In-memory address book keyed by contact name.

use crate::domain::{Phone, ValidationError};
use crate::error::{AddressBookError, AddressBookResult};
use crate::models::Record;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashMap;
use std::fmt;
use std::ops::Deref;

/// A collection of contact records keyed by name.
///
/// Names are unique. Records are kept in insertion order for iteration;
/// replacing a record under an existing name keeps that name's position.
///
/// # Example
///
/// ```
/// use address_book::{AddressBook, Record};
///
/// let mut book = AddressBook::new();
/// let mut john = Record::new("John");
/// john.add_phone("1234567890").unwrap();
/// book.add_record(john);
///
/// assert!(book.find("John").is_some());
/// assert!(book.delete("Jane").is_err());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressBook {
    records: HashMap<String, Record>,

    /// Keys of `records` in insertion order
    order: Vec<String>,
}

impl AddressBook {
    /// Create an empty address book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `record` under its name.
    ///
    /// A record already stored under the same name is replaced wholesale and
    /// handed back to the caller; nothing is merged.
    pub fn add_record(&mut self, record: Record) -> Option<Record> {
        let key = record.name().as_str().to_owned();

        match self.records.insert(key.clone(), record) {
            Some(previous) => {
                tracing::debug!(name = %key, "Record overwritten");
                Some(previous)
            }
            None => {
                tracing::debug!(name = %key, "Record added");
                self.order.push(key);
                None
            }
        }
    }

    /// Look up a record by name.
    pub fn find(&self, name: &str) -> Option<&Record> {
        tracing::trace!(name = %name, "Record lookup");
        self.records.get(name)
    }

    /// Look up a record by name to edit its phones.
    ///
    /// The record itself cannot be replaced through the returned handle, so
    /// the stored name always matches its key.
    ///
    /// ```compile_fail
    /// use address_book::{AddressBook, Record};
    ///
    /// let mut book = AddressBook::new();
    /// book.add_record(Record::new("John"));
    /// *book.find_mut("John").unwrap() = Record::new("Jane");
    /// ```
    pub fn find_mut(&mut self, name: &str) -> Option<RecordMut<'_>> {
        tracing::trace!(name = %name, "Record lookup (mut)");
        self.records.get_mut(name).map(RecordMut)
    }

    /// Remove the record stored under `name` and return it.
    ///
    /// # Errors
    ///
    /// Returns `AddressBookError::NotFound` if no record has that name.
    pub fn delete(&mut self, name: &str) -> AddressBookResult<Record> {
        let record = self
            .records
            .remove(name)
            .ok_or_else(|| AddressBookError::NotFound(name.to_string()))?;

        self.order.retain(|key| key != name);
        tracing::debug!(name = %name, "Record deleted");
        Ok(record)
    }

    /// Check whether a record is stored under `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.records.contains_key(name)
    }

    /// Number of records in the book.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Check if the book has no records.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Iterate over all records in insertion order.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            order: self.order.iter(),
            records: &self.records,
        }
    }

    /// Iterate over all stored names in insertion order.
    pub fn names(&self) -> Names<'_> {
        Names {
            order: self.order.iter(),
        }
    }
}

/// Phone-editing handle to a record stored in an [`AddressBook`].
///
/// Dereferences to [`Record`] for reads.
#[derive(Debug)]
pub struct RecordMut<'a>(&'a mut Record);

impl RecordMut<'_> {
    /// See [`Record::add_phone`].
    pub fn add_phone(&mut self, phone: &str) -> Result<(), ValidationError> {
        self.0.add_phone(phone)
    }

    /// See [`Record::delete_phone`].
    pub fn delete_phone(&mut self, phone: &str) {
        self.0.delete_phone(phone)
    }

    /// See [`Record::edit_phone`].
    pub fn edit_phone(&mut self, old: &str, new: &str) -> Result<bool, ValidationError> {
        self.0.edit_phone(old, new)
    }

    /// See [`Record::find_phone`].
    pub fn find_phone(&self, phone: &str) -> Option<&Phone> {
        self.0.find_phone(phone)
    }
}

impl Deref for RecordMut<'_> {
    type Target = Record;

    fn deref(&self) -> &Record {
        &*self.0
    }
}

impl fmt::Display for RecordMut<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&*self.0, f)
    }
}

/// Iterator over the records of an [`AddressBook`], in insertion order.
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    order: std::slice::Iter<'a, String>,
    records: &'a HashMap<String, Record>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Record;

    fn next(&mut self) -> Option<Self::Item> {
        // Every key in `order` is present in `records`.
        let records = self.records;
        self.order.by_ref().find_map(|key| records.get(key))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.order.size_hint()
    }
}

/// Iterator over the names stored in an [`AddressBook`], in insertion order.
#[derive(Debug, Clone)]
pub struct Names<'a> {
    order: std::slice::Iter<'a, String>,
}

impl<'a> Iterator for Names<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        self.order.next().map(String::as_str)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.order.size_hint()
    }
}

impl ExactSizeIterator for Names<'_> {}

impl<'a> IntoIterator for &'a AddressBook {
    type Item = &'a Record;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<Record> for AddressBook {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        let mut book = AddressBook::new();
        book.extend(iter);
        book
    }
}

impl Extend<Record> for AddressBook {
    fn extend<I: IntoIterator<Item = Record>>(&mut self, iter: I) {
        for record in iter {
            self.add_record(record);
        }
    }
}

// Serde support - serialize as a list of records in insertion order
impl Serialize for AddressBook {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(self.iter())
    }
}

// Serde support - rebuild through add_record so duplicate names overwrite
impl<'de> Deserialize<'de> for AddressBook {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let records = Vec::<Record>::deserialize(deserializer)?;
        Ok(records.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, phones: &[&str]) -> Record {
        let mut record = Record::new(name);
        for phone in phones {
            record.add_phone(phone).unwrap();
        }
        record
    }

    fn names(book: &AddressBook) -> Vec<&str> {
        book.iter().map(|r| r.name().as_str()).collect()
    }

    #[test]
    fn test_new_book_is_empty() {
        let book = AddressBook::new();
        assert!(book.is_empty());
        assert_eq!(book.len(), 0);
        assert_eq!(book.iter().count(), 0);
    }

    #[test]
    fn test_add_and_find() {
        let mut book = AddressBook::new();
        assert!(book.add_record(record("John", &["1234567890"])).is_none());

        let found = book.find("John").unwrap();
        assert_eq!(found.phones()[0].as_str(), "1234567890");
        assert!(book.contains("John"));
        assert!(book.find("Jane").is_none());
    }

    #[test]
    fn test_iteration_preserves_insertion_order() {
        let book: AddressBook = ["Zed", "Amy", "Mia"]
            .into_iter()
            .map(|name| record(name, &[]))
            .collect();

        assert_eq!(names(&book), ["Zed", "Amy", "Mia"]);
        assert_eq!(book.names().collect::<Vec<_>>(), ["Zed", "Amy", "Mia"]);
    }

    #[test]
    fn test_iteration_is_restartable() {
        let book: AddressBook = vec![record("John", &[]), record("Jane", &[])]
            .into_iter()
            .collect();

        let first: Vec<_> = book.iter().collect();
        let second: Vec<_> = (&book).into_iter().collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_add_record_overwrites_same_name() {
        let mut book = AddressBook::new();
        book.add_record(record("John", &["1234567890"]));
        book.add_record(record("Jane", &["9876543210"]));

        let previous = book.add_record(record("John", &["5555555555"])).unwrap();
        assert_eq!(previous.phones()[0].as_str(), "1234567890");

        assert_eq!(book.len(), 2);
        assert_eq!(names(&book), ["John", "Jane"]);
        let john = book.find("John").unwrap();
        assert_eq!(john.to_string(), "Contact name: John, phones: 5555555555");
    }

    #[test]
    fn test_find_mut_edits_stored_record() {
        let mut book = AddressBook::new();
        book.add_record(record("John", &["1234567890"]));

        let mut john = book.find_mut("John").unwrap();
        assert_eq!(john.edit_phone("1234567890", "1112223333"), Ok(true));
        john.add_phone("5555555555").unwrap();
        john.delete_phone("1112223333");
        assert_eq!(john.to_string(), "Contact name: John, phones: 5555555555");

        assert!(book.find("John").unwrap().find_phone("5555555555").is_some());
        assert!(book.find_mut("Jane").is_none());
    }

    #[test]
    fn test_edits_through_find_mut_keep_name_matching_key() {
        let mut book: AddressBook = vec![
            record("John", &["1234567890"]),
            record("Jane", &["9876543210"]),
        ]
        .into_iter()
        .collect();
        let snapshot = serde_json::to_string(&book).unwrap();

        for name in ["John", "Jane"] {
            let mut entry = book.find_mut(name).unwrap();
            assert_eq!(entry.name().as_str(), name);
            entry.add_phone("5555555555").unwrap();
            entry.delete_phone("5555555555");
        }

        for key in book.names() {
            assert_eq!(book.find(key).unwrap().name().as_str(), key);
        }
        let restored: AddressBook = serde_json::from_str(&snapshot).unwrap();
        assert_eq!(restored, book);
    }

    #[test]
    fn test_delete_removes_only_that_entry() {
        let mut book: AddressBook = vec![
            record("John", &["1234567890"]),
            record("Jane", &["9876543210"]),
            record("Bob", &["5555555555"]),
        ]
        .into_iter()
        .collect();

        let removed = book.delete("Jane").unwrap();
        assert_eq!(removed.name().as_str(), "Jane");
        assert_eq!(names(&book), ["John", "Bob"]);
        assert_eq!(book.find("John").unwrap().phones()[0].as_str(), "1234567890");
        assert_eq!(book.find("Bob").unwrap().phones()[0].as_str(), "5555555555");
    }

    #[test]
    fn test_delete_missing_is_not_found() {
        let mut book = AddressBook::new();
        book.add_record(record("John", &[]));

        let err = book.delete("Jane").unwrap_err();
        assert_eq!(err, AddressBookError::NotFound("Jane".to_string()));
        assert_eq!(book.len(), 1);
    }

    #[test]
    fn test_delete_twice_fails_second_time() {
        let mut book = AddressBook::new();
        book.add_record(record("John", &[]));

        assert!(book.delete("John").is_ok());
        assert!(matches!(
            book.delete("John"),
            Err(AddressBookError::NotFound(_))
        ));
        assert!(book.is_empty());
    }

    #[test]
    fn test_readd_after_delete_goes_to_end() {
        let mut book: AddressBook = vec![record("John", &[]), record("Jane", &[])]
            .into_iter()
            .collect();

        book.delete("John").unwrap();
        book.add_record(record("John", &[]));
        assert_eq!(names(&book), ["Jane", "John"]);
    }

    #[test]
    fn test_book_serialization() {
        let book: AddressBook = vec![
            record("John", &["1234567890", "5555555555"]),
            record("Jane", &["9876543210"]),
        ]
        .into_iter()
        .collect();

        let json = serde_json::to_value(&book).unwrap();
        assert_eq!(
            json,
            serde_json::json!([
                { "name": "John", "phones": ["1234567890", "5555555555"] },
                { "name": "Jane", "phones": ["9876543210"] }
            ])
        );
    }

    #[test]
    fn test_book_deserialization_overwrites_duplicates() {
        let json = r#"[
            { "name": "John", "phones": ["1234567890"] },
            { "name": "Jane", "phones": [] },
            { "name": "John", "phones": ["5555555555"] }
        ]"#;

        let book: AddressBook = serde_json::from_str(json).unwrap();
        assert_eq!(names(&book), ["John", "Jane"]);
        assert!(book.find("John").unwrap().find_phone("5555555555").is_some());
    }

    #[test]
    fn test_book_deserialization_rejects_invalid_phone() {
        let json = r#"[{ "name": "John", "phones": ["123"] }]"#;
        let result: Result<AddressBook, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }
}
