//! The address book: a keyed collection of contact records.

mod address_book;

pub use address_book::{AddressBook, Iter, Names, RecordMut};
