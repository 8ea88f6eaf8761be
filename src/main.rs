//! Address Book - demo entry point
//!
//! Builds a small address book, edits and searches it, and prints the
//! results to stdout. Logs go to stderr.

use address_book::{AddressBook, Config, OutputFormat, Record};
use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let config = Config::from_env().context("Failed to load configuration")?;

    // Logging goes to stderr so stdout only carries the demo output
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    info!(output = ?config.output_format, "Configuration loaded");

    let mut book = AddressBook::new();

    let mut john = Record::new("John");
    john.add_phone("1234567890")?;
    john.add_phone("5555555555")?;
    book.add_record(john);

    let mut jane = Record::new("Jane");
    jane.add_phone("9876543210")?;
    book.add_record(jane);

    print_book(&book, config.output_format)?;

    let mut john = book.find_mut("John").context("John should be in the book")?;
    john.edit_phone("1234567890", "1112223333")?;
    println!("{}", john);

    if let Some(phone) = john.find_phone("5555555555") {
        println!("{}: {}", john.name(), phone);
    }

    book.delete("Jane")?;
    println!("After deleting Jane:");
    print_book(&book, config.output_format)?;

    Ok(())
}

fn print_book(book: &AddressBook, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => {
            for record in book {
                println!("{}", record);
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(book)?);
        }
    }
    Ok(())
}
