//! Contact Book - Main entry point
//!
//! Builds a small demo book, searches it, pages through it, then saves it
//! and loads it back.

use anyhow::Result;
use contact_book::{BookRepository, Config, ContactBook, FileBookRepository, Record};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

fn demo_book() -> Result<ContactBook> {
    let mut book = ContactBook::new();

    let mut john = Record::with_birthday("John", "10-3-1991")?;
    john.add_phone("1234567890")?;
    john.add_phone("5555555555")?;
    book.add_record(john);

    for (name, phone) in [
        ("Poul", "9876783210"),
        ("Ana", "9876543210"),
        ("Nadia", "9876543210"),
        ("Rood", "9876543210"),
    ] {
        let mut record = Record::new(name)?;
        record.add_phone(phone)?;
        book.add_record(record);
    }

    Ok(book)
}

fn main() -> Result<()> {
    let _ = dotenvy::dotenv();

    // Logs go to stderr so stdout carries only the book output
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()))
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = match Config::from_env() {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    let book = demo_book()?;

    let results = book.search(&config.search_keyword);
    if results.is_empty() {
        println!("No contact matches '{}'", config.search_keyword);
    } else {
        print!("{}", results);
    }

    for (number, page) in book.pages(config.page_size).enumerate() {
        println!("Page {}:", number + 1);
        for record in page {
            println!("  {}", record);
        }
    }

    if let Some(john) = book.find("John") {
        match john.days_to_birthday() {
            Ok(days) => println!("Days to John's birthday: {}", days),
            Err(e) => warn!("{}", e),
        }
    }

    // Persistence failures are reported, not fatal
    let repo = FileBookRepository::new(&config.book_path);
    if repo.save(&book).is_ok() {
        println!("Address book dumped successfully.");
    } else {
        println!("Error: Failed to save the address book.");
    }

    match repo.load() {
        Ok(loaded) => {
            println!("Address book loaded successfully.");
            print!("{}", loaded);
        }
        Err(_) => println!("Error: Failed to load the address book."),
    }

    Ok(())
}
