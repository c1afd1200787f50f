//! Grade Session
//!
//! This example walks through a short session against the gradebook core,
//! the way a form-based front end would drive it.
//!
//! Key concepts:
//! - Grades typed into a form become numeric or text grades
//! - Bad dates are rejected and nothing is recorded
//! - Deleting keeps the record's snapshot in history
//!
//! Run with: RUST_LOG=gradebook=debug cargo run --example grade_session

use gradebook::{Grade, Gradebook, StoreError};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "gradebook=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    println!("=== Grade Session Example ===\n");

    let mut book = Gradebook::builder()
        .seed("John Doe", "1 23456", "Math", "A", "2023-05-01")
        .select_last_seed()
        .build()?;

    let physics = book.add("Jane Roe", "2 34567", "Physics", Grade::parse("92"), "2023-06-12")?;
    book.add("Ivan Petrov", "3 45678", "History", Grade::parse("5.5"), "2023-06-14")?;

    match book.add("Mara Lee", "4 56789", "Biology", 88, "2023-02-30") {
        Err(StoreError::InvalidDate { input, source }) => {
            println!("Rejected date {input:?}: {source}");
        }
        other => println!("Unexpected result: {other:?}"),
    }

    book.select(physics.id)?;
    book.delete(physics.id)?;

    println!("\nRecords:");
    for record in book.records() {
        println!(
            "  #{} {} ({}) {}: {} on {}",
            record.id,
            record.name,
            record.faculty_number,
            record.subject,
            record.grade,
            record.record_date.format("%Y-%m-%d")
        );
    }

    match book.selected() {
        Some(record) => println!("\nSelected: {}", record.name),
        None => println!("\nNo grade selected"),
    }

    println!("\nHistory:");
    for entry in book.history().entries() {
        println!("  {entry}");
    }

    println!("\n=== Example Complete ===");
    Ok(())
}
