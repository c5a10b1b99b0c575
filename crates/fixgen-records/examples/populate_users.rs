//! Example: generate a batch of user records as JSON lines.
//!
//! Declares a user record with independent, composite, and dependent
//! fields, then generates a bounded run and prints one JSON object per
//! line — ready to pipe into a fixture loader.
//!
//! Run with: cargo run -p fixgen-records --example populate_users

use chrono::{TimeZone, Utc};
use fixgen_core::{DependentCallable, DistributionFactory, Factory, ListFactory, ValueMap};
use fixgen_generators::{CountingFactory, PatternFactory, RandomDateFactory, RandomInteger, UuidFactory};
use fixgen_records::RecordFactory;
use serde_json::json;

fn main() -> anyhow::Result<()> {
    let signup_start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    let signup_end = Utc.with_ymd_and_hms(2024, 12, 31, 0, 0, 0).unwrap();

    let users = RecordFactory::builder()
        .field("id", UuidFactory::new())
        .field("seq", CountingFactory::new(1))
        .field("username", PatternFactory::new("user_{index}"))
        .field("age", RandomInteger::new(18, 80).seed(42))
        .field(
            "signed_up",
            RandomDateFactory::new(signup_start, signup_end).seed(42),
        )
        .field(
            "plan",
            DistributionFactory::builder()
                .value("free", 70)
                .value("pro", 25)
                .value("enterprise", 5)
                .seed(42)
                .build()?,
        )
        .field("scores", ListFactory::new(RandomInteger::new(0, 100).seed(7), 3))
        .dependent(
            "email",
            DependentCallable::new(
                |deps: &ValueMap| {
                    json!(format!("{}@example.com", deps["username"].as_str().unwrap()))
                },
                ["username"],
            ),
        )
        .build()?;

    let amount = 10;
    println!("generating {amount} user records:");
    for record in users.generate(amount) {
        println!("{}", serde_json::to_string(&record?)?);
    }

    Ok(())
}
