//! End-to-end tests combining records, leaf generators, and composites.

use fixgen_core::{
    ClonedField, DependentCallable, DistributionFactory, Factory, ListFactory, ValueMap,
};
use fixgen_generators::{CountingFactory, PatternFactory, RandomInteger, UuidFactory};
use fixgen_records::RecordFactory;
use serde_json::json;

#[test]
fn sums_track_counters_across_records() {
    let template = RecordFactory::builder()
        .field("x", CountingFactory::new(100))
        .field("y", CountingFactory::new(1))
        .dependent(
            "sum",
            DependentCallable::new(
                |deps: &ValueMap| json!(deps["x"].as_i64().unwrap() + deps["y"].as_i64().unwrap()),
                ["x", "y"],
            ),
        )
        .build()
        .unwrap();

    let records = template.generate(4).values().unwrap();
    let got: Vec<(i64, i64, i64)> = records
        .iter()
        .map(|r| {
            (
                r["x"].as_i64().unwrap(),
                r["y"].as_i64().unwrap(),
                r["sum"].as_i64().unwrap(),
            )
        })
        .collect();

    assert_eq!(
        got,
        vec![(100, 1, 101), (101, 2, 103), (102, 3, 105), (103, 4, 107)]
    );
}

#[test]
fn cloned_field_duplicates_its_sibling() {
    let template = RecordFactory::builder()
        .field("id", UuidFactory::new())
        .dependent("cloned_id", ClonedField::new("id"))
        .build()
        .unwrap();

    for record in template.generate(5).values().unwrap() {
        assert_eq!(record["cloned_id"], record["id"]);
    }
}

#[test]
fn composites_work_as_record_fields() {
    let template = RecordFactory::builder()
        .field("name", PatternFactory::new("user_{index}"))
        .field("scores", ListFactory::new(CountingFactory::new(1), 3))
        .field(
            "plan",
            DistributionFactory::builder()
                .value("free", 50)
                .value("paid", 50)
                .seed(11)
                .build()
                .unwrap(),
        )
        .build()
        .unwrap();

    let records = template.generate(4).values().unwrap();
    assert_eq!(records.len(), 4);

    assert_eq!(records[0]["name"], json!("user_0"));
    assert_eq!(records[0]["scores"], json!([1, 2, 3]));
    assert_eq!(records[3]["scores"], json!([10, 11, 12]));

    let paid = records.iter().filter(|r| r["plan"] == json!("paid")).count();
    let free = records.iter().filter(|r| r["plan"] == json!("free")).count();
    assert_eq!(paid, 2);
    assert_eq!(free, 2);
}

#[test]
fn record_templates_generate_independent_runs() {
    let template = RecordFactory::builder()
        .field("n", CountingFactory::new(0))
        .field("age", RandomInteger::new(18, 80).seed(42))
        .build()
        .unwrap();

    let first = template.generate(3).values().unwrap();
    let second = template.generate(3).values().unwrap();

    // Clones carry the template's configuration, so both runs restart.
    assert_eq!(first, second);
    assert_eq!(first[0]["n"], json!(0));
    assert_eq!(first[2]["n"], json!(2));
}

#[test]
fn nested_records_produce_nested_objects() {
    let address = RecordFactory::builder()
        .field("street", PatternFactory::new("{index} Main St"))
        .field("zip", RandomInteger::new(10000, 99999).seed(7))
        .build()
        .unwrap();

    let template = RecordFactory::builder()
        .field("id", CountingFactory::new(1))
        .field("address", address)
        .build()
        .unwrap();

    let records = template.generate(2).values().unwrap();
    assert_eq!(records[0]["address"]["street"], json!("0 Main St"));
    assert_eq!(records[1]["address"]["street"], json!("1 Main St"));
    assert!(records[1]["address"]["zip"].is_i64());
}

#[test]
fn progress_reports_during_a_run() {
    let template = RecordFactory::builder()
        .field("id", CountingFactory::new(1))
        .build()
        .unwrap();

    let mut run = template.generate(4);
    assert_eq!(run.percent_complete(), 0.0);
    run.next().unwrap().unwrap();
    assert_eq!(run.percent_complete(), 25.0);
    run.by_ref().for_each(drop);
    assert_eq!(run.percent_complete(), 100.0);
}
