//!
//! Tests for the marker-delimited CSV block parser.
//!

use crate::issue::Issue;

const OUTPUT: &str = r#"COMPILER_ID:clang-18.1.3
Benchmarking 4 enums with the AUTO policy...
Color: done
=== CSV RESULTS ===
enum,policy,workload,mean_ns,p90_ns
Color,AUTO,lookup,25,30
Color,AUTO,iterate,12.5,14.75
Flags,AUTO,lookup,7.25,9
"#;

#[test]
fn run_id_and_records() {
    let parsed = super::parse(OUTPUT, "enchantum_bench_auto");

    assert_eq!(parsed.run_id.as_deref(), Some("clang-18.1.3"));
    assert!(parsed.issues.is_empty(), "{:?}", parsed.issues);
    assert_eq!(parsed.records.len(), 3);

    let record = &parsed.records[1];
    assert_eq!(record.subject, "Color");
    assert_eq!(record.variant, "AUTO");
    assert_eq!(record.context, "iterate");
    assert_eq!(record.mean, 12.5);
    assert_eq!(record.p90, Some(14.75));
}

#[test]
fn header_is_optional() {
    let output = "=== CSV RESULTS ===\nColor,NAIVE,lookup,100,120\n";
    let parsed = super::parse(output, "stdin");

    assert_eq!(parsed.run_id, None);
    assert_eq!(parsed.records.len(), 1);
    assert_eq!(parsed.records[0].mean, 100.0);
}

#[test]
fn short_row_is_dropped() {
    let output = "=== CSV RESULTS ===\nA_0,NAIVE,lookup,1,2\nA_0,AUTO\nA_1,NAIVE,lookup,3,4\n";
    let parsed = super::parse(output, "stdin");

    assert_eq!(parsed.records.len(), 2);
    assert_eq!(parsed.records[0].subject, "A_0");
    assert_eq!(parsed.records[1].subject, "A_1");
    assert_eq!(parsed.issues.len(), 1);
    assert!(matches!(
        &parsed.issues[0],
        Issue::MalformedRow { line, .. } if line == "A_0,AUTO"
    ));
}

#[test]
fn non_numeric_row_is_dropped() {
    let output = "=== CSV RESULTS ===\nA,NAIVE,lookup,fast,2\nB,NAIVE,lookup,1,inf\nC,NAIVE,lookup,1,2\n";
    let parsed = super::parse(output, "stdin");

    assert_eq!(parsed.records.len(), 1);
    assert_eq!(parsed.records[0].subject, "C");
    assert_eq!(parsed.issues.len(), 2);
}

#[test]
fn blank_lines_and_extra_fields_are_tolerated() {
    let output = "=== CSV RESULTS ===\n\n  enum,policy,workload,mean_ns,p90_ns\r\n\r\n A , AUTO , lookup , 1.5 , 2 , extra\r\n";
    let parsed = super::parse(output, "stdin");

    assert!(parsed.issues.is_empty(), "{:?}", parsed.issues);
    assert_eq!(parsed.records.len(), 1);
    assert_eq!(parsed.records[0].subject, "A");
    assert_eq!(parsed.records[0].context, "lookup");
    assert_eq!(parsed.records[0].p90, Some(2.0));
}

#[test]
fn missing_section_is_soft() {
    let parsed = super::parse("COMPILER_ID:gcc-13\nno results today\n", "enchantum_bench_naive");

    assert_eq!(parsed.run_id.as_deref(), Some("gcc-13"));
    assert!(parsed.records.is_empty());
    assert_eq!(
        parsed.issues,
        vec![Issue::MissingSection {
            origin: "enchantum_bench_naive".to_owned()
        }]
    );
}

#[test]
fn empty_run_id_is_ignored() {
    assert_eq!(super::run_id("COMPILER_ID:   \n"), None);
    assert_eq!(
        super::run_id("noise\n  COMPILER_ID: msvc-19.40 \nCOMPILER_ID:other\n").as_deref(),
        Some("msvc-19.40")
    );
}

#[test]
fn round_trip() {
    let rows = "Color,NAIVE,lookup,100,120\nColor,AUTO,lookup,25,30.5\nFlags,LEN_FIRST,,0.125,7\n";
    let output = format!("{}\n{}\n{rows}", super::SECTION_MARKER, super::HEADER);

    let parsed = super::parse(output.as_str(), "stdin");
    let csv = crate::output::csv::Csv::from(parsed.records.as_slice()).content;

    assert_eq!(csv, format!("{}\n{rows}", super::HEADER));
}

#[test]
fn round_trip_keeps_number_spelling() {
    let rows = "Color,NAIVE,lookup,100.0,120.50\nColor,AUTO,lookup,1e3,30\nFlags,AUTO,,0.000,7.0\n";
    let output = format!("{}\n{rows}", super::SECTION_MARKER);

    let parsed = super::parse(output.as_str(), "stdin");
    let csv = crate::output::csv::Csv::from(parsed.records.as_slice()).content;

    assert_eq!(parsed.records[1].mean, 1000.0);
    assert_eq!(csv, format!("{}\n{rows}", super::HEADER));
}

#[test]
fn round_trip_trims_fields() {
    let output = format!(
        "{}\n Color , AUTO , lookup , 25.50 , 3.0e1 \n",
        super::SECTION_MARKER
    );

    let parsed = super::parse(output.as_str(), "stdin");
    let csv = crate::output::csv::Csv::from(parsed.records.as_slice()).content;

    assert_eq!(csv, format!("{}\nColor,AUTO,lookup,25.50,3.0e1\n", super::HEADER));
}
